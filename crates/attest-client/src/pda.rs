//! Deterministic program-address derivation for review accounts.
//!
//! A review account lives at the PDA derived from the reviewer's public key
//! and the subject hash. The bump search walks candidates from 255 down to 0
//! and keeps the first off-curve result, so the address is control-only: no
//! private key exists for it and only the program may write to it.
//!
//! Derivation is pure and never touches the network.

use solana_program::pubkey::{Pubkey, PubkeyError, MAX_SEEDS, MAX_SEED_LEN};

use crate::error::{ClientError, ClientResult};

/// A derived review address together with the inputs that produced it.
#[derive(Debug, Clone)]
pub struct ReviewPdas {
    pub reviewer: Pubkey,
    pub subject_hash: String,
    pub review: (Pubkey, u8),
}

/// Canonical seed set for a review account: reviewer key bytes, then the
/// subject hash bytes. Order matters; the program derives the same way.
pub fn review_seeds<'a>(reviewer: &'a Pubkey, subject_hash: &'a str) -> [&'a [u8]; 2] {
    [reviewer.as_ref(), subject_hash.as_bytes()]
}

/// Find the program-owned address for `seeds` under `program_id`.
///
/// Searches bumps 255..=0, appending the candidate bump byte to the seed
/// set. On-curve candidates continue the search; the first off-curve hash
/// wins and is returned with its bump. Exhausting the search space is
/// `NoValidBumpFound` and indicates a seed/program mismatch.
pub fn derive_review_address(seeds: &[&[u8]], program_id: &Pubkey) -> ClientResult<(Pubkey, u8)> {
    // The bump occupies one of the seed slots.
    if seeds.len() >= MAX_SEEDS {
        return Err(ClientError::TooManySeeds(seeds.len()));
    }
    if let Some(long) = seeds.iter().find(|s| s.len() > MAX_SEED_LEN) {
        return Err(ClientError::SeedTooLong(long.len()));
    }

    for bump in (0u8..=255).rev() {
        let bump_seed = [bump];
        let mut candidate: Vec<&[u8]> = Vec::with_capacity(seeds.len() + 1);
        candidate.extend_from_slice(seeds);
        candidate.push(&bump_seed);

        match Pubkey::create_program_address(&candidate, program_id) {
            Ok(address) => return Ok((address, bump)),
            // Candidate fell on the ed25519 curve; try the next bump.
            Err(PubkeyError::InvalidSeeds) => continue,
            Err(PubkeyError::MaxSeedLengthExceeded) => {
                return Err(ClientError::TooManySeeds(seeds.len()))
            }
            Err(err) => return Err(ClientError::Rpc(err.to_string())),
        }
    }

    Err(ClientError::NoValidBumpFound)
}

/// Derive the PDA for a reviewer/subject pair.
pub fn pdas_for_review(
    program_id: &Pubkey,
    reviewer: &Pubkey,
    subject_hash: &str,
) -> ClientResult<ReviewPdas> {
    let seeds = review_seeds(reviewer, subject_hash);
    let review = derive_review_address(&seeds, program_id)?;
    Ok(ReviewPdas {
        reviewer: *reviewer,
        subject_hash: subject_hash.to_string(),
        review,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use solana_sdk::signature::{Keypair, Signer};

    fn program_id() -> Pubkey {
        crate::constants::default_program_id()
    }

    #[test]
    fn derivation_is_deterministic() {
        let reviewer = Keypair::new().pubkey();
        let seeds = review_seeds(&reviewer, "X-42");
        let first = derive_review_address(&seeds, &program_id()).unwrap();
        let second = derive_review_address(&seeds, &program_id()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn matches_sdk_find_program_address() {
        let reviewer = Keypair::new().pubkey();
        let seeds = review_seeds(&reviewer, "X-42");
        let ours = derive_review_address(&seeds, &program_id()).unwrap();
        let sdk = Pubkey::find_program_address(&seeds, &program_id());
        assert_eq!(ours, sdk);
    }

    #[test]
    fn subject_hash_changes_the_address() {
        let reviewer = Keypair::new().pubkey();
        let a = derive_review_address(&review_seeds(&reviewer, "X-42"), &program_id()).unwrap();
        let b = derive_review_address(&review_seeds(&reviewer, "X-43"), &program_id()).unwrap();
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn reviewer_changes_the_address() {
        let a_key = Keypair::new().pubkey();
        let b_key = Keypair::new().pubkey();
        let a = derive_review_address(&review_seeds(&a_key, "X-42"), &program_id()).unwrap();
        let b = derive_review_address(&review_seeds(&b_key, "X-42"), &program_id()).unwrap();
        assert_ne!(a.0, b.0);
    }

    #[test]
    fn derived_address_is_off_curve() {
        let reviewer = Keypair::new().pubkey();
        let (address, _) =
            derive_review_address(&review_seeds(&reviewer, "X-42"), &program_id()).unwrap();
        assert!(!address.is_on_curve());
    }

    #[test]
    fn oversized_seed_is_rejected_up_front() {
        let reviewer = Keypair::new().pubkey();
        let long = "s".repeat(MAX_SEED_LEN + 1);
        let seeds = review_seeds(&reviewer, &long);
        let err = derive_review_address(&seeds, &program_id()).unwrap_err();
        assert_matches!(err, ClientError::SeedTooLong(n) if n == MAX_SEED_LEN + 1);
    }

    #[test]
    fn full_seed_set_leaves_no_room_for_bump() {
        let seed: &[u8] = b"s";
        let seeds = vec![seed; MAX_SEEDS];
        let err = derive_review_address(&seeds, &program_id()).unwrap_err();
        assert_matches!(err, ClientError::TooManySeeds(n) if n == MAX_SEEDS);
    }
}
