//! Constants shared between the review program and its clients.
//!
//! Keep these stable because they affect payload layout and PDA derivation.

use solana_sdk::native_token::LAMPORTS_PER_SOL;
use solana_sdk::pubkey::Pubkey;

/// Instruction discriminant for submitting a review. The only variant the
/// program currently defines.
pub const VARIANT_SUBMIT_REVIEW: u8 = 0;

/// Buffer capacity allocated for an encoded review payload.
pub const PAYLOAD_CAPACITY: usize = 1000;

/// Expected width of a serialized keypair (32-byte secret + 32-byte public).
pub const KEYPAIR_BYTES: usize = 64;

/// Balance threshold below which the client asks the faucet for a top-up.
pub const DEFAULT_MIN_BALANCE_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Amount requested from the faucet on a low balance.
pub const DEFAULT_TOP_UP_LAMPORTS: u64 = LAMPORTS_PER_SOL;

/// Default program id (local development deployment).
///
/// Replace this with the deployed program id when available.
pub const DEFAULT_PROGRAM_ID: &str = "5m7eR6ZUsZkMfMp1KmiT3RXd6USQwPEDfeGnMgvRK5Yd";

/// Default RPC endpoint (local test validator).
pub const DEFAULT_RPC_URL: &str = "http://127.0.0.1:8899";

/// Default location of the persisted identity file.
pub const DEFAULT_IDENTITY_PATH: &str = ".attest/identity.json";

pub fn default_program_id() -> Pubkey {
    DEFAULT_PROGRAM_ID.parse().unwrap_or_else(|_| Pubkey::default())
}
