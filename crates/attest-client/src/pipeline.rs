//! Sequential review pipeline.
//!
//! identity → funding → encode → derive → submit → report. One logical
//! thread, blocking network calls, no internal retry. Retrying a failed
//! submission (re-funding included) is a caller decision.

use serde::{Deserialize, Serialize};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Signature, Signer};
use tracing::info;

use crate::codec::ReviewInstruction;
use crate::config::{validate_config, ClientConfig};
use crate::error::ClientResult;
use crate::funding::ensure_funded;
use crate::identity::{obtain_identity, IdentityStore};
use crate::ledger::LedgerNode;
use crate::pda::{derive_review_address, review_seeds};
use crate::report::explorer_url;
use crate::submit::submit_review;

/// What the caller wants reviewed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRequest {
    pub subject_hash: String,
    pub output_count: u8,
    pub proof_label: String,
}

/// Terminal outcome of a successful pipeline run.
#[derive(Debug, Clone)]
pub struct ReviewReceipt {
    pub signature: Signature,
    pub reviewer: Pubkey,
    pub review_address: Pubkey,
    pub bump: u8,
    pub payload_len: usize,
    /// Human-readable confirmation reference.
    pub explorer: String,
}

/// Run the whole pipeline against the given collaborators.
pub fn run(
    store: &dyn IdentityStore,
    ledger: &dyn LedgerNode,
    config: &ClientConfig,
    request: ReviewRequest,
) -> ClientResult<ReviewReceipt> {
    validate_config(config)?;

    let identity = obtain_identity(store)?;
    let reviewer = identity.pubkey();

    ensure_funded(ledger, &reviewer, &config.funding)?;

    let record = ReviewInstruction::submit(
        request.subject_hash,
        request.output_count,
        request.proof_label,
    );
    let (buffer, used) = record.encode(config.payload_capacity)?;
    let payload = buffer[..used].to_vec();

    let seeds = review_seeds(&reviewer, &record.subject_hash);
    let (review_address, bump) = derive_review_address(&seeds, &config.program_id)?;
    info!(%review_address, bump, subject = %record.subject_hash, "derived review address");

    let signature = submit_review(&identity, &config.program_id, payload, &review_address, ledger)?;
    info!(%signature, "review confirmed");

    Ok(ReviewReceipt {
        explorer: explorer_url(&signature, config.cluster),
        signature,
        reviewer,
        review_address,
        bump,
        payload_len: used,
    })
}
