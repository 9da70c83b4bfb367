//! Transaction assembly and submission.
//!
//! The review program expects exactly three accounts, in this order:
//! 1. the reviewer (signer, read-only)
//! 2. the review PDA (writable, owned by the program)
//! 3. the system program (read-only)

use solana_program::instruction::{AccountMeta, Instruction};
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::error::ClientResult;
use crate::ledger::LedgerNode;

/// Build the single review instruction. `payload` must already be truncated
/// to its used length.
pub fn build_review_instruction(
    reviewer: &Pubkey,
    program_id: &Pubkey,
    review_address: &Pubkey,
    payload: Vec<u8>,
) -> Instruction {
    Instruction {
        program_id: *program_id,
        accounts: vec![
            AccountMeta::new_readonly(*reviewer, true),
            AccountMeta::new(*review_address, false),
            AccountMeta::new_readonly(solana_program::system_program::id(), false),
        ],
        data: payload,
    }
}

/// Wrap the instruction in a transaction, sign it, submit it, and block
/// until the cluster confirms it at the default commitment level.
///
/// Terminal per invocation: no internal retry on rejection or timeout.
pub fn submit_review(
    identity: &Keypair,
    program_id: &Pubkey,
    payload: Vec<u8>,
    review_address: &Pubkey,
    ledger: &dyn LedgerNode,
) -> ClientResult<Signature> {
    let reviewer = identity.pubkey();
    let instruction = build_review_instruction(&reviewer, program_id, review_address, payload);

    let blockhash = ledger.latest_blockhash()?;
    let transaction = Transaction::new_signed_with_payer(
        &[instruction],
        Some(&reviewer),
        &[identity],
        blockhash,
    );
    debug!(%reviewer, %review_address, "submitting review transaction");

    ledger.submit_and_confirm(&transaction)
}
