//! Best-effort funding guarantor.
//!
//! Funding is bootstrap, not a correctness requirement: a failed faucet call
//! is logged and swallowed, and the top-up is never awaited. Callers that
//! need a guaranteed balance before submission must poll it themselves.

use solana_sdk::pubkey::Pubkey;
use tracing::{debug, info, warn};

use crate::config::FundingConfig;
use crate::error::ClientResult;
use crate::ledger::LedgerNode;

/// Check `owner`'s balance and request one top-up if it is strictly below
/// the configured threshold. Returns the balance that was observed.
///
/// Balance-query failures propagate; faucet failures do not.
pub fn ensure_funded(
    ledger: &dyn LedgerNode,
    owner: &Pubkey,
    config: &FundingConfig,
) -> ClientResult<u64> {
    let balance = ledger.balance(owner)?;
    debug!(%owner, balance, "current balance");

    if balance < config.min_balance_lamports {
        info!(
            balance,
            threshold = config.min_balance_lamports,
            top_up = config.top_up_lamports,
            "balance below threshold, requesting top-up"
        );
        if let Err(err) = ledger.request_top_up(owner, config.top_up_lamports) {
            warn!(%err, "top-up request failed; continuing without funding");
        }
    }

    Ok(balance)
}
