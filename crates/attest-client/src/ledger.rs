//! The network-connection collaborator.
//!
//! `LedgerNode` is the seam between the pipeline and the cluster: balance
//! queries, faucet top-ups, blockhash fetch, and submission. The real
//! implementation wraps the blocking RPC client; tests implement the trait
//! in memory.

use solana_client::client_error::{ClientError as RpcClientError, ClientErrorKind};
use solana_client::rpc_client::RpcClient;
use solana_client::rpc_request::RpcError;
use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signature;
use solana_sdk::transaction::Transaction;
use tracing::debug;

use crate::error::{ClientError, ClientResult};

/// Blocking view of the cluster used by the pipeline.
pub trait LedgerNode {
    /// Current balance in lamports.
    fn balance(&self, owner: &Pubkey) -> ClientResult<u64>;

    /// Ask the faucet to send `lamports` to `owner`.
    ///
    /// Non-waiting: returns once the request is accepted, without waiting for
    /// the top-up to land.
    fn request_top_up(&self, owner: &Pubkey, lamports: u64) -> ClientResult<()>;

    /// A recent blockhash to anchor a transaction to.
    fn latest_blockhash(&self) -> ClientResult<Hash>;

    /// Submit a signed transaction and block until the cluster confirms it
    /// at the default commitment level.
    fn submit_and_confirm(&self, transaction: &Transaction) -> ClientResult<Signature>;
}

/// RPC-backed ledger node.
pub struct RpcLedger {
    rpc: RpcClient,
}

impl RpcLedger {
    pub fn new(rpc_url: impl Into<String>) -> Self {
        Self {
            rpc: RpcClient::new(rpc_url.into()),
        }
    }

    pub fn from_rpc(rpc: RpcClient) -> Self {
        Self { rpc }
    }
}

impl LedgerNode for RpcLedger {
    fn balance(&self, owner: &Pubkey) -> ClientResult<u64> {
        self.rpc
            .get_balance(owner)
            .map_err(|err| ClientError::Rpc(err.to_string()))
    }

    fn request_top_up(&self, owner: &Pubkey, lamports: u64) -> ClientResult<()> {
        // Fire-and-forget: the airdrop signature is logged, never awaited.
        let signature = self
            .rpc
            .request_airdrop(owner, lamports)
            .map_err(|err| ClientError::Rpc(err.to_string()))?;
        debug!(%signature, lamports, "airdrop requested");
        Ok(())
    }

    fn latest_blockhash(&self) -> ClientResult<Hash> {
        self.rpc
            .get_latest_blockhash()
            .map_err(|err| ClientError::Rpc(err.to_string()))
    }

    fn submit_and_confirm(&self, transaction: &Transaction) -> ClientResult<Signature> {
        self.rpc
            .send_and_confirm_transaction(transaction)
            .map_err(classify_submit_error)
    }
}

/// Split submission failures into the rejected/timeout/transport taxonomy.
fn classify_submit_error(err: RpcClientError) -> ClientError {
    match err.kind() {
        ClientErrorKind::TransactionError(tx_err) => {
            ClientError::SubmissionRejected(tx_err.to_string())
        }
        ClientErrorKind::RpcError(RpcError::RpcResponseError { message, .. }) => {
            ClientError::SubmissionRejected(message.clone())
        }
        ClientErrorKind::RpcError(RpcError::ForUser(message))
            if message.contains("unable to confirm") =>
        {
            ClientError::ConfirmationTimeout
        }
        _ => ClientError::Rpc(err.to_string()),
    }
}
