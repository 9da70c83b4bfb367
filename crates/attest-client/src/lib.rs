//! attest-client
//!
//! This crate provides a small, focused Rust client for smoke-testing the
//! review registry program on a Solana cluster.
//!
//! It includes:
//! - an explicit identity bootstrap (`IdentityStore` + `obtain_identity`)
//! - a best-effort funding guarantor backed by the cluster faucet
//! - the versioned binary codec for review instruction payloads
//! - deterministic program-address derivation (bump search)
//! - transaction assembly, submission and confirmation
//! - a sequential pipeline wiring all of the above together
//!
//! Note: The on-chain program id is expected to be provided by the consumer.
//! The default here is a placeholder constant for local development.

pub mod codec;
pub mod config;
pub mod constants;
pub mod error;
pub mod funding;
pub mod identity;
pub mod ledger;
pub mod pda;
pub mod pipeline;
pub mod report;
pub mod submit;

pub use crate::error::{ClientError, ClientResult};

/// Convenience re-exports.
pub mod prelude {
    pub use crate::codec::ReviewInstruction;
    pub use crate::config::{validate_config, ClientConfig, FundingConfig};
    pub use crate::constants::{default_program_id, PAYLOAD_CAPACITY};
    pub use crate::funding::ensure_funded;
    pub use crate::identity::{obtain_identity, FsIdentityStore, IdentityStore};
    pub use crate::ledger::{LedgerNode, RpcLedger};
    pub use crate::pda::{derive_review_address, review_seeds, ReviewPdas};
    pub use crate::pipeline::{ReviewReceipt, ReviewRequest};
    pub use crate::report::{explorer_url, Cluster};
    pub use crate::submit::submit_review;
    pub use crate::{ClientError, ClientResult};
}
