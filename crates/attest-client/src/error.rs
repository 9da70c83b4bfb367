//! Error taxonomy for the review client.
//!
//! Codec errors (`BufferTooSmall`, `TruncatedPayload`) are recoverable by the
//! caller adjusting capacity or input. Everything else is terminal for the
//! current invocation; whether to retry the whole pipeline is caller policy.

use thiserror::Error;

pub type ClientResult<T> = Result<T, ClientError>;

#[derive(Debug, Error)]
pub enum ClientError {
    /// Persisted secret material exists but cannot be turned into a keypair.
    #[error("malformed identity: {0}")]
    MalformedIdentity(String),

    /// The key-store collaborator failed to read or write secret material.
    #[error("key store: {0}")]
    KeyStore(String),

    /// The encoded record does not fit the caller-supplied capacity.
    /// Detected before any byte is written.
    #[error("encoded payload needs {needed} bytes but capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// A length prefix claims more bytes than remain in the payload.
    #[error("payload truncated: `{field}` overruns the remaining {remaining} bytes")]
    TruncatedPayload {
        field: &'static str,
        remaining: usize,
    },

    /// A string field decoded to bytes that are not valid UTF-8.
    #[error("payload field `{0}` is not valid utf-8")]
    InvalidPayloadText(&'static str),

    /// Bytes remain after the last field; the caller likely forgot to
    /// truncate the buffer to the used length.
    #[error("payload has {0} trailing bytes after the last field")]
    TrailingBytes(usize),

    /// A derivation seed exceeds the 32-byte per-seed limit.
    #[error("seed of {0} bytes exceeds the 32-byte limit")]
    SeedTooLong(usize),

    /// The seed set (plus the bump byte) exceeds the 16-seed limit.
    #[error("{0} seeds plus the bump exceed the 16-seed limit")]
    TooManySeeds(usize),

    /// Every bump from 255 down to 0 produced an on-curve candidate.
    /// Indicates a seed/program mismatch, not a retriable condition.
    #[error("no off-curve address found for the given seeds and program")]
    NoValidBumpFound,

    /// The cluster rejected the transaction before or at inclusion.
    #[error("transaction rejected: {0}")]
    SubmissionRejected(String),

    /// The transaction was submitted but confirmation was not observed
    /// within the cluster's default wait policy.
    #[error("transaction submitted but not confirmed within the default wait")]
    ConfirmationTimeout,

    /// Transport-level RPC failure (connection refused, malformed response).
    #[error("rpc: {0}")]
    Rpc(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
