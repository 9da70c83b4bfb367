//! Configuration for the review client.
//!
//! The library does not read environment variables. All configuration is
//! provided explicitly by the caller (CLI flags, test fixtures), which keeps
//! the pipeline deterministic and testable.

use solana_sdk::pubkey::Pubkey;

use crate::constants::{
    default_program_id, DEFAULT_MIN_BALANCE_LAMPORTS, DEFAULT_RPC_URL, DEFAULT_TOP_UP_LAMPORTS,
    PAYLOAD_CAPACITY,
};
use crate::error::{ClientError, ClientResult};
use crate::report::Cluster;

/// Full client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub rpc_url: String,
    pub program_id: Pubkey,
    pub cluster: Cluster,
    pub funding: FundingConfig,
    /// Buffer capacity allocated for the encoded payload.
    pub payload_capacity: usize,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            rpc_url: DEFAULT_RPC_URL.to_string(),
            program_id: default_program_id(),
            cluster: Cluster::Localnet,
            funding: FundingConfig::default(),
            payload_capacity: PAYLOAD_CAPACITY,
        }
    }
}

/// Funding thresholds. Both values are explicit so the balance check and the
/// top-up amount never drift apart silently.
#[derive(Debug, Clone, Copy)]
pub struct FundingConfig {
    /// Request a top-up when the balance is strictly below this.
    pub min_balance_lamports: u64,
    /// Amount requested from the faucet.
    pub top_up_lamports: u64,
}

impl Default for FundingConfig {
    fn default() -> Self {
        Self {
            min_balance_lamports: DEFAULT_MIN_BALANCE_LAMPORTS,
            top_up_lamports: DEFAULT_TOP_UP_LAMPORTS,
        }
    }
}

/// Validate a full configuration object.
pub fn validate_config(config: &ClientConfig) -> ClientResult<()> {
    if config.rpc_url.trim().is_empty() {
        return Err(ClientError::InvalidConfig(
            "rpc_url must not be empty".into(),
        ));
    }

    if config.program_id == Pubkey::default() {
        return Err(ClientError::InvalidConfig(
            "program_id must not be the default (all-zero) key".into(),
        ));
    }

    if config.payload_capacity == 0 {
        return Err(ClientError::InvalidConfig(
            "payload_capacity must be greater than zero".into(),
        ));
    }

    if config.funding.min_balance_lamports > 0 && config.funding.top_up_lamports == 0 {
        return Err(ClientError::InvalidConfig(
            "top_up_lamports must be non-zero when a minimum balance is set".into(),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ClientConfig::default();
        validate_config(&config).unwrap();
    }

    #[test]
    fn empty_rpc_url_detected() {
        let mut config = ClientConfig::default();
        config.rpc_url = "  ".to_string();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_capacity_detected() {
        let mut config = ClientConfig::default();
        config.payload_capacity = 0;
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn zero_top_up_with_threshold_detected() {
        let mut config = ClientConfig::default();
        config.funding.top_up_lamports = 0;
        assert!(validate_config(&config).is_err());
    }
}
