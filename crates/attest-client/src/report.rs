//! Confirmation reporting.
//!
//! Pure formatting of a confirmed transaction signature into the explorer
//! reference a human can follow.

use std::fmt;
use std::str::FromStr;

use solana_sdk::signature::Signature;

use crate::error::ClientError;

/// Cluster the explorer link should point at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cluster {
    Localnet,
    Devnet,
    Testnet,
    MainnetBeta,
}

impl Cluster {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Localnet => "localnet",
            Self::Devnet => "devnet",
            Self::Testnet => "testnet",
            Self::MainnetBeta => "mainnet-beta",
        }
    }

    /// Explorer `cluster` query value; mainnet is the explorer default.
    fn query(&self) -> Option<&'static str> {
        match self {
            Self::Localnet => Some("custom"),
            Self::Devnet => Some("devnet"),
            Self::Testnet => Some("testnet"),
            Self::MainnetBeta => None,
        }
    }
}

impl fmt::Display for Cluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Cluster {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "localnet" | "localhost" | "custom" => Ok(Self::Localnet),
            "devnet" => Ok(Self::Devnet),
            "testnet" => Ok(Self::Testnet),
            "mainnet" | "mainnet-beta" => Ok(Self::MainnetBeta),
            other => Err(ClientError::InvalidConfig(format!(
                "unknown cluster `{other}`"
            ))),
        }
    }
}

/// Explorer URL for a confirmed transaction.
pub fn explorer_url(signature: &Signature, cluster: Cluster) -> String {
    match cluster.query() {
        Some(query) => format!("https://explorer.solana.com/tx/{signature}?cluster={query}"),
        None => format!("https://explorer.solana.com/tx/{signature}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn devnet_url_carries_cluster_query() {
        let signature = Signature::default();
        let url = explorer_url(&signature, Cluster::Devnet);
        assert_eq!(
            url,
            format!("https://explorer.solana.com/tx/{signature}?cluster=devnet")
        );
    }

    #[test]
    fn mainnet_url_has_no_query() {
        let signature = Signature::default();
        let url = explorer_url(&signature, Cluster::MainnetBeta);
        assert!(!url.contains('?'));
        assert!(url.contains(&signature.to_string()));
    }

    #[test]
    fn cluster_parses_common_spellings() {
        assert_eq!("devnet".parse::<Cluster>().unwrap(), Cluster::Devnet);
        assert_eq!("Mainnet-Beta".parse::<Cluster>().unwrap(), Cluster::MainnetBeta);
        assert_eq!("localhost".parse::<Cluster>().unwrap(), Cluster::Localnet);
        assert!("moonnet".parse::<Cluster>().is_err());
    }
}
