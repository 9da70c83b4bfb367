use clap::{Parser, Subcommand};

use attest_client::constants::{DEFAULT_IDENTITY_PATH, DEFAULT_PROGRAM_ID, DEFAULT_RPC_URL};

#[derive(Parser, Debug, Clone)]
#[command(name = "attest", version, about = "Smoke-test client for the review registry program")]
pub struct Cli {
    /// Emit JSON output on stdout.
    #[arg(long, global = true)]
    pub json: bool,

    /// RPC endpoint of the target cluster.
    #[arg(long, global = true, default_value = DEFAULT_RPC_URL)]
    pub rpc_url: String,

    /// Review program id (base58).
    #[arg(long, global = true, default_value = DEFAULT_PROGRAM_ID)]
    pub program_id: String,

    /// Explorer cluster for the confirmation link: localnet|devnet|testnet|mainnet-beta
    #[arg(long, global = true, default_value = "localnet")]
    pub cluster: String,

    /// Path of the persisted identity file.
    #[arg(long, global = true, default_value = DEFAULT_IDENTITY_PATH)]
    pub identity: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Encode a review, derive its PDA, and submit it for confirmation.
    Submit {
        /// Subject id under review. Defaults to a fresh random id so repeated
        /// runs target uninitialized review accounts.
        #[arg(long)]
        subject: Option<String>,

        /// Declared output count.
        #[arg(long, default_value_t = 5)]
        outputs: u8,

        /// Free-form proof annotation.
        #[arg(long, default_value = "smoke run")]
        label: String,

        /// Top-up threshold in lamports.
        #[arg(long)]
        min_balance: Option<u64>,

        /// Faucet top-up amount in lamports.
        #[arg(long)]
        top_up: Option<u64>,
    },

    /// Derive the review PDA for a subject without touching the network.
    Derive {
        subject: String,

        /// Reviewer public key (base58). Defaults to the stored identity.
        #[arg(long)]
        reviewer: Option<String>,
    },

    /// Run environment checks (identity file, program id, RPC reachability).
    Doctor,
}
