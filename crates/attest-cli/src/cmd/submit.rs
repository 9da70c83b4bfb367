use anyhow::{Context, Result};
use serde::Serialize;
use uuid::Uuid;

use attest_client::identity::FsIdentityStore;
use attest_client::ledger::RpcLedger;
use attest_client::pipeline::{self, ReviewRequest};

use crate::args::Cli;
use crate::output;

#[derive(Debug, Serialize)]
pub struct SubmitOut {
    pub ok: bool,
    pub signature: String,
    pub reviewer: String,
    pub review_address: String,
    pub bump: u8,
    pub payload_len: usize,
    pub explorer: String,
}

pub fn run(
    cli: &Cli,
    subject: Option<&str>,
    outputs: u8,
    label: &str,
    min_balance: Option<u64>,
    top_up: Option<u64>,
) -> Result<()> {
    let mut config = super::client_config(cli)?;
    if let Some(lamports) = min_balance {
        config.funding.min_balance_lamports = lamports;
    }
    if let Some(lamports) = top_up {
        config.funding.top_up_lamports = lamports;
    }

    let subject = subject
        .map(str::to_string)
        .unwrap_or_else(generated_subject);
    let store = FsIdentityStore::new(&cli.identity);
    let ledger = RpcLedger::new(config.rpc_url.clone());

    let request = ReviewRequest {
        subject_hash: subject,
        output_count: outputs,
        proof_label: label.to_string(),
    };
    tracing::debug!(subject = %request.subject_hash, rpc = %config.rpc_url, "starting review pipeline");
    let receipt =
        pipeline::run(&store, &ledger, &config, request).context("review pipeline failed")?;

    if output::is_json() {
        output::print(&SubmitOut {
            ok: true,
            signature: receipt.signature.to_string(),
            reviewer: receipt.reviewer.to_string(),
            review_address: receipt.review_address.to_string(),
            bump: receipt.bump,
            payload_len: receipt.payload_len,
            explorer: receipt.explorer,
        })?;
    } else {
        output::success(&format!("review confirmed: {}", receipt.signature));
        output::line(&format!(
            "review account {} (bump {}), payload {} bytes",
            receipt.review_address, receipt.bump, receipt.payload_len
        ));
        output::line(&receipt.explorer);
    }
    Ok(())
}

/// Fresh subject id per run so the derived review account is uninitialized.
/// Kept short: the subject doubles as a PDA seed, capped at 32 bytes.
fn generated_subject() -> String {
    let id = Uuid::new_v4().simple().to_string();
    format!("subject-{}", &id[..12])
}
