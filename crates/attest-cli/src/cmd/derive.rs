use anyhow::{anyhow, Result};
use serde::Serialize;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::Signer;

use attest_client::identity::{obtain_identity, FsIdentityStore};
use attest_client::pda::pdas_for_review;

use crate::args::Cli;
use crate::output;

#[derive(Debug, Serialize)]
pub struct DeriveOut {
    pub reviewer: String,
    pub subject: String,
    pub review_address: String,
    pub bump: u8,
}

/// Offline PDA preview. Never touches the network; reads the identity file
/// only when no `--reviewer` key is given.
pub fn run(cli: &Cli, subject: &str, reviewer: Option<&str>) -> Result<()> {
    let config = super::client_config(cli)?;

    let reviewer: Pubkey = match reviewer {
        Some(raw) => raw
            .parse()
            .map_err(|_| anyhow!("invalid reviewer pubkey: {raw}"))?,
        None => obtain_identity(&FsIdentityStore::new(&cli.identity))?.pubkey(),
    };

    let pdas = pdas_for_review(&config.program_id, &reviewer, subject)?;
    let (review_address, bump) = pdas.review;

    if output::is_json() {
        output::print(&DeriveOut {
            reviewer: reviewer.to_string(),
            subject: subject.to_string(),
            review_address: review_address.to_string(),
            bump,
        })?;
    } else {
        output::line(&format!("reviewer:       {reviewer}"));
        output::line(&format!("subject:        {subject}"));
        output::line(&format!("review address: {review_address} (bump {bump})"));
    }
    Ok(())
}
