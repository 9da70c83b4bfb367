use anyhow::{anyhow, Result};

use attest_client::config::ClientConfig;
use attest_client::report::Cluster;

use crate::args::{Cli, Command};

mod derive;
mod doctor;
mod submit;

/// Shared flag-to-config translation.
fn client_config(cli: &Cli) -> Result<ClientConfig> {
    let program_id = cli
        .program_id
        .parse()
        .map_err(|_| anyhow!("invalid program id: {}", cli.program_id))?;
    let cluster: Cluster = cli.cluster.parse()?;

    Ok(ClientConfig {
        rpc_url: cli.rpc_url.clone(),
        program_id,
        cluster,
        ..ClientConfig::default()
    })
}

pub fn dispatch(cli: Cli) -> Result<()> {
    match cli.command.clone() {
        Command::Submit {
            subject,
            outputs,
            label,
            min_balance,
            top_up,
        } => submit::run(&cli, subject.as_deref(), outputs, &label, min_balance, top_up),
        Command::Derive { subject, reviewer } => derive::run(&cli, &subject, reviewer.as_deref()),
        Command::Doctor => doctor::run(&cli),
    }
}
