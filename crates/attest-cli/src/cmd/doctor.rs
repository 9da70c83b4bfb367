use anyhow::Result;
use serde::Serialize;
use solana_client::rpc_client::RpcClient;

use attest_client::config::validate_config;
use attest_client::identity::{FsIdentityStore, IdentityStore};

use crate::args::Cli;
use crate::output;

#[derive(Debug, Serialize)]
pub struct Check {
    pub name: &'static str,
    pub ok: bool,
    pub note: String,
}

#[derive(Debug, Serialize)]
pub struct DoctorOut {
    pub ok: bool,
    pub checks: Vec<Check>,
}

pub fn run(cli: &Cli) -> Result<()> {
    let mut checks = Vec::new();

    match super::client_config(cli).and_then(|c| validate_config(&c).map_err(Into::into)) {
        Ok(()) => checks.push(Check {
            name: "config",
            ok: true,
            note: format!("program {} via {}", cli.program_id, cli.rpc_url),
        }),
        Err(err) => checks.push(Check {
            name: "config",
            ok: false,
            note: err.to_string(),
        }),
    }

    let store = FsIdentityStore::new(&cli.identity);
    checks.push(match store.load() {
        Ok(Some(bytes)) => Check {
            name: "identity",
            ok: bytes.len() == attest_client::constants::KEYPAIR_BYTES,
            note: format!("{} ({} bytes)", cli.identity, bytes.len()),
        },
        Ok(None) => Check {
            name: "identity",
            ok: true,
            note: format!("{} absent; will be generated on first submit", cli.identity),
        },
        Err(err) => Check {
            name: "identity",
            ok: false,
            note: err.to_string(),
        },
    });

    checks.push(match RpcClient::new(cli.rpc_url.clone()).get_version() {
        Ok(version) => Check {
            name: "rpc",
            ok: true,
            note: format!("{} is up (solana {})", cli.rpc_url, version.solana_core),
        },
        Err(err) => Check {
            name: "rpc",
            ok: false,
            note: format!("{}: {err}", cli.rpc_url),
        },
    });

    let ok = checks.iter().all(|c| c.ok);
    if output::is_json() {
        output::print(&DoctorOut { ok, checks })?;
    } else {
        for check in &checks {
            let mark = if check.ok { "ok  " } else { "FAIL" };
            output::line(&format!("{mark} {:<8} {}", check.name, check.note));
        }
    }

    if ok {
        Ok(())
    } else {
        Err(anyhow::anyhow!("one or more doctor checks failed"))
    }
}
