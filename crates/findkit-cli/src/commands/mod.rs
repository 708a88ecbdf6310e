mod search;
mod version;

use std::time::Duration;

use findkit_core::{FindingService, ServiceConfig};
use serde_json::Value;

use crate::cli::{Cli, Command};
use crate::error::CliError;

/// What a command produced: a raw request body for `--dry-run`, or a
/// response document.
#[derive(Debug)]
pub enum Output {
    Body(String),
    Document(Value),
}

pub async fn run(cli: &Cli) -> Result<Output, CliError> {
    let config = resolve_config(cli, |name| std::env::var(name).ok())?;
    tracing::debug!(
        endpoint = config.endpoint(),
        global_id = %config.global_id(),
        wire_format = %config.wire_format(),
        "configuration resolved"
    );
    let service = FindingService::with_config(config);

    match &cli.command {
        Command::Advanced(args) => search::advanced(args, &service, cli.dry_run).await,
        Command::Keywords(args) => search::keywords(args, &service, cli.dry_run).await,
        Command::Category(args) => search::category(args, &service, cli.dry_run).await,
        Command::Version => version::run(&service, cli.dry_run).await,
    }
}

/// Environment settings with command-line flags layered on top.
fn resolve_config<F>(cli: &Cli, env: F) -> Result<ServiceConfig, CliError>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = ServiceConfig::from_lookup(|name| match (name, &cli.app_id) {
        ("FINDKIT_APP_ID", Some(app_id)) => Some(app_id.clone()),
        _ => env(name),
    })?;

    if cli.sandbox {
        config = config.with_sandbox();
    }
    if let Some(global_id) = cli.global_id {
        config = config.with_global_id(global_id);
    }
    if let Some(wire_format) = cli.wire_format {
        config = config.with_wire_format(wire_format);
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        if timeout_ms == 0 {
            return Err(CliError::Command(String::from(
                "--timeout-ms must be greater than zero",
            )));
        }
        config = config.with_timeout(Duration::from_millis(timeout_ms));
    }

    Ok(config)
}
