//! santa-server CLI: serve the HTTP gateway, or run a one-shot draw.
//!
//! Logging: set `RUST_LOG=santa_server=info` (or `warn`, `debug`) to see
//! server logs on stderr.

mod cli;

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use santa_core::{Participant, Roster, draw};
use santa_server::{
    AuditLog, ExchangeSlot, GatewayState, RuntimeSettings, SmsGateway, load_runtime_settings,
    run_http, set_config_home_override,
};

use crate::cli::{Cli, Command};

const DEFAULT_BIND: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if let Some(conf_dir) = cli.conf.clone() {
        set_config_home_override(conf_dir);
    }
    let runtime_settings = load_runtime_settings();

    // Initialize tracing: RUST_LOG overrides; else info
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("santa_server=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    match cli.command {
        Command::Serve { bind } => run_serve_mode(bind, &runtime_settings).await,
        Command::Draw { name } => run_draw_mode(&name),
    }
}

async fn run_serve_mode(
    bind: Option<String>,
    runtime_settings: &RuntimeSettings,
) -> anyhow::Result<()> {
    let bind_addr = bind
        .or_else(|| runtime_settings.server.bind.clone())
        .unwrap_or_else(|| DEFAULT_BIND.to_string());

    let sms = runtime_settings
        .sms_gateway_config()
        .map(|config| Arc::new(SmsGateway::new(config)));
    if sms.is_none() {
        tracing::warn!(
            "SMS gateway not configured; /api/send-sms will refuse until credentials are set"
        );
    }
    let audit = Arc::new(AuditLog::new(
        runtime_settings.audit.path.clone().map(PathBuf::from),
    ));

    let state = GatewayState {
        slot: ExchangeSlot::new(),
        sms,
        audit,
    };
    run_http(state, &bind_addr).await
}

fn run_draw_mode(entries: &[String]) -> anyhow::Result<()> {
    let participants = entries
        .iter()
        .map(|raw| match raw.split_once('=') {
            Some((name, phone)) => Participant::new(name, Some(phone.to_string())),
            None => Participant::new(raw.as_str(), None),
        })
        .collect();
    let roster = Roster::from_entries(participants)?;
    let assignments = draw(&roster)?;
    for assignment in &assignments {
        println!(
            "{} will buy a present for {}",
            assignment.giver, assignment.receiver
        );
    }
    Ok(())
}
