//! `shortcut-hub serve` — run the HTTP API until Ctrl-C.

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;

use crate::api::{self, ApiState};
use crate::app::AppContext;
use crate::application::services::dispatch::DispatchSettings;
use crate::infra::JsonShortcutStore;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (default: `server.listen_addr` from config)
    #[arg(long, value_name = "ADDR")]
    pub listen: Option<String>,
}

/// Run the HTTP API.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded, the address
/// cannot be bound, or the server fails.
pub async fn run(app: &AppContext, args: ServeArgs) -> Result<ExitCode> {
    let config = app.config()?;
    let listen = args.listen.unwrap_or_else(|| config.server.listen_addr.clone());

    let store = JsonShortcutStore::from_config(&config)?;
    let settings = DispatchSettings::for_host(config.timeout())?;
    let state = Arc::new(ApiState::new(store, settings));

    let listener = tokio::net::TcpListener::bind(&listen)
        .await
        .with_context(|| format!("failed to bind {listen}"))?;

    app.output
        .info(&format!("Listening on http://{}", listener.local_addr()?));
    api::serve(listener, state, api::shutdown_signal()).await?;
    Ok(ExitCode::SUCCESS)
}
