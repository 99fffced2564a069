//! TextAssist - writing assistant actions on an on-device language model
//!
//! Main entry point for the TextAssist CLI, stdio host and HTTP server.

mod app;
mod cli;

use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use textassist_api::{AppState, HttpServer, HttpServerConfig, MessageHost};
use textassist_config::{Config, ConfigLoader, ConfigValidator, LoggingConfig};
use textassist_protocols::RequestMessage;

use crate::app::App;
use crate::cli::{Cli, Commands};

fn init_tracing(logging: &LoggingConfig, console_to_stderr: bool) -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));

    // Stdout is the message channel in host mode.
    let console_writer = if console_to_stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };
    let console = fmt::layer()
        .with_target(true)
        .with_ansi(!console_to_stderr)
        .with_writer(console_writer);

    let file = if logging.file {
        let log_dir = logging.resolved_dir();
        std::fs::create_dir_all(&log_dir)
            .with_context(|| format!("creating log directory {}", log_dir.display()))?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix("textassist")
            .filename_suffix("log")
            .max_log_files(30)
            .build(&log_dir)?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        // Keep the worker alive for the whole process.
        static GUARD: std::sync::OnceLock<tracing_appender::non_blocking::WorkerGuard> =
            std::sync::OnceLock::new();
        let _ = GUARD.set(guard);

        Some(fmt::layer().with_writer(non_blocking).with_ansi(false))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(console)
        .with(file)
        .init();

    Ok(())
}

/// Cancel `token` on Ctrl-C.
fn cancel_on_ctrl_c(token: CancellationToken) {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            token.cancel();
        }
    });
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    ConfigLoader::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli)?;

    let command = cli.command.unwrap_or(Commands::Host {
        framing: Default::default(),
    });
    init_tracing(&config.logging, command.owns_stdout())?;

    let warnings = ConfigValidator::validate(&config).into_result()?;
    for warning in &warnings {
        warn!(path = %warning.path, "{}", warning.message);
    }

    let app = App::build(&config);
    let shutdown = CancellationToken::new();

    match command {
        Commands::Host { framing } => {
            info!(%framing, "Starting stdio message host");
            app.warm_up(&config);
            cancel_on_ctrl_c(shutdown.clone());

            let host = MessageHost::new(Arc::clone(&app.router), framing);
            if let Err(e) = host.run_stdio(shutdown).await {
                error!(error = %e, "Message host stopped with an error");
                return Err(e.into());
            }
        }
        Commands::Serve { host, port } => {
            let server_config = HttpServerConfig::new(
                host.unwrap_or_else(|| config.server.host.clone()),
                port.unwrap_or(config.server.port),
            );
            app.warm_up(&config);
            cancel_on_ctrl_c(shutdown.clone());

            let state = Arc::new(AppState::new(Arc::clone(&app.router)));
            let server = HttpServer::new(server_config, state);
            info!(addr = %server.addr(), "Starting HTTP server");
            server
                .run(shutdown)
                .await
                .map_err(|e| anyhow::anyhow!("HTTP server failed: {}", e))?;
        }
        Commands::Run {
            action,
            text,
            target_language,
            tone,
            style,
            length,
        } => {
            let message = RequestMessage {
                target_language,
                tone,
                style,
                length,
                ..RequestMessage::new(action, text)
            };
            let reply = app.router.dispatch(message).await;
            println!("{}", serde_json::to_string_pretty(&reply)?);
        }
    }

    info!("TextAssist stopped");
    Ok(())
}
