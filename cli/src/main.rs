//! CLI entrypoint for video-summarizer
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

mod wiring;

use anyhow::{Context, Result, anyhow, bail};
use clap::Parser;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use summarizer_application::{AnalysisProgress, AnalyzeVideoInput, NoProgress};
use summarizer_domain::ApiKey;
use summarizer_infrastructure::{ConfigLoader, FileConfig};
use summarizer_presentation::{
    AppState, Cli, Command, ConsoleFormatter, OutputFormat, ProgressReporter, SimpleProgress, web,
};
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wiring::Wiring;

/// Fallback for `analyze --api-key`
const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _log_guard = init_tracing(cli.verbose, cli.log_dir.as_deref());

    info!("Starting video-summarizer");

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let config = load_config(&cli)?;
    let cancellation = CancellationToken::new();

    match cli.command {
        Some(Command::Serve { bind }) => serve(config, bind, cancellation).await,
        Some(Command::Analyze {
            video,
            query,
            api_key,
            output,
        }) => {
            let request = AnalyzeRequest {
                video,
                query,
                api_key,
                output,
                quiet: cli.quiet,
            };
            analyze(config, request, cancellation).await
        }
        None => bail!("No command given. Use `serve` or `analyze` (see --help)."),
    }
}

/// Console logging from the `-v` count, plus an optional daily log file.
fn init_tracing(verbose: u8, log_dir: Option<&Path>) -> Option<WorkerGuard> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let console = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "video-summarizer.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(
                    fmt::layer()
                        .with_writer(writer)
                        .with_ansi(false)
                        .with_target(false),
                )
                .init();
            Some(guard)
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();
            None
        }
    }
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref()).context("Failed to load configuration")?
    };
    config.validate().context("Invalid configuration")?;
    Ok(config)
}

async fn serve(config: FileConfig, bind: Option<String>, cancellation: CancellationToken) -> Result<()> {
    let bind = bind.unwrap_or_else(|| config.server.bind.clone());
    let title = config.agent.name.clone();
    let model = config.gemini.parse_model().to_string();

    let state = AppState::new(
        Arc::new(Wiring::new(config, cancellation.clone())),
        title,
        model,
    );

    let listener = TcpListener::bind(&bind)
        .await
        .with_context(|| format!("Failed to bind {}", bind))?;
    println!("Video Summarizer running at http://{}", listener.local_addr()?);

    web::serve(listener, state, shutdown_signal(cancellation)).await?;
    Ok(())
}

/// Resolves on Ctrl-C, cancelling in-flight analyses first.
async fn shutdown_signal(cancellation: CancellationToken) {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Could not listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
    cancellation.cancel();
}

struct AnalyzeRequest {
    video: PathBuf,
    query: String,
    api_key: Option<String>,
    output: OutputFormat,
    quiet: bool,
}

async fn analyze(
    config: FileConfig,
    request: AnalyzeRequest,
    cancellation: CancellationToken,
) -> Result<()> {
    let raw_key = request
        .api_key
        .or_else(|| std::env::var(API_KEY_ENV).ok())
        .unwrap_or_default();
    let api_key = ApiKey::parse(&raw_key)
        .with_context(|| format!("Pass --api-key or set {}", API_KEY_ENV))?;

    let wiring = Wiring::new(config, cancellation.clone());
    let use_case = wiring.build_use_case(api_key).map_err(|e| anyhow!(e))?;
    let staged = wiring
        .stage_path(&request.video)
        .map_err(|e| anyhow!(e))
        .with_context(|| format!("Cannot use {}", request.video.display()))?;

    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            warn!("Interrupted, cancelling analysis");
            cancellation.cancel();
        }
    });

    let progress: Box<dyn AnalysisProgress> =
        if request.quiet || request.output == OutputFormat::Json {
            Box::new(NoProgress)
        } else if std::io::stderr().is_terminal() {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(SimpleProgress)
        };

    info!(video = %request.video.display(), "Analyzing video");
    let outcome = match use_case
        .execute(AnalyzeVideoInput::new(staged, request.query), progress.as_ref())
        .await
    {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("{}", ConsoleFormatter::format_error(&e));
            bail!("analysis did not complete");
        }
    };

    let output = match request.output {
        OutputFormat::Text => ConsoleFormatter::format(&outcome),
        OutputFormat::Json => ConsoleFormatter::format_json(&outcome),
    };
    println!("{}", output);

    Ok(())
}
