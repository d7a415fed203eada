// src/main.rs
// mailtriage - customer support email triage service

use anyhow::Result;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use mailtriage::{api, config::Config, state::AppState};

#[derive(Parser)]
#[command(name = "mailtriage")]
#[command(about = "Classifies support emails and suggests replies")]
#[command(version)]
struct Cli {
    /// Host to bind on (overrides MAILTRIAGE_HOST)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides MAILTRIAGE_PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Classify a single email from the command line and exit
    #[arg(long, value_name = "TEXT")]
    classify: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(host) = cli.host {
        config.host = host;
    }
    if let Some(port) = cli.port {
        config.port = port;
    }

    // Quiet for one-shot CLI use so stdout stays clean JSON
    let log_level = if cli.classify.is_some() {
        Level::WARN
    } else {
        config.log_level.parse::<Level>().unwrap_or(Level::INFO)
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let state = AppState::new(config);

    if let Some(text) = cli.classify {
        let result = state.classifier.classify(&text).await;
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mode = if state.classifier.has_model() {
        "model with rule fallback"
    } else {
        "rule-based only (no API key configured)"
    };
    info!("Starting mailtriage (model: {}, mode: {})", state.config.model, mode);

    let bind_address = state.config.bind_address();
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("Listening on http://{}", bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
