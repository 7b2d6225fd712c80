use anyhow::{Context, Result};
use clap::Parser;
use mock_interview::{create_router, AppState, Config, FeedbackGenerator};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "mock-interview", version, about = "Mock interview feedback service")]
struct Args {
    /// Config file path (extension optional)
    #[arg(short, long, default_value = "config/mock-interview")]
    config: String,

    /// Override the bind address
    #[arg(long)]
    bind: Option<String>,

    /// Override the HTTP port
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut cfg = Config::load(&args.config)?;
    if let Some(bind) = args.bind {
        cfg.service.http.bind = bind;
    }
    if let Some(port) = args.port {
        cfg.service.http.port = port;
    }

    info!("{} v{}", cfg.service.name, env!("CARGO_PKG_VERSION"));

    let questions = cfg.question_set()?;
    info!("Loaded {} interview questions", questions.len());

    if cfg.llm.api_key.is_none() {
        warn!("No API key configured; feedback requests will likely fail");
    }
    info!("Feedback model: {} via {}", cfg.llm.model, cfg.llm.base_url);

    let generator = FeedbackGenerator::from_config(&cfg.llm)?;
    let app = create_router(AppState::new(questions, generator));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("HTTP server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            info!("Shutting down");
        })
        .await
        .context("HTTP server error")?;

    Ok(())
}
