//! Synoscore HTTP server entrypoint.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tokio::signal;

use synoscore::config::Config;
use synoscore::extract::extract_text;
use synoscore::gateway::{HandlerState, create_router_with_state};
use synoscore::privacy;
use synoscore::scoring::{ScoringConfig, SynopsisScorer};
use synoscore::segment::{RuleSplitter, SentenceSplit};
use synoscore::similarity::{
    EmbedderConfig, EmbeddingOracle, OracleKind, SimilarityOracle, TfidfOracle,
};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--health-check") {
        std::process::exit(run_health_check().await);
    }

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;
    config.validate()?;

    if let Some(pos) = args.iter().position(|arg| arg == "--score") {
        let article_path = args
            .get(pos + 1)
            .context("--score requires <article-path> and <synopsis-path>")?;
        let synopsis_path = args
            .get(pos + 2)
            .context("--score requires <article-path> and <synopsis-path>")?;
        return run_score(&config, Path::new(article_path), Path::new(synopsis_path));
    }

    println!(
        r#"
███████╗██╗   ██╗███╗   ██╗ ██████╗ ███████╗ ██████╗ ██████╗ ██████╗ ███████╗
██╔════╝╚██╗ ██╔╝████╗  ██║██╔═══██╗██╔════╝██╔════╝██╔═══██╗██╔══██╗██╔════╝
███████╗ ╚████╔╝ ██╔██╗ ██║██║   ██║███████╗██║     ██║   ██║██████╔╝█████╗
╚════██║  ╚██╔╝  ██║╚██╗██║██║   ██║╚════██║██║     ██║   ██║██╔══██╗██╔══╝
███████║   ██║   ██║ ╚████║╚██████╔╝███████║╚██████╗╚██████╔╝██║  ██║███████╗
╚══════╝   ╚═╝   ╚═╝  ╚═══╝ ╚═════╝ ╚══════╝ ╚═════╝ ╚═════╝ ╚═╝  ╚═╝╚══════╝

        CHUNK. COMPARE. SCORE.
                                        AGPL-3.0
"#
    );

    let addr: SocketAddr = config.socket_addr().parse()?;

    tracing::info!(
        bind_addr = %config.bind_addr,
        port = config.port,
        "Synoscore starting"
    );

    let oracle = build_oracle(&config)?;
    let scoring_config = build_scoring_config(&config, oracle.kind());
    let splitter: Arc<dyn SentenceSplit> = Arc::new(RuleSplitter::new());

    tracing::info!(
        oracle = oracle.kind().label(),
        coverage_threshold = scoring_config.coverage_threshold,
        target_chunks = scoring_config.target_chunks,
        "Scoring engine configured"
    );

    let scorer = Arc::new(SynopsisScorer::new(
        oracle,
        Arc::clone(&splitter),
        scoring_config,
    )?);

    if config.access_token.is_some() {
        tracing::info!("Access gating enabled for the score route");
    }

    let state = HandlerState::new(scorer, splitter, config.access_token.clone());
    let app = create_router_with_state(state);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!(addr = %addr, "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Synoscore shutdown complete");
    Ok(())
}

/// Selects the similarity backend from configuration.
///
/// An explicit `SYNOSCORE_ORACLE` wins; otherwise a configured model path
/// selects the embedding backend and the engine falls back to TF-IDF.
fn build_oracle(config: &Config) -> anyhow::Result<Arc<dyn SimilarityOracle>> {
    let kind = match config.oracle {
        Some(kind) => kind,
        None if config.model_path.is_some() => OracleKind::Embedding,
        None => OracleKind::Tfidf,
    };

    match kind {
        OracleKind::Tfidf => Ok(Arc::new(TfidfOracle::new())),
        OracleKind::Embedding => {
            let model_dir = config
                .model_path
                .clone()
                .context("embedding oracle requires SYNOSCORE_MODEL_PATH")?;
            let oracle = EmbeddingOracle::load(EmbedderConfig::new(model_dir))?;
            Ok(Arc::new(oracle))
        }
        OracleKind::EmbeddingStub => {
            let oracle = EmbeddingOracle::load(EmbedderConfig::stub())?;
            Ok(Arc::new(oracle))
        }
    }
}

/// Applies per-backend defaults, then any explicit overrides.
fn build_scoring_config(config: &Config, kind: OracleKind) -> ScoringConfig {
    let mut scoring = ScoringConfig::for_oracle(kind);
    if let Some(threshold) = config.coverage_threshold {
        scoring = scoring.with_coverage_threshold(threshold);
    }
    scoring.with_target_chunks(config.target_chunks)
}

/// One-shot mode: score a synopsis file against an article file and print
/// the report as JSON.
fn run_score(config: &Config, article_path: &Path, synopsis_path: &Path) -> anyhow::Result<()> {
    let oracle = build_oracle(config)?;
    let scoring_config = build_scoring_config(config, oracle.kind());
    let splitter: Arc<dyn SentenceSplit> = Arc::new(RuleSplitter::new());
    let scorer = SynopsisScorer::new(oracle, Arc::clone(&splitter), scoring_config)?;

    let article = extract_text(article_path)
        .with_context(|| format!("failed to read article from {}", article_path.display()))?;
    let synopsis = extract_text(synopsis_path)
        .with_context(|| format!("failed to read synopsis from {}", synopsis_path.display()))?;

    let article = privacy::anonymize(&article, splitter.as_ref());
    let synopsis = privacy::anonymize(&synopsis, splitter.as_ref());

    let report = scorer.evaluate(&article, &synopsis)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn run_health_check() -> i32 {
    let port = std::env::var("SYNOSCORE_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(8080);

    let url = format!("http://127.0.0.1:{}/healthz", port);

    let client = match reqwest::Client::builder()
        .timeout(Duration::from_secs(1))
        .build()
    {
        Ok(client) => client,
        Err(_) => return 1,
    };

    match client.get(&url).send().await {
        Ok(res) if res.status().is_success() => 0,
        _ => 1,
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
