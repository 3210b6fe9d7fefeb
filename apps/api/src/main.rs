mod config;
mod db;
mod errors;
mod freelancers;
mod jobs;
mod matching;
mod models;
mod routes;
mod skills;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use aws_config::Region;
use aws_sdk_s3::config::Credentials;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::matching::engine::{EmbeddingEngine, MatchEngine, RuleBasedEngine};
use crate::routes::build_router;
use crate::skills::vocabulary::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Bharat Lancer API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;

    // Initialize S3 / MinIO (resume object storage)
    let s3 = build_s3_client(&config).await;
    info!("S3 client initialized");

    // Load the skill vocabulary: file override or the built-in table
    let vocabulary = match config.skill_vocab_path.as_deref() {
        Some(path) => SkillVocabulary::from_file(path)?,
        None => SkillVocabulary::builtin()?,
    };
    info!(
        "Skill vocabulary v{} loaded ({} terms)",
        vocabulary.version(),
        vocabulary.len()
    );

    // Select the match engine backend (rule_based default)
    let match_engine: Arc<dyn MatchEngine> = match config.match_engine.as_str() {
        "embedding" => Arc::new(EmbeddingEngine),
        "rule_based" => Arc::new(RuleBasedEngine),
        other => {
            warn!("Unknown MATCH_ENGINE '{other}', falling back to rule_based");
            Arc::new(RuleBasedEngine)
        }
    };
    info!("Match engine backend: {}", match_engine.backend());

    // Build app state
    let state = AppState {
        db,
        s3,
        config: config.clone(),
        match_engine,
        vocabulary: Arc::new(vocabulary),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Constructs an S3 client configured for MinIO (local) or AWS (production).
async fn build_s3_client(config: &Config) -> aws_sdk_s3::Client {
    let credentials = Credentials::new(
        &config.aws_access_key_id,
        &config.aws_secret_access_key,
        None,
        None,
        "lancer-static",
    );

    let s3_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
        .region(Region::new("ap-south-1"))
        .credentials_provider(credentials)
        .endpoint_url(&config.s3_endpoint)
        .load()
        .await;

    aws_sdk_s3::Client::new(&s3_config)
}
