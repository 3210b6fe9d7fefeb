use std::sync::Arc;

use aws_sdk_s3::Client as S3Client;
use sqlx::PgPool;

use crate::config::Config;
use crate::matching::engine::MatchEngine;
use crate::skills::vocabulary::SkillVocabulary;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub s3: S3Client,
    pub config: Config,
    /// Pluggable match engine. Default: RuleBasedEngine. Swap via MATCH_ENGINE env.
    pub match_engine: Arc<dyn MatchEngine>,
    /// Compiled skill vocabulary — file-loaded or the built-in default.
    pub vocabulary: Arc<SkillVocabulary>,
}
