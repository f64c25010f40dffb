use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tracing_subscriber::EnvFilter;

use cinevoice::config::AppConfig;
use cinevoice::handlers;
use cinevoice::services::extractor::SlotExtractor;
use cinevoice::services::search::tmdb::TmdbProvider;
use cinevoice::services::speech::openai::OpenAiSpeechProvider;
use cinevoice::services::storage::supabase::SupabaseStorage;
use cinevoice::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    anyhow::ensure!(
        !config.openai_api_key.is_empty(),
        "OPENAI_API_KEY must be set"
    );
    anyhow::ensure!(!config.tmdb_api_key.is_empty(), "TMDB_API_KEY must be set");

    let speech = OpenAiSpeechProvider::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
    );
    let storage = SupabaseStorage::new(
        config.supabase_url.clone(),
        config.supabase_service_role_key.clone(),
        config.storage_bucket.clone(),
    );
    let search = TmdbProvider::new(config.tmdb_api_key.clone(), config.tmdb_base_url.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        extractor: SlotExtractor::new(),
        speech: Box::new(speech),
        storage: Box::new(storage),
        search: Box::new(search),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/tmdb", get(handlers::tmdb::discover))
        .route("/api/voice-chat", post(handlers::voice_chat::voice_chat))
        .layer(tower_http::trace::TraceLayer::new_for_http())
        .layer(tower_http::cors::CorsLayer::permissive())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
