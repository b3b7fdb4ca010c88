use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod error;
mod extract;
mod handlers;
mod models;
mod services;
mod store;

use config::Config;
use services::stats::{RandomUsageStats, UsageStatsProvider};
use services::video::{MockVideoProvider, RemoteVideoProvider, VideoProvider};
use store::{MemoryStore, Store};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn Store>,
    pub config: Arc<Config>,
    pub video: Arc<dyn VideoProvider>,
    pub usage_stats: Arc<dyn UsageStatsProvider>,
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = std::iter::once(&config.frontend_url)
        .chain(config.cors_extra_origins.iter())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_credentials(true)
}

pub fn build_router(state: AppState) -> Router {
    let post_routes = Router::new()
        .route("/api/posts", post(handlers::posts::create_post))
        .route("/api/posts/feed", get(handlers::posts::get_feed))
        .route("/api/posts/trending", get(handlers::posts::get_trending))
        .route("/api/posts/:id/like", post(handlers::posts::like_post))
        .route("/api/posts/:id/remix", post(handlers::posts::remix_post));

    let user_routes = Router::new()
        .route("/api/users/mood", post(handlers::users::update_mood))
        .route(
            "/api/users/:id/mood-history",
            get(handlers::users::get_mood_history),
        )
        .route("/api/users/:id/wellness", get(handlers::users::get_wellness))
        .route(
            "/api/users/:id/wellness/break",
            post(handlers::users::start_break),
        );

    let video_routes = Router::new()
        .route("/api/video/generate", post(handlers::video::generate_video))
        .route("/api/video/status/:id", get(handlers::video::video_status))
        .route("/api/video/moods", get(handlers::video::list_moods))
        .route(
            "/api/video/enhance-prompt",
            post(handlers::video::enhance_prompt),
        );

    Router::new()
        .route("/", get(handlers::health::root))
        .route("/health", get(handlers::health::health_check))
        .route("/readyz", get(handlers::health::readyz))
        .merge(post_routes)
        .merge(user_routes)
        .merge(video_routes)
        .fallback(handlers::health::not_found)
        .layer(cors_layer(&state.config))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pling_api=debug,tower_http=debug".into()),
        )
        .json()
        .init();

    let config = Arc::new(Config::from_env()?);

    let store: Arc<dyn Store> = if config.seed_demo_posts {
        Arc::new(MemoryStore::seeded())
    } else {
        Arc::new(MemoryStore::new())
    };

    let video: Arc<dyn VideoProvider> = match &config.video_api_url {
        Some(url) => Arc::new(RemoteVideoProvider::new(url, &config.video_api_key)?),
        None => Arc::new(MockVideoProvider::new(Duration::from_millis(
            config.video_latency_ms,
        ))),
    };
    tracing::info!(provider = video.name(), "Video provider configured");

    let state = AppState {
        store,
        config: config.clone(),
        video,
        usage_stats: Arc::new(RandomUsageStats),
    };

    let app = build_router(state);

    let addr = config.listen_addr();
    tracing::info!("Starting Pling API on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
