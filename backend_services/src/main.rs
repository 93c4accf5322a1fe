mod config;
mod handlers;
mod services;
mod types;

use anyhow::Context;
use axum::{
    routing::{delete, get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::{AppState, Config};
use handlers::{
    create_session, end_session, get_guestbook, get_locales, get_page, next_gif, post_hug,
    post_message,
};
use services::media_service::{MEDIA_FOLDERS, MEDIA_ROUTE};

pub fn app_router(state: AppState) -> Router {
    let media_dir = state.config.media_dir();
    let frontend = ServeDir::new(state.config.static_dir());

    // Only the asset folders are public; MEDIA_DIR itself may hold .env.
    let mut router = Router::new()
        .route("/api/session", post(create_session))
        .route("/api/session/:id", delete(end_session))
        .route("/api/locales", get(get_locales))
        .route("/api/page", get(get_page))
        .route("/api/guestbook", get(get_guestbook))
        .route("/api/hugs", post(post_hug))
        .route("/api/messages", post(post_message))
        .route("/api/gif/next", post(next_gif));
    for folder in MEDIA_FOLDERS {
        router = router.nest_service(
            &format!("{}/{}", MEDIA_ROUTE, folder),
            ServeDir::new(media_dir.join(folder)),
        );
    }

    router
        .fallback_service(frontend)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("welcome_back_backend=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env();
    let bind_address = config.bind_address.clone();
    let state = AppState::from_config(config);

    let listener = TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind to {}", bind_address))?;

    info!("Server running on http://{}", bind_address);
    axum::serve(listener, app_router(state))
        .await
        .context("Failed to start server")?;
    Ok(())
}
