#![forbid(unsafe_code)]

//! HTTP boundary for `badgesmith`.
//!
//! The router is a plain value: build it with [`router`] at startup and hand it to [`serve`]
//! (or to any tower-compatible runtime). There is no process-wide registration.
//!
//! Routes:
//! - `GET /`: HTML form that previews badges
//! - `GET /api/badge?label=&message=&color=&left_color=&type=svg|png`

mod config;
mod error;
mod routes;

pub use config::{DEFAULT_PORT, ServerConfig};
pub use error::ApiError;
pub use routes::{BadgeQuery, attachment_filename};

use axum::Router;
use axum::routing::get;
use badgesmith::BadgeRenderer;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Shared, read-only handler state.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub renderer: BadgeRenderer,
}

impl AppState {
    pub fn new(renderer: BadgeRenderer) -> Self {
        Self { renderer }
    }
}

pub fn router(state: AppState) -> Router {
    // Badges are embedded cross-origin (READMEs, dashboards).
    let cors = CorsLayer::new().allow_origin(Any).allow_methods(Any);

    Router::new()
        .route("/", get(routes::index))
        .route("/api/badge", get(routes::badge))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn bind(config: &ServerConfig) -> std::io::Result<TcpListener> {
    TcpListener::bind(config.socket_addr()).await
}

pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "badge server listening");
    axum::serve(listener, app).await
}
