use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, put};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::PgPool;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

pub mod auth;
pub mod config;
pub mod database;
pub mod error;
pub mod handlers;
pub mod middleware;

use database::maps::{MapStore, PgMapStore};
use database::tech::{PgTechTreeStore, TechTreeStore};

/// Shared application state injected into every request.
///
/// Both stores sit behind trait objects so the HTTP layer only ever sees the
/// store seams, never a concrete pool.
#[derive(Clone)]
pub struct AppState {
    pub maps: Arc<dyn MapStore>,
    pub tech: Arc<dyn TechTreeStore>,
}

impl AppState {
    pub fn new(maps: Arc<dyn MapStore>, tech: Arc<dyn TechTreeStore>) -> Self {
        Self { maps, tech }
    }

    /// Production wiring: both stores share one Postgres pool.
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            maps: Arc::new(PgMapStore::new(pool.clone())),
            tech: Arc::new(PgTechTreeStore::new(pool)),
        }
    }
}

pub fn app(state: AppState) -> Router {
    // Token-gated routes. The middleware rejects before the handler runs and
    // attaches an AuthUser extension the handlers take as a parameter.
    let protected = Router::new()
        .route("/maps/:mapid", put(handlers::maps::map_put))
        .route("/users/:discordid/tech", get(handlers::tech::tech_get))
        .route_layer(axum::middleware::from_fn(middleware::jwt_auth_middleware));

    Router::new()
        // Public
        .route("/", get(root))
        .route("/health", get(health))
        // Map reads are pass-phrase gated, not session gated
        .route("/maps/:mapid", get(handlers::maps::map_get))
        .merge(protected)
        // Global middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Oasis Companion API",
            "version": version,
            "description": "Shared clan maps and per-user technology trees",
            "endpoints": {
                "home": "/ (public)",
                "health": "/health (public)",
                "maps": "/maps/:mapid (GET public with mappass, PUT bearer token)",
                "tech": "/users/:discordid/tech (GET bearer token)",
            }
        }
    }))
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match state.maps.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "database unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "database_error": e.to_string()
                }
            })),
        ),
    }
}
