use oasis_api::{app, config, database, AppState};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up DATABASE_URL, JWT_SECRET, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Oasis Companion API in {:?} mode", config.environment);

    let pool = database::manager::connect()
        .await
        .unwrap_or_else(|e| panic!("failed to connect to database: {}", e));

    let app = app(AppState::postgres(pool));

    // Allow deployments to override port via env
    let port = std::env::var("PORT")
        .ok()
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Oasis Companion API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}
