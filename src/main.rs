use {
    axum::{
        Router,
        routing::{get, post},
    },
    pix_sync::adapters::blackcat::BlackCatProvider,
    pix_sync::config::{CheckoutConfig, ProviderConfig},
    std::{sync::Arc, time::Duration},
    tokio::signal,
    tower_http::timeout::TimeoutLayer,
};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    dotenvy::dotenv().ok();
    let config = ProviderConfig::from_env().expect("provider credentials must be set");
    let provider = BlackCatProvider::new(config, CheckoutConfig::default())
        .expect("failed to build HTTP client");

    let state = pix_sync::AppState {
        provider: Arc::new(provider),
    };

    let app = Router::new()
        .route("/", get(|| async { "ok" }))
        .route(
            "/charges",
            post(pix_sync::adapters::http::create_charge_handler),
        )
        .route(
            "/charges/{id}/status",
            get(pix_sync::adapters::http::charge_status_handler),
        )
        .layer(TimeoutLayer::new(Duration::from_secs(40))) // longer than the provider client timeout
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await.unwrap();
    tracing::info!("listening on 0.0.0.0:3000");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("failed to listen for ctrl+c");
    };

    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to listen for SIGTERM")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => tracing::info!("received ctrl+c, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
