use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use enroll_api::{config::read_config, router};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = read_config().expect("Failed to read configuration");
    let address = format!(
        "{}:{}",
        config.application.host, config.application.port
    );

    let app = router::create(config);

    let listener = TcpListener::bind(&address)
        .await
        .unwrap_or_else(|e| panic!("Failed to bind to {}: {}", address, e));
    tracing::info!("Server running on {}", address);

    axum::serve(listener, app).await.expect("Server crashed");
}
