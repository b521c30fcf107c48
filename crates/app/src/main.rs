mod problem;
mod router;
mod telemetry;

use std::net::SocketAddr;

use bobapp_core::{JokeCollection, JokeProvider};
use bobapp_util::{load_env_file, AppConfig};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    load_env_file();
    let config = AppConfig::from_env()?;

    telemetry::init_tracing(&config)?;
    let metrics = telemetry::init_metrics()?;

    let collection = match &config.jokes_path {
        Some(path) => {
            info!(stage = "app", path = %path.display(), "loading jokes from file");
            JokeCollection::from_path(path)?
        }
        None => JokeCollection::bundled()?,
    };
    if collection.is_empty() {
        warn!(stage = "app", "joke collection is empty; requests will fail until data is provided");
    }
    metrics::gauge!("jokes_loaded").set(collection.len() as f64);

    let state = router::AppState::new(metrics, JokeProvider::new(collection));

    let addr: SocketAddr = config.bind_addr;
    info!(stage = "app", %addr, env = %config.environment.as_str(), jokes = state.jokes().len(), "starting HTTP server");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router::app_router(state))
        .await
        .map_err(|err| err.into())
}
