use anyhow::Result;
use dotenv::dotenv;
use log::info;
use std::net::SocketAddr;
use std::sync::Arc;
use warp::Filter;

use egp_certificates::config::AppConfig;
use egp_certificates::routes;
use egp_certificates::services::bank_store::BankStore;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize the logger
    env_logger::init();
    info!("Logger initialized. Starting the application...");

    let config = AppConfig::from_env()?;
    info!("Using PORT: {}", config.port);
    info!("Bank data file: {}", config.bank_data_path.display());

    let store = Arc::new(BankStore::new(config.bank_data_path.clone()));
    let admin_secret: Option<Arc<str>> = config.admin_jwt_secret.as_deref().map(Arc::from);

    // Bind to 0.0.0.0 for container hosts
    let addr: SocketAddr = ([0, 0, 0, 0], config.port).into();

    let cors = warp::cors()
        .allow_any_origin()
        .allow_headers(vec!["content-type", "authorization"])
        .allow_methods(vec!["GET", "POST"]);

    let api = routes::routes(store, admin_secret)
        .with(cors)
        .with(warp::log("egp_certificates::http"));
    info!("Routes configured successfully with CORS.");

    info!("Starting server on {}", addr);
    warp::serve(api).run(addr).await;
    Ok(())
}
