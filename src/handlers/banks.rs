// src/handlers/banks.rs
use log::{error, info};
use std::sync::Arc;
use warp::Rejection;

use super::error::ApiError;
use crate::models::BankData;
use crate::services::bank_store::BankStore;

pub(crate) async fn load_or_reject(store: &BankStore) -> Result<BankData, Rejection> {
    store.load().await.map_err(|e| {
        error!("Error reading bank data: {}", e);
        warp::reject::custom(ApiError::from(e))
    })
}

pub async fn get_bank_data(store: Arc<BankStore>) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request for bank data");
    let data = load_or_reject(&store).await?;
    Ok(warp::reply::with_header(
        warp::reply::json(&data),
        "cache-control",
        "public, max-age=300",
    ))
}

pub async fn get_bank(bank_id: String, store: Arc<BankStore>) -> Result<impl warp::Reply, Rejection> {
    info!("Handling request for bank {}", bank_id);
    let data = load_or_reject(&store).await?;
    match data.bank(&bank_id) {
        Some(bank) => Ok(warp::reply::json(bank)),
        None => Err(warp::reject::custom(ApiError::not_found(format!(
            "Unknown bank '{}'",
            bank_id
        )))),
    }
}
