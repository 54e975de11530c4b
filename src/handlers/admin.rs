// src/handlers/admin.rs
use log::{error, info, warn};
use serde_json::json;
use std::sync::Arc;
use warp::http::StatusCode;
use warp::Rejection;

use super::error::ApiError;
use crate::models::BankData;
use crate::services::admin_auth::{self, AdminClaims};
use crate::services::bank_store::{BankStore, StoreError};

pub async fn require_admin(
    secret: Option<Arc<str>>,
    authorization: Option<String>,
) -> Result<AdminClaims, Rejection> {
    admin_auth::authorize(secret.as_deref(), authorization.as_deref()).map_err(|e| {
        warn!("Admin request refused: {}", e);
        warp::reject::custom(ApiError::from(e))
    })
}

pub async fn get_admin_data(
    claims: AdminClaims,
    store: Arc<BankStore>,
) -> Result<impl warp::Reply, Rejection> {
    info!("Admin {} requested bank data", claims.sub);
    let data = store.load().await.map_err(|e| {
        error!("Error reading bank data: {}", e);
        warp::reject::custom(ApiError::store_read())
    })?;
    Ok(warp::reply::with_header(
        warp::reply::json(&data),
        "cache-control",
        "no-cache",
    ))
}

pub async fn save_admin_data(
    claims: AdminClaims,
    data: BankData,
    store: Arc<BankStore>,
) -> Result<impl warp::Reply, Rejection> {
    info!("Admin {} saving {} banks", claims.sub, data.banks.len());

    match store.save(&data).await {
        Ok(()) => Ok(warp::reply::with_header(
            warp::reply::with_status(
                warp::reply::json(&json!({
                    "success": true,
                    "message": "Data saved successfully",
                })),
                StatusCode::OK,
            ),
            "cache-control",
            "no-cache",
        )),
        Err(StoreError::Invalid(e)) => {
            warn!("Rejected bank data from {}: {}", claims.sub, e);
            Err(warp::reject::custom(ApiError::bad_request(format!(
                "Invalid data format: {}",
                e
            ))))
        }
        Err(e) => {
            error!("Error saving bank data: {}", e);
            Err(warp::reject::custom(ApiError::store_write()))
        }
    }
}
