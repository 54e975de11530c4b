// src/handlers/tbill.rs
use log::{info, warn};
use serde::Deserialize;
use warp::reply::Json;
use warp::Rejection;

use super::error::ApiError;
use crate::services::treasury;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TBillRequest {
    pub amount: Option<f64>,
    pub rate: Option<f64>,
    pub duration_months: Option<u32>,
}

pub async fn calculate_tbill(request: TBillRequest) -> Result<Json, Rejection> {
    info!("Handling T-bill calculation request");

    let result = treasury::compute_treasury_bill_yield(
        request.amount,
        request.rate,
        request.duration_months,
    )
    .map_err(|e| {
        warn!("T-bill calculation refused: {}", e);
        warp::reject::custom(ApiError::from(e))
    })?;

    info!(
        "T-bill {} months at {}%: net profit {:.2} ({:.2}%)",
        result.tenor_months, result.rate, result.net_profit, result.net_profit_rate
    );
    Ok(warp::reply::json(&result))
}
