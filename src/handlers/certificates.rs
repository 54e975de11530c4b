// src/handlers/certificates.rs
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use warp::reply::Json;
use warp::Rejection;

use super::banks::load_or_reject;
use super::error::ApiError;
use crate::services::bank_store::BankStore;
use crate::services::calculations::require_selection;
use crate::services::certificates::{compute_certificate_profit, CertificateResult};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CertificateRequest {
    pub bank_id: Option<String>,
    pub certificate_id: Option<String>,
    pub amount: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CertificateQuote<'a> {
    bank_id: &'a str,
    certificate_id: &'a str,
    certificate_name: &'a str,
    min_amount: f64,
    headline_rate: f64,
    years: f64,
    #[serde(flatten)]
    result: CertificateResult,
}

pub async fn calculate_certificate(
    request: CertificateRequest,
    store: Arc<BankStore>,
) -> Result<Json, Rejection> {
    info!("Handling certificate calculation request");
    debug!("Request: {:?}", request);

    let bank_id = require_selection(request.bank_id.as_deref(), "bankId").map_err(reject)?;
    let certificate_id =
        require_selection(request.certificate_id.as_deref(), "certificateId").map_err(reject)?;

    let data = load_or_reject(&store).await?;
    let bank = data.bank(bank_id).ok_or_else(|| {
        warp::reject::custom(ApiError::not_found(format!("Unknown bank '{}'", bank_id)))
    })?;
    let certificate = bank.certificate(certificate_id).ok_or_else(|| {
        warp::reject::custom(ApiError::not_found(format!(
            "Unknown certificate '{}' for bank '{}'",
            certificate_id, bank_id
        )))
    })?;

    let result = compute_certificate_profit(certificate, request.amount).map_err(|e| {
        warn!("Certificate calculation for {}/{} refused: {}", bank_id, certificate_id, e);
        reject(e)
    })?;
    info!(
        "Calculated {}/{}: total profit {:.2}",
        bank_id, certificate_id, result.total_profit
    );

    Ok(warp::reply::json(&CertificateQuote {
        bank_id: &bank.id,
        certificate_id: &certificate.id,
        certificate_name: &certificate.name,
        min_amount: certificate.min_amount,
        headline_rate: certificate.headline_rate(),
        years: certificate.years(),
        result,
    }))
}

fn reject(err: impl Into<ApiError>) -> Rejection {
    warp::reject::custom(err.into())
}
