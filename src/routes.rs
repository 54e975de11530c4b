// src/routes.rs
use log::info;
use std::convert::Infallible;
use std::sync::Arc;
use warp::filters::body::BodyDeserializeError;
use warp::http::StatusCode;
use warp::reject::Rejection;
use warp::{Filter, Reply};

use crate::handlers::admin::{get_admin_data, require_admin, save_admin_data};
use crate::handlers::banks::{get_bank, get_bank_data};
use crate::handlers::certificates::calculate_certificate;
use crate::handlers::error::ApiError;
use crate::handlers::tbill::calculate_tbill;
use crate::services::admin_auth::AdminClaims;
use crate::services::bank_store::BankStore;

/// Request bodies larger than this are refused before parsing.
const MAX_BODY_BYTES: u64 = 1024 * 1024;

async fn handle_rejection(err: Rejection) -> Result<impl Reply, Infallible> {
    let (code, kind, message) = if err.is_not_found() {
        (StatusCode::NOT_FOUND, "not_found", "Not Found".to_string())
    } else if let Some(api_error) = err.find::<ApiError>() {
        (api_error.status, api_error.code, api_error.message.clone())
    } else if let Some(e) = err.find::<BodyDeserializeError>() {
        (StatusCode::BAD_REQUEST, "invalid_input", format!("Invalid data format: {}", e))
    } else if err.find::<warp::reject::PayloadTooLarge>().is_some() {
        (StatusCode::PAYLOAD_TOO_LARGE, "invalid_input", "Payload Too Large".to_string())
    } else if err.find::<warp::reject::MethodNotAllowed>().is_some() {
        (StatusCode::METHOD_NOT_ALLOWED, "method_not_allowed", "Method Not Allowed".to_string())
    } else {
        (StatusCode::INTERNAL_SERVER_ERROR, "internal", "Internal Server Error".to_string())
    };

    Ok(warp::reply::with_status(
        warp::reply::json(&serde_json::json!({
            "error": message,
            "code": kind,
        })),
        code,
    ))
}

fn with_admin(
    secret: Option<Arc<str>>,
) -> impl Filter<Extract = (AdminClaims,), Error = Rejection> + Clone {
    warp::header::optional::<String>("authorization")
        .and_then(move |authorization: Option<String>| require_admin(secret.clone(), authorization))
}

pub fn routes(
    store: Arc<BankStore>,
    admin_secret: Option<Arc<str>>,
) -> impl Filter<Extract = impl Reply, Error = Infallible> + Clone {
    info!("Configuring routes...");

    let store_filter = warp::any().map(move || store.clone());

    let bank_data_route = warp::path!("api" / "bank-data")
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_bank_data);

    let bank_route = warp::path!("api" / "v1" / "banks" / String)
        .and(warp::get())
        .and(store_filter.clone())
        .and_then(get_bank);

    let certificate_route = warp::path!("api" / "v1" / "certificates" / "calculate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(calculate_certificate);

    let tbill_route = warp::path!("api" / "v1" / "tbill" / "calculate")
        .and(warp::post())
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and_then(calculate_tbill);

    let admin_read_route = warp::path!("api" / "admin" / "save-data")
        .and(warp::get())
        .and(with_admin(admin_secret.clone()))
        .and(store_filter.clone())
        .and_then(get_admin_data);

    let admin_save_route = warp::path!("api" / "admin" / "save-data")
        .and(warp::post())
        .and(with_admin(admin_secret))
        .and(warp::body::content_length_limit(MAX_BODY_BYTES))
        .and(warp::body::json())
        .and(store_filter.clone())
        .and_then(save_admin_data);

    info!("All routes configured successfully.");

    bank_data_route
        .or(bank_route)
        .or(certificate_route)
        .or(tbill_route)
        .or(admin_read_route)
        .or(admin_save_route)
        .recover(handle_rejection)
}
