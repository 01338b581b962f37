// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::{http::StatusCode, web::JsonConfig};
use tracing::debug;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        debug!(error = %message, "Rejected request body");
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::message(StatusCode::BAD_REQUEST, &message),
        )
        .into()
    })
}
