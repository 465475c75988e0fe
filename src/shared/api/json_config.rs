// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::web::JsonConfig;

/// Resume payloads carry profile photos as data URLs, well above actix's 32 KiB default.
const MAX_JSON_PAYLOAD: usize = 4 * 1024 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_JSON_PAYLOAD)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
