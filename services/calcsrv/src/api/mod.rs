//! HTTP API handlers

pub mod arithmetic_handlers;
pub mod dto;
pub mod expression_handlers;
pub mod health_handlers;
pub mod sqrt_handlers;

use axum::{http::StatusCode, response::Json};
use calc_engine::CalcResponse;

/// Map an operation outcome to its HTTP reply: 200 on success, 400 on a
/// structured failure. The body is the outcome itself in both cases.
pub(crate) fn respond(result: CalcResponse) -> (StatusCode, Json<CalcResponse>) {
    let status = if result.sucesso {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    (status, Json(result))
}
