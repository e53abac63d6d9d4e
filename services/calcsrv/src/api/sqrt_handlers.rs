//! Square Root API Handlers

use axum::{extract::Query, http::StatusCode, response::Json};
use calc_engine::{sqrt, CalcResponse};

use super::dto::{IntRadicand, RealRadicand};
use super::respond;

/// Integer square root of `x`
///
/// Falls back to the approximate root when `x` is not a perfect square.
///
/// @route GET /raizQuadrada
#[utoipa::path(
    get,
    path = "/raizQuadrada",
    params(
        ("x" = i64, Query, description = "Radicand (integer)")
    ),
    responses(
        (status = 200, description = "Square root result", body = CalcResponse),
        (status = 400, description = "Negative radicand", body = CalcResponse)
    )
)]
pub async fn exact_square_root(
    Query(params): Query<IntRadicand>,
) -> (StatusCode, Json<CalcResponse>) {
    respond(sqrt::exact_square_root(params.x))
}

/// Approximate square root of `x` via Newton's method
///
/// @route GET /raizQuadradaNaoExata
#[utoipa::path(
    get,
    path = "/raizQuadradaNaoExata",
    params(
        ("x" = f64, Query, description = "Radicand")
    ),
    responses(
        (status = 200, description = "Approximate square root result", body = CalcResponse),
        (status = 400, description = "Negative radicand", body = CalcResponse)
    )
)]
pub async fn approximate_square_root(
    Query(params): Query<RealRadicand>,
) -> (StatusCode, Json<CalcResponse>) {
    respond(sqrt::approximate_square_root(params.x))
}
