//! Basic Arithmetic API Handlers
//!
//! Routes for sum, subtraction and division.

use axum::{extract::Query, http::StatusCode, response::Json};
use calc_engine::{arithmetic, CalcResponse};

use super::dto::BinaryOperands;
use super::respond;

/// Sum a list of values
///
/// Binds every repeated `valores` query pair, e.g.
/// `/soma?valores=1&valores=2&valores=3`. A value that does not parse as a
/// number yields a structured 400 failure.
///
/// @route GET /soma
#[utoipa::path(
    get,
    path = "/soma",
    params(
        ("valores" = Vec<f64>, Query, description = "Values to sum (repeat the key for each value)")
    ),
    responses(
        (status = 200, description = "Sum of the values", body = CalcResponse),
        (status = 400, description = "A value could not be parsed as a number", body = CalcResponse)
    )
)]
pub async fn sum(
    Query(params): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<CalcResponse>) {
    let mut values = Vec::new();

    for (key, raw) in params {
        if key != "valores" {
            continue;
        }
        match raw.parse::<f64>() {
            Ok(value) => values.push(value),
            Err(_) => {
                return respond(CalcResponse::failure(format!(
                    "'{raw}' is not a valid number"
                )))
            },
        }
    }

    respond(arithmetic::sum(&values))
}

/// Subtract `y` from `x`
///
/// @route GET /subtracao
#[utoipa::path(
    get,
    path = "/subtracao",
    params(
        ("x" = f64, Query, description = "Minuend"),
        ("y" = f64, Query, description = "Subtrahend")
    ),
    responses(
        (status = 200, description = "Subtraction result", body = CalcResponse)
    )
)]
pub async fn subtract(Query(params): Query<BinaryOperands>) -> (StatusCode, Json<CalcResponse>) {
    respond(arithmetic::subtract(params.x, params.y))
}

/// Divide `x` by `y`
///
/// @route GET /divisao
#[utoipa::path(
    get,
    path = "/divisao",
    params(
        ("x" = f64, Query, description = "Dividend"),
        ("y" = f64, Query, description = "Divisor")
    ),
    responses(
        (status = 200, description = "Division result", body = CalcResponse),
        (status = 400, description = "Division by zero", body = CalcResponse)
    )
)]
pub async fn divide(Query(params): Query<BinaryOperands>) -> (StatusCode, Json<CalcResponse>) {
    respond(arithmetic::divide(params.x, params.y))
}
