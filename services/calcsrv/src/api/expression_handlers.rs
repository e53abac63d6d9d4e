//! Expression Evaluation API Handler

use axum::{extract::Query, http::StatusCode, response::Json};
use calc_engine::CalcResponse;

use super::dto::FormulaQuery;
use super::respond;

/// Evaluate a custom infix expression
///
/// Accepts unsigned integers, `+ - * /`, parentheses and whitespace.
/// Note: `+` must be URL-encoded as `%2B` in the query string.
///
/// @route GET /calculoPersonalizado
#[utoipa::path(
    get,
    path = "/calculoPersonalizado",
    params(
        ("formula" = String, Query, description = "Infix expression, e.g. (2%2B3)*4")
    ),
    responses(
        (status = 200, description = "Expression result", body = CalcResponse),
        (status = 400, description = "Malformed expression", body = CalcResponse)
    )
)]
pub async fn custom_calculation(
    Query(params): Query<FormulaQuery>,
) -> (StatusCode, Json<CalcResponse>) {
    respond(calc_engine::custom_calculation(&params.formula))
}
