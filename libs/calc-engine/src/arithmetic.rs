//! Basic arithmetic operations
//!
//! Thin formula wrappers reporting their outcome as a [`CalcResponse`].

use crate::response::CalcResponse;

/// Sum a list of values. An empty list sums to 0.
pub fn sum(values: &[f64]) -> CalcResponse {
    let total: f64 = values.iter().sum();
    CalcResponse::success(format!("The sum of the values is: {total}"))
}

/// Subtract `y` from `x`.
pub fn subtract(x: f64, y: f64) -> CalcResponse {
    CalcResponse::success(format!(
        "The result of subtracting {y} from {x} is: {}",
        x - y
    ))
}

/// Divide `x` by `y`. Fails when `y` is zero.
pub fn divide(x: f64, y: f64) -> CalcResponse {
    if y == 0.0 {
        return CalcResponse::failure("Cannot divide by 0");
    }

    CalcResponse::success(format!(
        "The result of dividing {x} by {y} is: {}",
        x / y
    ))
}

/// Multiply `x` by `y`. No route is wired to this operation.
pub fn multiply(x: f64, y: f64) -> CalcResponse {
    CalcResponse::success(format!(
        "The result of multiplying {x} by {y} is: {}",
        x * y
    ))
}
