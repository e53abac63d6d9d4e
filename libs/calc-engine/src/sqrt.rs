//! Square root operations
//!
//! An exact integer scan with a Newton's-method fallback for radicands
//! that have no integer root.

use crate::response::CalcResponse;

/// Convergence threshold for the Newton iteration.
pub const DEFAULT_PRECISION: f64 = 0.00001;

/// Integer square root by linear scan.
///
/// Fails for negative radicands. When `x` has no exact root, delegates to
/// [`approximate_square_root`], prefixing its message with a notice and
/// propagating its success flag.
pub fn exact_square_root(x: i64) -> CalcResponse {
    if x < 0 {
        return CalcResponse::failure("The number cannot be negative.");
    }

    // i128 keeps i * i from overflowing near the top of the i64 range.
    let mut i: i64 = 0;
    loop {
        let square = (i as i128) * (i as i128);
        if square > x as i128 {
            break;
        }
        if square == x as i128 {
            return CalcResponse::success(format!("The square root of {x} is {i}!"));
        }
        i += 1;
    }

    let approximate = approximate_square_root(x as f64);
    let detail = approximate.message.first().cloned().unwrap_or_default();

    CalcResponse {
        sucesso: approximate.sucesso,
        message: vec![format!(
            "It looks like this value does not have an exact square root. {detail}"
        )],
    }
}

/// Approximate square root via Newton's method, converging to within
/// [`DEFAULT_PRECISION`].
///
/// Fails for negative radicands. A zero radicand short-circuits to 0: the
/// iteration would otherwise divide by the zero initial estimate.
pub fn approximate_square_root(x: f64) -> CalcResponse {
    if x < 0.0 {
        return CalcResponse::failure("The number cannot be negative.");
    }
    if x == 0.0 {
        return CalcResponse::success("The closest square root of 0 is: 0");
    }

    let estimate = newton_sqrt(x, DEFAULT_PRECISION);
    CalcResponse::success(format!("The closest square root of {x} is: {estimate}"))
}

/// Newton iteration: `estimate = (estimate + x / estimate) / 2` until the
/// change between iterations is within `precision`. Assumes `x > 0`.
fn newton_sqrt(x: f64, precision: f64) -> f64 {
    let mut estimate = x / 2.0;

    loop {
        let next = (estimate + x / estimate) / 2.0;
        let difference = (next - estimate).abs();
        estimate = next;
        if difference <= precision {
            break;
        }
    }

    estimate
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_squares() {
        for n in 0i64..=12 {
            let response = exact_square_root(n * n);
            assert!(response.sucesso);
            assert_eq!(
                response.message,
                vec![format!("The square root of {} is {n}!", n * n)]
            );
        }
    }

    #[test]
    fn test_negative_radicand_fails() {
        assert!(!exact_square_root(-1).sucesso);
        assert!(!exact_square_root(-100).sucesso);
        assert!(!approximate_square_root(-0.5).sucesso);
    }

    #[test]
    fn test_non_exact_root_falls_back_to_newton() {
        let response = exact_square_root(2);
        assert!(response.sucesso);
        assert!(response.message[0]
            .starts_with("It looks like this value does not have an exact square root."));
    }

    #[test]
    fn test_newton_converges_on_sqrt_two() {
        let estimate = newton_sqrt(2.0, DEFAULT_PRECISION);
        assert!((estimate - 1.41421356).abs() < 1e-5);
    }

    #[test]
    fn test_newton_on_large_values() {
        let estimate = newton_sqrt(1_000_000.0, DEFAULT_PRECISION);
        assert!((estimate - 1000.0).abs() < 1e-4);
    }

    #[test]
    fn test_zero_radicand_is_special_cased() {
        let response = approximate_square_root(0.0);
        assert!(response.sucesso);
        assert_eq!(
            response.message,
            vec!["The closest square root of 0 is: 0".to_string()]
        );
    }
}
