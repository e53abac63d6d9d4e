//! calc-engine - Calculation library for the calculator service
//!
//! Provides the operations behind the calcsrv HTTP API: basic arithmetic,
//! integer and approximate square roots, and an infix expression evaluator
//! with operator precedence and parentheses.
//!
//! Every operation reports its outcome as a [`CalcResponse`] — a success
//! flag plus human-readable messages — instead of raising on domain errors.
//!
//! # Example
//!
//! ```rust
//! use calc_engine::{custom_calculation, divide, sum};
//!
//! let result = sum(&[1.0, 2.0, 3.0]);
//! assert!(result.sucesso);
//!
//! // Division by zero is a structured failure, not a panic
//! let result = divide(10.0, 0.0);
//! assert!(!result.sucesso);
//!
//! // Infix expressions respect precedence and parentheses
//! let result = custom_calculation("(2+3)*4");
//! assert_eq!(result.message[0], "The result is: 20");
//! ```

pub mod arithmetic;
pub mod error;
pub mod evaluator;
pub mod response;
pub mod sqrt;

// Re-exports for convenience
pub use arithmetic::{divide, multiply, subtract, sum};
pub use error::{CalcError, Result};
pub use evaluator::{custom_calculation, evaluate};
pub use response::CalcResponse;
pub use sqrt::{approximate_square_root, exact_square_root, DEFAULT_PRECISION};
