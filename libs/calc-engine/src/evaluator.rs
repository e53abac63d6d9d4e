//! Infix expression evaluator
//!
//! Evaluates arithmetic expressions with operator precedence and
//! parentheses in a single left-to-right scan, using two stacks (operands
//! and operators) instead of an explicit parse tree.
//!
//! Accepted input: unsigned integer literals, the binary operators
//! `+ - * /`, parentheses and whitespace. Anything else — including
//! unbalanced parentheses and missing operands — is rejected as a
//! structured [`CalcError`] rather than a panic.

use tracing::debug;

use crate::error::{CalcError, Result};
use crate::response::CalcResponse;

/// Operator precedence: `*` and `/` bind tighter than `+` and `-`.
///
/// `(` ranks 0 so a pending operator never pops past an open parenthesis.
fn precedence(op: char) -> u8 {
    match op {
        '+' | '-' => 1,
        '*' | '/' => 2,
        _ => 0,
    }
}

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn missing_operand(op: char) -> CalcError {
    CalcError::expression(format!("operator '{op}' is missing an operand"))
}

/// Pop two operands, apply `op`, push the result.
///
/// The first popped value is the RIGHT-hand operand: the most recently
/// pushed value sits on top of the stack.
fn apply_operator(op: char, operands: &mut Vec<f64>) -> Result<()> {
    let b = operands.pop().ok_or_else(|| missing_operand(op))?;
    let a = operands.pop().ok_or_else(|| missing_operand(op))?;

    let result = match op {
        '+' => a + b,
        '-' => a - b,
        '*' => a * b,
        // IEEE division: a zero divisor yields ±inf here. Only the
        // dedicated division operation guards against it.
        '/' => a / b,
        _ => return Err(CalcError::expression(format!("invalid operator '{op}'"))),
    };

    operands.push(result);
    Ok(())
}

/// Evaluate an infix arithmetic expression.
///
/// ```rust
/// use calc_engine::evaluate;
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
/// assert!(evaluate("(2+3").is_err());
/// ```
pub fn evaluate(expression: &str) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::new();
    let mut operators: Vec<char> = Vec::new();

    let chars: Vec<char> = expression.chars().collect();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        if c.is_ascii_digit() {
            // Accumulate consecutive digits into one unsigned number.
            let mut value = 0.0;
            while i < chars.len() && chars[i].is_ascii_digit() {
                value = value * 10.0 + f64::from(chars[i] as u8 - b'0');
                i += 1;
            }
            operands.push(value);
            continue;
        }

        if c == '(' {
            operators.push(c);
        } else if c == ')' {
            // Resolve everything back to the matching open parenthesis.
            loop {
                match operators.pop() {
                    Some('(') => break,
                    Some(op) => apply_operator(op, &mut operands)?,
                    None => {
                        return Err(CalcError::expression(
                            "unbalanced parenthesis: ')' without matching '('",
                        ))
                    },
                }
            }
        } else if is_operator(c) {
            // Left-associativity: resolve pending operators of greater or
            // equal precedence before pushing this one.
            while let Some(&top) = operators.last() {
                if precedence(top) < precedence(c) {
                    break;
                }
                operators.pop();
                apply_operator(top, &mut operands)?;
            }
            operators.push(c);
        } else {
            return Err(CalcError::expression(format!(
                "unexpected character '{c}'"
            )));
        }

        i += 1;
    }

    // Apply whatever is still pending.
    while let Some(op) = operators.pop() {
        if op == '(' {
            return Err(CalcError::expression(
                "unbalanced parenthesis: '(' was never closed",
            ));
        }
        apply_operator(op, &mut operands)?;
    }

    let result = operands
        .pop()
        .ok_or_else(|| CalcError::expression("empty expression"))?;
    if !operands.is_empty() {
        return Err(CalcError::expression(
            "malformed expression: operand without an operator",
        ));
    }

    debug!(expression, result, "expression evaluated");
    Ok(result)
}

/// Evaluate an expression and wrap the outcome in a [`CalcResponse`].
///
/// This is the contract behind the `/calculoPersonalizado` route: syntax
/// errors surface as structured failures.
pub fn custom_calculation(expression: &str) -> CalcResponse {
    match evaluate(expression) {
        Ok(result) => CalcResponse::success(format!("The result is: {result}")),
        Err(e) => CalcResponse::failure(e.to_string()),
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;

    #[test]
    fn test_single_number() {
        assert_eq!(evaluate("42").unwrap(), 42.0);
    }

    #[test]
    fn test_multi_digit_numbers() {
        assert_eq!(evaluate("12+345").unwrap(), 357.0);
    }

    #[test]
    fn test_operator_precedence() {
        // 2 + 3 * 4 = 2 + 12 = 14
        assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
        assert_eq!(evaluate("2*3+4").unwrap(), 10.0);
    }

    #[test]
    fn test_parentheses_override_precedence() {
        assert_eq!(evaluate("(2+3)*4").unwrap(), 20.0);
        assert_eq!(evaluate("2*(3+4)").unwrap(), 14.0);
    }

    #[test]
    fn test_left_associativity() {
        // (10 - 2) - 3, not 10 - (2 - 3)
        assert_eq!(evaluate("10-2-3").unwrap(), 5.0);
        assert_eq!(evaluate("100/5/2").unwrap(), 10.0);
    }

    #[test]
    fn test_nested_parentheses() {
        assert_eq!(evaluate("((1+2)*(3+4))").unwrap(), 21.0);
    }

    #[test]
    fn test_whitespace_ignored() {
        assert_eq!(evaluate(" 2 + 3 ").unwrap(), 5.0);
    }

    #[test]
    fn test_division_inside_expression_is_unguarded() {
        assert_eq!(evaluate("8/0").unwrap(), f64::INFINITY);
    }

    #[test]
    fn test_unexpected_character() {
        assert!(evaluate("2+a").is_err());
        assert!(evaluate("1.5+2").is_err());
    }

    #[test]
    fn test_unbalanced_parentheses() {
        assert!(evaluate("(2+3").is_err());
        assert!(evaluate("2+3)").is_err());
    }

    #[test]
    fn test_missing_operand() {
        assert!(evaluate("2+").is_err());
        assert!(evaluate("*3").is_err());
    }

    #[test]
    fn test_empty_expression() {
        assert!(evaluate("").is_err());
        assert!(evaluate("   ").is_err());
        assert!(evaluate("()").is_err());
    }

    #[test]
    fn test_adjacent_operands() {
        assert!(evaluate("2 3").is_err());
    }

    #[test]
    fn test_custom_calculation_success_message() {
        let response = custom_calculation("2+3*4");
        assert!(response.sucesso);
        assert_eq!(response.message, vec!["The result is: 14".to_string()]);
    }

    #[test]
    fn test_custom_calculation_reports_syntax_errors() {
        let response = custom_calculation("(2+3");
        assert!(!response.sucesso);
        assert!(!response.message.is_empty());
    }
}
