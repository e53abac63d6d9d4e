//! Query parameter models for the calculator routes

use serde::Deserialize;

/// Operands for `/subtracao` and `/divisao`
#[derive(Debug, Deserialize)]
pub struct BinaryOperands {
    pub x: f64,
    pub y: f64,
}

/// Radicand for `/raizQuadrada`
#[derive(Debug, Deserialize)]
pub struct IntRadicand {
    pub x: i64,
}

/// Radicand for `/raizQuadradaNaoExata`
#[derive(Debug, Deserialize)]
pub struct RealRadicand {
    pub x: f64,
}

/// Expression for `/calculoPersonalizado`
#[derive(Debug, Deserialize)]
pub struct FormulaQuery {
    pub formula: String,
}
