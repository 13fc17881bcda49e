use thiserror::Error;

/// The ways in which evaluating an expression can fail.
///
/// Both kinds are terminal: the first stage to detect one returns it unchanged,
/// and no partial result is produced.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum CalculationError {
    /// The expression is malformed, e.g. mismatched parentheses, an unparseable
    /// number or a missing operand.
    #[error("invalid expression")]
    InvalidExpression,
    /// A division whose right operand is exactly zero.
    #[error("division by zero")]
    DivisionByZero,
}
