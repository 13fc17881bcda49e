use crate::interpreter::error::CalculationError;
use crate::interpreter::token::Token;
use crate::interpreter::Result;
use log::debug;

/// Evaluates a sequence of tokens in postfix (Reverse Polish) order.
///
/// Numbers are pushed onto a value stack. Each operator pops its right operand and then
/// its left operand, and pushes the result. Exactly one value has to remain at the end.
///
/// # Errors
///
/// * [`CalculationError::InvalidExpression`] if an operator is missing an operand, if
///   values are left over, or if the sequence contains a parenthesis or unrecognized token.
/// * [`CalculationError::DivisionByZero`] if a right operand of `/` is exactly zero.
///
/// # Examples
///
/// ```
/// # use rpn_calculator::interpreter::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::evaluator::evaluate;
/// use rpn_calculator::interpreter::token::Token;
///
/// let postfix_tokens = vec![
///     Token::Number(8.0),
///     Token::Number(2.0),
///     "/".parse().unwrap(),
/// ];
/// assert_eq!(evaluate(postfix_tokens)?, 4.0);
/// # Ok(()) }
/// ```
pub fn evaluate(postfix_tokens: Vec<Token>) -> Result<f64> {
    let mut operands: Vec<f64> = Vec::with_capacity(postfix_tokens.len());

    for token in postfix_tokens {
        match token {
            Token::Number(value) => operands.push(value),
            Token::Operator(operator) => {
                let (b, a) = match (operands.pop(), operands.pop()) {
                    (Some(b), Some(a)) => (b, a),
                    _ => {
                        debug!("Operator {} is missing an operand", operator);
                        return Err(CalculationError::InvalidExpression);
                    }
                };
                operands.push(operator.evaluate(a, b)?);
            }
            Token::LeftParentheses | Token::RightParentheses | Token::Unrecognized(_) => {
                debug!("Unexpected token {:?} in postfix sequence", token);
                return Err(CalculationError::InvalidExpression);
            }
        }
    }

    match operands.as_slice() {
        [result] => Ok(*result),
        leftover => {
            debug!("Expected a single result but found {} values", leftover.len());
            Err(CalculationError::InvalidExpression)
        }
    }
}
