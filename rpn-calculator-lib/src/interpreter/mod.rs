pub mod error;
pub mod evaluator;
pub mod lexer;
pub mod operator;
pub mod parser;
pub mod token;

use crate::interpreter::error::CalculationError;
use crate::interpreter::evaluator::evaluate;
use crate::interpreter::token::Token;
use anyhow::Context;
use itertools::Itertools;
use string_builder::Builder;

pub type Result<T> = std::result::Result<T, CalculationError>;

/// Evaluates the given arithmetic expression.
///
/// The expression is tokenized, converted into postfix order and evaluated, in that order.
/// The first error any stage runs into is returned unchanged.
///
/// # Arguments
///
/// * `expression`: A text expression in infix format, using decimal numbers, `+ - * /`
///   and parentheses. Whitespace is ignored.
///
/// returns: The value of the expression.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::error::CalculationError;
/// use rpn_calculator::interpreter::evaluate_expression;
///
/// assert_eq!(evaluate_expression("3 + 5 * (2 - 8)"), Ok(-27.0));
/// assert_eq!(evaluate_expression("1/0"), Err(CalculationError::DivisionByZero));
/// ```
pub fn evaluate_expression(expression: &str) -> Result<f64> {
    let infix_tokens = lexer::tokenize(expression);
    let postfix_tokens = parser::parse(infix_tokens)?;
    evaluate(postfix_tokens)
}

/// Converts the given expression into postfix notation, with a single space between tokens.
///
/// # Examples
///
/// ```
/// # use rpn_calculator::interpreter::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::to_postfix_string;
///
/// assert_eq!(to_postfix_string("4 + 3 * 2 / 1")?, "4 3 2 * 1 / +");
/// # Ok(()) }
/// ```
pub fn to_postfix_string(expression: &str) -> Result<String> {
    let postfix_tokens = parser::parse(lexer::tokenize(expression))?;
    Ok(postfix_tokens.iter().join(" "))
}

/// Pretty-prints the given infix tokens with added whitespace.
///
/// # Arguments
///
/// * `tokens`: The tokens to print.
///
/// returns: A pretty-printed text-version of the given tokens.
///
/// # Examples
///
/// ```
/// # use anyhow::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::tokens_to_string;
///
/// let tokens = tokenize("3+5*(2-8)");
/// assert_eq!(tokens_to_string(&tokens)?, "3 + 5 * (2 - 8)");
/// # Ok::<(), anyhow::Error>(()) }
/// ```
pub fn tokens_to_string(tokens: &[Token]) -> anyhow::Result<String> {
    let mut builder = Builder::new(tokens.len());

    for token in tokens {
        match token {
            Token::Operator(_) => {
                builder.append(" ");
                builder.append(token.to_string());
                builder.append(" ");
            }
            _ => builder.append(token.to_string()),
        }
    }

    builder.string().context("Failed to build token string")
}
