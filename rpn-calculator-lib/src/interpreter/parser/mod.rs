mod infix_converter;

use crate::interpreter::parser::infix_converter::infix_to_postfix;
use crate::interpreter::token::Token;
use crate::interpreter::Result;
use itertools::Itertools;
use log::trace;

/// Parses the given infix tokens into the equivalent postfix (Reverse Polish) sequence,
/// which can be evaluated without any knowledge of precedence or parentheses.
///
/// # Arguments
///
/// * `infix_tokens`: The tokens to parse, in infix format.
///
/// returns: The same numbers and operators in postfix order, with all parentheses removed.
///
/// # Errors
///
/// [`CalculationError::InvalidExpression`](crate::interpreter::error::CalculationError)
/// if the parentheses are mismatched or a token is not a number, operator or parenthesis.
///
/// # Examples
///
/// ```
/// # use rpn_calculator::interpreter::Result;
/// # fn main() -> Result<()> {
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::parser::parse;
/// use rpn_calculator::interpreter::token::Token;
///
/// let postfix_tokens = parse(tokenize("(1 + 2) * 3"))?;
/// assert_eq!(postfix_tokens[0], Token::Number(1.0));
/// assert_eq!(postfix_tokens.len(), 5);
/// # Ok(()) }
/// ```
pub fn parse(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let postfix_tokens = infix_to_postfix(infix_tokens)?;
    trace!("postfix: {}", postfix_tokens.iter().join(" "));
    Ok(postfix_tokens)
}
