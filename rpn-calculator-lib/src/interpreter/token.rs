use crate::interpreter::operator::BinaryOperator;
use std::convert::Infallible;
use std::fmt;
use std::fmt::Formatter;
use std::str;

/// A discrete part of an expression
#[derive(Clone)]
pub enum Token {
    Number(f64),
    Operator(BinaryOperator),
    LeftParentheses,
    RightParentheses,
    /// A run of characters that is neither a number nor a symbol, e.g. `4.5.6`.
    Unrecognized(String),
}

impl Token {
    /// Returns the token for a single-character symbol: an operator or a parenthesis.
    pub fn from_symbol(symbol: char) -> Option<Token> {
        match symbol {
            '(' => Some(Token::LeftParentheses),
            ')' => Some(Token::RightParentheses),
            symbol => BinaryOperator::from_symbol(symbol).map(Token::Operator),
        }
    }
}

impl PartialEq for Token {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            // Bitwise, so that a `NaN` literal equals itself.
            (Token::Number(a), Token::Number(b)) => a.to_bits() == b.to_bits(),
            (Token::Operator(a), Token::Operator(b)) => a == b,
            (Token::LeftParentheses, Token::LeftParentheses)
            | (Token::RightParentheses, Token::RightParentheses) => true,
            (Token::Unrecognized(a), Token::Unrecognized(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Token {}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Number(value) => write!(f, "{}", value),
            Token::Operator(operator) => write!(f, "{}", operator),
            Token::LeftParentheses => write!(f, "("),
            Token::RightParentheses => write!(f, ")"),
            Token::Unrecognized(text) => write!(f, "{}", text),
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Token::Unrecognized(text) => write!(f, "Unrecognized({:?})", text),
            token => write!(f, "{}", token),
        }
    }
}

impl str::FromStr for Token {
    type Err = Infallible;

    fn from_str(input: &str) -> Result<Token, Self::Err> {
        let mut characters = input.chars();
        if let (Some(symbol), None) = (characters.next(), characters.next()) {
            if let Some(token) = Token::from_symbol(symbol) {
                return Ok(token);
            }
        }
        Ok(parse_number_or_unrecognized(input))
    }
}

/// Parses a run as a number. Runs that do not parse, or whose digits overflow to infinity,
/// are kept as [`Token::Unrecognized`].
pub(crate) fn parse_number_or_unrecognized(text: &str) -> Token {
    match text.parse::<f64>() {
        Ok(value) if value.is_infinite() && !is_infinity_literal(text) => {
            Token::Unrecognized(text.to_string())
        }
        Ok(value) => Token::Number(value),
        Err(_) => Token::Unrecognized(text.to_string()),
    }
}

fn is_infinity_literal(text: &str) -> bool {
    text.eq_ignore_ascii_case("inf") || text.eq_ignore_ascii_case("infinity")
}
