use crate::interpreter::token::{parse_number_or_unrecognized, Token};
use itertools::Itertools;
use log::trace;

/// Splits an infix expression into tokens.
///
/// Whitespace is skipped. Operators and parentheses always form tokens of their own,
/// and every other run of characters between them becomes a single token. Runs are not
/// validated here: anything that is not a number is kept as [`Token::Unrecognized`]
/// and rejected by the later stages, so tokenizing never fails.
///
/// # Examples
///
/// ```
/// use rpn_calculator::interpreter::lexer::tokenize;
/// use rpn_calculator::interpreter::token::Token;
///
/// let tokens = tokenize("(1 + 2.5)");
/// assert_eq!(tokens.len(), 5);
/// assert_eq!(tokens[3], Token::Number(2.5));
/// ```
pub fn tokenize(expression: &str) -> Vec<Token> {
    let mut tokens = vec![];
    let mut run = String::new();

    for character in expression.chars() {
        if character.is_whitespace() {
            continue;
        }
        match Token::from_symbol(character) {
            Some(symbol) => {
                flush_run(&mut run, &mut tokens);
                tokens.push(symbol);
            }
            None => run.push(character),
        }
    }
    flush_run(&mut run, &mut tokens);

    trace!("tokenized {:?} into [{}]", expression, tokens.iter().join(", "));
    tokens
}

fn flush_run(run: &mut String, tokens: &mut Vec<Token>) {
    if run.is_empty() {
        return;
    }
    tokens.push(parse_number_or_unrecognized(run));
    run.clear();
}
