use crate::interpreter::error::CalculationError;
use crate::interpreter::operator::BinaryOperator;
use crate::interpreter::token::Token;
use crate::interpreter::Result;
use log::debug;

/// Reorders infix tokens into postfix order using the shunting-yard algorithm.
pub(crate) fn infix_to_postfix(infix_tokens: Vec<Token>) -> Result<Vec<Token>> {
    let mut operators: Vec<Token> = vec![];
    let mut output: Vec<Token> = vec![];

    for token in infix_tokens {
        match token {
            Token::Number(_) => output.push(token),
            Token::LeftParentheses => operators.push(token),
            Token::RightParentheses => {
                parse_closing_parenthesis_token(&mut operators, &mut output)?
            }
            Token::Operator(operator) => {
                parse_operator_token(&mut operators, &mut output, operator)
            }
            Token::Unrecognized(text) => {
                debug!("Unrecognized token {:?}", text);
                return Err(CalculationError::InvalidExpression);
            }
        };
    }

    transfer_leftover_operators(&mut operators, &mut output)?;

    Ok(output)
}

fn transfer_leftover_operators(operators: &mut Vec<Token>, output: &mut Vec<Token>) -> Result<()> {
    while let Some(operator) = operators.pop() {
        match operator {
            Token::LeftParentheses => {
                debug!("Mismatched parenthesis: unclosed '('");
                return Err(CalculationError::InvalidExpression);
            }
            operator => output.push(operator),
        }
    }
    Ok(())
}

fn parse_closing_parenthesis_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
) -> Result<()> {
    loop {
        match operators.pop() {
            None => {
                debug!("Mismatched parenthesis: ')' without a matching '('");
                return Err(CalculationError::InvalidExpression);
            }
            // Discard the open parenthesis.
            Some(Token::LeftParentheses) => return Ok(()),
            Some(operator) => output.push(operator),
        }
    }
}

fn parse_operator_token(
    operators: &mut Vec<Token>,
    output: &mut Vec<Token>,
    operator: BinaryOperator,
) {
    // Equal precedence also pops, which makes every operator left-associative.
    while let Some(Token::Operator(top_of_operator_stack)) = operators.last() {
        if !top_of_operator_stack.precedence_ge(&operator) {
            break;
        }
        if let Some(other_operator_token) = operators.pop() {
            output.push(other_operator_token);
        }
    }

    operators.push(operator.token());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;
    use pretty_assertions::assert_eq;

    fn number(value: f64) -> Token {
        Token::Number(value)
    }

    fn op(symbol: &str) -> Token {
        symbol.parse().unwrap()
    }

    #[test]
    fn infix_to_postfix_simple_expression() {
        // 1 + 2
        let infix = vec![number(1.0), op("+"), number(2.0)];
        let postfix = vec![number(1.0), number(2.0), op("+")];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_simple_parenthesised_expression() {
        // 1 - (2 + 3)
        let infix = vec![
            number(1.0),
            op("-"),
            Token::LeftParentheses,
            number(2.0),
            op("+"),
            number(3.0),
            Token::RightParentheses,
        ];
        let postfix = vec![number(1.0), number(2.0), number(3.0), op("+"), op("-")];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_multi_operator_expression() {
        // 1 + 2 * 3 - 4
        let infix = tokenize("1 + 2 * 3 - 4");
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            op("*"),
            op("+"),
            number(4.0),
            op("-"),
        ];

        let actual = infix_to_postfix(infix).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_equal_precedence_is_left_associative() {
        let postfix = vec![number(8.0), number(3.0), op("-"), number(2.0), op("-")];

        let actual = infix_to_postfix(tokenize("8 - 3 - 2")).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_mixed_multiplicative_operators_are_left_associative() {
        let postfix = vec![number(8.0), number(4.0), op("/"), number(2.0), op("*")];

        let actual = infix_to_postfix(tokenize("8 / 4 * 2")).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_nested_parenthesis_expression() {
        // 1 + ((2 + 3) * 4)
        let postfix = vec![
            number(1.0),
            number(2.0),
            number(3.0),
            op("+"),
            number(4.0),
            op("*"),
            op("+"),
        ];

        let actual = infix_to_postfix(tokenize("1 + ((2 + 3) * 4)")).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_does_not_validate_operand_count() {
        let postfix = vec![op("+")];

        let actual = infix_to_postfix(tokenize("+")).unwrap();

        assert_eq!(actual, postfix)
    }

    #[test]
    fn infix_to_postfix_empty_input_is_empty_output() {
        assert!(infix_to_postfix(vec![]).unwrap().is_empty());
    }

    #[test]
    fn infix_to_postfix_mismatched_parenthesis_should_return_err() {
        // (1 + 2))
        let infix = tokenize("(1 + 2))");

        let error = infix_to_postfix(infix).expect_err("Should return Err");

        assert_eq!(error, CalculationError::InvalidExpression);
    }

    #[test]
    fn infix_to_postfix_unclosed_parenthesis_should_return_err() {
        let error = infix_to_postfix(tokenize("(1 + 2")).expect_err("Should return Err");

        assert_eq!(error, CalculationError::InvalidExpression);
    }

    #[test]
    fn infix_to_postfix_unrecognized_token_should_return_err() {
        let error = infix_to_postfix(tokenize("1 + 4.5.6")).expect_err("Should return Err");

        assert_eq!(error, CalculationError::InvalidExpression);
    }
}
