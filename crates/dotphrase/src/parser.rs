//! Formula parser implementation using nom.
//!
//! This module implements a parser for the calculation-formula grammar
//! (`target = expression`). The grammar is deliberately closed: numeric
//! literals, named references, parentheses, unary minus, and the four binary
//! arithmetic operators. Any other token is a parse error, which is how the
//! evaluator guarantees it never executes caller-supplied code.

use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{char, digit1, multispace0, one_of},
    combinator::{all_consuming, map, opt, recognize},
    sequence::{delimited, pair, preceded, terminated},
    IResult,
};

use crate::ast::{BinaryOp, Expr, Formula};
use crate::error::{FormulaError, FormulaResult};

/// Parse a calculation formula string.
///
/// # Arguments
/// * `input` - The formula string to parse, e.g. `"bmi = weight / (height * height)"`
///
/// # Returns
/// The parsed formula AST or an error
///
/// # Examples
///
/// ```rust
/// use dotphrase::parse_formula;
///
/// // Simple scaling
/// let formula = parse_formula("total = dose * 3").unwrap();
/// assert_eq!(formula.target, "total");
///
/// // Precedence and grouping
/// let formula = parse_formula("bmi = weight / (height * height)").unwrap();
/// assert_eq!(formula.references(), vec!["weight", "height"]);
///
/// // Function calls are outside the grammar and refused
/// assert!(parse_formula("x = alert(1)").is_err());
/// ```
pub fn parse_formula(input: &str) -> FormulaResult<Formula> {
    let input = input.trim();
    if input.is_empty() {
        return Err(FormulaError::EmptyFormula);
    }

    match all_consuming(formula)(input) {
        Ok((_, parsed)) => Ok(parsed),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            let position = input.len() - e.input.len();
            Err(FormulaError::ParseError {
                position,
                message: format!("unexpected input at: '{}'", truncate(e.input, 20)),
            })
        }
        Err(nom::Err::Incomplete(_)) => Err(FormulaError::Incomplete("formula".to_string())),
    }
}

fn truncate(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((index, _)) => &s[..index],
        None => s,
    }
}

// ============================================================================
// Top-level formula
// ============================================================================

fn formula(input: &str) -> IResult<&str, Formula> {
    let (input, target) = preceded(ws, identifier)(input)?;
    let (input, _) = preceded(ws, char('='))(input)?;
    let (input, body) = terminated(expression, ws)(input)?;

    Ok((
        input,
        Formula {
            target: target.to_string(),
            body,
        },
    ))
}

// ============================================================================
// Expression levels (standard precedence, left associative)
// ============================================================================

fn expression(input: &str) -> IResult<&str, Expr> {
    let (input, first) = term(input)?;
    additive_tail(input, first)
}

fn additive_tail(input: &str, left: Expr) -> IResult<&str, Expr> {
    let result = preceded(ws, one_of("+-"))(input);

    match result {
        Ok((remaining, symbol)) => {
            let (remaining, right) = term(remaining)?;
            let op = match symbol {
                '+' => BinaryOp::Add,
                _ => BinaryOp::Subtract,
            };
            // Continue folding for more operators (left associative)
            additive_tail(remaining, Expr::binary(op, left, right))
        }
        Err(_) => Ok((input, left)),
    }
}

fn term(input: &str) -> IResult<&str, Expr> {
    let (input, first) = factor(input)?;
    multiplicative_tail(input, first)
}

fn multiplicative_tail(input: &str, left: Expr) -> IResult<&str, Expr> {
    let result = preceded(ws, one_of("*/"))(input);

    match result {
        Ok((remaining, symbol)) => {
            let (remaining, right) = factor(remaining)?;
            let op = match symbol {
                '*' => BinaryOp::Multiply,
                _ => BinaryOp::Divide,
            };
            multiplicative_tail(remaining, Expr::binary(op, left, right))
        }
        Err(_) => Ok((input, left)),
    }
}

// ============================================================================
// Factors
// ============================================================================

fn factor(input: &str) -> IResult<&str, Expr> {
    preceded(
        ws,
        alt((
            map(preceded(char('-'), factor), |inner| {
                Expr::Negate(Box::new(inner))
            }),
            map(
                delimited(char('('), expression, preceded(ws, char(')'))),
                |inner| Expr::Grouped(Box::new(inner)),
            ),
            number_literal,
            map(identifier, |name: &str| Expr::Reference(name.to_string())),
        )),
    )(input)
}

fn number_literal(input: &str) -> IResult<&str, Expr> {
    map(
        recognize(pair(digit1, opt(pair(char('.'), digit1)))),
        |s: &str| Expr::Number(s.parse().unwrap_or(0.0)),
    )(input)
}

fn identifier(input: &str) -> IResult<&str, &str> {
    recognize(pair(
        take_while1(|c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(|c: char| c.is_ascii_alphanumeric() || c == '_'),
    ))(input)
}

// ============================================================================
// Whitespace handling
// ============================================================================

/// Optional whitespace
fn ws(input: &str) -> IResult<&str, &str> {
    multispace0(input)
}

// ============================================================================
// Tests
// ============================================================================
