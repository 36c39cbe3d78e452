use logos::Logos;

use crate::{
    error::EvalError,
    interpreter::reducer::core::EvalResult,
    token::{Operator, Spanned, Token},
    Bindings,
};

/// Represents a raw lexeme in the expression text.
///
/// Lexemes are untyped slices; [`tokenize`] turns them into [`Token`]s by
/// parsing literals and resolving identifiers.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Lexeme {
    /// A run of digits and dots, such as `3.14`, `.5` or the invalid `1.2.3`.
    #[regex(r"[0-9.]+")]
    Literal,
    /// Variable names such as `m` or `v0`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Identifier,
    /// `+`, `-`, `*`, `/` or `^`.
    #[regex(r"[-+*/^]", operator)]
    Operator(Operator),
}

/// Maps the current one-character slice to its operator.
fn operator(lex: &logos::Lexer<Lexeme>) -> Option<Operator> {
    lex.slice().chars().next().and_then(Operator::from_char)
}

/// Removes every whitespace character from an expression.
///
/// # Example
/// ```
/// use physcalc::interpreter::lexer::compact;
///
/// assert_eq!(compact(" a * b\t+ 1 "), "a*b+1");
/// ```
#[must_use]
pub fn compact(expression: &str) -> String {
    expression.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Scans an expression into a sequence of positioned tokens.
///
/// The scan is a single left-to-right pass. Digits and dots accumulate into
/// numeric literals, operator characters emit operator tokens, and identifiers
/// are looked up in `bindings`. An identifier is only resolved when it is a
/// whole word: one glued to a preceding literal, as in `2m`, is rejected.
///
/// Whitespace should be removed with [`compact`] beforehand; any remaining
/// whitespace is reported as an invalid character. Adjacent or dangling
/// operators are not rejected here.
///
/// # Errors
/// - `InvalidCharacter` for any character outside `[0-9.+\-*/^]` that is not
///   part of a bound identifier.
/// - `NumberFormat` for literals such as `1.2.3` or `.`.
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use physcalc::{
///     interpreter::lexer::tokenize,
///     token::{Operator, Token},
/// };
///
/// let bindings = HashMap::from([("m".to_string(), 2.0)]);
/// let tokens = tokenize("m*4.5", &bindings).unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Number(2.0), 0),
///                 (Token::Operator(Operator::Mul), 1),
///                 (Token::Number(4.5), 2)]);
/// ```
pub fn tokenize(expression: &str, bindings: &Bindings) -> EvalResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Lexeme::lexer(expression);
    let mut literal_end = None;

    while let Some(lexeme) = lexer.next() {
        let position = lexer.span().start;
        let glued = literal_end == Some(position);
        literal_end = None;

        let token = match lexeme {
            Ok(Lexeme::Literal) => {
                literal_end = Some(lexer.span().end);
                Token::Number(parse_literal(lexer.slice(), position)?)
            },
            Ok(Lexeme::Identifier) => match bindings.get(lexer.slice()) {
                Some(value) if !glued => Token::Number(*value),
                _ => return Err(invalid_character(expression, position)),
            },
            Ok(Lexeme::Operator(op)) => Token::Operator(op),
            Err(()) => return Err(invalid_character(expression, position)),
        };

        tokens.push((token, position));
    }

    Ok(tokens)
}

/// Parses a numeric literal slice as `f64`.
fn parse_literal(literal: &str, position: usize) -> EvalResult<f64> {
    literal.parse().map_err(|_| EvalError::NumberFormat { literal: literal.to_string(),
                                                          position })
}

/// Builds an `InvalidCharacter` error for the character starting at
/// `position`.
fn invalid_character(expression: &str, position: usize) -> EvalError {
    let character = expression[position..].chars().next().unwrap_or('\u{FFFD}');
    EvalError::InvalidCharacter { character,
                                  position }
}
