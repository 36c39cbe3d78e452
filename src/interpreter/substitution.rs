use logos::Logos;

use crate::{interpreter::lexer::Lexeme, Bindings};

/// Replaces every whole-word bound variable in `expression` with its value.
///
/// Identifiers are found with the same lexer used for evaluation, so a name
/// only matches a complete identifier: binding `m` leaves `m2` alone, and an
/// identifier glued to a number (`2m`) is not a whole word either. Values are
/// rendered with the shortest decimal form that round-trips, without an
/// exponent. Unbound identifiers, whitespace and any other characters are
/// copied unchanged.
///
/// Evaluation does not go through this text; [`tokenize`] resolves the same
/// names directly. This function exists for callers that want to show the
/// substituted expression.
///
/// Bound names must be distinct identifiers. Values are expected to be
/// finite; infinities and NaN render as text the tokenizer rejects.
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
///
/// # Example
/// ```
/// use std::collections::HashMap;
///
/// use physcalc::interpreter::substitution::substitute;
///
/// let bindings = HashMap::from([("m".to_string(), 2.0), ("m2".to_string(), 3.5)]);
///
/// assert_eq!(substitute("m2 * m + x", &bindings), "3.5 * 2 + x");
/// ```
#[must_use]
pub fn substitute(expression: &str, bindings: &Bindings) -> String {
    let mut substituted = String::with_capacity(expression.len());
    let mut lexer = Lexeme::lexer(expression);
    let mut copied = 0;
    let mut literal_end = None;

    while let Some(lexeme) = lexer.next() {
        let span = lexer.span();
        let glued = literal_end == Some(span.start);
        literal_end = None;

        match lexeme {
            Ok(Lexeme::Literal) => literal_end = Some(span.end),
            Ok(Lexeme::Identifier) if !glued => {
                if let Some(value) = bindings.get(lexer.slice()) {
                    substituted.push_str(&expression[copied..span.start]);
                    substituted.push_str(&value.to_string());
                    copied = span.end;
                }
            },
            _ => {},
        }
    }

    substituted.push_str(&expression[copied..]);
    substituted
}

/// Returns whether `name` can be bound as a variable.
///
/// Valid names start with an ASCII letter or `_` and continue with ASCII
/// letters, digits or `_`.
///
/// # Example
/// ```
/// use physcalc::interpreter::substitution::is_identifier;
///
/// assert!(is_identifier("v0"));
/// assert!(!is_identifier("0v"));
/// assert!(!is_identifier("a b"));
/// ```
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut lexer = Lexeme::lexer(name);
    matches!(lexer.next(), Some(Ok(Lexeme::Identifier))) && lexer.next().is_none()
}
