//! # physcalc
//!
//! physcalc is a small physics formula calculator written in Rust.
//! Its core evaluates arithmetic expressions over named variables: bound
//! names are resolved, the text is tokenized, and the token sequence is
//! reduced one precedence tier at a time to a single `f64`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::collections::HashMap;

use crate::interpreter::{
    lexer::{compact, tokenize},
    reducer::core::{EvalResult, reduce},
};

/// Provides unified error types for evaluation and the formula registry.
///
/// This module defines the errors raised while tokenizing or reducing an
/// expression, and those raised while registering, loading or evaluating
/// named formulas. Every error carries enough detail (offending character,
/// literal, position, formula name) to build a user-facing message.
pub mod error;
/// Named formulas and the registry that owns them.
///
/// A formula pairs an expression with its ordered variables, optional labels
/// and a unit. The registry validates new formulas, ships the predefined
/// physics formulas, and evaluates a formula from positional values.
pub mod formula;
/// Orchestrates expression evaluation.
///
/// This module ties together substitution, tokenization and reduction.
///
/// # Responsibilities
/// - Resolves bound variable names, whole word by whole word.
/// - Scans text into positioned tokens.
/// - Reduces tokens by precedence tier into one value.
pub mod interpreter;
/// Defines the lexical units the evaluator works on.
///
/// This module declares the `Token` and `Operator` types together with the
/// precedence tiers operators are grouped into.
pub mod token;

/// Maps variable names to their values for one evaluation.
///
/// Names must be distinct identifiers. Values are expected to be finite.
pub type Bindings = HashMap<String, f64>;

/// Evaluates an expression with the given variable bindings.
///
/// Whitespace is removed, bound variables are resolved, and the resulting
/// tokens are reduced. Operators group left to right within each precedence
/// tier, including `^`. The call is pure: identical inputs always produce
/// bit-identical results.
///
/// # Errors
/// - `EmptyExpression` if nothing but whitespace was given.
/// - `InvalidCharacter` for stray characters and unbound variables.
/// - `NumberFormat` for literals like `1.2.3`.
/// - `MalformedExpression` for missing or misplaced operands.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
///
/// use physcalc::{error::EvalError, evaluate};
///
/// let bindings = HashMap::from([("a".to_string(), 2.0),
///                               ("b".to_string(), 3.0),
///                               ("c".to_string(), 4.0)]);
/// assert_eq!(evaluate("a * b + c", &bindings), Ok(10.0));
///
/// // `x` has no binding.
/// let res = evaluate("3 + x", &bindings);
/// assert!(matches!(res, Err(EvalError::InvalidCharacter { character: 'x', .. })));
/// ```
pub fn evaluate(expression: &str, bindings: &Bindings) -> EvalResult<f64> {
    let expression = compact(expression);
    if expression.is_empty() {
        return Err(error::EvalError::EmptyExpression);
    }

    let tokens = tokenize(&expression, bindings)?;
    reduce(tokens)
}
