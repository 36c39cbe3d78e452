/// The lexer module tokenizes expression text.
///
/// The lexer reads the whitespace-stripped expression and produces typed
/// tokens: numeric literals, operators, and variables resolved through the
/// caller's bindings. This is the first stage of evaluation.
///
/// # Responsibilities
/// - Converts the character stream into `(Token, position)` pairs.
/// - Resolves whole-word identifiers against the bindings.
/// - Reports invalid characters and unparsable numeric literals.
pub mod lexer;
/// The reducer module collapses a token sequence into a single value.
///
/// Operators are resolved one precedence tier at a time, each tier being a
/// left-to-right fold over the output of the previous one.
///
/// # Responsibilities
/// - Applies the power, product and sum passes in that order.
/// - Reports missing or misplaced operands with their position.
pub mod reducer;
/// Textual variable substitution.
///
/// Replaces whole-word variable names in an expression with the decimal
/// rendering of their bound values, leaving everything else untouched.
pub mod substitution;
