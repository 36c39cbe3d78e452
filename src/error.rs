/// Evaluation errors.
///
/// Defines every error the arithmetic core can raise while tokenizing or
/// reducing an expression: empty input, stray characters, unparsable numeric
/// literals and token sequences that do not alternate operands and operators.
pub mod eval_error;
/// Formula registry errors.
///
/// Contains the errors raised while registering, loading or evaluating named
/// formulas, including wrapped evaluation errors.
pub mod formula_error;

pub use eval_error::EvalError;
pub use formula_error::FormulaError;
