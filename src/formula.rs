/// The `Formula` type and its validation.
///
/// A formula is an expression together with the ordered variables its
/// positional values bind to, optional labels for those variables, and an
/// optional result label and unit used when describing a result.
pub mod core;

/// Predefined physics formulas.
///
/// Kinematics, force and energy formulas available in every registry built
/// with `FormulaRegistry::with_builtins`.
pub mod builtin;

/// Formula definition files.
///
/// Reads formulas from a line-oriented text format so that a registry can be
/// extended without recompiling.
pub mod file;

/// The formula registry.
///
/// Owns formulas by name, rejects invalid or duplicate registrations, and
/// evaluates a formula from a list of values.
pub mod registry;

pub use self::core::{Formula, FormulaResult, MAX_VARIABLES};
pub use registry::FormulaRegistry;
