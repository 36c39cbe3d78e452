/// Core reduction logic.
///
/// Contains the three ordered passes, the shared left-to-right fold and the
/// result alias used throughout evaluation.
pub mod core;

/// Operator arithmetic.
///
/// Applies a single binary operator to two `f64` operands.
pub mod arithmetic;
