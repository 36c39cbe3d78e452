use crate::token::Operator;

impl Operator {
    /// Applies the operator to two operands.
    ///
    /// All arithmetic is IEEE-754 `f64`. Division by zero is not trapped: it
    /// yields a signed infinity, or NaN for `0 / 0`. Exponentiation uses
    /// `powf`, so a negative base with a fractional exponent yields NaN.
    ///
    /// # Example
    /// ```
    /// use physcalc::token::Operator;
    ///
    /// assert_eq!(Operator::Pow.apply(2.0, 10.0), 1024.0);
    /// assert_eq!(Operator::Div.apply(-1.0, 0.0), f64::NEG_INFINITY);
    /// assert!(Operator::Div.apply(0.0, 0.0).is_nan());
    /// ```
    #[must_use]
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Sub => left - right,
            Self::Mul => left * right,
            Self::Div => left / right,
            Self::Pow => left.powf(right),
        }
    }
}
