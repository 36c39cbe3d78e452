use log::debug;

use crate::{
    Bindings,
    error::FormulaError,
    evaluate,
    formula::{Formula, FormulaResult, builtin::builtin_formulas},
};

/// An owned collection of uniquely named formulas.
///
/// The registry is a plain value: callers that share it between threads
/// wrap it in their own synchronization.
#[derive(Debug, Clone, Default)]
pub struct FormulaRegistry {
    formulas: Vec<Formula>,
}

impl FormulaRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the predefined physics formulas.
    ///
    /// # Example
    /// ```
    /// use physcalc::formula::FormulaRegistry;
    ///
    /// let registry = FormulaRegistry::with_builtins();
    /// let velocity = registry.evaluate("Final Velocity (v = u + at)", &[2.0, 3.0, 4.0])
    ///                        .unwrap();
    /// assert_eq!(velocity, 14.0);
    /// ```
    #[must_use]
    pub fn with_builtins() -> Self {
        Self { formulas: builtin_formulas() }
    }

    /// Adds a formula after validating it.
    ///
    /// # Errors
    /// Any error from [`Formula::validate`], or `DuplicateFormula` when a
    /// formula with the same name is already registered.
    ///
    /// # Example
    /// ```
    /// use physcalc::{error::FormulaError, formula::{Formula, FormulaRegistry}};
    ///
    /// let mut registry = FormulaRegistry::new();
    /// registry.register(Formula::new("Density", ["m", "V"], "m / V")).unwrap();
    ///
    /// let again = registry.register(Formula::new("Density", ["m"], "m"));
    /// assert!(matches!(again, Err(FormulaError::DuplicateFormula { .. })));
    /// ```
    pub fn register(&mut self, formula: Formula) -> FormulaResult<()> {
        formula.validate()?;
        if self.get(formula.name()).is_some() {
            return Err(FormulaError::DuplicateFormula { name: formula.name().to_string() });
        }

        debug!("registered formula {formula}");
        self.formulas.push(formula);
        Ok(())
    }

    /// Looks a formula up by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Formula> {
        self.formulas.iter().find(|formula| formula.name() == name)
    }

    /// Returns the formula names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.formulas.iter().map(Formula::name)
    }

    /// Returns the formulas in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Formula> {
        self.formulas.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.formulas.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.formulas.is_empty()
    }

    /// Evaluates a formula, binding `values` to its variables in order.
    ///
    /// # Errors
    /// - `UnknownFormula` if no formula has this name.
    /// - `ArgumentCountMismatch` if `values` does not have one value per
    ///   variable.
    /// - `Evaluation` wrapping the error raised by the expression.
    pub fn evaluate(&self, name: &str, values: &[f64]) -> FormulaResult<f64> {
        let formula = self.get(name)
                          .ok_or_else(|| FormulaError::UnknownFormula { name: name.to_string() })?;

        let expected = formula.variables().len();
        if values.len() != expected {
            return Err(FormulaError::ArgumentCountMismatch { name: name.to_string(),
                                                             expected,
                                                             found: values.len() });
        }

        let bindings: Bindings = formula.variables()
                                        .iter()
                                        .cloned()
                                        .zip(values.iter().copied())
                                        .collect();

        debug!("evaluating formula '{name}' with {bindings:?}");
        evaluate(formula.expression(), &bindings).map_err(|source| {
                                                     FormulaError::Evaluation { name: name.to_string(),
                                                                                source }
                                                 })
    }
}
