use std::collections::HashSet;

use crate::{error::FormulaError, interpreter::substitution::is_identifier};

pub type FormulaResult<T> = Result<T, FormulaError>;

/// The largest number of variables a formula may declare.
pub const MAX_VARIABLES: usize = 5;

/// A named expression over an ordered list of variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Formula {
    name:         String,
    variables:    Vec<String>,
    labels:       Vec<String>,
    expression:   String,
    result_label: Option<String>,
    unit:         Option<String>,
}

impl Formula {
    /// Creates a formula. Variable labels default to the variable names.
    ///
    /// Nothing is validated here; see [`Formula::validate`].
    ///
    /// # Example
    /// ```
    /// use physcalc::formula::Formula;
    ///
    /// let area = Formula::new("Area", ["w", "h"], "w * h");
    /// assert_eq!(area.variables(), ["w", "h"]);
    /// assert_eq!(area.labels(), ["w", "h"]);
    /// ```
    pub fn new<I, S>(name: impl Into<String>, variables: I, expression: impl Into<String>) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        let variables: Vec<String> = variables.into_iter().map(Into::into).collect();
        Self { name: name.into(),
               labels: variables.clone(),
               variables,
               expression: expression.into(),
               result_label: None,
               unit: None }
    }

    /// Replaces the human-readable variable labels.
    #[must_use]
    pub fn with_labels<I, S>(mut self, labels: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the label and unit used by [`Formula::describe`].
    #[must_use]
    pub fn with_result(mut self, label: impl Into<String>, unit: impl Into<String>) -> Self {
        self.result_label = Some(label.into());
        self.unit = Some(unit.into());
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn variables(&self) -> &[String] {
        &self.variables
    }

    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[must_use]
    pub fn expression(&self) -> &str {
        &self.expression
    }

    #[must_use]
    pub fn unit(&self) -> Option<&str> {
        self.unit.as_deref()
    }

    /// Splits a comma-separated list of variable names.
    ///
    /// Whitespace around each name is trimmed. Empty entries are kept so that
    /// validation can reject them.
    ///
    /// # Example
    /// ```
    /// use physcalc::formula::Formula;
    ///
    /// assert_eq!(Formula::parse_variables(" m ,g,  h"), ["m", "g", "h"]);
    /// ```
    #[must_use]
    pub fn parse_variables(text: &str) -> Vec<String> {
        text.trim().split(',').map(|name| name.trim().to_string()).collect()
    }

    /// Checks that the formula can be registered.
    ///
    /// The name and expression must not be blank, there must be between one
    /// and [`MAX_VARIABLES`] variables, each an identifier and declared once,
    /// and there must be one label per variable.
    pub fn validate(&self) -> FormulaResult<()> {
        if self.name.trim().is_empty() {
            return Err(FormulaError::EmptyName);
        }
        if self.expression.trim().is_empty() {
            return Err(FormulaError::EmptyExpression { name: self.name.clone() });
        }

        let count = self.variables.len();
        if !(1..=MAX_VARIABLES).contains(&count) {
            return Err(FormulaError::VariableCountOutOfRange { count });
        }

        let mut seen = HashSet::new();
        for variable in &self.variables {
            if !is_identifier(variable) {
                return Err(FormulaError::InvalidVariableName { variable: variable.clone() });
            }
            if !seen.insert(variable.as_str()) {
                return Err(FormulaError::DuplicateVariable { variable: variable.clone() });
            }
        }

        if self.labels.len() != count {
            return Err(FormulaError::LabelCountMismatch { expected: count,
                                                          found:    self.labels.len(), });
        }

        Ok(())
    }

    /// Formats a result of this formula for display.
    ///
    /// Values are shown with two decimals, preceded by the result label and
    /// followed by the unit when the formula has them.
    ///
    /// # Example
    /// ```
    /// use physcalc::formula::Formula;
    ///
    /// let force = Formula::new("Force", ["m", "a"], "m*a").with_result("Force", "N");
    /// assert_eq!(force.describe(19.6133), "Force = 19.61 N");
    ///
    /// let plain = Formula::new("Sum", ["a", "b"], "a+b");
    /// assert_eq!(plain.describe(3.0), "3.00");
    /// ```
    #[must_use]
    pub fn describe(&self, value: f64) -> String {
        let mut text = match &self.result_label {
            Some(label) => format!("{label} = {value:.2}"),
            None => format!("{value:.2}"),
        };
        if let Some(unit) = &self.unit
           && !unit.is_empty()
        {
            text.push(' ');
            text.push_str(unit);
        }
        text
    }
}

impl std::fmt::Display for Formula {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}]: {}", self.name, self.variables.join(", "), self.expression)
    }
}
