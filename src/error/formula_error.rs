use crate::error::EvalError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors raised by the formula registry.
pub enum FormulaError {
    /// The formula name is blank.
    EmptyName,
    /// The formula expression is blank.
    EmptyExpression {
        /// The formula name.
        name: String,
    },
    /// A formula must declare between one and five variables.
    VariableCountOutOfRange {
        /// The number of declared variables.
        count: usize,
    },
    /// A variable name is not an identifier.
    InvalidVariableName {
        /// The rejected variable name.
        variable: String,
    },
    /// The same variable was declared twice.
    DuplicateVariable {
        /// The repeated variable name.
        variable: String,
    },
    /// The number of labels does not match the number of variables.
    LabelCountMismatch {
        /// Number of declared variables.
        expected: usize,
        /// Number of labels supplied.
        found:    usize,
    },
    /// A formula with this name is already registered.
    DuplicateFormula {
        /// The formula name.
        name: String,
    },
    /// No formula with this name is registered.
    UnknownFormula {
        /// The formula name.
        name: String,
    },
    /// The number of values does not match the formula's variables.
    ArgumentCountMismatch {
        /// The formula name.
        name:     String,
        /// Number of declared variables.
        expected: usize,
        /// Number of values supplied.
        found:    usize,
    },
    /// A formula definition line could not be read.
    Syntax {
        /// Details about the problem.
        message: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The formula expression failed to evaluate.
    Evaluation {
        /// The formula name.
        name:   String,
        /// The underlying evaluation error.
        source: EvalError,
    },
}

impl std::fmt::Display for FormulaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Formula name is empty."),
            Self::EmptyExpression { name } => {
                write!(f, "Formula '{name}' has an empty expression.")
            },
            Self::VariableCountOutOfRange { count } => write!(f,
                                                              "A formula needs between 1 and 5 variables, but {count} were given."),
            Self::InvalidVariableName { variable } => {
                write!(f, "Variable name '{variable}' is not a valid identifier.")
            },
            Self::DuplicateVariable { variable } => {
                write!(f, "Variable '{variable}' is declared more than once.")
            },
            Self::LabelCountMismatch { expected, found } => {
                write!(f, "Expected {expected} variable labels, but found {found}.")
            },
            Self::DuplicateFormula { name } => {
                write!(f, "Formula '{name}' is already registered.")
            },
            Self::UnknownFormula { name } => write!(f, "Formula '{name}' is unknown."),
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                           "Formula '{name}' takes {expected} values, but {found} were given."),
            Self::Syntax { message, line } => write!(f, "Error on line {line}: {message}"),
            Self::Evaluation { name, source } => {
                write!(f, "Formula '{name}' could not be evaluated: {source}")
            },
        }
    }
}

impl std::error::Error for FormulaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Evaluation { source, .. } => Some(source),
            _ => None,
        }
    }
}
