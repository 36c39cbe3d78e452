#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
///
/// Positions are byte offsets into the expression after whitespace has been
/// removed.
pub enum EvalError {
    /// The expression is empty once whitespace is removed.
    EmptyExpression,
    /// A character outside `[0-9.+\-*/^]` reached the tokenizer. Unbound
    /// variables are reported through their first character.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where the character was found.
        position:  usize,
    },
    /// A run of digits and dots is not a valid decimal literal.
    NumberFormat {
        /// The literal as written.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// An operand is missing or misplaced.
    MalformedExpression {
        /// Position of the operator lacking an operand, or of the token found
        /// where an operator was expected.
        position: usize,
    },
}

impl EvalError {
    /// Returns the position the error points at, if any.
    ///
    /// # Example
    /// ```
    /// use physcalc::error::EvalError;
    ///
    /// assert_eq!(EvalError::MalformedExpression { position: 3 }.position(), Some(3));
    /// assert_eq!(EvalError::EmptyExpression.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::EmptyExpression => None,
            Self::InvalidCharacter { position, .. }
            | Self::NumberFormat { position, .. }
            | Self::MalformedExpression { position } => Some(*position),
        }
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f, "Expression is empty."),
            Self::InvalidCharacter { character, position } => {
                write!(f, "Invalid character in expression at position {position}: '{character}'.")
            },
            Self::NumberFormat { literal, position } => {
                write!(f, "Invalid number '{literal}' at position {position}.")
            },
            Self::MalformedExpression { position } => {
                write!(f, "Malformed expression: missing operand near position {position}.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
