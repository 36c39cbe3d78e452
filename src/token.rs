/// A typed lexical unit produced by the tokenizer.
///
/// A well-formed token sequence alternates `Number, Operator, …, Number`. The
/// tokenizer does not enforce this; the reducer reports violations.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Token {
    /// A numeric literal or a resolved variable.
    Number(f64),
    /// One of the five binary operators.
    Operator(Operator),
}

/// A token paired with its byte position in the whitespace-stripped
/// expression.
pub type Spanned = (Token, usize);

/// The binary operators understood by the engine.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Operator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Exponentiation (`^`)
    Pow,
}

/// Precedence tiers, resolved from the highest to the lowest.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Tier {
    /// `^`
    Power,
    /// `*` and `/`
    Product,
    /// `+` and `-`
    Sum,
}

impl Operator {
    /// Returns the precedence tier this operator belongs to.
    ///
    /// # Example
    /// ```
    /// use physcalc::token::{Operator, Tier};
    ///
    /// assert_eq!(Operator::Pow.tier(), Tier::Power);
    /// assert_eq!(Operator::Div.tier(), Tier::Product);
    /// assert_eq!(Operator::Sub.tier(), Tier::Sum);
    /// ```
    #[must_use]
    pub const fn tier(self) -> Tier {
        match self {
            Self::Pow => Tier::Power,
            Self::Mul | Self::Div => Tier::Product,
            Self::Add | Self::Sub => Tier::Sum,
        }
    }

    /// Maps an operator character to its operator.
    ///
    /// # Example
    /// ```
    /// use physcalc::token::Operator;
    ///
    /// assert_eq!(Operator::from_char('^'), Some(Operator::Pow));
    /// assert_eq!(Operator::from_char('%'), None);
    /// ```
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "^",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(op) => write!(f, "{op}"),
        }
    }
}
