use crate::{
    error::EvalError,
    token::{Spanned, Tier, Token},
};

pub type EvalResult<T> = Result<T, EvalError>;

/// Reduces a token sequence to a single value.
///
/// Three passes run in order, each a left-to-right fold over one precedence
/// tier: `^`, then `*` and `/`, then `+` and `-`. Because every tier folds
/// left to right, `2^3^2` is `(2^3)^2 = 64`, not `2^(3^2)`.
///
/// # Errors
/// - `EmptyExpression` if `tokens` is empty.
/// - `MalformedExpression` if an operand is missing (leading, trailing or
///   doubled operator) or two operands are adjacent.
///
/// # Example
/// ```
/// use physcalc::{
///     interpreter::reducer::core::reduce,
///     token::{Operator, Token},
/// };
///
/// let tokens = vec![(Token::Number(2.0), 0),
///                   (Token::Operator(Operator::Add), 1),
///                   (Token::Number(3.0), 2),
///                   (Token::Operator(Operator::Mul), 3),
///                   (Token::Number(4.0), 4)];
///
/// assert_eq!(reduce(tokens).unwrap(), 14.0);
/// ```
pub fn reduce(tokens: Vec<Spanned>) -> EvalResult<f64> {
    if tokens.is_empty() {
        return Err(EvalError::EmptyExpression);
    }

    let powers = fold_tier(tokens, Tier::Power)?;
    let products = fold_tier(powers, Tier::Product)?;
    fold_sum(products)
}

/// Resolves every operator of one tier, left to right.
///
/// When an operator of `tier` is found, the number just emitted is popped,
/// the following number is consumed, and their combination is emitted in
/// their place. Everything else passes through unchanged.
///
/// # Errors
/// `MalformedExpression` at the operator's position when either operand is
/// missing or is itself an operator.
pub fn fold_tier(tokens: Vec<Spanned>, tier: Tier) -> EvalResult<Vec<Spanned>> {
    let mut output: Vec<Spanned> = Vec::with_capacity(tokens.len());
    let mut iter = tokens.into_iter();

    while let Some((token, position)) = iter.next() {
        match token {
            Token::Operator(op) if op.tier() == tier => {
                let (left, left_position) = match output.pop() {
                    Some((Token::Number(value), at)) => (value, at),
                    _ => return Err(EvalError::MalformedExpression { position }),
                };
                let right = operand(iter.next(), position)?;
                output.push((Token::Number(op.apply(left, right)), left_position));
            },
            _ => output.push((token, position)),
        }
    }

    Ok(output)
}

/// Folds the remaining `+` and `-` operators into one value.
///
/// The first token is the accumulator; each following operator/operand pair
/// is applied to it in turn.
fn fold_sum(tokens: Vec<Spanned>) -> EvalResult<f64> {
    let mut iter = tokens.into_iter();

    let mut accumulator = match iter.next() {
        Some((Token::Number(value), _)) => value,
        Some((_, position)) => return Err(EvalError::MalformedExpression { position }),
        None => return Err(EvalError::EmptyExpression),
    };

    while let Some((token, position)) = iter.next() {
        let Token::Operator(op) = token else {
            return Err(EvalError::MalformedExpression { position });
        };
        let right = operand(iter.next(), position)?;
        accumulator = op.apply(accumulator, right);
    }

    Ok(accumulator)
}

/// Extracts the number an operator at `position` expects on its right.
fn operand(next: Option<Spanned>, position: usize) -> EvalResult<f64> {
    match next {
        Some((Token::Number(value), _)) => Ok(value),
        _ => Err(EvalError::MalformedExpression { position }),
    }
}
