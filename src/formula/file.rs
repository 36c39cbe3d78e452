use crate::{
    error::FormulaError,
    formula::{Formula, FormulaResult},
};

/// Parses formula definitions, one per line.
///
/// Each line has three or five `|`-separated fields:
///
/// ```text
/// name | var1, var2, ... | expression
/// name | var1, var2, ... | expression | result label | unit
/// ```
///
/// Blank lines and lines starting with `#` are ignored. Fields are trimmed.
/// Each formula is validated, so a bad variable list is reported with the
/// line it came from.
///
/// # Errors
/// `Syntax` with the 1-based line number when a line has the wrong number of
/// fields or describes an invalid formula.
///
/// # Example
/// ```
/// use physcalc::formula::file::parse_formulas;
///
/// let source = "# mechanics\n\
///               Momentum | m, v | m*v | Momentum | kg*m/s\n\
///               Average | a, b | a/2 + b/2\n";
/// let formulas = parse_formulas(source).unwrap();
///
/// assert_eq!(formulas.len(), 2);
/// assert_eq!(formulas[0].describe(6.0), "Momentum = 6.00 kg*m/s");
/// assert_eq!(formulas[1].variables(), ["a", "b"]);
/// ```
pub fn parse_formulas(source: &str) -> FormulaResult<Vec<Formula>> {
    let mut formulas = Vec::new();

    for (index, raw) in source.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let formula = parse_line(trimmed, line)?;
        formula.validate()
               .map_err(|e| FormulaError::Syntax { message: e.to_string(),
                                                   line })?;
        formulas.push(formula);
    }

    Ok(formulas)
}

/// Splits one definition line into a formula.
fn parse_line(text: &str, line: usize) -> FormulaResult<Formula> {
    let fields: Vec<&str> = text.split('|').map(str::trim).collect();

    match fields.as_slice() {
        [name, variables, expression] => {
            Ok(Formula::new(*name, Formula::parse_variables(variables), *expression))
        },
        [name, variables, expression, label, unit] => {
            Ok(Formula::new(*name, Formula::parse_variables(variables), *expression)
               .with_result(*label, *unit))
        },
        _ => Err(FormulaError::Syntax { message: format!("Expected 3 or 5 '|'-separated fields, found {}.",
                                                         fields.len()),
                                        line }),
    }
}
