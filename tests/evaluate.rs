use physcalc::{
    Bindings,
    error::EvalError,
    evaluate,
    interpreter::{lexer::tokenize, substitution::substitute},
    token::{Operator, Token},
};

fn bindings(pairs: &[(&str, f64)]) -> Bindings {
    pairs.iter().map(|(name, value)| ((*name).to_string(), *value)).collect()
}

fn assert_value(src: &str, vars: &[(&str, f64)], expected: f64) {
    match evaluate(src, &bindings(vars)) {
        Ok(value) => assert!(value == expected || (value - expected).abs() < 1e-12,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_error(src: &str, vars: &[(&str, f64)]) -> EvalError {
    match evaluate(src, &bindings(vars)) {
        Ok(value) => panic!("'{src}' evaluated to {value} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn precedence_of_products_over_sums() {
    assert_value("2+3*4", &[], 14.0);
    assert_value("2*3+4", &[], 10.0);
    assert_value("10-4/2", &[], 8.0);
    assert_value("1+2*3^2", &[], 19.0);
}

#[test]
fn every_tier_folds_left_to_right() {
    assert_value("2^3^2", &[], 64.0);
    assert_value("10-3-2", &[], 5.0);
    assert_value("64/4/2", &[], 8.0);
    assert_value("2*3/4", &[], 1.5);
}

#[test]
fn whitespace_is_ignored() {
    assert_value("  2 +\t3 * 4 ", &[], 14.0);
    assert_value("1 2 + 1", &[], 13.0);
}

#[test]
fn decimal_literals() {
    assert_value("0.5*4", &[], 2.0);
    assert_value(".5+1.", &[], 1.5);
    assert_value("2.5^2", &[], 6.25);
}

#[test]
fn variables_are_substituted() {
    assert_value("a*b+c", &[("a", 2.0), ("b", 3.0), ("c", 4.0)], 10.0);
    assert_value("u + a*t", &[("u", 2.0), ("a", 3.0), ("t", 4.0)], 14.0);
}

#[test]
fn whole_word_substitution_keeps_longer_names_intact() {
    assert_value("m2*m", &[("m", 2.0), ("m2", 3.0)], 6.0);
    assert_value("m*m2", &[("m2", 3.0), ("m", 2.0)], 6.0);
    assert_value("mass/m", &[("m", 4.0), ("mass", 10.0)], 2.5);
}

#[test]
fn negative_bindings_are_values_not_operators() {
    assert_value("a*b", &[("a", 2.0), ("b", -3.0)], -6.0);
    assert_value("b^2", &[("b", -3.0)], 9.0);
}

#[test]
fn division_by_zero_follows_ieee() {
    assert_value("5/0", &[], f64::INFINITY);
    assert_value("0-5/0", &[], f64::NEG_INFINITY);
    assert!(evaluate("0/0", &Bindings::new()).unwrap().is_nan());
}

#[test]
fn evaluation_is_deterministic() {
    let vars = bindings(&[("x", 0.1), ("y", 0.7)]);
    let first = evaluate("x*y+x^y/3", &vars).unwrap();
    let second = evaluate("x*y+x^y/3", &vars).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn empty_input_is_error() {
    assert_eq!(assert_error("", &[]), EvalError::EmptyExpression);
    assert_eq!(assert_error(" \t\n", &[]), EvalError::EmptyExpression);
}

#[test]
fn unbound_variable_is_invalid_character() {
    assert_eq!(assert_error("3+x", &[]),
               EvalError::InvalidCharacter { character: 'x',
                                             position:  2, });
    assert_eq!(assert_error("3 + xy", &[("x", 1.0)]),
               EvalError::InvalidCharacter { character: 'x',
                                             position:  2, });
}

#[test]
fn unsupported_characters_are_rejected() {
    assert!(matches!(assert_error("(1+2)", &[]),
                     EvalError::InvalidCharacter { character: '(', position: 0 }));
    assert!(matches!(assert_error("2%3", &[]),
                     EvalError::InvalidCharacter { character: '%', position: 1 }));
    assert!(matches!(assert_error("2·3", &[]),
                     EvalError::InvalidCharacter { character: '·', position: 1 }));
}

#[test]
fn variable_glued_to_number_is_not_a_whole_word() {
    assert!(matches!(assert_error("2m", &[("m", 3.0)]),
                     EvalError::InvalidCharacter { character: 'm', position: 1 }));
}

#[test]
fn bad_literals_are_number_format_errors() {
    assert_eq!(assert_error("1.2.3+1", &[]),
               EvalError::NumberFormat { literal:  "1.2.3".to_string(),
                                         position: 0, });
    assert!(matches!(assert_error("2*.", &[]), EvalError::NumberFormat { position: 2, .. }));
}

#[test]
fn dangling_operators_are_malformed() {
    assert_eq!(assert_error("2+", &[]),
               EvalError::MalformedExpression { position: 1 });
    assert_eq!(assert_error("2^", &[]),
               EvalError::MalformedExpression { position: 1 });
    assert_eq!(assert_error("-2", &[]),
               EvalError::MalformedExpression { position: 0 });
    assert_eq!(assert_error("*2", &[]),
               EvalError::MalformedExpression { position: 0 });
}

#[test]
fn doubled_operators_are_malformed() {
    assert_eq!(assert_error("2**3", &[]),
               EvalError::MalformedExpression { position: 1 });
    assert_eq!(assert_error("2+-3", &[]),
               EvalError::MalformedExpression { position: 1 });
    assert_eq!(assert_error("2*+3", &[]),
               EvalError::MalformedExpression { position: 1 });
}

#[test]
fn adjacent_operands_are_malformed() {
    assert_eq!(assert_error("m.5", &[("m", 2.0)]),
               EvalError::MalformedExpression { position: 1 });
}

#[test]
fn tokenizer_keeps_malformed_sequences() {
    let tokens = tokenize("+2", &Bindings::new()).unwrap();
    assert_eq!(tokens,
               vec![(Token::Operator(Operator::Add), 0), (Token::Number(2.0), 1)]);
}

#[test]
fn substitution_replaces_whole_words_only() {
    let vars = bindings(&[("m", 2.0), ("m2", 3.0), ("g", 9.81)]);
    assert_eq!(substitute("m2*m", &vars), "3*2");
    assert_eq!(substitute("m * g * h", &vars), "2 * 9.81 * h");
    assert_eq!(substitute("2m + mg", &vars), "2m + mg");
}

#[test]
fn error_messages_name_the_problem() {
    assert_eq!(assert_error("3+x", &[]).to_string(),
               "Invalid character in expression at position 2: 'x'.");
    assert_eq!(assert_error("", &[]).to_string(), "Expression is empty.");
}
