use lispy_calc as lispy;
use lispy::errors::EvalError;
use lispy::parser::ParseError;

// Syntax errors never reach the evaluator: they come back as `Err` and carry
// the column of the offending character.
#[test]
fn test_unbalanced_parenthesis() {
    let err = lispy::eval("+ 1 (* 2 3").unwrap_err();
    match err {
        EvalError::Parse(ParseError::InvalidSyntax { column, .. }) => assert_eq!(column, 11),
        other => panic!("expected parse error, got: {other}"),
    }
}

#[test]
fn test_parenthesized_root_is_rejected() {
    assert!(matches!(lispy::eval("(+ 1 2)"), Err(EvalError::Parse(_))));
}

#[test]
fn test_unknown_operator_is_a_syntax_error() {
    let err = lispy::eval("^ 2 3").unwrap_err();
    assert_eq!(
        err.to_string(),
        "<stdin>:1:1: error: expected one of '+', '-', '*', '/', '%'"
    );
}

#[test]
fn test_missing_operand() {
    assert!(matches!(lispy::eval("+"), Err(EvalError::Parse(_))));
    assert!(matches!(lispy::eval("+ 1 ( / )"), Err(EvalError::Parse(_))));
}

#[test]
fn test_garbage_after_number() {
    assert!(matches!(lispy::eval("+ 1 2x"), Err(EvalError::Parse(_))));
    assert!(matches!(lispy::eval("+ 1 2 - 3"), Err(EvalError::Parse(_))));
}
