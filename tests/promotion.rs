use lispy_calc as lispy;
use lispy::expression::SyntaxNode;
use lispy::{ErrorKind, Value};
use pretty_assertions::assert_eq;

fn kind(v: Value) -> &'static str {
    match v {
        Value::Integer(_) => "integer",
        Value::Float(_) => "float",
        Value::Error(_) => "error",
    }
}

#[test]
fn test_result_kind_table() {
    let int = Value::Integer(6);
    let float = Value::Float(1.5);
    for op in ["+", "-", "*", "/"] {
        assert_eq!(kind(lispy::apply(op, int, int)), "integer", "{op} int int");
        assert_eq!(kind(lispy::apply(op, int, float)), "float", "{op} int float");
        assert_eq!(kind(lispy::apply(op, float, int)), "float", "{op} float int");
        assert_eq!(kind(lispy::apply(op, float, float)), "float", "{op} float float");
    }
    assert_eq!(lispy::apply("%", int, Value::Integer(4)), Value::Integer(2));
    assert_eq!(lispy::apply("%", int, float), Value::Error(ErrorKind::InvalidOperator));
    assert_eq!(lispy::apply("%", float, int), Value::Error(ErrorKind::InvalidOperator));
}

// Trees built by hand can carry symbols the grammar never produces.
#[test]
fn test_hand_built_tree_with_unknown_symbol() {
    let tree = SyntaxNode::operation(
        "+",
        vec![
            SyntaxNode::literal("1"),
            SyntaxNode::operation("^", vec![SyntaxNode::literal("2"), SyntaxNode::literal("3")]),
        ],
    );
    assert_eq!(lispy::evaluate(&tree), Value::Error(ErrorKind::InvalidOperator));
}

#[test]
fn test_float_literal_forms() {
    assert_eq!(lispy::eval("+ 1. 0").unwrap(), Value::Float(1.0));
    assert_eq!(lispy::eval("* -2.50 2").unwrap(), Value::Float(-5.0));
    assert_eq!(lispy::eval("/ 0.0 1").unwrap(), Value::Float(0.0));
}
