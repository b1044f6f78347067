#![cfg(test)]

use crate::parser::{ASTNodeType, parse};
use crate::tokenizer::{TokenSubType, TokenType, Tokenizer};
use reckoner_common::Value;

fn token_types(expr: &str) -> Vec<TokenType> {
    Tokenizer::new(expr)
        .unwrap()
        .items
        .iter()
        .map(|t| t.token_type)
        .collect()
}

#[test]
fn tokenize_simple_addition() {
    let types = token_types("3+4");
    assert_eq!(
        types,
        vec![TokenType::Operand, TokenType::OpInfix, TokenType::Operand]
    );
}

#[test]
fn tokenize_power_operator_is_one_token() {
    let tok = Tokenizer::new("2**10").unwrap();
    assert_eq!(tok.items.len(), 3);
    assert_eq!(tok.items[1].value, "**");
    assert_eq!(tok.items[1].token_type, TokenType::OpInfix);
}

#[test]
fn tokenize_prefix_vs_infix_minus() {
    let tok = Tokenizer::new("-3-4").unwrap();
    assert_eq!(tok.items[0].token_type, TokenType::OpPrefix);
    assert_eq!(tok.items[2].token_type, TokenType::OpInfix);

    // After a closing parenthesis, '-' is infix
    let tok = Tokenizer::new("(1)-2").unwrap();
    let minus = tok.items.iter().find(|t| t.value == "-").unwrap();
    assert_eq!(minus.token_type, TokenType::OpInfix);
}

#[test]
fn tokenize_function_call() {
    let tok = Tokenizer::new("gcd(12,18)").unwrap();
    assert_eq!(tok.items[0].value, "gcd(");
    assert_eq!(tok.items[0].token_type, TokenType::Func);
    assert_eq!(tok.items[0].subtype, TokenSubType::Open);
    let close = tok.items.last().unwrap();
    assert_eq!(close.token_type, TokenType::Func);
    assert_eq!(close.subtype, TokenSubType::Close);
}

#[test]
fn tokenize_scientific_notation_absorbs_sign() {
    let tok = Tokenizer::new("1.23e+16/2").unwrap();
    assert_eq!(tok.items[0].value, "1.23e+16");
    assert_eq!(tok.items[0].subtype, TokenSubType::Number);
    assert_eq!(tok.items.len(), 3);

    let tok = Tokenizer::new("5e-10").unwrap();
    assert_eq!(tok.items.len(), 1);
    assert_eq!(tok.items[0].value, "5e-10");
}

#[test]
fn tokenize_unbalanced_parens() {
    assert!(Tokenizer::new("(1+2").is_err());
    assert!(Tokenizer::new("1+2)").is_err());
}

#[test]
fn render_roundtrip() {
    for expr in ["3+4*2", "gcd(12, 18)", "-(2**3)%5", "1.5e+20/3"] {
        let tok = Tokenizer::new(expr).unwrap();
        assert_eq!(tok.render(), expr);
    }
}

#[test]
fn parse_precedence_mul_over_add() {
    let ast = parse("2+3*4").unwrap();
    match ast.node_type {
        ASTNodeType::BinaryOp { op, left, right } => {
            assert_eq!(op, "+");
            assert!(matches!(
                left.node_type,
                ASTNodeType::Literal(Value::Number(n)) if n == 2.0
            ));
            assert!(matches!(right.node_type, ASTNodeType::BinaryOp { .. }));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn parse_power_right_associative() {
    // 2**3**2 must parse as 2**(3**2)
    let ast = parse("2**3**2").unwrap();
    match ast.node_type {
        ASTNodeType::BinaryOp { op, left, right } => {
            assert_eq!(op, "**");
            assert!(matches!(
                left.node_type,
                ASTNodeType::Literal(Value::Number(n)) if n == 2.0
            ));
            match right.node_type {
                ASTNodeType::BinaryOp { op, .. } => assert_eq!(op, "**"),
                other => panic!("unexpected rhs: {other:?}"),
            }
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn parse_unary_binds_tighter_than_power() {
    // -2**2 must parse as (-2)**2
    let ast = parse("-2**2").unwrap();
    match ast.node_type {
        ASTNodeType::BinaryOp { op, left, .. } => {
            assert_eq!(op, "**");
            assert!(matches!(left.node_type, ASTNodeType::UnaryOp { .. }));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn parse_function_arguments() {
    let ast = parse("ncr(5, 2)").unwrap();
    match ast.node_type {
        ASTNodeType::Function { name, args } => {
            assert_eq!(name, "ncr");
            assert_eq!(args.len(), 2);
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn parse_nested_function_call() {
    let ast = parse("gcd(ncr(6,2),lcm(4,6))").unwrap();
    match ast.node_type {
        ASTNodeType::Function { name, args } => {
            assert_eq!(name, "gcd");
            assert_eq!(args.len(), 2);
            assert!(matches!(args[0].node_type, ASTNodeType::Function { .. }));
            assert!(matches!(args[1].node_type, ASTNodeType::Function { .. }));
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}

#[test]
fn parse_rejects_garbage() {
    assert!(parse("").is_err());
    assert!(parse("1+").is_err());
    assert!(parse("foo").is_err());
    assert!(parse("1 2").is_err());
    assert!(parse("(,)").is_err());
}

#[test]
fn parse_modulo_shares_multiplicative_precedence() {
    // 10%3*2 groups left to right: (10%3)*2
    let ast = parse("10%3*2").unwrap();
    match ast.node_type {
        ASTNodeType::BinaryOp { op, left, .. } => {
            assert_eq!(op, "*");
            match left.node_type {
                ASTNodeType::BinaryOp { op, .. } => assert_eq!(op, "%"),
                other => panic!("unexpected lhs: {other:?}"),
            }
        }
        other => panic!("unexpected ast: {other:?}"),
    }
}
