//! Column expression parsing: precedence, associativity and the individual
//! expression forms.

mod common;

use common::{column, shape};
use redline_sql_core::ast::{ColumnExpression, Node};
use redline_sql_core::TokenKind;

// ===================================================================
// Precedence and associativity
// ===================================================================

#[test]
fn test_unary_minus_then_sum_and_product() {
    assert_eq!(
        shape(&column("- 1 + 2 * 3 + 4")),
        "(((- 1) + (2 * 3)) + 4)"
    );
}

#[test]
fn test_equal_precedence_is_left_associative() {
    assert_eq!(
        shape(&column("- 1 + 2 * 3 * 4")),
        "((- 1) + ((2 * 3) * 4))"
    );
    assert_eq!(shape(&column("a - b - c")), "((a - b) - c)");
    assert_eq!(shape(&column("a / b * c")), "((a / b) * c)");
}

#[test]
fn test_and_binds_looser_than_comparison() {
    assert_eq!(shape(&column("x = 1 AND y = 2")), "((x = 1) AND (y = 2))");
}

#[test]
fn test_or_binds_looser_than_and() {
    assert_eq!(
        shape(&column("a = 1 OR b = 2 AND c = 3")),
        "((a = 1) OR ((b = 2) AND (c = 3)))"
    );
}

#[test]
fn test_not_binds_like_unary_minus() {
    assert_eq!(shape(&column("NOT a = b")), "((NOT a) = b)");
    assert_eq!(
        shape(&column("NOT a = b AND c")),
        "(((NOT a) = b) AND c)"
    );
    assert_eq!(shape(&column("NOT (a = b)")), "(NOT (a = b))");
}

#[test]
fn test_concat_between_comparison_and_sum() {
    assert_eq!(
        shape(&column("a || b + 1 = c")),
        "((a || (b + 1)) = c)"
    );
}

#[test]
fn test_parentheses_override_precedence() {
    let expression = column("(1 + 2) * 3");
    assert_eq!(expression.to_string(), "(1 + 2) * 3");
    let ColumnExpression::Infix(infix) = expression else {
        panic!("expected infix");
    };
    assert_eq!(infix.left.node_type(), "GroupExpression");
}

#[test]
fn test_cast_binds_tightest_after_call() {
    assert_eq!(shape(&column("a + b::integer")), "(a + (b :: INTEGER))");
    assert_eq!(shape(&column("- x::integer")), "(- (x :: INTEGER))");
}

// ===================================================================
// Individual forms
// ===================================================================

#[test]
fn test_literals() {
    let ColumnExpression::Literal(literal) = column("42") else {
        panic!("expected literal");
    };
    assert_eq!(literal.kind, TokenKind::Integer);

    let ColumnExpression::Literal(literal) = column("'it''s'") else {
        panic!("expected literal");
    };
    assert_eq!(literal.kind, TokenKind::String);
    assert_eq!(literal.literal, "'it''s'");
}

#[test]
fn test_keyword_values() {
    for sql in ["NULL", "true", "FALSE", "*"] {
        let expression = column(sql);
        assert!(
            matches!(expression, ColumnExpression::Keyword(_)),
            "{sql}: {expression:?}"
        );
        assert_eq!(expression.original(), sql);
    }
    assert_eq!(column("true").to_string(), "TRUE");
}

#[test]
fn test_qualified_identifiers() {
    let ColumnExpression::Identifier(identifier) = column("analytics.users.id") else {
        panic!("expected identifier");
    };
    assert_eq!(identifier.schema.as_deref(), Some("analytics"));
    assert_eq!(identifier.table.as_deref(), Some("users"));
    assert_eq!(identifier.column, "id");

    let ColumnExpression::Identifier(identifier) = column("u.*") else {
        panic!("expected identifier");
    };
    assert_eq!(identifier.table.as_deref(), Some("u"));
    assert_eq!(identifier.column, "*");

    let ColumnExpression::Identifier(identifier) = column("\"odd.name\".\"Col\"") else {
        panic!("expected identifier");
    };
    assert_eq!(identifier.table.as_deref(), Some("\"odd.name\""));
    assert_eq!(identifier.column, "\"Col\"");
}

#[test]
fn test_alias_shorthand_matches_explicit_as() {
    let ColumnExpression::Alias(short) = column("x y") else {
        panic!("expected alias");
    };
    let ColumnExpression::Alias(long) = column("x AS y") else {
        panic!("expected alias");
    };
    assert!(short.as_keyword.is_none());
    assert!(long.as_keyword.is_some());
    assert_eq!(short.value, long.value);
    assert_eq!(short.alias.value, long.alias.value);

    let keys: Vec<_> = short
        .child_nodes()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect();
    assert_eq!(keys, vec!["value", "alias"]);
}

#[test]
fn test_alias_of_compound_value() {
    assert_eq!(shape(&column("a + 1 AS total")), "((a + 1) AS total)");
}

#[test]
fn test_between() {
    let expression = column("a BETWEEN 1 AND 2 AND b");
    assert_eq!(shape(&expression), "((a BETWEEN 1 AND 2) AND b)");

    let ColumnExpression::Infix(infix) = expression else {
        panic!("expected infix");
    };
    let ColumnExpression::Between(between) = infix.left.as_ref() else {
        panic!("expected between");
    };
    let keys: Vec<_> = between
        .child_nodes()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect();
    assert_eq!(keys, vec!["left", "between", "start", "and", "end"]);
}

#[test]
fn test_is_and_like() {
    assert_eq!(shape(&column("a IS NULL")), "(a IS NULL)");
    assert_eq!(
        shape(&column("name ILIKE 'a%' OR name LIKE 'b%'")),
        "((name ILIKE 'a%') OR (name LIKE 'b%'))"
    );
}

#[test]
fn test_order_suffix() {
    assert_eq!(shape(&column("created_at desc")), "(created_at DESC)");
}

#[test]
fn test_calls() {
    let ColumnExpression::Call(call) = column("coalesce(a, b, 0)") else {
        panic!("expected call");
    };
    assert_eq!(call.function.column, "coalesce");
    assert_eq!(call.arguments.len(), 3);

    let ColumnExpression::Call(call) = column("count(*)") else {
        panic!("expected call");
    };
    assert_eq!(call.arguments[0].to_string(), "*");

    let ColumnExpression::Call(call) = column("pg_catalog.now()") else {
        panic!("expected call");
    };
    assert!(call.arguments.is_empty());
    assert_eq!(call.function.table.as_deref(), Some("pg_catalog"));
}

#[test]
fn test_nested_calls_and_arguments() {
    let expression = column("round(sum(price * qty), 2)");
    assert_eq!(expression.to_string(), "round(sum(price * qty), 2)");
    let ColumnExpression::Call(call) = expression else {
        panic!("expected call");
    };
    assert_eq!(call.arguments[0].node_type(), "CallExpression");
}

#[test]
fn test_reserved_word_as_function_name() {
    let ColumnExpression::Call(call) = column("LEFT(name, 3)") else {
        panic!("expected call");
    };
    assert_eq!(call.function.column, "LEFT");
}

#[test]
fn test_in_has_no_handler() {
    let err = redline_sql_core::parse_column_expression("a IN (1, 2)").unwrap_err();
    assert_eq!(err.found, TokenKind::Keyword(redline_sql_core::lexer::Keyword::In));
}
