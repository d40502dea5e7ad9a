//! Table expressions in FROM: identifiers, aliases, joins and ONLY.

mod common;

use common::{lossless, parse_select, round_trip, table};
use redline_sql_core::ast::{Node, TableExpression};
use redline_sql_core::lexer::{Keyword, Lexer, TokenKind};

#[test]
fn test_schema_qualified_table() {
    let TableExpression::Identifier(identifier) = table("analytics.events") else {
        panic!("expected identifier");
    };
    assert_eq!(identifier.schema.as_deref(), Some("analytics"));
    assert_eq!(identifier.table, "events");
}

#[test]
fn test_table_aliases() {
    let TableExpression::Alias(short) = table("users u") else {
        panic!("expected alias");
    };
    let TableExpression::Alias(long) = table("users AS u") else {
        panic!("expected alias");
    };
    assert_eq!(short.value, long.value);
    assert_eq!(short.alias.value, "u");
    assert!(short.as_keyword.is_none());
    assert_eq!(long.to_string(), "users AS u");
}

#[test]
fn test_join_with_condition() {
    let TableExpression::Join(join) = table("users u JOIN orders o ON u.id = o.user_id") else {
        panic!("expected join");
    };
    assert_eq!(join.left.to_string(), "users u");
    assert_eq!(join.right.to_string(), "orders o");
    assert_eq!(join.condition.to_string(), "u.id = o.user_id");
    assert!(join.kind.is_none());
}

#[test]
fn test_join_kinds() {
    for (sql, kind, outer) in [
        ("a INNER JOIN b ON x", "INNER", false),
        ("a left join b ON x", "LEFT", false),
        ("a LEFT OUTER JOIN b ON x", "LEFT", true),
        ("a RIGHT JOIN b ON x", "RIGHT", false),
        ("a FULL OUTER JOIN b ON x", "FULL", true),
    ] {
        let TableExpression::Join(join) = table(sql) else {
            panic!("expected join: {sql}");
        };
        assert_eq!(
            join.kind.as_ref().map(ToString::to_string).as_deref(),
            Some(kind),
            "{sql}"
        );
        assert_eq!(join.outer.is_some(), outer, "{sql}");
    }
}

#[test]
fn test_joins_are_left_associative() {
    let TableExpression::Join(outer) = table("a JOIN b ON p JOIN c ON q") else {
        panic!("expected join");
    };
    assert_eq!(outer.left.node_type(), "JoinExpression");
    assert_eq!(outer.right.to_string(), "c");
}

#[test]
fn test_comma_join() {
    let expression = table("a,b , c");
    assert_eq!(expression.to_string(), "a, b, c");
    assert_eq!(expression.original(), "a,b , c");
    let TableExpression::Infix(infix) = expression else {
        panic!("expected infix");
    };
    assert_eq!(infix.left.node_type(), "InfixExpression");
}

#[test]
fn test_only_prefix() {
    let TableExpression::Prefix(prefix) = table("ONLY parent") else {
        panic!("expected prefix");
    };
    assert_eq!(prefix.right.node_type(), "Identifier");

    let TableExpression::Alias(alias) = table("ONLY parent p") else {
        panic!("expected alias");
    };
    assert_eq!(alias.value.node_type(), "PrefixExpression");
    assert_eq!(alias.to_string(), "ONLY parent p");
}

#[test]
fn test_left_join_versus_left_call() {
    let mut lexer = Lexer::new("LEFT JOIN");
    assert_eq!(lexer.next_token().kind, TokenKind::Keyword(Keyword::Left));

    let mut lexer = Lexer::new("LEFT()");
    assert_eq!(lexer.next_token().kind, TokenKind::Identifier);

    let select = parse_select("SELECT LEFT(name, 1) FROM a LEFT JOIN b ON a.id = b.id");
    assert_eq!(select.results.expressions[0].node_type(), "CallExpression");
    assert_eq!(
        select.from.as_ref().map(|c| c.expression.node_type()),
        Some("JoinExpression")
    );
}

#[test]
fn test_join_child_keys() {
    let TableExpression::Join(join) = table("a LEFT OUTER JOIN b ON a.id = b.id") else {
        panic!("expected join");
    };
    let keys: Vec<_> = join
        .child_nodes()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect();
    assert_eq!(
        keys,
        vec!["left", "kind", "outer", "join", "right", "on", "condition"]
    );
}

#[test]
fn test_round_trip_and_lossless() {
    let queries = [
        "SELECT * FROM a, b WHERE a.id = b.id",
        "SELECT * FROM ONLY events",
        "SELECT u.name FROM users AS u INNER JOIN orders o ON u.id = o.user_id",
        "select * from a left outer join b on a.k = b.k full join c on c.k = a.k",
        "SELECT * FROM \"My Schema\".\"Events\" e",
    ];
    for sql in queries {
        round_trip(sql);
        lossless(sql);
    }
}
