//! SELECT statement and clause parsing.

mod common;

use common::{lossless, parse, parse_select, round_trip};
use redline_sql_core::ast::{ColumnExpression, Node};

#[test]
fn test_results_only() {
    let select = parse_select("SELECT 1");
    assert_eq!(select.results.expressions.len(), 1);
    assert!(select.from.is_none());
    assert!(select.limit.is_none());
}

#[test]
fn test_full_statement_fills_every_slot() {
    let sql = "SELECT COUNT(*) FROM users WHERE is_active IS TRUE GROUP BY country \
               HAVING COUNT(*) > 0 ORDER BY COUNT(*) DESC LIMIT 10";
    let statement = parse(sql);
    let select = statement.as_select();

    assert_eq!(select.results.expressions[0].node_type(), "CallExpression");
    assert_eq!(
        select.from.as_ref().map(|c| c.expression.to_string()).as_deref(),
        Some("users")
    );
    assert_eq!(
        select.where_clause.as_ref().map(|c| c.expression.node_type()),
        Some("InfixExpression")
    );
    assert_eq!(
        select.group_by.as_ref().map(|c| c.expressions.len()),
        Some(1)
    );
    assert_eq!(
        select.having.as_ref().map(|c| c.expression.to_string()).as_deref(),
        Some("COUNT(*) > 0")
    );
    assert_eq!(
        select.order_by.as_ref().map(|c| c.expressions[0].node_type()),
        Some("OrderExpression")
    );
    assert_eq!(
        select.limit.as_ref().map(|c| c.expression.to_string()).as_deref(),
        Some("10")
    );

    assert_eq!(statement.original(), sql);
    assert_eq!(statement.to_string(), sql);
}

#[test]
fn test_child_keys_follow_clause_order() {
    let select = parse_select("SELECT a FROM t WHERE b ORDER BY a");
    let keys: Vec<_> = select
        .child_nodes()
        .into_iter()
        .map(|(key, _)| key.to_string())
        .collect();
    assert_eq!(keys, vec!["select", "results", "from", "where", "order_by"]);
}

#[test]
fn test_distinct_and_all() {
    let select = parse_select("select distinct a, b from t");
    assert_eq!(
        select.results.quantifier.as_ref().map(ToString::to_string).as_deref(),
        Some("DISTINCT")
    );
    assert_eq!(select.results.expressions.len(), 2);

    let select = parse_select("SELECT ALL a FROM t");
    assert!(select.results.quantifier.is_some());
    assert_eq!(select.to_string(), "SELECT ALL a FROM t");
}

#[test]
fn test_result_list_with_aliases() {
    let select = parse_select("SELECT a AS x, b y, c + 1 AS z FROM t");
    let types: Vec<_> = select
        .results
        .expressions
        .iter()
        .map(|e| e.node_type())
        .collect();
    assert_eq!(types, vec!["Alias", "Alias", "Alias"]);
}

#[test]
fn test_group_by_and_order_by_lists() {
    let select = parse_select("SELECT a, b FROM t GROUP BY a, b ORDER BY a ASC, b");
    let group_by = select.group_by.as_ref().map(|c| c.expressions.len());
    assert_eq!(group_by, Some(2));

    let order_by = select.order_by.as_deref().map(|c| c.expressions.clone());
    let order_by = order_by.unwrap_or_default();
    assert!(matches!(order_by[0].as_ref(), ColumnExpression::Order(_)));
    assert!(matches!(order_by[1].as_ref(), ColumnExpression::Identifier(_)));
}

#[test]
fn test_keyword_case_is_canonicalised() {
    let statement = parse("select a from t where a is not null");
    assert_eq!(statement.to_string(), "SELECT a FROM t WHERE a IS NOT NULL");
}

#[test]
fn test_snapshot_shape() {
    let statement = parse("SELECT COUNT(*) AS n FROM t LIMIT 5");
    let snapshot = statement.snapshot();
    assert_eq!(snapshot["type"], "Select");
    assert_eq!(snapshot["results"]["expressions"][0]["type"], "Alias");
    assert_eq!(
        snapshot["results"]["expressions"][0]["value"]["type"],
        "CallExpression"
    );
    assert_eq!(snapshot["from"]["expression"]["type"], "Identifier");
    assert_eq!(snapshot["limit"]["expression"]["literal"], "5");
    assert!(snapshot["where"].is_null());
}

#[test]
fn test_snapshot_keys_match_child_keys() {
    let statement = parse("SELECT a FROM t WHERE a > 1");
    let snapshot = statement.snapshot();
    assert_eq!(snapshot["where"]["expression"]["type"], "InfixExpression");
    assert!(snapshot.get("where_clause").is_none());

    for (key, _) in statement.as_select().child_nodes() {
        assert!(!snapshot[key.to_string()].is_null(), "{key}");
    }
}

#[test]
fn test_round_trip_and_lossless() {
    let queries = [
        "SELECT 1",
        "SELECT a, b FROM t",
        "select distinct u.id, u.name as n from public.users u where u.id > 10 limit 5",
        "SELECT count(*), country FROM users GROUP BY country HAVING count(*) > 1",
        "SELECT a FROM t ORDER BY a DESC, b ASC",
        "SELECT a || '-' || b AS ab FROM t WHERE c BETWEEN 1 AND 2",
        "SELECT created_at::timestamp FROM events WHERE NOT deleted",
    ];
    for sql in queries {
        round_trip(sql);
        lossless(sql);
    }
}
