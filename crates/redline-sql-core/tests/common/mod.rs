#![allow(dead_code)]

use redline_sql_core::ast::{ColumnExpression, Node, Select, Statement, TableExpression};
use redline_sql_core::{ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    Parser::new(sql)
        .parse_statement()
        .unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    Parser::new(sql)
        .parse_statement()
        .expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_select(sql: &str) -> Select {
    match parse(sql) {
        Statement::Select(s) => s,
    }
}

pub fn column(sql: &str) -> ColumnExpression {
    redline_sql_core::parse_column_expression(sql)
        .unwrap_or_else(|e| panic!("Failed to parse column: {sql}\nError: {e:?}"))
}

pub fn table(sql: &str) -> TableExpression {
    redline_sql_core::parse_table_expression(sql)
        .unwrap_or_else(|e| panic!("Failed to parse table: {sql}\nError: {e:?}"))
}

/// Verifies that `to_string()` produces a fixed point:
/// parse(sql).to_string() can be re-parsed and yields the same
/// string again.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    let rendered2 = ast2.to_string();
    assert_eq!(
        rendered1, rendered2,
        "Round-trip failed.\n  Input:    {sql}\n  First:    {rendered1}\n  Second:   {rendered2}"
    );
}

/// Verifies that the original render reproduces the input byte for byte.
pub fn lossless(sql: &str) {
    let ast = parse(sql);
    assert_eq!(ast.original(), sql, "Original render differs from input");
}

/// Renders a column expression with every operator application wrapped in
/// parentheses, so grouping is visible in assertions.
pub fn shape(expression: &ColumnExpression) -> String {
    match expression {
        ColumnExpression::Prefix(prefix) => {
            format!("({} {})", prefix.operator, shape(&prefix.right))
        }
        ColumnExpression::Infix(infix) => format!(
            "({} {} {})",
            shape(&infix.left),
            infix.operator,
            shape(&infix.right)
        ),
        ColumnExpression::Group(group) => shape(&group.expression),
        ColumnExpression::Between(between) => format!(
            "({} BETWEEN {} AND {})",
            shape(&between.left),
            shape(&between.start),
            shape(&between.end)
        ),
        ColumnExpression::Alias(alias) => format!("({} AS {})", shape(&alias.value), alias.alias),
        ColumnExpression::Order(order) => format!("({} {})", shape(&order.value), order.order),
        other => other.to_string(),
    }
}
