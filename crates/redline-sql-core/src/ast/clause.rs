//! Clauses of a SELECT statement.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::column::ColumnExpression;
use super::edit::{replace_at, Child, Edit, EditError};
use super::keyword::Keyword;
use super::node::{entry, snapshot_of, write_separated, write_trivia, ChildKey, Node, Trivia};
use super::table::TableExpression;

/// The result list after `SELECT`, with an optional `DISTINCT` or `ALL`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResultsClause {
    pub preceding: Trivia,
    pub quantifier: Option<Arc<Keyword>>,
    pub expressions: Vec<Arc<ColumnExpression>>,
    pub trailing: Trivia,
}

impl fmt::Display for ResultsClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(quantifier) = &self.quantifier {
            write!(f, "{quantifier} ")?;
        }
        write_separated(f, &self.expressions, ", ")
    }
}

impl Node for ResultsClause {
    fn node_type(&self) -> &'static str {
        "ResultsClause"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        if let Some(quantifier) = &self.quantifier {
            quantifier.write_original(out);
        }
        write_list(out, &self.expressions);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        let mut children = Vec::with_capacity(self.expressions.len() + 1);
        if let Some(quantifier) = &self.quantifier {
            children.push(entry("quantifier", &**quantifier));
        }
        children.extend(list_entries(&self.expressions));
        children
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Edit for ResultsClause {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key {
            ChildKey::Field(name) if name == "quantifier" => {
                self.quantifier.clone().map(Child::Keyword)
            }
            ChildKey::Index(index) => self
                .expressions
                .get(*index)
                .map(|expression| Child::Column(Arc::clone(expression))),
            ChildKey::Field(_) => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key {
            ChildKey::Field(name) if name == "quantifier" => {
                node.quantifier = Some(child.into_keyword(key)?);
            }
            ChildKey::Index(index) => {
                node.expressions =
                    replace_at(&self.expressions, *index, child.into_column(key)?)?;
            }
            ChildKey::Field(_) => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

/// Writes a comma-separated list; trivia around commas lives on the items.
fn write_list(out: &mut String, items: &[Arc<ColumnExpression>]) {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            out.push(',');
        }
        item.write_original(out);
    }
}

fn list_entries(
    items: &[Arc<ColumnExpression>],
) -> impl Iterator<Item = (ChildKey, &dyn Node)> + '_ {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| entry(index, &**item))
}

/// A clause made of one keyword and one expression.
macro_rules! keyword_clause {
    ($(#[$meta:meta])* $name:ident, $expr:ty, $variant:ident, $into:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            pub preceding: Trivia,
            pub keyword: Arc<Keyword>,
            pub expression: Arc<$expr>,
            pub trailing: Trivia,
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {}", self.keyword, self.expression)
            }
        }

        impl Node for $name {
            fn node_type(&self) -> &'static str {
                stringify!($name)
            }

            fn preceding(&self) -> &[String] {
                &self.preceding
            }

            fn trailing(&self) -> &[String] {
                &self.trailing
            }

            fn write_original(&self, out: &mut String) {
                write_trivia(out, &self.preceding);
                self.keyword.write_original(out);
                self.expression.write_original(out);
                write_trivia(out, &self.trailing);
            }

            fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
                vec![
                    entry("keyword", &*self.keyword),
                    entry("expression", &*self.expression),
                ]
            }

            fn snapshot(&self) -> serde_json::Value {
                snapshot_of(self, self.node_type())
            }
        }

        impl Edit for $name {
            fn child(&self, key: &ChildKey) -> Option<Child> {
                match key.as_field()? {
                    "keyword" => Some(Child::Keyword(Arc::clone(&self.keyword))),
                    "expression" => Some(Child::$variant(Arc::clone(&self.expression))),
                    _ => None,
                }
            }

            fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
                let mut node = self.clone();
                match key.as_field() {
                    Some("keyword") => node.keyword = child.into_keyword(key)?,
                    Some("expression") => node.expression = child.$into(key)?,
                    _ => return Err(EditError::UnknownChild(key.clone())),
                }
                Ok(node)
            }
        }
    };
}

/// A clause made of two keywords and an expression list.
macro_rules! list_clause {
    ($(#[$meta:meta])* $name:ident, $first:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Serialize)]
        pub struct $name {
            pub preceding: Trivia,
            pub $first: Arc<Keyword>,
            pub by: Arc<Keyword>,
            pub expressions: Vec<Arc<ColumnExpression>>,
            pub trailing: Trivia,
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{} {} ", self.$first, self.by)?;
                write_separated(f, &self.expressions, ", ")
            }
        }

        impl Node for $name {
            fn node_type(&self) -> &'static str {
                stringify!($name)
            }

            fn preceding(&self) -> &[String] {
                &self.preceding
            }

            fn trailing(&self) -> &[String] {
                &self.trailing
            }

            fn write_original(&self, out: &mut String) {
                write_trivia(out, &self.preceding);
                self.$first.write_original(out);
                self.by.write_original(out);
                write_list(out, &self.expressions);
                write_trivia(out, &self.trailing);
            }

            fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
                let mut children = vec![
                    entry(stringify!($first), &*self.$first),
                    entry("by", &*self.by),
                ];
                children.extend(list_entries(&self.expressions));
                children
            }

            fn snapshot(&self) -> serde_json::Value {
                snapshot_of(self, self.node_type())
            }
        }

        impl Edit for $name {
            fn child(&self, key: &ChildKey) -> Option<Child> {
                match key {
                    ChildKey::Field(name) if name == stringify!($first) => {
                        Some(Child::Keyword(Arc::clone(&self.$first)))
                    }
                    ChildKey::Field(name) if name == "by" => {
                        Some(Child::Keyword(Arc::clone(&self.by)))
                    }
                    ChildKey::Index(index) => self
                        .expressions
                        .get(*index)
                        .map(|expression| Child::Column(Arc::clone(expression))),
                    ChildKey::Field(_) => None,
                }
            }

            fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
                let mut node = self.clone();
                match key {
                    ChildKey::Field(name) if name == stringify!($first) => {
                        node.$first = child.into_keyword(key)?;
                    }
                    ChildKey::Field(name) if name == "by" => {
                        node.by = child.into_keyword(key)?;
                    }
                    ChildKey::Index(index) => {
                        node.expressions =
                            replace_at(&self.expressions, *index, child.into_column(key)?)?;
                    }
                    ChildKey::Field(_) => return Err(EditError::UnknownChild(key.clone())),
                }
                Ok(node)
            }
        }
    };
}

keyword_clause!(
    /// `FROM table_expression`.
    FromClause,
    TableExpression,
    Table,
    into_table
);

keyword_clause!(
    /// `WHERE condition`.
    WhereClause,
    ColumnExpression,
    Column,
    into_column
);

keyword_clause!(
    /// `HAVING condition`.
    HavingClause,
    ColumnExpression,
    Column,
    into_column
);

keyword_clause!(
    /// `LIMIT count`.
    LimitClause,
    ColumnExpression,
    Column,
    into_column
);

list_clause!(
    /// `GROUP BY a, b`.
    GroupByClause,
    group
);

list_clause!(
    /// `ORDER BY a DESC, b`.
    OrderByClause,
    order
);
