//! Statement AST types.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::clause::{
    FromClause, GroupByClause, HavingClause, LimitClause, OrderByClause, ResultsClause,
    WhereClause,
};
use super::edit::{Child, Edit, EditError};
use super::keyword::Keyword;
use super::node::{entry, snapshot_of, write_trivia, ChildKey, Node, Trivia};

/// A SELECT statement. Optional clauses follow SQL order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Select {
    pub preceding: Trivia,
    pub select: Arc<Keyword>,
    pub results: Arc<ResultsClause>,
    pub from: Option<Arc<FromClause>>,
    #[serde(rename = "where")]
    pub where_clause: Option<Arc<WhereClause>>,
    pub group_by: Option<Arc<GroupByClause>>,
    pub having: Option<Arc<HavingClause>>,
    pub order_by: Option<Arc<OrderByClause>>,
    pub limit: Option<Arc<LimitClause>>,
    pub trailing: Trivia,
}

impl Select {
    /// The clauses after `SELECT`, in source order, as nodes.
    fn clauses(&self) -> Vec<(&'static str, &dyn Node)> {
        let mut clauses: Vec<(&'static str, &dyn Node)> =
            vec![("results", &*self.results as &dyn Node)];
        if let Some(from) = &self.from {
            clauses.push(("from", &**from));
        }
        if let Some(where_clause) = &self.where_clause {
            clauses.push(("where", &**where_clause));
        }
        if let Some(group_by) = &self.group_by {
            clauses.push(("group_by", &**group_by));
        }
        if let Some(having) = &self.having {
            clauses.push(("having", &**having));
        }
        if let Some(order_by) = &self.order_by {
            clauses.push(("order_by", &**order_by));
        }
        if let Some(limit) = &self.limit {
            clauses.push(("limit", &**limit));
        }
        clauses
    }
}

impl fmt::Display for Select {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.select)?;
        for (_, clause) in self.clauses() {
            let text = clause.canonical();
            if !text.is_empty() {
                write!(f, " {text}")?;
            }
        }
        Ok(())
    }
}

impl Node for Select {
    fn node_type(&self) -> &'static str {
        "Select"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        self.select.write_original(out);
        for (_, clause) in self.clauses() {
            clause.write_original(out);
        }
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        let mut children = vec![entry("select", &*self.select)];
        children.extend(
            self.clauses()
                .into_iter()
                .map(|(key, clause)| entry(key, clause)),
        );
        children
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Edit for Select {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "select" => Some(Child::Keyword(Arc::clone(&self.select))),
            "results" => Some(Child::Results(Arc::clone(&self.results))),
            "from" => self.from.clone().map(Child::From),
            "where" => self.where_clause.clone().map(Child::Where),
            "group_by" => self.group_by.clone().map(Child::GroupBy),
            "having" => self.having.clone().map(Child::Having),
            "order_by" => self.order_by.clone().map(Child::OrderBy),
            "limit" => self.limit.clone().map(Child::Limit),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("select") => node.select = child.into_keyword(key)?,
            Some("results") => node.results = child.into_results(key)?,
            Some("from") => node.from = Some(child.into_from(key)?),
            Some("where") => node.where_clause = Some(child.into_where(key)?),
            Some("group_by") => node.group_by = Some(child.into_group_by(key)?),
            Some("having") => node.having = Some(child.into_having(key)?),
            Some("order_by") => node.order_by = Some(child.into_order_by(key)?),
            Some("limit") => node.limit = Some(child.into_limit(key)?),
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

/// A parsed statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Statement {
    Select(Select),
}

impl Statement {
    /// Returns the SELECT statement.
    #[must_use]
    pub const fn as_select(&self) -> &Select {
        match self {
            Self::Select(select) => select,
        }
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(select) => fmt::Display::fmt(select, f),
        }
    }
}

impl Node for Statement {
    fn node_type(&self) -> &'static str {
        self.as_select().node_type()
    }

    fn preceding(&self) -> &[String] {
        self.as_select().preceding()
    }

    fn trailing(&self) -> &[String] {
        self.as_select().trailing()
    }

    fn write_original(&self, out: &mut String) {
        self.as_select().write_original(out);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        self.as_select().child_nodes()
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Edit for Statement {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        self.as_select().child(key)
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        match self {
            Self::Select(select) => Ok(Self::Select(select.replace_child(key, child)?)),
        }
    }
}
