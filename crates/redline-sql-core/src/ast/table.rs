//! Table expressions: the operand of `FROM`.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::column::ColumnExpression;
use super::edit::{Child, Edit, EditError};
use super::keyword::{Keyword, Name};
use super::node::{entry, snapshot_of, write_trivia, ChildKey, Node, Trivia};
use crate::lexer::TokenKind;

/// A possibly schema-qualified table name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableIdentifier {
    pub preceding: Trivia,
    pub schema: Option<String>,
    pub table: String,
    pub trailing: Trivia,
}

impl TableIdentifier {
    /// Creates an unqualified table name without trivia.
    #[must_use]
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            preceding: Trivia::new(),
            schema: None,
            table: table.into(),
            trailing: Trivia::new(),
        }
    }

    /// Builds a table name from one or two segments.
    ///
    /// Returns `None` for any other count, an empty segment, or a wildcard.
    #[must_use]
    pub fn from_segments(segments: &[&str]) -> Option<Self> {
        if segments
            .iter()
            .any(|segment| segment.is_empty() || *segment == "*")
        {
            return None;
        }
        let (schema, table) = match *segments {
            [table] => (None, table),
            [schema, table] => (Some(schema), table),
            _ => return None,
        };
        Some(Self {
            preceding: Trivia::new(),
            schema: schema.map(str::to_owned),
            table: table.to_owned(),
            trailing: Trivia::new(),
        })
    }

    /// Returns the dotted name as written.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        match &self.schema {
            Some(schema) => format!("{schema}.{}", self.table),
            None => self.table.clone(),
        }
    }
}

/// `table AS alias` or `table alias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableAlias {
    pub preceding: Trivia,
    pub value: Arc<TableExpression>,
    pub as_keyword: Option<Arc<Keyword>>,
    pub alias: Arc<Name>,
    pub trailing: Trivia,
}

/// A table modifier such as `ONLY t`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TablePrefix {
    pub preceding: Trivia,
    pub operator: Arc<Keyword>,
    pub right: Arc<TableExpression>,
    pub trailing: Trivia,
}

/// Two tables combined by an operator, e.g. the comma join `a, b`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableInfix {
    pub preceding: Trivia,
    pub left: Arc<TableExpression>,
    pub operator: Arc<Keyword>,
    pub right: Arc<TableExpression>,
    pub trailing: Trivia,
}

/// `left [INNER | LEFT | RIGHT | FULL [OUTER]] JOIN right ON condition`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableJoin {
    pub preceding: Trivia,
    pub left: Arc<TableExpression>,
    /// Join qualifier such as `LEFT`.
    pub kind: Option<Arc<Keyword>>,
    pub outer: Option<Arc<Keyword>>,
    pub join: Arc<Keyword>,
    pub right: Arc<TableExpression>,
    pub on: Arc<Keyword>,
    pub condition: Arc<ColumnExpression>,
    pub trailing: Trivia,
}

/// A table expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum TableExpression {
    Identifier(TableIdentifier),
    Alias(TableAlias),
    #[serde(rename = "PrefixExpression")]
    Prefix(TablePrefix),
    #[serde(rename = "InfixExpression")]
    Infix(TableInfix),
    #[serde(rename = "JoinExpression")]
    Join(TableJoin),
}

impl TableExpression {
    fn as_node(&self) -> &dyn Node {
        match self {
            Self::Identifier(node) => node,
            Self::Alias(node) => node,
            Self::Prefix(node) => node,
            Self::Infix(node) => node,
            Self::Join(node) => node,
        }
    }

    /// Appends trivia after the node.
    pub(crate) fn push_trailing(&mut self, trivia: Trivia) {
        let trailing = match self {
            Self::Identifier(node) => &mut node.trailing,
            Self::Alias(node) => &mut node.trailing,
            Self::Prefix(node) => &mut node.trailing,
            Self::Infix(node) => &mut node.trailing,
            Self::Join(node) => &mut node.trailing,
        };
        trailing.extend(trivia);
    }
}

impl fmt::Display for TableIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

impl fmt::Display for TableAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.as_keyword {
            Some(as_keyword) => write!(f, "{} {} {}", self.value, as_keyword, self.alias),
            None => write!(f, "{} {}", self.value, self.alias),
        }
    }
}

impl fmt::Display for TablePrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.right)
    }
}

impl fmt::Display for TableInfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.operator.kind == TokenKind::Comma {
            write!(f, "{}, {}", self.left, self.right)
        } else {
            write!(f, "{} {} {}", self.left, self.operator, self.right)
        }
    }
}

impl fmt::Display for TableJoin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.left)?;
        for qualifier in [&self.kind, &self.outer].into_iter().flatten() {
            write!(f, "{qualifier} ")?;
        }
        write!(
            f,
            "{} {} {} {}",
            self.join, self.right, self.on, self.condition
        )
    }
}

impl fmt::Display for TableExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_node(), f)
    }
}

impl Node for TableIdentifier {
    fn node_type(&self) -> &'static str {
        "Identifier"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        out.push_str(&self.qualified_name());
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        Vec::new()
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for TableAlias {
    fn node_type(&self) -> &'static str {
        "Alias"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        self.value.write_original(out);
        if let Some(as_keyword) = &self.as_keyword {
            as_keyword.write_original(out);
        }
        self.alias.write_original(out);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        let mut children = vec![entry("value", &*self.value)];
        if let Some(as_keyword) = &self.as_keyword {
            children.push(entry("as", &**as_keyword));
        }
        children.push(entry("alias", &*self.alias));
        children
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for TablePrefix {
    fn node_type(&self) -> &'static str {
        "PrefixExpression"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        self.operator.write_original(out);
        self.right.write_original(out);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        vec![
            entry("operator", &*self.operator),
            entry("right", &*self.right),
        ]
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for TableInfix {
    fn node_type(&self) -> &'static str {
        "InfixExpression"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        self.left.write_original(out);
        self.operator.write_original(out);
        self.right.write_original(out);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        vec![
            entry("left", &*self.left),
            entry("operator", &*self.operator),
            entry("right", &*self.right),
        ]
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for TableJoin {
    fn node_type(&self) -> &'static str {
        "JoinExpression"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        self.left.write_original(out);
        for qualifier in [&self.kind, &self.outer].into_iter().flatten() {
            qualifier.write_original(out);
        }
        self.join.write_original(out);
        self.right.write_original(out);
        self.on.write_original(out);
        self.condition.write_original(out);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        let mut children = vec![entry("left", &*self.left)];
        if let Some(kind) = &self.kind {
            children.push(entry("kind", &**kind));
        }
        if let Some(outer) = &self.outer {
            children.push(entry("outer", &**outer));
        }
        children.extend([
            entry("join", &*self.join),
            entry("right", &*self.right),
            entry("on", &*self.on),
            entry("condition", &*self.condition),
        ]);
        children
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for TableExpression {
    fn node_type(&self) -> &'static str {
        self.as_node().node_type()
    }

    fn preceding(&self) -> &[String] {
        self.as_node().preceding()
    }

    fn trailing(&self) -> &[String] {
        self.as_node().trailing()
    }

    fn write_original(&self, out: &mut String) {
        self.as_node().write_original(out);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        self.as_node().child_nodes()
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Edit for TableIdentifier {
    fn child(&self, _key: &ChildKey) -> Option<Child> {
        None
    }

    fn replace_child(&self, key: &ChildKey, _child: Child) -> Result<Self, EditError> {
        Err(EditError::UnknownChild(key.clone()))
    }
}

impl Edit for TableAlias {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "value" => Some(Child::Table(Arc::clone(&self.value))),
            "as" => self.as_keyword.clone().map(Child::Keyword),
            "alias" => Some(Child::Name(Arc::clone(&self.alias))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("value") => node.value = child.into_table(key)?,
            Some("as") => node.as_keyword = Some(child.into_keyword(key)?),
            Some("alias") => node.alias = child.into_name(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for TablePrefix {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "operator" => Some(Child::Keyword(Arc::clone(&self.operator))),
            "right" => Some(Child::Table(Arc::clone(&self.right))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("operator") => node.operator = child.into_keyword(key)?,
            Some("right") => node.right = child.into_table(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for TableInfix {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "left" => Some(Child::Table(Arc::clone(&self.left))),
            "operator" => Some(Child::Keyword(Arc::clone(&self.operator))),
            "right" => Some(Child::Table(Arc::clone(&self.right))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("left") => node.left = child.into_table(key)?,
            Some("operator") => node.operator = child.into_keyword(key)?,
            Some("right") => node.right = child.into_table(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for TableJoin {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "left" => Some(Child::Table(Arc::clone(&self.left))),
            "kind" => self.kind.clone().map(Child::Keyword),
            "outer" => self.outer.clone().map(Child::Keyword),
            "join" => Some(Child::Keyword(Arc::clone(&self.join))),
            "right" => Some(Child::Table(Arc::clone(&self.right))),
            "on" => Some(Child::Keyword(Arc::clone(&self.on))),
            "condition" => Some(Child::Column(Arc::clone(&self.condition))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("left") => node.left = child.into_table(key)?,
            Some("kind") => node.kind = Some(child.into_keyword(key)?),
            Some("outer") => node.outer = Some(child.into_keyword(key)?),
            Some("join") => node.join = child.into_keyword(key)?,
            Some("right") => node.right = child.into_table(key)?,
            Some("on") => node.on = child.into_keyword(key)?,
            Some("condition") => node.condition = child.into_column(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for TableExpression {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match self {
            Self::Identifier(node) => node.child(key),
            Self::Alias(node) => node.child(key),
            Self::Prefix(node) => node.child(key),
            Self::Infix(node) => node.child(key),
            Self::Join(node) => node.child(key),
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        Ok(match self {
            Self::Identifier(node) => Self::Identifier(node.replace_child(key, child)?),
            Self::Alias(node) => Self::Alias(node.replace_child(key, child)?),
            Self::Prefix(node) => Self::Prefix(node.replace_child(key, child)?),
            Self::Infix(node) => Self::Infix(node.replace_child(key, child)?),
            Self::Join(node) => Self::Join(node.replace_child(key, child)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::column::ColumnIdentifier;
    use crate::lexer;

    fn table(name: &str) -> Arc<TableExpression> {
        Arc::new(TableExpression::Identifier(TableIdentifier::new(name)))
    }

    fn keyword(keyword: lexer::Keyword) -> Arc<Keyword> {
        Arc::new(Keyword::reserved(keyword).with_preceding(vec![" ".to_owned()]))
    }

    #[test]
    fn test_identifier_segments() {
        let identifier = TableIdentifier::from_segments(&["public", "users"]).unwrap();
        assert_eq!(identifier.schema.as_deref(), Some("public"));
        assert_eq!(identifier.to_string(), "public.users");
        assert!(TableIdentifier::from_segments(&["a", "b", "c"]).is_none());
        assert!(TableIdentifier::from_segments(&["t", "*"]).is_none());
    }

    #[test]
    fn test_comma_join_renders_without_space_before_comma() {
        let infix = TableInfix {
            preceding: Trivia::new(),
            left: table("a"),
            operator: Arc::new(Keyword::new(TokenKind::Comma, ",")),
            right: Arc::new(TableExpression::Identifier(TableIdentifier {
                preceding: vec![" ".to_owned()],
                ..TableIdentifier::new("b")
            })),
            trailing: Trivia::new(),
        };
        assert_eq!(infix.to_string(), "a, b");
        assert_eq!(infix.original(), "a, b");
    }

    fn join() -> TableJoin {
        TableJoin {
            preceding: Trivia::new(),
            left: table("a"),
            kind: Some(keyword(lexer::Keyword::Left)),
            outer: None,
            join: keyword(lexer::Keyword::Join),
            right: Arc::new(TableExpression::Identifier(TableIdentifier {
                preceding: vec![" ".to_owned()],
                ..TableIdentifier::new("b")
            })),
            on: keyword(lexer::Keyword::On),
            condition: Arc::new(ColumnExpression::Identifier(ColumnIdentifier {
                preceding: vec![" ".to_owned()],
                ..ColumnIdentifier::new("ok")
            })),
            trailing: Trivia::new(),
        }
    }

    #[test]
    fn test_join_renders_qualifier() {
        let join = join();
        assert_eq!(join.to_string(), "a LEFT JOIN b ON ok");
        assert_eq!(join.original(), "a LEFT JOIN b ON ok");
        let keys: Vec<_> = join
            .child_nodes()
            .into_iter()
            .map(|(key, _)| key.to_string())
            .collect();
        assert_eq!(keys, vec!["left", "kind", "join", "right", "on", "condition"]);
    }

    #[test]
    fn test_join_replace_condition() {
        let join = join();
        let condition = ColumnExpression::Identifier(ColumnIdentifier::new("other"));
        let replaced = join
            .replace_child(
                &ChildKey::from("condition"),
                Child::Column(Arc::new(condition)),
            )
            .unwrap();
        assert_eq!(replaced.to_string(), "a LEFT JOIN b ON other");
        assert!(Arc::ptr_eq(&join.left, &replaced.left));
        assert!(Arc::ptr_eq(&join.right, &replaced.right));

        let err = join
            .replace_child(&ChildKey::from("right"), Child::Column(Arc::clone(&join.condition)))
            .unwrap_err();
        assert!(matches!(
            err,
            EditError::TypeMismatch { expected: "TableExpression", found: "ColumnExpression", .. }
        ));
    }
}
