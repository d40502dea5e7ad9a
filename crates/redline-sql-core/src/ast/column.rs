//! Column expressions: everything that appears in a result list, a
//! condition, or a grouping and ordering list.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::edit::{replace_at, Child, Edit, EditError};
use super::keyword::{Keyword, Name};
use super::node::{entry, snapshot_of, write_separated, write_trivia, ChildKey, Node, Trivia};
use crate::lexer::TokenKind;

/// An integer or string literal, kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnLiteral {
    pub preceding: Trivia,
    /// [`TokenKind::Integer`] or [`TokenKind::String`].
    pub kind: TokenKind,
    /// Source text, quotes included for strings.
    pub literal: String,
    pub trailing: Trivia,
}

impl ColumnLiteral {
    /// Creates an integer literal without trivia.
    #[must_use]
    pub fn integer(value: impl Into<String>) -> Self {
        Self {
            preceding: Trivia::new(),
            kind: TokenKind::Integer,
            literal: value.into(),
            trailing: Trivia::new(),
        }
    }

    /// Creates a string literal without trivia. `literal` includes quotes.
    #[must_use]
    pub fn string(literal: impl Into<String>) -> Self {
        Self {
            preceding: Trivia::new(),
            kind: TokenKind::String,
            literal: literal.into(),
            trailing: Trivia::new(),
        }
    }
}

/// A possibly qualified column reference: `[schema.][table.]column`.
///
/// Quoted segments keep their quotes. The last segment may be `*`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnIdentifier {
    pub preceding: Trivia,
    pub schema: Option<String>,
    pub table: Option<String>,
    pub column: String,
    pub trailing: Trivia,
}

impl ColumnIdentifier {
    /// Creates an unqualified identifier without trivia.
    #[must_use]
    pub fn new(column: impl Into<String>) -> Self {
        Self {
            preceding: Trivia::new(),
            schema: None,
            table: None,
            column: column.into(),
            trailing: Trivia::new(),
        }
    }

    /// Builds an identifier from one to three dot-separated segments.
    ///
    /// Returns `None` for any other count or for an empty segment.
    #[must_use]
    pub fn from_segments(segments: &[&str]) -> Option<Self> {
        if segments.iter().any(|segment| segment.is_empty()) {
            return None;
        }
        let (schema, table, column) = match *segments {
            [column] => (None, None, column),
            [table, column] => (None, Some(table), column),
            [schema, table, column] => (Some(schema), Some(table), column),
            _ => return None,
        };
        Some(Self {
            preceding: Trivia::new(),
            schema: schema.map(str::to_owned),
            table: table.map(str::to_owned),
            column: column.to_owned(),
            trailing: Trivia::new(),
        })
    }

    /// Returns the dotted name as written.
    #[must_use]
    pub fn qualified_name(&self) -> String {
        let mut name = String::new();
        for part in [&self.schema, &self.table].into_iter().flatten() {
            name.push_str(part);
            name.push('.');
        }
        name.push_str(&self.column);
        name
    }
}

/// A unary operator applied to an operand: `NOT x`, `- 1`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnPrefix {
    pub preceding: Trivia,
    pub operator: Arc<Keyword>,
    pub right: Arc<ColumnExpression>,
    pub trailing: Trivia,
}

/// A binary operator: arithmetic, comparison, logic, `IS`, `LIKE`, `::`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnInfix {
    pub preceding: Trivia,
    pub left: Arc<ColumnExpression>,
    pub operator: Arc<Keyword>,
    pub right: Arc<ColumnExpression>,
    pub trailing: Trivia,
}

/// A parenthesised expression.
///
/// Trivia before `(` is the group's preceding trivia. Trivia before `)`
/// belongs to the inner expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnGroup {
    pub preceding: Trivia,
    pub expression: Arc<ColumnExpression>,
    pub trailing: Trivia,
}

/// `left BETWEEN start AND end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnBetween {
    pub preceding: Trivia,
    pub left: Arc<ColumnExpression>,
    pub between: Arc<Keyword>,
    pub start: Arc<ColumnExpression>,
    pub and: Arc<Keyword>,
    pub end: Arc<ColumnExpression>,
    pub trailing: Trivia,
}

/// A function call with a possibly empty argument list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnCall {
    pub preceding: Trivia,
    pub function: Arc<ColumnIdentifier>,
    /// Trivia between the parentheses of an empty argument list.
    pub inner: Trivia,
    pub arguments: Vec<Arc<ColumnExpression>>,
    pub trailing: Trivia,
}

/// `value AS alias` or the shorthand `value alias`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnAlias {
    pub preceding: Trivia,
    pub value: Arc<ColumnExpression>,
    pub as_keyword: Option<Arc<Keyword>>,
    pub alias: Arc<Name>,
    pub trailing: Trivia,
}

/// `value ASC` or `value DESC`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnOrder {
    pub preceding: Trivia,
    pub value: Arc<ColumnExpression>,
    pub order: Arc<Keyword>,
    pub trailing: Trivia,
}

/// A column expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum ColumnExpression {
    Literal(ColumnLiteral),
    /// `NULL`, `TRUE`, `FALSE`, `*`, or a type name after `::`.
    Keyword(Keyword),
    Identifier(ColumnIdentifier),
    #[serde(rename = "PrefixExpression")]
    Prefix(ColumnPrefix),
    #[serde(rename = "InfixExpression")]
    Infix(ColumnInfix),
    #[serde(rename = "GroupExpression")]
    Group(ColumnGroup),
    #[serde(rename = "BetweenExpression")]
    Between(ColumnBetween),
    #[serde(rename = "CallExpression")]
    Call(ColumnCall),
    Alias(ColumnAlias),
    #[serde(rename = "OrderExpression")]
    Order(ColumnOrder),
}

impl ColumnExpression {
    fn as_node(&self) -> &dyn Node {
        match self {
            Self::Literal(node) => node,
            Self::Keyword(node) => node,
            Self::Identifier(node) => node,
            Self::Prefix(node) => node,
            Self::Infix(node) => node,
            Self::Group(node) => node,
            Self::Between(node) => node,
            Self::Call(node) => node,
            Self::Alias(node) => node,
            Self::Order(node) => node,
        }
    }

    /// Mutable access to the trailing trivia, used while the node is being
    /// built.
    pub(crate) fn trailing_mut(&mut self) -> &mut Trivia {
        match self {
            Self::Literal(node) => &mut node.trailing,
            Self::Keyword(node) => &mut node.trailing,
            Self::Identifier(node) => &mut node.trailing,
            Self::Prefix(node) => &mut node.trailing,
            Self::Infix(node) => &mut node.trailing,
            Self::Group(node) => &mut node.trailing,
            Self::Between(node) => &mut node.trailing,
            Self::Call(node) => &mut node.trailing,
            Self::Alias(node) => &mut node.trailing,
            Self::Order(node) => &mut node.trailing,
        }
    }

    /// Appends trivia after the node.
    pub(crate) fn push_trailing(&mut self, trivia: Trivia) {
        self.trailing_mut().extend(trivia);
    }
}

impl fmt::Display for ColumnLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.literal)
    }
}

impl fmt::Display for ColumnIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.qualified_name())
    }
}

impl fmt::Display for ColumnPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.operator, self.right)
    }
}

impl fmt::Display for ColumnInfix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.left, self.operator, self.right)
    }
}

impl fmt::Display for ColumnGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.expression)
    }
}

impl fmt::Display for ColumnBetween {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {} {}",
            self.left, self.between, self.start, self.and, self.end
        )
    }
}

impl fmt::Display for ColumnCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.function)?;
        write_separated(f, &self.arguments, ", ")?;
        f.write_str(")")
    }
}

impl fmt::Display for ColumnAlias {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.as_keyword {
            Some(as_keyword) => write!(f, "{} {} {}", self.value, as_keyword, self.alias),
            None => write!(f, "{} {}", self.value, self.alias),
        }
    }
}

impl fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.order)
    }
}

impl fmt::Display for ColumnExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_node(), f)
    }
}

impl Node for ColumnLiteral {
    fn node_type(&self) -> &'static str {
        "Literal"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        out.push_str(&self.literal);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        Vec::new()
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for ColumnIdentifier {
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

impl Node for ColumnPrefix {
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

impl Node for ColumnInfix {
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

impl Node for ColumnGroup {
    fn node_type(&self) -> &'static str {
        "GroupExpression"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        out.push('(');
        self.expression.write_original(out);
        out.push(')');
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        vec![entry("expression", &*self.expression)]
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for ColumnBetween {
    fn node_type(&self) -> &'static str {
        "BetweenExpression"
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
        self.between.write_original(out);
        self.start.write_original(out);
        self.and.write_original(out);
        self.end.write_original(out);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        vec![
            entry("left", &*self.left),
            entry("between", &*self.between),
            entry("start", &*self.start),
            entry("and", &*self.and),
            entry("end", &*self.end),
        ]
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for ColumnCall {
    fn node_type(&self) -> &'static str {
        "CallExpression"
    }

    fn preceding(&self) -> &[String] {
        &self.preceding
    }

    fn trailing(&self) -> &[String] {
        &self.trailing
    }

    fn write_original(&self, out: &mut String) {
        write_trivia(out, &self.preceding);
        self.function.write_original(out);
        out.push('(');
        write_trivia(out, &self.inner);
        for (index, argument) in self.arguments.iter().enumerate() {
            if index > 0 {
                out.push(',');
            }
            argument.write_original(out);
        }
        out.push(')');
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        let mut children: Vec<(ChildKey, &dyn Node)> =
            vec![entry("function", &*self.function)];
        children.extend(
            self.arguments
                .iter()
                .enumerate()
                .map(|(index, argument)| entry(index, &**argument)),
        );
        children
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for ColumnAlias {
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
        let mut children: Vec<(ChildKey, &dyn Node)> = vec![entry("value", &*self.value)];
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

impl Node for ColumnOrder {
    fn node_type(&self) -> &'static str {
        "OrderExpression"
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
        self.order.write_original(out);
        write_trivia(out, &self.trailing);
    }

    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)> {
        vec![
            entry("value", &*self.value),
            entry("order", &*self.order),
        ]
    }

    fn snapshot(&self) -> serde_json::Value {
        snapshot_of(self, self.node_type())
    }
}

impl Node for ColumnExpression {
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

impl Edit for ColumnLiteral {
    fn child(&self, _key: &ChildKey) -> Option<Child> {
        None
    }

    fn replace_child(&self, key: &ChildKey, _child: Child) -> Result<Self, EditError> {
        Err(EditError::UnknownChild(key.clone()))
    }
}

impl Edit for ColumnIdentifier {
    fn child(&self, _key: &ChildKey) -> Option<Child> {
        None
    }

    fn replace_child(&self, key: &ChildKey, _child: Child) -> Result<Self, EditError> {
        Err(EditError::UnknownChild(key.clone()))
    }
}

impl Edit for ColumnPrefix {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "operator" => Some(Child::Keyword(Arc::clone(&self.operator))),
            "right" => Some(Child::Column(Arc::clone(&self.right))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("operator") => node.operator = child.into_keyword(key)?,
            Some("right") => node.right = child.into_column(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnInfix {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "left" => Some(Child::Column(Arc::clone(&self.left))),
            "operator" => Some(Child::Keyword(Arc::clone(&self.operator))),
            "right" => Some(Child::Column(Arc::clone(&self.right))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("left") => node.left = child.into_column(key)?,
            Some("operator") => node.operator = child.into_keyword(key)?,
            Some("right") => node.right = child.into_column(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnGroup {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "expression" => Some(Child::Column(Arc::clone(&self.expression))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("expression") => node.expression = child.into_column(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnBetween {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "left" => Some(Child::Column(Arc::clone(&self.left))),
            "between" => Some(Child::Keyword(Arc::clone(&self.between))),
            "start" => Some(Child::Column(Arc::clone(&self.start))),
            "and" => Some(Child::Keyword(Arc::clone(&self.and))),
            "end" => Some(Child::Column(Arc::clone(&self.end))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("left") => node.left = child.into_column(key)?,
            Some("between") => node.between = child.into_keyword(key)?,
            Some("start") => node.start = child.into_column(key)?,
            Some("and") => node.and = child.into_keyword(key)?,
            Some("end") => node.end = child.into_column(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnCall {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key {
            ChildKey::Field(name) if name == "function" => {
                Some(Child::Identifier(Arc::clone(&self.function)))
            }
            ChildKey::Index(index) => self
                .arguments
                .get(*index)
                .map(|argument| Child::Column(Arc::clone(argument))),
            ChildKey::Field(_) => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key {
            ChildKey::Field(name) if name == "function" => {
                node.function = child.into_identifier(key)?;
            }
            ChildKey::Index(index) => {
                node.arguments = replace_at(&self.arguments, *index, child.into_column(key)?)?;
            }
            ChildKey::Field(_) => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnAlias {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "value" => Some(Child::Column(Arc::clone(&self.value))),
            "as" => self.as_keyword.clone().map(Child::Keyword),
            "alias" => Some(Child::Name(Arc::clone(&self.alias))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("value") => node.value = child.into_column(key)?,
            Some("as") => node.as_keyword = Some(child.into_keyword(key)?),
            Some("alias") => node.alias = child.into_name(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnOrder {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match key.as_field()? {
            "value" => Some(Child::Column(Arc::clone(&self.value))),
            "order" => Some(Child::Keyword(Arc::clone(&self.order))),
            _ => None,
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        let mut node = self.clone();
        match key.as_field() {
            Some("value") => node.value = child.into_column(key)?,
            Some("order") => node.order = child.into_keyword(key)?,
            _ => return Err(EditError::UnknownChild(key.clone())),
        }
        Ok(node)
    }
}

impl Edit for ColumnExpression {
    fn child(&self, key: &ChildKey) -> Option<Child> {
        match self {
            Self::Literal(node) => node.child(key),
            Self::Keyword(node) => node.child(key),
            Self::Identifier(node) => node.child(key),
            Self::Prefix(node) => node.child(key),
            Self::Infix(node) => node.child(key),
            Self::Group(node) => node.child(key),
            Self::Between(node) => node.child(key),
            Self::Call(node) => node.child(key),
            Self::Alias(node) => node.child(key),
            Self::Order(node) => node.child(key),
        }
    }

    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError> {
        Ok(match self {
            Self::Literal(node) => Self::Literal(node.replace_child(key, child)?),
            Self::Keyword(node) => Self::Keyword(node.replace_child(key, child)?),
            Self::Identifier(node) => Self::Identifier(node.replace_child(key, child)?),
            Self::Prefix(node) => Self::Prefix(node.replace_child(key, child)?),
            Self::Infix(node) => Self::Infix(node.replace_child(key, child)?),
            Self::Group(node) => Self::Group(node.replace_child(key, child)?),
            Self::Between(node) => Self::Between(node.replace_child(key, child)?),
            Self::Call(node) => Self::Call(node.replace_child(key, child)?),
            Self::Alias(node) => Self::Alias(node.replace_child(key, child)?),
            Self::Order(node) => Self::Order(node.replace_child(key, child)?),
        })
    }
}
