//! The capability set shared by every AST node.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

/// Raw whitespace and comment fragments, in source order.
pub type Trivia = Vec<String>;

/// Key of an immediate structural child: a field name or a list index.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(untagged)]
pub enum ChildKey {
    /// A named field such as `left` or `condition`.
    Field(Cow<'static, str>),
    /// A position in the node's ordered child list.
    Index(usize),
}

impl ChildKey {
    /// Returns the field name, if this is a field key.
    #[must_use]
    pub fn as_field(&self) -> Option<&str> {
        match self {
            Self::Field(name) => Some(name),
            Self::Index(_) => None,
        }
    }
}

impl From<&'static str> for ChildKey {
    fn from(name: &'static str) -> Self {
        Self::Field(Cow::Borrowed(name))
    }
}

impl From<String> for ChildKey {
    fn from(name: String) -> Self {
        Self::Field(Cow::Owned(name))
    }
}

impl From<usize> for ChildKey {
    fn from(index: usize) -> Self {
        Self::Index(index)
    }
}

impl FromStr for ChildKey {
    type Err = std::convert::Infallible;

    /// Digits parse as an index, anything else as a field name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(s.parse::<usize>()
            .map_or_else(|_| Self::Field(Cow::Owned(s.to_owned())), Self::Index))
    }
}

impl fmt::Display for ChildKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// Read access common to every node.
///
/// `Display` is the canonical render: single spaces and upper-cased
/// keywords. [`Node::original`] reproduces the exact source bytes, trivia
/// included.
pub trait Node: fmt::Display + fmt::Debug + Send + Sync {
    /// Name of the node variant, e.g. `"InfixExpression"`.
    fn node_type(&self) -> &'static str;

    /// Trivia captured directly before the node.
    fn preceding(&self) -> &[String];

    /// Trivia captured directly after the node.
    fn trailing(&self) -> &[String];

    /// Appends the original source text of this node to `out`.
    fn write_original(&self, out: &mut String);

    /// Returns the original source text of this node.
    fn original(&self) -> String {
        let mut out = String::new();
        self.write_original(&mut out);
        out
    }

    /// Returns the canonical render.
    fn canonical(&self) -> String {
        self.to_string()
    }

    /// Immediate structural children, in source order.
    ///
    /// Absent optional children are omitted. List elements are keyed by
    /// their index.
    fn child_nodes(&self) -> Vec<(ChildKey, &dyn Node)>;

    /// Structural view of the node, trivia included, for tooling.
    fn snapshot(&self) -> serde_json::Value;
}

/// Pairs a child with its key for [`Node::child_nodes`].
pub(crate) fn entry(key: impl Into<ChildKey>, node: &dyn Node) -> (ChildKey, &dyn Node) {
    (key.into(), node)
}

pub(crate) fn write_trivia(out: &mut String, trivia: &[String]) {
    for fragment in trivia {
        out.push_str(fragment);
    }
}

/// Serializes a node and tags objects that lack a `type` field.
pub(crate) fn snapshot_of<T: Serialize>(node: &T, node_type: &'static str) -> serde_json::Value {
    let mut value = serde_json::to_value(node).unwrap_or(serde_json::Value::Null);
    if let serde_json::Value::Object(map) = &mut value {
        map.entry("type")
            .or_insert_with(|| serde_json::Value::from(node_type));
    }
    value
}

/// Writes `items` separated by `separator` using their canonical form.
pub(crate) fn write_separated<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    separator: &str,
) -> fmt::Result {
    for (index, item) in items.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_key_parsing() {
        assert_eq!("0".parse::<ChildKey>(), Ok(ChildKey::Index(0)));
        assert_eq!("12".parse::<ChildKey>(), Ok(ChildKey::Index(12)));
        assert_eq!("left".parse::<ChildKey>(), Ok(ChildKey::from("left")));
    }

    #[test]
    fn test_child_key_display() {
        assert_eq!(ChildKey::from("right").to_string(), "right");
        assert_eq!(ChildKey::Index(3).to_string(), "3");
        assert_eq!(ChildKey::Index(3).as_field(), None);
        assert_eq!(ChildKey::from("on").as_field(), Some("on"));
    }

    #[test]
    fn test_write_trivia() {
        let mut out = String::from("a");
        write_trivia(&mut out, &[" ".to_owned(), "-- x".to_owned(), "\n".to_owned()]);
        assert_eq!(out, "a -- x\n");
    }
}
