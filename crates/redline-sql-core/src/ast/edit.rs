//! Structural edits with sharing.
//!
//! Nodes are never mutated. An edit returns a new node whose untouched
//! children are the same `Arc`s as before, so `Arc::ptr_eq` holds between
//! the old and the new tree everywhere outside the edited path.

use std::sync::Arc;

use thiserror::Error;

use super::clause::{
    FromClause, GroupByClause, HavingClause, LimitClause, OrderByClause, ResultsClause,
    WhereClause,
};
use super::column::{ColumnExpression, ColumnIdentifier};
use super::keyword::{Keyword, Name};
use super::node::{ChildKey, Node};
use super::table::TableExpression;

/// Errors from structural edits.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
    /// The node has no child under this key.
    #[error("node has no child `{0}`")]
    UnknownChild(ChildKey),

    /// The replacement has the wrong node type for the slot.
    #[error("child `{key}` expects {expected}, found {found}")]
    TypeMismatch {
        key: ChildKey,
        expected: &'static str,
        found: &'static str,
    },

    /// An edit path must name at least one child.
    #[error("edit path is empty")]
    EmptyPath,
}

/// A typed, shared handle to a child node.
#[derive(Debug, Clone, PartialEq)]
pub enum Child {
    Keyword(Arc<Keyword>),
    Name(Arc<Name>),
    Column(Arc<ColumnExpression>),
    /// A bare identifier, as used for call targets.
    Identifier(Arc<ColumnIdentifier>),
    Table(Arc<TableExpression>),
    Results(Arc<ResultsClause>),
    From(Arc<FromClause>),
    Where(Arc<WhereClause>),
    GroupBy(Arc<GroupByClause>),
    Having(Arc<HavingClause>),
    OrderBy(Arc<OrderByClause>),
    Limit(Arc<LimitClause>),
}

impl Child {
    /// Borrows the child as a node.
    #[must_use]
    pub fn as_node(&self) -> &dyn Node {
        match self {
            Self::Keyword(node) => node.as_ref(),
            Self::Name(node) => node.as_ref(),
            Self::Column(node) => node.as_ref(),
            Self::Identifier(node) => node.as_ref(),
            Self::Table(node) => node.as_ref(),
            Self::Results(node) => node.as_ref(),
            Self::From(node) => node.as_ref(),
            Self::Where(node) => node.as_ref(),
            Self::GroupBy(node) => node.as_ref(),
            Self::Having(node) => node.as_ref(),
            Self::OrderBy(node) => node.as_ref(),
            Self::Limit(node) => node.as_ref(),
        }
    }

    /// Name of the slot type this handle fills.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Keyword(_) => "Keyword",
            Self::Name(_) => "Name",
            Self::Column(_) => "ColumnExpression",
            Self::Identifier(_) => "Identifier",
            Self::Table(_) => "TableExpression",
            Self::Results(_) => "ResultsClause",
            Self::From(_) => "FromClause",
            Self::Where(_) => "WhereClause",
            Self::GroupBy(_) => "GroupByClause",
            Self::Having(_) => "HavingClause",
            Self::OrderBy(_) => "OrderByClause",
            Self::Limit(_) => "LimitClause",
        }
    }

    /// Applies `replacement` at `path` below this child.
    fn replace_path(&self, path: &[ChildKey], replacement: Self) -> Result<Self, EditError> {
        Ok(match self {
            Self::Keyword(node) => Self::Keyword(Arc::new(replace_path(&**node, path, replacement)?)),
            Self::Name(node) => Self::Name(Arc::new(replace_path(&**node, path, replacement)?)),
            Self::Column(node) => Self::Column(Arc::new(replace_path(&**node, path, replacement)?)),
            Self::Identifier(node) => {
                Self::Identifier(Arc::new(replace_path(&**node, path, replacement)?))
            }
            Self::Table(node) => Self::Table(Arc::new(replace_path(&**node, path, replacement)?)),
            Self::Results(node) => {
                Self::Results(Arc::new(replace_path(&**node, path, replacement)?))
            }
            Self::From(node) => Self::From(Arc::new(replace_path(&**node, path, replacement)?)),
            Self::Where(node) => Self::Where(Arc::new(replace_path(&**node, path, replacement)?)),
            Self::GroupBy(node) => {
                Self::GroupBy(Arc::new(replace_path(&**node, path, replacement)?))
            }
            Self::Having(node) => {
                Self::Having(Arc::new(replace_path(&**node, path, replacement)?))
            }
            Self::OrderBy(node) => {
                Self::OrderBy(Arc::new(replace_path(&**node, path, replacement)?))
            }
            Self::Limit(node) => Self::Limit(Arc::new(replace_path(&**node, path, replacement)?)),
        })
    }

    fn mismatch(self, key: &ChildKey, expected: &'static str) -> EditError {
        EditError::TypeMismatch {
            key: key.clone(),
            expected,
            found: self.type_name(),
        }
    }

    pub(crate) fn into_keyword(self, key: &ChildKey) -> Result<Arc<Keyword>, EditError> {
        match self {
            Self::Keyword(node) => Ok(node),
            other => Err(other.mismatch(key, "Keyword")),
        }
    }

    pub(crate) fn into_name(self, key: &ChildKey) -> Result<Arc<Name>, EditError> {
        match self {
            Self::Name(node) => Ok(node),
            other => Err(other.mismatch(key, "Name")),
        }
    }

    /// Accepts a column expression, or a bare identifier wrapped as one.
    pub(crate) fn into_column(self, key: &ChildKey) -> Result<Arc<ColumnExpression>, EditError> {
        match self {
            Self::Column(node) => Ok(node),
            Self::Identifier(node) => Ok(Arc::new(ColumnExpression::Identifier(
                Arc::unwrap_or_clone(node),
            ))),
            other => Err(other.mismatch(key, "ColumnExpression")),
        }
    }

    /// Accepts an identifier, or a column expression that is one.
    pub(crate) fn into_identifier(
        self,
        key: &ChildKey,
    ) -> Result<Arc<ColumnIdentifier>, EditError> {
        match self {
            Self::Identifier(node) => Ok(node),
            Self::Column(node) => {
                if let ColumnExpression::Identifier(identifier) = node.as_ref() {
                    return Ok(Arc::new(identifier.clone()));
                }
                Err(Self::Column(node).mismatch(key, "Identifier"))
            }
            other => Err(other.mismatch(key, "Identifier")),
        }
    }

    pub(crate) fn into_table(self, key: &ChildKey) -> Result<Arc<TableExpression>, EditError> {
        match self {
            Self::Table(node) => Ok(node),
            other => Err(other.mismatch(key, "TableExpression")),
        }
    }

    pub(crate) fn into_results(self, key: &ChildKey) -> Result<Arc<ResultsClause>, EditError> {
        match self {
            Self::Results(node) => Ok(node),
            other => Err(other.mismatch(key, "ResultsClause")),
        }
    }

    pub(crate) fn into_from(self, key: &ChildKey) -> Result<Arc<FromClause>, EditError> {
        match self {
            Self::From(node) => Ok(node),
            other => Err(other.mismatch(key, "FromClause")),
        }
    }

    pub(crate) fn into_where(self, key: &ChildKey) -> Result<Arc<WhereClause>, EditError> {
        match self {
            Self::Where(node) => Ok(node),
            other => Err(other.mismatch(key, "WhereClause")),
        }
    }

    pub(crate) fn into_group_by(self, key: &ChildKey) -> Result<Arc<GroupByClause>, EditError> {
        match self {
            Self::GroupBy(node) => Ok(node),
            other => Err(other.mismatch(key, "GroupByClause")),
        }
    }

    pub(crate) fn into_having(self, key: &ChildKey) -> Result<Arc<HavingClause>, EditError> {
        match self {
            Self::Having(node) => Ok(node),
            other => Err(other.mismatch(key, "HavingClause")),
        }
    }

    pub(crate) fn into_order_by(self, key: &ChildKey) -> Result<Arc<OrderByClause>, EditError> {
        match self {
            Self::OrderBy(node) => Ok(node),
            other => Err(other.mismatch(key, "OrderByClause")),
        }
    }

    pub(crate) fn into_limit(self, key: &ChildKey) -> Result<Arc<LimitClause>, EditError> {
        match self {
            Self::Limit(node) => Ok(node),
            other => Err(other.mismatch(key, "LimitClause")),
        }
    }
}

/// Copy-on-write replacement of immediate children.
pub trait Edit: Node + Clone {
    /// Returns a shared handle to the child under `key`.
    fn child(&self, key: &ChildKey) -> Option<Child>;

    /// Returns a copy of this node with the child under `key` replaced.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::UnknownChild`] if the key names no child and
    /// [`EditError::TypeMismatch`] if the replacement cannot fill the slot.
    fn replace_child(&self, key: &ChildKey, child: Child) -> Result<Self, EditError>;

    /// Applies several replacements in one call, in order.
    ///
    /// # Errors
    ///
    /// Fails on the first change that [`Edit::replace_child`] rejects.
    fn replace<I>(&self, changes: I) -> Result<Self, EditError>
    where
        I: IntoIterator<Item = (ChildKey, Child)>,
    {
        let mut node = self.clone();
        for (key, child) in changes {
            node = node.replace_child(&key, child)?;
        }
        Ok(node)
    }
}

/// Replaces the descendant addressed by `path`, rebuilding only the nodes
/// along the path.
///
/// # Errors
///
/// Returns [`EditError::EmptyPath`] for an empty path, and any error from
/// [`Edit::replace_child`] along the way.
pub fn replace_path<T: Edit>(
    root: &T,
    path: &[ChildKey],
    replacement: Child,
) -> Result<T, EditError> {
    let (first, rest) = path.split_first().ok_or(EditError::EmptyPath)?;
    if rest.is_empty() {
        return root.replace_child(first, replacement);
    }
    let child = root
        .child(first)
        .ok_or_else(|| EditError::UnknownChild(first.clone()))?;
    let child = child.replace_path(rest, replacement)?;
    root.replace_child(first, child)
}

/// Returns `items` with the element at `index` replaced; the rest is shared.
pub(crate) fn replace_at<T>(
    items: &[Arc<T>],
    index: usize,
    value: Arc<T>,
) -> Result<Vec<Arc<T>>, EditError> {
    if index >= items.len() {
        return Err(EditError::UnknownChild(ChildKey::Index(index)));
    }
    let mut items = items.to_vec();
    items[index] = value;
    Ok(items)
}
