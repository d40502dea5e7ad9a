//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node keeps the whitespace and comments around it, so a tree can be
//! rendered back to the exact source ([`Node::original`]) or to a canonical
//! form (`Display`). Trees are immutable and share subtrees through `Arc`;
//! see [`Edit`] for copy-on-write replacement.

mod clause;
mod column;
mod edit;
mod keyword;
mod node;
mod statement;
mod table;

pub use clause::{
    FromClause, GroupByClause, HavingClause, LimitClause, OrderByClause, ResultsClause,
    WhereClause,
};
pub use column::{
    ColumnAlias, ColumnBetween, ColumnCall, ColumnExpression, ColumnGroup, ColumnIdentifier,
    ColumnInfix, ColumnLiteral, ColumnOrder, ColumnPrefix,
};
pub use edit::{replace_path, Child, Edit, EditError};
pub use keyword::{Keyword, Name};
pub use node::{ChildKey, Node, Trivia};
pub use statement::{Select, Statement};
pub use table::{TableAlias, TableExpression, TableIdentifier, TableInfix, TableJoin, TablePrefix};
