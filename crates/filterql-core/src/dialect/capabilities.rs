//! Explicit capability sets for custom dialects.

use super::{ClauseDialect, Dialect, ExpressionDialect, FoldShape};

/// A dialect assembled from individual capability flags.
///
/// Use this when neither built-in dialect fits, for example to accept both
/// groups and per-leaf `NOT` in one grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub grouping: bool,
    pub leaf_negation: bool,
    pub group_negation: bool,
    pub dotted_identifiers: bool,
    pub clauses: bool,
    pub fold_shape: FoldShape,
}

impl Capabilities {
    /// Copies the capabilities of an existing dialect.
    #[must_use]
    pub fn of<D: Dialect + ?Sized>(dialect: &D) -> Self {
        Self {
            grouping: dialect.allows_grouping(),
            leaf_negation: dialect.allows_leaf_negation(),
            group_negation: dialect.allows_group_negation(),
            dotted_identifiers: dialect.allows_dotted_identifiers(),
            clauses: dialect.supports_clauses(),
            fold_shape: dialect.fold_shape(),
        }
    }

    /// The capabilities of [`ExpressionDialect`].
    #[must_use]
    pub fn expression() -> Self {
        Self::of(&ExpressionDialect)
    }

    /// The capabilities of [`ClauseDialect`].
    #[must_use]
    pub fn clause() -> Self {
        Self::of(&ClauseDialect)
    }
}

impl Dialect for Capabilities {
    fn name(&self) -> &'static str {
        "custom"
    }

    fn allows_grouping(&self) -> bool {
        self.grouping
    }

    fn allows_leaf_negation(&self) -> bool {
        self.leaf_negation
    }

    fn allows_group_negation(&self) -> bool {
        self.grouping && self.group_negation
    }

    fn allows_dotted_identifiers(&self) -> bool {
        self.dotted_identifiers
    }

    fn supports_clauses(&self) -> bool {
        self.clauses
    }

    fn fold_shape(&self) -> FoldShape {
        self.fold_shape
    }
}
