//! SELECT clause-set dialect.

use super::{Dialect, FoldShape};

/// The clause dialect: `SELECT`/`WHERE`/`GROUP BY`/`ORDER BY`/`OFFSET`/
/// `LIMIT`, per-leaf `NOT`, no parenthesized groups, plain field names.
/// Chains fold into a flat tagged list.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClauseDialect;

impl ClauseDialect {
    /// Creates the clause dialect.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Dialect for ClauseDialect {
    fn name(&self) -> &'static str {
        "clause"
    }

    fn allows_leaf_negation(&self) -> bool {
        true
    }

    fn supports_clauses(&self) -> bool {
        true
    }

    fn fold_shape(&self) -> FoldShape {
        FoldShape::Flat
    }
}
