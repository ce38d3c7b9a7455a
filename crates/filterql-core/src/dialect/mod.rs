//! Grammar dialects.
//!
//! The two surface grammars accept different subsets: the expression dialect
//! has parenthesized groups, the clause dialect has per-leaf `NOT` and the
//! full SELECT clause set. A dialect is a fixed set of capability flags, so
//! a parser is always configured explicitly rather than accepting the union.

mod capabilities;
mod clause;
mod expression;

pub use capabilities::Capabilities;
pub use clause::ClauseDialect;
pub use expression::ExpressionDialect;

/// The shape a condition chain is folded into for translators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FoldShape {
    /// A left-to-right binary tree.
    #[default]
    Tree,
    /// One tagged entry per chain link.
    Flat,
}

/// Trait for dialect-specific grammar behavior.
pub trait Dialect {
    /// Returns the name of the dialect.
    fn name(&self) -> &'static str;

    /// Returns whether parenthesized groups are accepted.
    fn allows_grouping(&self) -> bool {
        false
    }

    /// Returns whether `NOT` may prefix a single leaf condition.
    fn allows_leaf_negation(&self) -> bool {
        false
    }

    /// Returns whether `NOT` may prefix a parenthesized group.
    fn allows_group_negation(&self) -> bool {
        self.allows_grouping()
    }

    /// Returns whether `.` may continue an identifier.
    fn allows_dotted_identifiers(&self) -> bool {
        false
    }

    /// Returns whether the SELECT clause set is accepted.
    fn supports_clauses(&self) -> bool {
        false
    }

    /// Returns the shape chains are folded into.
    fn fold_shape(&self) -> FoldShape {
        FoldShape::Tree
    }
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn allows_grouping(&self) -> bool {
        (**self).allows_grouping()
    }

    fn allows_leaf_negation(&self) -> bool {
        (**self).allows_leaf_negation()
    }

    fn allows_group_negation(&self) -> bool {
        (**self).allows_group_negation()
    }

    fn allows_dotted_identifiers(&self) -> bool {
        (**self).allows_dotted_identifiers()
    }

    fn supports_clauses(&self) -> bool {
        (**self).supports_clauses()
    }

    fn fold_shape(&self) -> FoldShape {
        (**self).fold_shape()
    }
}
