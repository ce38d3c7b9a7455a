//! Folding condition chains into the shapes translators consume.
//!
//! A chain has no AND/OR precedence: links combine strictly left to right,
//! so `a AND b OR c` folds to `Or(And(a, b), c)` and `a OR b AND c` folds to
//! `And(Or(a, b), c)`. Parenthesized groups are folded on their own first and
//! then take part in the outer chain as a single operand.

use core::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::ast::{ChainLink, Condition, ConditionChain, Conjunction};
use crate::dialect::{Dialect, FoldShape};

/// A folded boolean filter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    /// A single leaf condition.
    Leaf(Condition),
    /// Negation of the inner filter.
    Not(Box<Filter>),
    /// Both sides must hold.
    And(Box<Filter>, Box<Filter>),
    /// Either side must hold.
    Or(Box<Filter>, Box<Filter>),
}

impl Filter {
    /// Wraps a leaf condition.
    #[must_use]
    pub const fn leaf(condition: Condition) -> Self {
        Self::Leaf(condition)
    }

    /// Negates this filter.
    #[must_use]
    pub fn negate(self) -> Self {
        Self::Not(Box::new(self))
    }

    /// Combines this filter with `right` under AND.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        Self::And(Box::new(self), Box::new(right))
    }

    /// Combines this filter with `right` under OR.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        Self::Or(Box::new(self), Box::new(right))
    }

    fn combine(self, conjunction: Conjunction, right: Self) -> Self {
        match conjunction {
            Conjunction::And => self.and(right),
            Conjunction::Or => self.or(right),
        }
    }

    /// Returns the number of leaf conditions.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Leaf(_) => 1,
            Self::Not(inner) => inner.leaf_count(),
            Self::And(left, right) | Self::Or(left, right) => {
                left.leaf_count() + right.leaf_count()
            }
        }
    }
}

/// Renders the tree with every binary node parenthesized. The output parses
/// in the expression dialect and folds back to the same tree.
impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(condition) => write!(f, "{condition}"),
            Self::Not(inner) => match inner.as_ref() {
                Self::And(..) | Self::Or(..) => write!(f, "NOT {inner}"),
                _ => write!(f, "NOT ({inner})"),
            },
            Self::And(left, right) => write!(f, "({left} AND {right})"),
            Self::Or(left, right) => write!(f, "({left} OR {right})"),
        }
    }
}

/// How a flat entry attaches to the entries before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Join {
    /// The first entry.
    Where,
    /// Joined with AND.
    And,
    /// Joined with OR.
    Or,
}

impl Join {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Where => "WHERE",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl From<Conjunction> for Join {
    fn from(conjunction: Conjunction) -> Self {
        match conjunction {
            Conjunction::And => Self::And,
            Conjunction::Or => Self::Or,
        }
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One entry of a flat fold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedCondition {
    pub join: Join,
    pub negated: bool,
    pub condition: Condition,
}

impl fmt::Display for TaggedCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.join)?;
        if self.negated {
            f.write_str("NOT ")?;
        }
        write!(f, "{}", self.condition)
    }
}

/// A chain folded into the shape its dialect asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "shape", content = "value", rename_all = "snake_case")]
pub enum Folded {
    Tree(Filter),
    Flat(Vec<TaggedCondition>),
}

impl Folded {
    /// Returns the fold shape of this value.
    #[must_use]
    pub const fn shape(&self) -> FoldShape {
        match self {
            Self::Tree(_) => FoldShape::Tree,
            Self::Flat(_) => FoldShape::Flat,
        }
    }
}

/// Folds a chain into a left-to-right binary tree.
///
/// Negated links become `Not` around their operand and negated groups become
/// `Not` around the folded group body. Returns `None` for an empty chain;
/// empty groups contribute nothing to the surrounding chain.
#[must_use]
pub fn fold_tree(chain: &ConditionChain) -> Option<Filter> {
    trace!(links = chain.len(), "folding chain into tree");
    let mut acc: Option<Filter> = None;
    for link in chain {
        let Some(operand) = fold_operand(link) else {
            continue;
        };
        acc = Some(match acc {
            None => operand,
            Some(left) => {
                let conjunction = link.conjunction.unwrap_or(Conjunction::And);
                left.combine(conjunction, operand)
            }
        });
    }
    acc
}

fn fold_operand(link: &ChainLink) -> Option<Filter> {
    let operand = match &link.condition {
        Condition::Group { body, negated } => {
            let inner = fold_tree(body)?;
            if *negated {
                inner.negate()
            } else {
                inner
            }
        }
        leaf => Filter::leaf(leaf.clone()),
    };
    Some(if link.negated {
        operand.negate()
    } else {
        operand
    })
}

/// Lists the chain links in input order, each tagged with how it joins the
/// entries before it.
#[must_use]
pub fn flatten(chain: &ConditionChain) -> Vec<TaggedCondition> {
    trace!(links = chain.len(), "flattening chain");
    chain
        .iter()
        .enumerate()
        .map(|(i, link)| TaggedCondition {
            join: match link.conjunction {
                Some(conjunction) if i > 0 => conjunction.into(),
                None if i > 0 => Join::And,
                _ => Join::Where,
            },
            negated: link.negated,
            condition: link.condition.clone(),
        })
        .collect()
}

/// Folds a chain into the shape `dialect` asks for.
///
/// Returns `None` only when a tree fold is requested for an empty chain.
#[must_use]
pub fn resolve<D: Dialect + ?Sized>(chain: &ConditionChain, dialect: &D) -> Option<Folded> {
    let shape = dialect.fold_shape();
    debug!(dialect = dialect.name(), ?shape, links = chain.len(), "resolving chain");
    match shape {
        FoldShape::Tree => fold_tree(chain).map(Folded::Tree),
        FoldShape::Flat => Some(Folded::Flat(flatten(chain))),
    }
}
