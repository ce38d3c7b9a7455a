//! Condition tree types.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::Literal;

/// Operators of leaf conditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    Eq,
    NotEq,
    Gt,
    Lt,
    GtEq,
    LtEq,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,
    /// Negation applied to a whole leaf from outside.
    Not,
}

impl Operator {
    /// Comparison operators with their source spelling, longest first so
    /// that `>=` is never read as `>` followed by `=`.
    pub const SYMBOLS: [(&'static str, Self); 7] = [
        (">=", Self::GtEq),
        ("<=", Self::LtEq),
        ("!=", Self::NotEq),
        ("<>", Self::NotEq),
        ("=", Self::Eq),
        (">", Self::Gt),
        ("<", Self::Lt),
    ];

    /// Returns the canonical text of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::NotEq => "!=",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::GtEq => ">=",
            Self::LtEq => "<=",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::Not => "NOT",
        }
    }

    /// Returns true for operators allowed in a [`Condition::Comparison`].
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq
                | Self::NotEq
                | Self::Gt
                | Self::Lt
                | Self::GtEq
                | Self::LtEq
                | Self::Like
                | Self::NotLike
        )
    }

    /// Returns the operator testing the opposite outcome, if there is one.
    #[must_use]
    pub const fn negate(&self) -> Option<Self> {
        match self {
            Self::Eq => Some(Self::NotEq),
            Self::NotEq => Some(Self::Eq),
            Self::Gt => Some(Self::LtEq),
            Self::LtEq => Some(Self::Gt),
            Self::Lt => Some(Self::GtEq),
            Self::GtEq => Some(Self::Lt),
            Self::Like => Some(Self::NotLike),
            Self::NotLike => Some(Self::Like),
            Self::In => Some(Self::NotIn),
            Self::NotIn => Some(Self::In),
            Self::IsNull => Some(Self::IsNotNull),
            Self::IsNotNull => Some(Self::IsNull),
            Self::Not => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The join between a chain link and the link before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Conjunction {
    And,
    Or,
}

impl Conjunction {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
        }
    }
}

impl fmt::Display for Conjunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single condition: a leaf test or a parenthesized group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Condition {
    /// `field <op> value`.
    Comparison {
        /// Field name.
        field: String,
        /// One of the comparison operators.
        operator: Operator,
        /// Right-hand value.
        value: Literal,
    },

    /// `field IS NULL` or `field IS NOT NULL`.
    NullCheck {
        /// Field name.
        field: String,
        /// True for `IS NULL`.
        expects_null: bool,
    },

    /// `field IN (...)` or `field NOT IN (...)`.
    Membership {
        /// Field name.
        field: String,
        /// True for `NOT IN`.
        negated: bool,
        /// Listed values, in input order. May be empty.
        values: Vec<Literal>,
    },

    /// A parenthesized chain, optionally preceded by `NOT`.
    Group {
        /// The chain inside the parentheses.
        body: ConditionChain,
        /// Whether the group was preceded by `NOT`.
        negated: bool,
    },
}

impl Condition {
    /// Creates a comparison.
    ///
    /// # Panics
    ///
    /// Panics if `operator` is not a comparison operator.
    #[must_use]
    pub fn comparison(field: impl Into<String>, operator: Operator, value: impl Into<Literal>) -> Self {
        assert!(
            operator.is_comparison(),
            "{operator} is not a comparison operator"
        );
        Self::Comparison {
            field: field.into(),
            operator,
            value: value.into(),
        }
    }

    /// Creates an equality comparison.
    #[must_use]
    pub fn eq(field: impl Into<String>, value: impl Into<Literal>) -> Self {
        Self::comparison(field, Operator::Eq, value)
    }

    /// Creates an `IS NULL` check.
    #[must_use]
    pub fn is_null(field: impl Into<String>) -> Self {
        Self::NullCheck {
            field: field.into(),
            expects_null: true,
        }
    }

    /// Creates an `IS NOT NULL` check.
    #[must_use]
    pub fn is_not_null(field: impl Into<String>) -> Self {
        Self::NullCheck {
            field: field.into(),
            expects_null: false,
        }
    }

    /// Creates an `IN` test.
    #[must_use]
    pub fn in_list(field: impl Into<String>, values: Vec<Literal>) -> Self {
        Self::Membership {
            field: field.into(),
            negated: false,
            values,
        }
    }

    /// Creates a `NOT IN` test.
    #[must_use]
    pub fn not_in_list(field: impl Into<String>, values: Vec<Literal>) -> Self {
        Self::Membership {
            field: field.into(),
            negated: true,
            values,
        }
    }

    /// Creates a group.
    #[must_use]
    pub const fn group(body: ConditionChain, negated: bool) -> Self {
        Self::Group { body, negated }
    }

    /// Returns the field a leaf tests, or `None` for groups.
    #[must_use]
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Comparison { field, .. }
            | Self::NullCheck { field, .. }
            | Self::Membership { field, .. } => Some(field),
            Self::Group { .. } => None,
        }
    }

    /// Returns the operator a leaf applies, or `None` for groups.
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        match self {
            Self::Comparison { operator, .. } => Some(*operator),
            Self::NullCheck { expects_null: true, .. } => Some(Operator::IsNull),
            Self::NullCheck { expects_null: false, .. } => Some(Operator::IsNotNull),
            Self::Membership { negated: false, .. } => Some(Operator::In),
            Self::Membership { negated: true, .. } => Some(Operator::NotIn),
            Self::Group { .. } => None,
        }
    }

    /// Returns true for leaf conditions.
    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        !matches!(self, Self::Group { .. })
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Comparison {
                field,
                operator,
                value,
            } => write!(f, "{field} {operator} {value}"),
            Self::NullCheck {
                field,
                expects_null,
            } => {
                if *expects_null {
                    write!(f, "{field} IS NULL")
                } else {
                    write!(f, "{field} IS NOT NULL")
                }
            }
            Self::Membership {
                field,
                negated,
                values,
            } => {
                let op = if *negated { "NOT IN" } else { "IN" };
                // Reuse the list rendering of `Literal::List`.
                let list = Literal::List(values.clone());
                write!(f, "{field} {op} {list}")
            }
            Self::Group { body, negated } => {
                if *negated {
                    f.write_str("NOT ")?;
                }
                write!(f, "({body})")
            }
        }
    }
}

/// One element of a [`ConditionChain`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainLink {
    /// How this link joins the one before it. `None` for the first link.
    pub conjunction: Option<Conjunction>,
    /// Whether a `NOT` prefix applies to this leaf.
    pub negated: bool,
    /// The condition itself.
    pub condition: Condition,
}

impl ChainLink {
    /// Creates a link.
    #[must_use]
    pub const fn new(conjunction: Option<Conjunction>, negated: bool, condition: Condition) -> Self {
        Self {
            conjunction,
            negated,
            condition,
        }
    }
}

impl fmt::Display for ChainLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negated {
            f.write_str("NOT ")?;
        }
        write!(f, "{}", self.condition)
    }
}

/// Conditions joined by AND/OR, evaluated strictly left to right.
///
/// There is no precedence between AND and OR: `a AND b OR c` means
/// `(a AND b) OR c` and `a OR b AND c` means `(a OR b) AND c`. Only
/// parentheses change the order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConditionChain {
    links: Vec<ChainLink>,
}

impl ConditionChain {
    /// Creates an empty chain.
    #[must_use]
    pub const fn new() -> Self {
        Self { links: Vec::new() }
    }

    /// Creates a chain holding one condition.
    #[must_use]
    pub fn single(condition: Condition) -> Self {
        let mut chain = Self::new();
        chain.links.push(ChainLink::new(None, false, condition));
        chain
    }

    /// Appends a link. The conjunction is dropped for the first link.
    pub fn push(&mut self, conjunction: Conjunction, negated: bool, condition: Condition) {
        let conjunction = if self.links.is_empty() {
            None
        } else {
            Some(conjunction)
        };
        self.links.push(ChainLink::new(conjunction, negated, condition));
    }

    /// Appends `condition` joined with AND.
    #[must_use]
    pub fn and(mut self, condition: Condition) -> Self {
        self.push(Conjunction::And, false, condition);
        self
    }

    /// Appends `condition` joined with OR.
    #[must_use]
    pub fn or(mut self, condition: Condition) -> Self {
        self.push(Conjunction::Or, false, condition);
        self
    }

    /// Appends `NOT condition` joined with `conjunction`.
    #[must_use]
    pub fn not(mut self, conjunction: Conjunction, condition: Condition) -> Self {
        self.push(conjunction, true, condition);
        self
    }

    /// Returns the links in input order.
    #[must_use]
    pub fn links(&self) -> &[ChainLink] {
        &self.links
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ChainLink> {
        self.links.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Returns the deepest group nesting in this chain (0 without groups).
    #[must_use]
    pub fn depth(&self) -> usize {
        self.links
            .iter()
            .map(|link| match &link.condition {
                Condition::Group { body, .. } => 1 + body.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

impl<'a> IntoIterator for &'a ConditionChain {
    type Item = &'a ChainLink;
    type IntoIter = core::slice::Iter<'a, ChainLink>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

impl fmt::Display for ConditionChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for link in &self.links {
            if let Some(conjunction) = link.conjunction {
                write!(f, " {conjunction} ")?;
            }
            write!(f, "{link}")?;
        }
        Ok(())
    }
}
