//! SELECT-style clause set types.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::ConditionChain;

/// Order direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderDirection {
    /// Ascending order.
    Asc,
    /// Descending order.
    Desc,
}

impl OrderDirection {
    /// Returns the keyword text.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The single ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    /// The field to order by.
    pub field: String,
    /// The direction; always written explicitly in the source.
    pub direction: OrderDirection,
}

impl OrderBy {
    /// Creates an ORDER BY entry.
    #[must_use]
    pub fn new(field: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }
}

/// The parsed clauses of a `SELECT ...` text.
///
/// Field names are passed through verbatim; checking them against a schema is
/// left to whoever translates the clause set into a backend query.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClauseSet {
    /// Selected fields, in input order.
    pub fields: Vec<String>,
    /// Whether DISTINCT was specified.
    pub distinct: bool,
    /// WHERE chain. `NOT` is recorded per link; there are no groups.
    pub where_clause: Option<ConditionChain>,
    /// GROUP BY fields, in input order.
    pub group_by: Vec<String>,
    /// ORDER BY entry.
    pub order_by: Option<OrderBy>,
    /// OFFSET value.
    pub offset: Option<u64>,
    /// LIMIT value.
    pub limit: Option<u64>,
}

impl fmt::Display for ClauseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        if self.distinct {
            f.write_str("DISTINCT ")?;
        }
        f.write_str(&self.fields.join(", "))?;
        if let Some(chain) = &self.where_clause {
            write!(f, " WHERE {chain}")?;
        }
        if !self.group_by.is_empty() {
            write!(f, " GROUP BY {}", self.group_by.join(", "))?;
        }
        if let Some(order_by) = &self.order_by {
            write!(f, " ORDER BY {} {}", order_by.field, order_by.direction)?;
        }
        if let Some(offset) = self.offset {
            write!(f, " OFFSET {offset}")?;
        }
        if let Some(limit) = self.limit {
            write!(f, " LIMIT {limit}")?;
        }
        Ok(())
    }
}
