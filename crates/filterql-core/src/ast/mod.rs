//! Parsed structures handed to backend translators.

mod clause;
mod condition;
mod literal;

pub use clause::{ClauseSet, OrderBy, OrderDirection};
pub use condition::{ChainLink, Condition, ConditionChain, Conjunction, Operator};
pub use literal::{InvalidTimestamp, Literal, Timestamp, MAX_FRACTION_DIGITS};
