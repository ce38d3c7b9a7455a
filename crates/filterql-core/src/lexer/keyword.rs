//! Keywords of the filter grammar.

use core::fmt;

/// A keyword of the filter grammar.
///
/// Keywords are matched case-sensitively. Multi-word keywords such as
/// `IS NOT NULL` accept any run of whitespace between their words.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    // Clause keywords
    Select,
    Distinct,
    Where,
    GroupBy,
    OrderBy,
    Offset,
    Limit,
    Asc,
    Desc,

    // Conjunctions
    And,
    Or,

    // Negation and leaf operators
    Not,
    Like,
    NotLike,
    In,
    NotIn,
    IsNull,
    IsNotNull,

    // Literal prefixes and values
    Date,
    Timestamp,
    True,
    False,
}

impl Keyword {
    /// Every keyword.
    pub const ALL: [Self; 22] = [
        Self::Select,
        Self::Distinct,
        Self::Where,
        Self::GroupBy,
        Self::OrderBy,
        Self::Offset,
        Self::Limit,
        Self::Asc,
        Self::Desc,
        Self::And,
        Self::Or,
        Self::Not,
        Self::Like,
        Self::NotLike,
        Self::In,
        Self::NotIn,
        Self::IsNull,
        Self::IsNotNull,
        Self::Date,
        Self::Timestamp,
        Self::True,
        Self::False,
    ];

    /// Returns the canonical text of the keyword.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "SELECT",
            Self::Distinct => "DISTINCT",
            Self::Where => "WHERE",
            Self::GroupBy => "GROUP BY",
            Self::OrderBy => "ORDER BY",
            Self::Offset => "OFFSET",
            Self::Limit => "LIMIT",
            Self::Asc => "ASC",
            Self::Desc => "DESC",
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Like => "LIKE",
            Self::NotLike => "NOT LIKE",
            Self::In => "IN",
            Self::NotIn => "NOT IN",
            Self::IsNull => "IS NULL",
            Self::IsNotNull => "IS NOT NULL",
            Self::Date => "DATE",
            Self::Timestamp => "TIMESTAMP",
            Self::True => "true",
            Self::False => "false",
        }
    }

    /// Returns the words making up the keyword.
    pub fn words(&self) -> impl Iterator<Item = &'static str> {
        self.as_str().split(' ')
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::{is_identifier_continue, is_identifier_start};

    #[test]
    fn test_multi_word_keywords() {
        assert_eq!(
            Keyword::IsNotNull.words().collect::<Vec<_>>(),
            vec!["IS", "NOT", "NULL"]
        );
        assert_eq!(Keyword::Where.words().count(), 1);
    }

    #[test]
    fn test_keyword_words_spell_identifiers() {
        // Keywords are not reserved, so every word must also scan as a field.
        for keyword in Keyword::ALL {
            for word in keyword.words() {
                let mut chars = word.chars();
                assert!(chars.next().is_some_and(is_identifier_start));
                assert!(chars.all(is_identifier_continue), "{keyword}");
            }
        }
    }
}
