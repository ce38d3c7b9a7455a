//! Literal values.

use core::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

/// Highest number of fractional second digits a timestamp may declare.
pub const MAX_FRACTION_DIGITS: u8 = 6;

/// A timestamp literal with its declared sub-second precision.
///
/// Deserialization goes through the same checks as [`Timestamp::from_parts`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "TimestampRepr")]
pub struct Timestamp {
    datetime: NaiveDateTime,
    precision: u8,
}

/// Error for a serialized timestamp whose precision is out of range or
/// whose fraction does not fit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("timestamp fraction does not fit precision {precision}")]
pub struct InvalidTimestamp {
    /// The declared precision.
    pub precision: u8,
}

/// Unchecked serialized form of [`Timestamp`].
#[derive(Deserialize)]
struct TimestampRepr {
    datetime: NaiveDateTime,
    precision: u8,
}

impl TryFrom<TimestampRepr> for Timestamp {
    type Error = InvalidTimestamp;

    fn try_from(repr: TimestampRepr) -> Result<Self, Self::Error> {
        let dt = repr.datetime;
        let nanos = dt.nanosecond();
        if nanos % 1_000 != 0 {
            return Err(InvalidTimestamp {
                precision: repr.precision,
            });
        }
        Self::from_parts(
            dt.year(),
            dt.month(),
            dt.day(),
            dt.hour(),
            dt.minute(),
            dt.second(),
            nanos / 1_000,
            repr.precision,
        )
        .ok_or(InvalidTimestamp {
            precision: repr.precision,
        })
    }
}

impl Timestamp {
    /// Creates a timestamp from its components.
    ///
    /// `fraction_micros` is the sub-second part in microseconds and
    /// `precision` the number of fractional digits written (0 when absent).
    /// Returns `None` if the components do not form a valid calendar
    /// timestamp, the precision is out of range, or the fraction has more
    /// digits than the precision declares.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        fraction_micros: u32,
        precision: u8,
    ) -> Option<Self> {
        if precision > MAX_FRACTION_DIGITS
            || fraction_micros % 10_u32.pow(u32::from(MAX_FRACTION_DIGITS - precision)) != 0
        {
            return None;
        }
        let date = NaiveDate::from_ymd_opt(year, month, day)?;
        // `from_hms_micro_opt` accepts leap seconds through the micros field.
        if fraction_micros >= 1_000_000 {
            return None;
        }
        let time = NaiveTime::from_hms_micro_opt(hour, minute, second, fraction_micros)?;
        Some(Self {
            datetime: date.and_time(time),
            precision,
        })
    }

    /// Creates a timestamp without a fractional part.
    #[must_use]
    pub const fn from_datetime(datetime: NaiveDateTime) -> Self {
        Self {
            datetime,
            precision: 0,
        }
    }

    /// Returns the underlying date and time.
    #[must_use]
    pub const fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }

    /// Returns the number of fractional digits written in the literal.
    #[must_use]
    pub const fn precision(&self) -> u8 {
        self.precision
    }

    #[must_use]
    pub fn year(&self) -> i32 {
        self.datetime.year()
    }

    #[must_use]
    pub fn month(&self) -> u32 {
        self.datetime.month()
    }

    #[must_use]
    pub fn day(&self) -> u32 {
        self.datetime.day()
    }

    #[must_use]
    pub fn hour(&self) -> u32 {
        self.datetime.hour()
    }

    #[must_use]
    pub fn minute(&self) -> u32 {
        self.datetime.minute()
    }

    #[must_use]
    pub fn second(&self) -> u32 {
        self.datetime.second()
    }

    /// Returns the sub-second part in microseconds.
    #[must_use]
    pub fn fraction_micros(&self) -> u32 {
        self.datetime.nanosecond() / 1_000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.datetime.format("%Y-%m-%d %H:%M:%S"))?;
        if self.precision > 0 {
            let scale = 10_u32.pow(u32::from(MAX_FRACTION_DIGITS - self.precision));
            let width = usize::from(self.precision);
            write!(f, ".{:0width$}", self.fraction_micros() / scale)?;
        }
        Ok(())
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Literal {
    /// Signed integer literal.
    Integer(i64),
    /// Single-quoted string literal.
    Text(String),
    /// `true` or `false`.
    Boolean(bool),
    /// `DATE 'YYYY-MM-DD'`.
    Date(NaiveDate),
    /// `TIMESTAMP 'YYYY-MM-DD HH:MM:SS[.ffffff]'`.
    Timestamp(Timestamp),
    /// Parenthesized list used by membership tests.
    List(Vec<Literal>),
}

impl Literal {
    /// Creates a text literal.
    #[must_use]
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// Creates a date literal, or `None` if the date does not exist.
    #[must_use]
    pub fn date(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::Date)
    }

    /// Returns a short name of the literal's type.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "integer",
            Self::Text(_) => "text",
            Self::Boolean(_) => "boolean",
            Self::Date(_) => "date",
            Self::Timestamp(_) => "timestamp",
            Self::List(_) => "list",
        }
    }

    /// Returns true for the literal types allowed inside a list.
    #[must_use]
    pub const fn is_list_element(&self) -> bool {
        matches!(self, Self::Integer(_) | Self::Text(_))
    }
}

impl From<i64> for Literal {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for Literal {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl From<&str> for Literal {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Literal {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<NaiveDate> for Literal {
    fn from(value: NaiveDate) -> Self {
        Self::Date(value)
    }
}

impl From<Timestamp> for Literal {
    fn from(value: Timestamp) -> Self {
        Self::Timestamp(value)
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "'{s}'"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Date(d) => write!(f, "DATE '{}'", d.format("%Y-%m-%d")),
            Self::Timestamp(ts) => write!(f, "TIMESTAMP '{ts}'"),
            Self::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
