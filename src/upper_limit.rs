//! Server-supplied upper bound on `max_rounds`.
//!
//! The server renders the bound into the page once; the helpers read it at
//! bind time. Parsing mirrors JavaScript's `parseInt(text, 10)`: leading
//! whitespace is skipped, an optional sign and the longest run of decimal
//! digits are taken, and anything else is NaN. A NaN bound is kept as-is and
//! never reported as an error.
//!
//! The bound is currently read but not consulted by either handler.

use crate::config::UPPER_LIMIT_BOOTSTRAP_KEY;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static LEADING_INTEGER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*([+-]?)([0-9]+)").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpperLimit {
    Value(i64),
    NotANumber,
}

impl UpperLimit {
    /// Parse like `parseInt(text, 10)`.
    ///
    /// Digit runs too long for an `i64` saturate instead of losing the sign.
    pub fn parse(text: &str) -> Self {
        let Some(captures) = LEADING_INTEGER_REGEX.captures(text) else {
            return UpperLimit::NotANumber;
        };
        let negative = &captures[1] == "-";
        let digits = &captures[2];

        let magnitude = digits.parse::<i64>().ok();
        let value = match (magnitude, negative) {
            (Some(m), false) => m,
            (Some(m), true) => -m,
            (None, false) => i64::MAX,
            (None, true) => i64::MIN,
        };
        UpperLimit::Value(value)
    }

    /// Read the bound from an optional attribute value. A missing attribute
    /// behaves like an empty substitution.
    pub fn from_attribute(value: Option<&str>) -> Self {
        match value {
            Some(text) => Self::parse(text),
            None => {
                debug!("Upper limit attribute missing, treating as NaN");
                UpperLimit::NotANumber
            }
        }
    }

    /// Read the bound from a JSON bootstrap payload such as
    /// `{"upper_limit_on_max_rounds": 100}`. Strings go through [`Self::parse`].
    pub fn from_bootstrap_json(payload: &str) -> Self {
        let parsed: serde_json::Value = match serde_json::from_str(payload) {
            Ok(v) => v,
            Err(e) => {
                warn!("Bootstrap payload is not valid JSON: {}", e);
                return UpperLimit::NotANumber;
            }
        };

        match parsed.get(UPPER_LIMIT_BOOTSTRAP_KEY) {
            Some(serde_json::Value::Number(n)) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => UpperLimit::Value(i),
                (None, Some(f)) if f.is_finite() => UpperLimit::Value(f.trunc() as i64),
                _ => UpperLimit::NotANumber,
            },
            Some(serde_json::Value::String(s)) => Self::parse(s),
            _ => UpperLimit::NotANumber,
        }
    }

    pub fn value(&self) -> Option<i64> {
        match self {
            UpperLimit::Value(v) => Some(*v),
            UpperLimit::NotANumber => None,
        }
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, UpperLimit::NotANumber)
    }
}

impl fmt::Display for UpperLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpperLimit::Value(v) => write!(f, "{}", v),
            UpperLimit::NotANumber => write!(f, "NaN"),
        }
    }
}
