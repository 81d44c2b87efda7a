//! Lookup strategy and scan range

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// How an invitation row is located in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupStrategy {
    /// Exact primary-key get
    #[default]
    PointGet,
    /// Range scan over `[code, code + NUL)`, for stores without a point get
    RangeScan,
}

impl LookupStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PointGet => "point",
            Self::RangeScan => "range",
        }
    }
}

impl fmt::Display for LookupStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error parsing a lookup strategy name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown lookup strategy: {0} (expected \"point\" or \"range\")")]
pub struct LookupStrategyParseError(pub String);

impl FromStr for LookupStrategy {
    type Err = LookupStrategyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "point" | "get" | "point_get" => Ok(Self::PointGet),
            "range" | "scan" | "range_scan" => Ok(Self::RangeScan),
            other => Err(LookupStrategyParseError(other.to_string())),
        }
    }
}

/// Half-open key range `[start, end)` that contains exactly one key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRange {
    pub start: String,
    pub end: String,
}

impl ScanRange {
    /// Range whose only member is `code`: `code + NUL` is its immediate successor
    pub fn for_code(code: &str) -> Self {
        let mut end = String::with_capacity(code.len() + 1);
        end.push_str(code);
        end.push('\0');
        Self {
            start: code.to_string(),
            end,
        }
    }

    /// Check whether a key falls inside the range (byte order)
    pub fn contains(&self, key: &str) -> bool {
        key.as_bytes() >= self.start.as_bytes() && key.as_bytes() < self.end.as_bytes()
    }
}
