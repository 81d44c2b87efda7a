//! Validated table identifier
//!
//! The table name comes from configuration and is spliced into SQL text, so it
//! is restricted to plain identifiers (optionally schema-qualified).

use std::fmt;

use invite_core::DomainError;

/// PostgreSQL's identifier length limit (NAMEDATALEN - 1)
const MAX_IDENT_LEN: usize = 63;

/// A table name safe to interpolate into SQL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableName(String);

impl TableName {
    /// Parse `table` or `schema.table`
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        let mut parts = raw.split('.');
        let valid = match (parts.next(), parts.next(), parts.next()) {
            (Some(table), None, None) => is_identifier(table),
            (Some(schema), Some(table), None) => is_identifier(schema) && is_identifier(table),
            _ => false,
        };

        if valid {
            Ok(Self(raw.to_string()))
        } else {
            Err(DomainError::InvalidTableName(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    s.len() <= MAX_IDENT_LEN
        && (first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
