//! Value objects - immutable types that represent domain concepts

mod lookup;
mod row_key;

pub use lookup::{LookupStrategy, LookupStrategyParseError, ScanRange};
pub use row_key::RowKey;
