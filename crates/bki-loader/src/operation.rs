//! Insert strategy selection from the command line.
use crate::*;

#[rustfmt::skip]
pub const SINGLE: &str = "Single_Inserts";
#[rustfmt::skip]
pub const BATCH:  &str = "SQL_Batch_Insert";
#[rustfmt::skip]
pub const COPY:   &str = "PostgreSQL_COPY";
#[rustfmt::skip]
pub const SELECT: &str = "INSERT_SELECT";

/// Insert strategy parsed from the `insert_type` argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// One INSERT statement per row, all submitted as one batch.
    Single,
    /// Multi-row INSERT statements holding this many rows each.
    Batch(usize),
    /// Text COPY straight into the target.
    Copy,
    /// COPY into the replica, then INSERT ... SELECT into the target.
    Select,
    /// Anything else. Reported, never executed.
    Unknown(String),
}

impl Operation {
    /// Resolves the strategy name. The batch size only matters for
    /// [`BATCH`]; its sign is ignored, so the `-1` default groups rows
    /// one at a time.
    pub fn parse(name: &str, batch: i64) -> Result<Self, LoadError> {
        match name {
            SINGLE => Ok(Self::Single),
            BATCH => match batch.unsigned_abs() {
                0 => Err(LoadError::BatchSize),
                n => Ok(Self::Batch(n as usize)),
            },
            COPY => Ok(Self::Copy),
            SELECT => Ok(Self::Select),
            other => Ok(Self::Unknown(other.to_string())),
        }
    }
    pub fn name(&self) -> &str {
        match self {
            Self::Single => SINGLE,
            Self::Batch(_) => BATCH,
            Self::Copy => COPY,
            Self::Select => SELECT,
            Self::Unknown(name) => name,
        }
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Batch(n) => write!(f, "{} of {}", self.name(), n),
            _ => write!(f, "{}", self.name()),
        }
    }
}
