use bki_pg::Lookup;
use bki_pg::PgErr;
use std::path::PathBuf;

/// Everything that can end a load early.
///
/// None of these are retried. [`LoadError::Unsupported`] is only ever
/// reported; an unknown insert type ends the run without inserting but
/// is not a failure.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not connect to database")]
    Connection(#[source] PgErr),
    #[error(transparent)]
    Lookup(#[from] Lookup),
    #[error("statement failed")]
    Sql(#[from] PgErr),
    #[error("could not read {}", .path.display())]
    File {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed csv input")]
    Csv(#[from] csv::Error),
    #[error("batch size must be non-zero")]
    BatchSize,
    #[error("unknown insert type {0:?}")]
    Unsupported(String),
}
