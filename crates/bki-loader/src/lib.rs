//! Load orchestration for bulk-ingest.
//!
//! Turns command line arguments into a [`Request`], opens one connection,
//! and drives a single [`Operation`] through the [`Loader`].
//!
//! ## Operations
//!
//! - `Single_Inserts` — one INSERT per row, sent as one batch
//! - `SQL_Batch_Insert` — multi-row INSERTs of a fixed size
//! - `PostgreSQL_COPY` — text COPY straight into the table
//! - `INSERT_SELECT` — COPY into a replica, then INSERT ... SELECT
mod args;
mod error;
mod file;
mod loader;
mod operation;
mod statement;

pub use args::*;
pub use error::*;
pub use file::*;
pub use loader::*;
pub use operation::*;
pub use statement::*;

/// Runs one load end to end.
///
/// The table name is resolved before any connection is opened. The
/// connection is closed when the loader goes out of scope, whether the
/// load succeeded or not.
pub async fn load(args: Args) -> Result<(), LoadError> {
    let request = Request::try_from(args)?;
    let mut loader = Loader::connect(&request).await?;
    loader.run(&request.operation).await?;
    println!("Data loaded successfully!");
    Ok(())
}
