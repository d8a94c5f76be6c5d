//! Database operations a load is built from.
//!
//! Every trait is implemented for anything that can issue statements, so
//! the same calls work on a bare [`tokio_postgres::Client`] and inside a
//! [`tokio_postgres::Transaction`].
//!
//! ## Core Types
//!
//! - [`Sink`] — Submits generated statement text
//! - [`Stage`] — Prepares tables and copies between them server-side
//! - [`Check`] — Row counts and existence probes
mod check;
mod sink;
mod stage;

pub use check::*;
pub use sink::*;
pub use stage::*;
