//! PostgreSQL connectivity and the fixed music-store schema.
//!
//! ## Connectivity
//!
//! - [`db()`] — Opens the single connection a load runs on
//!
//! ## Schema
//!
//! - [`Schema`] — Table naming and statement generation
//! - [`Table`] — The eleven known tables and their DDL
//! - [`Replica`] — Staging twin of a table for select-copy loads
//! - [`Streamable`] — Text COPY upload of pre-chunked rows
//!
//! ## Table Names
//!
//! Constants for every table the loader knows how to create.
mod replica;
mod schema;
mod stream;
mod table;

pub use replica::*;
pub use schema::*;
pub use stream::*;
pub use table::*;

use tokio_postgres::Client;
use tokio_postgres::Config;
use tokio_postgres::NoTls;

/// Establishes a database connection.
///
/// The connection driver is spawned onto the current runtime and lives
/// until the returned [`Client`] is dropped.
pub async fn db(config: &Config) -> Result<Client, PgErr> {
    log::info!(
        "connecting to database {:?} on {:?}",
        config.get_dbname().unwrap_or_default(),
        config.get_hosts()
    );
    let (client, connection) = config.connect(NoTls).await?;
    tokio::spawn(async move {
        if let Err(e) = connection.await {
            log::error!("database connection closed: {}", e);
        }
    });
    client
        .batch_execute("SET client_min_messages TO WARNING")
        .await?;
    Ok(client)
}

/// PostgreSQL error type alias.
pub type PgErr = tokio_postgres::Error;

/// Schema every table lives in.
#[rustfmt::skip]
pub const SCHEMA:         &str = "public";
/// Suffix naming the staging twin of a table.
#[rustfmt::skip]
pub const REPLICA:        &str = "Replica";

/// Albums and the artist that released them.
#[rustfmt::skip]
pub const ALBUM:          &str = "Album";
/// Recording artists.
#[rustfmt::skip]
pub const ARTIST:         &str = "Artist";
/// Store customers.
#[rustfmt::skip]
pub const CUSTOMER:       &str = "Customer";
/// Store employees and their reporting line.
#[rustfmt::skip]
pub const EMPLOYEE:       &str = "Employee";
/// Music genres.
#[rustfmt::skip]
pub const GENRE:          &str = "Genre";
/// Invoice headers.
#[rustfmt::skip]
pub const INVOICE:        &str = "Invoice";
/// Invoice line items.
#[rustfmt::skip]
pub const INVOICE_LINE:   &str = "InvoiceLine";
/// Media encodings.
#[rustfmt::skip]
pub const MEDIA_TYPE:     &str = "MediaType";
/// Playlists.
#[rustfmt::skip]
pub const PLAYLIST:       &str = "Playlist";
/// Playlist membership.
#[rustfmt::skip]
pub const PLAYLIST_TRACK: &str = "PlaylistTrack";
/// Tracks.
#[rustfmt::skip]
pub const TRACK:          &str = "Track";
