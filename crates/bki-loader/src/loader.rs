use crate::*;
use bki_core::Metrics;
use bki_core::timed;
use bki_database::*;
use bki_pg::*;
use std::path::Path;
use std::path::PathBuf;
use tokio_postgres::Client;

/// Owns the single connection of a run and drives one load through it.
///
/// Every run creates the target if needed and truncates it with cascade
/// before inserting anything, so a load always replaces. Only the
/// insertion phase is timed; it ends once the commit returns.
pub struct Loader {
    client: Client,
    table: Table,
    file: PathBuf,
}

impl Loader {
    pub fn new(client: Client, table: Table, file: impl Into<PathBuf>) -> Self {
        Self {
            client,
            table,
            file: file.into(),
        }
    }
    pub async fn connect(request: &Request) -> Result<Self, LoadError> {
        let client = bki_pg::db(&request.config)
            .await
            .map_err(LoadError::Connection)?;
        Ok(Self::new(client, request.table, request.file.clone()))
    }
    pub fn client(&self) -> &Client {
        &self.client
    }
    pub fn table(&self) -> Table {
        self.table
    }
    pub fn file(&self) -> &Path {
        &self.file
    }

    /// Prepares the target, then inserts with `operation`.
    ///
    /// Returns `None` for an unknown operation: the target is still
    /// created and truncated, but nothing is inserted.
    pub async fn run(&mut self, operation: &Operation) -> Result<Option<Metrics>, LoadError> {
        let table = self.table;
        let file = &self.file;
        log::info!("loading {} into {} ({})", file.display(), table, operation);
        let tx = self.client.transaction().await?;
        tx.reset(&table).await?;
        let metrics = match operation {
            Operation::Single => {
                let sql = statement::singles(&table, &records(file)?);
                let ((), metrics) = timed(async move {
                    tx.submit(&sql).await?;
                    tx.commit().await
                })
                .await?;
                metrics
            }
            Operation::Batch(size) => {
                let sql = statement::batches(&table, &records(file)?, *size);
                let ((), metrics) = timed(async move {
                    tx.submit(&sql).await?;
                    tx.commit().await
                })
                .await?;
                metrics
            }
            Operation::Copy => {
                let tuples = Tuples::open(file)?;
                let (copied, metrics) = timed(async move {
                    let n = tuples.stream(&tx, &table).await?;
                    tx.commit().await?;
                    Ok::<_, PgErr>(n)
                })
                .await?;
                log::debug!("copied {} rows into {}", copied, table.qualified());
                metrics
            }
            Operation::Select => {
                let replica = table.replica();
                let tuples = Tuples::open(file)?;
                tx.reset(&replica).await?;
                let staged = tuples.stream(&tx, &replica).await?;
                tx.commit().await?;
                log::info!("staged {} rows into {}", staged, replica.qualified());
                let tx = self.client.transaction().await?;
                let (selected, metrics) = timed(async move {
                    let n = tx.select(&table, &replica).await?;
                    tx.commit().await?;
                    Ok::<_, PgErr>(n)
                })
                .await?;
                log::debug!("selected {} rows into {}", selected, table.qualified());
                metrics
            }
            Operation::Unknown(name) => {
                log::warn!("{}", LoadError::Unsupported(name.clone()));
                println!("Unknown Operation!");
                tx.commit().await?;
                return Ok(None);
            }
        };
        metrics.print();
        let rows = self.client.count(&table).await?;
        log::info!("{} now holds {} rows", table.qualified(), rows);
        Ok(Some(metrics))
    }
}
