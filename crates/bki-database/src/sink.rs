use bki_pg::*;
use tokio_postgres::GenericClient;

/// Sink submits client-built SQL text to the server.
/// The text may hold any number of statements; it goes out as one batch.
#[async_trait::async_trait]
pub trait Sink: Send + Sync {
    async fn submit(&self, sql: &str) -> Result<(), PgErr>;
}

#[async_trait::async_trait]
impl<C> Sink for C
where
    C: GenericClient + Send + Sync,
{
    async fn submit(&self, sql: &str) -> Result<(), PgErr> {
        if sql.is_empty() {
            log::warn!("no statements to submit");
            return Ok(());
        }
        log::debug!("submitting {} bytes of SQL", sql.len());
        self.batch_execute(sql).await
    }
}
