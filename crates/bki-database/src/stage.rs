use bki_pg::*;
use tokio_postgres::GenericClient;

/// Stage manages table lifecycle around a load.
#[async_trait::async_trait]
pub trait Stage: Send + Sync {
    /// Creates the table if absent, then empties it (cascading).
    async fn reset(&self, schema: &dyn Schema) -> Result<(), PgErr>;
    /// Copies every row of `from` into `into` without leaving the server.
    async fn select(&self, into: &dyn Schema, from: &dyn Schema) -> Result<u64, PgErr>;
}

#[async_trait::async_trait]
impl<C> Stage for C
where
    C: GenericClient + Send + Sync,
{
    async fn reset(&self, schema: &dyn Schema) -> Result<(), PgErr> {
        log::debug!("creating table ({})", schema.qualified());
        self.batch_execute(&schema.creates()).await?;
        log::debug!("truncating table ({})", schema.qualified());
        self.batch_execute(&schema.truncates()).await
    }
    async fn select(&self, into: &dyn Schema, from: &dyn Schema) -> Result<u64, PgErr> {
        let sql = format!(
            "INSERT INTO {t1} SELECT * FROM {t2}",
            t1 = into.qualified(),
            t2 = from.qualified()
        );
        self.execute(sql.as_str(), &[]).await
    }
}
