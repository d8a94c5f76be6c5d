use bki_pg::*;
use tokio_postgres::GenericClient;

/// Check defines read-only status queries against loaded tables.
#[async_trait::async_trait]
pub trait Check: Send + Sync {
    async fn count(&self, schema: &dyn Schema) -> Result<usize, PgErr>;
    async fn exists(&self, schema: &dyn Schema) -> Result<bool, PgErr>;
}

#[async_trait::async_trait]
impl<C> Check for C
where
    C: GenericClient + Send + Sync,
{
    async fn count(&self, schema: &dyn Schema) -> Result<usize, PgErr> {
        self.query_one(schema.counts().as_str(), &[])
            .await
            .map(|row| row.get::<_, i64>(0) as usize)
    }
    async fn exists(&self, schema: &dyn Schema) -> Result<bool, PgErr> {
        const SQL: &str = "SELECT EXISTS (
            SELECT 1 FROM pg_tables WHERE schemaname = $1 AND tablename = $2
        )";
        let ref name = schema.name();
        self.query_one(SQL, &[&SCHEMA, name])
            .await
            .map(|row| row.get::<_, bool>(0))
    }
}
