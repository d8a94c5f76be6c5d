use super::*;
use bytes::Bytes;
use futures::SinkExt;
use tokio_postgres::CopyInSink;
use tokio_postgres::Transaction;

/// Bulk upload via PostgreSQL's text COPY protocol.
///
/// The server parses every line itself, so rows never pass through SQL
/// text. Implementors only decide how the raw input is cut into chunks;
/// each chunk is sent as one CopyData message.
#[async_trait::async_trait]
pub trait Streamable: Sized + Send {
    /// Converts this input into the chunks to send, in order.
    fn chunks(self) -> impl Iterator<Item = Bytes> + Send;
    /// Streams every chunk into `schema` and returns the rows the server
    /// reports as copied.
    async fn stream(self, tx: &Transaction<'_>, schema: &dyn Schema) -> Result<u64, PgErr> {
        let ref sql = schema.copy();
        log::debug!("streaming into {}", schema.qualified());
        let sink: CopyInSink<Bytes> = tx.copy_in(sql.as_str()).await?;
        futures::pin_mut!(sink);
        for chunk in self.chunks() {
            sink.send(chunk).await?;
        }
        sink.finish().await
    }
}
