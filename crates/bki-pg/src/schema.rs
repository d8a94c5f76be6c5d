use super::*;

/// Naming and statement generation for a loadable table.
///
/// Implementors only describe where a table lives and how to create it;
/// every other statement the loader issues is derived from those two facts.
/// Nothing here performs I/O.
pub trait Schema: Send + Sync {
    /// Returns the bare table name.
    fn name(&self) -> String;
    /// Returns the idempotent `CREATE TABLE IF NOT EXISTS` statement.
    fn creates(&self) -> String;
    /// Returns the schema-qualified, quoted identifier.
    fn qualified(&self) -> String {
        format!("{}.\"{}\"", SCHEMA, self.name())
    }
    /// Returns the cascading `TRUNCATE TABLE` statement.
    fn truncates(&self) -> String {
        format!("TRUNCATE TABLE {} CASCADE", self.qualified())
    }
    /// Returns the text-format `COPY ... FROM STDIN` command.
    fn copy(&self) -> String {
        format!(
            "COPY {} FROM STDIN WITH (FORMAT text, DELIMITER ',')",
            self.qualified()
        )
    }
    /// Returns the row count query.
    fn counts(&self) -> String {
        format!("SELECT COUNT(*) FROM {}", self.qualified())
    }
}
