use super::*;

/// Staging twin of a [`Table`], named `<Table>Replica`.
///
/// Created with `LIKE` so its column list always matches the target,
/// which keeps `INSERT INTO <table> SELECT * FROM <replica>` positional.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Replica(Table);

impl Replica {
    pub fn table(&self) -> Table {
        self.0
    }
}

impl From<Table> for Replica {
    fn from(table: Table) -> Self {
        Self(table)
    }
}

impl Schema for Replica {
    fn name(&self) -> String {
        format!("{}{}", self.0, REPLICA)
    }
    fn creates(&self) -> String {
        format!(
            "CREATE TABLE IF NOT EXISTS {} (LIKE {})",
            self.qualified(),
            self.0.qualified()
        )
    }
}
