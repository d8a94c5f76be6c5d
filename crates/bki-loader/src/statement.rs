//! Client-side SQL text for the INSERT based strategies.
//!
//! Values are embedded, not bound: [`values`] single-quotes each field and
//! joins them with commas, escaping nothing. A field containing `'` breaks
//! the statement (or worse, changes it). Swapping in parameter binding
//! only touches [`values`] and its two callers.
use bki_pg::Schema;
use csv::StringRecord;

/// Renders one record as the body of a VALUES tuple.
pub fn values(row: &StringRecord) -> String {
    row.iter()
        .map(|field| format!("'{}'", field))
        .collect::<Vec<_>>()
        .join(",")
}

/// One `INSERT ... VALUES (...);` per record, concatenated.
pub fn singles(schema: &dyn Schema, rows: &[StringRecord]) -> String {
    let ref table = schema.qualified();
    rows.iter()
        .map(|row| format!("INSERT INTO {} VALUES ({});", table, values(row)))
        .collect()
}

/// One multi-row `INSERT` per full group of `size` records.
///
/// A group is only emitted once it is full, so the trailing
/// `rows.len() % size` records never make it into the text.
pub fn batches(schema: &dyn Schema, rows: &[StringRecord], size: usize) -> String {
    let ref table = schema.qualified();
    rows.chunks_exact(size)
        .map(|group| {
            group
                .iter()
                .map(|row| format!("({})", values(row)))
                .collect::<Vec<_>>()
                .join(",")
        })
        .map(|tuples| format!("INSERT INTO {} VALUES {};", table, tuples))
        .collect()
}
