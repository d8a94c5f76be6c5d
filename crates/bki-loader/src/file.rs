use crate::*;
use bki_core::NUM_TUPLES;
use bytes::Bytes;
use csv::StringRecord;
use std::fs::File;
use std::io::BufRead;
use std::io::BufReader;
use std::path::Path;

fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads every record after the header line.
///
/// Fields stay text and their count is never checked against the target
/// table; a mismatch surfaces as a statement error on the server.
pub fn records(path: &Path) -> Result<Vec<StringRecord>, LoadError> {
    let rows = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(true)
        .flexible(true)
        .from_reader(open(path)?)
        .into_records()
        .collect::<Result<Vec<StringRecord>, csv::Error>>()?;
    log::debug!("read {} records from {}", rows.len(), path.display());
    Ok(rows)
}

/// Raw input lines for COPY, header removed, sent [`NUM_TUPLES`] at a time.
///
/// Lines are passed through untouched apart from newline normalization,
/// so the server's text COPY parser sees exactly what is in the file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tuples {
    lines: Vec<String>,
    size: usize,
}

impl Tuples {
    pub fn open(path: &Path) -> Result<Self, LoadError> {
        let lines = BufReader::new(open(path)?)
            .lines()
            .skip(1)
            .collect::<Result<Vec<String>, std::io::Error>>()
            .map_err(|source| LoadError::File {
                path: path.to_path_buf(),
                source,
            })?;
        log::debug!("read {} lines from {}", lines.len(), path.display());
        Ok(Self::from(lines))
    }
    pub fn len(&self) -> usize {
        self.lines.len()
    }
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl From<Vec<String>> for Tuples {
    fn from(lines: Vec<String>) -> Self {
        Self {
            lines,
            size: NUM_TUPLES,
        }
    }
}

#[async_trait::async_trait]
impl bki_pg::Streamable for Tuples {
    fn chunks(self) -> impl Iterator<Item = Bytes> + Send {
        let size = self.size;
        let mut lines = self.lines.into_iter();
        std::iter::from_fn(move || {
            let chunk = lines
                .by_ref()
                .take(size)
                .fold(String::new(), |mut chunk, line| {
                    chunk.push_str(&line);
                    chunk.push('\n');
                    chunk
                });
            (!chunk.is_empty()).then(|| Bytes::from(chunk))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bki_pg::Streamable;
    use std::io::Write;

    fn csv(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn records_skip_header() {
        let file = csv("GenreId,Name\n1,Rock\n2,Jazz\n");
        let rows = records(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], StringRecord::from(vec!["1", "Rock"]));
        assert_eq!(rows[1], StringRecord::from(vec!["2", "Jazz"]));
    }

    #[test]
    fn records_tolerate_ragged_rows() {
        let file = csv("GenreId,Name\n1,Rock,extra\n2\n");
        let rows = records(file.path()).unwrap();
        assert_eq!(rows[0].len(), 3);
        assert_eq!(rows[1].len(), 1);
    }

    #[test]
    fn records_keep_quoted_commas() {
        let file = csv("ArtistId,Name\n1,\"Earth, Wind & Fire\"\n");
        let rows = records(file.path()).unwrap();
        assert_eq!(&rows[0][1], "Earth, Wind & Fire");
    }

    #[test]
    fn header_only_file_has_no_records() {
        let file = csv("GenreId,Name\n");
        assert!(records(file.path()).unwrap().is_empty());
        assert!(Tuples::open(file.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_file() {
        let path = Path::new("/definitely/not/here.csv");
        assert!(matches!(records(path), Err(LoadError::File { .. })));
        assert!(matches!(Tuples::open(path), Err(LoadError::File { .. })));
    }

    #[test]
    fn tuples_normalize_newlines() {
        let file = csv("GenreId,Name\r\n1,Rock\r\n2,Jazz");
        let tuples = Tuples::open(file.path()).unwrap();
        assert_eq!(tuples.len(), 2);
        let chunks = tuples.chunks().collect::<Vec<_>>();
        assert_eq!(chunks, vec![Bytes::from("1,Rock\n2,Jazz\n")]);
    }

    #[test]
    fn tuples_chunk_by_line_count() {
        let lines = (0..NUM_TUPLES * 2 + 3)
            .map(|i| format!("{},x", i))
            .collect::<Vec<_>>();
        let chunks = Tuples::from(lines).chunks().collect::<Vec<_>>();
        assert_eq!(chunks.len(), 3);
        assert_eq!(
            chunks[2],
            Bytes::from(format!(
                "{},x\n{},x\n{},x\n",
                NUM_TUPLES * 2,
                NUM_TUPLES * 2 + 1,
                NUM_TUPLES * 2 + 2
            ))
        );
        let lines = chunks
            .iter()
            .map(|c| c.iter().filter(|b| **b == b'\n').count())
            .collect::<Vec<_>>();
        assert_eq!(lines, vec![NUM_TUPLES, NUM_TUPLES, 3]);
    }
}
