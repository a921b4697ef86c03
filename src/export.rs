use std::io;
use std::path::Path;

use serde::Serialize;

use crate::catalog::Entry;
use crate::render::{column_digits, notation};

/// One CSV row.
#[derive(Debug, Serialize)]
pub struct SolutionRecord {
    #[serde(rename = "Solution #")]
    pub number: usize,
    #[serde(rename = "Configuration")]
    pub configuration: String,
    #[serde(rename = "Columns")]
    pub columns: String,
    #[serde(rename = "Canonical")]
    pub canonical: String,
    #[serde(rename = "Class")]
    pub class: usize,
    #[serde(rename = "Representative")]
    pub representative: bool,
}

impl SolutionRecord {
    /// `number` is 1-based.
    pub fn new(number: usize, entry: &Entry) -> Self {
        Self {
            number,
            configuration: notation(entry.board),
            columns: column_digits(entry.board).unwrap_or_default(),
            canonical: format!("{:#018x}", entry.canonical.0),
            class: entry.class + 1,
            representative: entry.representative,
        }
    }
}

/// Writes a header and one numbered record per entry.
pub fn write_csv<'a, W, I>(writer: W, entries: I) -> csv::Result<()>
where
    W: io::Write,
    I: IntoIterator<Item = &'a Entry>,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for (i, entry) in entries.into_iter().enumerate() {
        wtr.serialize(SolutionRecord::new(i + 1, entry))?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn to_csv_string<'a, I>(entries: I) -> csv::Result<String>
where
    I: IntoIterator<Item = &'a Entry>,
{
    let mut buffer = Vec::new();
    write_csv(&mut buffer, entries)?;
    String::from_utf8(buffer)
        .map_err(|err| csv::Error::from(io::Error::new(io::ErrorKind::InvalidData, err)))
}

pub fn export_to_path<'a, P, I>(path: P, entries: I) -> csv::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a Entry>,
{
    let file = std::fs::File::create(path)?;
    write_csv(file, entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::catalog::SolutionCatalog;
    use crate::search::SearchStats;
    use std::fs;
    use tempfile::NamedTempFile;

    #[test]
    fn test_csv_header_and_rows() {
        let board = Board::from_columns([0, 4, 7, 5, 2, 6, 1, 3]);
        let catalog = SolutionCatalog::from_solutions(&[board], SearchStats::default());
        let csv = to_csv_string(catalog.entries()).unwrap();
        let mut lines = csv.lines();
        assert_eq!(
            lines.next(),
            Some("Solution #,Configuration,Columns,Canonical,Class,Representative")
        );
        let row = lines.next().unwrap();
        assert!(row.starts_with("1,\"a1, e2, h3, f4, c5, g6, b7, d8\",04752613,0x"));
        assert!(row.ends_with(",1,true"));
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn test_canonical_column_is_fixed_width_hex() {
        let catalog = SolutionCatalog::build();
        let record = SolutionRecord::new(1, &catalog.entries()[0]);
        assert_eq!(record.canonical.len(), 18);
        assert!(record.canonical.starts_with("0x"));
    }

    #[test]
    fn test_unique_export_has_twelve_rows() {
        let catalog = SolutionCatalog::build();
        let csv = to_csv_string(catalog.representatives()).unwrap();
        assert_eq!(csv.lines().count(), 13);
    }

    #[test]
    fn test_export_to_path() {
        let catalog = SolutionCatalog::build();
        let file = NamedTempFile::new().unwrap();
        export_to_path(file.path(), catalog.entries()).unwrap();
        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written.lines().count(), 93);
        assert!(written.starts_with("Solution #,Configuration,"));
    }

    #[test]
    fn test_export_to_path_overwrites_existing_file() {
        let catalog = SolutionCatalog::build();
        let file = NamedTempFile::new().unwrap();
        fs::write(file.path(), "stale\nstale\n").unwrap();
        export_to_path(file.path(), catalog.representatives()).unwrap();
        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written.lines().count(), 13);
        assert!(!written.contains("stale"));
    }
}
