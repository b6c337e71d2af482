//! Reading delimited records and writing result tables.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::Duration;

use crate::record::Record;

/// Read up to `limit` tab-delimited records from the file at `path`.
///
/// No header row is expected and records may have varying numbers of
/// fields.
pub fn read_records(path: impl AsRef<Path>, limit: usize) -> csv::Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;
    reader
        .records()
        .take(limit)
        .map(|row| Ok(row?.iter().collect()))
        .collect()
}

/// Write accepted records as a tab-separated table to the file at `path`.
///
/// `results` pairs each record with its 1-based line number in the input
/// file. The elapsed search time is appended as a trailer line.
pub fn write_results<'a>(
    path: impl AsRef<Path>,
    results: impl IntoIterator<Item = (usize, &'a Record)>,
    elapsed: Duration,
) -> io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    for (line, record) in results {
        writeln!(out, "{}\t{}", line, record.fields().join("\t"))?;
    }
    writeln!(out, "Search time: {} milliseconds", elapsed.as_millis())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn write_input(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn read_tab_delimited_records() {
        let input = write_input("2024-01-05\tAda Lovelace\tProgramming\n2024-01-06\tAlan Turing\tLogic\n");
        let records = read_records(input.path(), 10).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].field(1), Some("Ada Lovelace"));
        assert_eq!(records[1].field(2), Some("Logic"));
    }

    #[test]
    fn limit_truncates_input() {
        let input = write_input("a\nb\nc\nd\n");
        let records = read_records(input.path(), 2).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn ragged_records_are_allowed() {
        let input = write_input("one\ta\tb\ntwo\n");
        let records = read_records(input.path(), 10).unwrap();
        assert_eq!(records[0].len(), 3);
        assert_eq!(records[1].len(), 1);
        assert_eq!(records[1].field(1), None);
    }

    #[test]
    fn results_table_with_trailer() {
        let out = tempfile::NamedTempFile::new().unwrap();
        let records = [
            Record::new(vec!["a".into(), "b".into()]),
            Record::new(vec!["c".into()]),
        ];
        let results = [(1, &records[0]), (4, &records[1])];
        write_results(out.path(), results, Duration::from_millis(12)).unwrap();

        let written = fs::read_to_string(out.path()).unwrap();
        assert_eq!(written, "1\ta\tb\n4\tc\nSearch time: 12 milliseconds\n");
    }
}
