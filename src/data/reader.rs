//! CSV series reader.

use super::Series;
use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reader for header-less series CSV files.
///
/// Each record is `name,v1,v2,...`. Records may have different lengths and
/// blank lines are skipped.
#[derive(Debug)]
pub struct CsvReader;

impl CsvReader {
    /// Read every series from a file.
    pub fn read_file(path: &Path) -> Result<Vec<Series>> {
        let file = File::open(path).map_err(|e| Error::file_open(path.to_path_buf(), e))?;
        Self::read_from(file)
    }

    /// Read every series from any reader.
    ///
    /// The whole input is parsed before anything is returned; the first bad
    /// cell aborts the read.
    pub fn read_from<R: Read>(input: R) -> Result<Vec<Series>> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(input);

        let mut series: Vec<Series> = Vec::new();
        for record in rdr.records() {
            let record = record?;

            let mut fields = record.iter();
            let Some(name) = fields.next() else {
                continue;
            };
            if name.is_empty() && record.len() == 1 {
                continue;
            }
            // 1-based record number; skipped blank records are not counted
            let row = series.len() + 1;

            let values = fields
                .enumerate()
                .map(|(col, cell)| {
                    cell.parse::<i64>()
                        .map_err(|_| Error::parse(row, col + 2, cell))
                })
                .collect::<Result<Vec<i64>>>()?;

            series.push(Series::new(name, values));
        }

        tracing::debug!("Parsed {} series", series.len());
        Ok(series)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_ragged_rows() {
        let input = "Temperature,20,21,23,22,19\nPressure,101,102,101,100\n";
        let series = CsvReader::read_from(input.as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].name(), "Temperature");
        assert_eq!(series[0].values(), &[20, 21, 23, 22, 19]);
        assert_eq!(series[1].values(), &[101, 102, 101, 100]);
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let series = CsvReader::read_from(" a , 1, 2 ,3\n".as_bytes()).unwrap();
        assert_eq!(series[0].name(), "a");
        assert_eq!(series[0].values(), &[1, 2, 3]);
    }

    #[test]
    fn test_name_only_row_has_no_values() {
        let series = CsvReader::read_from("empty\nfull,1\n".as_bytes()).unwrap();
        assert_eq!(series.len(), 2);
        assert!(series[0].is_empty());
    }

    #[test]
    fn test_bad_cell_reports_position() {
        let err = CsvReader::read_from("a,1,2\nb,3,x\n".as_bytes()).unwrap_err();
        match err {
            Error::Parse { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, 3);
                assert_eq!(value, "x");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_row_counts_records_not_lines() {
        let input = "a,1\n\n  \n\"multi\nline\",2\nb,oops\n";
        let err = CsvReader::read_from(input.as_bytes()).unwrap_err();
        match err {
            Error::Parse { row, column, value } => {
                assert_eq!(row, 3);
                assert_eq!(column, 2);
                assert_eq!(value, "oops");
            },
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_float_is_rejected() {
        assert!(matches!(
            CsvReader::read_from("a,1.5\n".as_bytes()),
            Err(Error::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CsvReader::read_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(matches!(err, Error::FileOpen { .. }));
    }
}
