//! CSV loading.
//!
//! [`load`] reads a whole file into a [`Dataset`]: the header list plus one
//! [`Row`] per data line. Loading is strict. A data line with the wrong
//! number of fields rejects the file, and the error names the line.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use csv::{ErrorKind, ReaderBuilder, StringRecord};
use csvsift_seeker::Seekable;
use tracing::debug;

use crate::error::{Error, Result};

/// One CSV data line: values in header order.
///
/// Rows from the same file share one header list.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    headers: Rc<[String]>,
    values: Vec<String>,
}

impl Row {
    /// Returns the value of `column`, or `None` if the header has no such
    /// column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.headers
            .iter()
            .position(|h| h == column)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }

    /// Iterates `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().map(String::as_str))
    }

    /// Returns the values in header order.
    pub fn values(&self) -> &[String] {
        &self.values
    }
}

impl Seekable for Row {
    fn seeker_field(&self, column: &str) -> Option<&str> {
        self.get(column)
    }
}

/// A loaded CSV file.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    headers: Rc<[String]>,
    rows: Vec<Row>,
}

impl Dataset {
    /// Builds a dataset from a header and rows of the same width.
    ///
    /// Callers check widths; the loader does so line by line.
    pub(crate) fn from_parts(headers: Vec<String>, records: Vec<Vec<String>>) -> Self {
        let headers: Rc<[String]> = headers.into();
        let rows = records
            .into_iter()
            .map(|values| Row {
                headers: Rc::clone(&headers),
                values,
            })
            .collect();
        Dataset { headers, rows }
    }

    /// Column names in file order.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Data rows in file order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the file had a header but no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Reads `path` as CSV with the given field delimiter.
///
/// The first non-blank line is the header. Blank lines are skipped, even in
/// a one-column file; an empty value there must be written as `""`. Quoting
/// follows RFC 4180.
pub fn load(path: &Path, delimiter: u8) -> Result<Dataset> {
    let bytes = fs::read(path).map_err(|source| Error::File {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse(path, &bytes, delimiter)?;
    debug!(
        path = %path.display(),
        rows = dataset.len(),
        columns = dataset.headers().len(),
        "loaded CSV"
    );
    Ok(dataset)
}

fn parse(path: &Path, bytes: &[u8], delimiter: u8) -> Result<Dataset> {
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(bytes);

    let header = reader
        .headers()
        .map_err(|err| csv_error(path, err))?
        .clone();
    let headers = check_header(path, &header)?;

    let mut records = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|err| csv_error(path, err))?;
        records.push(record.iter().map(str::to_string).collect());
    }

    Ok(Dataset::from_parts(headers, records))
}

fn check_header(path: &Path, header: &StringRecord) -> Result<Vec<String>> {
    let line = header.position().map_or(1, |p| p.line());
    if header.is_empty() {
        return Err(Error::format(path, 1, "missing header line"));
    }

    let mut seen = HashSet::new();
    for (i, name) in header.iter().enumerate() {
        if name.is_empty() {
            return Err(Error::format(
                path,
                line,
                format!("column {} has an empty name", i + 1),
            ));
        }
        if !seen.insert(name) {
            return Err(Error::format(
                path,
                line,
                format!("duplicate column name {:?}", name),
            ));
        }
    }

    Ok(header.iter().map(str::to_string).collect())
}

fn csv_error(path: &Path, err: csv::Error) -> Error {
    let line = err.position().map_or(0, |p| p.line());
    match err.into_kind() {
        ErrorKind::Io(source) => Error::File {
            path: path.to_path_buf(),
            source,
        },
        ErrorKind::UnequalLengths {
            pos,
            expected_len,
            len,
        } => Error::format(
            path,
            pos.map_or(line, |p| p.line()),
            format!("expected {} fields, found {}", expected_len, len),
        ),
        ErrorKind::Utf8 { pos, err } => Error::format(
            path,
            pos.map_or(line, |p| p.line()),
            format!("not valid UTF-8 ({})", err),
        ),
        other => Error::format(path, line, format!("{:?}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    fn load_str(content: &str) -> Result<Dataset> {
        let file = write_csv(content.as_bytes());
        load(file.path(), b',')
    }

    #[test]
    fn loads_rows_in_header_order() {
        let dataset = load_str("name,price\niphone 14,999\ngalaxy s23,899\n").unwrap();

        assert_eq!(dataset.headers(), ["name", "price"]);
        assert_eq!(dataset.len(), 2);

        let first = &dataset.rows()[0];
        assert_eq!(first.get("name"), Some("iphone 14"));
        assert_eq!(first.get("price"), Some("999"));
        assert_eq!(first.get("brand"), None);
        assert_eq!(
            first.iter().collect::<Vec<_>>(),
            vec![("name", "iphone 14"), ("price", "999")]
        );
    }

    #[test]
    fn row_count_is_line_count_minus_header() {
        let dataset = load_str("a,b\n1,2\n3,4\n5,6").unwrap();
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn header_only_file_is_empty() {
        let dataset = load_str("name,price\n").unwrap();
        assert!(dataset.is_empty());
        assert_eq!(dataset.headers().len(), 2);
    }

    #[test]
    fn quoted_fields() {
        let dataset = load_str("name,note\n\"phone, large\",\"says \"\"hi\"\"\"\n").unwrap();
        let row = &dataset.rows()[0];
        assert_eq!(row.get("name"), Some("phone, large"));
        assert_eq!(row.get("note"), Some("says \"hi\""));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dataset = load_str("a,b\n\n1,2\n\n3,4\n").unwrap();
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn one_column_blank_lines_are_skipped() {
        let dataset = load_str("a\n1\n\n2\n").unwrap();
        assert_eq!(dataset.len(), 2);

        let dataset = load_str("a\n1\n\"\"\n2\n").unwrap();
        assert_eq!(dataset.len(), 3);
        assert_eq!(dataset.rows()[1].get("a"), Some(""));
    }

    #[test]
    fn values_are_not_trimmed() {
        let dataset = load_str("a,b\n x , y\n").unwrap();
        assert_eq!(dataset.rows()[0].values(), [" x ", " y"]);
    }

    #[test]
    fn custom_delimiter() {
        let file = write_csv(b"name;price\nphone1;100\n");
        let dataset = load(file.path(), b';').unwrap();
        assert_eq!(dataset.rows()[0].get("price"), Some("100"));
    }

    #[test]
    fn missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.csv"), b',').unwrap_err();
        assert!(matches!(err, Error::File { .. }));
        assert_eq!(err.kind(), "FileError");
    }

    #[test]
    fn empty_file_has_no_header() {
        let err = load_str("").unwrap_err();
        assert!(matches!(err, Error::Format { line: 1, .. }));
        assert!(err.to_string().contains("missing header line"));
    }

    #[test]
    fn short_row_rejects_file() {
        let err = load_str("a,b,c\n1,2,3\n4,5\n").unwrap_err();
        match err {
            Error::Format { line, reason, .. } => {
                assert_eq!(line, 3);
                assert_eq!(reason, "expected 3 fields, found 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn long_row_rejects_file() {
        let err = load_str("a,b\n1,2,3\n").unwrap_err();
        assert!(matches!(err, Error::Format { line: 2, .. }));
    }

    #[test]
    fn duplicate_header_rejected() {
        let err = load_str("name,price,name\nx,1,y\n").unwrap_err();
        assert!(err.to_string().contains("duplicate column name \"name\""));
    }

    #[test]
    fn empty_header_name_rejected() {
        let err = load_str("name,,price\nx,1,2\n").unwrap_err();
        assert!(err.to_string().contains("column 2 has an empty name"));
    }

    #[test]
    fn invalid_utf8_rejected() {
        let file = write_csv(b"name,price\nph\xffone,100\n");
        let err = load(file.path(), b',').unwrap_err();
        assert!(matches!(err, Error::Format { line: 2, .. }), "{err:?}");
    }

    #[test]
    fn rows_are_seekable() {
        let dataset = load_str("name,price\nphone1,100\n").unwrap();
        assert_eq!(Row::accessor(&dataset.rows()[0], "price"), Some("100"));
    }
}
