//! Tabular dataset over a delimited-text source

use super::{LoadError, LoadResult};
use std::io::Read;
use std::str::FromStr;
use tracing::debug;

/// A delimited-text parsing configuration.
///
/// The set of recognized dialects is closed; an unrecognized name is
/// rejected when it is parsed, before any input is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Comma-delimited, double-quoted fields ("excel")
    Excel,
    /// Tab-delimited, double-quoted fields ("excel-tab")
    ExcelTab,
    /// Comma-delimited with every field quoted on output ("unix")
    Unix,
}

impl Dialect {
    pub fn name(&self) -> &'static str {
        match self {
            Dialect::Excel => "excel",
            Dialect::ExcelTab => "excel-tab",
            Dialect::Unix => "unix",
        }
    }

    pub fn delimiter(&self) -> u8 {
        match self {
            Dialect::Excel | Dialect::Unix => b',',
            Dialect::ExcelTab => b'\t',
        }
    }

    fn reader_builder(&self) -> csv::ReaderBuilder {
        let mut builder = csv::ReaderBuilder::new();
        // Header handling lives in CsvDataset, not in the csv reader.
        builder
            .has_headers(false)
            .delimiter(self.delimiter())
            .quote(b'"');
        builder
    }
}

impl FromStr for Dialect {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excel" => Ok(Dialect::Excel),
            "excel-tab" => Ok(Dialect::ExcelTab),
            "unix" => Ok(Dialect::Unix),
            other => Err(LoadError::UnknownDialect(other.to_string())),
        }
    }
}

/// Ordered rows and column names read from one delimited-text source.
///
/// The header is resolved at construction: taken from an explicit
/// `use_headers` list, read from the file's first row, or synthesized as
/// positional integer names ("0", "1", ...) from the width of the first
/// data row. The source is consumed in a single pass; `rows` yields every
/// data row in file order. The caller owns the underlying reader's
/// lifetime.
#[derive(Debug)]
pub struct CsvDataset<R: Read> {
    headers: Vec<String>,
    // Buffered when the first data row had to be peeked for header synthesis
    first_row: Option<Vec<String>>,
    reader: csv::Reader<R>,
}

impl<R: Read> CsvDataset<R> {
    /// Build a dataset, resolving column names before any row is handed
    /// out.
    ///
    /// Explicit `use_headers` win over the file's header row; when both
    /// are present the file's first row is consumed and discarded.
    pub fn new(
        source: R,
        has_header: bool,
        dialect: Dialect,
        use_headers: Option<Vec<String>>,
    ) -> LoadResult<Self> {
        let mut reader = dialect.reader_builder().from_reader(source);
        let mut first_row = None;

        let headers = if let Some(names) = use_headers {
            if has_header {
                let mut record = csv::StringRecord::new();
                reader.read_record(&mut record)?;
            }
            names
        } else if has_header {
            let mut record = csv::StringRecord::new();
            if reader.read_record(&mut record)? {
                record.iter().map(str::to_string).collect()
            } else {
                Vec::new()
            }
        } else {
            let mut record = csv::StringRecord::new();
            if reader.read_record(&mut record)? {
                let row: Vec<String> = record.iter().map(str::to_string).collect();
                let names = (0..row.len()).map(|i| i.to_string()).collect();
                first_row = Some(row);
                names
            } else {
                Vec::new()
            }
        };

        debug!(dialect = dialect.name(), columns = headers.len(), "dataset opened");

        Ok(CsvDataset {
            headers,
            first_row,
            reader,
        })
    }

    /// The ordered column names, fixed for the dataset's lifetime
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Iterate the remaining rows in file order. Single pass.
    pub fn rows(&mut self) -> Rows<'_, R> {
        Rows {
            first_row: self.first_row.take(),
            records: self.reader.records(),
        }
    }
}

/// Iterator over a dataset's rows
pub struct Rows<'a, R: Read> {
    first_row: Option<Vec<String>>,
    records: csv::StringRecordsIter<'a, R>,
}

impl<R: Read> Iterator for Rows<'_, R> {
    type Item = LoadResult<Vec<String>>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(row) = self.first_row.take() {
            return Some(Ok(row));
        }
        self.records.next().map(|record| {
            record
                .map(|record| record.iter().map(str::to_string).collect())
                .map_err(LoadError::from)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect_rows<R: Read>(dataset: &mut CsvDataset<R>) -> Vec<Vec<String>> {
        dataset.rows().map(|row| row.unwrap()).collect()
    }

    #[test]
    fn test_dialect_parsing() {
        assert_eq!("excel".parse::<Dialect>().unwrap(), Dialect::Excel);
        assert_eq!("excel-tab".parse::<Dialect>().unwrap(), Dialect::ExcelTab);
        assert_eq!("unix".parse::<Dialect>().unwrap(), Dialect::Unix);
        assert!(matches!(
            "excel_tab".parse::<Dialect>(),
            Err(LoadError::UnknownDialect(name)) if name == "excel_tab"
        ));
    }

    #[test]
    fn test_headers_from_first_row() {
        let source = "name,age\njon,29\nfrank,31\n";
        let mut dataset =
            CsvDataset::new(source.as_bytes(), true, Dialect::Excel, None).unwrap();

        assert_eq!(dataset.headers(), ["name", "age"]);
        let rows = collect_rows(&mut dataset);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["jon", "29"]);
    }

    #[test]
    fn test_headers_synthesized_when_absent() {
        let source = "jon,29\nfrank,31\n";
        let mut dataset =
            CsvDataset::new(source.as_bytes(), false, Dialect::Excel, None).unwrap();

        assert_eq!(dataset.headers(), ["0", "1"]);
        // The peeked first row is still yielded.
        let rows = collect_rows(&mut dataset);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], ["jon", "29"]);
    }

    #[test]
    fn test_explicit_headers_replace_header_row() {
        let source = "a,b\njon,29\n";
        let use_headers = Some(vec!["name".to_string(), "age".to_string()]);
        let mut dataset =
            CsvDataset::new(source.as_bytes(), true, Dialect::Excel, use_headers).unwrap();

        assert_eq!(dataset.headers(), ["name", "age"]);
        let rows = collect_rows(&mut dataset);
        assert_eq!(rows, vec![vec!["jon".to_string(), "29".to_string()]]);
    }

    #[test]
    fn test_tab_dialect() {
        let source = "from\tto\nwidgets, inc.\tBlue Sky Network\n";
        let mut dataset =
            CsvDataset::new(source.as_bytes(), true, Dialect::ExcelTab, None).unwrap();

        assert_eq!(dataset.headers(), ["from", "to"]);
        let rows = collect_rows(&mut dataset);
        // Commas are plain field content under the tab dialect.
        assert_eq!(rows[0], ["widgets, inc.", "Blue Sky Network"]);
    }

    #[test]
    fn test_quoted_fields() {
        let source = "name,title\n\"smith, jane\",engineer\n";
        let mut dataset =
            CsvDataset::new(source.as_bytes(), true, Dialect::Excel, None).unwrap();

        let rows = collect_rows(&mut dataset);
        assert_eq!(rows[0], ["smith, jane", "engineer"]);
    }

    #[test]
    fn test_empty_source() {
        let mut dataset = CsvDataset::new("".as_bytes(), true, Dialect::Excel, None).unwrap();
        assert!(dataset.headers().is_empty());
        assert_eq!(dataset.rows().count(), 0);
    }

    #[test]
    fn test_inconsistent_column_count_is_an_error() {
        let source = "a,b\n1,2\n1,2,3\n";
        let mut dataset =
            CsvDataset::new(source.as_bytes(), true, Dialect::Excel, None).unwrap();

        let rows: Vec<_> = dataset.rows().collect();
        assert!(rows[0].is_ok());
        assert!(matches!(rows[1], Err(LoadError::Csv(_))));
    }
}
