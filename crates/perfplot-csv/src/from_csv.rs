// Dweve PerfPlot - Benchmark comparison charts
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Read delimited benchmark tables into measurement tables.

use crate::error::{CsvError, Result};
use csv::{ReaderBuilder, Trim};
use perfplot_core::{MeasurementTable, TableBuilder};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Default maximum number of data rows.
///
/// Benchmark sweeps are small; a table far beyond this is almost certainly the
/// wrong file.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// Default name of the size key column.
pub const DEFAULT_SIZE_COLUMN: &str = "Size";

/// Delimiters considered by auto-detection, in tie-break order.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Configuration for table parsing.
///
/// # Examples
///
/// ```
/// # use perfplot_csv::FromCsvConfig;
/// let config = FromCsvConfig::default();
/// assert_eq!(config.delimiter, None);
/// assert_eq!(config.size_column, "Size");
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
///
/// // Semicolon separated, size column called "n"
/// let config = FromCsvConfig {
///     delimiter: Some(b';'),
///     size_column: "n".to_string(),
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone)]
pub struct FromCsvConfig {
    /// Field delimiter; `None` detects it from the header line.
    pub delimiter: Option<u8>,

    /// Name of the size key column, matched ASCII case-insensitively.
    pub size_column: String,

    /// Whether to trim whitespace around headers and fields.
    pub trim: bool,

    /// Maximum number of data rows accepted.
    pub max_rows: usize,
}

impl Default for FromCsvConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            size_column: DEFAULT_SIZE_COLUMN.to_string(),
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

/// Parse a table with default configuration.
///
/// # Examples
///
/// ```
/// use perfplot_csv::from_csv;
///
/// let csv = "Size,put,get\n10,120,80\n20,250,\n";
/// let table = from_csv(csv, "HashMap").unwrap();
///
/// assert_eq!(table.series_len("put"), 2);
/// // The empty cell was skipped, not fatal
/// assert_eq!(table.series_len("get"), 1);
/// ```
pub fn from_csv(csv: &str, label: &str) -> Result<MeasurementTable> {
    from_csv_with_config(csv, label, &FromCsvConfig::default())
}

/// Parse a table held in memory.
///
/// The header row names one size column and any number of measurement
/// columns. For every data row:
///
/// - the size cell must hold an integer, otherwise the whole read fails with
///   [`CsvError::InvalidSize`];
/// - an empty measurement cell is logged and skipped;
/// - a non-integer measurement cell is logged with its value, operation and
///   size, and skipped.
///
/// Skipped cells only affect their own (size, value) pair; the rest of the
/// row and the rest of the table are read normally.
///
/// # Errors
///
/// - [`CsvError::EmptyHeader`] if there is no header row
/// - [`CsvError::MissingSizeColumn`] if no header matches `size_column`
/// - [`CsvError::InvalidSize`] on a missing or non-integer size cell
/// - [`CsvError::SecurityLimit`] if more than `max_rows` rows are present
/// - [`CsvError::CsvLib`] on malformed CSV (e.g. invalid UTF-8)
pub fn from_csv_with_config(
    csv: &str,
    label: &str,
    config: &FromCsvConfig,
) -> Result<MeasurementTable> {
    let delimiter = config
        .delimiter
        .unwrap_or_else(|| detect_delimiter(csv.lines().next().unwrap_or_default()));

    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .trim(if config.trim { Trim::All } else { Trim::None })
        .from_reader(csv.as_bytes());

    let headers = reader.headers()?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        return Err(CsvError::EmptyHeader);
    }

    let size_index = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(&config.size_column))
        .ok_or_else(|| CsvError::MissingSizeColumn {
            column: config.size_column.clone(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        })?;

    let mut builder = TableBuilder::new(label);
    let mut columns: Vec<(usize, String)> = Vec::new();
    for (index, name) in headers.iter().enumerate() {
        let name = name.trim();
        if index == size_index {
            continue;
        }
        if name.is_empty() {
            warn!(table = label, column = index, "unnamed column ignored");
            continue;
        }
        if columns.iter().any(|(_, existing)| existing == name) {
            warn!(table = label, operation = name, "duplicate column ignored");
            continue;
        }
        builder.declare(name);
        columns.push((index, name.to_string()));
    }

    let mut rows = 0usize;
    for (offset, record) in reader.records().enumerate() {
        let record = record?;
        // Line the record starts on; quoted line breaks and skipped blank
        // lines make it differ from the record count.
        let row = record
            .position()
            .map_or(offset + 2, |position| position.line() as usize);

        rows += 1;
        if rows > config.max_rows {
            return Err(CsvError::SecurityLimit {
                limit: config.max_rows,
                actual: rows,
            });
        }

        let raw_size = record.get(size_index).unwrap_or_default().trim();
        let size: i64 = raw_size.parse().map_err(|_| CsvError::InvalidSize {
            row,
            value: raw_size.to_string(),
        })?;

        for (index, operation) in &columns {
            let cell = record.get(*index).unwrap_or_default().trim();
            if cell.is_empty() {
                warn!(
                    table = label,
                    operation = operation.as_str(),
                    size,
                    row,
                    "empty cell skipped"
                );
                continue;
            }

            match cell.parse::<i64>() {
                Ok(value) => builder.push(operation, size, value),
                Err(_) => warn!(
                    table = label,
                    operation = operation.as_str(),
                    size,
                    row,
                    value = cell,
                    "non-numeric cell skipped"
                ),
            }
        }
    }

    debug!(
        table = label,
        rows,
        columns = columns.len(),
        delimiter = %char::from(delimiter).escape_default(),
        "table parsed"
    );
    Ok(builder.finish())
}

/// Parse a table from any reader.
///
/// The input is buffered in full so the delimiter can be detected from the
/// header line.
pub fn from_csv_reader_with_config<R: Read>(
    mut reader: R,
    label: &str,
    config: &FromCsvConfig,
) -> Result<MeasurementTable> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    from_csv_with_config(&text, label, config)
}

/// Open and parse a table from disk.
///
/// # Errors
///
/// Returns [`CsvError::NotFound`] if the file does not exist, and
/// [`CsvError::Io`] for any other failure to open it. Parsing errors are the
/// same as [`from_csv_with_config`].
///
/// # Examples
///
/// ```no_run
/// use perfplot_csv::{from_csv_path, FromCsvConfig};
/// use std::path::Path;
///
/// let table = from_csv_path(
///     Path::new("custom_map_performance.csv"),
///     "CustomMap",
///     &FromCsvConfig::default(),
/// )
/// .unwrap();
/// println!("{} columns", table.width());
/// ```
pub fn from_csv_path(path: &Path, label: &str, config: &FromCsvConfig) -> Result<MeasurementTable> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CsvError::NotFound {
            path: path.to_path_buf(),
        },
        _ => CsvError::Io(e),
    })?;

    debug!(table = label, path = %path.display(), "reading table");
    from_csv_reader_with_config(file, label, config)
}

/// Guess the delimiter from a header line.
///
/// Picks the candidate (`,` `;` tab `|`) that occurs most often; ties and
/// lines without any candidate fall back to the earlier one in that list,
/// i.e. a comma.
///
/// # Examples
///
/// ```
/// use perfplot_csv::detect_delimiter;
///
/// assert_eq!(detect_delimiter("Size;put(K,V);get(K)"), b';');
/// assert_eq!(detect_delimiter("Size,Put,Get"), b',');
/// ```
pub fn detect_delimiter(header: &str) -> u8 {
    let mut best = CANDIDATE_DELIMITERS[0];
    let mut best_count = 0;
    for candidate in CANDIDATE_DELIMITERS {
        let count = header.bytes().filter(|&b| b == candidate).count();
        if count > best_count {
            best = candidate;
            best_count = count;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_test::traced_test;

    #[test]
    fn test_basic_table() {
        let csv = "Size,put,get\n1,10,11\n2,20,21\n3,30,31\n";
        let table = from_csv(csv, "A").unwrap();

        assert_eq!(table.label(), "A");
        assert_eq!(table.operations().collect::<Vec<_>>(), vec!["put", "get"]);
        let put = table.series("put").unwrap();
        assert_eq!(put.sizes(), vec![1, 2, 3]);
        assert_eq!(put.values(), vec![10, 20, 30]);
    }

    #[test]
    fn test_semicolon_detected() {
        let csv = "Size;put(K,V);get(K)\n10000;500;300\n20000;900;650\n";
        let table = from_csv(csv, "CustomMap").unwrap();

        assert_eq!(table.series_len("put(K,V)"), 2);
        assert_eq!(table.series("get(K)").unwrap().values(), vec![300, 650]);
    }

    #[test]
    fn test_size_column_is_case_insensitive() {
        let csv = "size,put\n5,50\n";
        let table = from_csv(csv, "A").unwrap();
        assert_eq!(table.series("put").unwrap().sizes(), vec![5]);
        assert!(!table.has_operation("size"));
    }

    #[test]
    #[traced_test]
    fn test_non_numeric_cell_skipped_and_logged() {
        let csv = "Size,put,get\n50,1,2\n100,3,abc\n150,5,6\n";
        let table = from_csv(csv, "A").unwrap();

        let get = table.series("get").unwrap();
        assert_eq!(get.sizes(), vec![50, 150]);
        assert_eq!(table.series("put").unwrap().sizes(), vec![50, 100, 150]);

        assert!(logs_contain("non-numeric cell skipped"));
        assert!(logs_contain("abc"));
        assert!(logs_contain("operation=\"get\"") || logs_contain("operation=get"));
        assert!(logs_contain("size=100"));
    }

    #[test]
    #[traced_test]
    fn test_empty_and_whitespace_cells_skipped() {
        let csv = "Size,put,get\n1,10,\n2,   ,20\n3,30,30\n";
        let table = from_csv(csv, "A").unwrap();

        assert_eq!(table.series_len("put"), 2);
        assert_eq!(table.series_len("get"), 2);
        assert!(logs_contain("empty cell skipped"));
    }

    #[test]
    fn test_short_row_treated_as_empty_cells() {
        let csv = "Size,put,get\n1,10\n2,20,21\n";
        let table = from_csv(csv, "A").unwrap();
        assert_eq!(table.series_len("put"), 2);
        assert_eq!(table.series_len("get"), 1);
    }

    #[test]
    fn test_column_with_no_values_still_declared() {
        let csv = "Size,put,get\n1,10,\n2,20,\n";
        let table = from_csv(csv, "A").unwrap();
        assert!(table.has_operation("get"));
        assert_eq!(table.series_len("get"), 0);
    }

    #[test]
    fn test_invalid_size_is_fatal() {
        let csv = "Size,put\n1,10\nten,20\n";
        let err = from_csv(csv, "A").unwrap_err();
        assert!(matches!(
            err,
            CsvError::InvalidSize { row: 3, ref value } if value == "ten"
        ));
    }

    #[test]
    fn test_invalid_size_reports_source_line() {
        // The quoted cell spans lines 2 and 3
        let csv = "Size,put\n1,\"10\n\"\nten,20\n";
        let err = from_csv(csv, "A").unwrap_err();
        assert!(matches!(
            err,
            CsvError::InvalidSize { row: 4, ref value } if value == "ten"
        ));
    }

    #[test]
    fn test_empty_size_is_fatal() {
        let csv = "Size,put\n,10\n";
        let err = from_csv(csv, "A").unwrap_err();
        assert!(matches!(err, CsvError::InvalidSize { row: 2, .. }));
    }

    #[test]
    fn test_missing_size_column() {
        let csv = "N,put\n1,10\n";
        let err = from_csv(csv, "A").unwrap_err();
        match err {
            CsvError::MissingSizeColumn { column, available } => {
                assert_eq!(column, "Size");
                assert_eq!(available, "N, put");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_custom_size_column_and_delimiter() {
        let csv = "n|put\n4|40\n";
        let config = FromCsvConfig {
            delimiter: Some(b'|'),
            size_column: "n".to_string(),
            ..Default::default()
        };
        let table = from_csv_with_config(csv, "A", &config).unwrap();
        assert_eq!(table.series("put").unwrap().values(), vec![40]);
    }

    #[test]
    fn test_empty_input() {
        let err = from_csv("", "A").unwrap_err();
        assert!(matches!(err, CsvError::EmptyHeader));
    }

    #[test]
    fn test_row_limit() {
        let csv = "Size,put\n1,1\n2,2\n3,3\n";
        let config = FromCsvConfig {
            max_rows: 2,
            ..Default::default()
        };
        let err = from_csv_with_config(csv, "A", &config).unwrap_err();
        assert!(matches!(
            err,
            CsvError::SecurityLimit {
                limit: 2,
                actual: 3
            }
        ));
    }

    #[test]
    #[traced_test]
    fn test_duplicate_column_ignored() {
        let csv = "Size,put,put\n1,10,99\n";
        let table = from_csv(csv, "A").unwrap();
        assert_eq!(table.series("put").unwrap().values(), vec![10]);
        assert!(logs_contain("duplicate column ignored"));
    }

    #[test]
    fn test_cells_parsed_when_trim_disabled() {
        let csv = "Size,put\n1, 10\n";
        let config = FromCsvConfig {
            trim: false,
            ..Default::default()
        };
        // Cells are still trimmed before integer parsing
        let table = from_csv_with_config(csv, "A", &config).unwrap();
        assert_eq!(table.series("put").unwrap().values(), vec![10]);
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("Size\tput\tget"), b'\t');
        assert_eq!(detect_delimiter("Size|put"), b'|');
        assert_eq!(detect_delimiter("Size"), b',');
        // Commas inside operation names are outnumbered by semicolons
        assert_eq!(
            detect_delimiter("Size;put(K,V);get(K);remove(K,V)"),
            b';'
        );
    }

    #[test]
    fn test_path_not_found() {
        let err = from_csv_path(
            Path::new("/definitely/not/here.csv"),
            "A",
            &FromCsvConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, CsvError::NotFound { .. }));
    }
}
