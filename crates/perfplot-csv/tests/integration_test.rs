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

//! File-based tests for the table reader.

use perfplot_csv::{from_csv_path, from_csv_reader_with_config, CsvError, FromCsvConfig};
use std::io::Write;
use tempfile::NamedTempFile;

fn write_table(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("custom_map_performance.csv");

    let err = from_csv_path(&path, "CustomMap", &FromCsvConfig::default()).unwrap_err();
    assert!(matches!(err, CsvError::NotFound { .. }));
    assert!(err.to_string().contains("custom_map_performance.csv"));
}

#[test]
fn test_semicolon_file() {
    let file = write_table(
        "Size;put(K,V);get(K);remove(K)\n\
         10000;1500;800;900\n\
         20000;3100;1700;1850\n\
         30000;4600;2500;2900\n",
    );

    let table = from_csv_path(file.path(), "CustomMap", &FromCsvConfig::default()).unwrap();
    assert_eq!(table.width(), 3);
    assert_eq!(
        table.series("remove(K)").unwrap().sizes(),
        vec![10000, 20000, 30000]
    );
}

#[test]
fn test_comma_file_with_gaps() {
    let file = write_table(
        "Size,Put,Get\n\
         1,10,\n\
         2,20,N/A\n\
         3,30,33\n",
    );

    let table = from_csv_path(file.path(), "HashMap", &FromCsvConfig::default()).unwrap();
    assert_eq!(table.series_len("Put"), 3);
    assert_eq!(table.series("Get").unwrap().sizes(), vec![3]);
}

#[test]
fn test_tab_file_with_padding() {
    let file = write_table("Size\t put \tget\n 5 \t 50 \t 55\n");

    let table = from_csv_path(file.path(), "A", &FromCsvConfig::default()).unwrap();
    assert_eq!(table.series("put").unwrap().values(), vec![50]);
    assert_eq!(table.series("get").unwrap().values(), vec![55]);
}

#[test]
fn test_reader_entry_point() {
    let data: &[u8] = b"Size,put\n1,2\n";
    let table = from_csv_reader_with_config(data, "A", &FromCsvConfig::default()).unwrap();
    assert_eq!(table.label(), "A");
    assert_eq!(table.series_len("put"), 1);
}

#[test]
fn test_pair_count_never_exceeds_row_count() {
    let rows = 25;
    let mut csv = String::from("Size,put,get,clear\n");
    for i in 0..rows {
        // Every third get cell is garbage, every fifth clear cell is empty
        let get = if i % 3 == 0 { "x".to_string() } else { i.to_string() };
        let clear = if i % 5 == 0 { String::new() } else { i.to_string() };
        csv.push_str(&format!("{},{},{},{}\n", i * 100, i, get, clear));
    }
    let file = write_table(&csv);

    let table = from_csv_path(file.path(), "A", &FromCsvConfig::default()).unwrap();
    for op in ["put", "get", "clear"] {
        assert!(table.series_len(op) <= rows);
    }
    assert_eq!(table.series_len("put"), 25);
    assert_eq!(table.series_len("get"), 16);
    assert_eq!(table.series_len("clear"), 20);
}

#[test]
fn test_bad_size_reports_row() {
    let file = write_table("Size,put\n1,1\n2,2\n3.5,3\n");

    let err = from_csv_path(file.path(), "A", &FromCsvConfig::default()).unwrap_err();
    assert_eq!(err.to_string(), "Invalid size value '3.5' at row 4");
}
