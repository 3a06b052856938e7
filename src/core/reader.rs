//! CSV row reader: header line gives the ordered field names, every
//! following line becomes one `Record`.

use crate::domain::model::{Record, TableData};
use crate::utils::error::{ReportError, Result};
use std::collections::HashMap;

pub fn read_table(text: &str) -> Result<TableData> {
    // flexible: ragged rows are surfaced as MalformedInput below instead of
    // the csv crate's own length error, to keep the line number precise.
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let fields: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        if row.len() != fields.len() {
            return Err(ReportError::MalformedInput {
                // header is line 1
                line: index + 2,
                expected: fields.len(),
                found: row.len(),
            });
        }

        let values: HashMap<String, String> = fields
            .iter()
            .cloned()
            .zip(row.iter().map(str::to_string))
            .collect();
        records.push(Record { values });
    }

    Ok(TableData { fields, records })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_defines_field_order() {
        let table = read_table("name,status,duration\ntest_a,passed,1.5\n").unwrap();
        assert_eq!(table.fields, vec!["name", "status", "duration"]);
        assert_eq!(table.records.len(), 1);
        assert_eq!(table.records[0].get("name"), Some("test_a"));
        assert_eq!(table.records[0].get("status"), Some("passed"));
        assert_eq!(table.records[0].get("duration"), Some("1.5"));
    }

    #[test]
    fn test_one_record_per_data_line() {
        let input = "status,duration\npassed,1\npassed,2\nfailed,3\n";
        let table = read_table(input).unwrap();
        assert_eq!(table.records.len(), 3);
    }

    #[test]
    fn test_quoted_value_with_embedded_commas() {
        let table = read_table("name,status\n\"suite::case, part two\",passed\n").unwrap();
        assert_eq!(
            table.records[0].get("name"),
            Some("suite::case, part two")
        );
    }

    #[test]
    fn test_short_row_is_malformed_input() {
        let err = read_table("status,duration\npassed,1.5\nfailed\n").unwrap_err();
        match err {
            ReportError::MalformedInput {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 1);
            }
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_long_row_is_malformed_input() {
        let err = read_table("status,duration\npassed,1.5,extra\n").unwrap_err();
        assert!(matches!(
            err,
            ReportError::MalformedInput {
                line: 2,
                expected: 2,
                found: 3
            }
        ));
    }

    #[test]
    fn test_header_only_input_yields_no_records() {
        let table = read_table("status,duration\n").unwrap();
        assert_eq!(table.fields.len(), 2);
        assert!(table.records.is_empty());
    }
}
