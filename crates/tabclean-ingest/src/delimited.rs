//! CSV reading with encoding fallback and delimiter sniffing.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use encoding_rs::WINDOWS_1252;
use tracing::{debug, warn};

use crate::error::{IngestError, Result};
use crate::raw::{RawCell, RawTable, normalize_header};

/// Delimiters tried when sniffing, in order of preference on ties.
const CANDIDATE_DELIMITERS: [u8; 4] = [b',', b';', b'\t', b'|'];

/// Character encoding the CSV bytes were decoded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceEncoding {
    Utf8,
    /// Bytes were not valid UTF-8 and were decoded as Windows-1252.
    Latin1,
}

impl SourceEncoding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Latin1 => "latin-1",
        }
    }
}

/// Decode CSV bytes: UTF-8 first, Latin-1 (Windows-1252) as fallback.
///
/// A UTF-8 byte-order mark is dropped. UTF-16 input is rejected.
pub fn decode_csv_bytes(path: &Path, bytes: &[u8]) -> Result<(String, SourceEncoding)> {
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    let bytes = bytes.strip_prefix(&[0xEF, 0xBB, 0xBF]).unwrap_or(bytes);
    match std::str::from_utf8(bytes) {
        Ok(text) => Ok((text.to_string(), SourceEncoding::Utf8)),
        Err(err) => {
            warn!(
                path = %path.display(),
                valid_up_to = err.valid_up_to(),
                "input is not valid UTF-8, decoding as latin-1"
            );
            let (text, _had_errors) = WINDOWS_1252.decode_without_bom_handling(bytes);
            Ok((text.into_owned(), SourceEncoding::Latin1))
        }
    }
}

/// Pick the delimiter that occurs most often (outside quotes) in the first
/// non-blank line. Falls back to a comma.
pub fn sniff_delimiter(text: &str) -> u8 {
    let Some(line) = text.lines().find(|line| !line.trim().is_empty()) else {
        return b',';
    };
    let mut counts = [0usize; CANDIDATE_DELIMITERS.len()];
    let mut in_quotes = false;
    for byte in line.bytes() {
        if byte == b'"' {
            in_quotes = !in_quotes;
            continue;
        }
        if in_quotes {
            continue;
        }
        if let Some(idx) = CANDIDATE_DELIMITERS.iter().position(|d| *d == byte) {
            counts[idx] += 1;
        }
    }
    let mut best = 0usize;
    for idx in 1..counts.len() {
        if counts[idx] > counts[best] {
            best = idx;
        }
    }
    if counts[best] == 0 {
        b','
    } else {
        CANDIDATE_DELIMITERS[best]
    }
}

/// Output of [`read_csv_raw`].
#[derive(Debug, Clone)]
pub(crate) struct CsvSource {
    pub raw: RawTable,
    pub delimiter: u8,
    pub encoding: SourceEncoding,
}

/// Read a CSV file into an untyped grid. The first non-blank record is the header.
pub(crate) fn read_csv_raw(path: &Path, delimiter: Option<u8>) -> Result<CsvSource> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::from_io(path, e))?;
    let (text, encoding) = decode_csv_bytes(path, &bytes)?;
    let delimiter = delimiter.unwrap_or_else(|| sniff_delimiter(&text));
    debug!(
        path = %path.display(),
        delimiter = %char::from(delimiter).escape_default(),
        encoding = encoding.as_str(),
        "reading csv"
    );

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(text.as_bytes());

    let mut records: Vec<StringRecord> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        records.push(record);
    }

    let mut records = records.into_iter();
    let Some(header) = records.next() else {
        warn!(path = %path.display(), "CSV file is empty");
        return Ok(CsvSource {
            raw: RawTable::default(),
            delimiter,
            encoding,
        });
    };
    let headers: Vec<String> = header.iter().map(normalize_header).collect();
    let rows = records
        .map(|record| {
            if record.len() > headers.len() {
                let line = record.position().map_or(0, csv::Position::line);
                return Err(IngestError::CsvParse {
                    path: path.to_path_buf(),
                    message: format!(
                        "line {line} has {} fields, header has {}",
                        record.len(),
                        headers.len()
                    ),
                });
            }
            Ok(record.iter().map(RawCell::from_text).collect())
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CsvSource {
        raw: RawTable::new(headers, rows),
        delimiter,
        encoding,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn sniffs_semicolon() {
        assert_eq!(sniff_delimiter("nome;preco;obs\n1;2;3\n"), b';');
    }

    #[test]
    fn sniff_ignores_quoted_delimiters() {
        assert_eq!(sniff_delimiter("\"a;b;c\",d,e\n"), b',');
    }

    #[test]
    fn sniff_defaults_to_comma() {
        assert_eq!(sniff_delimiter("single\n"), b',');
        assert_eq!(sniff_delimiter(""), b',');
    }

    #[test]
    fn decode_strips_utf8_bom() {
        let (text, encoding) =
            decode_csv_bytes(Path::new("x.csv"), b"\xEF\xBB\xBFa,b\n").unwrap();
        assert_eq!(text, "a,b\n");
        assert_eq!(encoding, SourceEncoding::Utf8);
    }

    #[test]
    fn decode_falls_back_to_latin1() {
        // "São" encoded as Latin-1
        let (text, encoding) = decode_csv_bytes(Path::new("x.csv"), b"S\xE3o\n").unwrap();
        assert_eq!(text, "São\n");
        assert_eq!(encoding, SourceEncoding::Latin1);
    }

    #[test]
    fn decode_rejects_utf16() {
        let result = decode_csv_bytes(Path::new("x.csv"), &[0xFF, 0xFE, b'a', 0]);
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn reads_header_and_rows_skipping_blank_lines() {
        let file = create_temp_csv(b"A,B\n1,x\n,\n2,\n");
        let source = read_csv_raw(file.path(), None).unwrap();
        assert_eq!(source.raw.headers, vec!["A", "B"]);
        assert_eq!(source.raw.rows.len(), 2);
        assert_eq!(source.raw.rows[1][1], RawCell::Empty);
        assert_eq!(source.delimiter, b',');
    }

    #[test]
    fn empty_file_yields_empty_table() {
        let file = create_temp_csv(b"");
        let source = read_csv_raw(file.path(), None).unwrap();
        assert!(source.raw.headers.is_empty());
        assert!(source.raw.rows.is_empty());
    }

    #[test]
    fn record_wider_than_header_is_rejected() {
        let file = create_temp_csv(b"a,b\n1,2\n3,4,extra\n");
        let err = read_csv_raw(file.path(), None).unwrap_err();
        match err {
            IngestError::CsvParse { message, .. } => {
                assert_eq!(message, "line 3 has 3 fields, header has 2");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn short_records_are_padded_later() {
        let file = create_temp_csv(b"a,b,c\n1\n");
        let source = read_csv_raw(file.path(), None).unwrap();
        assert_eq!(source.raw.rows, vec![vec![RawCell::Text("1".to_string())]]);
        assert_eq!(source.raw.column_cells(2), vec![RawCell::Empty]);
    }
}
