//! Integration tests for the CSV and XLSX writers.

use std::fs;

use calamine::{Data, DataType, Reader, open_workbook_auto};
use chrono::{NaiveDate, NaiveDateTime};
use tabclean_model::{Column, ColumnData, FileFormat, Table};
use tabclean_output::{OutputError, WriteOptions, write_table};

fn sample_table() -> Table {
    Table::new(vec![
        Column::text(
            "nome",
            vec![Some("Sao Paulo".to_string()), Some("a;b".to_string())],
        ),
        Column::text("preco", vec![Some("10.50".to_string()), None]),
        Column::numeric("qtd", vec![Some(3.0), Some(2.5)]),
    ])
    .unwrap()
}

#[test]
fn writes_csv_with_bom() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    let format = write_table(&sample_table(), &path, &WriteOptions::default()).unwrap();
    assert_eq!(format, FileFormat::Csv);

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"\xEF\xBB\xBF"));
    let text = String::from_utf8(bytes[3..].to_vec()).unwrap();
    assert_eq!(text, "nome,preco,qtd\nSao Paulo,10.50,3\na;b,,2.5\n");
}

#[test]
fn writes_csv_with_input_delimiter() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_table(&sample_table(), &path, &WriteOptions { delimiter: b';' }).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text.trim_start_matches('\u{feff}'),
        "nome;preco;qtd\nSao Paulo;10.50;3\n\"a;b\";;2.5\n"
    );
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("out.csv");

    write_table(&sample_table(), &path, &WriteOptions::default()).unwrap();
    assert!(path.is_file());
}

#[test]
fn writes_xlsx_that_reads_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");

    let format = write_table(&sample_table(), &path, &WriteOptions::default()).unwrap();
    assert_eq!(format, FileFormat::Excel);

    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    let rows: Vec<Vec<Data>> = range.rows().map(<[Data]>::to_vec).collect();

    assert_eq!(rows[0][0], Data::String("nome".to_string()));
    assert_eq!(rows[1][1], Data::String("10.50".to_string()));
    assert_eq!(rows[1][2], Data::Float(3.0));
    assert_eq!(rows[2][1], Data::Empty);
    assert_eq!(rows[2][2], Data::Float(2.5));
}

fn delivery_table() -> (Table, Vec<NaiveDateTime>) {
    let day = NaiveDate::from_ymd_opt(2023, 7, 14).unwrap();
    let dates = vec![
        day.and_hms_opt(0, 0, 0).unwrap(),
        day.and_hms_opt(8, 30, 0).unwrap(),
    ];
    let table = Table::new(vec![Column::new(
        "entrega",
        ColumnData::DateTime(dates.iter().copied().map(Some).collect()),
    )])
    .unwrap();
    (table, dates)
}

#[test]
fn writes_dates_as_iso_text_in_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.csv");

    write_table(&delivery_table().0, &path, &WriteOptions::default()).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert_eq!(
        text.trim_start_matches('\u{feff}'),
        "entrega\n2023-07-14\n2023-07-14 08:30:00\n"
    );
}

#[test]
fn writes_dates_as_workbook_dates() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xlsx");
    let (table, dates) = delivery_table();

    write_table(&table, &path, &WriteOptions::default()).unwrap();

    let mut workbook = open_workbook_auto(&path).unwrap();
    let range = workbook.worksheet_range_at(0).unwrap().unwrap();
    let cells: Vec<Option<NaiveDateTime>> = range
        .rows()
        .skip(1)
        .map(|row| {
            assert!(matches!(row[0], Data::DateTime(_)));
            row[0].as_datetime()
        })
        .collect();
    assert_eq!(cells, dates.into_iter().map(Some).collect::<Vec<_>>());
}

#[test]
fn rejects_unsupported_extension_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.xls");

    let err = write_table(&sample_table(), &path, &WriteOptions::default()).unwrap_err();
    assert!(matches!(err, OutputError::UnsupportedFormat { .. }));
    assert!(!path.exists());
}

#[test]
fn unwritable_path_is_a_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("file");
    fs::write(&blocker, b"x").unwrap();
    let path = blocker.join("out.csv");

    let err = write_table(&sample_table(), &path, &WriteOptions::default()).unwrap_err();
    assert_eq!(err.kind(), "WriteError");
}
