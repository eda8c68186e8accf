//! Repair of CSV exports that were pasted into a single worksheet column.

use crate::raw::{RawCell, RawTable, normalize_header};

fn split_fields(value: &str, limit: usize) -> Vec<RawCell> {
    value.splitn(limit, ',').map(RawCell::from_text).collect()
}

/// Split a single-column table whose cells hold comma-joined fields.
///
/// - If the header itself contains commas, it is split into column names and
///   every cell is split into at most that many fields (the last field keeps
///   any further commas).
/// - Otherwise, if the first cell contains commas, that cell becomes the
///   header and the remaining cells become the rows.
///
/// Returns `None` when the table does not look like an embedded export.
pub fn expand_embedded_csv(raw: &RawTable) -> Option<RawTable> {
    if raw.headers.len() != 1 {
        return None;
    }
    let cells = raw.column_cells(0);

    if raw.headers[0].contains(',') {
        let headers: Vec<String> = raw.headers[0].split(',').map(normalize_header).collect();
        let width = headers.len();
        let rows = cells
            .iter()
            .map(|cell| match cell.as_text() {
                Some(value) => split_fields(&value, width),
                None => Vec::new(),
            })
            .collect();
        return Some(RawTable::new(headers, rows));
    }

    let first = cells.first()?.as_text()?;
    if !first.contains(',') {
        return None;
    }
    let headers: Vec<String> = first.split(',').map(normalize_header).collect();
    let width = headers.len();
    if width < 2 {
        return None;
    }
    let rows = cells
        .iter()
        .skip(1)
        .map(|cell| match cell.as_text() {
            Some(value) => split_fields(&value, width),
            None => Vec::new(),
        })
        .collect();
    Some(RawTable::new(headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> RawCell {
        RawCell::Text(value.to_string())
    }

    #[test]
    fn splits_comma_header_and_cells() {
        let raw = RawTable::new(
            vec!["nome, cidade, obs".to_string()],
            vec![vec![text("Ana,Recife,a,b")], vec![text("Bia,Natal")]],
        );
        let expanded = expand_embedded_csv(&raw).expect("expanded");
        assert_eq!(expanded.headers, vec!["nome", "cidade", "obs"]);
        assert_eq!(
            expanded.rows[0],
            vec![text("Ana"), text("Recife"), text("a,b")]
        );
        assert_eq!(expanded.rows[1], vec![text("Bia"), text("Natal")]);
    }

    #[test]
    fn promotes_first_cell_to_header() {
        let raw = RawTable::new(
            vec!["Unnamed".to_string()],
            vec![vec![text("id,nome")], vec![text("1,Ana")]],
        );
        let expanded = expand_embedded_csv(&raw).expect("expanded");
        assert_eq!(expanded.headers, vec!["id", "nome"]);
        assert_eq!(expanded.rows, vec![vec![text("1"), text("Ana")]]);
    }

    #[test]
    fn leaves_regular_tables_alone() {
        let raw = RawTable::new(
            vec!["a".to_string(), "b".to_string()],
            vec![vec![text("1,2"), text("3")]],
        );
        assert!(expand_embedded_csv(&raw).is_none());

        let raw = RawTable::new(vec!["a".to_string()], vec![vec![text("plain")]]);
        assert!(expand_embedded_csv(&raw).is_none());
    }
}
