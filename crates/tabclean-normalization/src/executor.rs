//! Table cleaning execution.
//!
//! Applies the cell rules to every column of a table in place and collects a
//! [`CleaningReport`].

use std::time::Instant;

use tabclean_model::{
    CleaningProfile, Column, ColumnData, ColumnRole, Table, format_numeric,
};
use tracing::{debug, info, info_span, trace};

use crate::coerce::coerce_numeric;
use crate::price::{format_price, normalize_price};
use crate::report::{CleaningReport, ColumnReport};
use crate::rules::{CellContext, clean_header, clean_value};

/// Options for [`clean_table`].
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanOptions {
    pub profile: CleaningProfile,
    /// Emit before/after cell values in trace logs.
    pub log_values: bool,
}

impl CleanOptions {
    pub fn new(profile: CleaningProfile) -> Self {
        Self {
            profile,
            log_values: false,
        }
    }

    #[must_use]
    pub fn with_log_values(mut self, enable: bool) -> Self {
        self.log_values = enable;
        self
    }
}

/// Clean every column of `table` in place.
///
/// Column names are cleaned first and decide each column's role. Text
/// columns are cleaned cell by cell and then numeric-coerced when possible;
/// price columns are formatted with two decimals and stay text; other
/// numeric columns are left alone.
pub fn clean_table(table: &mut Table, options: &CleanOptions) -> CleaningReport {
    let span = info_span!("clean", profile = options.profile.as_str());
    let _guard = span.enter();
    let start = Instant::now();

    let rows = table.height();
    let columns: Vec<ColumnReport> = table
        .columns_mut()
        .iter_mut()
        .map(|column| clean_column(column, options))
        .collect();
    let report = CleaningReport {
        profile: options.profile,
        rows,
        columns,
    };

    info!(
        rows,
        columns = report.columns.len(),
        changed_cells = report.changed_cells(),
        coerced_columns = report.coerced_columns(),
        duration_ms = start.elapsed().as_millis(),
        "cleaning complete"
    );
    report
}

fn clean_column(column: &mut Column, options: &CleanOptions) -> ColumnReport {
    let source_name = column.name.clone();
    let name = clean_header(&source_name, options.profile);
    let role = ColumnRole::detect(&name);
    let context = CellContext::new(options.profile, role);

    let data = std::mem::replace(&mut column.data, ColumnData::Text(Vec::new()));
    let (data, changed_cells, coerced) = match (data, role) {
        (ColumnData::Numeric(values), ColumnRole::Price) => {
            let changed = values
                .iter()
                .flatten()
                .filter(|v| format_price(**v) != format_numeric(**v))
                .count();
            let formatted = values.into_iter().map(|v| v.map(format_price)).collect();
            (ColumnData::Text(formatted), changed, false)
        }
        (ColumnData::Numeric(values), _) => (ColumnData::Numeric(values), 0, false),
        (ColumnData::DateTime(values), _) => (ColumnData::DateTime(values), 0, false),
        (ColumnData::Text(values), ColumnRole::Price) => {
            let (values, changed) = clean_price_cells(&name, values, options);
            (ColumnData::Text(values), changed, false)
        }
        (ColumnData::Text(values), _) => {
            let (values, changed) = clean_text_cells(&name, values, &context, options);
            match coerce_numeric(&values) {
                Some(numbers) => (ColumnData::Numeric(numbers), changed, true),
                None => (ColumnData::Text(values), changed, false),
            }
        }
    };

    let report = ColumnReport {
        source_name,
        name: name.clone(),
        role,
        kind: data.kind(),
        changed_cells,
        empty_cells: data.empty_count(),
        coerced,
    };
    debug!(
        column = %report.name,
        role = role.as_str(),
        changed_cells,
        coerced,
        "column cleaned"
    );
    column.name = name;
    column.data = data;
    report
}

fn clean_text_cells(
    column: &str,
    values: Vec<Option<String>>,
    context: &CellContext,
    options: &CleanOptions,
) -> (Vec<Option<String>>, usize) {
    let mut changed = 0usize;
    let cleaned = values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let raw = value?;
            let cleaned = clean_value(&raw, context);
            if cleaned != raw {
                changed += 1;
                if options.log_values {
                    trace!(column, row, before = %raw, after = %cleaned, "cell cleaned");
                }
            }
            (!cleaned.is_empty()).then_some(cleaned)
        })
        .collect();
    (cleaned, changed)
}

fn clean_price_cells(
    column: &str,
    values: Vec<Option<String>>,
    options: &CleanOptions,
) -> (Vec<Option<String>>, usize) {
    let mut changed = 0usize;
    let mut unparsed = 0usize;
    let cleaned = values
        .into_iter()
        .enumerate()
        .map(|(row, value)| {
            let raw = value?;
            let Some(price) = normalize_price(&raw) else {
                unparsed += 1;
                return Some(raw);
            };
            if price != raw {
                changed += 1;
                if options.log_values {
                    trace!(column, row, before = %raw, after = %price, "price normalized");
                }
            }
            Some(price)
        })
        .collect();
    if unparsed > 0 {
        debug!(column, unparsed, "price values without an amount kept as-is");
    }
    (cleaned, changed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabclean_model::ColumnKind;

    fn text(values: &[&str]) -> Vec<Option<String>> {
        values
            .iter()
            .map(|v| if v.is_empty() { None } else { Some((*v).to_string()) })
            .collect()
    }

    #[test]
    fn numeric_price_column_becomes_formatted_text() {
        let mut table = Table::new(vec![Column::numeric("preco", vec![Some(10.5), None])]).unwrap();
        let report = clean_table(&mut table, &CleanOptions::default());

        assert_eq!(
            table.columns()[0].data,
            ColumnData::Text(vec![Some("10.50".to_string()), None])
        );
        assert_eq!(report.columns[0].role, ColumnRole::Price);
        assert_eq!(report.columns[0].kind, ColumnKind::Text);
        assert_eq!(report.columns[0].changed_cells, 1);
    }

    #[test]
    fn unparseable_price_is_kept() {
        let mut table =
            Table::new(vec![Column::text("Preço", text(&["R$ 10,50", "sob consulta"]))]).unwrap();
        clean_table(&mut table, &CleanOptions::default());

        let column = &table.columns()[0];
        assert_eq!(column.name, "Preco");
        assert_eq!(column.data, ColumnData::Text(text(&["10.50", "sob consulta"])));
    }

    #[test]
    fn text_column_is_coerced_after_cleaning() {
        let mut table = Table::new(vec![Column::text("qtd", text(&["#1", "2 ", ""]))]).unwrap();
        let report = clean_table(&mut table, &CleanOptions::default());

        assert_eq!(
            table.columns()[0].data,
            ColumnData::Numeric(vec![Some(1.0), Some(2.0), None])
        );
        assert!(report.columns[0].coerced);
        assert_eq!(report.columns[0].empty_cells, 1);
    }

    #[test]
    fn numeric_columns_are_untouched() {
        let mut table = Table::new(vec![Column::numeric("idade", vec![Some(30.0)])]).unwrap();
        let report = clean_table(&mut table, &CleanOptions::default());
        assert_eq!(table.columns()[0].data, ColumnData::Numeric(vec![Some(30.0)]));
        assert_eq!(report.columns[0].changed_cells, 0);
    }

    #[test]
    fn cells_emptied_by_cleaning_become_empty() {
        let mut table = Table::new(vec![Column::text("obs", text(&["!!!", "ok"]))]).unwrap();
        clean_table(&mut table, &CleanOptions::default());
        assert_eq!(table.columns()[0].data, ColumnData::Text(vec![None, Some("ok".to_string())]));
    }

    #[test]
    fn date_columns_pass_through() {
        let date = chrono::NaiveDate::from_ymd_opt(2023, 7, 14)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let dates = ColumnData::DateTime(vec![Some(date), None]);
        let mut table = Table::new(vec![Column::new("Data de Entrega", dates.clone())]).unwrap();
        let report = clean_table(&mut table, &CleanOptions::default());

        assert_eq!(table.columns()[0].name, "Data de Entrega");
        assert_eq!(table.columns()[0].data, dates);
        assert_eq!(report.columns[0].kind, ColumnKind::DateTime);
        assert_eq!(report.columns[0].changed_cells, 0);
        assert_eq!(report.columns[0].empty_cells, 1);
    }
}
