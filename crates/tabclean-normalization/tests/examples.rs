//! Table-level cleaning of representative inputs.

use tabclean_model::{CleaningProfile, Column, ColumnKind, ColumnRole, Table};
use tabclean_normalization::{CellContext, CleanOptions, clean_table, clean_value};

fn cells(values: &[&str]) -> Vec<Option<String>> {
    values
        .iter()
        .map(|v| if v.is_empty() { None } else { Some((*v).to_string()) })
        .collect()
}

fn render(table: &Table) -> String {
    let mut lines = vec![table.column_names().join(" | ")];
    for row in table.text_rows() {
        let row: Vec<String> = row
            .into_iter()
            .map(|cell| cell.unwrap_or_else(|| "-".to_string()))
            .collect();
        lines.push(row.join(" | "));
    }
    lines.join("\n")
}

fn customer_table() -> Table {
    Table::new(vec![
        Column::text("Nome", cells(&["São   Paulo", "SÃ£o Paulo", "#!?"])),
        Column::text("Preço", cells(&["R$ 10,50", "1.234,5", "sob consulta"])),
        Column::text(
            "descrição",
            cells(&["Produto#1 (10x20cm)!!", "Caixa 10 X 20", ""]),
        ),
        Column::text("qtd", cells(&["1", " 2 ", "3"])),
    ])
    .unwrap()
}

#[test]
fn cleans_a_general_table() {
    let mut table = customer_table();
    let report = clean_table(&mut table, &CleanOptions::new(CleaningProfile::General));

    insta::assert_snapshot!(render(&table), @r"
    Nome | Preco | descricao | qtd
    Sao Paulo | 10.50 | Produto1 10x20cm | 1
    Sao Paulo | 1234.50 | Caixa 10 X 20 | 2
    #!? | sob consulta | - | 3
    ");

    let roles: Vec<ColumnRole> = report.columns.iter().map(|c| c.role).collect();
    assert_eq!(
        roles,
        [
            ColumnRole::Identifier,
            ColumnRole::Price,
            ColumnRole::Text,
            ColumnRole::Text
        ]
    );
    assert_eq!(report.columns[1].kind, ColumnKind::Text);
    assert_eq!(report.columns[3].kind, ColumnKind::Numeric);
    assert_eq!(report.coerced_columns(), 1);
    assert_eq!(report.rows, 3);
}

#[test]
fn cleans_a_products_table() {
    let mut table = Table::new(vec![
        Column::text(
            "produto",
            cells(&["Caneta_Azul", "ProdutoNovo", "CAIXA_10x20", "Caixa 10 X 20"]),
        ),
        Column::text("sku", cells(&["cli_001", "AB-12", "ok_1", "#"])),
    ])
    .unwrap();
    let report = clean_table(&mut table, &CleanOptions::new(CleaningProfile::Products));

    insta::assert_snapshot!(render(&table), @r"
    produto | sku
    Caneta Azul | cli_001
    Produto Novo | AB12
    CAIXA_10x20 | ok_1
    Caixa 10x20 | #
    ");
    assert_eq!(report.profile, CleaningProfile::Products);
    assert_eq!(report.columns[0].changed_cells, 3);
    assert_eq!(report.columns[1].changed_cells, 1);
}

#[test]
fn measurement_columns_stay_text() {
    let mut table = Table::new(vec![Column::text("medida", cells(&["10x20", "30 x 40"]))]).unwrap();
    let report = clean_table(&mut table, &CleanOptions::new(CleaningProfile::Products));

    assert_eq!(report.columns[0].kind, ColumnKind::Text);
    assert!(!report.columns[0].coerced);
    assert_eq!(render(&table), "medida\n10x20\n30x40");
}

#[test]
fn documented_cell_examples() {
    let general = CellContext::new(CleaningProfile::General, ColumnRole::Text);
    assert_eq!(clean_value("São   Paulo", &general), "Sao Paulo");
    assert_eq!(clean_value("Produto#1 (10x20cm)!!", &general), "Produto1 10x20cm");

    let mut table = Table::new(vec![Column::text("price", cells(&["R$ 10,50"]))]).unwrap();
    clean_table(&mut table, &CleanOptions::default());
    assert_eq!(render(&table), "price\n10.50");
}
