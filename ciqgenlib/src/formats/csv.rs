//! Итоговый CSV: колонки через `;`, строки через CRLF, без завершающего перевода строки.
//! companyname;capital_iq_ticker;revenue_latest;ebit_latest;ebitda_latest

use crate::{
    error::Result,
    formula::generate_formula_set,
    model::{PeriodMode, RowRecord, Separator},
};
use std::io::Write;

pub const COLUMN_DELIMITER: &str = ";";
pub const LINE_SEPARATOR: &str = "\r\n";
pub const HEADER: [&str; 5] = [
    "companyname",
    "capital_iq_ticker",
    "revenue_latest",
    "ebit_latest",
    "ebitda_latest",
];

/// Строки таблицы: имя с позицией `i` получает номер строки Excel `i + 2`.
pub fn build_rows(names: &[String], mode: PeriodMode, sep: Separator) -> Vec<RowRecord> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let excel_row = i + 2;
            RowRecord {
                excel_row,
                company_name: name.clone(),
                formulas: generate_formula_set(excel_row, mode, sep),
            }
        })
        .collect()
}

fn needs_quotes(cell: &str) -> bool {
    // ведущий `=` без кавычек Excel при импорте может съесть
    cell.starts_with('=')
        || cell.contains(COLUMN_DELIMITER)
        || cell.contains('"')
        || cell.contains('\n')
        || cell.contains('\r')
}

pub fn escape_cell(cell: &str) -> String {
    if needs_quotes(cell) {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_owned()
    }
}

fn join_line<'a>(cells: impl IntoIterator<Item = &'a str>) -> String {
    cells
        .into_iter()
        .map(escape_cell)
        .collect::<Vec<_>>()
        .join(COLUMN_DELIMITER)
}

/// Заголовок и строки данных, склеенные через CRLF.
pub fn serialize(rows: &[RowRecord]) -> String {
    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(join_line(HEADER));
    lines.extend(rows.iter().map(|row| join_line(row.cells())));
    lines.join(LINE_SEPARATOR)
}

pub struct CiqCsv;

impl crate::traits::WriteRows for CiqCsv {
    fn write<W: Write>(mut w: W, rows: &[RowRecord]) -> Result<()> {
        w.write_all(serialize(rows).as_bytes())?;
        w.flush()?;
        Ok(())
    }
}
