//! Построение формул `=CIQ(...)` для одной строки таблицы.

use crate::model::{FormulaSet, PeriodMode, Separator};

pub const TICKER_MNEMONIC: &str = "IQ_COMPANY_TICKER";
pub const REVENUE_MNEMONIC: &str = "IQ_TOTAL_REV";
pub const EBIT_MNEMONIC: &str = "IQ_EBIT";
pub const EBITDA_MNEMONIC: &str = "IQ_EBITDA";

/// `=CIQ(<cell><s>"<mnemonic>"[<s><period>])`
pub fn ciq_formula(cell_ref: &str, mnemonic: &str, period: Option<&str>, sep: Separator) -> String {
    let s = sep.as_char();
    match period {
        Some(p) => format!("=CIQ({cell_ref}{s}\"{mnemonic}\"{s}{p})"),
        None => format!("=CIQ({cell_ref}{s}\"{mnemonic}\")"),
    }
}

/// Набор формул для строки `row` (1-based, как в Excel).
/// Ссылка на ячейку всегда `A<row>`; от имени компании формулы не зависят.
pub fn generate_formula_set(row: usize, mode: PeriodMode, sep: Separator) -> FormulaSet {
    let cell_ref = format!("A{row}");
    let period = mode.period_token();

    FormulaSet {
        ticker: ciq_formula(&cell_ref, TICKER_MNEMONIC, None, sep),
        revenue: ciq_formula(&cell_ref, REVENUE_MNEMONIC, period, sep),
        ebit: ciq_formula(&cell_ref, EBIT_MNEMONIC, period, sep),
        ebitda: ciq_formula(&cell_ref, EBITDA_MNEMONIC, period, sep),
    }
}
