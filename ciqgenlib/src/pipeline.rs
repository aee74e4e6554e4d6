//! Полный конвейер: текст или список имён → CSV-документ.

use crate::{
    config::GenerateOptions,
    formats::csv::{build_rows, serialize, LINE_SEPARATOR},
    model::{PeriodMode, Separator},
    normalize::{dedupe_names, normalize_names},
};

pub fn generate(raw: &str, mode: PeriodMode, sep: Separator, deduplicate: bool) -> String {
    let names = normalize_names(raw, deduplicate);
    serialize(&build_rows(&names, mode, sep))
}

/// Для уже разобранного списка (например, из загрузки) trim/фильтрация не выполняются.
pub fn generate_from_names(names: Vec<String>, mode: PeriodMode, sep: Separator, deduplicate: bool) -> String {
    let names = dedupe_names(names, deduplicate);
    serialize(&build_rows(&names, mode, sep))
}

pub fn generate_with(raw: &str, opts: &GenerateOptions) -> String {
    generate(raw, opts.mode, opts.separator, opts.deduplicate)
}

pub fn generate_from_names_with(names: Vec<String>, opts: &GenerateOptions) -> String {
    generate_from_names(names, opts.mode, opts.separator, opts.deduplicate)
}

/// Первые `n` строк документа (заголовок считается).
/// Ячейки с переводом строки внутри кавычек режутся как есть.
pub fn preview(doc: &str, n: usize) -> Vec<&str> {
    doc.split(LINE_SEPARATOR).take(n).collect()
}
