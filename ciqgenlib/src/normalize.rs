//! Нормализация списка компаний: разбиение на строки, trim, дедупликация.

use std::collections::HashSet;

/// Разбивает текст по `\n` / `\r\n`, обрезает пробелы, отбрасывает пустые строки
/// и при `deduplicate` оставляет первое вхождение каждого имени (без учёта регистра).
pub fn normalize_names(raw: &str, deduplicate: bool) -> Vec<String> {
    let names = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect();

    dedupe_names(names, deduplicate)
}

/// Дедупликация уже готового списка (например, из загруженного файла).
/// Сравнение по нижнему регистру, порядок и написание первого вхождения сохраняются.
pub fn dedupe_names(names: Vec<String>, deduplicate: bool) -> Vec<String> {
    if !deduplicate {
        return names;
    }

    let mut seen = HashSet::with_capacity(names.len());
    names
        .into_iter()
        .filter(|name| seen.insert(name.to_lowercase()))
        .collect()
}
