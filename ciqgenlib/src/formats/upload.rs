//! Загруженная таблица: ищем колонку `companyname`, иначе берём первую.
//!
//! Заголовок сравнивается без учёта регистра, пробелов, `_` и `-`,
//! так что подходят `Company Name`, `company_name`, `COMPANY-NAME`.
//! Разделитель колонок определяется по первым строкам (`,` `;` tab `|`).

use crate::{
    error::Result,
    formats::text::{read_utf8, BOM},
    model::NameList,
};
use csv::ReaderBuilder;
use std::io::BufRead;
use tracing::debug;

const TARGET_HEADER: &str = "companyname";
const DELIMITER_CANDIDATES: [u8; 4] = [b',', b';', b'\t', b'|'];
const SAMPLE_LINES: usize = 10;

fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Побеждает кандидат с наибольшим `avg / (1 + stddev)` числа вхождений на строку.
fn detect_delimiter(content: &str) -> u8 {
    let sample: Vec<&str> = content.lines().take(SAMPLE_LINES).collect();
    if sample.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0.0f64;
    for &delimiter in &DELIMITER_CANDIDATES {
        let counts: Vec<f64> = sample
            .iter()
            .map(|line| line.bytes().filter(|&b| b == delimiter).count() as f64)
            .collect();
        let n = counts.len() as f64;
        let avg = counts.iter().sum::<f64>() / n;
        let variance = counts.iter().map(|c| (c - avg).powi(2)).sum::<f64>() / n;
        let score = avg / (1.0 + variance.sqrt());
        if score > best_score {
            best_score = score;
            best = delimiter;
        }
    }
    best
}

/// Извлекает имена компаний из табличного текста. Дедупликация не выполняется.
pub fn extract_company_names(content: &str) -> Result<NameList> {
    let content = content.strip_prefix(BOM).unwrap_or(content);
    if content.trim().is_empty() {
        return Ok(NameList::default());
    }

    let delimiter = detect_delimiter(content);
    let mut rdr = ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = rdr.headers()?.clone();
    let (column, warning) = match headers
        .iter()
        .position(|h| normalize_header(h) == TARGET_HEADER)
    {
        Some(idx) => (idx, None),
        None => {
            let first = headers.get(0).unwrap_or("").trim();
            let msg = format!("No \"{TARGET_HEADER}\" column found; using first column \"{first}\".");
            (0, Some(msg))
        }
    };
    debug!(column, delimiter = %(delimiter as char), "company column selected");

    let mut names = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        if let Some(cell) = rec.get(column).map(str::trim) {
            if !cell.is_empty() {
                names.push(cell.to_owned());
            }
        }
    }

    Ok(NameList { names, warning })
}

pub struct UploadTable;

impl crate::traits::ReadNames for UploadTable {
    fn read<R: BufRead>(r: R) -> Result<NameList> {
        let text = read_utf8(r)?;
        extract_company_names(&text)
    }
}
