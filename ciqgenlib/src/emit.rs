//! Запись готового документа: UTF-8 с BOM, чтобы Excel верно определил кодировку.

use crate::error::Result;
use chrono::NaiveDate;
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};
use tracing::info;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";
pub const CSV_MIME: &str = "text/csv";
pub const CSV_EXTENSION: &str = "csv";

pub fn write_document<W: Write>(mut w: W, doc: &str, with_bom: bool) -> Result<()> {
    if with_bom {
        w.write_all(UTF8_BOM)?;
    }
    w.write_all(doc.as_bytes())?;
    w.flush()?;
    Ok(())
}

/// Создаёт (перезаписывает) файл и пишет BOM + документ.
pub fn save<P: AsRef<Path>>(path: P, doc: &str) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    write_document(BufWriter::new(file), doc, true)?;
    info!(path = %path.display(), bytes = doc.len() + UTF8_BOM.len(), "document saved");
    Ok(())
}

/// `ciq_formulas_2025-10-01.csv`
pub fn default_file_name(date: NaiveDate) -> String {
    format!("ciq_formulas_{}.{CSV_EXTENSION}", date.format("%Y-%m-%d"))
}
