//! Свободный текст: одна компания на строку.

use crate::{
    error::{CiqError, Result},
    model::NameList,
    normalize::normalize_names,
};
use std::io::BufRead;

pub(crate) const BOM: char = '\u{feff}';

pub(crate) fn read_utf8<R: BufRead>(mut r: R) -> Result<String> {
    let mut buf = Vec::new();
    r.read_to_end(&mut buf)?;
    let text = String::from_utf8(buf).map_err(|e| CiqError::Parse(format!("input is not UTF-8: {e}")))?;
    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_owned(),
        None => text,
    })
}

pub struct PlainText;

impl crate::traits::ReadNames for PlainText {
    fn read<R: BufRead>(r: R) -> Result<NameList> {
        let text = read_utf8(r)?;
        // дедупликация — забота конвейера, здесь только trim и пустые строки
        Ok(NameList {
            names: normalize_names(&text, false),
            warning: None,
        })
    }
}
