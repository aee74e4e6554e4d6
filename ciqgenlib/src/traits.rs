//! Трэйты чтения имён и записи выгрузки поверх std::io::{BufRead, Write}.

use crate::{
    error::Result,
    model::{NameList, RowRecord},
};
use std::io::{BufRead, Write};

pub trait ReadNames {
    fn read<R: BufRead>(r: R) -> Result<NameList>;
}

pub trait WriteRows {
    fn write<W: Write>(w: W, rows: &[RowRecord]) -> Result<()>;
}
