//! ciqgenlib — генерация CSV с формулами Capital IQ (`=CIQ(...)`) по списку компаний.

pub mod config;
pub mod emit;
pub mod error;
pub mod formula;
pub mod model;
pub mod normalize;
pub mod pipeline;
pub mod traits;

pub mod formats {
    pub mod csv;
    pub mod text;
    pub mod upload;
}

pub use config::GenerateOptions;
pub use error::{CiqError, Result};
pub use formats::csv::{build_rows, escape_cell, serialize};
pub use formula::generate_formula_set;
pub use model::{FormulaSet, NameList, PeriodMode, RowRecord, Separator};
pub use normalize::{dedupe_names, normalize_names};
pub use pipeline::{generate, generate_from_names};
