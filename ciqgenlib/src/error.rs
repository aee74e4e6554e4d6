//! Единый тип ошибок публичного API.
//!
//! Ядро (формулы, нормализация, сборка CSV) ошибок не возвращает;
//! `Result` нужен только на границе ввода-вывода.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CiqError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, CiqError>;
