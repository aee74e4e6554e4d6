//! Параметры генерации и их загрузка из TOML.
//!
//! ```toml
//! mode = "latest-twelve-months"
//! separator = "comma"
//! deduplicate = false
//! ```

use crate::{
    error::Result,
    model::{PeriodMode, Separator},
};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenerateOptions {
    pub mode: PeriodMode,
    pub separator: Separator,
    pub deduplicate: bool,
    /// Напоминание пользователю о трактовке ввода как идентификаторов.
    /// На результат не влияет.
    pub treat_as_identifier: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            mode: PeriodMode::default(),
            separator: Separator::default(),
            deduplicate: true,
            treat_as_identifier: false,
        }
    }
}

impl GenerateOptions {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }
}
