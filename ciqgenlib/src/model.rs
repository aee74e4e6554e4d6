//! Доменные модели: режим периода, разделитель аргументов, строки выгрузки.

use serde::{Deserialize, Serialize};

/// За какой период надстройка должна вернуть значения.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum PeriodMode {
    #[default]
    LatestFiscalYear,
    LatestFiscalQuarter,
    LatestTwelveMonths,
}

impl PeriodMode {
    /// Третий аргумент формулы; для LTM его нет.
    pub fn period_token(self) -> Option<&'static str> {
        match self {
            PeriodMode::LatestFiscalYear => Some("IQ_FY"),
            PeriodMode::LatestFiscalQuarter => Some("IQ_FQ"),
            PeriodMode::LatestTwelveMonths => None,
        }
    }
}

/// Разделитель аргументов внутри формулы (зависит от локали Excel).
/// С разделителем колонок CSV не связан: тот всегда `;`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Separator {
    #[default]
    Semicolon,
    Comma,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Semicolon => ';',
            Separator::Comma => ',',
        }
    }
}

/// Четыре формулы одной строки таблицы.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormulaSet {
    pub ticker: String,
    pub revenue: String,
    pub ebit: String,
    pub ebitda: String,
}

/// Строка выгрузки: компания и её формулы, привязанные к номеру строки Excel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RowRecord {
    /// Номер строки в Excel, начиная с 2 (первая строка занята заголовком).
    pub excel_row: usize,
    pub company_name: String,
    pub formulas: FormulaSet,
}

impl RowRecord {
    /// Ячейки в порядке колонок заголовка.
    pub fn cells(&self) -> [&str; 5] {
        [
            self.company_name.as_str(),
            self.formulas.ticker.as_str(),
            self.formulas.revenue.as_str(),
            self.formulas.ebit.as_str(),
            self.formulas.ebitda.as_str(),
        ]
    }
}

/// Результат чтения имён из внешнего источника.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameList {
    pub names: Vec<String>,
    /// Предупреждение для пользователя (например, колонка не найдена).
    pub warning: Option<String>,
}
