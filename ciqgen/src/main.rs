use ciqgenlib::{
    emit,
    error::Result,
    formats::{text::PlainText, upload::UploadTable},
    model::{PeriodMode, Separator},
    pipeline::{generate_from_names_with, preview},
    traits::ReadNames,
    GenerateOptions,
};
use clap::{Parser, ValueEnum};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Mode {
    LatestFiscalYear,
    LatestFiscalQuarter,
    LatestTwelveMonths,
}

impl From<Mode> for PeriodMode {
    fn from(m: Mode) -> Self {
        match m {
            Mode::LatestFiscalYear => PeriodMode::LatestFiscalYear,
            Mode::LatestFiscalQuarter => PeriodMode::LatestFiscalQuarter,
            Mode::LatestTwelveMonths => PeriodMode::LatestTwelveMonths,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum Sep {
    Semicolon,
    Comma,
}

impl From<Sep> for Separator {
    fn from(s: Sep) -> Self {
        match s {
            Sep::Semicolon => Separator::Semicolon,
            Sep::Comma => Separator::Comma,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "ciqgen", version, about = "CSV с формулами CIQ по списку компаний")]
struct Cli {
    /// Входной файл (по умолчанию stdin)
    #[arg(short = 'i', long = "input")]
    input: Option<String>,

    /// Выходной файл с BOM (по умолчанию stdout без BOM)
    #[arg(short = 'o', long = "output")]
    output: Option<String>,

    /// Писать в файл с именем по текущей дате
    #[arg(long = "auto-name", conflicts_with = "output")]
    auto_name: bool,

    /// Вход — таблица; имена берутся из колонки companyname
    #[arg(long = "upload")]
    upload: bool,

    /// TOML с параметрами генерации
    #[arg(long = "config")]
    config: Option<String>,

    /// Период
    #[arg(long = "mode", value_enum)]
    mode: Option<Mode>,

    /// Разделитель аргументов внутри формулы
    #[arg(long = "separator", value_enum)]
    separator: Option<Sep>,

    /// Не удалять дубликаты
    #[arg(long = "no-dedupe")]
    no_dedupe: bool,

    /// Ввод — идентификаторы компаний (на результат не влияет)
    #[arg(long = "as-identifier")]
    as_identifier: bool,

    /// Показать первые N строк результата в stderr
    #[arg(long = "preview", value_name = "N")]
    preview: Option<usize>,

    /// Подробный лог
    #[arg(short = 'v', long = "verbose")]
    verbose: bool,
}

impl Cli {
    fn options(&self) -> Result<GenerateOptions> {
        let mut opts = match &self.config {
            Some(path) => GenerateOptions::load(path)?,
            None => GenerateOptions::default(),
        };
        if let Some(m) = self.mode {
            opts.mode = m.into();
        }
        if let Some(s) = self.separator {
            opts.separator = s.into();
        }
        if self.no_dedupe {
            opts.deduplicate = false;
        }
        if self.as_identifier {
            opts.treat_as_identifier = true;
        }
        Ok(opts)
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let opts = cli.options()?;
    debug!(?opts, "options resolved");

    // reader
    let reader: Box<dyn io::Read> = match &cli.input {
        Some(path) => Box::new(File::open(path)?),
        None => Box::new(io::stdin()),
    };
    let br = BufReader::new(reader);

    let list = if cli.upload {
        UploadTable::read(br)
    } else {
        PlainText::read(br)
    }?;
    if let Some(w) = &list.warning {
        warn!("{w}");
    }

    let doc = generate_from_names_with(list.names, &opts);
    info!(lines = doc.split("\r\n").count(), "document generated");

    if let Some(n) = cli.preview {
        for line in preview(&doc, n) {
            eprintln!("{line}");
        }
    }

    // writer
    let output = match &cli.output {
        Some(path) => Some(path.clone()),
        None if cli.auto_name => Some(emit::default_file_name(chrono::Local::now().date_naive())),
        None => None,
    };
    match output {
        Some(path) => emit::save(&path, &doc),
        None => emit::write_document(io::stdout().lock(), &doc, false),
    }
}
