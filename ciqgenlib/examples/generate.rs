use ciqgenlib::{
    formats::{csv::CiqCsv, text::PlainText},
    normalize::dedupe_names,
    build_rows,
    traits::{ReadNames, WriteRows},
    PeriodMode, Separator,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Пример: список компаний из stdin -> CSV с формулами в stdout
    let list = PlainText::read(std::io::BufReader::new(std::io::stdin()))?;
    let names = dedupe_names(list.names, true);
    let rows = build_rows(&names, PeriodMode::LatestFiscalYear, Separator::Semicolon);
    CiqCsv::write(std::io::stdout(), &rows)?;
    Ok(())
}
