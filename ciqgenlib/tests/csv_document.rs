use ciqgenlib::{
    build_rows, escape_cell, generate, generate_from_names,
    formats::csv::CiqCsv,
    pipeline::preview,
    serialize,
    traits::WriteRows,
    PeriodMode, Separator,
};
use csv::ReaderBuilder;

const HEADER: &str = "companyname;capital_iq_ticker;revenue_latest;ebit_latest;ebitda_latest";

fn parse_single_cell(escaped: &str) -> String {
    let mut rdr = ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .from_reader(escaped.as_bytes());
    let rec = rdr.records().next().expect("one record").expect("valid csv");
    assert_eq!(rec.len(), 1, "cell split into several fields: {escaped:?}");
    rec[0].to_string()
}

#[test]
fn single_company_fiscal_year() {
    let rows = build_rows(&["Apple Inc.".to_string()], PeriodMode::LatestFiscalYear, Separator::Semicolon);
    let expected = format!(
        "{HEADER}\r\n{}",
        r#"Apple Inc.;"=CIQ(A2;""IQ_COMPANY_TICKER"")";"=CIQ(A2;""IQ_TOTAL_REV"";IQ_FY)";"=CIQ(A2;""IQ_EBIT"";IQ_FY)";"=CIQ(A2;""IQ_EBITDA"";IQ_FY)""#
    );
    assert_eq!(serialize(&rows), expected);
}

#[test]
fn empty_input_is_header_only() {
    assert_eq!(serialize(&[]), HEADER);
    assert_eq!(generate("", PeriodMode::LatestFiscalYear, Separator::Comma, true), HEADER);
    assert_eq!(generate("\n  \r\n", PeriodMode::LatestTwelveMonths, Separator::Semicolon, false), HEADER);
    assert_eq!(generate_from_names(Vec::new(), PeriodMode::LatestFiscalYear, Separator::Semicolon, true), HEADER);
}

#[test]
fn dedupe_leaves_one_data_line() {
    let doc = generate("Apple\nApple\napple", PeriodMode::LatestFiscalYear, Separator::Comma, true);
    let lines: Vec<&str> = doc.split("\r\n").collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], HEADER);
    assert!(lines[1].starts_with(r#"Apple;"=CIQ(A2,""IQ_COMPANY_TICKER"")""#), "{}", lines[1]);
}

#[test]
fn two_hundred_names_two_hundred_one_lines() {
    let raw: String = (1..=200).map(|i| format!("Company {i}\n")).collect();
    let doc = generate(&raw, PeriodMode::LatestFiscalQuarter, Separator::Semicolon, true);
    let lines: Vec<&str> = doc.split("\r\n").collect();
    assert_eq!(lines.len(), 201);
    assert!(lines[200].starts_with(r#"Company 200;"=CIQ(A201;"#));
    assert!(!doc.ends_with("\r\n"));
}

#[test]
fn row_numbers_follow_position() {
    let names: Vec<String> = ["b", "a", "b", "c"].iter().map(|s| s.to_string()).collect();
    let rows = build_rows(&names, PeriodMode::LatestTwelveMonths, Separator::Comma);
    assert_eq!(rows.len(), names.len());
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.excel_row, i + 2);
        assert_eq!(row.company_name, names[i]);
        assert_eq!(row.formulas.revenue, format!(r#"=CIQ(A{},"IQ_TOTAL_REV")"#, i + 2));
    }
}

#[test]
fn formulas_do_not_depend_on_name() {
    let a = build_rows(&["x".to_string()], PeriodMode::LatestFiscalYear, Separator::Semicolon);
    let b = build_rows(&["=evil;\"name\"".to_string()], PeriodMode::LatestFiscalYear, Separator::Semicolon);
    assert_eq!(a[0].formulas, b[0].formulas);
}

#[test]
fn plain_cells_pass_through() {
    assert_eq!(escape_cell("Apple Inc."), "Apple Inc.");
    assert_eq!(escape_cell("Procter, Gamble"), "Procter, Gamble");
    assert_eq!(escape_cell(""), "");
    assert_eq!(escape_cell("a=b"), "a=b");
}

#[test]
fn quoting_triggers() {
    assert_eq!(escape_cell("=SUM(A1)"), "\"=SUM(A1)\"");
    assert_eq!(escape_cell("H&M;AB"), "\"H&M;AB\"");
    assert_eq!(escape_cell(r#"The "Best" Co"#), r#""The ""Best"" Co""#);
    assert_eq!(escape_cell("line\nbreak"), "\"line\nbreak\"");
    assert_eq!(escape_cell("cr\ronly"), "\"cr\ronly\"");
}

#[test]
fn escaping_round_trips_through_csv_reader() {
    let cases = [
        "Apple Inc.",
        "=CIQ(A2;\"IQ_EBIT\";IQ_FY)",
        "a;b;;c",
        "\"",
        "\"\"",
        "quote \" in middle",
        "multi\r\nline\ncell",
        "=",
        "  spaced  ",
        "Société Générale",
        "trailing;",
    ];
    for s in cases {
        assert_eq!(parse_single_cell(&escape_cell(s)), s, "round trip of {s:?}");
    }
}

#[test]
fn adversarial_names_keep_five_columns() {
    let names = vec![
        "Evil;Corp".to_string(),
        "=HYPERLINK(\"x\")".to_string(),
        "Two\nLines".to_string(),
    ];
    let doc = serialize(&build_rows(&names, PeriodMode::LatestFiscalYear, Separator::Comma));
    let mut rdr = ReaderBuilder::new().delimiter(b';').from_reader(doc.as_bytes());
    assert_eq!(rdr.headers().unwrap().len(), 5);
    let recs: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(recs.len(), 3);
    for (rec, name) in recs.iter().zip(&names) {
        assert_eq!(rec.len(), 5);
        assert_eq!(&rec[0], name.as_str());
    }
    assert_eq!(&recs[2][2], r#"=CIQ(A4,"IQ_TOTAL_REV",IQ_FY)"#);
}

#[test]
fn writer_emits_serialized_document() {
    let rows = build_rows(&["Nokia".to_string()], PeriodMode::LatestFiscalQuarter, Separator::Semicolon);
    let mut out = Vec::new();
    CiqCsv::write(&mut out, &rows).expect("write csv");
    assert_eq!(String::from_utf8(out).unwrap(), serialize(&rows));
}

#[test]
fn preview_takes_leading_lines() {
    let doc = generate("A\nB\nC", PeriodMode::LatestFiscalYear, Separator::Semicolon, false);
    let head = preview(&doc, 2);
    assert_eq!(head.len(), 2);
    assert_eq!(head[0], HEADER);
    assert!(head[1].starts_with("A;"));
    assert_eq!(preview(&doc, 10).len(), 4);
}
