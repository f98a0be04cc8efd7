use chrono::NaiveDate;

use crate::ReportError;
use crate::report::{DateRange, catalog, find_report, parse_date};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn catalog_contains_both_reports() {
    let ids: Vec<_> = catalog().iter().map(|r| r.id).collect();
    assert_eq!(ids, ["32430", "invitro"]);
}

#[test]
fn find_report_by_id() {
    let report = find_report("invitro").unwrap();
    assert_eq!(report.default_filename(), "report_invitro.xlsx");

    assert!(matches!(find_report("nope"), Err(ReportError::UnknownReport(id)) if id == "nope"));
}

#[test]
fn parse_accepts_both_formats() {
    assert_eq!(parse_date("2025-11-27").unwrap(), date(2025, 11, 27));
    assert_eq!(parse_date(" 27.11.2025 ").unwrap(), date(2025, 11, 27));
    assert!(matches!(parse_date("27/11/2025"), Err(ReportError::InvalidDate(_))));
    assert!(matches!(parse_date("2025-02-30"), Err(ReportError::InvalidDate(_))));
}

#[test]
fn query_uses_wire_format() {
    let range = DateRange::parse("2025-11-01", "2025-11-27").unwrap();
    let [(k1, v1), (k2, v2)] = range.query_pairs();
    assert_eq!((k1, v1.as_str()), ("start_date", "01.11.2025"));
    assert_eq!((k2, v2.as_str()), ("end_date", "27.11.2025"));
}

#[test]
fn single_day_range_is_valid() {
    let range = DateRange::new(date(2025, 11, 13), date(2025, 11, 13)).unwrap();
    assert_eq!(range.start(), range.end());
    assert_eq!(DateRange::today().start(), DateRange::today().end());
}

#[test]
fn reversed_range_is_rejected() {
    let err = DateRange::parse("2025-11-27", "2025-11-01").unwrap_err();
    assert!(matches!(
        err,
        ReportError::InvalidDateRange { ref start, ref end } if start == "27.11.2025" && end == "01.11.2025"
    ));
}
