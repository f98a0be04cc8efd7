use crate::downloader::{filename_from_content_disposition, sanitize_filename};

#[test]
fn bare_filename() {
    let header = "attachment; filename=report_32430_13.11.2025-13.11.2025.xlsx";
    assert_eq!(
        filename_from_content_disposition(header).as_deref(),
        Some("report_32430_13.11.2025-13.11.2025.xlsx")
    );
}

#[test]
fn quoted_filename_with_semicolon() {
    let header = r#"attachment; filename="a; b \"c\".xlsx"; size=10"#;
    assert_eq!(
        filename_from_content_disposition(header).as_deref(),
        Some(r#"a; b "c".xlsx"#)
    );
}

#[test]
fn bare_filename_stops_at_next_param() {
    let header = "attachment; filename=invitro.xlsx; size=3";
    assert_eq!(
        filename_from_content_disposition(header).as_deref(),
        Some("invitro.xlsx")
    );
}

#[test]
fn extended_filename_is_preferred() {
    let header = "attachment; filename=fallback.xlsx; filename*=UTF-8''%D0%BE%D1%82%D1%87%D0%B5%D1%82.xlsx";
    assert_eq!(
        filename_from_content_disposition(header).as_deref(),
        Some("отчет.xlsx")
    );
}

#[test]
fn broken_extended_filename_falls_back_to_plain() {
    let header = "attachment; filename*=garbage; filename=plain.xlsx";
    assert_eq!(
        filename_from_content_disposition(header).as_deref(),
        Some("plain.xlsx")
    );
}

#[test]
fn missing_filename() {
    assert_eq!(filename_from_content_disposition("attachment"), None);
    assert_eq!(filename_from_content_disposition("attachment; filename="), None);
    assert_eq!(filename_from_content_disposition(r#"attachment; filename="""#), None);
}

#[test]
fn path_components_are_stripped() {
    assert_eq!(
        filename_from_content_disposition("attachment; filename=../../etc/passwd").as_deref(),
        Some("passwd")
    );
    assert_eq!(sanitize_filename(r"C:\tmp\a.xlsx").as_deref(), Some("a.xlsx"));
    assert_eq!(sanitize_filename("dir/.."), None);
    assert_eq!(sanitize_filename("/"), None);
}
