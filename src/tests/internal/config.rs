use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

use crate::ReportError;
use crate::auth::DEFAULT_REQUEST_TIMEOUT;
use crate::config::AppConfig;
use crate::tracker::DEFAULT_REMOVAL_DELAY;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn required_values_and_defaults() {
    let config = AppConfig::from_lookup(lookup(&[
        ("REPORT_API_URL", "http://reports.local/api"),
        ("REPORT_API_KEY", "secret"),
    ]))
    .unwrap();

    assert_eq!(config.base_url, "http://reports.local/api");
    assert_eq!(config.request_timeout, DEFAULT_REQUEST_TIMEOUT);
    assert_eq!(config.removal_delay, DEFAULT_REMOVAL_DELAY);
    assert!(!format!("{config:?}").contains("secret"));
}

#[test]
fn optional_values_are_parsed() {
    let config = AppConfig::from_lookup(lookup(&[
        ("REPORT_API_URL", "http://reports.local/"),
        ("REPORT_API_KEY", "secret"),
        ("REQUEST_TIMEOUT", "12.5"),
        ("TASK_REMOVAL_DELAY", "1"),
        ("REPORT_OUTPUT_DIR", "/tmp/reports"),
    ]))
    .unwrap();

    assert_eq!(config.request_timeout, Duration::from_millis(12_500));
    assert_eq!(config.tracker_config().removal_delay, Duration::from_secs(1));
    assert_eq!(config.output_dir, PathBuf::from("/tmp/reports"));
}

#[test]
fn missing_required_value() {
    let err = AppConfig::from_lookup(lookup(&[("REPORT_API_URL", "http://x/"), ("REPORT_API_KEY", "  ")]))
        .unwrap_err();
    assert!(matches!(err, ReportError::MissingConfig("REPORT_API_KEY")));
}

#[test]
fn invalid_number() {
    let err = AppConfig::from_lookup(lookup(&[
        ("REPORT_API_URL", "http://x/"),
        ("REPORT_API_KEY", "k"),
        ("REQUEST_TIMEOUT", "-3"),
    ]))
    .unwrap_err();
    assert!(matches!(err, ReportError::InvalidConfig { key: "REQUEST_TIMEOUT", .. }));
}

#[test]
fn auth_is_built_from_config() {
    let config = AppConfig::from_lookup(lookup(&[
        ("REPORT_API_URL", "http://reports.local/api"),
        ("REPORT_API_KEY", "secret"),
    ]))
    .unwrap();

    let auth = config.build_auth().unwrap();
    assert_eq!(auth.base_url.as_str(), "http://reports.local/api/");
    assert_eq!(auth.report_url("invitro").as_str(), "http://reports.local/api/report/invitro");
    assert!(!format!("{auth:?}").contains("secret"));
}

#[test]
fn invalid_base_url_and_key() {
    let config = AppConfig::from_lookup(lookup(&[
        ("REPORT_API_URL", "not a url"),
        ("REPORT_API_KEY", "k"),
    ]))
    .unwrap();
    assert!(matches!(config.build_auth(), Err(ReportError::InvalidBaseUrl(_))));

    let config = AppConfig::from_lookup(lookup(&[
        ("REPORT_API_URL", "http://x/"),
        ("REPORT_API_KEY", "bad\nkey"),
    ]))
    .unwrap();
    assert!(matches!(config.build_auth(), Err(ReportError::InvalidApiKey)));
}
