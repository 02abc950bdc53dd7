use std::collections::HashMap;

use super::*;

fn lookup<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
    let map: HashMap<&str, &str> = pairs.iter().copied().collect();
    move |key| map.get(key).map(|v| (*v).to_owned())
}

// =============================================================
// Defaults and overrides
// =============================================================

#[test]
fn from_lookup_applies_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("FRAPPE_URL", "https://erp.school.test/")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.frappe_url, "https://erp.school.test");
    assert_eq!(cfg.tenant_name, "SchoolDesk");
    assert_eq!(cfg.proxy_timeout(), Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
    assert_eq!(cfg.search_debounce_ms, 300);
    assert_eq!(cfg.search_min_chars, 3);
    assert_eq!(cfg.page_size_options, vec![20, 50, 100, 1000]);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("FRAPPE_URL", "http://localhost:8000"),
        ("PORT", "8080"),
        ("TENANT_NAME", "Green Valley School"),
        ("PROXY_TIMEOUT_SECS", "5"),
        ("SEARCH_DEBOUNCE_MS", "1200"),
        ("SEARCH_MIN_CHARS", "2"),
        ("PAGE_SIZE_OPTIONS", "10, 25,50"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.tenant_name, "Green Valley School");
    assert_eq!(cfg.proxy_timeout_secs, 5);
    assert_eq!(cfg.search_debounce_ms, 1200);
    assert_eq!(cfg.search_min_chars, 2);
    assert_eq!(cfg.page_size_options, vec![10, 25, 50]);
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let cfg = ServerConfig::from_lookup(lookup(&[("FRAPPE_URL", "http://erp"), ("PORT", "  "), ("TENANT_NAME", "")]))
        .unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.tenant_name, "SchoolDesk");
}

// =============================================================
// Errors
// =============================================================

#[test]
fn missing_frappe_url_errors() {
    let err = ServerConfig::from_lookup(lookup(&[])).unwrap_err();
    assert_eq!(err, ConfigError::Missing { var: "FRAPPE_URL" });
}

#[test]
fn non_http_frappe_url_errors() {
    let err = ServerConfig::from_lookup(lookup(&[("FRAPPE_URL", "erp.school.test")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "FRAPPE_URL", .. }));
}

#[test]
fn malformed_number_errors_with_variable_name() {
    let err = ServerConfig::from_lookup(lookup(&[("FRAPPE_URL", "http://erp"), ("PORT", "eighty")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "PORT", ref value, .. } if value == "eighty"));
    assert!(err.to_string().starts_with("invalid PORT=\"eighty\""));
}

#[test]
fn page_sizes_must_be_positive_and_increasing() {
    for raw in ["0,20", "50,20", "20,20", "20,,50", "twenty"] {
        let err = ServerConfig::from_lookup(lookup(&[("FRAPPE_URL", "http://erp"), ("PAGE_SIZE_OPTIONS", raw)]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { var: "PAGE_SIZE_OPTIONS", .. }), "{raw}");
    }
}

// =============================================================
// Client projection
// =============================================================

#[test]
fn client_config_is_same_origin() {
    let cfg = ServerConfig::from_lookup(lookup(&[
        ("FRAPPE_URL", "https://erp.school.test"),
        ("TENANT_NAME", "Green Valley"),
        ("SEARCH_MIN_CHARS", "4"),
    ]))
    .unwrap();
    let client = cfg.to_client_config();
    assert_eq!(client.api_base_url, "");
    assert_eq!(client.tenant_name, "Green Valley");
    assert_eq!(client.search_min_chars, 4);
    assert_eq!(client.page_size_options, cfg.page_size_options);
    assert_eq!(ClientConfig::from_meta_content(&client.to_meta_content()), Ok(client));
}
