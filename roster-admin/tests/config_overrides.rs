//! Settings file and environment override tests

use std::collections::HashMap;
use std::num::NonZeroUsize;

use roster_admin::infra::config::{Config, DEFAULT_SOURCE_URL};
use roster_core::{
    EmptySelectionPolicy, ListConfig, PagePolicy, SearchTrigger, SelectAllScope,
};

fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let vars: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| vars.get(key).cloned()
}

#[test]
fn defaults_without_file_or_env() {
    let config = Config::load_from(None, env(&[]));
    assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    assert_eq!(config.list, ListConfig::default());
    assert_eq!(config.list.page_size.get(), 15);
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.json");
    assert_eq!(Config::load_from(Some(&path), env(&[])), Config::default());
}

#[test]
fn save_then_load_keeps_settings() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("roster-admin").join("config.json");

    let mut config = Config::default();
    config.source_url = "http://localhost:8080/members.json".into();
    config.list = ListConfig::default()
        .with_page_size(25)
        .expect("non-zero")
        .with_page_policy(PagePolicy::Reject)
        .with_search_trigger(SearchTrigger::Submit);
    config.save_to(&path).expect("save");

    assert_eq!(Config::load_from(Some(&path), env(&[])), config);
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"list":{"page_size":5,"select_all_scope":"page"}}"#)
        .expect("write");

    let config = Config::load_from(Some(&path), env(&[]));
    assert_eq!(config.source_url, DEFAULT_SOURCE_URL);
    assert_eq!(config.list.page_size, NonZeroUsize::new(5).expect("five"));
    assert_eq!(config.list.select_all_scope, SelectAllScope::Page);
    assert_eq!(config.list.page_policy, PagePolicy::Clamp);
}

#[test]
fn malformed_file_is_ignored() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, "not json").expect("write");

    assert_eq!(Config::load_from(Some(&path), env(&[])), Config::default());
}

#[test]
fn environment_overrides_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"source_url":"http://file/members.json"}"#).expect("write");

    let config = Config::load_from(
        Some(&path),
        env(&[
            ("ROSTER_SOURCE_URL", "http://env/members.json"),
            ("ROSTER_PAGE_SIZE", "10"),
            ("ROSTER_PAGE_POLICY", "reject"),
            ("ROSTER_SELECT_ALL", "Everything"),
            ("ROSTER_EMPTY_SELECTION", "ignore"),
            ("ROSTER_SEARCH_TRIGGER", " submit "),
        ]),
    );

    assert_eq!(config.source_url, "http://env/members.json");
    assert_eq!(config.list.page_size.get(), 10);
    assert_eq!(config.list.page_policy, PagePolicy::Reject);
    assert_eq!(config.list.select_all_scope, SelectAllScope::Everything);
    assert_eq!(config.list.empty_selection, EmptySelectionPolicy::Ignore);
    assert_eq!(config.list.search_trigger, SearchTrigger::Submit);
}

#[test]
fn invalid_overrides_keep_previous_values() {
    let config = Config::load_from(
        None,
        env(&[
            ("ROSTER_SOURCE_URL", "   "),
            ("ROSTER_PAGE_SIZE", "0"),
            ("ROSTER_PAGE_POLICY", "wrap"),
            ("ROSTER_SELECT_ALL", "some"),
        ]),
    );

    assert_eq!(config, Config::default());
}

#[test]
fn non_numeric_page_size_is_ignored() {
    let config = Config::load_from(None, env(&[("ROSTER_PAGE_SIZE", "lots")]));
    assert_eq!(config.list.page_size.get(), 15);
}
