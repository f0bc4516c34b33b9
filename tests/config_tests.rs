// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use finpulse::config::{load_from, save_to, Settings};

#[test]
fn missing_file_gives_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let s = load_from(&dir.path().join("config.json")).unwrap();
    assert_eq!(s, Settings::default());
    assert_eq!(s.page_size, 10);
    assert_eq!(s.analytics_page_size, 100);
    assert_eq!(s.default_sort, vec!["date,desc".to_string()]);
}

#[test]
fn save_then_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.json");
    let s = Settings {
        base_url: "https://finance.example.com/".into(),
        page_size: 25,
        ..Settings::default()
    };
    save_to(&s, &path).unwrap();
    assert_eq!(load_from(&path).unwrap(), s);

    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(!raw.contains("token"));
}

#[test]
fn partial_file_fills_in_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, r#"{"page_size": 7}"#).unwrap();
    let s = load_from(&path).unwrap();
    assert_eq!(s.page_size, 7);
    assert_eq!(s.base_url, Settings::default().base_url);
}

#[test]
fn malformed_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.json");
    std::fs::write(&path, "{not json").unwrap();
    assert!(load_from(&path).is_err());
}
