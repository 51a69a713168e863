//! Loading `SortConfig` from files and environment variables.

use std::{fs, path::Path, sync::Mutex};

use multisort_config::{SortConfig, SortConfigSource};
use once_cell::sync::Lazy;
use serde_json::json;
use tempfile::tempdir;

static SERIAL: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

fn serial_guard() -> std::sync::MutexGuard<'static, ()> {
    SERIAL.lock().unwrap_or_else(|e| e.into_inner())
}

fn clear_overrides() {
    for key in ["MULTISORT_CONFIG_PATH", "MULTISORT_CONFIG_JSON"] {
        unsafe { std::env::remove_var(key) };
    }
}

fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent");
    }
    fs::write(path, contents).expect("write config");
}

#[test]
fn loads_toml_and_json_files_by_extension() {
    let dir = tempdir().expect("tempdir");

    let toml_path = dir.path().join("sort.toml");
    write(&toml_path, "criteria = [\"~fame\", \"name.last\"]\npretty = true\n");
    let config = SortConfig::load_from_file(&toml_path).expect("toml");
    assert_eq!(config.criteria, vec![json!("~fame"), json!("name.last")]);
    assert!(config.pretty);

    let json_path = dir.path().join("sort.json");
    write(&json_path, r#"{"criteria": [-1], "pointer": "/items"}"#);
    let config = SortConfig::load_from_file(&json_path).expect("json");
    assert_eq!(config.criteria, vec![json!(-1)]);
    assert_eq!(config.pointer.as_deref(), Some("/items"));
}

#[test]
fn unknown_extension_tries_both_formats() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("sortrc");
    write(&path, r#"{"criteria": ["id"]}"#);
    let config = SortConfig::load_from_file(&path).expect("json fallback");
    assert_eq!(config.criteria, vec![json!("id")]);
}

#[test]
fn invalid_file_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("broken.toml");
    write(&path, "criteria = [\n");
    let err = SortConfig::load_from_file(&path).expect_err("invalid toml");
    assert!(err.to_string().contains("broken.toml"));

    let missing = dir.path().join("nope.toml");
    let err = SortConfig::load_from_file(&missing).expect_err("missing file");
    assert!(err.to_string().contains("nope.toml"));
}

#[test]
fn default_files_are_searched_in_order() {
    let dir = tempdir().expect("tempdir");
    assert_eq!(SortConfig::find_default_file_in(dir.path()), None);

    write(&dir.path().join("config/multisort.json"), "{}");
    assert_eq!(
        SortConfig::find_default_file_in(dir.path()),
        Some(dir.path().join("config/multisort.json"))
    );

    write(&dir.path().join("multisort.json"), "{}");
    assert_eq!(
        SortConfig::find_default_file_in(dir.path()),
        Some(dir.path().join("multisort.json"))
    );

    write(&dir.path().join("multisort.toml"), "");
    assert_eq!(
        SortConfig::find_default_file_in(dir.path()),
        Some(dir.path().join("multisort.toml"))
    );
}

#[test]
fn env_path_takes_precedence_over_inline_json() {
    let _guard = serial_guard();
    clear_overrides();

    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("env.toml");
    write(&path, "criteria = [\"from_file\"]\n");

    unsafe {
        std::env::set_var("MULTISORT_CONFIG_PATH", &path);
        std::env::set_var("MULTISORT_CONFIG_JSON", r#"{"criteria": ["inline"]}"#);
    }
    let (config, source) = SortConfig::load_from_env().expect("load");
    clear_overrides();

    assert_eq!(config.criteria, vec![json!("from_file")]);
    assert_eq!(source, SortConfigSource::EnvPath(path));
}

#[test]
fn inline_json_is_used_when_no_path_is_set() {
    let _guard = serial_guard();
    clear_overrides();

    unsafe {
        std::env::set_var("MULTISORT_CONFIG_PATH", "   ");
        std::env::set_var("MULTISORT_CONFIG_JSON", r#"{"criteria": ["~score", 1]}"#);
    }
    let (config, source) = SortConfig::load_from_env().expect("load");
    clear_overrides();

    assert_eq!(config.criteria, vec![json!("~score"), json!(1)]);
    assert_eq!(source, SortConfigSource::EnvInline);
}

#[test]
fn malformed_inline_json_is_an_error() {
    let _guard = serial_guard();
    clear_overrides();

    unsafe { std::env::set_var("MULTISORT_CONFIG_JSON", "{criteria:") };
    let err = SortConfig::load_from_env().expect_err("malformed");
    clear_overrides();

    assert!(format!("{err:#}").contains("MULTISORT_CONFIG_JSON"));
}

#[test]
fn loaded_criteria_compile_and_sort() {
    let config = SortConfig::parse_from_str(
        "criteria = [\"~fame\", \"retired\", \"name.last\"]",
        "inline",
    )
    .expect("parse");

    let hosts = vec![
        json!({"id": 1, "name": {"last": "Barker"}, "retired": true, "fame": 2}),
        json!({"id": 2, "name": {"last": "Philbin"}, "retired": true, "fame": 3}),
        json!({"id": 3, "name": {"last": "Trebek"}, "fame": 3}),
        json!({"id": 4, "name": {"last": "Bailey"}, "retired": true, "fame": 1}),
        json!({"id": 5, "name": {"last": "Sajak"}, "fame": 2}),
    ];
    let sorted = config.comparator().expect("compile").sorted(hosts).expect("sort");
    let ids: Vec<_> = sorted.iter().map(|h| h["id"].clone()).collect();
    assert_eq!(ids, vec![json!(3), json!(2), json!(5), json!(1), json!(4)]);
}
