use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::{fs, path::Path};
use tempfile::TempDir;

const SNAPSHOT: &str = r#"[
  {
    "id": 1,
    "title": "Thinking in Java",
    "author": "Bruce Eckel",
    "category": "Programming",
    "price": "99.00",
    "favoriteCount": 100,
    "lastUpdated": "2024-03-01T09:30:00Z"
  },
  {
    "id": 2,
    "title": "Effective Java",
    "author": "Joshua Bloch",
    "category": "Programming",
    "price": "89.00",
    "favoriteCount": 999,
    "lastUpdated": "2024-03-04T09:30:00Z"
  },
  {
    "id": 3,
    "title": "Python Primer",
    "favoriteCount": 1000
  }
]"#;

fn catalog(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("catalog.json");
    fs::write(&path, SNAPSHOT).unwrap();
    path
}

fn folioctl(dir: &TempDir, catalog: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("folioctl");
    cmd.current_dir(dir.path())
        .env_remove("FOLIO_CONFIG_PATH")
        .env_remove("FOLIO_CONFIG_JSON")
        .env_remove("RUST_LOG")
        .arg("--catalog")
        .arg(catalog);
    cmd
}

fn stdout_json(cmd: &mut assert_cmd::Command) -> Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).expect("stdout is json")
}

fn titles(value: &Value) -> Vec<String> {
    value
        .as_array()
        .expect("array of records")
        .iter()
        .filter_map(|record| record["title"].as_str().map(str::to_string))
        .collect()
}

#[test]
fn help_lists_every_command() {
    let mut cmd = cargo_bin_cmd!("folioctl");
    cmd.arg("--help").assert().success().stdout(
        predicate::str::contains("list")
            .and(predicate::str::contains("advanced"))
            .and(predicate::str::contains("ranked-all"))
            .and(predicate::str::contains("favorite")),
    );
}

#[test]
fn list_filters_and_orders_by_recency() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);

    let value =
        stdout_json(folioctl(&dir, &path).args(["list", "--query", "java"]));
    assert_eq!(titles(&value), ["Effective Java", "Thinking in Java"]);
}

#[test]
fn ranked_all_honours_the_order_flag() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);

    let value = stdout_json(
        folioctl(&dir, &path).args(["ranked-all", "--order", "ASC"]),
    );
    assert_eq!(
        titles(&value),
        ["Thinking in Java", "Effective Java", "Python Primer"]
    );
}

#[test]
fn page_reports_totals() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);

    let value = stdout_json(
        folioctl(&dir, &path).args(["page", "--page", "2", "--size", "2"]),
    );
    assert_eq!(value["total"], 3);
    assert_eq!(value["totalPages"], 2);
    assert_eq!(titles(&value["records"]), ["Python Primer"]);
}

#[test]
fn detail_applies_display_defaults() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);

    let value = stdout_json(folioctl(&dir, &path).args(["detail", "3"]));
    assert_eq!(value["author"], "Unknown author");
    assert_eq!(value["category"], "Uncategorized");
    assert_eq!(value["price"], "0.00");

    let missing = stdout_json(folioctl(&dir, &path).args(["detail", "-4"]));
    assert!(missing.is_null());
}

#[test]
fn favorite_rewrites_the_snapshot_only_on_change() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);

    let value = stdout_json(
        folioctl(&dir, &path).args(["favorite", "2", "--delta", "inc"]),
    );
    assert_eq!(value["success"], true);
    assert_eq!(value["favoriteCount"], 1000);

    let written: Value =
        serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let effective = written
        .as_array()
        .unwrap()
        .iter()
        .find(|record| record["id"] == 2)
        .unwrap();
    assert_eq!(effective["favoriteCount"], 1000);

    let before = fs::read_to_string(&path).unwrap();
    let rejected = stdout_json(
        folioctl(&dir, &path).args(["favorite", "3", "--delta", "inc"]),
    );
    assert_eq!(rejected["success"], false);
    assert_eq!(rejected["outcome"], "rejected");
    assert_eq!(fs::read_to_string(&path).unwrap(), before);
}

#[test]
fn config_file_changes_the_labels() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);
    let config = dir.path().join("custom.toml");
    fs::write(&config, "[catalog]\nunknown_author_label = \"Anonymous\"\n")
        .unwrap();

    let value = stdout_json(
        folioctl(&dir, &path)
            .arg("--config")
            .arg(&config)
            .args(["detail", "3"]),
    );
    assert_eq!(value["author"], "Anonymous");
}

#[test]
fn invalid_config_fails_before_reading_the_catalog() {
    let dir = TempDir::new().unwrap();
    let path = catalog(&dir);
    let config = dir.path().join("folio.toml");
    fs::write(config, "[catalog]\nfavorite_ceiling = 0\n").unwrap();

    folioctl(&dir, &path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("favorite_ceiling"));
}

#[test]
fn missing_catalog_is_reported() {
    let dir = TempDir::new().unwrap();

    folioctl(&dir, &dir.path().join("absent.json"))
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open catalog snapshot"));
}

#[test]
fn snapshot_with_repeated_ids_is_refused() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("catalog.json");
    fs::write(&path, r#"[{"id": 2, "title": "A"}, {"id": 2, "title": "B"}]"#)
        .unwrap();

    folioctl(&dir, &path)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate book id 2"));
}
