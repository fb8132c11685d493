//! End-to-end runs of the food-catalog binary

use std::process::Command;

use tempfile::TempDir;

fn food_catalog() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_food-catalog"));
    cmd.env_remove("DIET_DAILY_CATALOG_OUTPUT");
    cmd
}

#[test]
fn no_arguments_writes_one_catalog_file() {
    let tmp = TempDir::new().expect("create temp dir");

    let status = food_catalog()
        .current_dir(tmp.path())
        .status()
        .expect("run food-catalog");
    assert!(status.success());

    let entries: Vec<_> = std::fs::read_dir(tmp.path())
        .unwrap()
        .map(|e| e.unwrap().path())
        .collect();
    assert_eq!(entries.len(), 1);

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&entries[0]).unwrap()).unwrap();
    assert_eq!(value["metadata"]["total_items"], 200);
    assert_eq!(value["categories"]["taiwan_staples"], 50);
    assert_eq!(value["foods"].as_array().unwrap().len(), 200);
}

#[test]
fn output_path_comes_from_flag_or_env_without_subcommand() {
    let tmp = TempDir::new().expect("create temp dir");

    let status = food_catalog()
        .current_dir(tmp.path())
        .args(["--output", "from-flag.json"])
        .status()
        .expect("run food-catalog");
    assert!(status.success());
    assert!(tmp.path().join("from-flag.json").exists());

    let status = food_catalog()
        .current_dir(tmp.path())
        .env("DIET_DAILY_CATALOG_OUTPUT", "from-env.json")
        .status()
        .expect("run food-catalog");
    assert!(status.success());
    assert!(tmp.path().join("from-env.json").exists());
    assert!(!tmp.path().join("taiwan-hk-foods.json").exists());
}

#[test]
fn output_into_missing_directory_fails() {
    let tmp = TempDir::new().expect("create temp dir");

    let output = food_catalog()
        .current_dir(tmp.path())
        .args(["generate", "--output", "nope/catalog.json"])
        .output()
        .expect("run food-catalog");

    assert!(!output.status.success());
    assert!(!tmp.path().join("nope").exists());
}

#[test]
fn check_rejects_tampered_counts() {
    let tmp = TempDir::new().expect("create temp dir");
    let path = tmp.path().join("catalog.json");

    let status = food_catalog()
        .args(["generate", "--output"])
        .arg(&path)
        .status()
        .expect("run food-catalog");
    assert!(status.success());

    let ok = food_catalog()
        .arg("check")
        .arg(&path)
        .status()
        .expect("run food-catalog check");
    assert!(ok.success());

    let mut value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    value["categories"]["taiwan_staples"] = serde_json::json!(54);
    std::fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();

    let tampered = food_catalog()
        .arg("check")
        .arg(&path)
        .status()
        .expect("run food-catalog check");
    assert!(!tampered.success());
}
