//! End-to-end tests for the `solar-admin` binary

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use std::path::Path;

fn admin(store: &Path) -> Command {
    let mut cmd = Command::cargo_bin("solar-admin").unwrap();
    cmd.env_remove("SOLAR_ADMIN_CONFIG")
        .env_remove("RUST_LOG")
        .current_dir(store.parent().unwrap())
        .arg("--store-dir")
        .arg(store);
    cmd
}

fn product(id: &str, slug: &str, name_ar: Option<&str>) -> serde_json::Value {
    let mut value = json!({
        "id": id,
        "slug": slug,
        "category": "panels",
        "brand": "Trina",
        "nameEn": "Panel",
        "image": "/images/panel.png",
    });
    if let Some(name) = name_ar {
        value["nameAr"] = json!(name);
    }
    value
}

#[test]
fn status_on_fresh_store() {
    let dir = tempfile::tempdir().unwrap();
    admin(&dir.path().join("store"))
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No content loaded"));
}

#[test]
fn load_site_then_status_and_list() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");

    admin(&store)
        .args(["load-site", "--strict"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Site data loaded"));

    admin(&store)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Batteries").and(predicate::str::contains("Charge Controllers")));

    admin(&store)
        .args(["projects", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("project-4"));

    admin(&store)
        .args(["products", "show", "pylontech-us5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"category\": \"pylontech\""));

    admin(&store)
        .args(["products", "show", "us5000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"id\": \"pylontech-us5000\""));
}

#[test]
fn validate_reports_missing_field_and_fails() {
    let dir = tempfile::tempdir().unwrap();
    let file = dir.path().join("content.json");
    let payload = json!({
        "products": [
            product("1", "a", Some("لوح")),
            product("2", "b", Some("لوح")),
            product("3", "c", None),
        ]
    });
    std::fs::write(&file, payload.to_string()).unwrap();

    admin(&dir.path().join("store"))
        .arg("validate")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("المنتج 3").and(predicate::str::contains("nameAr")));
}

#[test]
fn import_valid_file_then_export_ts() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    let out = dir.path().join("site-data");
    let file = dir.path().join("content.json");
    let payload = json!({ "products": [product("1", "vertex", Some("لوح"))] });
    std::fs::write(&file, payload.to_string()).unwrap();

    admin(&store)
        .arg("import")
        .arg(&file)
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported"));

    admin(&store)
        .arg("export-ts")
        .arg("--out")
        .arg(&out)
        .assert()
        .success();

    let panels = std::fs::read_to_string(out.join("panels.ts")).unwrap();
    assert!(panels.contains("export const panelProducts: Product[] = ["));
    assert!(panels.contains("\"slug\": \"vertex\""));
    let batteries = std::fs::read_to_string(out.join("batteries.ts")).unwrap();
    assert!(batteries.contains("export const batteryProducts: Product[] = [];"));

    // Existing files are kept unless --force is given
    admin(&store)
        .arg("export-ts")
        .arg("--out")
        .arg(&out)
        .assert()
        .failure();
    admin(&store)
        .args(["export-ts", "--force", "--out"])
        .arg(&out)
        .assert()
        .success();
}

#[test]
fn rejected_import_leaves_store_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    let file = dir.path().join("dupes.json");
    let payload = json!({ "products": [product("1", "a", Some("أ")), product("2", "a", Some("ب"))] });
    std::fs::write(&file, payload.to_string()).unwrap();

    admin(&store)
        .arg("import")
        .arg(&file)
        .assert()
        .failure()
        .stderr(predicate::str::contains("تكرار في slugs المنتجات: a"));

    admin(&store)
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("No content loaded"));
}

#[test]
fn export_ts_with_empty_store_is_refused() {
    let dir = tempfile::tempdir().unwrap();
    admin(&dir.path().join("store"))
        .arg("export-ts")
        .arg("--out")
        .arg(dir.path().join("out"))
        .assert()
        .failure()
        .stdout(predicate::str::contains("No data to export"));
}

#[test]
fn export_json_writes_dated_backup() {
    let dir = tempfile::tempdir().unwrap();
    let store = dir.path().join("store");
    let out = dir.path().join("backups");

    admin(&store).arg("load-site").assert().success();
    admin(&store)
        .arg("export-json")
        .arg("--out")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("admin-backup-"));

    let backups: Vec<_> = std::fs::read_dir(&out).unwrap().collect();
    assert_eq!(backups.len(), 1);
}

#[test]
fn unknown_config_key_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("solar-admin.toml");
    std::fs::write(&config, "[store]\nfolder = \"x\"\n").unwrap();

    admin(&dir.path().join("store"))
        .arg("--config")
        .arg(&config)
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("folder"));
}
