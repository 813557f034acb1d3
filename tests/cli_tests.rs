use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs the binary against a private data directory and config home
fn placebook_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("placebook"));
    cmd.env("PLACEBOOK_DATA_DIR", temp_dir.path().join("data"))
        .env("XDG_CONFIG_HOME", temp_dir.path().join("config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn add_place(temp_dir: &TempDir, args: &[&str]) -> serde_json::Value {
    let output = placebook_cmd(temp_dir)
        .arg("add")
        .args(args)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());
    serde_json::from_slice(&output.stdout).unwrap()
}

// =============================================================================
// Basic CLI
// =============================================================================

#[test]
fn test_help() {
    let temp_dir = TempDir::new().unwrap();
    placebook_cmd(&temp_dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("places you have visited"));
}

#[test]
fn test_version() {
    let temp_dir = TempDir::new().unwrap();
    placebook_cmd(&temp_dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("placebook"));
}

#[test]
fn test_missing_explicit_config_fails() {
    let temp_dir = TempDir::new().unwrap();
    placebook_cmd(&temp_dir)
        .args(["--config", "nope.yml", "list"])
        .current_dir(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

// =============================================================================
// Initialization
// =============================================================================

#[test]
fn test_init_writes_config_once() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("placebook.yml");

    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let content = std::fs::read_to_string(&config_path).unwrap();
    assert!(content.contains("travelPlaces"));

    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "init", "--force"])
        .assert()
        .success();
}

#[test]
fn test_init_reports_overridden_data_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("placebook.yml");
    let data_dir = temp_dir.path().join("elsewhere");

    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap()])
        .args(["--data-dir", data_dir.to_str().unwrap(), "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Data:   {}",
            data_dir.display()
        )));

    // The environment override is honoured too
    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "init", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Data:   {}",
            temp_dir.path().join("data").display()
        )));
}

#[test]
fn test_config_key_selects_blob_file() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("placebook.yml");
    std::fs::write(&config_path, "store:\n  key: trips\n").unwrap();

    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "add", "Kyoto"])
        .assert()
        .success();

    assert!(temp_dir.path().join("data").join("trips.json").exists());
    assert!(!temp_dir.path().join("data").join("travelPlaces.json").exists());
}

#[test]
fn test_invalid_date_format_rejected_at_startup() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("placebook.yml");
    std::fs::write(&config_path, "tui:\n  date_format: \"%Q\"\n").unwrap();

    placebook_cmd(&temp_dir)
        .args(["--config", config_path.to_str().unwrap(), "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid tui.date_format"));
}

// =============================================================================
// Add, List, Show
// =============================================================================

#[test]
fn test_list_empty_shows_placeholder() {
    let temp_dir = TempDir::new().unwrap();
    placebook_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "No places saved yet... start exploring!",
        ));
}

#[test]
fn test_add_and_list() {
    let temp_dir = TempDir::new().unwrap();

    placebook_cmd(&temp_dir)
        .args(["add", "  Paris ", "-c", "France", "-w", "Summer 2019"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added").and(predicate::str::contains("Paris (France)")));

    placebook_cmd(&temp_dir)
        .args(["ls"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Paris (France)"));

    let stored =
        std::fs::read_to_string(temp_dir.path().join("data").join("travelPlaces.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(json[0]["name"], "Paris");
    assert_eq!(json[0]["visit"], "Summer 2019");
}

#[test]
fn test_add_json_output() {
    let temp_dir = TempDir::new().unwrap();
    let place = add_place(&temp_dir, &["Nairobi", "-l", "Giraffe Centre\\nKaren Blixen Museum"]);

    assert_eq!(place["name"], "Nairobi");
    assert_eq!(place["country"], "");
    assert_eq!(place["landmarks"], "Giraffe Centre\nKaren Blixen Museum");
    assert_eq!(place["id"].as_str().unwrap().len(), 10);
    assert!(place["createdAt"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_add_blank_name_fails() {
    let temp_dir = TempDir::new().unwrap();

    placebook_cmd(&temp_dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please enter a place name"));

    assert!(!temp_dir.path().join("data").join("travelPlaces.json").exists());
}

#[test]
fn test_add_fails_when_data_dir_is_unwritable() {
    let temp_dir = TempDir::new().unwrap();
    // A plain file where the data directory should be
    std::fs::write(temp_dir.path().join("data"), "").unwrap();

    placebook_cmd(&temp_dir)
        .args(["add", "Oslo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "Failed to save places under key travelPlaces",
        ));
}

#[test]
fn test_list_json_newest_first() {
    let temp_dir = TempDir::new().unwrap();
    add_place(&temp_dir, &["Oslo"]);
    std::thread::sleep(std::time::Duration::from_millis(5));
    add_place(&temp_dir, &["Bergen"]);

    let output = placebook_cmd(&temp_dir)
        .args(["list", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let places: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(places[0]["name"], "Bergen");
    assert_eq!(places[1]["name"], "Oslo");
}

#[test]
fn test_show_by_id_and_default() {
    let temp_dir = TempDir::new().unwrap();
    let first = add_place(
        &temp_dir,
        &["Cusco", "-c", "Peru", "-l", "Machu Picchu", "-n", "Altitude!"],
    );
    std::thread::sleep(std::time::Duration::from_millis(5));
    add_place(&temp_dir, &["Lima"]);

    placebook_cmd(&temp_dir)
        .args(["show", first["id"].as_str().unwrap()])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Cusco")
                .and(predicate::str::contains("Peru • Date not specified"))
                .and(predicate::str::contains("Landmarks / Highlights"))
                .and(predicate::str::contains("Notes & Memories"))
                .and(predicate::str::contains("Added: ")),
        );

    placebook_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lima").and(predicate::str::contains("Cusco").not()));
}

#[test]
fn test_show_unknown_id_fails() {
    let temp_dir = TempDir::new().unwrap();
    add_place(&temp_dir, &["Lima"]);

    placebook_cmd(&temp_dir)
        .args(["show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Place not found"));
}

#[test]
fn test_show_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    placebook_cmd(&temp_dir)
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Select a place"));
}

// =============================================================================
// Recovery and clearing
// =============================================================================

#[test]
fn test_corrupt_data_lists_placeholder_and_accepts_adds() {
    let temp_dir = TempDir::new().unwrap();
    let data_dir = temp_dir.path().join("data");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("travelPlaces.json"), "not json at all").unwrap();

    placebook_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No places saved yet"))
        .stderr(predicate::str::contains("Failed to load places"));

    add_place(&temp_dir, &["Quito"]);

    placebook_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Quito"));
}

#[test]
fn test_clear_force() {
    let temp_dir = TempDir::new().unwrap();
    add_place(&temp_dir, &["Oslo"]);

    placebook_cmd(&temp_dir)
        .args(["clear", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cleared"));

    placebook_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No places saved yet"));
}

#[test]
fn test_clear_declined_keeps_places() {
    let temp_dir = TempDir::new().unwrap();
    add_place(&temp_dir, &["Oslo"]);

    placebook_cmd(&temp_dir)
        .arg("clear")
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled"));

    placebook_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Oslo"));
}
