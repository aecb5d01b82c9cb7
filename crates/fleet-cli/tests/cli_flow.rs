use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_fleet"))
}

/// Isolated config home and database path for one test.
struct TestEnv {
    base: PathBuf,
    config_home: PathBuf,
    db_path: PathBuf,
}

impl TestEnv {
    fn new(prefix: &str) -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time")
            .as_nanos();
        let base = std::env::temp_dir().join(format!(
            "fleet_{}_{}_{}",
            prefix,
            std::process::id(),
            nanos
        ));
        let config_home = base.join("config");
        let data = base.join("data");
        std::fs::create_dir_all(&config_home).expect("create config dir");
        std::fs::create_dir_all(&data).expect("create data dir");
        Self {
            db_path: data.join("fleet.db"),
            config_home,
            base,
        }
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("FLEET_DB", &self.db_path)
            .env("NO_COLOR", "1")
            .env_remove("FLEET_CONFIG")
            .env_remove("RUST_LOG")
            .stdin(Stdio::null());
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command().args(args).output().expect("run fleet")
    }

    fn documents_dir(&self) -> PathBuf {
        self.db_path.parent().expect("db parent").join("files")
    }

    fn preferences_path(&self) -> PathBuf {
        self.config_home.join("fleet").join("preferences.json")
    }

    fn add(&self, plate: &str, brand: &str, model: &str, extra: &[&str]) -> Output {
        let mut args = vec![
            "add",
            "--no-input",
            "--plate",
            plate,
            "--brand",
            brand,
            "--model",
            model,
        ];
        args.extend_from_slice(extra);
        self.run(&args)
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "command failed: stdout={} stderr={}",
        stdout(output),
        stderr(output)
    );
}

fn json(output: &Output) -> serde_json::Value {
    assert_success(output);
    serde_json::from_slice(&output.stdout).expect("valid JSON output")
}

fn row_count(path: &Path) -> i64 {
    let conn = Connection::open(path).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM vehicles", [], |row| row.get(0))
        .expect("count rows")
}

#[test]
fn test_add_then_list_json() {
    let env = TestEnv::new("add");
    let output = env.add(
        "xep-4096",
        "Toyota",
        "Corolla",
        &["--year", "2020", "--mileage", "15000", "--gps", "true"],
    );
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.contains("status=ok"));
    assert!(text.contains("id=1"));
    assert!(text.contains("license_plate=XEP-4096"));

    let list = json(&env.run(&["list", "--json"]));
    let vehicles = list.as_array().expect("array");
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0]["license_plate"], "XEP-4096");
    assert_eq!(vehicles[0]["year"], 2020);
    assert_eq!(vehicles[0]["mileage"], 15000);
    assert_eq!(vehicles[0]["has_gps"], 1);
    assert_eq!(vehicles[0]["status"], "Active");
    assert_eq!(vehicles[0]["notes"], serde_json::Value::Null);
}

#[test]
fn test_duplicate_plate_is_conflict() {
    let env = TestEnv::new("dup");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &[]));

    let output = env.add("XEP-4096", "Fiat", "Doblo", &[]);
    assert_eq!(output.status.code(), Some(5));
    assert!(stderr(&output).contains("already exists"));
    assert_eq!(row_count(&env.db_path), 1);
}

#[test]
fn test_edit_updates_by_id() {
    let env = TestEnv::new("edit");
    assert_success(&env.add(
        "XEP-4096",
        "Toyota",
        "Corolla",
        &["--mileage", "15000", "--notes", "spare key in office"],
    ));

    let output = env.run(&[
        "edit",
        "1",
        "--no-input",
        "--mileage",
        "16000",
        "--notes",
        "",
    ]);
    assert_success(&output);

    let vehicle = json(&env.run(&["show", "--id", "1", "--json"]));
    assert_eq!(vehicle["mileage"], 16000);
    assert_eq!(vehicle["brand"], "Toyota");
    assert_eq!(vehicle["notes"], serde_json::Value::Null);
    assert_ne!(vehicle["updated_at"], vehicle["created_at"]);
}

#[test]
fn test_edit_missing_id_is_not_found() {
    let env = TestEnv::new("editnf");
    let output = env.run(&["edit", "42", "--no-input", "--mileage", "1"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_edit_to_taken_plate_is_conflict() {
    let env = TestEnv::new("editdup");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &[]));
    assert_success(&env.add("IKA-1234", "Fiat", "Doblo", &[]));

    let output = env.run(&["edit", "2", "--no-input", "--plate", "XEP-4096"]);
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_show_missing_plate_is_not_found_with_hint() {
    let env = TestEnv::new("show");
    let output = env.run(&["show", "NOPE-1"]);
    assert_eq!(output.status.code(), Some(3));
    let err = stderr(&output);
    assert!(err.contains("error="));
    assert!(err.contains("hint="));
}

#[test]
fn test_invalid_input_exit_code() {
    let env = TestEnv::new("invalid");
    let output = env.add("XEP-4096", "Toyota", "Corolla", &["--vin", "SHORT"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("VIN must be 17 characters"));

    let output = env.add("XEP-4096", "Toyota", "Corolla", &["--year", "twenty"]);
    assert_eq!(output.status.code(), Some(4));

    let output = env.add("XEP-4096", "Toyota", "Corolla", &["--insurance-expiry", "1/3/2025"]);
    assert_eq!(output.status.code(), Some(4));

    let output = env.run(&["add", "--no-input", "--plate", "XEP-4096", "--model", "Corolla"]);
    assert_eq!(output.status.code(), Some(4));
    assert!(stderr(&output).contains("brand is required"));

    let output = env.run(&["list", "--json", "--format", "table"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_delete_removes_vehicle() {
    let env = TestEnv::new("delete");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &[]));

    assert_success(&env.run(&["delete", "xep-4096", "--yes"]));
    let list = json(&env.run(&["list", "--json"]));
    assert!(list.as_array().expect("array").is_empty());

    let output = env.run(&["delete", "XEP-4096", "--yes"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_search_and_gps_listing() {
    let env = TestEnv::new("search");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &["--gps", "true"]));
    assert_success(&env.add("IKA-1234", "Fiat", "Doblo", &["--gps", "true"]));
    assert_success(&env.add("NKE-5555", "Audi", "A4", &["--notes", "corolla parts donor"]));

    let found = json(&env.run(&["search", "COROLLA", "--json"]));
    let plates: Vec<&str> = found
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|v| v["license_plate"].as_str())
        .collect();
    assert_eq!(plates, vec!["NKE-5555", "XEP-4096"]);

    let gps = json(&env.run(&["list", "--gps", "--json"]));
    let brands: Vec<&str> = gps
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|v| v["brand"].as_str())
        .collect();
    assert_eq!(brands, vec!["Fiat", "Toyota"]);
}

#[test]
fn test_plain_list_is_tab_separated() {
    let env = TestEnv::new("plain");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &["--year", "2020"]));

    let output = env.run(&["list", "--format", "plain"]);
    assert_success(&output);
    let line = stdout(&output);
    let columns: Vec<&str> = line.trim_end().split('\t').collect();
    assert_eq!(columns[0], "1");
    assert_eq!(columns[1], "XEP-4096");
    assert_eq!(columns[4], "2020");
}

#[test]
fn test_attach_docs_detach() {
    let env = TestEnv::new("docs");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &[]));

    let source = env.base.join("scan.PDF");
    std::fs::write(&source, b"%PDF-1.4 test").expect("write source");
    let source_arg = source.to_string_lossy().to_string();

    assert_success(&env.run(&["attach", "XEP-4096", "insurance", &source_arg]));
    let stored = env.documents_dir().join("XEP_4096_INSURANCE.pdf");
    assert!(stored.is_file());
    assert_eq!(std::fs::read(&stored).expect("read copy"), b"%PDF-1.4 test");

    let docs = json(&env.run(&["docs", "XEP-4096", "--json"]));
    assert_eq!(docs["insurance"], stored.to_string_lossy().as_ref());
    assert!(docs.get("kteo").is_none());

    let shown = json(&env.run(&["show", "XEP-4096", "--json"]));
    assert!(shown["documents"]["insurance"].is_string());

    assert_success(&env.run(&["detach", "XEP-4096", "insurance"]));
    assert!(!stored.exists());

    let output = env.run(&["detach", "XEP-4096", "insurance"]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_attach_errors() {
    let env = TestEnv::new("attacherr");
    let missing = env.base.join("missing.pdf");
    let missing_arg = missing.to_string_lossy().to_string();

    let output = env.run(&["attach", "XEP-4096", "kteo", &missing_arg]);
    assert_eq!(output.status.code(), Some(3));

    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &[]));
    let output = env.run(&["attach", "XEP-4096", "kteo", &missing_arg]);
    assert_eq!(output.status.code(), Some(3));
}

#[test]
fn test_delete_with_documents() {
    let env = TestEnv::new("deldocs");
    assert_success(&env.add("XEP-4096", "Toyota", "Corolla", &[]));
    let source = env.base.join("licence.png");
    std::fs::write(&source, b"png").expect("write source");
    let source_arg = source.to_string_lossy().to_string();
    assert_success(&env.run(&["attach", "XEP-4096", "licence", &source_arg]));

    assert_success(&env.run(&["delete", "XEP-4096", "--yes", "--with-documents"]));
    assert!(!env.documents_dir().join("XEP_4096_LICENCE.png").exists());
}

#[test]
fn test_prefs_set_and_show() {
    let env = TestEnv::new("prefs");
    let shown = json(&env.run(&["prefs", "show", "--json"]));
    assert_eq!(shown["theme"], "light");
    assert_eq!(shown["language"], "el");

    assert_success(&env.run(&["prefs", "set", "theme", "dark"]));
    assert_success(&env.run(&["prefs", "set", "window_size", "1280x720"]));
    assert!(env.preferences_path().is_file());

    let shown = json(&env.run(&["prefs", "show", "--json"]));
    assert_eq!(shown["theme"], "dark");
    assert_eq!(shown["window_size"], serde_json::json!([1280, 720]));

    let output = env.run(&["prefs", "set", "theme", "blue"]);
    assert_eq!(output.status.code(), Some(4));
    let output = env.run(&["prefs", "set", "font", "mono"]);
    assert_eq!(output.status.code(), Some(4));
}

#[test]
fn test_corrupt_preferences_fall_back_to_defaults() {
    let env = TestEnv::new("prefsbad");
    let path = env.preferences_path();
    std::fs::create_dir_all(path.parent().expect("parent")).expect("create dir");
    std::fs::write(&path, "{ not json").expect("write prefs");

    let shown = json(&env.run(&["prefs", "show", "--json"]));
    assert_eq!(shown["theme"], "light");
    assert_eq!(shown["window_position"], serde_json::json!([100, 100]));
}

#[test]
fn test_catalog_lists() {
    let env = TestEnv::new("catalog");
    let fuels = json(&env.run(&["catalog", "fuel-types", "--json"]));
    let fuels: Vec<&str> = fuels
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(fuels.contains(&"Diesel"));

    let output = env.run(&["catalog", "brands"]);
    assert_success(&output);
    assert!(stdout(&output).lines().any(|line| line == "Toyota"));
}

#[test]
fn test_init_writes_config_used_by_later_commands() {
    let env = TestEnv::new("init");
    let db = env.base.join("garage").join("vehicles.db");
    let db_arg = db.to_string_lossy().to_string();

    let output = env
        .command()
        .env_remove("FLEET_DB")
        .args(["init", &db_arg])
        .output()
        .expect("run init");
    assert_success(&output);
    assert!(db.is_file());
    assert!(env.base.join("garage").join("files").is_dir());

    let config = std::fs::read_to_string(env.config_home.join("fleet").join("config.toml"))
        .expect("read config");
    assert!(config.contains("vehicles.db"));

    let output = env
        .command()
        .env_remove("FLEET_DB")
        .args([
            "add",
            "--no-input",
            "--plate",
            "XEP-4096",
            "--brand",
            "Toyota",
            "--model",
            "Corolla",
        ])
        .output()
        .expect("run add");
    assert_success(&output);
    assert_eq!(row_count(&db), 1);

    let output = env
        .command()
        .env_remove("FLEET_DB")
        .args(["init", &db_arg])
        .output()
        .expect("run init again");
    assert_eq!(output.status.code(), Some(5));
}

#[test]
fn test_completions_and_bare_invocation() {
    let env = TestEnv::new("misc");
    let output = env.run(&["completions", "bash"]);
    assert_success(&output);
    assert!(stdout(&output).contains("fleet"));

    let output = env.run(&[]);
    assert_success(&output);
    assert!(stdout(&output).contains("Quickstart"));
}
