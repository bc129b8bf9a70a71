use std::{env, fs};

use macrodata_server::config::loader::load_config;

#[test]
fn config_parsing_and_env_overrides_and_validation() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("macrodata.toml");

    let toml_content = r#"
[server]
host = "127.0.0.1"
port = 8081

[upstream]
base_url = "http://localhost:9999/data360/data"
timeout_ms = 2500

[logging]
level = "debug"
"#;
    fs::write(&path, toml_content).expect("write toml");

    // 1) Valid config parses
    let cfg = load_config(path.to_str()).expect("should parse config");
    assert_eq!(cfg.server.port, 8081);
    assert_eq!(cfg.upstream.base_url, "http://localhost:9999/data360/data");
    assert_eq!(cfg.upstream.timeout_ms, 2500);
    assert_eq!(cfg.logging.level.to_ascii_lowercase(), "debug");

    // 2) Env override should win over file
    unsafe {
        env::set_var("MACRODATA__UPSTREAM__TIMEOUT_MS", "750");
    }
    let cfg_env = load_config(path.to_str()).expect("should parse config with env overrides");
    assert_eq!(cfg_env.upstream.timeout_ms, 750);
    unsafe {
        env::remove_var("MACRODATA__UPSTREAM__TIMEOUT_MS");
    }

    // 3) Invalid values are rejected
    let bad_path = dir.path().join("bad.toml");
    fs::write(
        &bad_path,
        r#"
[upstream]
timeout_ms = 0
"#,
    )
    .expect("write bad toml");
    let err = load_config(bad_path.to_str()).expect_err("zero timeout must fail");
    assert!(err.contains("upstream.timeout_ms"), "{err}");

    let bad_level = dir.path().join("bad_level.toml");
    fs::write(
        &bad_level,
        r#"
[logging]
level = "loud"
"#,
    )
    .expect("write bad toml");
    assert!(load_config(bad_level.to_str()).is_err());
}

#[test]
fn missing_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().expect("tmp dir");
    let path = dir.path().join("absent.toml");
    let cfg = load_config(path.to_str()).expect("defaults are valid");
    assert_eq!(
        cfg.upstream.base_url,
        "https://data360api.worldbank.org/data360/data"
    );
    assert_eq!(cfg.server.port, 8080);
}
