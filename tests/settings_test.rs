use caddy_gen::settings::{LogFormat, LogOutput, Settings, SettingsError, CONFIG_FILE_ENV};
use serial_test::serial;
use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tempfile::tempdir;

const VARS: [&str; 12] = [
    CONFIG_FILE_ENV,
    "CADDY_GEN_NETWORK",
    "CADDY_GEN_DOCKER_SOCKET",
    "CADDY_GEN_OUTFILE",
    "CADDY_GEN_LABEL",
    "CADDY_GEN_MATCHER_PREFIX",
    "CADDY_GEN_NOTIFY",
    "CADDY_GEN_DEBOUNCE_MS",
    "CADDY_GEN_RECONNECT_SECS",
    "CADDY_GEN_LOG_LEVEL",
    "CADDY_GEN_LOG_FORMAT",
    "CADDY_GEN_LOG_OUTPUT",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_from_env() {
    clear_env();

    let settings = Settings::load().unwrap();

    assert_eq!(settings.docker.network, "gateway");
    assert!(settings.docker.socket.is_none());
    assert_eq!(settings.output.path, PathBuf::from("docker-sites.caddy"));
    assert_eq!(settings.output.label, "virtual.bind");
    assert_eq!(settings.output.matcher_prefix, "caddy-gen");
    assert!(settings.notify.is_none());
    assert_eq!(settings.watcher.debounce(), Duration::from_secs(1));
    assert_eq!(settings.watcher.reconnect_backoff(), Duration::from_secs(5));
    assert_eq!(settings.logging.format, LogFormat::Text);
    assert_eq!(settings.logging.output, LogOutput::Stdout);
}

#[test]
#[serial]
fn test_values_from_env() {
    clear_env();
    env::set_var("CADDY_GEN_NETWORK", "test-network");
    env::set_var("CADDY_GEN_OUTFILE", "test-outfile");
    env::set_var(
        "CADDY_GEN_NOTIFY",
        r#"{"containerId":"test-container","workingDir":"/app","command":["test"]}"#,
    );
    env::set_var("CADDY_GEN_DEBOUNCE_MS", "250");
    env::set_var("CADDY_GEN_LOG_FORMAT", "json");
    env::set_var("CADDY_GEN_LOG_OUTPUT", "/var/log/caddy-gen.log");

    let settings = Settings::load().unwrap();
    clear_env();

    assert_eq!(settings.docker.network, "test-network");
    assert_eq!(settings.output.path, PathBuf::from("test-outfile"));

    let notify = settings.notify.unwrap();
    assert_eq!(notify.container_id, "test-container");
    assert_eq!(notify.working_dir, "/app");
    assert_eq!(notify.command, vec!["test"]);

    assert_eq!(settings.watcher.debounce(), Duration::from_millis(250));
    assert_eq!(settings.logging.format, LogFormat::Json);
    assert_eq!(settings.logging.output, LogOutput::File("/var/log/caddy-gen.log".to_string()));
}

#[test]
#[serial]
fn test_invalid_notify_json_is_rejected() {
    clear_env();
    env::set_var("CADDY_GEN_NOTIFY", "{invalid json}");

    let result = Settings::load();
    clear_env();

    assert!(matches!(result, Err(SettingsError::NotifyParseError { .. })));
}

#[test]
#[serial]
fn test_invalid_number_is_rejected() {
    clear_env();
    env::set_var("CADDY_GEN_DEBOUNCE_MS", "soon");

    let result = Settings::load();
    clear_env();

    assert!(matches!(result, Err(SettingsError::EnvVarInvalid { ref var_name, .. }) if var_name == "CADDY_GEN_DEBOUNCE_MS"));
}

#[test]
#[serial]
fn test_empty_network_is_rejected() {
    clear_env();
    env::set_var("CADDY_GEN_NETWORK", "");

    let result = Settings::load();
    clear_env();

    assert!(matches!(result, Err(SettingsError::EnvVarInvalid { .. })));
}

#[test]
#[serial]
fn test_load_from_toml_file() {
    clear_env();
    let dir = tempdir().unwrap();
    let file_path = dir.path().join("caddy-gen.toml");

    let toml_content = r#"
        [docker]
        network = "proxy"
        socket = "/var/run/docker.sock"

        [output]
        path = "/config/sites.caddy"
        label = "caddy.bind"

        [notify]
        containerId = "caddy"
        command = ["caddy", "reload", "--config", "/etc/caddy/Caddyfile"]
    "#;
    let mut file = File::create(&file_path).unwrap();
    file.write_all(toml_content.as_bytes()).unwrap();

    env::set_var(CONFIG_FILE_ENV, &file_path);
    let settings = Settings::load().unwrap();
    clear_env();

    assert_eq!(settings.docker.network, "proxy");
    assert_eq!(settings.docker.socket.as_deref(), Some("/var/run/docker.sock"));
    assert_eq!(settings.output.path, PathBuf::from("/config/sites.caddy"));
    assert_eq!(settings.output.label, "caddy.bind");
    assert_eq!(settings.notify.unwrap().command.len(), 4);
}

#[test]
#[serial]
fn test_missing_toml_file_is_error() {
    clear_env();
    env::set_var(CONFIG_FILE_ENV, "/nonexistent/caddy-gen.toml");

    let result = Settings::load();
    clear_env();

    assert!(matches!(result, Err(SettingsError::FileError { .. })));
}
