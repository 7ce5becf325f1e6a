use std::io::Write;
use std::time::Duration;

use serial_test::serial;
use tempfile::NamedTempFile;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    return file;
}

#[tokio::test]
#[serial]
async fn it_loads_defaults_without_a_config_file() {
    let matches = cli::build()
        .try_get_matches_from(["shellklok", "--config-file", "/nonexistent/shellklok.toml"])
        .unwrap();

    Config::load(cli::build(), vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::FontDir), "/usr/share/figlet/fonts");
    assert_eq!(Config::get(ConfigKey::Renderer), "figlet");
    assert_eq!(Config::get(ConfigKey::RefreshMs), "100");
    assert_eq!(Config::get(ConfigKey::LogLevel), "info");
    assert_eq!(
        Config::get(ConfigKey::ConfigFile),
        "/nonexistent/shellklok.toml"
    );
    assert_eq!(Config::refresh_interval(), Duration::from_millis(100));
}

#[tokio::test]
#[serial]
async fn it_reads_values_from_the_config_file() {
    let file = config_file("font-dir = \"/opt/fonts\"\nrefresh-ms = 250\nrenderer = \"toilet\"\n");
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build()
        .try_get_matches_from(["shellklok", "--config-file", path.as_str()])
        .unwrap();

    Config::load(cli::build(), vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::FontDir), "/opt/fonts");
    assert_eq!(Config::get(ConfigKey::Renderer), "toilet");
    assert_eq!(Config::get(ConfigKey::RefreshMs), "250");
    assert_eq!(Config::refresh_interval(), Duration::from_millis(250));
}

#[tokio::test]
#[serial]
async fn it_prefers_command_line_values_over_the_config_file() {
    let file = config_file("font-dir = \"/opt/fonts\"\nlog-level = \"warn\"\n");
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build()
        .try_get_matches_from([
            "shellklok",
            "--config-file",
            path.as_str(),
            "--font-dir",
            "/home/me/fonts",
        ])
        .unwrap();

    Config::load(cli::build(), vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::FontDir), "/home/me/fonts");
    assert_eq!(Config::get(ConfigKey::LogLevel), "warn");
}

#[tokio::test]
#[serial]
async fn it_rejects_invalid_values_in_the_config_file() {
    let file = config_file("log-level = \"loud\"\n");
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build()
        .try_get_matches_from(["shellklok", "--config-file", path.as_str()])
        .unwrap();

    let err = Config::load(cli::build(), vec![&matches]).await.unwrap_err();

    assert!(err.to_string().contains("log-level"), "{err}");
}

#[tokio::test]
#[serial]
async fn it_skips_empty_values_in_the_config_file() {
    let file = config_file("renderer = \"\"\nlog-level = \"debug\"\n");
    let path = file.path().to_string_lossy().to_string();
    let matches = cli::build()
        .try_get_matches_from(["shellklok", "--config-file", path.as_str()])
        .unwrap();

    Config::load(cli::build(), vec![&matches]).await.unwrap();

    assert_eq!(Config::get(ConfigKey::Renderer), "figlet");
    assert_eq!(Config::get(ConfigKey::LogLevel), "debug");
}

#[test]
#[serial]
fn it_falls_back_to_the_default_refresh_interval() {
    for val in ["0", "abc", ""] {
        Config::set(ConfigKey::RefreshMs, val);
        assert_eq!(Config::refresh_interval(), Duration::from_millis(100));
    }
}

#[test]
fn it_serializes_the_default_config() {
    let res = Config::serialize_default(cli::build()).unwrap();

    assert!(res.contains("font-dir = \"/usr/share/figlet/fonts\""), "{res}");
    assert!(res.contains("refresh-ms = 100"), "{res}");
    assert!(res.contains("renderer = \"figlet\""), "{res}");
    assert!(res.contains("[possible values: trace, debug, info, warn, error]"), "{res}");
    assert!(!res.contains("config-file ="), "{res}");
}
