use super::build;
use crate::configuration::ConfigKey;

#[test]
fn it_exposes_every_config_key_as_a_long_flag() {
    let cmd = build();
    for key in [
        ConfigKey::ConfigFile,
        ConfigKey::FontDir,
        ConfigKey::LogFile,
        ConfigKey::LogLevel,
        ConfigKey::RefreshMs,
        ConfigKey::Renderer,
    ] {
        let name = key.to_string();
        assert!(
            cmd.get_arguments().any(|e| e.get_long() == Some(name.as_str())),
            "missing --{name}"
        );
    }
}

#[test]
fn it_rejects_unknown_log_levels() {
    let res = build().try_get_matches_from(["shellklok", "--log-level", "loud"]);
    assert!(res.is_err());

    let matches = build()
        .try_get_matches_from(["shellklok", "--log-level", "debug"])
        .unwrap();
    assert_eq!(
        matches.get_one::<String>("log-level").map(|e| e.as_str()),
        Some("debug")
    );
}

#[test]
fn it_parses_the_config_default_subcommand() {
    let matches = build()
        .try_get_matches_from(["shellklok", "config", "default"])
        .unwrap();
    let (name, sub) = matches.subcommand().unwrap();
    assert_eq!(name, "config");
    assert_eq!(sub.subcommand_name(), Some("default"));
}
