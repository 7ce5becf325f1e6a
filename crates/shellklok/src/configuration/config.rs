#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::env;
use std::path;
use std::time::Duration;

use anyhow::anyhow;
use anyhow::bail;
use anyhow::Result;
use clap::ArgMatches;
use clap::Command;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;
use tokio::fs;

use crate::domain::services::DEFAULT_REFRESH;
use crate::infrastructure::fonts::DEFAULT_FONT_DIR;
use crate::infrastructure::renderers::DEFAULT_RENDERER;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Debug, Eq, PartialEq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ConfigFile,
    FontDir,
    LogFile,
    LogLevel,
    RefreshMs,
    Renderer,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let config_path = dirs::config_dir()
            .unwrap_or_else(env::temp_dir)
            .join("shellklok/config.toml");
        let log_path = dirs::cache_dir()
            .unwrap_or_else(env::temp_dir)
            .join("shellklok/shellklok.log");

        let res = match key {
            ConfigKey::FontDir => DEFAULT_FONT_DIR.to_string(),
            ConfigKey::LogLevel => "info".to_string(),
            ConfigKey::RefreshMs => DEFAULT_REFRESH.as_millis().to_string(),
            ConfigKey::Renderer => DEFAULT_RENDERER.to_string(),

            // Special
            ConfigKey::ConfigFile => config_path.to_string_lossy().to_string(),
            ConfigKey::LogFile => log_path.to_string_lossy().to_string(),
        };

        return res;
    }

    /// Time between clock frames. Anything but a positive integer falls back
    /// to the default interval.
    pub fn refresh_interval() -> Duration {
        return match Config::get(ConfigKey::RefreshMs).parse::<u64>() {
            Ok(millis) if millis > 0 => Duration::from_millis(millis),
            _ => DEFAULT_REFRESH,
        };
    }

    pub async fn load(cmd: Command, clap_arg_matches: Vec<&ArgMatches>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key))
        }

        let arg_value = |key: ConfigKey| {
            return clap_arg_matches
                .iter()
                .filter_map(|matches| matches.try_get_one::<String>(&key.to_string()).ok().flatten())
                .filter(|val| return !val.is_empty())
                .last()
                .cloned();
        };

        if let Some(config_file) = arg_value(ConfigKey::ConfigFile) {
            Config::set(ConfigKey::ConfigFile, &config_file);
        }
        let config_path = path::PathBuf::from(Config::get(ConfigKey::ConfigFile));
        if config_path.exists() {
            Config::load_file(&cmd, &config_path).await?;
        }

        for key in ConfigKey::iter() {
            if let Some(val) = arg_value(key) {
                Config::set(key, &val);
            }
        }

        tracing::debug!(
            font_dir = %Config::get(ConfigKey::FontDir),
            renderer = %Config::get(ConfigKey::Renderer),
            refresh_ms = %Config::get(ConfigKey::RefreshMs),
            "config"
        );

        return Ok(());
    }

    /// Applies the keys present in a TOML file. Integers are kept as their
    /// decimal text, strings must be one of the flag's possible values when
    /// the flag restricts them.
    async fn load_file(cmd: &Command, config_path: &path::Path) -> Result<()> {
        let doc = fs::read_to_string(config_path)
            .await?
            .parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter().filter(|e| return *e != ConfigKey::ConfigFile) {
            let Some(item) = doc.get(&key.to_string()) else {
                continue;
            };

            let val = match (item.as_integer(), item.as_str()) {
                (Some(val_int), _) => val_int.to_string(),
                (None, Some(val_str)) if !val_str.is_empty() => val_str.to_string(),
                _ => continue,
            };

            let allowed = possible_values(cmd, key);
            if !allowed.is_empty() && !allowed.contains(&val) {
                bail!(
                    "{} has an invalid value for key '{key}': {val}\nPossible values are: {}",
                    config_path.display(),
                    allowed.join(", ")
                );
            }
            Config::set(key, &val);
        }

        return Ok(());
    }

    pub fn serialize_default(cmd: Command) -> Result<String> {
        let mut sections = vec![];
        for key in ConfigKey::iter() {
            if key == ConfigKey::ConfigFile {
                continue;
            }

            let arg = cmd
                .get_arguments()
                .find(|e| return e.get_long() == Some(key.to_string().as_str()))
                .ok_or_else(|| anyhow!("no command line argument for config key '{key}'"))?;

            let mut description = arg
                .get_help()
                .map(|e| return e.to_string())
                .unwrap_or_default();

            description = description
                .split("[default:")
                .next()
                .unwrap_or_default()
                .trim()
                .to_string();

            let allowed = possible_values(&cmd, key);
            if !allowed.is_empty() {
                description = format!("{description} [possible values: {}]", allowed.join(", "));
            }

            let mut val = Config::default(key);
            if val.is_empty() {
                val = format!("# {key} = \"\"");
            } else if val.parse::<i64>().is_ok() {
                val = format!("{key} = {val}");
            } else {
                val = format!("{key} = \"{val}\"");
            }

            sections.push(format!("# {description}\n{val}"));
        }

        return Ok(sections.join("\n\n"));
    }
}

fn possible_values(cmd: &Command, key: ConfigKey) -> Vec<String> {
    let long = key.to_string();
    return cmd
        .get_arguments()
        .find(|e| return e.get_long() == Some(long.as_str()))
        .map(|arg| {
            return arg
                .get_possible_values()
                .iter()
                .map(|e| return e.get_name().to_string())
                .collect();
        })
        .unwrap_or_default();
}
