#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use anyhow::Result;
use clap::Arg;
use clap::ArgAction;
use clap::Command;

use crate::configuration::Config;
use crate::configuration::ConfigKey;

pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

fn arg_for(key: ConfigKey, help: &str) -> Arg {
    let env = format!("SHELLKLOK_{}", key.to_string().to_uppercase().replace('-', "_"));
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .action(ArgAction::Set)
        .help(format!("{help} [default: {}]", Config::default(key)));
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("default")
                .about("Prints the default configuration file to stdout."),
        );
}

pub fn build() -> Command {
    return Command::new("shellklok")
        .about("An ASCII digital clock for the terminal, rendered with figlet.")
        .version(env!("CARGO_PKG_VERSION"))
        .subcommand(subcommand_config())
        .arg(arg_for(
            ConfigKey::ConfigFile,
            "Path to the TOML configuration file.",
        ))
        .arg(arg_for(
            ConfigKey::FontDir,
            "Directory scanned for .flf and .tlf figlet fonts.",
        ))
        .arg(arg_for(
            ConfigKey::LogFile,
            "File that receives JSON log lines.",
        ))
        .arg(
            arg_for(ConfigKey::LogLevel, "Most verbose log level written.")
                .value_parser(LOG_LEVELS),
        )
        .arg(arg_for(
            ConfigKey::RefreshMs,
            "Milliseconds between clock frames.",
        ))
        .arg(arg_for(
            ConfigKey::Renderer,
            "Name or path of the figlet compatible binary.",
        ));
}

/// Parses the command line and loads the configuration. Returns false when a
/// subcommand already did its work and the clock should not start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("config", subcmd_matches)) => {
            if let Some(("default", _)) = subcmd_matches.subcommand() {
                println!("{}", Config::serialize_default(build())?);
            }
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
