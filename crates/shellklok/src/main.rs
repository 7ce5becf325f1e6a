use anyhow::Result;
use shellklok::application::cli;
use shellklok::application::logging;
use shellklok::application::ui::destruct_terminal_for_panic;
use shellklok::application::ui::start_loop;
use shellklok::configuration::Config;
use shellklok::configuration::ConfigKey;

#[tokio::main]
async fn main() -> Result<()> {
    let should_run = cli::parse().await?;
    if !should_run {
        return Ok(());
    }

    let _log_guard = logging::init_or_warn(
        Config::get(ConfigKey::LogFile).as_ref(),
        &Config::get(ConfigKey::LogLevel),
    );

    std::panic::set_hook(Box::new(|panic_info| {
        destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let result = start_loop().await;
    if let Err(err) = &result {
        destruct_terminal_for_panic();
        tracing::error!(error = %err, "clock stopped");
    }

    return result;
}
