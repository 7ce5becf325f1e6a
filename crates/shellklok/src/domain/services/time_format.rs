#[cfg(test)]
#[path = "time_format_test.rs"]
mod tests;

use std::fmt;

use chrono::DateTime;
use chrono::Local;
use chrono::TimeZone;

use crate::domain::models::ClockMode;
use crate::domain::models::DisplayConfig;

pub fn time_pattern(config: &DisplayConfig) -> &'static str {
    return match (config.clock_mode(), config.shows_seconds()) {
        (ClockMode::H12, true) => "%I:%M:%S %p",
        (ClockMode::H12, false) => "%I:%M %p",
        (ClockMode::H24, true) => "%H:%M:%S",
        (ClockMode::H24, false) => "%H:%M",
    };
}

pub fn format_time<Tz: TimeZone>(now: &DateTime<Tz>, config: &DisplayConfig) -> String
where
    Tz::Offset: fmt::Display,
{
    return now.format(time_pattern(config)).to_string();
}

pub fn local_time(config: &DisplayConfig) -> String {
    return format_time(&Local::now(), config);
}
