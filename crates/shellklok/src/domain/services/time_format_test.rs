use chrono::TimeZone;
use chrono::Utc;

use super::format_time;
use super::time_pattern;
use crate::domain::models::DisplayConfig;

fn config(seconds: usize, mode: usize) -> DisplayConfig {
    return DisplayConfig {
        seconds,
        mode,
        ..Default::default()
    };
}

#[test]
fn it_selects_a_pattern_for_every_combination() {
    assert_eq!(time_pattern(&config(0, 0)), "%H:%M:%S");
    assert_eq!(time_pattern(&config(1, 0)), "%H:%M");
    assert_eq!(time_pattern(&config(0, 1)), "%I:%M:%S %p");
    assert_eq!(time_pattern(&config(1, 1)), "%I:%M %p");
}

#[test]
fn it_formats_an_afternoon_instant() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 15, 4, 5).unwrap();

    assert_eq!(format_time(&now, &config(0, 0)), "15:04:05");
    assert_eq!(format_time(&now, &config(1, 0)), "15:04");
    assert_eq!(format_time(&now, &config(0, 1)), "03:04:05 PM");
    assert_eq!(format_time(&now, &config(1, 1)), "03:04 PM");
}

#[test]
fn it_formats_midnight_in_12h_mode() {
    let now = Utc.with_ymd_and_hms(2024, 3, 9, 0, 30, 0).unwrap();

    assert_eq!(format_time(&now, &config(1, 1)), "12:30 AM");
    assert_eq!(format_time(&now, &config(1, 0)), "00:30");
}
