use std::time::Duration;

use super::Figlet;
use crate::domain::models::ArtRenderer;
use crate::domain::models::RenderError;

#[tokio::test]
async fn it_returns_program_output_as_lines() {
    // echo prints its arguments, which makes the invocation visible.
    let renderer = Figlet::new("echo");

    let lines = renderer.render("12:34", "slant").await.unwrap();
    assert_eq!(lines, vec!["-t -f slant 12:34"]);
}

#[tokio::test]
async fn it_reports_a_missing_binary() {
    let renderer = Figlet::new("shellklok-no-such-renderer");

    let err = renderer.render("12:34", "slant").await.unwrap_err();
    assert!(matches!(err, RenderError::Spawn { .. }));
    assert!(renderer.health_check().await.is_err());
}

#[tokio::test]
async fn it_reports_a_non_zero_exit() {
    let renderer = Figlet::new("false");

    let err = renderer.render("12:34", "slant").await.unwrap_err();
    assert!(matches!(err, RenderError::Exit { .. }));
}

#[tokio::test]
async fn it_reports_empty_output() {
    let renderer = Figlet::new("true");

    let err = renderer.render("12:34", "slant").await.unwrap_err();
    assert!(matches!(err, RenderError::Empty));
}

#[tokio::test]
async fn it_keeps_the_configured_timeout() {
    let renderer = Figlet::new("figlet").with_timeout(Duration::from_millis(250));

    assert_eq!(renderer.name(), "figlet");
    assert_eq!(renderer.timeout, Duration::from_millis(250));
}
