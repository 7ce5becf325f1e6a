use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to start '{binary}': {source}")]
    Spawn {
        binary: String,
        #[source]
        source: std::io::Error,
    },
    #[error("renderer did not finish within {0:?}")]
    Timeout(Duration),
    #[error("renderer exited with {status}: {stderr}")]
    Exit { status: String, stderr: String },
    #[error("renderer produced invalid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    #[error("renderer produced no output")]
    Empty,
}

/// Turns a short string into multi-line text art using a named font.
#[async_trait]
pub trait ArtRenderer: Send + Sync {
    fn name(&self) -> String;
    async fn health_check(&self) -> Result<()>;
    async fn render(&self, text: &str, font: &str) -> Result<Vec<String>, RenderError>;
}

pub type ArtRendererBox = Box<dyn ArtRenderer>;
