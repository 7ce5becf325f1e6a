#[cfg(test)]
#[path = "figlet_test.rs"]
mod tests;

use std::process::Stdio;
use std::time::Duration;

use anyhow::bail;
use anyhow::Result;
use async_trait::async_trait;
use tokio::process::Command;
use tokio::time;

use crate::domain::models::ArtRenderer;
use crate::domain::models::RenderError;

pub const DEFAULT_RENDERER: &str = "figlet";
pub const RENDER_TIMEOUT: Duration = Duration::from_secs(2);

/// Spawns a figlet-compatible program once per frame.
#[derive(Debug, Clone)]
pub struct Figlet {
    binary: String,
    timeout: Duration,
}

impl Default for Figlet {
    fn default() -> Figlet {
        return Figlet::new(DEFAULT_RENDERER);
    }
}

impl Figlet {
    pub fn new(binary: &str) -> Figlet {
        return Figlet {
            binary: binary.to_string(),
            timeout: RENDER_TIMEOUT,
        };
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Figlet {
        self.timeout = timeout;
        return self;
    }
}

#[async_trait]
impl ArtRenderer for Figlet {
    fn name(&self) -> String {
        return self.binary.clone();
    }

    async fn health_check(&self) -> Result<()> {
        let output = Command::new(&self.binary)
            .arg("-v")
            .stdin(Stdio::null())
            .output()
            .await;

        match output {
            Ok(output) if output.status.success() => return Ok(()),
            Ok(output) => bail!("{} -v exited with {}", self.binary, output.status),
            Err(err) => bail!("{} is not runnable: {err}", self.binary),
        }
    }

    async fn render(&self, text: &str, font: &str) -> Result<Vec<String>, RenderError> {
        let mut cmd = Command::new(&self.binary);
        cmd.args(["-t", "-f", font, text])
            .stdin(Stdio::null())
            .kill_on_drop(true);

        let output = time::timeout(self.timeout, cmd.output())
            .await
            .map_err(|_| RenderError::Timeout(self.timeout))?
            .map_err(|source| RenderError::Spawn {
                binary: self.binary.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(RenderError::Exit {
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        let lines: Vec<String> = stdout.lines().map(str::to_string).collect();
        if lines.iter().all(|line| line.trim().is_empty()) {
            return Err(RenderError::Empty);
        }

        return Ok(lines);
    }
}
