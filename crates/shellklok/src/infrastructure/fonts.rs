#[cfg(test)]
#[path = "fonts_test.rs"]
mod tests;

use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use tokio::fs;

pub const DEFAULT_FONT_DIR: &str = "/usr/share/figlet/fonts";
pub const FALLBACK_FONTS: [&str; 3] = ["slant", "block", "jazmine"];

const FONT_EXTENSIONS: [&str; 2] = ["flf", "tlf"];

pub struct FontCatalog {}

impl FontCatalog {
    /// Sorted font names found in `dir`. A missing, unreadable or empty
    /// directory yields the fallback list instead of an error.
    pub async fn discover(dir: &Path) -> Vec<String> {
        match FontCatalog::scan(dir).await {
            Ok(fonts) if !fonts.is_empty() => {
                tracing::debug!(dir = %dir.display(), count = fonts.len(), "fonts discovered");
                return fonts;
            }
            Ok(_) => {
                tracing::warn!(dir = %dir.display(), "no fonts found, using fallback list");
            }
            Err(err) => {
                tracing::warn!(dir = %dir.display(), error = %err, "font directory unavailable, using fallback list");
            }
        }

        return FontCatalog::fallback();
    }

    pub fn fallback() -> Vec<String> {
        return FALLBACK_FONTS.iter().map(|e| e.to_string()).collect();
    }

    async fn scan(dir: &Path) -> Result<Vec<String>> {
        let mut fonts = vec![];
        let mut entries = fs::read_dir(dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_font = path
                .extension()
                .and_then(OsStr::to_str)
                .map(|ext| FONT_EXTENSIONS.contains(&ext))
                .unwrap_or(false);
            if !is_font {
                continue;
            }

            if let Some(stem) = path.file_stem().and_then(OsStr::to_str) {
                fonts.push(stem.to_string());
            }
        }

        // figlet and toilet variants of one font share a name.
        fonts.sort();
        fonts.dedup();

        return Ok(fonts);
    }
}
