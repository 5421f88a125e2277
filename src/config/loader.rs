use std::io::ErrorKind;
use std::path::Path;

use crate::error::{LangRankError, Result};

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::PartialConfig;

/// Loads the optional config file.
///
/// A missing file is not an error: the run proceeds on defaults and flags.
/// Files ending in `.toml` are parsed as TOML, everything else as JSON.
#[derive(Debug)]
pub struct FileConfigLoader<F: FileSystem = RealFileSystem> {
    fs: F,
}

impl Default for FileConfigLoader<RealFileSystem> {
    fn default() -> Self {
        Self::new()
    }
}

impl FileConfigLoader<RealFileSystem> {
    #[must_use]
    pub const fn new() -> Self {
        Self { fs: RealFileSystem }
    }
}

impl<F: FileSystem> FileConfigLoader<F> {
    #[must_use]
    pub const fn with_fs(fs: F) -> Self {
        Self { fs }
    }

    /// Read and parse the config file at `path`.
    ///
    /// # Errors
    /// Returns [`LangRankError::ConfigRead`] if the file exists but cannot be
    /// read, or [`LangRankError::ConfigParse`] if its contents are malformed.
    pub fn load(&self, path: &Path) -> Result<PartialConfig> {
        if path.as_os_str().is_empty() {
            return Ok(PartialConfig::default());
        }

        let content = match self.fs.read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "config file not found, using defaults");
                return Ok(PartialConfig::default());
            }
            Err(source) => {
                return Err(LangRankError::ConfigRead {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        tracing::debug!(path = %path.display(), "loading config file");
        Self::parse(path, &content)
    }

    fn parse(path: &Path, content: &str) -> Result<PartialConfig> {
        let parsed = if is_toml(path) {
            toml::from_str(content).map_err(|e| e.message().to_string())
        } else {
            serde_json::from_str(content).map_err(|e| e.to_string())
        };

        parsed.map_err(|message| LangRankError::ConfigParse {
            path: path.to_path_buf(),
            message,
        })
    }
}

fn is_toml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
