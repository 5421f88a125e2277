use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LangRankError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("missing --username")]
    MissingUsername,

    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    #[error("Request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("Request to {url} failed: HTTP {status} {reason}: {body}")]
    Status {
        url: String,
        status: u16,
        reason: String,
        body: String,
    },

    #[error("Failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("languages for {repository}: {source}")]
    Languages {
        repository: String,
        #[source]
        source: Box<LangRankError>,
    },

    #[error("no repositories after filtering")]
    NoRepositories,

    #[error("no language data to chart")]
    NoLanguageData,

    #[error("Failed to write chart: {path}")]
    ChartWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl LangRankError {
    /// Short category label used as the prefix of printed errors.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_)
            | Self::MissingUsername
            | Self::ConfigRead { .. }
            | Self::ConfigParse { .. } => "Config",
            Self::Http { .. } | Self::Status { .. } | Self::Decode { .. } | Self::Languages { .. } => {
                "Fetch"
            }
            Self::NoRepositories | Self::NoLanguageData => "Empty",
            Self::ChartWrite { .. } => "Output",
            Self::Io(_) => "IO",
        }
    }

    /// Actionable hint shown under the error, if there is one.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::MissingUsername => {
                Some("Pass --username or set \"username\" in the config file")
            }
            Self::Status { status: 401, .. } => Some("Check that the token passed with --token is valid"),
            Self::Status {
                status: 403 | 429, ..
            } => Some("The API rate limit may be exhausted; pass a token with --token"),
            Self::Status { status: 404, .. } => {
                Some("Check the owner name; pass --org when the owner is an organization")
            }
            Self::Languages { source, .. } => source.suggestion(),
            Self::NoRepositories => {
                Some("Use --include-forks or --include-archived to widen the selection")
            }
            Self::NoLanguageData => Some("Check --exclude; every language may have been removed"),
            _ => None,
        }
    }

    /// Whether this error stems from configuration rather than the run itself.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(
            self,
            Self::Config(_) | Self::MissingUsername | Self::ConfigRead { .. } | Self::ConfigParse { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, LangRankError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
