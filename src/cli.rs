use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::{DEFAULT_CONFIG_PATH, PartialConfig};

/// Color output control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "github-lang-rank")]
#[command(
    author,
    version,
    about = "Rank the languages used across a GitHub owner's repositories"
)]
#[command(long_about = "Fetches every repository of a GitHub user or organization, sums the \
    bytes GitHub reports per language, prints a ranked table and writes an SVG card.\n\n\
    Options given on the command line override the config file, which overrides defaults.\n\n\
    Exit codes:\n  \
    0 - Chart written\n  \
    1 - Fetch, empty-data or output error\n  \
    2 - Configuration or usage error")]
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors and hide the progress bar
    #[arg(short, long)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file (JSON, or TOML when the name ends in .toml)
    #[arg(long, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// GitHub user or organization login
    #[arg(short, long)]
    pub username: Option<String>,

    /// GitHub token sent as a bearer credential
    #[arg(long)]
    pub token: Option<String>,

    /// Where to write the SVG chart [default: lang-rank.svg]
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Include forked repositories
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub include_forks: Option<bool>,

    /// Include archived repositories
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub include_archived: Option<bool>,

    /// Treat the username as an organization
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub org: Option<bool>,

    /// Add an "Other" entry for languages beyond --top [default: true]
    #[arg(long, num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub show_other: Option<bool>,

    /// Comma-separated languages to leave out (case-insensitive)
    #[arg(long, value_delimiter = ',')]
    pub exclude: Option<Vec<String>>,

    /// Keep only the N largest languages (0 or less = all)
    #[arg(long, allow_negative_numbers = true)]
    pub top: Option<i64>,
}

impl Cli {
    /// The options set explicitly on the command line, as a config layer.
    #[must_use]
    pub fn overrides(&self) -> PartialConfig {
        PartialConfig {
            username: self.username.clone(),
            token: self.token.clone(),
            output: self.output.clone(),
            include_forks: self.include_forks,
            include_archived: self.include_archived,
            org: self.org,
            show_other: self.show_other,
            exclude: self.exclude.clone(),
            top: self.top,
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
