pub mod cli;
pub mod config;
pub mod error;
pub mod github;
pub mod logging;
pub mod output;
pub mod pipeline;
pub mod ranking;
pub mod source;

#[cfg(test)]
mod test_fixtures;

pub use error::{LangRankError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RUN_ERROR: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Process exit code for a failed run.
#[must_use]
pub const fn exit_code_for(error: &LangRankError) -> i32 {
    if error.is_config_error() {
        EXIT_CONFIG_ERROR
    } else {
        EXIT_RUN_ERROR
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
