use std::io::Write;

use clap::Parser;

use github_lang_rank::cli::{Cli, ColorChoice};
use github_lang_rank::config::FileConfigLoader;
use github_lang_rank::github::{GitHubApi, ReqwestClient};
use github_lang_rank::output::ErrorOutput;
use github_lang_rank::pipeline::build_report;
use github_lang_rank::{EXIT_SUCCESS, exit_code_for, logging};

const fn error_output(choice: ColorChoice) -> Option<ErrorOutput> {
    match choice {
        ColorChoice::Auto => None,
        ColorChoice::Always => Some(ErrorOutput::with_colors(true)),
        ColorChoice::Never => Some(ErrorOutput::with_colors(false)),
    }
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let exit_code = match run(&cli) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            error_output(cli.color)
                .unwrap_or_else(ErrorOutput::stderr)
                .print(&e);
            exit_code_for(&e)
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: &Cli) -> github_lang_rank::Result<()> {
    // 1. Resolve settings: defaults <- config file <- explicit flags
    let file = FileConfigLoader::new().load(&cli.config)?;
    let config = file.overlay(cli.overrides()).resolve()?;
    tracing::debug!(owner = %config.owner(), output = %config.output.display(), "resolved settings");

    // 2. Fetch, filter, aggregate and rank
    let github = GitHubApi::new(ReqwestClient::new(config.token.clone())?);
    let report = build_report(&config, &github, cli.quiet)?;

    // 3. Console summary, then the chart
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(report.summary().as_bytes())?;
    stdout.flush()?;

    report.write_chart(&config.output)
}
