mod cli;
mod utils;

use std::path::PathBuf;
use std::process::exit;

use clap::ArgMatches;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Root};
use log4rs::Config;

use reposync::core::remote::GitHubClient;
use reposync::ops::{self, SyncOptions};

use crate::utils::progress::MultiProgress;

fn main() {
    let matches = match cli::build_cli().try_get_matches() {
        Ok(r) => r,
        Err(e) => e.exit(),
    };

    init_log(matches.get_count("verbose"));

    let options = SyncOptions::new(
        matches.get_one::<PathBuf>("local-dir"),
        matches.get_one::<String>("org").expect("--org is required"),
        cli::parse_terms(&matches),
        matches.get_one::<usize>("thread").copied(),
        Some(matches.get_flag("dry-run")),
        Some(matches.get_flag("archived")),
        Some(matches.get_flag("fork")),
    );

    let service = GitHubClient::new(resolve_token(&matches));
    let progress = MultiProgress::default();

    match ops::sync_repos(options, &service, progress) {
        Ok(report) => {
            if !report.outcomes.is_empty() {
                println!("{}", report.summary());
            }
            if report.failed_count() > 0 {
                exit(1);
            }
        }
        Err(e) => {
            eprintln!("{}", e);
            exit(1);
        }
    }
}

fn init_log(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let stdout = ConsoleAppender::builder().build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .unwrap();

    log4rs::init_config(config).unwrap();
}

/// `--token` wins over `--token-file`, which defaults to `~/.github-token`;
/// a missing file only matters once the API rejects the request
fn resolve_token(matches: &ArgMatches) -> Option<String> {
    if let Some(token) = matches.get_one::<String>("token") {
        return Some(token.trim().to_string());
    }

    let token_file = matches
        .get_one::<PathBuf>("token-file")
        .cloned()
        .or_else(|| home::home_dir().map(|home| home.join(".github-token")))?;

    match std::fs::read_to_string(token_file) {
        Ok(token) => Some(token.trim().to_string()),
        Err(_) => None,
    }
}
