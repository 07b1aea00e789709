use anyhow::{Context, Result};
use clap::Parser;
use hyd_core::{HydError, Journal, JsonFileStore, ListKind, Settings, DRAFTS_KEY, EXPORTS_KEY};
use log::{debug, LevelFilter};
use std::process::ExitCode;

mod cli;
mod commands;
mod paths;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hyd: {}", describe(&e));
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // RUST_LOG, when set, takes precedence over -v.
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init()
        .ok();
}

fn run(cli: Cli) -> Result<()> {
    let settings_path = cli.config.unwrap_or_else(paths::settings_file_path);
    let data_dir = cli.data_dir.unwrap_or_else(paths::default_data_dir);
    let format = cli.format;
    debug!("data dir {}, settings {}", data_dir.display(), settings_path.display());

    let open_journal = || -> Result<Journal> {
        Journal::open(
            Box::new(JsonFileStore::new(&data_dir, EXPORTS_KEY)),
            Box::new(JsonFileStore::new(&data_dir, DRAFTS_KEY)),
            Settings::load(&settings_path),
        )
        .with_context(|| format!("Failed to open notes in {}", data_dir.display()))
    };

    match cli.command {
        Commands::New(args) => commands::run_new(&mut open_journal()?, args, format),
        Commands::Archive { cmd } => {
            commands::run_list(&mut open_journal()?, ListKind::Archive, cmd, format)
        }
        Commands::Drafts { cmd } => {
            commands::run_list(&mut open_journal()?, ListKind::Drafts, cmd, format)
        }
        Commands::Settings { cmd } => commands::run_settings(&settings_path, cmd, format),
    }
}

/// Prefers the short user-facing message for library errors.
fn describe(e: &anyhow::Error) -> String {
    match e.downcast_ref::<HydError>() {
        Some(hyd) if e.chain().count() == 1 => hyd.user_message(),
        Some(hyd) => format!("{e}: {}", hyd.user_message()),
        None => format!("{e:#}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_uses_user_message() {
        let e = anyhow::Error::new(HydError::IndexOutOfRange { index: 7, len: 1 });
        assert_eq!(describe(&e), "No item at position 7");
    }

    #[test]
    fn describe_keeps_context() {
        let e = anyhow::Error::new(HydError::ValidationFailed("Body is required".to_string()))
            .context("Failed to save");
        assert_eq!(describe(&e), "Failed to save: Body is required");
    }
}
