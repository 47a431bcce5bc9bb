//! jot - pin, tag, and search short notes

pub mod cli;
pub mod domain;
pub mod draft;
pub mod notebook;
pub mod query;
pub mod store;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{
        handle_delete, handle_edit, handle_list, handle_new, handle_pin, handle_show, handle_tags,
    },
};

/// Maps `-v` repetitions to a default log level.
fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Sends diagnostics to stderr. `RUST_LOG` overrides the verbosity flags.
fn init_logging(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    // A subscriber may already be installed when embedded; keep the first.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load()?;
    let data_dir = config.data_dir(cli.dir.as_ref());
    tracing::debug!(dir = %data_dir.display(), "using data directory");

    match &cli.command {
        Command::New(args) => handle_new(args, &data_dir),
        Command::Edit(args) => handle_edit(args, &data_dir),
        Command::Delete(args) => handle_delete(args, &data_dir),
        Command::Pin(args) => handle_pin(args, &data_dir),
        Command::List(args) => handle_list(args, &data_dir),
        Command::Show(args) => handle_show(args, &data_dir),
        Command::Tags(args) => handle_tags(args, &data_dir),
        Command::Completions(args) => {
            clap_complete::generate(args.shell, &mut Cli::command(), "jot", &mut std::io::stdout());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(default_log_level(0), "warn");
        assert_eq!(default_log_level(1), "info");
        assert_eq!(default_log_level(2), "debug");
        assert_eq!(default_log_level(7), "trace");
    }
}
