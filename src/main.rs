//! main.rs
//! Entry point for rfd

use rfd::app::Listing;
use rfd::config::Config;
use rfd::utils::cli::{CliOutcome, handle_args};
use rfd::utils::init_logging;

use crossterm::tty::IsTty;
use tracing::error;

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    init_logging();

    let path_arg = match handle_args() {
        CliOutcome::RunList(path) => path,
        CliOutcome::Exit(0) => return ExitCode::SUCCESS,
        CliOutcome::Exit(code) => return ExitCode::from(u8::try_from(code).unwrap_or(1)),
    };

    let mut config = Config::load();
    if !io::stdout().is_tty() {
        config.display_mut().disable_color();
    }

    let dir = match path_arg {
        Some(path) => PathBuf::from(path),
        None => match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                error!("cannot determine current directory: {}", e);
                return ExitCode::FAILURE;
            }
        },
    };

    let listing = match Listing::load(&dir, &config) {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("\n[rfd] Error: Path '{}' cannot be opened: {}", dir.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = listing.render(&mut out, &config).and_then(|()| out.flush()) {
        // Closed pipe, e.g. `rfd | head`.
        if e.kind() != io::ErrorKind::BrokenPipe {
            error!("cannot write listing: {}", e);
            return ExitCode::FAILURE;
        }
    }
    ExitCode::SUCCESS
}
