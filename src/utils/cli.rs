//! Command-line argument parsing and help for rfd.
//!
//! This module handles the few CLI flags rfd understands.
//!
//! When invoked with no args (rfd), the current directory is listed.

use crate::config::Config;

/// What the binary should do after looking at its arguments.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    List,
    ListPath(String),
    Help,
    Version,
    Init,
    Usage(String),
}

/// Outcome of [handle_args] for the entry point.
#[derive(Debug, PartialEq, Eq)]
pub enum CliOutcome {
    RunList(Option<String>),
    Exit(i32),
}

/// Maps the arguments (without the program name) to a [CliAction].
pub fn parse_args<I>(args: I) -> CliAction
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();

    if args.is_empty() {
        return CliAction::List;
    }

    if args.len() > 1 {
        return CliAction::Usage("rfd accepts only one argument at a time.".to_string());
    }

    match args[0].as_str() {
        "--version" | "-v" => CliAction::Version,
        "-h" | "--help" => CliAction::Help,
        "--init" => CliAction::Init,
        arg if !arg.starts_with('-') && !arg.trim().is_empty() => {
            CliAction::ListPath(arg.to_string())
        }
        arg => CliAction::Usage(format!("Unknown argument: {}", arg)),
    }
}

/// Parses the process arguments and performs the informational actions right away.
pub fn handle_args() -> CliOutcome {
    match parse_args(std::env::args().skip(1)) {
        CliAction::List => CliOutcome::RunList(None),
        CliAction::ListPath(path) => CliOutcome::RunList(Some(path)),
        CliAction::Help => {
            print_help();
            CliOutcome::Exit(0)
        }
        CliAction::Version => {
            print_version();
            CliOutcome::Exit(0)
        }
        CliAction::Init => {
            let config_path = Config::default_path();
            match Config::generate_default(&config_path) {
                Ok(()) => {
                    println!("Default config generated at {:?}", config_path);
                    CliOutcome::Exit(0)
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    CliOutcome::Exit(1)
                }
            }
        }
        CliAction::Usage(message) => {
            eprintln!("Error: {}", message);
            eprintln!("Usage: rfd [PATH] or rfd [OPTION]");
            eprintln!("Try --help for available options");
            CliOutcome::Exit(2)
        }
    }
}

fn print_version() {
    println!("rfd {}", env!("CARGO_PKG_VERSION"));
}

fn print_help() {
    println!(
        r#"rfd - fixed-width directory listing for terminal file browsers

USAGE:
  rfd [PATH]

PATH:
  Directory to list (defaults to current directory)

OPTIONS:
      --init              Generate the default configuration
  -h, --help              Print help information
  -v, --version           Display the current installed version of rfd

ENVIRONMENT:
  RFD_CONFIG              Override the default config path
  RFD_LOG                 Log filter for diagnostics on stderr (e.g. "debug")
"#
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn no_args_lists_current_dir() {
        assert_eq!(parse_args(args(&[])), CliAction::List);
    }

    #[test]
    fn path_argument() {
        assert_eq!(
            parse_args(args(&["/tmp"])),
            CliAction::ListPath("/tmp".to_string())
        );
    }

    #[test]
    fn flags() {
        assert_eq!(parse_args(args(&["-h"])), CliAction::Help);
        assert_eq!(parse_args(args(&["--help"])), CliAction::Help);
        assert_eq!(parse_args(args(&["-v"])), CliAction::Version);
        assert_eq!(parse_args(args(&["--init"])), CliAction::Init);
    }

    #[test]
    fn bad_arguments_print_usage() {
        assert!(matches!(
            parse_args(args(&["--frobnicate"])),
            CliAction::Usage(_)
        ));
        assert!(matches!(parse_args(args(&["a", "b"])), CliAction::Usage(_)));
        assert!(matches!(parse_args(args(&["  "])), CliAction::Usage(_)));
    }
}
