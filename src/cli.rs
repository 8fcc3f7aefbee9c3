//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

/// Check email addresses against Have I Been Pwned.
///
/// Reads a text file, extracts every email address it contains (one per line
/// or mixed with other text) and reports the breaches each one appears in.
/// Requires HIBP_API_KEY in the environment or a .env file.
#[derive(Parser, Debug)]
#[command(name = "hibp-checker")]
#[command(author, version, about)]
pub struct Args {
    /// File containing emails to check (one per line or mixed with other text)
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Increase log verbosity on stderr (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log errors on stderr
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Default tracing filter when `RUST_LOG` is unset.
    #[must_use]
    pub fn default_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "debug",
                _ => "trace",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_file_long_flag() {
        let args = Args::try_parse_from(["hibp-checker", "--file", "emails.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("emails.txt"));
        assert_eq!(args.verbose, 0);
        assert!(!args.quiet);
    }

    #[test]
    fn test_cli_file_short_flag() {
        let args = Args::try_parse_from(["hibp-checker", "-f", "list.txt"]).unwrap();
        assert_eq!(args.file, PathBuf::from("list.txt"));
    }

    #[test]
    fn test_cli_file_is_required() {
        let err = Args::try_parse_from(["hibp-checker"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn test_cli_verbose_flag_increments_count() {
        let args = Args::try_parse_from(["hibp-checker", "-f", "x", "-vv"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert_eq!(args.default_log_level(), "trace");
    }

    #[test]
    fn test_cli_log_levels() {
        let args = Args::try_parse_from(["hibp-checker", "-f", "x"]).unwrap();
        assert_eq!(args.default_log_level(), "warn");
        let args = Args::try_parse_from(["hibp-checker", "-f", "x", "-v"]).unwrap();
        assert_eq!(args.default_log_level(), "debug");
        let args = Args::try_parse_from(["hibp-checker", "-f", "x", "-q", "-v"]).unwrap();
        assert_eq!(args.default_log_level(), "error");
    }

    #[test]
    fn test_cli_help_flag_shows_usage() {
        let err = Args::try_parse_from(["hibp-checker", "--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_cli_version_flag_shows_version() {
        let err = Args::try_parse_from(["hibp-checker", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_cli_invalid_flag_returns_error() {
        let err = Args::try_parse_from(["hibp-checker", "-f", "x", "--invalid-flag"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::UnknownArgument);
    }
}
