use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Bikram Samwat <-> Gregorian date converter.
#[derive(Parser)]
#[command(name = "bikram", version, about = "Bikram Samwat date converter")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert an AD date to BS
    ToBs {
        /// AD date (YYYY-MM-DD)
        date: String,
        /// BS output pattern, e.g. "%d %B %Y"
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Convert a BS date to AD
    ToAd {
        /// BS date (YYYY-MM-DD)
        date: String,
        /// chrono strftime pattern for the AD output
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Today's BS date
    Today {
        /// BS output pattern
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Render a BS date with a pattern
    Format {
        /// BS date (YYYY-MM-DD)
        date: String,
        /// Pattern, e.g. "%Yne %Bne %dne"
        pattern: String,
    },
    /// Parse BS text with a pattern
    Parse {
        /// Text to parse
        text: String,
        /// Pattern the text follows
        pattern: String,
    },
    /// Shift a BS date by a signed number of days
    Add {
        /// BS date (YYYY-MM-DD)
        date: String,
        /// Days to add; negative moves backward
        #[arg(allow_negative_numbers = true)]
        days: i64,
        /// BS output pattern
        #[arg(short, long)]
        format: Option<String>,
    },
    /// Signed day count from the second BS date to the first
    Diff {
        /// BS date
        a: String,
        /// BS date subtracted from the first
        b: String,
    },
    /// Month lengths of a BS year
    Year {
        /// BS year
        year: i32,
    },
    /// BS years covered and their AD span
    Range,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["bikram", "to-bs", "2016-11-13", "-vv", "--config", "b.toml"])
            .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, Some(PathBuf::from("b.toml")));
        assert!(matches!(
            cli.command,
            Command::ToBs { ref date, format: None } if date == "2016-11-13"
        ));
    }

    #[test]
    fn add_accepts_negative_days() {
        let cli = Cli::try_parse_from(["bikram", "add", "2073-07-28", "-10"]).unwrap();
        assert!(matches!(cli.command, Command::Add { days: -10, .. }));
    }

    #[test]
    fn format_flag() {
        let cli =
            Cli::try_parse_from(["bikram", "today", "--format", "%d %B %Y"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Today { format: Some(ref f) } if f == "%d %B %Y"
        ));
    }

    #[test]
    fn missing_argument_is_rejected() {
        assert!(Cli::try_parse_from(["bikram", "diff", "2073-07-28"]).is_err());
        assert!(Cli::try_parse_from(["bikram", "year", "two thousand"]).is_err());
    }
}
