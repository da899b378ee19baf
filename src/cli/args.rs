//! Command line argument parsing for the spamscore CLI using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::classifier::TrainingPolicy;

/// spamscore - Naive Bayes spam scoring for short text messages
#[derive(Parser, Debug, Clone)]
#[command(name = "spamscore")]
#[command(about = "Train a Naive Bayes spam classifier and score messages")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct SpamScoreArgs {
    /// Verbosity level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl SpamScoreArgs {
    /// Get the effective verbosity level (0=quiet, 1=normal, 2=verbose, 3+=debug)
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            self.verbose.saturating_add(1)
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Train on the data file and serve the scoring form
    Serve(ServeArgs),

    /// Train on the data file and score a single message
    Score(ScoreArgs),

    /// Train on the data file and show model statistics
    Stats(StatsArgs),
}

/// Options shared by every command that trains a classifier.
#[derive(Args, Debug, Clone, Default)]
pub struct TrainingArgs {
    /// Training data CSV file
    #[arg(short, long, value_name = "DATA_FILE")]
    pub data: Option<PathBuf>,

    /// Training policy (symmetric, legacy_good_reinforcement)
    #[arg(long)]
    pub policy: Option<TrainingPolicy>,
}

/// Arguments for serving the web form
#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Listen address, e.g. 127.0.0.1:9090
    #[arg(short, long, value_name = "ADDRESS")]
    pub bind: Option<String>,
}

/// Arguments for scoring a message
#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub training: TrainingArgs,

    /// Message to score
    #[arg(value_name = "MESSAGE")]
    pub message: String,
}

/// Arguments for showing statistics
#[derive(Args, Debug, Clone)]
pub struct StatsArgs {
    #[command(flatten)]
    pub training: TrainingArgs,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_command() {
        let args = SpamScoreArgs::try_parse_from([
            "spamscore",
            "score",
            "--data",
            "sms.csv",
            "--policy",
            "legacy_good_reinforcement",
            "free money now",
        ])
        .unwrap();

        if let Command::Score(score_args) = args.command {
            assert_eq!(score_args.message, "free money now");
            assert_eq!(score_args.training.data, Some(PathBuf::from("sms.csv")));
            assert_eq!(
                score_args.training.policy,
                Some(TrainingPolicy::LegacyGoodReinforcement)
            );
        } else {
            panic!("Expected Score command");
        }
    }

    #[test]
    fn test_serve_command() {
        let args =
            SpamScoreArgs::try_parse_from(["spamscore", "serve", "--bind", "127.0.0.1:8080"])
                .unwrap();

        if let Command::Serve(serve_args) = args.command {
            assert_eq!(serve_args.bind.as_deref(), Some("127.0.0.1:8080"));
            assert!(serve_args.training.data.is_none());
            assert!(serve_args.training.policy.is_none());
        } else {
            panic!("Expected Serve command");
        }
    }

    #[test]
    fn test_invalid_policy_rejected() {
        let result =
            SpamScoreArgs::try_parse_from(["spamscore", "stats", "--policy", "twice"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_verbosity_levels() {
        let args = SpamScoreArgs::try_parse_from(["spamscore", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        let args = SpamScoreArgs::try_parse_from(["spamscore", "-v", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 2);

        let args = SpamScoreArgs::try_parse_from(["spamscore", "-vv", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        let args = SpamScoreArgs::try_parse_from(["spamscore", "-v", "--quiet", "stats"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            SpamScoreArgs::try_parse_from(["spamscore", "--format", "json", "--pretty", "stats"])
                .unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
        assert!(args.pretty);
    }
}
