//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::cli::args::{OutputFormat, SpamScoreArgs};
use crate::classifier::{Class, ScoreResult, TrainingReport};
use crate::error::Result;

/// Result structure for the `score` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreOutput {
    pub message: String,
    pub good_probability: f64,
    pub bad_probability: f64,
    pub matched_tokens: usize,
    pub strict: bool,
    pub prob_is_bad: f64,
}

impl ScoreOutput {
    pub fn new(message: &str, result: &ScoreResult) -> Self {
        ScoreOutput {
            message: message.to_string(),
            good_probability: result.probability(Class::Good),
            bad_probability: result.probability(Class::Bad),
            matched_tokens: result.matched_tokens,
            strict: result.strict,
            prob_is_bad: result.bad_margin(),
        }
    }
}

/// Result structure for the `stats` command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsOutput {
    pub samples: usize,
    pub skipped_records: usize,
    pub training: TrainingReport,
    pub good_tokens: u64,
    pub bad_tokens: u64,
}

/// Output a result in the selected format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &SpamScoreArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &SpamScoreArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    let value = serde_json::to_value(result)?;
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                println!("{key}: {}", format_value(&val));
            }
        }
        other => println!("{}", format_value(&other)),
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &SpamScoreArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    println!("{json}");
    Ok(())
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Null => "null".to_string(),
        serde_json::Value::Array(arr) => {
            let items: Vec<String> = arr.iter().map(format_value).collect();
            format!("[{}]", items.join(", "))
        }
        serde_json::Value::Object(obj) => {
            let items: Vec<String> = obj
                .iter()
                .map(|(k, v)| format!("{k}={}", format_value(v)))
                .collect();
            format!("{{{}}}", items.join(", "))
        }
    }
}
