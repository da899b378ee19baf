//! Command implementations for the spamscore CLI.

use std::sync::Arc;

use log::info;

use crate::classifier::{Class, NaiveBayesClassifier, SampleSet, Trainer, TrainingReport};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::config::SpamScoreConfig;
use crate::error::Result;
use crate::loader::CsvSampleLoader;
use crate::server::{self, AppState};

/// Execute a CLI command.
pub fn execute_command(args: SpamScoreArgs) -> Result<()> {
    let config = load_config(&args)?;

    match &args.command {
        Command::Serve(serve_args) => serve(serve_args, config),
        Command::Score(score_args) => score_message(score_args, config, &args),
        Command::Stats(stats_args) => show_stats(stats_args, config, &args),
    }
}

/// Read the configuration file, or fall back to defaults.
fn load_config(args: &SpamScoreArgs) -> Result<SpamScoreConfig> {
    match &args.config {
        Some(path) => SpamScoreConfig::from_file(path),
        None => Ok(SpamScoreConfig::default()),
    }
}

/// Apply command line overrides to the configuration.
pub fn apply_training_args(
    mut config: SpamScoreConfig,
    training: &TrainingArgs,
) -> SpamScoreConfig {
    if let Some(data) = &training.data {
        config.data_path = data.clone();
    }
    if let Some(policy) = training.policy {
        config.training_policy = policy;
    }
    config
}

/// Load the training data and train a classifier.
///
/// Any load failure is returned before training starts.
pub fn load_and_train(
    config: &SpamScoreConfig,
) -> Result<(SampleSet, NaiveBayesClassifier, TrainingReport)> {
    config.validate()?;

    let loader = CsvSampleLoader::with_config(config.loader.clone());
    let samples = loader.load_path(&config.data_path)?;

    let (classifier, report) = Trainer::new(config.training_policy).train(&samples);
    Ok((samples, classifier, report))
}

/// Train and serve the web form.
fn serve(args: &ServeArgs, config: SpamScoreConfig) -> Result<()> {
    let mut config = apply_training_args(config, &args.training);
    if let Some(bind) = &args.bind {
        config.bind_address = bind.clone();
    }

    let (_, classifier, _) = load_and_train(&config)?;
    let state = AppState::new(Arc::new(classifier));

    for probe in &config.probe_messages {
        let result = state.score(probe);
        info!(
            "probe {:?}: scores {:?} matched {} strict {}",
            probe, result.scores, result.matched_tokens, result.strict
        );
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(server::serve(&config.bind_address, state))
}

/// Train and score a single message.
fn score_message(
    args: &ScoreArgs,
    config: SpamScoreConfig,
    cli_args: &SpamScoreArgs,
) -> Result<()> {
    let config = apply_training_args(config, &args.training);
    let (_, classifier, _) = load_and_train(&config)?;

    let state = AppState::new(Arc::new(classifier));
    let result = state.score(&args.message);

    output_result(
        "Message scored",
        &ScoreOutput::new(&args.message, &result),
        cli_args,
    )
}

/// Train and show statistics.
fn show_stats(args: &StatsArgs, config: SpamScoreConfig, cli_args: &SpamScoreArgs) -> Result<()> {
    let config = apply_training_args(config, &args.training);
    let (samples, classifier, report) = load_and_train(&config)?;

    output_result(
        "Classifier statistics",
        &StatsOutput {
            samples: samples.len(),
            skipped_records: samples.skipped_records(),
            good_tokens: classifier.table().total_for(Class::Good),
            bad_tokens: classifier.table().total_for(Class::Bad),
            training: report,
        },
        cli_args,
    )
}
