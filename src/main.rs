use log::{error, info};
use std::io::{self, Read};
use text_regression::constants::{DEFAULT_SEED, DEFAULT_TRAIN_PROPORTION};
use text_regression::{
    default_penalty_grid, initial_split, last_fit, read_corpus_from_string,
    tune_with_custom_config, write_metrics_table, Error, DEFAULT_TUNER_CONFIG,
};

fn main() {
    #[cfg(feature = "logger-support")]
    env_logger::init();

    // Read the corpus CSV from stdin
    let mut input = String::new();
    if let Err(e) = io::stdin().read_to_string(&mut input) {
        error!("Failed to read from stdin: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&input) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn run(input: &str) -> Result<(), Error> {
    let documents = read_corpus_from_string(input)?;
    info!("Read {} documents", documents.len());

    let (train_documents, test_documents) =
        initial_split(&documents, DEFAULT_TRAIN_PROPORTION, DEFAULT_SEED)?;

    let config = DEFAULT_TUNER_CONFIG;
    let tune_result = tune_with_custom_config(&config, &train_documents, &default_penalty_grid())?;

    write_metrics_table(&tune_result.metrics_table, io::stdout().lock())?;

    let final_fit = last_fit(
        &config,
        &train_documents,
        &test_documents,
        tune_result.best_penalty,
    )?;

    let test_metrics = final_fit.test_metrics();
    info!(
        "Best penalty {}: test RMSE {:.4}, test R² {:.4}",
        tune_result.best_penalty, test_metrics.rmse, test_metrics.r_squared
    );

    for (token, coefficient) in final_fit.top_terms(10) {
        info!("{:>12.4}  {}", coefficient, token);
    }

    Ok(())
}
