//! One-shot command flows
//!
//! Console variants of the dashboard operations: same validation, same
//! client calls, results printed instead of rendered.

use crate::api::types::Kernel;
use crate::api::{ApiClient, ClassifierApi};
use crate::controller::{validate_dataset_filename, validate_url_input};
use crate::pretty::{print_cmd_error, print_cmd_info};
use std::error::Error;
use std::path::Path;

/// Analyze a single URL and print the verdict.
pub async fn analyze_once(client: &ApiClient, input: &str) -> Result<(), Box<dyn Error>> {
    let url = match validate_url_input(input) {
        Ok(url) => url,
        Err(e) => {
            print_cmd_error!("Invalid input", "{}", e);
            return Err(Box::new(e));
        }
    };

    let prediction = client.predict(url).await?;

    let verdict = if prediction.is_malicious {
        "\x1b[1;31mMALICIOUS\x1b[0m"
    } else {
        "\x1b[1;32mSAFE\x1b[0m"
    };
    println!("{}  {}", verdict, prediction.url);
    println!("Confidence:  {:.0}%", prediction.confidence * 100.0);
    println!(
        "Probability: {:.0}% legitimate / {:.0}% malicious",
        prediction.probability_legitimate * 100.0,
        prediction.probability_malicious * 100.0
    );
    if let Some(risk_level) = &prediction.risk_level {
        println!("Risk level:  {}", risk_level);
    }
    println!("{}", prediction.recommendation);
    Ok(())
}

/// Upload a training dataset and print the receipt.
pub async fn upload_once(client: &ApiClient, path: &Path) -> Result<(), Box<dyn Error>> {
    let filename = path
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_default();

    if let Err(e) = validate_dataset_filename(&filename) {
        print_cmd_error!("Invalid dataset", "{}", e);
        return Err(Box::new(e));
    }

    let contents = tokio::fs::read(path).await?;
    let receipt = client.upload_dataset(&filename, contents).await?;

    print_cmd_info!(
        "Dataset uploaded",
        "{} ({}, {} bytes)",
        receipt.message,
        receipt.filename,
        receipt.size
    );
    Ok(())
}

/// Run a training request and print the resulting metrics.
pub async fn train_once(client: &ApiClient, kernel: Kernel, c: f64) -> Result<(), Box<dyn Error>> {
    println!("Training model ({} kernel, C={:.2})...", kernel, c);

    let outcome = client.train(kernel, c).await?;

    print_cmd_info!(
        "Training complete",
        "{}\nKernel: {}  F1-Score: {:.1}%  Accuracy: {:.1}%",
        outcome.message,
        outcome.kernel,
        outcome.metrics.f1_score * 100.0,
        outcome.metrics.accuracy * 100.0
    );
    Ok(())
}
