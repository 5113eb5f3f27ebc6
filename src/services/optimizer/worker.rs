//! Background execution of one optimization run.
//!
//! Each user action spawns one detached thread that performs the service
//! round-trip and the optional plot fetch, then reports back over an mpsc
//! channel. No retries: a failed run requires the user to trigger again.

use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;

use super::client::OptimizerClient;
use super::contract::OptimizationOutcome;
use crate::models::params::RunParameters;

/// Fetched fitness plot, ready for the egui image loader.
#[derive(Debug, Clone)]
pub struct PlotImage {
    /// Unique per run so egui's texture cache never shows a stale plot.
    pub uri: String,
    /// Absolute or service-relative URL, for "open in browser".
    pub source_url: String,
    pub bytes: Arc<[u8]>,
}

#[derive(Debug, Clone)]
pub struct CompletedRun {
    pub outcome: OptimizationOutcome,
    pub plot: Option<PlotImage>,
}

/// Worker output, tagged with the request sequence number so stale results
/// can be discarded.
#[derive(Debug)]
pub struct JobResult {
    pub seq: u64,
    /// Err carries the user-facing message verbatim.
    pub payload: Result<CompletedRun, String>,
}

pub fn spawn_run(
    service_url: String,
    params: RunParameters,
    seq: u64,
    results: Sender<JobResult>,
    notify: impl Fn() + Send + 'static,
) {
    thread::spawn(move || {
        let payload = execute(&service_url, &params, seq);
        if results.send(JobResult { seq, payload }).is_err() {
            log::warn!("Dropping optimization result {}: receiver is gone", seq);
        }
        notify();
    });
}

fn execute(service_url: &str, params: &RunParameters, seq: u64) -> Result<CompletedRun, String> {
    let run = || -> anyhow::Result<CompletedRun> {
        let client = OptimizerClient::new(service_url)?;
        let response = client.run(params)?;
        let outcome = response.into_outcome()?;

        let plot = outcome.fitness_plot_url.clone().and_then(|url| {
            match client.fetch_plot(&url) {
                Ok(bytes) => Some(PlotImage {
                    uri: format!("bytes://fitness-plot-{}.png", seq),
                    source_url: url,
                    bytes: bytes.into(),
                }),
                Err(err) => {
                    // The plot is decoration; the run result still stands
                    log::warn!("Fitness plot unavailable: {:#}", err);
                    None
                }
            }
        });

        Ok(CompletedRun { outcome, plot })
    };

    run().map_err(|err| format!("{:#}", err))
}
