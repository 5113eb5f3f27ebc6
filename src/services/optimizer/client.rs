use anyhow::{anyhow, Context, Result};
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::time::Duration;

use super::contract::{ErrorBody, RunRequest, RunResponse};
use crate::models::params::RunParameters;

/// Blocking HTTP client for the optimization service.
///
/// Must run on a worker thread; the UI thread never blocks on it.
pub struct OptimizerClient {
    client: Client,
    base_url: String,
    max_plot_bytes: usize,
}

impl OptimizerClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .context("Failed to build optimizer HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            max_plot_bytes: 5 * 1024 * 1024,
        })
    }

    /// Run one optimization. Non-success responses surface the service's
    /// own `error` message verbatim when it sends one.
    pub fn run(&self, params: &RunParameters) -> Result<RunResponse> {
        let url = format!("{}/run_ga", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&RunRequest::from(params))
            .send()
            .context("Network error while contacting the optimization service")?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .ok()
                .map(|body| body.error)
                .unwrap_or_else(|| format!("Optimization service returned HTTP {}", status));
            return Err(anyhow!(message));
        }

        response
            .json::<RunResponse>()
            .context("Malformed response from the optimization service")
    }

    /// Fetch the fitness plot as opaque image bytes. The plot is a side
    /// artifact; callers degrade to a placeholder on failure.
    pub fn fetch_plot(&self, url: &str) -> Result<Vec<u8>> {
        let absolute = self.resolve(url);
        let response = self
            .client
            .get(&absolute)
            .send()
            .context("Network error while fetching the fitness plot")?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(anyhow!("Fitness plot fetch failed with HTTP status {}", status));
        }

        if let Some(content_length) = response.content_length() {
            if content_length as usize > self.max_plot_bytes {
                return Err(anyhow!(
                    "Fitness plot too large ({} bytes > {} bytes)",
                    content_length,
                    self.max_plot_bytes
                ));
            }
        }

        let bytes = response
            .bytes()
            .context("Failed to read fitness plot body")?;

        if bytes.len() > self.max_plot_bytes {
            return Err(anyhow!(
                "Fitness plot too large ({} bytes > {} bytes)",
                bytes.len(),
                self.max_plot_bytes
            ));
        }

        Ok(bytes.to_vec())
    }

    /// The service hands out plot URLs relative to its own root.
    fn resolve(&self, url: &str) -> String {
        if url.starts_with("http://") || url.starts_with("https://") {
            url.to_string()
        } else {
            format!("{}/{}", self.base_url, url.trim_start_matches('/'))
        }
    }
}
