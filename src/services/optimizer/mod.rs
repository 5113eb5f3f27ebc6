// Optimization service integration
// Wire contract, blocking client, background worker, and the response
// sequence guard

pub mod client;
pub mod contract;
pub mod tracker;
pub mod worker;

pub use client::OptimizerClient;
pub use contract::{OptimizationOutcome, RunResponse};
pub use tracker::RequestTracker;
pub use worker::{spawn_run, CompletedRun, JobResult, PlotImage};
