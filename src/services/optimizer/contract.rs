//! Wire contract with the optimization service.
//!
//! The DTOs here mirror the service JSON exactly; `into_outcome` converts
//! them into validated model types at the edge, so clock strings are parsed
//! to fractional hours exactly once and rendering never sees raw wire data.

use std::collections::BTreeMap;

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::grid::{GridConfig, GridConfigError};
use crate::models::params::RunParameters;
use crate::models::schedule::{CandidateSlot, Interval, PersonSchedules};

/// Body of the POST to `/run_ga`.
#[derive(Debug, Clone, Serialize)]
pub struct RunRequest {
    pub population_size: u32,
    pub generations: u32,
    pub mutation_rate: f64,
    pub num_professors: u32,
    pub desired_slot_duration: f64,
}

impl From<&RunParameters> for RunRequest {
    fn from(params: &RunParameters) -> Self {
        Self {
            population_size: params.population_size,
            generations: params.generations,
            mutation_rate: params.mutation_rate,
            num_professors: params.num_professors,
            desired_slot_duration: params.desired_slot_duration,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct IntervalDto {
    pub day: String,
    pub start_hour: f64,
    pub end_hour: f64,
}

/// The service may send `found_slot` as a full record, an empty object, or
/// omit it entirely. A missing `day` means "no common slot", which is a
/// first-class result, not an error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FoundSlotDto {
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub num_professors_free: usize,
    #[serde(default)]
    pub total_professors: usize,
    #[serde(default)]
    pub professors_available_in_best_slot: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RunResponse {
    #[serde(default)]
    pub found_slot: Option<FoundSlotDto>,
    pub slot_duration: f64,
    #[serde(default)]
    pub fitness_plot_url: Option<String>,
    pub professor_schedules: BTreeMap<String, Vec<IntervalDto>>,
    pub days_of_week: Vec<String>,
    /// Sent by the service but unused by the renderer; kept for wire fidelity.
    #[serde(default)]
    pub possible_start_times: Vec<String>,
    pub start_hour_day: f64,
    pub end_hour_day: f64,
    pub increment_time: f64,
}

/// Error body carried by non-success responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ContractError {
    #[error("service sent an invalid grid configuration: {0}")]
    InvalidGrid(#[from] GridConfigError),

    #[error("slot start time {0:?} is not an HH:MM clock value")]
    BadClock(String),
}

/// Everything one successful run produces, in model form.
#[derive(Debug, Clone, PartialEq)]
pub struct OptimizationOutcome {
    pub grid: GridConfig,
    pub schedules: PersonSchedules,
    pub candidate: Option<CandidateSlot>,
    pub fitness_plot_url: Option<String>,
}

fn parse_clock(value: &str) -> Result<f64, ContractError> {
    let time = NaiveTime::parse_from_str(value.trim(), "%H:%M")
        .map_err(|_| ContractError::BadClock(value.to_string()))?;
    Ok(f64::from(time.hour()) + f64::from(time.minute()) / 60.0)
}

impl RunResponse {
    pub fn into_outcome(self) -> Result<OptimizationOutcome, ContractError> {
        let grid = GridConfig::new(
            self.days_of_week,
            self.start_hour_day,
            self.end_hour_day,
            self.increment_time,
        )?;

        let schedules: PersonSchedules = self
            .professor_schedules
            .into_iter()
            .map(|(name, slots)| {
                let intervals = slots
                    .into_iter()
                    .map(|slot| Interval::new(slot.day, slot.start_hour, slot.end_hour))
                    .collect();
                (name, intervals)
            })
            .collect();

        let candidate = match self.found_slot {
            Some(slot) => match slot.day {
                Some(day) => {
                    let start_time = slot.start_time.unwrap_or_default();
                    Some(CandidateSlot {
                        day,
                        start_hour: parse_clock(&start_time)?,
                        // The drawn interval follows the requested duration,
                        // not the echoed end_time string.
                        duration_hours: self.slot_duration,
                        eligible: slot
                            .professors_available_in_best_slot
                            .into_iter()
                            .collect(),
                        available: slot.num_professors_free,
                        total: slot.total_professors,
                    })
                }
                None => None,
            },
            None => None,
        };

        Ok(OptimizationOutcome {
            grid,
            schedules,
            candidate,
            fitness_plot_url: self.fitness_plot_url,
        })
    }
}
