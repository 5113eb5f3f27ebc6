// Optimization run parameters
// Validated locally before any request reaches the optimization service

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ParameterError {
    #[error("Population size must be between 1 and 1000.")]
    PopulationSize,

    #[error("Number of generations must be between 5 and 5000.")]
    Generations,

    #[error("Mutation rate must be between 0.0 and 1.0.")]
    MutationRate,

    #[error("Number of professors must be between 1 and 15.")]
    NumProfessors,

    #[error("Desired slot duration must be positive and at most 8 hours.")]
    SlotDurationRange,

    #[error("Desired slot duration must be a multiple of 0.5 (e.g. 1.0, 1.5, 2.0).")]
    SlotDurationStep,
}

/// Parameters for one optimization run.
///
/// Bounds mirror the service contract; a violation blocks the request
/// entirely and surfaces a user-facing message instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    pub population_size: u32,
    pub generations: u32,
    pub mutation_rate: f64,
    pub num_professors: u32,
    pub desired_slot_duration: f64,
}

impl Default for RunParameters {
    fn default() -> Self {
        Self {
            population_size: 50,
            generations: 100,
            mutation_rate: 0.1,
            num_professors: 4,
            desired_slot_duration: 2.0,
        }
    }
}

impl RunParameters {
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.population_size < 1 || self.population_size > 1000 {
            return Err(ParameterError::PopulationSize);
        }
        if self.generations < 5 || self.generations > 5000 {
            return Err(ParameterError::Generations);
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(ParameterError::MutationRate);
        }
        if self.num_professors < 1 || self.num_professors > 15 {
            return Err(ParameterError::NumProfessors);
        }
        if self.desired_slot_duration <= 0.0 || self.desired_slot_duration > 8.0 {
            return Err(ParameterError::SlotDurationRange);
        }
        // Slots snap to half-hour rows
        let steps = self.desired_slot_duration / 0.5;
        if (steps - steps.round()).abs() > 1e-9 {
            return Err(ParameterError::SlotDurationStep);
        }
        Ok(())
    }
}
