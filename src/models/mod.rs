// Data models for the slot finder

pub mod grid;
pub mod params;
pub mod schedule;
pub mod settings;
