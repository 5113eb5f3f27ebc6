// UI layer: eframe application, theming, and schedule card rendering

pub mod app;
pub mod theme;
pub mod views;
