//! The eframe application: parameter form, run control, and result display.

mod form;
mod results;

use std::sync::mpsc::{self, Receiver, Sender};

use crate::models::params::RunParameters;
use crate::models::settings::AppSettings;
use crate::services::optimizer::{self, CompletedRun, JobResult, RequestTracker};
use crate::services::settings::SettingsService;
use crate::ui::theme::ScheduleTheme;

/// What the result area is currently showing. A new run fully replaces the
/// previous state; failures reset to an explicit placeholder instead of
/// keeping stale cards around.
pub enum ResultsState {
    Idle,
    Running,
    Failed { message: String },
    Complete { run: CompletedRun },
}

pub struct SlotFinderApp {
    settings: AppSettings,
    settings_service: Option<SettingsService>,
    /// Currently applied theme colors
    theme: ScheduleTheme,
    theme_applied: bool,
    /// Live form values, seeded from the last-used settings
    form: RunParameters,
    service_url: String,
    /// Guard against overlapping requests: only the latest-issued sequence
    /// number may update the result state
    tracker: RequestTracker,
    results_tx: Sender<JobResult>,
    results_rx: Receiver<JobResult>,
    in_flight: bool,
    validation_error: Option<String>,
    results: ResultsState,
}

impl eframe::App for SlotFinderApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if !self.theme_applied {
            self.theme.apply_to_context(ctx);
            self.theme_applied = true;
        }

        self.drain_results();

        egui::SidePanel::left("parameter_panel")
            .resizable(false)
            .default_width(270.0)
            .show(ctx, |ui| self.show_parameter_panel(ui));

        egui::CentralPanel::default().show(ctx, |ui| self.show_results_panel(ui));
    }
}

impl SlotFinderApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        let settings_service = match SettingsService::from_project_dirs() {
            Ok(service) => Some(service),
            Err(err) => {
                log::warn!("Settings persistence unavailable: {:#}", err);
                None
            }
        };

        let settings = settings_service
            .as_ref()
            .map(|service| {
                service.load().unwrap_or_else(|err| {
                    log::warn!("Falling back to default settings: {:#}", err);
                    AppSettings::default()
                })
            })
            .unwrap_or_default();

        let theme = ScheduleTheme::from_name(&settings.theme);
        let (results_tx, results_rx) = mpsc::channel();

        Self {
            form: settings.parameters.clone(),
            service_url: settings.service_url.clone(),
            settings,
            settings_service,
            theme,
            theme_applied: false,
            tracker: RequestTracker::new(),
            results_tx,
            results_rx,
            in_flight: false,
            validation_error: None,
            results: ResultsState::Idle,
        }
    }

    /// Apply finished worker jobs. Stale results (issued before the latest
    /// request) are discarded, never rendered.
    fn drain_results(&mut self) {
        while let Ok(job) = self.results_rx.try_recv() {
            if !self.tracker.is_current(job.seq) {
                log::info!(
                    "Discarding stale optimization result {} (latest is {})",
                    job.seq,
                    self.tracker.latest()
                );
                continue;
            }

            self.in_flight = false;
            self.results = match job.payload {
                Ok(run) => ResultsState::Complete { run },
                Err(message) => {
                    log::error!("Optimization run failed: {}", message);
                    ResultsState::Failed { message }
                }
            };
        }
    }

    /// Validate the form and kick off one background run. A validation
    /// failure blocks the request entirely and surfaces inline.
    fn start_run(&mut self, ctx: &egui::Context) {
        if let Err(err) = self.form.validate() {
            self.validation_error = Some(err.to_string());
            return;
        }
        self.validation_error = None;

        let seq = self.tracker.issue();
        self.in_flight = true;
        self.results = ResultsState::Running;

        self.settings.parameters = self.form.clone();
        self.settings.service_url = self.service_url.trim().to_string();
        self.persist_settings();

        let repaint_ctx = ctx.clone();
        optimizer::spawn_run(
            self.settings.service_url.clone(),
            self.form.clone(),
            seq,
            self.results_tx.clone(),
            move || repaint_ctx.request_repaint(),
        );
    }

    fn set_theme(&mut self, name: &str) {
        self.settings.theme = name.to_string();
        self.theme = ScheduleTheme::from_name(name);
        self.theme_applied = false;
        self.persist_settings();
    }

    fn persist_settings(&self) {
        if let Some(service) = &self.settings_service {
            if let Err(err) = service.save(&self.settings) {
                log::warn!("Failed to save settings: {:#}", err);
            }
        }
    }
}
