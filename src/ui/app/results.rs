//! Central result area: found-slot summary, fitness plot, schedule cards.

use egui::RichText;

use super::{ResultsState, SlotFinderApp};
use crate::models::grid::hour_label;
use crate::services::optimizer::CompletedRun;
use crate::ui::views::schedule_cards::ScheduleCards;

impl SlotFinderApp {
    pub(super) fn show_results_panel(&mut self, ui: &mut egui::Ui) {
        match &self.results {
            ResultsState::Idle => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(
                        RichText::new("Run the optimizer to visualize schedules.")
                            .size(14.0)
                            .color(self.theme.text_secondary),
                    );
                });
            }
            ResultsState::Running => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.spinner();
                    ui.add_space(8.0);
                    ui.label(
                        RichText::new("Searching for a common slot…")
                            .color(self.theme.text_secondary),
                    );
                });
            }
            ResultsState::Failed { message } => {
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.colored_label(self.theme.error_text, format!("Error: {}", message));
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Previous results were cleared. Adjust the parameters and run again.")
                            .color(self.theme.text_secondary),
                    );
                });
            }
            ResultsState::Complete { run } => self.show_completed_run(ui, run),
        }
    }

    fn show_completed_run(&self, ui: &mut egui::Ui, run: &CompletedRun) {
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                match &run.outcome.candidate {
                    Some(slot) => {
                        ui.label(
                            RichText::new(format!(
                                "Suggested slot: {}, {} – {} ({} h)",
                                slot.day,
                                hour_label(slot.start_hour),
                                hour_label(slot.end_hour()),
                                slot.duration_hours,
                            ))
                            .size(15.0)
                            .strong(),
                        );
                        let names: Vec<&str> =
                            slot.eligible.iter().map(|s| s.as_str()).collect();
                        let mut availability =
                            format!("Available: {} of {}", slot.available, slot.total);
                        if !names.is_empty() {
                            availability.push_str(&format!(" ({})", names.join(", ")));
                        }
                        ui.label(RichText::new(availability).color(self.theme.text_secondary));
                    }
                    None => {
                        // Not an error: the search simply found no slot
                        ui.label(
                            RichText::new(
                                "No common slot was found with the current parameters.",
                            )
                            .size(15.0)
                            .strong(),
                        );
                        ui.label(
                            RichText::new(
                                "Try adjusting the parameters or reviewing the schedules.",
                            )
                            .color(self.theme.text_secondary),
                        );
                    }
                }

                ui.add_space(8.0);
                egui::CollapsingHeader::new("Fitness evolution")
                    .default_open(false)
                    .show(ui, |ui| match &run.plot {
                        Some(plot) => {
                            ui.add(
                                egui::Image::from_bytes(
                                    plot.uri.clone(),
                                    egui::load::Bytes::Shared(plot.bytes.clone()),
                                )
                                .max_width(ui.available_width().min(640.0)),
                            );
                            if ui.button("Open in browser").clicked() {
                                let href = self.plot_href(&plot.source_url);
                                if let Err(err) = webbrowser::open(&href) {
                                    log::error!("Failed to open fitness plot: {}", err);
                                }
                            }
                        }
                        None => {
                            ui.label(
                                RichText::new("No fitness plot was generated for this run.")
                                    .color(self.theme.text_secondary),
                            );
                        }
                    });

                ui.add_space(12.0);
                ScheduleCards::show(
                    ui,
                    &run.outcome.schedules,
                    run.outcome.candidate.as_ref(),
                    &run.outcome.grid,
                    &self.theme,
                );
            });
    }

    /// Service-relative plot URLs become absolute against the service base.
    fn plot_href(&self, source_url: &str) -> String {
        if source_url.starts_with("http://") || source_url.starts_with("https://") {
            source_url.to_string()
        } else {
            format!(
                "{}/{}",
                self.settings.service_url.trim_end_matches('/'),
                source_url.trim_start_matches('/')
            )
        }
    }
}
