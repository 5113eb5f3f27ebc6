//! Parameter side panel: form inputs, the run control, and theme choice.

use super::SlotFinderApp;

impl SlotFinderApp {
    pub(super) fn show_parameter_panel(&mut self, ui: &mut egui::Ui) {
        ui.add_space(8.0);
        ui.heading("Optimization parameters");
        ui.add_space(8.0);

        egui::Grid::new("run_parameters")
            .num_columns(2)
            .spacing([8.0, 6.0])
            .show(ui, |ui| {
                ui.label("Population size");
                ui.add(egui::DragValue::new(&mut self.form.population_size).range(1..=1000));
                ui.end_row();

                ui.label("Generations");
                ui.add(egui::DragValue::new(&mut self.form.generations).range(5..=5000));
                ui.end_row();

                ui.label("Mutation rate");
                ui.add(egui::Slider::new(&mut self.form.mutation_rate, 0.0..=1.0).step_by(0.01));
                ui.end_row();

                ui.label("Professors");
                ui.add(egui::DragValue::new(&mut self.form.num_professors).range(1..=15));
                ui.end_row();

                ui.label("Slot duration (h)");
                ui.add(
                    egui::DragValue::new(&mut self.form.desired_slot_duration)
                        .range(0.5..=8.0)
                        .speed(0.5)
                        .fixed_decimals(1),
                );
                ui.end_row();
            });

        ui.add_space(12.0);
        ui.label("Service URL");
        ui.text_edit_singleline(&mut self.service_url);

        ui.add_space(12.0);
        // One outstanding request at a time: the control stays disabled
        // until the current run reports back
        let run_clicked = ui
            .add_enabled(!self.in_flight, egui::Button::new("Find common slot"))
            .clicked();
        if run_clicked {
            let ctx = ui.ctx().clone();
            self.start_run(&ctx);
        }

        if self.in_flight {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Searching for a common slot…");
            });
        }

        if let Some(message) = &self.validation_error {
            ui.add_space(8.0);
            ui.colored_label(self.theme.error_text, message);
        }

        ui.add_space(16.0);
        ui.separator();
        ui.horizontal(|ui| {
            ui.label("Theme");
            let mut selected = self.settings.theme.clone();
            egui::ComboBox::from_id_source("theme_choice")
                .selected_text(selected.clone())
                .show_ui(ui, |ui| {
                    for name in ["system", "light", "dark"] {
                        ui.selectable_value(&mut selected, name.to_string(), name);
                    }
                });
            if selected != self.settings.theme {
                self.set_theme(&selected);
            }
        });
    }
}
