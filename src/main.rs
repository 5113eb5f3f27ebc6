// Slot Finder Application
// Main entry point

use slot_finder::ui::app::SlotFinderApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting Slot Finder");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Slot Finder",
        options,
        Box::new(|cc| {
            // Image loaders are required for the fitness plot panel
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(SlotFinderApp::new(cc)))
        }),
    )
}
