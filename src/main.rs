// MediRoster Application
// Main entry point

use mediroster::ui_egui::RosterApp;

fn main() -> eframe::Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting MediRoster");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("MediRoster")
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([900.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "MediRoster",
        options,
        Box::new(|cc| Ok(Box::new(RosterApp::new(cc)))),
    )
}
