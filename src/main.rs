use egui::ViewportBuilder;

mod app;
mod constants;
mod platform;
mod ui;

use app::FuseboxApp;
use platform::parameters::gui;

/// The main function is the entry point of the application.
///
/// It initializes the logger, sets up the native window options,
/// and runs the application using the `eframe` framework.
fn main() -> eframe::Result<()> {
    // Keep the renderer's chatter out of the default output
    env_logger::Builder::from_default_env()
        .filter_module("wgpu_core", log::LevelFilter::Warn)
        .filter_module("eframe", log::LevelFilter::Warn)
        .init();
    eframe::run_native(
        gui::APPLICATION_NAME,
        eframe::NativeOptions {
            viewport: ViewportBuilder::default().with_inner_size([gui::VIEWPORT_X, gui::VIEWPORT_Y]),
            ..Default::default()
        },
        Box::new(|_cc| Ok(Box::new(FuseboxApp::new()))),
    )
}
