use log_overlay::capability;
use log_overlay::gui::DemoApp;
use log_overlay::logging;
use log_overlay::settings::OverlaySettings;

use eframe::egui;
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    let settings = OverlaySettings::load("overlay_settings.json")?;
    logging::init(settings.debug_logging, settings.log_file.as_ref().map(PathBuf::from));
    let flags = capability::probe();
    tracing::info!(?flags, "starting log overlay demo");

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([390.0, 844.0])
            .with_min_inner_size([200.0, 300.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Log Overlay",
        native_options,
        Box::new(move |cc| Box::new(DemoApp::new(&cc.egui_ctx, settings, flags))),
    )
    .map_err(|e| anyhow::anyhow!("failed to run demo: {e}"))
}
