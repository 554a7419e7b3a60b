//! Main application entry point.

use scrawl_app::{AppConfig, ScrawlApp, ShortcutRegistry};

fn main() -> eframe::Result<()> {
    env_logger::init();

    if std::env::args().any(|arg| arg == "--shortcuts") {
        ShortcutRegistry::print_all();
        return Ok(());
    }

    let config = AppConfig::load();
    log::info!("Starting Scrawl");

    let title = config.title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([config.width as f32, config.height as f32])
            .with_min_inner_size([320.0, 240.0]),
        ..Default::default()
    };

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| Ok(Box::new(ScrawlApp::new(cc, &config)))),
    )
}
