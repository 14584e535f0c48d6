use std::path::PathBuf;

use eframe::egui;

use planet_mindmap::config::AppConfig;

mod app;
mod ui;

use app::MindMapApp;

fn main() -> eframe::Result<()> {
    env_logger::init();

    // Optional first argument: path to a TOML config
    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => match AppConfig::from_file(&path) {
            Ok(cfg) => {
                log::info!("Using config {}", path.display());
                cfg
            }
            Err(e) => {
                log::error!("{}", e);
                eprintln!("planet-mindmap: {}", e);
                std::process::exit(2);
            }
        },
        None => AppConfig::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.view.window_width, config.view.window_height]),
        ..Default::default()
    };

    eframe::run_native(
        "Planet Mind Map",
        options,
        Box::new(move |cc| {
            let mut app = MindMapApp::new(config);
            app.reload(&cc.egui_ctx);
            Ok(Box::new(app))
        }),
    )
}
