mod app;
pub mod i18n;
mod ui;
mod viewport;

// Re-export library modules so that `crate::build`, `crate::state`, etc.
// resolve to the lib crate types everywhere in the binary.
pub use orthoview_lib::build;
pub use orthoview_lib::geometry;
pub use orthoview_lib::state;

use app::ViewerApp;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "orthoview=info,orthoview_lib=info".into()),
        )
        .init();

    let initial_scene = parse_scene_arg();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("orthoview: 3D shapes and plane projection")
            .with_inner_size([1400.0, 900.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "orthoview",
        native_options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, initial_scene)))),
    ) {
        tracing::error!("Failed to start application: {e}");
    }
}

/// Path given with `--scene <path>`
fn parse_scene_arg() -> Option<std::path::PathBuf> {
    let args: Vec<String> = std::env::args().collect();
    let path = args
        .windows(2)
        .find(|pair| pair[0] == "--scene")
        .map(|pair| std::path::PathBuf::from(&pair[1]));
    if path.is_none() && args.iter().any(|a| a == "--scene") {
        tracing::error!("--scene needs a path argument");
    }
    path
}
