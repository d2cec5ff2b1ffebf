mod app;
mod convert;
mod messages;
mod panels;
mod state;
mod worker;

use darkroom_core::config::GatewayConfig;
use tracing::warn;

const CONFIG_FILE: &str = "darkroom.toml";

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = load_config();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1280.0, 800.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Darkroom"),
        ..Default::default()
    };

    eframe::run_native(
        "Darkroom",
        options,
        Box::new(move |cc| Ok(Box::new(app::DarkroomApp::new(&cc.egui_ctx, config)))),
    )
}

/// Read `darkroom.toml` from the working directory, then let the
/// environment override the API key. Missing file means defaults.
fn load_config() -> GatewayConfig {
    let mut config = match std::fs::read_to_string(CONFIG_FILE) {
        Ok(text) => match toml::from_str(&text) {
            Ok(config) => config,
            Err(e) => {
                warn!("Ignoring invalid {CONFIG_FILE}: {e}");
                GatewayConfig::default()
            }
        },
        Err(_) => GatewayConfig::default(),
    };
    config.apply_env();
    config
}
