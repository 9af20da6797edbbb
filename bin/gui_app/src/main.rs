use app::app::App;
use app::config::{AppInitError, load_config};
use app::display::{APP_DESCRIPTION, APP_TITLE};
use gui_app::app::GuiApp;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

struct FailedGuiApp {
    message: String,
}

impl FailedGuiApp {
    fn new(message: String) -> Self {
        Self {
            message,
        }
    }
}

impl eframe::App for FailedGuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .show(ctx, |ui| {
                let label = egui::RichText::new(self.message.as_str()).color(egui::Color32::DARK_RED);
                ui.heading(label);
            });
    }
}

fn print_usage() {
    println!("{}: {}", APP_TITLE, APP_DESCRIPTION);
    println!("Usage: gui_app [config_path]");
    println!("Reads <config_path>/app_config.json when present (default config_path: ./res)");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,wgpu=warn,eframe=warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

fn main() -> Result<(), eframe::Error> {
    let args: Vec<String> = std::env::args().collect();
    if args.contains(&"--help".to_owned()) || args.contains(&"-h".to_owned()) {
        print_usage();
        return Ok(());
    }

    init_logging();

    let default_config_path = Path::new("./res").to_string_lossy().to_string();
    let config_path = args.get(1).unwrap_or(&default_config_path).clone();

    let native_options = eframe::NativeOptions {
        initial_window_size: Some(egui::vec2(1280.0, 800.0)),
        min_window_size: Some(egui::vec2(640.0, 480.0)),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        native_options,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);

            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    let err = AppInitError::Runtime(err);
                    tracing::error!("{}", err);
                    return Box::new(FailedGuiApp::new(format!("Failed to create application: {}", err)));
                },
            };

            let config = match runtime.block_on(load_config(config_path.as_str())) {
                Ok(config) => config,
                Err(err) => {
                    tracing::error!("{}", err);
                    return Box::new(FailedGuiApp::new(format!("Failed to create application: {}", err)));
                },
            };

            let app = App::new(config);
            Box::new(GuiApp::new(&cc.egui_ctx, app, runtime))
        }),
    )
}
