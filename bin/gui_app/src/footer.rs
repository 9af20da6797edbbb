use egui;
use open as cross_open;
use crate::helpers::TEXT_MUTED;

const TVMAZE_URL: &str = "https://www.tvmaze.com";

pub fn render_footer(ui: &mut egui::Ui, runtime: &tokio::runtime::Handle) {
    ui.add_space(32.0);
    ui.separator();
    ui.add_space(8.0);
    ui.vertical_centered(|ui| {
        ui.label(egui::RichText::new("Netflix-style streaming dashboard clone for practice only.").color(TEXT_MUTED).small());
        ui.label(egui::RichText::new("No real accounts, no playback – just UI and API data.").color(TEXT_MUTED).small());
        if ui.link("Data provided by TVmaze").clicked() {
            runtime.spawn_blocking(|| {
                if let Err(err) = cross_open::that(TVMAZE_URL) {
                    tracing::warn!("Failed to open '{}' in browser: {}", TVMAZE_URL, err);
                }
            });
        }
    });
    ui.add_space(16.0);
}
