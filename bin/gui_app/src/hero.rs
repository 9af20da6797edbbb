use egui;
use app::display::HeroText;
use crate::helpers::{paint_vertical_gradient, ACCENT, PAGE_MARGIN, TEXT_MUTED};

const HERO_DESCRIPTION: &str =
    "UI clone built with egui and the TVmaze public API. No real streaming, just a demo dashboard.";
const HERO_AGE_RATING: &str = "16+";

fn render_hero_content(ui: &mut egui::Ui, hero: &HeroText) {
    ui.label(egui::RichText::new(hero.tag.to_uppercase()).color(ACCENT).strong().small());
    ui.add_space(4.0);

    let title = egui::Label::new(egui::RichText::new(hero.title.as_str()).size(42.0).strong()).wrap(true);
    ui.add(title);
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        ui.label(hero.year.as_str());
        ui.label("•");
        ui.label(HERO_AGE_RATING);
        ui.label("•");
        ui.label(hero.genres.as_str());
    });
    ui.add_space(8.0);

    ui.scope(|ui| {
        ui.set_max_width(520.0);
        ui.add(egui::Label::new(egui::RichText::new(HERO_DESCRIPTION).color(TEXT_MUTED)).wrap(true));
    });
    ui.add_space(12.0);

    // Play and More Info are decoration only
    ui.horizontal(|ui| {
        let play = egui::Button::new(egui::RichText::new("▶ Play").color(egui::Color32::BLACK).strong())
            .fill(egui::Color32::WHITE)
            .min_size(egui::vec2(96.0, 34.0));
        ui.add(play);
        let more_info = egui::Button::new(egui::RichText::new("ℹ More Info").strong())
            .fill(egui::Color32::from_white_alpha(40))
            .min_size(egui::vec2(120.0, 34.0));
        ui.add(more_info);
    });
    ui.add_space(10.0);

    ui.label(egui::RichText::new(hero.subtext.as_str()).color(TEXT_MUTED).small());
}

pub fn render_hero(ui: &mut egui::Ui, hero: &HeroText) {
    let width = ui.available_width();
    let height = (width * 0.45).clamp(320.0, 560.0);
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());

    egui::Image::new(hero.backdrop_url.as_str()).paint_at(ui, rect);

    // dark at both edges, lighter through the middle
    let painter = ui.painter();
    let dark = egui::Color32::from_black_alpha(230);
    let light = egui::Color32::from_black_alpha(25);
    let middle = rect.top() + rect.height() * 0.5;
    let upper = egui::Rect::from_min_max(rect.min, egui::pos2(rect.right(), middle));
    let lower = egui::Rect::from_min_max(egui::pos2(rect.left(), middle), egui::pos2(rect.right(), rect.bottom() - rect.height() * 0.1));
    let base = egui::Rect::from_min_max(egui::pos2(rect.left(), lower.bottom()), rect.max);
    paint_vertical_gradient(painter, upper, dark, light);
    paint_vertical_gradient(painter, lower, light, dark);
    painter.rect_filled(base, 0.0, dark);

    let content_rect = rect.shrink2(egui::vec2(PAGE_MARGIN, PAGE_MARGIN));
    ui.allocate_ui_at_rect(content_rect, |ui| {
        ui.add_space(content_rect.height() * 0.2);
        render_hero_content(ui, hero);
    });
}
