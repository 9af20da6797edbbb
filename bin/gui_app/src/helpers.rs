use egui;

pub const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);
pub const NAVBAR_BACKGROUND: egui::Color32 = egui::Color32::from_rgb(10, 10, 10);
pub const ACCENT: egui::Color32 = egui::Color32::from_rgb(229, 9, 20);
pub const TEXT_MUTED: egui::Color32 = egui::Color32::from_rgb(170, 170, 170);

pub const PAGE_MARGIN: f32 = 32.0;

/// Fills `rect` with a gradient running from `top` to `bottom`.
pub fn paint_vertical_gradient(painter: &egui::Painter, rect: egui::Rect, top: egui::Color32, bottom: egui::Color32) {
    let mut mesh = egui::epaint::Mesh::default();
    mesh.colored_vertex(rect.left_top(), top);
    mesh.colored_vertex(rect.right_top(), top);
    mesh.colored_vertex(rect.left_bottom(), bottom);
    mesh.colored_vertex(rect.right_bottom(), bottom);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 2, 3);
    painter.add(egui::Shape::mesh(mesh));
}

/// Paints `text` on a filled pill whose top left corner sits at `pos`.
pub fn paint_badge(painter: &egui::Painter, pos: egui::Pos2, text: &str, fill: egui::Color32) {
    let font_id = egui::FontId::proportional(11.0);
    let galley = painter.layout_no_wrap(text.to_string(), font_id, egui::Color32::WHITE);
    let padding = egui::vec2(6.0, 2.0);
    let rect = egui::Rect::from_min_size(pos, galley.size() + 2.0 * padding);
    painter.rect_filled(rect, 3.0, fill);
    painter.galley(rect.min + padding, galley);
}
