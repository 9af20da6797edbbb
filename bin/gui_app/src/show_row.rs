use egui;
use app::display::{poster_url, rating_label, release_year};
use tvmaze::models::Show;
use crate::helpers::{paint_badge, ACCENT, TEXT_MUTED};

const CARD_WIDTH: f32 = 150.0;
const POSTER_HEIGHT: f32 = 225.0;
const CARD_BODY_HEIGHT: f32 = 48.0;
const ARROW_WIDTH: f32 = 28.0;

const PAGE_FRACTION: f32 = 0.8;
const SCROLL_ANIMATION_SECS: f64 = 0.35;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct ScrollAnimation {
    from: f32,
    to: f32,
    start_time: f64,
}

impl ScrollAnimation {
    /// Eased offset at `time` and whether the animation has finished.
    fn offset_at(&self, time: f64) -> (f32, bool) {
        let progress = ((time - self.start_time) / SCROLL_ANIMATION_SECS).clamp(0.0, 1.0) as f32;
        if progress >= 1.0 {
            return (self.to, true);
        }
        let eased = 1.0 - (1.0 - progress).powi(3);
        (self.from + (self.to - self.from) * eased, false)
    }
}

/// Horizontal scroll of a single row as measured on the last frame.
#[derive(Debug, Clone, Default)]
pub struct RowScroll {
    offset: f32,
    viewport_width: f32,
    content_width: f32,
    animation: Option<ScrollAnimation>,
}

impl RowScroll {
    pub fn update_layout(&mut self, offset: f32, viewport_width: f32, content_width: f32) {
        self.offset = offset;
        self.viewport_width = viewport_width;
        self.content_width = content_width;
    }

    pub fn max_offset(&self) -> f32 {
        (self.content_width - self.viewport_width).max(0.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Starts a smooth scroll of 80% of the visible width.
    pub fn scroll_page(&mut self, direction: ScrollDirection, now: f64) {
        // repeated clicks page on from where the running animation is heading
        let base = self.animation.map_or(self.offset, |animation| animation.to);
        let step = self.viewport_width * PAGE_FRACTION;
        let target = match direction {
            ScrollDirection::Left => base - step,
            ScrollDirection::Right => base + step,
        };
        let target = target.clamp(0.0, self.max_offset());
        if (target - self.offset).abs() < f32::EPSILON {
            self.animation = None;
            return;
        }
        self.animation = Some(ScrollAnimation {
            from: self.offset,
            to: target,
            start_time: now,
        });
    }

    /// Offset to force on the scroll area this frame, if an animation is running.
    pub fn animated_offset(&mut self, now: f64) -> Option<f32> {
        let animation = self.animation?;
        let (offset, is_finished) = animation.offset_at(now);
        if is_finished {
            self.animation = None;
        }
        Some(offset)
    }
}

#[derive(Default)]
pub struct GuiShowRow {
    pub scroll: RowScroll,
}

impl GuiShowRow {
    pub fn new() -> Self {
        Self::default()
    }
}

fn render_arrow(ui: &mut egui::Ui, label: &str, height: f32) -> egui::Response {
    let button = egui::Button::new(egui::RichText::new(label).size(18.0))
        .fill(egui::Color32::from_black_alpha(160));
    ui.add_sized([ARROW_WIDTH, height], button)
}

pub fn render_show_card(ui: &mut egui::Ui, show: &Show) {
    ui.push_id(show.id, |ui| {
        ui.vertical(|ui| {
            ui.set_width(CARD_WIDTH);

            let size = egui::vec2(CARD_WIDTH, POSTER_HEIGHT);
            let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
            egui::Image::new(poster_url(show)).paint_at(ui, rect);
            if let Some(genre) = show.first_genre() {
                paint_badge(ui.painter(), rect.min + egui::vec2(6.0, 6.0), genre, ACCENT);
            }

            let title = egui::Label::new(egui::RichText::new(show.name.as_str()).strong()).truncate(true);
            ui.add(title).on_hover_text(show.name.as_str());

            ui.horizontal(|ui| {
                let year = release_year(show.premiered.as_deref());
                ui.label(egui::RichText::new(year).color(TEXT_MUTED).small());
                let rating = format!("★ {}", rating_label(show));
                ui.label(egui::RichText::new(rating).color(egui::Color32::GOLD).small());
            });
        });
    });
}

/// Titled strip of cards with paging buttons. Empty rows render nothing.
pub fn render_show_row(ui: &mut egui::Ui, gui: &mut GuiShowRow, title: &str, shows: &[&Show]) {
    if shows.is_empty() {
        return;
    }

    let now = ui.input(|i| i.time);
    let height = POSTER_HEIGHT + CARD_BODY_HEIGHT;

    ui.add_space(16.0);
    ui.label(egui::RichText::new(title).size(20.0).strong());
    ui.add_space(6.0);

    ui.horizontal(|ui| {
        if render_arrow(ui, "◀", height).clicked() {
            gui.scroll.scroll_page(ScrollDirection::Left, now);
        }

        let strip_width = (ui.available_width() - ARROW_WIDTH - ui.spacing().item_spacing.x).max(0.0);
        let mut scroll_area = egui::ScrollArea::horizontal()
            .id_source(title)
            .auto_shrink([false, true]);
        if let Some(offset) = gui.scroll.animated_offset(now) {
            scroll_area = scroll_area.horizontal_scroll_offset(offset);
        }
        if gui.scroll.is_animating() {
            ui.ctx().request_repaint();
        }

        let output = ui.allocate_ui(egui::vec2(strip_width, height), |ui| {
            scroll_area.show(ui, |ui| {
                ui.horizontal(|ui| {
                    for show in shows {
                        render_show_card(ui, show);
                    }
                });
            })
        }).inner;
        gui.scroll.update_layout(output.state.offset.x, output.inner_rect.width(), output.content_size.x);

        if render_arrow(ui, "▶", height).clicked() {
            gui.scroll.scroll_page(ScrollDirection::Right, now);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn measured(offset: f32) -> RowScroll {
        let mut scroll = RowScroll::default();
        scroll.update_layout(offset, 500.0, 2000.0);
        scroll
    }

    fn run_to_end(scroll: &mut RowScroll, start: f64) -> f32 {
        let mut last = None;
        let mut time = start;
        while let Some(offset) = scroll.animated_offset(time) {
            last = Some(offset);
            time += 0.05;
        }
        last.expect("animation should produce at least one frame")
    }

    #[test]
    fn pages_by_eighty_percent_of_viewport() {
        let mut scroll = measured(0.0);
        scroll.scroll_page(ScrollDirection::Right, 0.0);
        assert_eq!(run_to_end(&mut scroll, 0.0), 400.0);
        assert!(!scroll.is_animating());

        let mut scroll = measured(1000.0);
        scroll.scroll_page(ScrollDirection::Left, 0.0);
        assert_eq!(run_to_end(&mut scroll, 0.0), 600.0);
    }

    #[test]
    fn clamps_to_scrollable_range() {
        let mut scroll = measured(1300.0);
        assert_eq!(scroll.max_offset(), 1500.0);
        scroll.scroll_page(ScrollDirection::Right, 0.0);
        assert_eq!(run_to_end(&mut scroll, 0.0), 1500.0);

        let mut scroll = measured(100.0);
        scroll.scroll_page(ScrollDirection::Left, 0.0);
        assert_eq!(run_to_end(&mut scroll, 0.0), 0.0);
    }

    #[test]
    fn no_animation_at_edges() {
        let mut scroll = measured(0.0);
        scroll.scroll_page(ScrollDirection::Left, 0.0);
        assert!(!scroll.is_animating());
        assert_eq!(scroll.animated_offset(0.0), None);

        let mut scroll = measured(1500.0);
        scroll.scroll_page(ScrollDirection::Right, 0.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn content_narrower_than_viewport_never_scrolls() {
        let mut scroll = RowScroll::default();
        scroll.update_layout(0.0, 800.0, 300.0);
        assert_eq!(scroll.max_offset(), 0.0);
        scroll.scroll_page(ScrollDirection::Right, 0.0);
        assert!(!scroll.is_animating());
    }

    #[test]
    fn animation_is_smooth_and_monotonic() {
        let mut scroll = measured(0.0);
        scroll.scroll_page(ScrollDirection::Right, 10.0);
        let mut previous = 0.0;
        for step in 1..7 {
            let offset = scroll.animated_offset(10.0 + step as f64 * 0.05).unwrap();
            assert!(offset > previous, "step {} went from {} to {}", step, previous, offset);
            assert!(offset < 400.0);
            previous = offset;
        }
        assert_eq!(scroll.animated_offset(10.0 + SCROLL_ANIMATION_SECS + 0.01), Some(400.0));
        assert_eq!(scroll.animated_offset(11.0), None);
    }

    #[test]
    fn repeated_clicks_page_from_target() {
        let mut scroll = measured(0.0);
        scroll.scroll_page(ScrollDirection::Right, 0.0);
        let _ = scroll.animated_offset(0.1);
        scroll.scroll_page(ScrollDirection::Right, 0.1);
        assert_eq!(run_to_end(&mut scroll, 0.1), 800.0);
    }
}
