use egui;
use enum_map;
use app::display::APP_TITLE;
use crate::helpers::{ACCENT, NAVBAR_BACKGROUND, PAGE_MARGIN};

#[derive(PartialEq, Eq, Copy, Clone, enum_map::Enum)]
enum NavbarItem {
    Home,
    Series,
    Movies,
    MyList,
}

pub struct GuiNavbar {
    search_string: String,
}

impl GuiNavbar {
    pub fn new() -> Self {
        Self {
            search_string: "".to_string(),
        }
    }
}

impl Default for GuiNavbar {
    fn default() -> Self {
        Self::new()
    }
}

// Menu, search and sign in only look the part, none of them navigate anywhere
pub fn render_navbar(ctx: &egui::Context, gui: &mut GuiNavbar) {
    lazy_static::lazy_static! {
        static ref MENU_ITEMS: enum_map::EnumMap<NavbarItem, &'static str> = enum_map::enum_map! {
            NavbarItem::Home => "Home",
            NavbarItem::Series => "Series",
            NavbarItem::Movies => "Movies",
            NavbarItem::MyList => "My List",
        };
    }

    let frame = egui::Frame::none()
        .fill(NAVBAR_BACKGROUND)
        .inner_margin(egui::Margin::symmetric(PAGE_MARGIN, 10.0));

    egui::TopBottomPanel::top("navbar")
        .frame(frame)
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(APP_TITLE).size(26.0).strong().color(ACCENT));
                ui.add_space(24.0);

                for (item, label) in MENU_ITEMS.iter() {
                    let _ = ui.selectable_label(item == NavbarItem::Home, *label);
                }

                let layout = egui::Layout::right_to_left(egui::Align::Center);
                ui.with_layout(layout, |ui| {
                    let sign_in = egui::Button::new(egui::RichText::new("Sign In").color(egui::Color32::WHITE))
                        .fill(ACCENT);
                    ui.add(sign_in);

                    let search = egui::TextEdit::singleline(&mut gui.search_string)
                        .hint_text("Search (UI only)")
                        .desired_width(180.0);
                    ui.add(search);
                });
            });
        });
}
