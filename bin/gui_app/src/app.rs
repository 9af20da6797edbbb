use app::app::App;
use app::display::HeroText;
use app::rows::RowKind;
use eframe;
use egui;
use enum_map;
use tokio;
use crate::footer::render_footer;
use crate::helpers::{BACKGROUND, PAGE_MARGIN};
use crate::hero::render_hero;
use crate::navbar::{GuiNavbar, render_navbar};
use crate::show_row::{GuiShowRow, render_show_row};

pub struct GuiApp {
    app: App,
    runtime: tokio::runtime::Runtime,
    gui_navbar: GuiNavbar,
    gui_rows: enum_map::EnumMap<RowKind, GuiShowRow>,
}

impl GuiApp {
    /// Takes ownership of the runtime so the catalog load outlives this call.
    pub fn new(ctx: &egui::Context, mut app: App, runtime: tokio::runtime::Runtime) -> Self {
        ctx.set_visuals(egui::Visuals::dark());

        app.start_loading(runtime.handle(), {
            let ctx = ctx.clone();
            move || ctx.request_repaint()
        });

        Self {
            app,
            runtime,
            gui_navbar: GuiNavbar::new(),
            gui_rows: enum_map::EnumMap::default(),
        }
    }
}

impl eframe::App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.app.poll_load();

        render_navbar(ctx, &mut self.gui_navbar);

        let frame = egui::Frame::none().fill(BACKGROUND);
        egui::CentralPanel::default()
            .frame(frame)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| {
                        let state = self.app.get_state();
                        render_hero(ui, &HeroText::from_state(state));

                        egui::Frame::none()
                            .inner_margin(egui::Margin::symmetric(PAGE_MARGIN, 0.0))
                            .show(ui, |ui| {
                                if let Some(catalog) = state.catalog() {
                                    for kind in RowKind::ALL {
                                        let shows = catalog.row(kind);
                                        render_show_row(ui, &mut self.gui_rows[kind], kind.title(), shows.as_slice());
                                    }
                                }
                                render_footer(ui, self.runtime.handle());
                            });
                    });
            });
    }
}
