// Core app structure and main update loop

use super::config::{DeckConfig, save_cfg};
use crate::ui::catalog::ENTRIES;
use crate::ui::focus::{NavInput, map_key, move_cursor};
use crate::ui::nav::{NavAction, NavState, Screen};
use crate::ui::theme;

use eframe::egui;

pub struct Widgetdeck {
    pub options: DeckConfig,
    pub nav: NavState,
    /// Keyboard cursor into the flattened entry list
    pub list_cursor: usize,
    /// Set when the cursor moved this frame so the list scrolls to it
    pub scroll_to_cursor: bool,
}

impl Widgetdeck {
    pub fn new(options: DeckConfig) -> Self {
        Self {
            options,
            nav: NavState::new(),
            list_cursor: 0,
            scroll_to_cursor: false,
        }
    }
}

impl eframe::App for Widgetdeck {
    fn raw_input_hook(&mut self, ctx: &egui::Context, raw_input: &mut egui::RawInput) {
        if !raw_input.focused {
            return;
        }
        self.process_keyboard(ctx, raw_input);
    }

    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Paint a full-window background behind the panel
        let screen_rect = ctx.screen_rect();
        ctx.layer_painter(egui::LayerId::background())
            .rect_filled(screen_rect, 0.0, theme::colors::BG_DARK);

        let mut action = None;

        egui::CentralPanel::default()
            .frame(
                egui::Frame::NONE
                    .fill(theme::colors::BG_DARK)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                action = match self.nav.screen {
                    Screen::Home => self.display_screen_home(ui),
                    Screen::List => self.display_screen_list(ui),
                    Screen::Detail => self.display_screen_detail(ui),
                };
            });

        if let Some(action) = action {
            self.nav.apply(action);
        }
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        if let Err(e) = save_cfg(&self.options) {
            eprintln!("[widgetdeck] Failed to save settings: {}", e);
        }
    }
}

impl Widgetdeck {
    fn process_keyboard(&mut self, ctx: &egui::Context, raw_input: &egui::RawInput) {
        for event in &raw_input.events {
            let egui::Event::Key {
                key,
                pressed: true,
                ..
            } = event
            else {
                continue;
            };

            if *key == egui::Key::F11 {
                self.toggle_fullscreen(ctx);
                continue;
            }

            let Some(input) = map_key(*key) else { continue };
            if let Some(action) = self.handle_nav_input(input) {
                self.nav.apply(action);
            }
        }
    }

    /// Decide what a navigation input does on the current screen.
    /// Cursor movement is handled here; everything else becomes a NavAction.
    fn handle_nav_input(&mut self, input: NavInput) -> Option<NavAction> {
        match (self.nav.screen, input) {
            (Screen::Home, NavInput::Accept) => Some(NavAction::OpenList),
            (Screen::List, NavInput::Direction(dir)) => {
                self.list_cursor = move_cursor(self.list_cursor, dir, ENTRIES.len());
                self.scroll_to_cursor = true;
                None
            }
            (Screen::List, NavInput::Accept) => {
                Some(NavAction::OpenDetail(ENTRIES[self.list_cursor].title))
            }
            (Screen::List, NavInput::Back) | (Screen::Detail, NavInput::Back) => {
                Some(NavAction::Back)
            }
            _ => None,
        }
    }

    fn toggle_fullscreen(&mut self, ctx: &egui::Context) {
        self.options.fullscreen = !self.options.fullscreen;
        ctx.send_viewport_cmd(egui::ViewportCommand::Fullscreen(self.options.fullscreen));
    }
}
