//! Splash screen shown at startup

use super::app::Widgetdeck;
use crate::ui::nav::NavAction;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};

impl Widgetdeck {
    pub(super) fn display_screen_home(&mut self, ui: &mut Ui) -> Option<NavAction> {
        let mut action = None;

        ui.vertical_centered(|ui| {
            ui.add_space(32.0);
            ui.add(
                egui::Image::new(egui::include_image!("../../assets/logo.png")).max_height(160.0),
            );
            ui.add_space(24.0);

            ui.label(RichText::new("Widgetdeck").strong().size(22.0));
            ui.add_space(8.0);
            ui.label(
                RichText::new(
                    "A small tour of the building blocks this app is made of: \
                     text, images, input fields and layout primitives.",
                )
                .color(theme::colors::TEXT_MUTED),
            );

            // Park the button in the lower third, splash-screen style
            ui.add_space((ui.available_height() - 130.0).max(24.0));

            let ready = ui.add(
                egui::Button::new(
                    RichText::new("I'm ready")
                        .strong()
                        .size(16.0)
                        .color(theme::colors::TEXT_STRONG),
                )
                .min_size(egui::vec2(ui.available_width() * 0.8, 44.0))
                .corner_radius(8)
                .fill(theme::colors::ACCENT),
            );
            if ready.clicked() {
                action = Some(NavAction::OpenList);
            }

            ui.add_space(12.0);
            ui.label(
                RichText::new("Enter to continue · arrows to browse · Esc to go back")
                    .small()
                    .color(theme::colors::TEXT_MUTED),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("v{}", env!("CARGO_PKG_VERSION")))
                    .small()
                    .weak(),
            );
        });

        action
    }
}
