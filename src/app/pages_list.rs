//! Component list screen

use super::app::Widgetdeck;
use crate::ui::catalog::{ComponentEntry, SECTIONS, entries_in};
use crate::ui::nav::NavAction;
use crate::ui::theme;

use eframe::egui::{self, RichText, Ui};
use egui_phosphor::regular as icons;

impl Widgetdeck {
    pub(super) fn display_screen_list(&mut self, ui: &mut Ui) -> Option<NavAction> {
        let mut action = None;

        ui.horizontal(|ui| {
            let back = ui.add(
                egui::Button::new(
                    RichText::new(icons::ARROW_LEFT)
                        .size(20.0)
                        .color(theme::colors::ACCENT_GLOW),
                )
                .min_size(egui::vec2(30.0, 30.0))
                .frame(false),
            );
            if back.clicked() {
                action = Some(NavAction::Back);
            }

            ui.add_space(8.0);
            ui.label(
                RichText::new("UI Components List")
                    .strong()
                    .size(20.0)
                    .color(theme::colors::ACCENT_GLOW),
            );
        });

        ui.add_space(12.0);

        let scroll_to_cursor = std::mem::take(&mut self.scroll_to_cursor);

        egui::ScrollArea::vertical().show(ui, |ui| {
            for section in SECTIONS {
                ui.add_space(12.0);
                ui.label(RichText::new(section).strong().size(17.0));
                ui.add_space(6.0);

                for (idx, entry) in entries_in(section) {
                    if let Some(a) = self.display_entry_card(ui, idx, entry, scroll_to_cursor) {
                        action = Some(a);
                    }
                    ui.add_space(4.0);
                }
            }
            ui.add_space(20.0);
        });

        action
    }

    fn display_entry_card(
        &mut self,
        ui: &mut Ui,
        idx: usize,
        entry: &ComponentEntry,
        scroll_to_cursor: bool,
    ) -> Option<NavAction> {
        let selected = self.list_cursor == idx;

        let card = theme::card_frame(selected).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(entry.title).strong());
            ui.label(
                RichText::new(entry.description)
                    .small()
                    .color(theme::colors::TEXT_MUTED),
            );
        });

        let response = card.response.interact(egui::Sense::click());
        if selected && scroll_to_cursor {
            response.scroll_to_me(Some(egui::Align::Center));
        }
        if response.clicked() {
            self.list_cursor = idx;
            return Some(NavAction::OpenDetail(entry.title));
        }
        None
    }
}
