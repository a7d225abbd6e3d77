//! Styled text detail screen

use super::app::Widgetdeck;
use crate::ui::nav::NavAction;
use crate::ui::theme;

use eframe::egui::text::{LayoutJob, TextFormat};
use eframe::egui::{self, Align, FontId, RichText, Stroke, Ui};
use egui_phosphor::regular as icons;

impl Widgetdeck {
    pub(super) fn display_screen_detail(&mut self, ui: &mut Ui) -> Option<NavAction> {
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
                RichText::new("Text Detail")
                    .strong()
                    .size(22.0)
                    .color(theme::colors::ACCENT_GLOW),
            );
        });

        ui.add_space(30.0);

        ui.vertical_centered(|ui| {
            ui.label(sample_text());
        });

        action
    }
}

/// The fixed sample paragraph: plain, struck-through, colored and strong
/// spans mixed in one layout. Strong spans brighten the text color, the
/// usual egui stand-in for a bold face.
fn sample_text() -> LayoutJob {
    let plain = TextFormat {
        font_id: FontId::proportional(22.0),
        color: theme::colors::TEXT_PRIMARY,
        ..Default::default()
    };
    let strong = TextFormat {
        color: theme::colors::TEXT_STRONG,
        ..plain.clone()
    };
    let struck = TextFormat {
        strikethrough: Stroke::new(1.0, theme::colors::TEXT_PRIMARY),
        ..plain.clone()
    };
    let brown = TextFormat {
        color: theme::colors::SPAN_BROWN,
        ..plain.clone()
    };

    let mut job = LayoutJob::default();
    job.halign = Align::Center;
    job.append("The ", 0.0, plain.clone());
    job.append("quick", 0.0, struck);
    job.append(" ", 0.0, plain.clone());
    job.append("Brown", 0.0, brown);
    job.append("\nfox j u m p s ", 0.0, plain.clone());
    job.append("over", 0.0, strong.clone());
    job.append("\nthe ", 0.0, plain.clone());
    job.append("lazy", 0.0, strong);
    job.append(" dog.", 0.0, plain);
    job
}
