// Palette and shared widget styling

use eframe::egui::{self, Color32, Stroke};

// Backgrounds
pub const BG_DARK: Color32 = Color32::from_rgb(16, 18, 24);
pub const BG_MID: Color32 = Color32::from_rgb(24, 27, 35);
pub const BG_LIGHT: Color32 = Color32::from_rgb(38, 42, 54);

// Text
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(222, 226, 235);
pub const TEXT_STRONG: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(148, 155, 170);

// Accent: the ready button's blue; headers lean cyan
pub const ACCENT: Color32 = Color32::from_rgb(0, 122, 255);
pub const ACCENT_DIM: Color32 = Color32::from_rgb(0, 74, 153);
pub const ACCENT_GLOW: Color32 = Color32::from_rgb(64, 208, 255);

// Cards
pub const CARD_BG: Color32 = Color32::from_rgb(30, 40, 58);
pub const SELECTION_BG: Color32 = Color32::from_rgb(33, 52, 84);

// Detail sample text
pub const SPAN_BROWN: Color32 = Color32::from_rgb(139, 69, 19);

/// Stroke drawn around the keyboard-focused card
pub fn focus_stroke() -> Stroke {
    Stroke::new(1.5, ACCENT)
}

/// Frame for a list entry card
pub fn card_frame(selected: bool) -> egui::Frame {
    let frame = egui::Frame::NONE
        .fill(if selected { SELECTION_BG } else { CARD_BG })
        .corner_radius(8)
        .inner_margin(egui::Margin::symmetric(12, 10));
    if selected {
        frame.stroke(focus_stroke())
    } else {
        frame
    }
}

/// Install the icon font and dark palette on the egui context.
/// Called once at startup, before the first frame.
pub fn apply_theme(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
    ctx.set_fonts(fonts);

    let mut style = (*ctx.style()).clone();
    let visuals = &mut style.visuals;

    visuals.dark_mode = true;
    visuals.override_text_color = Some(TEXT_PRIMARY);
    visuals.panel_fill = BG_DARK;
    visuals.window_fill = BG_MID;
    visuals.extreme_bg_color = BG_DARK;

    visuals.widgets.inactive.bg_fill = BG_LIGHT;
    visuals.widgets.inactive.weak_bg_fill = BG_LIGHT;
    visuals.widgets.hovered.bg_fill = ACCENT_DIM;
    visuals.widgets.hovered.weak_bg_fill = ACCENT_DIM;
    visuals.widgets.active.bg_fill = ACCENT;
    visuals.widgets.active.weak_bg_fill = ACCENT;

    visuals.selection.bg_fill = SELECTION_BG;
    visuals.selection.stroke = Stroke::new(1.0, ACCENT);

    ctx.set_style(style);
}
