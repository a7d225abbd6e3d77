pub mod colors;

// Re-export the styling helpers; color constants stay namespaced under
// theme::colors at call sites.
pub use colors::{apply_theme, card_frame, focus_stroke};
