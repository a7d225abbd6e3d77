mod app;
mod config;
mod pages_detail;
mod pages_home;
mod pages_list;

pub use app::Widgetdeck;
pub use config::{DeckConfig, load_cfg};
