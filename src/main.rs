mod app;
mod paths;
mod ui;

use crate::app::{Widgetdeck, load_cfg};
use crate::paths::PATH_DECK;

fn main() -> eframe::Result {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{}", USAGE_TEXT);
        std::process::exit(0);
    }
    if args.iter().any(|arg| arg == "--version") {
        println!("widgetdeck {}", env!("CARGO_PKG_VERSION"));
        std::process::exit(0);
    }

    if let Err(e) = std::fs::create_dir_all(&*PATH_DECK) {
        eprintln!(
            "[widgetdeck] Failed to create data dir {}: {}",
            PATH_DECK.display(),
            e
        );
    }

    let mut config = load_cfg();
    if args.iter().any(|arg| arg == "--fullscreen") {
        config.fullscreen = true;
    }

    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([420.0, 760.0])
            .with_min_inner_size([360.0, 560.0])
            .with_fullscreen(config.fullscreen)
            .with_icon(
                eframe::icon_data::from_png_bytes(&include_bytes!("../res/icon.png")[..])
                    .expect("Failed to load icon"),
            ),
        ..Default::default()
    };

    println!("[widgetdeck] Starting eframe app...");

    eframe::run_native(
        "Widgetdeck",
        options,
        Box::new(|cc| {
            // This gives us image support:
            egui_extras::install_image_loaders(&cc.egui_ctx);
            cc.egui_ctx.set_zoom_factor(config.zoom_factor);

            ui::theme::apply_theme(&cc.egui_ctx);

            Ok(Box::new(Widgetdeck::new(config)))
        }),
    )
}

static USAGE_TEXT: &str = r#"
Usage: widgetdeck [OPTIONS]

Options:
    --fullscreen          Start in fullscreen mode
    --version             Print the version and exit
    --help                Show this help text
"#;
