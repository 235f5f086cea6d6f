use eframe::egui;

use maha_idea::config::SiteConfig;
use maha_idea::route::Route;

mod app;
mod ui;

use app::SiteApp;

/// System fonts with Thai coverage, tried in order.
const THAI_FONT_PATHS: [&str; 6] = [
    "/usr/share/fonts/truetype/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/noto/NotoSansThai-Regular.ttf",
    "/usr/share/fonts/truetype/tlwg/Loma.ttf",
    "/System/Library/Fonts/Supplemental/Thonburi.ttc",
    "/System/Library/Fonts/Thonburi.ttc",
    "C:\\Windows\\Fonts\\tahoma.ttf",
];

fn install_thai_font(ctx: &egui::Context) {
    let mut fonts = egui::FontDefinitions::default();
    let Some((path, data)) = THAI_FONT_PATHS
        .iter()
        .find_map(|path| std::fs::read(path).ok().map(|data| (path, data)))
    else {
        log::warn!("No Thai font found; Thai text will render as boxes");
        return;
    };

    log::info!("Using Thai font {}", path);
    fonts
        .font_data
        .insert("thai".to_owned(), egui::FontData::from_owned(data));
    for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
        fonts.families.entry(family).or_default().push("thai".to_owned());
    }
    ctx.set_fonts(fonts);
}

fn main() -> eframe::Result<()> {
    env_logger::init();

    let config = SiteConfig::default();
    let initial = match std::env::args().nth(1) {
        Some(path) => Route::parse(&path).unwrap_or_else(|e| {
            log::warn!("{}; opening the landing page", e);
            Route::default()
        }),
        None => Route::default(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size(config.window_size),
        ..Default::default()
    };

    eframe::run_native(
        "มหาiDea",
        options,
        Box::new(|cc| {
            install_thai_font(&cc.egui_ctx);
            Ok(Box::new(SiteApp::new(config, initial)))
        }),
    )
}
