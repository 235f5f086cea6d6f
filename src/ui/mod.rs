//! Stateless egui helpers shared by the landing page, the human book views
//! and the dialogs.
//!
//! Nothing in here owns state: colours, small widgets, image painting and a
//! few text utilities.

use chrono::{Datelike, Utc};
use egui::{Color32, RichText};

use maha_idea::content::SITE_NAME;
use maha_idea::render::animator::{RevealStyle, REVEAL_DISTANCE};

// ─── Palette ──────────────────────────────────────────────────────────────────

pub const BRAND: Color32 = Color32::from_rgb(0x53, 0x01, 0xbb);
pub const BRAND_DARK: Color32 = Color32::from_rgb(0x42, 0x01, 0x95);
pub const PAGE_BG: Color32 = Color32::WHITE;
pub const SOFT_BG: Color32 = Color32::from_rgb(0xf8, 0xf9, 0xfa);
pub const INK: Color32 = Color32::from_rgb(0x11, 0x18, 0x27);
pub const MUTED: Color32 = Color32::from_rgb(0x6b, 0x72, 0x80);
pub const HAIRLINE: Color32 = Color32::from_rgb(0xe5, 0xe7, 0xeb);
pub const ERROR: Color32 = Color32::from_rgb(0xef, 0x44, 0x44);

/// Brand colour at the given alpha, for tinted badges and quote boxes.
pub fn brand_tint(alpha: f32) -> Color32 {
    BRAND.gamma_multiply(alpha)
}

// ─── Widgets ──────────────────────────────────────────────────────────────────

/// Rounded outline button; `filled` paints it in the brand colour.
pub fn pill_button(ui: &mut egui::Ui, text: &str, filled: bool) -> egui::Response {
    let (fill, color, stroke) = if filled {
        (BRAND, Color32::WHITE, egui::Stroke::NONE)
    } else {
        (Color32::TRANSPARENT, Color32::BLACK, egui::Stroke::new(1.5, Color32::BLACK))
    };
    ui.add(
        egui::Button::new(RichText::new(text).size(16.0).color(color))
            .fill(fill)
            .stroke(stroke)
            .rounding(999.0)
            .min_size(egui::vec2(0.0, 40.0)),
    )
}

/// White card with a hairline border.
pub fn card_frame() -> egui::Frame {
    egui::Frame::none()
        .fill(Color32::WHITE)
        .rounding(24.0)
        .stroke(egui::Stroke::new(1.0, HAIRLINE))
        .inner_margin(egui::Margin::same(24.0))
}

/// Large centred section title.
pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.vertical_centered(|ui| {
        ui.label(RichText::new(text).size(32.0).color(Color32::BLACK));
    });
}

/// Bold heading with the purple bar in front, used in detail views.
pub fn accent_heading(ui: &mut egui::Ui, text: &str) {
    ui.horizontal(|ui| {
        let (bar, _) = ui.allocate_exact_size(egui::vec2(6.0, 22.0), egui::Sense::hover());
        ui.painter().rect_filled(bar, 3.0, BRAND);
        ui.add_space(6.0);
        ui.label(RichText::new(text).size(20.0).strong().color(INK));
    });
    ui.add_space(12.0);
}

/// Spinner with a caption underneath, centred in the available space.
pub fn loading_panel(ui: &mut egui::Ui, caption: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height().min(400.0) * 0.3);
        ui.add(egui::Spinner::new().size(48.0).color(BRAND));
        ui.add_space(16.0);
        ui.label(RichText::new(caption).color(MUTED));
    });
}

/// Error text with a retry button. Returns true when retry was clicked.
pub fn error_panel(ui: &mut egui::Ui, message: &str, retry_label: &str) -> bool {
    let mut retry = false;
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height().min(400.0) * 0.3);
        ui.label(RichText::new(message).color(ERROR));
        ui.add_space(16.0);
        retry = pill_button(ui, retry_label, true).clicked();
    });
    retry
}

/// Dim everything under the floating windows. Painted above the panels and
/// below windows.
pub fn modal_backdrop(ctx: &egui::Context, id: &str, alpha: u8) {
    let layer = egui::LayerId::new(egui::Order::PanelResizeLine, egui::Id::new(id));
    ctx.layer_painter(layer)
        .rect_filled(ctx.screen_rect(), 0.0, Color32::from_black_alpha(alpha));
}

/// Text button with a leading arrow, used for the "back" links.
pub fn back_link(ui: &mut egui::Ui, text: &str) -> bool {
    let label = RichText::new(format!("\u{2190}  {}", text)).size(15.0).color(MUTED);
    ui.add(egui::Button::new(label).frame(false))
        .on_hover_cursor(egui::CursorIcon::PointingHand)
        .clicked()
}

/// Run `add_contents` faded and shifted down by a reveal style.
///
/// The shift is paid back below the block so siblings do not move while it
/// animates.
pub fn revealed<R>(
    ui: &mut egui::Ui,
    style: RevealStyle,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> egui::InnerResponse<R> {
    let shift = style.offset_y.clamp(0.0, REVEAL_DISTANCE);
    ui.add_space(shift);
    let inner = ui.scope(|ui| {
        ui.set_opacity(style.opacity);
        add_contents(ui)
    });
    ui.add_space(REVEAL_DISTANCE - shift);
    inner
}

// ─── Images ───────────────────────────────────────────────────────────────────

/// UV window that crops an image to fill `target` without distortion, like
/// CSS `object-fit: cover`.
pub fn cover_uv(image: egui::Vec2, target: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
    if image.x <= 0.0 || image.y <= 0.0 || target.x <= 0.0 || target.y <= 0.0 {
        return full;
    }
    let image_aspect = image.x / image.y;
    let target_aspect = target.x / target.y;
    if image_aspect > target_aspect {
        let visible = target_aspect / image_aspect;
        let inset = (1.0 - visible) * 0.5;
        egui::Rect::from_min_max(egui::pos2(inset, 0.0), egui::pos2(1.0 - inset, 1.0))
    } else {
        let visible = image_aspect / target_aspect;
        let inset = (1.0 - visible) * 0.5;
        egui::Rect::from_min_max(egui::pos2(0.0, inset), egui::pos2(1.0, 1.0 - inset))
    }
}

/// UV window that fits the whole image inside `target`, returning the
/// letterboxed destination rect.
pub fn contain_rect(image: egui::Vec2, target: egui::Rect) -> egui::Rect {
    if image.x <= 0.0 || image.y <= 0.0 {
        return target;
    }
    let scale = (target.width() / image.x).min(target.height() / image.y);
    egui::Rect::from_center_size(target.center(), image * scale)
}

/// Paint a texture cropped to `rect`, or a neutral placeholder with an
/// optional glyph when it has not loaded (or failed).
pub fn paint_cover(
    painter: &egui::Painter,
    rect: egui::Rect,
    texture: Option<&egui::TextureHandle>,
    rounding: f32,
    tint: Color32,
    placeholder_glyph: Option<&str>,
) {
    match texture {
        Some(texture) => {
            let mut shape = egui::epaint::RectShape::filled(rect, rounding, tint);
            shape.fill_texture_id = texture.id();
            shape.uv = cover_uv(texture.size_vec2(), rect.size());
            painter.add(shape);
        }
        None => {
            painter.rect_filled(rect, rounding, Color32::from_gray(243));
            if let Some(glyph) = placeholder_glyph {
                painter.text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    glyph,
                    egui::FontId::proportional(40.0),
                    Color32::from_gray(200),
                );
            }
        }
    }
}

// ─── Text utilities ───────────────────────────────────────────────────────────

/// Truncate `s` to at most `max_chars` Unicode scalar values, appending `"..."` if truncated.
pub fn truncate_str(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let t: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", t)
    }
}

pub fn copyright_line(year: i32) -> String {
    format!("\u{00A9} {} {}", year, SITE_NAME)
}

/// Current calendar year in UTC.
pub fn current_year() -> i32 {
    Utc::now().year()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate_str("สวัสดี", 10), "สวัสดี");
        assert_eq!(truncate_str("abcdefghij", 6), "abc...");
    }

    #[test]
    fn test_copyright_line() {
        assert!(current_year() >= 2025);
        assert_eq!(copyright_line(2025), format!("\u{00A9} 2025 {}", SITE_NAME));
    }

    #[test]
    fn test_cover_uv_crops_long_side() {
        let uv = cover_uv(egui::vec2(200.0, 100.0), egui::vec2(100.0, 100.0));
        assert!((uv.min.x - 0.25).abs() < 1e-6);
        assert!((uv.max.x - 0.75).abs() < 1e-6);
        assert_eq!(uv.min.y, 0.0);

        let uv = cover_uv(egui::vec2(100.0, 400.0), egui::vec2(100.0, 100.0));
        assert!((uv.min.y - 0.375).abs() < 1e-6);
        assert_eq!(uv.min.x, 0.0);
    }

    #[test]
    fn test_contain_rect_letterboxes() {
        let target = egui::Rect::from_min_size(egui::pos2(0.0, 0.0), egui::vec2(200.0, 100.0));
        let fitted = contain_rect(egui::vec2(100.0, 100.0), target);
        assert_eq!(fitted.size(), egui::vec2(100.0, 100.0));
        assert_eq!(fitted.center(), target.center());
    }
}
