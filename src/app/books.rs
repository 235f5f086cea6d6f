//! Human book views for `SiteApp`: the card dialog opened from the landing
//! page and the routed full page at `/human-book/:id`.

use std::time::Instant;

use egui::{Color32, RichText};

use maha_idea::book::{BookCard, BookDetail, UNTITLED};
use maha_idea::content::HUMAN_BOOKS_HEADING;
use maha_idea::net::image::ImageSource;
use maha_idea::net::loader::LoadState;
use maha_idea::route::{select_detail, Anchor, Route};

use super::SiteApp;
use crate::ui;

const DETAIL_TITLE: &str = "รายละเอียดหนังสือคน";
const LOADING_DIALOG: &str = "กำลังโหลดข้อมูล...";
const LOADING_PAGE: &str = "กำลังโหลดข้อมูลหนังสือคน...";
const RETRY: &str = "ลองใหม่อีกครั้ง";
const BACK_TO_CARDS: &str = "กลับไปหน้าไพ่";
const BACK_HOME: &str = "กลับไปหน้าหลัก";
const OPEN_FULL_PAGE: &str = "เปิดแบบเต็มหน้า";
const NOT_FOUND: &str = "ไม่พบข้อมูลหนังสือคนที่ต้องการ";
const READ_MORE: &str = "อ่านเพิ่มเติม";
const EMPTY_TITLE: &str = "ยังไม่มีหนังสือคน";
const EMPTY_HINT: &str = "ติดตามเร็วๆ นี้";
const BOOK_GLYPH: &str = "\u{1F4DA}";
const PERSON_GLYPH: &str = "\u{1F464}";

/// The two places a detail is shown differ in header and contact box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DetailLayout {
    Dialog,
    Page,
}

/// Grid column count for the card list at a given width.
fn card_columns(width: f32) -> usize {
    match width {
        w if w >= 1200.0 => 4,
        w if w >= 900.0 => 3,
        w if w >= 560.0 => 2,
        _ => 1,
    }
}

fn category_badge(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(ui::brand_tint(0.1))
        .rounding(999.0)
        .inner_margin(egui::Margin::symmetric(10.0, 4.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(12.0).strong().color(ui::BRAND));
        });
}

/// Cards only carry a badge when the sheet names a category.
fn card_badge(card: &BookCard) -> Option<&str> {
    card.category.as_deref().filter(|c| !c.is_empty())
}

fn chip(ui: &mut egui::Ui, text: &str) {
    egui::Frame::none()
        .fill(Color32::from_gray(243))
        .rounding(999.0)
        .inner_margin(egui::Margin::symmetric(12.0, 6.0))
        .show(ui, |ui| {
            ui.label(RichText::new(text).size(14.0).color(ui::INK));
        });
}

/// Labelled stat box used in the dialog header.
fn stat(ui: &mut egui::Ui, label: &str, value: &str) {
    egui::Frame::none()
        .fill(ui::SOFT_BG)
        .rounding(12.0)
        .inner_margin(egui::Margin::same(12.0))
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(label).size(12.0).color(ui::MUTED));
                ui.label(RichText::new(value).size(15.0).strong().color(ui::INK));
            });
        });
}

fn text_card(ui: &mut egui::Ui, heading: &str, body: &str) {
    ui::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui::accent_heading(ui, heading);
        ui.label(RichText::new(body).size(16.0).color(ui::MUTED));
    });
    ui.add_space(16.0);
}

fn experience_card(ui: &mut egui::Ui, detail: &BookDetail) {
    ui::card_frame().show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui::accent_heading(ui, "ประสบการณ์และผลงาน");
        for (heading, body) in [
            ("ความภูมิใจ", &detail.proud_work),
            ("เทคนิคเฉพาะตัว", &detail.technique),
            ("ความสามารถพิเศษ", &detail.talents),
        ] {
            ui.label(RichText::new(heading).size(16.0).strong().color(ui::INK));
            ui.label(RichText::new(body.as_str()).size(15.0).color(ui::MUTED));
            ui.add_space(10.0);
        }
    });
    ui.add_space(16.0);
}

fn motto_box(ui: &mut egui::Ui, motto: &str) {
    egui::Frame::none()
        .fill(ui::brand_tint(0.06))
        .rounding(12.0)
        .stroke(egui::Stroke::new(1.0, ui::brand_tint(0.25)))
        .inner_margin(egui::Margin::same(14.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                RichText::new(format!("\u{201C}{}\u{201D}", motto))
                    .size(16.0)
                    .italics()
                    .color(ui::BRAND_DARK),
            );
        });
}

fn contact_box(ui: &mut egui::Ui, detail: &BookDetail, layout: DetailLayout) {
    egui::Frame::none()
        .fill(ui::brand_tint(0.08))
        .rounding(16.0)
        .inner_margin(egui::Margin::same(16.0))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new("สนใจอ่านเล่มนี้?").size(17.0).strong().color(ui::BRAND));
            match layout {
                DetailLayout::Dialog => {
                    ui.label(RichText::new("สามารถติดต่อหรือติดตามได้ที่").color(ui::MUTED));
                    ui.label(RichText::new(&detail.contact).strong().color(ui::INK));
                }
                DetailLayout::Page => {
                    ui.label(RichText::new("ข้อมูลการติดต่อ").color(ui::MUTED));
                    let rows = [
                        ("ที่อยู่:", detail.address.as_deref()),
                        ("เบอร์โทร:", detail.phone.as_deref()),
                        ("ช่องทางอื่น:", Some(detail.contact.as_str())),
                    ];
                    for (label, value) in rows {
                        if let Some(value) = value {
                            ui.horizontal_wrapped(|ui| {
                                ui.label(RichText::new(label).strong().color(ui::INK));
                                ui.label(RichText::new(value).color(ui::INK));
                            });
                        }
                    }
                }
            }
        });
}

impl SiteApp {
    // ─── Dialog ───────────────────────────────────────────────────────────────

    pub fn draw_book_dialog(&mut self, ctx: &egui::Context, now: Instant) {
        if !self.books.is_open() {
            return;
        }
        ui::modal_backdrop(ctx, "book_dialog_backdrop", 128);

        let mut open = true;
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
            open = false;
        }
        let screen = ctx.screen_rect();
        let size = egui::vec2((screen.width() * 0.95).min(1152.0), screen.height() * 0.85);
        let title = if self.books.selected().is_some() {
            DETAIL_TITLE
        } else {
            HUMAN_BOOKS_HEADING
        };

        let ctx_clone = ctx.clone();
        egui::Window::new(RichText::new(title).size(22.0).strong().color(ui::BRAND))
            .id(egui::Id::new("human_book_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .fixed_size(size)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .frame(egui::Frame::window(&ctx.style()).fill(ui::SOFT_BG).rounding(24.0))
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .id_salt("book_dialog_scroll")
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.draw_dialog_body(ui, &ctx_clone, now));
            });

        if !open {
            self.close_book_dialog(now);
        }
    }

    fn draw_dialog_body(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let failed = match self.dialog_loader.state() {
            LoadState::Idle | LoadState::Loading => {
                ui::loading_panel(ui, LOADING_DIALOG);
                return;
            }
            LoadState::Failed(message) => Some(message.clone()),
            LoadState::Ready(_) => None,
        };
        if let Some(message) = failed {
            if ui::error_panel(ui, &message, RETRY) {
                let ctx = ctx.clone();
                self.dialog_loader.retry(move || ctx.request_repaint());
            }
            return;
        }

        if let Some(selection) = self.books.selected().cloned() {
            ui.horizontal(|ui| {
                if ui::back_link(ui, BACK_TO_CARDS) {
                    self.books.back_to_list();
                }
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui::pill_button(ui, OPEN_FULL_PAGE, false).clicked() {
                        self.close_book_dialog(now);
                        self.open_book_page(ctx, selection.index);
                    }
                });
            });
            ui.add_space(12.0);
            let detail = BookDetail::from_record(&selection.record);
            self.draw_detail(ui, ctx, &detail, DetailLayout::Dialog);
            return;
        }

        let cards: Vec<BookCard> = self
            .dialog_loader
            .records()
            .iter()
            .map(BookCard::from_record)
            .collect();
        if cards.is_empty() {
            ui.vertical_centered(|ui| {
                ui.add_space(80.0);
                ui.label(RichText::new(BOOK_GLYPH).size(56.0));
                ui.label(RichText::new(EMPTY_TITLE).size(20.0).strong().color(ui::INK));
                ui.label(RichText::new(EMPTY_HINT).color(ui::MUTED));
            });
            return;
        }

        if let Some(index) = self.draw_card_grid(ui, ctx, &cards) {
            let record = self.dialog_loader.records().get(index).cloned();
            if let Some(record) = record {
                self.books.select(index, &record);
            }
        }
    }

    /// Lay the cards out in rows. Returns the index of a clicked card.
    fn draw_card_grid(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, cards: &[BookCard]) -> Option<usize> {
        let columns = card_columns(ui.available_width());
        let gap = 20.0;
        let card_width = (ui.available_width() - gap * (columns - 1) as f32) / columns as f32;
        let mut clicked = None;

        for (row, chunk) in cards.chunks(columns).enumerate() {
            ui.horizontal_top(|ui| {
                ui.spacing_mut().item_spacing.x = gap;
                for (offset, card) in chunk.iter().enumerate() {
                    let index = row * columns + offset;
                    if self.draw_card(ui, ctx, card, index, card_width) {
                        clicked = Some(index);
                    }
                }
            });
            ui.add_space(gap);
        }
        clicked
    }

    fn draw_card(
        &mut self,
        ui: &mut egui::Ui,
        ctx: &egui::Context,
        card: &BookCard,
        index: usize,
        width: f32,
    ) -> bool {
        let texture = card
            .image_url
            .as_ref()
            .and_then(|url| self.texture(ctx, &ImageSource::Remote(url.clone())));

        let frame = egui::Frame::none()
            .fill(Color32::WHITE)
            .rounding(20.0)
            .stroke(egui::Stroke::new(1.0, ui::HAIRLINE))
            .show(ui, |ui| {
                ui.set_width(width);
                let (image_rect, _) =
                    ui.allocate_exact_size(egui::vec2(width, width * 0.75), egui::Sense::hover());
                let rounding = egui::Rounding {
                    nw: 20.0,
                    ne: 20.0,
                    sw: 0.0,
                    se: 0.0,
                };
                match &texture {
                    Some(texture) => {
                        let mut shape = egui::epaint::RectShape::filled(image_rect, rounding, Color32::WHITE);
                        shape.fill_texture_id = texture.id();
                        shape.uv = ui::cover_uv(texture.size_vec2(), image_rect.size());
                        ui.painter().add(shape);
                    }
                    None => ui::paint_cover(ui.painter(), image_rect, None, 0.0, Color32::WHITE, Some(BOOK_GLYPH)),
                }

                egui::Frame::none()
                    .inner_margin(egui::Margin::same(16.0))
                    .show(ui, |ui| {
                        ui.set_width(width - 32.0);
                        if let Some(category) = card_badge(card) {
                            category_badge(ui, category);
                            ui.add_space(8.0);
                        }
                        ui.label(
                            RichText::new(ui::truncate_str(&card.title, 60))
                                .size(18.0)
                                .strong()
                                .color(ui::INK),
                        );
                        ui.label(RichText::new(&card.author).size(14.0).color(ui::BRAND));
                        ui.add_space(6.0);
                        ui.label(RichText::new(ui::truncate_str(&card.summary, 120)).size(14.0).color(ui::MUTED));
                        ui.add_space(10.0);
                        ui.label(RichText::new(format!("{} \u{2192}", READ_MORE)).size(14.0).strong().color(ui::BRAND));
                    });
            });

        let response = ui.interact(frame.response.rect, ui.id().with(("book_card", index)), egui::Sense::click());
        if response.hovered() {
            ui.painter().rect_stroke(
                frame.response.rect,
                20.0,
                egui::Stroke::new(1.5, ui::brand_tint(0.5)),
            );
        }
        response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
    }

    // ─── Full page ────────────────────────────────────────────────────────────

    pub fn draw_book_page(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, id: &str) {
        ui.painter().rect_filled(ui.max_rect(), 0.0, ui::SOFT_BG);

        let mut area = egui::ScrollArea::vertical()
            .id_salt("book_page_scroll")
            .auto_shrink([false, false]);
        if self.page_scroll_reset {
            area = area.vertical_scroll_offset(0.0);
            self.page_scroll_reset = false;
        }

        area.show(ui, |ui| {
            let failed = match self.page_loader.state() {
                LoadState::Idle | LoadState::Loading => {
                    ui::loading_panel(ui, LOADING_PAGE);
                    return;
                }
                LoadState::Failed(message) => Some(message.clone()),
                LoadState::Ready(_) => None,
            };
            if let Some(message) = failed {
                if ui::error_panel(ui, &message, RETRY) {
                    let ctx = ctx.clone();
                    self.page_loader.retry(move || ctx.request_repaint());
                }
                return;
            }

            let found = select_detail(self.page_loader.records(), id).map(|(_, record)| BookDetail::from_record(record));
            let Some(detail) = found else {
                ui.vertical_centered(|ui| {
                    ui.add_space(120.0);
                    ui.label(RichText::new(NOT_FOUND).size(20.0).color(ui::MUTED));
                    ui.add_space(16.0);
                    if ui::pill_button(ui, BACK_HOME, true).clicked() {
                        self.navigate(ctx, Route::default());
                    }
                });
                return;
            };

            let width = ui.available_width().min(1100.0);
            let padding = ((ui.available_width() - width) * 0.5).max(16.0);
            ui.add_space(24.0);
            ui.horizontal_top(|ui| {
                ui.add_space(padding);
                ui.vertical(|ui| {
                    ui.set_width(width - 32.0);
                    if ui::back_link(ui, BACK_HOME) {
                        self.navigate(ctx, Route::landing_at(Anchor::HumanBooks));
                    }
                    ui.add_space(16.0);
                    self.draw_detail(ui, ctx, &detail, DetailLayout::Page);
                });
            });
            ui.add_space(48.0);
        });
    }

    // ─── Shared detail ────────────────────────────────────────────────────────

    fn draw_detail(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, detail: &BookDetail, layout: DetailLayout) {
        let portrait = detail
            .portrait_url
            .as_ref()
            .and_then(|url| self.texture(ctx, &ImageSource::Remote(url.clone())));
        let wide = ui.available_width() >= 720.0;

        ui::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            let portrait_width = if wide {
                (ui.available_width() / 3.0).min(320.0)
            } else {
                ui.available_width()
            };
            let draw_portrait = |ui: &mut egui::Ui| {
                let (rect, _) = ui.allocate_exact_size(
                    egui::vec2(portrait_width, portrait_width * 4.0 / 3.0),
                    egui::Sense::hover(),
                );
                ui::paint_cover(ui.painter(), rect, portrait.as_ref(), 16.0, Color32::WHITE, Some(PERSON_GLYPH));
            };
            let draw_info = |ui: &mut egui::Ui| {
                ui.vertical(|ui| {
                    category_badge(ui, &detail.category);
                    ui.add_space(8.0);
                    let title = if detail.title.is_empty() { UNTITLED } else { detail.title.as_str() };
                    let title = match layout {
                        DetailLayout::Dialog => title.to_string(),
                        DetailLayout::Page => format!("หนังสือ{}", title),
                    };
                    ui.label(RichText::new(title).size(30.0).strong().color(ui::INK));
                    ui.label(RichText::new(format!("โดย {}", detail.author)).size(18.0).color(ui::BRAND));
                    ui.add_space(12.0);

                    match layout {
                        DetailLayout::Dialog => {
                            ui.horizontal_wrapped(|ui| {
                                if let Some(age) = &detail.age {
                                    stat(ui, "อายุ", &format!("{} ปี", age));
                                }
                                if let Some(occupation) = &detail.occupation {
                                    stat(ui, "ปัจจุบันทำ", occupation);
                                }
                                if let Some(role) = &detail.role {
                                    stat(ui, "บทบาท", role);
                                }
                            });
                        }
                        DetailLayout::Page => {
                            ui.horizontal_wrapped(|ui| {
                                if let Some(age) = &detail.age {
                                    chip(ui, &format!("อายุ {} ปี", age));
                                }
                                if let Some(occupation) = &detail.occupation {
                                    chip(ui, occupation);
                                }
                            });
                        }
                    }

                    if let Some(motto) = &detail.motto {
                        ui.add_space(12.0);
                        motto_box(ui, motto);
                    }
                    ui.add_space(12.0);
                    contact_box(ui, detail, layout);
                });
            };

            if wide {
                ui.horizontal_top(|ui| {
                    draw_portrait(ui);
                    ui.add_space(24.0);
                    draw_info(ui);
                });
            } else {
                draw_portrait(ui);
                ui.add_space(16.0);
                draw_info(ui);
            }
        });
        ui.add_space(16.0);

        let left = |ui: &mut egui::Ui| {
            text_card(ui, "ประวัติโดยย่อ", &detail.bio);
            text_card(ui, "ความหลงใหล", &detail.passion);
        };
        let right = |ui: &mut egui::Ui| {
            text_card(ui, "สิ่งที่อยากแบ่งปัน", &detail.sharing);
            experience_card(ui, detail);
        };
        if wide {
            ui.columns(2, |columns| {
                left(&mut columns[0]);
                right(&mut columns[1]);
            });
        } else {
            left(ui);
            right(ui);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maha_idea::record::Record;

    #[test]
    fn test_card_columns() {
        assert_eq!(card_columns(400.0), 1);
        assert_eq!(card_columns(600.0), 2);
        assert_eq!(card_columns(1000.0), 3);
        assert_eq!(card_columns(1400.0), 4);
    }

    #[test]
    fn test_card_badge_needs_a_category() {
        let plain: Record = [("ชื่อหนังสือ", "ก")].into_iter().collect();
        assert_eq!(card_badge(&BookCard::from_record(&plain)), None);

        let tagged: Record = [("ชื่อหนังสือ", "ก"), ("หมวดหมู่", "ศิลปะ")].into_iter().collect();
        assert_eq!(card_badge(&BookCard::from_record(&tagged)), Some("ศิลปะ"));
    }
}
