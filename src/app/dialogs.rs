//! Contact, newsletter and event map modals for `SiteApp`.

use std::time::Instant;

use egui::{Color32, RichText};

use maha_idea::content::{EVENT_MAP, FOOTER_HEADING, SITE_NAME};
use maha_idea::forms::{FormDialog, FormFields};

use super::SiteApp;
use crate::ui;

const SUBSCRIBE_BLURB: &str =
    "ติดตามเพื่อรับข้อมูลข่าวสารเกี่ยวกับโครงการล่าสุด และกิจกรรมต่างๆ ของเรา";

/// Window chrome shared by the two forms.
fn form_window<'a>(title: &str) -> egui::Window<'a> {
    egui::Window::new(RichText::new(title).size(22.0).strong().color(ui::INK))
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .fixed_size([440.0, 0.0])
}

fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(RichText::new(text).size(14.0).strong().color(ui::INK));
}

/// Green tick with a two-line message, shown after a simulated delivery.
fn success_panel(ui: &mut egui::Ui, heading: &str, body: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(16.0);
        ui.label(RichText::new("\u{2714}").size(44.0).color(Color32::from_rgb(0x16, 0xa3, 0x4a)));
        ui.add_space(8.0);
        ui.label(RichText::new(heading).size(20.0).strong().color(ui::INK));
        ui.label(RichText::new(body).color(ui::MUTED));
        ui.add_space(16.0);
    });
}

/// Submit button plus the validation message. Submits on click.
fn submit_row<F: FormFields>(ui: &mut egui::Ui, form: &mut FormDialog<F>, idle: &str, busy: &str) {
    if let Some(error) = form.error() {
        ui.colored_label(ui::ERROR, error.to_string());
        ui.add_space(6.0);
    }
    let submitting = form.is_submitting();
    let label = if submitting { busy } else { idle };
    let button = egui::Button::new(RichText::new(label).size(16.0).color(Color32::WHITE))
        .fill(if submitting { ui::BRAND_DARK } else { ui::BRAND })
        .rounding(999.0)
        .min_size(egui::vec2(ui.available_width(), 44.0));
    if ui.add_enabled(!submitting, button).clicked() {
        if let Err(e) = form.submit(Instant::now()) {
            log::debug!("Form rejected: {}", e);
        }
    }
}

impl SiteApp {
    pub fn draw_contact_dialog(&mut self, ctx: &egui::Context) {
        if !self.contact_open {
            return;
        }
        ui::modal_backdrop(ctx, "contact_backdrop", 128);

        let mut open = true;
        let form = &mut self.contact;
        form_window("ติดต่อเรา")
            .id(egui::Id::new("contact_dialog"))
            .open(&mut open)
            .show(ctx, |ui| {
                if form.is_submitted() {
                    success_panel(ui, "ส่งข้อความเรียบร้อย!", "เราจะติดต่อกลับหาคุณเร็วๆ นี้");
                    return;
                }
                let editable = !form.is_submitting();
                ui.add_enabled_ui(editable, |ui| {
                    field_label(ui, "ชื่อ");
                    ui.add(egui::TextEdit::singleline(&mut form.fields.name).desired_width(f32::INFINITY));
                    ui.add_space(8.0);
                    field_label(ui, "อีเมล");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.fields.email)
                            .hint_text("you@example.com")
                            .desired_width(f32::INFINITY),
                    );
                    ui.add_space(8.0);
                    field_label(ui, "ข้อความ");
                    ui.add(
                        egui::TextEdit::multiline(&mut form.fields.message)
                            .desired_rows(4)
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.add_space(12.0);
                submit_row(ui, form, "ส่งข้อความ", "กำลังส่ง...");
            });

        // closing mid-send is refused so the delivery still completes
        if !open && !self.contact.is_submitting() {
            self.contact_open = false;
        }
    }

    pub fn draw_updates_dialog(&mut self, ctx: &egui::Context) {
        if !self.updates_open {
            return;
        }
        ui::modal_backdrop(ctx, "updates_backdrop", 128);

        let mut open = true;
        let form = &mut self.updates;
        form_window(FOOTER_HEADING)
            .id(egui::Id::new("updates_dialog"))
            .open(&mut open)
            .show(ctx, |ui| {
                if form.is_submitted() {
                    success_panel(ui, "สมัครรับข่าวสารเรียบร้อย!", "เราจะส่งข่าวสารล่าสุดให้คุณเร็วๆ นี้");
                    return;
                }
                ui.label(RichText::new(SUBSCRIBE_BLURB).color(ui::MUTED));
                ui.add_space(12.0);
                ui.add_enabled_ui(!form.is_submitting(), |ui| {
                    field_label(ui, "อีเมล");
                    ui.add(
                        egui::TextEdit::singleline(&mut form.fields.email)
                            .hint_text("you@example.com")
                            .desired_width(f32::INFINITY),
                    );
                });
                ui.add_space(12.0);
                submit_row(ui, form, "ติดตาม", "กำลังสมัคร...");
                ui.add_space(8.0);
                ui.label(
                    RichText::new(format!(
                        "เมื่อกดติดตาม คุณยอมรับที่จะรับอีเมลข่าวสารจาก {} (ยกเลิกได้ตลอดเวลา)",
                        SITE_NAME
                    ))
                    .size(12.0)
                    .color(ui::MUTED),
                );
            });

        if !open && !self.updates.is_submitting() {
            self.updates_open = false;
        }
    }

    /// Full-screen event map; any click or Escape closes it.
    pub fn draw_map_modal(&mut self, ctx: &egui::Context) {
        if !self.map_open {
            return;
        }
        let source = self.asset(EVENT_MAP);
        let texture = self.texture(ctx, &source);
        let failed = self.image_loader.is_failed(&source.key());

        let screen = ctx.screen_rect();
        let response = egui::Area::new(egui::Id::new("event_map_modal"))
            .order(egui::Order::Foreground)
            .fixed_pos(screen.min)
            .show(ctx, |ui| {
                let (rect, response) = ui.allocate_exact_size(screen.size(), egui::Sense::click());
                let painter = ui.painter();
                painter.rect_filled(rect, 0.0, Color32::from_black_alpha(230));

                let frame = rect.shrink(32.0);
                match &texture {
                    Some(texture) => {
                        let target = ui::contain_rect(texture.size_vec2(), frame);
                        let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                        painter.image(texture.id(), target, uv, Color32::WHITE);
                    }
                    None if failed => {
                        painter.text(
                            frame.center(),
                            egui::Align2::CENTER_CENTER,
                            "ไม่สามารถแสดงแผนที่ได้",
                            egui::FontId::proportional(18.0),
                            Color32::from_gray(200),
                        );
                    }
                    None => {
                        painter.text(
                            frame.center(),
                            egui::Align2::CENTER_CENTER,
                            "\u{2026}",
                            egui::FontId::proportional(32.0),
                            Color32::from_gray(200),
                        );
                    }
                }

                painter.text(
                    egui::pos2(rect.right() - 28.0, rect.top() + 28.0),
                    egui::Align2::CENTER_CENTER,
                    "\u{2715}",
                    egui::FontId::proportional(28.0),
                    Color32::WHITE,
                );
                response
            })
            .inner;

        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked()
            || ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            self.map_open = false;
        }
    }
}
