//! Header strip for `SiteApp`.
//!
//! Brand on the left (scrolls to the top), then back/forward and a path bar
//! for in-app routes, and the Contact button on the right (scrolls to the
//! human books section).

use egui::RichText;

use maha_idea::content::BRAND;
use maha_idea::route::Anchor;

use super::SiteApp;
use crate::ui;

impl SiteApp {
    pub fn draw_header(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        ui.horizontal(|ui| {
            let brand = ui.add(
                egui::Label::new(RichText::new(BRAND).size(28.0).color(egui::Color32::BLACK))
                    .sense(egui::Sense::click()),
            );
            if brand.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                self.go_home(ctx, Anchor::Top);
            }

            ui.add_space(16.0);

            // Back / Forward
            if ui
                .add_enabled(
                    self.can_go_back(),
                    egui::Button::new("\u{25C0}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.go_back(ctx);
            }
            if ui
                .add_enabled(
                    self.can_go_forward(),
                    egui::Button::new("\u{25B6}").min_size(egui::vec2(28.0, 24.0)),
                )
                .clicked()
            {
                self.go_forward(ctx);
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui::pill_button(ui, "Contact", false).clicked() {
                    self.go_home(ctx, Anchor::HumanBooks);
                }

                ui.add_space(16.0);

                if let Some(ref err) = self.path_error {
                    ui.colored_label(ui::ERROR, ui::truncate_str(err, 40));
                }

                let width = (ui.available_width() - 8.0).clamp(80.0, 320.0);
                let response = ui.add_sized(
                    [width, 24.0],
                    egui::TextEdit::singleline(&mut self.path_input)
                        .hint_text("/human-book/0")
                        .font(egui::TextStyle::Monospace),
                );
                if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                    let path = self.path_input.clone();
                    self.navigate_to_path(ctx, &path);
                }
            });
        });
    }
}
