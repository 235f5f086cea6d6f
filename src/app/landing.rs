//! Landing page rendering for `SiteApp`.
//!
//! The page is one vertical scroll area. Every frame reads the scroll
//! offset and viewport straight from the area and feeds them to the pure
//! calculators in `render::animator`; block positions measured while
//! drawing are kept for the next frame's reveal and word cloud math.

use std::time::Instant;

use egui::{Color32, RichText};

use maha_idea::content::{
    decoration_asset, DECORATIONS, EVENT_MAP, FACEBOOK_URL, FOOTER_CTA, FOOTER_HEADING,
    FOOTER_TAGLINE, HERO_COPY, HERO_POSTER, HUMAN_BOOKS_BLURB, HUMAN_BOOKS_CTA,
    HUMAN_BOOKS_HEADING, PARTNERS, PARTNERS_CTA, PARTNERS_HEADING, STUDIOS, UPCOMING_EVENT,
    WORDS, WORKS,
};
use maha_idea::net::image::ImageSource;
use maha_idea::render::animator::{
    hero_frame, section_progress, visible_ratio, word_style, RevealSpec, Viewport, WordStyle,
    WordWeight, DECORATION_HOVER_OPACITY, DECORATION_OPACITY,
};
use maha_idea::route::Anchor;

use super::{Measured, RevealSlot, SiteApp};
use crate::ui;

/// Scroll geometry of the frame being drawn.
#[derive(Clone, Copy)]
struct ScrollFrame {
    /// Screen y of the document's top edge.
    origin: f32,
    scroll_y: f32,
    viewport: Viewport,
    now: Instant,
}

impl ScrollFrame {
    fn doc_y(&self, screen_y: f32) -> f32 {
        screen_y - self.origin
    }

    fn pick(&self, narrow: f32, wide: f32) -> f32 {
        if self.viewport.is_wide() {
            wide
        } else {
            narrow
        }
    }
}

/// Latch `slot` if its bounds from the last frame are visible enough.
fn observe(slot: &mut RevealSlot, spec: &RevealSpec, frame: &ScrollFrame) {
    if let Some(bounds) = slot.bounds {
        let ratio = visible_ratio(
            bounds.top,
            bounds.height,
            frame.scroll_y,
            frame.viewport.height,
            spec.bottom_margin,
        );
        if slot.tracker.observe(ratio, spec.threshold, frame.now) {
            log::debug!("Reveal at y={:.0} (ratio {:.2})", bounds.top, ratio);
        }
    }
}

fn remember(slot: &mut RevealSlot, rect: egui::Rect, frame: &ScrollFrame) {
    slot.bounds = Some(Measured {
        top: frame.doc_y(rect.top()),
        height: rect.height(),
    });
}

/// True while the last item of a revealed block is still fading.
fn is_animating(slot: &RevealSlot, spec: &RevealSpec, items: usize, now: Instant) -> bool {
    slot.tracker.revealed_at().is_some()
        && !slot
            .tracker
            .style(spec, items.saturating_sub(1), now)
            .is_settled()
}

/// Centre a column no wider than `max_width`, keeping `padding` on both sides.
fn column<R>(
    ui: &mut egui::Ui,
    max_width: f32,
    padding: f32,
    add_contents: impl FnOnce(&mut egui::Ui) -> R,
) -> R {
    let available = ui.available_width();
    let width = (available - padding * 2.0).clamp(0.0, max_width);
    let margin = ((available - width) * 0.5).max(0.0);
    ui.horizontal_top(|ui| {
        ui.add_space(margin);
        ui.vertical(|ui| {
            ui.set_width(width);
            add_contents(ui)
        })
        .inner
    })
    .inner
}

fn word_color(weight: WordWeight) -> Color32 {
    match weight {
        WordWeight::Light => Color32::from_black_alpha(150),
        WordWeight::Normal => Color32::from_black_alpha(204),
        WordWeight::Medium => Color32::from_black_alpha(240),
    }
}

impl SiteApp {
    pub fn draw_landing(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, now: Instant) {
        let mut area = egui::ScrollArea::vertical()
            .id_salt("landing")
            .auto_shrink([false, false]);

        if let Some(anchor) = self.pending_scroll {
            let target = match anchor {
                Anchor::Top => Some(0.0),
                Anchor::HumanBooks => self.human_books_top,
            };
            match target {
                Some(y) => {
                    area = area.vertical_scroll_offset(y);
                    self.pending_scroll = None;
                }
                // not measured yet; try again next frame
                None => ctx.request_repaint(),
            }
        }

        let mut animating = false;
        area.show(ui, |ui| {
            let clip = ui.clip_rect();
            let origin = ui.min_rect().top();
            let frame = ScrollFrame {
                origin,
                scroll_y: (clip.top() - origin).max(0.0),
                viewport: Viewport::new(clip.width(), clip.height()),
                now,
            };

            animating |= self.draw_hero(ui, ctx, &frame);

            let region_top = frame.doc_y(ui.cursor().top());
            self.draw_decorations(ui, ctx, &frame);
            self.draw_event_banner(ui, ctx, &frame);
            animating |= self.draw_studios(ui, &frame);
            animating |= self.draw_collaboration(ui, &frame);
            animating |= self.draw_human_books(ui, ctx, &frame);
            self.draw_word_cloud(ui, &frame);
            animating |= self.draw_works(ui, ctx, &frame);
            let region_bottom = frame.doc_y(ui.cursor().top());
            self.decor_region = Some(Measured {
                top: region_top,
                height: region_bottom - region_top,
            });

            animating |= self.draw_footer(ui, &frame);
        });

        if animating {
            ctx.request_repaint();
        }
    }

    // ── Hero ─────────────────────────────────────────────────────────────────

    fn draw_hero(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, frame: &ScrollFrame) -> bool {
        let hero = hero_frame(frame.scroll_y, frame.viewport);
        let full_width = ui.available_width();
        let (rect, _) = ui.allocate_exact_size(egui::vec2(full_width, hero.height), egui::Sense::hover());
        let media = egui::Rect::from_center_size(
            rect.center(),
            egui::vec2(hero.width.min(full_width), hero.height),
        );

        let poster_source = self.asset(HERO_POSTER);
        let poster = self.texture(ctx, &poster_source);
        let rounding = frame.pick(12.0, 16.0);
        ui::paint_cover(ui.painter(), media, poster.as_ref(), rounding, Color32::WHITE, None);

        let toggle = ui.interact(media, ui.id().with("hero_toggle"), egui::Sense::click());
        let hovered = toggle.hovered();
        let shade = if hovered { 51 } else { 26 };
        ui.painter().rect_filled(media, rounding, Color32::from_black_alpha(shade));
        if !self.hero_playing || hovered {
            let diameter = frame.pick(48.0, 80.0);
            let center = media.center();
            ui.painter().circle_filled(center, diameter * 0.5, Color32::from_white_alpha(230));
            ui.painter().text(
                center,
                egui::Align2::CENTER_CENTER,
                if self.hero_playing { "\u{23F8}" } else { "\u{25B6}" },
                egui::FontId::proportional(diameter * 0.4),
                Color32::BLACK,
            );
        }
        if toggle.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            self.hero_playing = !self.hero_playing;
            log::debug!("Hero playing: {}", self.hero_playing);
        }

        // Copy below the media
        let spec = RevealSpec::HERO_COPY;
        observe(&mut self.reveals.hero_copy, &spec, frame);
        let style = self.reveals.hero_copy.tracker.style(&spec, 0, frame.now);
        let size = frame.pick(20.0, 28.0);

        ui.add_space(frame.pick(48.0, 80.0));
        let response = column(ui, 896.0, frame.pick(16.0, 32.0), |ui| {
            ui::revealed(ui, style, |ui| {
                for (i, paragraph) in HERO_COPY.iter().enumerate() {
                    if i > 0 {
                        ui.add_space(frame.pick(16.0, 24.0));
                    }
                    ui.label(RichText::new(*paragraph).size(size).color(Color32::BLACK));
                }
            })
            .response
        });
        remember(&mut self.reveals.hero_copy, response.rect, frame);
        ui.add_space(frame.pick(48.0, 80.0));

        is_animating(&self.reveals.hero_copy, &spec, 1, frame.now)
    }

    // ── Floating decorations ─────────────────────────────────────────────────

    fn draw_decorations(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, frame: &ScrollFrame) {
        let Some(region) = self.decor_region else {
            return;
        };
        let left = ui.max_rect().left();
        let width = ui.available_width();
        let region_rect = egui::Rect::from_min_size(
            egui::pos2(left, frame.origin + region.top),
            egui::vec2(width, region.height),
        );
        let painter = ui.painter().with_clip_rect(region_rect.intersect(ui.clip_rect()));
        let pointer = ctx.pointer_hover_pos();
        let full_uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

        for decoration in DECORATIONS.iter() {
            let source = self.asset(&decoration_asset(decoration));
            let Some(texture) = self.texture(ctx, &source) else {
                continue;
            };
            let placement = decoration.place(width, region.height, frame.scroll_y, frame.viewport);
            let size = texture.size_vec2();
            let height = if size.x > 0.0 {
                placement.width * size.y / size.x
            } else {
                placement.width
            };
            let rect = egui::Rect::from_min_size(
                region_rect.min + egui::vec2(placement.x, placement.y),
                egui::vec2(placement.width, height),
            );
            let hovered = pointer.is_some_and(|p| rect.contains(p));
            let opacity = if hovered {
                DECORATION_HOVER_OPACITY
            } else {
                DECORATION_OPACITY
            };
            painter.image(texture.id(), rect, full_uv, Color32::WHITE.gamma_multiply(opacity));
        }
    }

    // ── Event map banner ─────────────────────────────────────────────────────

    fn draw_event_banner(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, frame: &ScrollFrame) {
        let height = frame.pick(300.0, 500.0);
        let (rect, response) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), height), egui::Sense::click());

        let map_source = self.asset(EVENT_MAP);
        let map = self.texture(ctx, &map_source);
        ui::paint_cover(ui.painter(), rect, map.as_ref(), 0.0, Color32::WHITE, Some("\u{1F5FA}"));

        // Info card, bottom left
        let inset = frame.pick(16.0, 32.0);
        let card_width = (rect.width() * 0.9).min(448.0);
        let card = egui::Rect::from_min_size(
            egui::pos2(rect.left() + inset, rect.bottom() - inset - 152.0),
            egui::vec2(card_width, 152.0),
        );
        let painter = ui.painter();
        painter.rect_filled(card, 16.0, Color32::from_white_alpha(242));

        let mut cursor = card.min + egui::vec2(24.0, 20.0);
        let badge = painter.layout_no_wrap(
            UPCOMING_EVENT.badge.to_string(),
            egui::FontId::proportional(12.0),
            ui::BRAND,
        );
        let badge_rect = egui::Rect::from_min_size(cursor, badge.size() + egui::vec2(32.0, 8.0));
        painter.rect_filled(badge_rect, 999.0, ui::brand_tint(0.1));
        painter.circle_filled(badge_rect.left_center() + egui::vec2(12.0, 0.0), 4.0, ui::BRAND);
        painter.galley(badge_rect.min + egui::vec2(22.0, 4.0), badge, ui::BRAND);
        cursor.y = badge_rect.bottom() + 8.0;

        let lines = [
            (UPCOMING_EVENT.name, 24.0, ui::BRAND),
            (UPCOMING_EVENT.dates, 18.0, ui::INK),
            (UPCOMING_EVENT.venue, 16.0, ui::MUTED),
        ];
        for (text, size, color) in lines {
            let drawn = painter.text(
                cursor,
                egui::Align2::LEFT_TOP,
                text,
                egui::FontId::proportional(size),
                color,
            );
            cursor.y = drawn.bottom() + 4.0;
        }

        if response.on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
            log::debug!("Open event map");
            self.map_open = true;
        }
    }

    // ── Studios ──────────────────────────────────────────────────────────────

    fn draw_studios(&mut self, ui: &mut egui::Ui, frame: &ScrollFrame) -> bool {
        let spec = RevealSpec::STUDIOS;
        observe(&mut self.reveals.studios, &spec, frame);
        let tracker = self.reveals.studios.tracker.clone();
        let gap = frame.pick(16.0, 24.0);

        ui.add_space(frame.pick(64.0, 96.0));
        let response = column(ui, 1152.0, frame.pick(24.0, 48.0), |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.spacing_mut().item_spacing = egui::vec2(gap, gap);
                for (i, studio) in STUDIOS.iter().enumerate() {
                    let style = tracker.style(&spec, i, frame.now);
                    ui.scope(|ui| {
                        ui.set_opacity(style.opacity);
                        if ui::pill_button(ui, studio.name, false).clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(studio.url));
                        }
                    });
                }
            })
            .response
        });
        remember(&mut self.reveals.studios, response.rect, frame);
        ui.add_space(frame.pick(64.0, 96.0));

        is_animating(&self.reveals.studios, &spec, STUDIOS.len(), frame.now)
    }

    // ── Collaboration ────────────────────────────────────────────────────────

    fn draw_collaboration(&mut self, ui: &mut egui::Ui, frame: &ScrollFrame) -> bool {
        let spec = RevealSpec::SECTION;
        observe(&mut self.reveals.collaboration, &spec, frame);
        let style = self.reveals.collaboration.tracker.style(&spec, 0, frame.now);
        let mut get_in_touch = false;

        ui.add_space(frame.pick(96.0, 128.0));
        let response = column(ui, 896.0, frame.pick(24.0, 48.0), |ui| {
            ui::revealed(ui, style, |ui| {
                ui::section_heading(ui, PARTNERS_HEADING);
                ui.add_space(32.0);
                ui.vertical_centered(|ui| {
                    for line in PARTNERS {
                        ui.label(
                            RichText::new(line.join(" \u{2022} "))
                                .size(frame.pick(16.0, 18.0))
                                .color(Color32::from_black_alpha(179)),
                        );
                    }
                    ui.add_space(48.0);
                    get_in_touch = ui::pill_button(ui, PARTNERS_CTA, false).clicked();
                });
            })
            .response
        });
        remember(&mut self.reveals.collaboration, response.rect, frame);
        ui.add_space(frame.pick(96.0, 128.0));

        if get_in_touch {
            self.contact_open = true;
        }
        is_animating(&self.reveals.collaboration, &spec, 1, frame.now)
    }

    // ── Human books entry ────────────────────────────────────────────────────

    fn draw_human_books(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, frame: &ScrollFrame) -> bool {
        self.human_books_top = Some(frame.doc_y(ui.cursor().top()));

        let spec = RevealSpec::SECTION;
        observe(&mut self.reveals.human_books, &spec, frame);
        let style = self.reveals.human_books.tracker.style(&spec, 0, frame.now);
        let mut open = false;

        ui.add_space(frame.pick(64.0, 96.0));
        let response = column(ui, 896.0, frame.pick(24.0, 48.0), |ui| {
            ui::revealed(ui, style, |ui| {
                ui::section_heading(ui, HUMAN_BOOKS_HEADING);
                ui.add_space(24.0);
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(HUMAN_BOOKS_BLURB)
                            .size(frame.pick(16.0, 18.0))
                            .color(Color32::from_black_alpha(153)),
                    );
                    ui.add_space(32.0);
                    open = ui::pill_button(ui, HUMAN_BOOKS_CTA, true).clicked();
                });
            })
            .response
        });
        remember(&mut self.reveals.human_books, response.rect, frame);
        ui.add_space(frame.pick(64.0, 96.0));

        if open {
            self.open_book_dialog(ctx);
        }
        is_animating(&self.reveals.human_books, &spec, 1, frame.now)
    }

    // ── Word cloud ───────────────────────────────────────────────────────────

    fn draw_word_cloud(&mut self, ui: &mut egui::Ui, frame: &ScrollFrame) {
        let progress = self.word_cloud.map(|section| {
            section_progress(frame.scroll_y, section.top, section.height, frame.viewport.height)
        });
        let section_top = ui.cursor().top();
        let min_height = frame.viewport.height * 0.8;
        let (gap_x, gap_y) = if frame.viewport.is_wide() {
            (24.0, 16.0)
        } else {
            (16.0, 12.0)
        };
        let padding_y = frame.pick(64.0, 96.0);
        let buckets = &self.word_buckets;

        ui.add_space(padding_y);
        column(ui, 1152.0, frame.pick(24.0, 48.0), |ui| {
            let width = ui.available_width();
            let painter = ui.painter().clone();
            let galleys: Vec<_> = WORDS
                .iter()
                .zip(buckets)
                .map(|(word, bucket)| {
                    painter.layout_no_wrap(
                        word.to_string(),
                        egui::FontId::proportional(bucket.size.points()),
                        word_color(bucket.weight),
                    )
                })
                .collect();

            // Flex-wrap rows, each centred
            let mut rows: Vec<(Vec<usize>, f32, f32)> = Vec::new();
            let mut current: (Vec<usize>, f32, f32) = (Vec::new(), 0.0, 0.0);
            for (i, galley) in galleys.iter().enumerate() {
                let size = galley.size();
                let needed = if current.0.is_empty() { size.x } else { current.1 + gap_x + size.x };
                if needed > width && !current.0.is_empty() {
                    rows.push(std::mem::take(&mut current));
                    current = (vec![i], size.x, size.y);
                } else {
                    current.0.push(i);
                    current.1 = needed;
                    current.2 = current.2.max(size.y);
                }
            }
            if !current.0.is_empty() {
                rows.push(current);
            }

            let content_height: f32 = rows.iter().map(|r| r.2).sum::<f32>()
                + gap_y * rows.len().saturating_sub(1) as f32;
            let block_height = content_height.max(min_height - padding_y * 2.0);
            let (rect, _) = ui.allocate_exact_size(egui::vec2(width, block_height), egui::Sense::hover());

            let mut y = rect.top() + (block_height - content_height) * 0.5;
            for (indices, row_width, row_height) in &rows {
                let mut x = rect.left() + (width - row_width) * 0.5;
                for &i in indices {
                    let galley = &galleys[i];
                    let style = match progress {
                        Some(p) => word_style(i, WORDS.len(), p),
                        None => WordStyle::RESTING,
                    };
                    let pos = egui::pos2(
                        x,
                        y + (row_height - galley.size().y) * 0.5 + style.translate_y,
                    );
                    let color = word_color(buckets[i].weight).gamma_multiply(style.opacity);
                    painter.galley_with_override_text_color(pos, galley.clone(), color);
                    x += galley.size().x + gap_x;
                }
                y += row_height + gap_y;
            }
        });
        ui.add_space(padding_y);

        self.word_cloud = Some(Measured {
            top: frame.doc_y(section_top),
            height: ui.cursor().top() - section_top,
        });
    }

    // ── Works ────────────────────────────────────────────────────────────────

    fn draw_works(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, frame: &ScrollFrame) -> bool {
        let spec = RevealSpec::WORKS;
        let columns = if frame.viewport.is_wide() { 2 } else { 1 };
        let gap = frame.pick(32.0, 48.0);
        let mut animating = false;

        for (i, slot) in self.reveals.works.iter_mut().enumerate() {
            observe(slot, &spec, frame);
            animating |= is_animating(slot, &spec, i + 1, frame.now);
        }

        let textures: Vec<Option<egui::TextureHandle>> = WORKS
            .iter()
            .map(|work| self.texture(ctx, &ImageSource::Remote(work.image.to_string())))
            .collect();

        ui.add_space(frame.pick(64.0, 96.0));
        let mut rects = Vec::with_capacity(WORKS.len());
        column(ui, 1152.0, frame.pick(24.0, 48.0), |ui| {
            let card_width = (ui.available_width() - gap * (columns - 1) as f32) / columns as f32;
            for row in (0..WORKS.len()).collect::<Vec<_>>().chunks(columns) {
                ui.horizontal_top(|ui| {
                    ui.spacing_mut().item_spacing.x = gap;
                    for &i in row {
                        let work = &WORKS[i];
                        let style = self.reveals.works[i].tracker.style(&spec, i, frame.now);
                        let inner = ui.vertical(|ui| {
                            ui.set_width(card_width);
                            ui::revealed(ui, style, |ui| {
                                let (image_rect, response) = ui.allocate_exact_size(
                                    egui::vec2(card_width, card_width * 3.0 / 4.0),
                                    egui::Sense::hover(),
                                );
                                ui::paint_cover(
                                    ui.painter(),
                                    image_rect,
                                    textures[i].as_ref(),
                                    8.0,
                                    Color32::WHITE,
                                    None,
                                );
                                if response.hovered() {
                                    ui.painter().rect_filled(image_rect, 8.0, Color32::from_black_alpha(26));
                                }
                                ui.add_space(16.0);
                                ui.label(RichText::new(work.title).size(frame.pick(18.0, 20.0)).color(Color32::BLACK));
                                ui.label(
                                    RichText::new(format!("by {}", work.studio))
                                        .size(14.0)
                                        .color(Color32::from_black_alpha(153)),
                                );
                            });
                        });
                        rects.push((i, inner.response.rect));
                    }
                });
                ui.add_space(gap);
            }
        });
        for (i, rect) in rects {
            remember(&mut self.reveals.works[i], rect, frame);
        }
        ui.add_space(frame.pick(32.0, 48.0));

        animating
    }

    // ── Footer ───────────────────────────────────────────────────────────────

    fn draw_footer(&mut self, ui: &mut egui::Ui, frame: &ScrollFrame) -> bool {
        let spec = RevealSpec::SECTION;
        observe(&mut self.reveals.footer, &spec, frame);
        let style = self.reveals.footer.tracker.style(&spec, 0, frame.now);
        let mut subscribe = false;
        let mut back_to_top = false;

        let line_y = ui.cursor().top();
        ui.painter().hline(ui.max_rect().x_range(), line_y, egui::Stroke::new(1.0, Color32::from_black_alpha(26)));

        ui.add_space(frame.pick(96.0, 128.0));
        let response = column(ui, 896.0, frame.pick(24.0, 48.0), |ui| {
            ui::revealed(ui, style, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new(FOOTER_HEADING).size(frame.pick(30.0, 44.0)).color(Color32::BLACK));
                    ui.add_space(24.0);
                    ui.label(RichText::new(FOOTER_TAGLINE).color(Color32::from_black_alpha(153)));
                    ui.add_space(40.0);
                    subscribe = ui::pill_button(ui, FOOTER_CTA, false).clicked();
                    ui.add_space(64.0);
                    ui.separator();
                    ui.add_space(32.0);
                    ui.horizontal(|ui| {
                        let muted = Color32::from_black_alpha(153);
                        ui.label(RichText::new(ui::copyright_line(ui::current_year())).size(14.0).color(muted));
                        ui.label(RichText::new("|").size(14.0).color(muted));
                        back_to_top = ui
                            .add(egui::Label::new(RichText::new("Back to top").size(14.0).color(muted)).sense(egui::Sense::click()))
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .clicked();
                        ui.label(RichText::new("|").size(14.0).color(muted));
                        ui.hyperlink_to(RichText::new("Facebook").size(14.0).color(muted), FACEBOOK_URL);
                    });
                });
            })
            .response
        });
        remember(&mut self.reveals.footer, response.rect, frame);
        ui.add_space(frame.pick(96.0, 128.0));

        if subscribe {
            self.updates_open = true;
        }
        if back_to_top {
            self.pending_scroll = Some(Anchor::Top);
        }
        is_animating(&self.reveals.footer, &spec, 1, frame.now)
    }
}
