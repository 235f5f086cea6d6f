//! `SiteApp`: the top-level egui application state.
//!
//! This module declares the `SiteApp` struct, its constructor and the
//! per-frame `update`. Drawing and behaviour are split across the sibling
//! sub-modules:
//!
//! - `navigation`: routes, history, record loaders
//! - `header`: brand, history buttons, path bar, Contact
//! - `landing`: the scrolling landing page
//! - `books`: human book dialog and full page
//! - `dialogs`: contact, newsletter and map modals

pub mod books;
pub mod dialogs;
pub mod header;
pub mod landing;
pub mod navigation;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use maha_idea::book::BookBrowser;
use maha_idea::config::SiteConfig;
use maha_idea::content::WORDS;
use maha_idea::forms::{ContactForm, FormDialog, FormEvent, SubscribeForm};
use maha_idea::net::fetch::{HttpRecordSource, RecordSource, UnavailableSource};
use maha_idea::net::image::{ImageLoader, ImageSource};
use maha_idea::net::loader::RecordLoader;
use maha_idea::render::animator::{assign_buckets, RevealTracker, WordBucket};
use maha_idea::route::{Anchor, Route};

use crate::ui;

/// Document-space extent of a block, measured on the frame it was drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Measured {
    pub top: f32,
    pub height: f32,
}

/// A block that fades in the first time it scrolls into view.
#[derive(Debug, Clone, Default)]
pub struct RevealSlot {
    pub tracker: RevealTracker,
    pub bounds: Option<Measured>,
}

#[derive(Debug, Default)]
pub struct Reveals {
    pub hero_copy: RevealSlot,
    pub studios: RevealSlot,
    pub collaboration: RevealSlot,
    pub human_books: RevealSlot,
    /// One per work card; each is observed on its own.
    pub works: [RevealSlot; 4],
    pub footer: RevealSlot,
}

pub struct SiteApp {
    pub config: SiteConfig,
    // Routing
    pub route: Route,
    pub history: Vec<Route>,
    pub history_idx: usize,
    pub route_entered: bool,
    pub path_input: String,
    pub path_error: Option<String>,
    // Landing page
    pub pending_scroll: Option<Anchor>,
    pub word_buckets: Vec<WordBucket>,
    pub word_cloud: Option<Measured>,
    pub human_books_top: Option<f32>,
    /// Area the floating decorations are scattered over.
    pub decor_region: Option<Measured>,
    pub reveals: Reveals,
    pub hero_playing: bool,
    pub map_open: bool,
    // Human books
    pub books: BookBrowser,
    pub dialog_loader: RecordLoader,
    pub page_loader: RecordLoader,
    pub page_scroll_reset: bool,
    // Forms
    pub contact: FormDialog<ContactForm>,
    pub contact_open: bool,
    pub updates: FormDialog<SubscribeForm>,
    pub updates_open: bool,
    // Images
    pub image_loader: ImageLoader,
    pub textures: HashMap<String, egui::TextureHandle>,
}

impl SiteApp {
    pub fn new(config: SiteConfig, initial: Route) -> Self {
        let source: Arc<dyn RecordSource> = match HttpRecordSource::new(&config) {
            Ok(source) => Arc::new(source),
            Err(e) => {
                log::error!("Record source disabled: {}", e);
                Arc::new(UnavailableSource::new(e.to_string()))
            }
        };
        Self {
            route: initial.clone(),
            history: vec![initial.clone()],
            history_idx: 0,
            route_entered: false,
            path_input: initial.path(),
            path_error: None,
            pending_scroll: None,
            word_buckets: assign_buckets(WORDS.len(), &mut rand::rng()),
            word_cloud: None,
            human_books_top: None,
            decor_region: None,
            reveals: Reveals::default(),
            hero_playing: true,
            map_open: false,
            books: BookBrowser::new(),
            dialog_loader: RecordLoader::new(Arc::clone(&source)),
            page_loader: RecordLoader::new(source),
            page_scroll_reset: false,
            contact: FormDialog::new(),
            contact_open: false,
            updates: FormDialog::new(),
            updates_open: false,
            image_loader: ImageLoader::new(),
            textures: HashMap::new(),
            config,
        }
    }

    /// Image source for a file under the asset directory.
    pub fn asset(&self, relative: &str) -> ImageSource {
        ImageSource::Asset(self.config.asset_path(relative))
    }

    /// Texture for `source`, queueing the load on first use.
    pub fn texture(&mut self, ctx: &egui::Context, source: &ImageSource) -> Option<egui::TextureHandle> {
        let key = source.key();
        if let Some(texture) = self.textures.get(&key) {
            return Some(texture.clone());
        }
        let ctx = ctx.clone();
        self.image_loader.request(source, move || ctx.request_repaint());
        None
    }

    /// Upload every image that finished decoding since the last frame.
    fn upload_images(&mut self, ctx: &egui::Context) {
        for key in self.image_loader.poll() {
            if let Some(data) = self.image_loader.take(&key) {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [data.width as usize, data.height as usize],
                    &data.rgba,
                );
                let texture = ctx.load_texture(format!("img_{}", key), image, egui::TextureOptions::LINEAR);
                self.textures.insert(key, texture);
            }
        }
    }

    /// Advance the delayed clears and the simulated form deliveries.
    fn tick_timers(&mut self, ctx: &egui::Context, now: Instant) {
        self.books.tick(now);
        if self.contact.tick(now) == FormEvent::Closed {
            self.contact_open = false;
        }
        if self.updates.tick(now) == FormEvent::Closed {
            self.updates_open = false;
        }

        let deadlines = [
            self.books.pending_clear(),
            self.contact.next_deadline(),
            self.updates.next_deadline(),
        ];
        if let Some(next) = deadlines.into_iter().flatten().min() {
            ctx.request_repaint_after(next.saturating_duration_since(now));
        }
    }
}

impl eframe::App for SiteApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        if !self.route_entered {
            self.enter_route(ctx);
        }
        self.check_loaders();
        self.upload_images(ctx);
        self.tick_timers(ctx, now);

        ctx.set_visuals(egui::Visuals::light());

        egui::TopBottomPanel::top("header")
            .frame(egui::Frame::none().fill(ui::PAGE_BG).inner_margin(egui::Margin::symmetric(24.0, 14.0)))
            .show(ctx, |ui| {
                self.draw_header(ui, ctx);
            });

        let ctx_clone = ctx.clone();
        let route = self.route.clone();
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(ui::PAGE_BG))
            .show(ctx, |ui| match &route {
                Route::Landing { .. } => self.draw_landing(ui, &ctx_clone, now),
                Route::HumanBook { id } => self.draw_book_page(ui, &ctx_clone, id),
            });

        self.draw_book_dialog(ctx, now);
        self.draw_contact_dialog(ctx);
        self.draw_updates_dialog(ctx);
        self.draw_map_modal(ctx);
    }
}
