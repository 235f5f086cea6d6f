//! Navigation methods for `SiteApp`.
//!
//! Covers history management (`go_back`, `go_forward`, `navigate`), what
//! happens on entering a route, and the record loader lifecycle for the
//! dialog and the full page.

use std::time::Instant;

use maha_idea::route::{Anchor, Route};

use super::SiteApp;

impl SiteApp {
    /// Navigate one step back in history.
    pub fn go_back(&mut self, ctx: &egui::Context) {
        if self.history_idx > 0 {
            self.history_idx -= 1;
            let route = self.history[self.history_idx].clone();
            self.navigate_no_history(ctx, route);
        }
    }

    /// Navigate one step forward in history.
    pub fn go_forward(&mut self, ctx: &egui::Context) {
        if self.history_idx + 1 < self.history.len() {
            self.history_idx += 1;
            let route = self.history[self.history_idx].clone();
            self.navigate_no_history(ctx, route);
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.history_idx > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.history_idx + 1 < self.history.len()
    }

    /// Push `route` to history and enter it.
    pub fn navigate(&mut self, ctx: &egui::Context, route: Route) {
        if self.history.get(self.history_idx) != Some(&route) {
            // Truncate forward history before pushing
            self.history.truncate(self.history_idx + 1);
            self.history.push(route.clone());
            self.history_idx = self.history.len() - 1;
        }
        self.navigate_no_history(ctx, route);
    }

    /// Parse a typed path and navigate to it.
    pub fn navigate_to_path(&mut self, ctx: &egui::Context, path: &str) {
        match Route::parse(path) {
            Ok(route) => {
                self.path_error = None;
                self.navigate(ctx, route);
            }
            Err(e) => {
                log::warn!("{}", e);
                self.path_error = Some(e.to_string());
            }
        }
    }

    fn navigate_no_history(&mut self, ctx: &egui::Context, route: Route) {
        log::info!("Route {}", route.path());
        self.route = route;
        self.path_input = self.route.path();
        self.enter_route(ctx);
    }

    /// Side effects of arriving on the current route.
    pub fn enter_route(&mut self, ctx: &egui::Context) {
        self.route_entered = true;
        match &self.route {
            Route::Landing { anchor } => {
                self.pending_scroll = *anchor;
            }
            Route::HumanBook { .. } => {
                // the full page always refetches and starts at the top
                self.page_scroll_reset = true;
                self.start_page_fetch(ctx);
            }
        }
    }

    /// Brand and Contact buttons: scroll the landing page, navigating home
    /// first when on another route.
    pub fn go_home(&mut self, ctx: &egui::Context, anchor: Anchor) {
        match self.route {
            Route::Landing { .. } => {
                log::debug!("Scroll to {:?}", anchor);
                self.pending_scroll = Some(anchor);
            }
            Route::HumanBook { .. } => self.navigate(ctx, Route::landing_at(anchor)),
        }
    }

    /// Open `/human-book/<index>` for a card of the current list.
    pub fn open_book_page(&mut self, ctx: &egui::Context, index: usize) {
        self.navigate(ctx, Route::human_book(index));
    }

    // ── Human book dialog ────────────────────────────────────────────────────

    pub fn open_book_dialog(&mut self, ctx: &egui::Context) {
        if self.books.open() {
            self.start_dialog_fetch(ctx);
        }
    }

    pub fn close_book_dialog(&mut self, now: Instant) {
        self.books.close(now);
    }

    pub fn start_dialog_fetch(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.dialog_loader.start(move || ctx.request_repaint());
    }

    pub fn start_page_fetch(&mut self, ctx: &egui::Context) {
        let ctx = ctx.clone();
        self.page_loader.start(move || ctx.request_repaint());
    }

    /// Apply any finished record fetches.
    pub fn check_loaders(&mut self) {
        self.dialog_loader.poll();
        self.page_loader.poll();
    }
}
