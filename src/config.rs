//! Site configuration.
//!
//! Everything has a compiled-in default; callers override through the
//! `with_*` builders.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Apps Script bridge that serves the human book sheet as JSON.
pub const RECORDS_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbz1woByK6eWQJcGU2hwv2rclcTl8pS57zUrwkwUzD6v-PRk3GZE-KiAF4vFwQhgo24cyw/exec";

#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Where the human book records are fetched from.
    pub endpoint: String,
    pub request_timeout: Duration,
    pub user_agent: String,
    /// Root for decoration images, the hero poster and the event map.
    pub asset_dir: PathBuf,
    pub window_size: [f32; 2],
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            endpoint: RECORDS_ENDPOINT.to_string(),
            request_timeout: Duration::from_secs(15),
            user_agent: concat!("maha-idea/", env!("CARGO_PKG_VERSION")).to_string(),
            asset_dir: PathBuf::from("assets"),
            window_size: [1280.0, 860.0],
        }
    }
}

impl SiteConfig {
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_asset_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.asset_dir = dir.into();
        self
    }

    /// Resolve an asset path relative to the asset directory.
    pub fn asset_path(&self, relative: impl AsRef<Path>) -> PathBuf {
        self.asset_dir.join(relative)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_sheet_bridge() {
        let config = SiteConfig::default();
        assert_eq!(config.endpoint, RECORDS_ENDPOINT);
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert!(config.user_agent.starts_with("maha-idea/"));
    }

    #[test]
    fn builders_override() {
        let config = SiteConfig::default()
            .with_endpoint("http://127.0.0.1:9/records")
            .with_timeout(Duration::from_millis(250))
            .with_asset_dir("/srv/site");
        assert_eq!(config.endpoint, "http://127.0.0.1:9/records");
        assert_eq!(config.request_timeout, Duration::from_millis(250));
        assert_eq!(
            config.asset_path("png/Artboard1.png"),
            PathBuf::from("/srv/site/png/Artboard1.png")
        );
    }
}
