//! Image URLs and background image loading.
//!
//! Spreadsheet rows link pictures as Google Drive share pages, which do not
//! serve image bytes; [`normalize_image_url`] rewrites them to the direct
//! content host. [`ImageLoader`] then fetches remote pictures or reads
//! bundled assets on worker threads and decodes them into RGBA buffers
//! ready for egui textures.

use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

const DRIVE_HOST: &str = "drive.google.com";
const DIRECT_PREFIX: &str = "https://lh3.googleusercontent.com/d/";

/// Widest image kept after decoding; wider ones are scaled down.
pub const MAX_IMAGE_WIDTH: u32 = 1200;

/// Rewrite a Drive share link to a direct image URL.
///
/// The id is the first `id=` followed by a non-empty run of non-`&`
/// characters. Non-Drive URLs and Drive URLs without an id pass through.
pub fn normalize_image_url(url: &str) -> String {
    if url.is_empty() || !url.contains(DRIVE_HOST) {
        return url.to_string();
    }
    for (pos, _) in url.match_indices("id=") {
        let rest = &url[pos + 3..];
        let id = rest.split('&').next().unwrap_or_default();
        if !id.is_empty() {
            return format!("{DIRECT_PREFIX}{id}");
        }
    }
    url.to_string()
}

/// Decoded image data (RGBA).
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub rgba: Vec<u8>,
}

/// Where an image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImageSource {
    Remote(String),
    /// Bundled file under the asset directory.
    Asset(PathBuf),
}

impl ImageSource {
    /// Cache key, also used as the egui texture name.
    pub fn key(&self) -> String {
        match self {
            ImageSource::Remote(url) => url.clone(),
            ImageSource::Asset(path) => format!("asset://{}", path.display()),
        }
    }
}

/// Manages background image fetching and decoding.
pub struct ImageLoader {
    client: Option<reqwest::blocking::Client>,
    pending: HashMap<String, mpsc::Receiver<Option<ImageData>>>,
    loaded: HashMap<String, ImageData>,
    /// Keys whose pixels were taken by the caller.
    delivered: HashSet<String>,
    failed: HashSet<String>,
}

impl Default for ImageLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageLoader {
    pub fn new() -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(20))
            .build()
            .map_err(|e| log::warn!("Image client unavailable: {}", e))
            .ok();
        Self {
            client,
            pending: HashMap::new(),
            loaded: HashMap::new(),
            delivered: HashSet::new(),
            failed: HashSet::new(),
        }
    }

    /// Queue a load unless the source is loaded, in flight or known bad.
    /// `notify` runs on the worker once the result is queued.
    pub fn request<N>(&mut self, source: &ImageSource, notify: N)
    where
        N: FnOnce() + Send + 'static,
    {
        let key = source.key();
        if self.loaded.contains_key(&key)
            || self.delivered.contains(&key)
            || self.pending.contains_key(&key)
            || self.failed.contains(&key)
        {
            return;
        }

        let (tx, rx) = mpsc::channel();
        let source = source.clone();
        let client = self.client.clone();

        std::thread::spawn(move || {
            let bytes = match &source {
                ImageSource::Remote(url) => client.and_then(|c| download(&c, url)),
                ImageSource::Asset(path) => std::fs::read(path)
                    .map_err(|e| log::warn!("Asset {} unreadable: {}", path.display(), e))
                    .ok(),
            };
            let _ = tx.send(bytes.and_then(|b| decode(&b)));
            notify();
        });

        self.pending.insert(key, rx);
    }

    /// Poll for completed loads. Call every frame; returns the keys that
    /// finished successfully since the last poll.
    pub fn poll(&mut self) -> Vec<String> {
        let mut completed = Vec::new();
        let mut fresh = Vec::new();
        for (key, rx) in &self.pending {
            match rx.try_recv() {
                Ok(Some(data)) => {
                    self.loaded.insert(key.clone(), data);
                    fresh.push(key.clone());
                    completed.push(key.clone());
                }
                Ok(None) | Err(mpsc::TryRecvError::Disconnected) => {
                    log::debug!("Image failed: {}", key);
                    self.failed.insert(key.clone());
                    completed.push(key.clone());
                }
                Err(mpsc::TryRecvError::Empty) => {}
            }
        }
        for key in completed {
            self.pending.remove(&key);
        }
        fresh
    }

    pub fn get(&self, key: &str) -> Option<&ImageData> {
        self.loaded.get(key)
    }

    /// Hand the pixels over, e.g. once uploaded as a texture. The key stays
    /// known so it is not fetched again.
    pub fn take(&mut self, key: &str) -> Option<ImageData> {
        let data = self.loaded.remove(key)?;
        self.delivered.insert(key.to_string());
        Some(data)
    }

    pub fn is_failed(&self, key: &str) -> bool {
        self.failed.contains(key)
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    /// Number of images still being fetched.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

fn download(client: &reqwest::blocking::Client, url: &str) -> Option<Vec<u8>> {
    let resp = client
        .get(url)
        .send()
        .map_err(|e| log::warn!("Image fetch {} failed: {}", url, e))
        .ok()?;

    if !resp.status().is_success() {
        log::warn!("Image fetch {} answered {}", url, resp.status());
        return None;
    }

    resp.bytes().ok().map(|b| b.to_vec())
}

fn decode(bytes: &[u8]) -> Option<ImageData> {
    let img = image::load_from_memory(bytes)
        .map_err(|e| log::warn!("Image decode failed: {}", e))
        .ok()?;
    let rgba = img.to_rgba8();
    let (w, h) = rgba.dimensions();

    let (w, h, pixels) = if w > MAX_IMAGE_WIDTH {
        let ratio = MAX_IMAGE_WIDTH as f32 / w as f32;
        let new_h = ((h as f32 * ratio) as u32).max(1);
        let resized = image::imageops::resize(
            &rgba,
            MAX_IMAGE_WIDTH,
            new_h,
            image::imageops::FilterType::Triangle,
        );
        let (rw, rh) = resized.dimensions();
        (rw, rh, resized.into_raw())
    } else {
        (w, h, rgba.into_raw())
    };

    Some(ImageData {
        width: w,
        height: h,
        rgba: pixels,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn drive_links_become_direct() {
        assert_eq!(
            normalize_image_url("https://drive.google.com/open?id=ABC123&other=1"),
            "https://lh3.googleusercontent.com/d/ABC123"
        );
        assert_eq!(
            normalize_image_url("https://drive.google.com/uc?export=view&id=XYZ"),
            "https://lh3.googleusercontent.com/d/XYZ"
        );
    }

    #[test]
    fn empty_id_is_skipped_for_a_later_one() {
        assert_eq!(
            normalize_image_url("https://drive.google.com/open?id=&id=REAL"),
            "https://lh3.googleusercontent.com/d/REAL"
        );
    }

    #[test]
    fn other_urls_pass_through() {
        assert_eq!(normalize_image_url(""), "");
        assert_eq!(
            normalize_image_url("https://example.com/pic.jpg?id=1"),
            "https://example.com/pic.jpg?id=1"
        );
        let no_id = "https://drive.google.com/file/d/ABC/view";
        assert_eq!(normalize_image_url(no_id), no_id);
    }

    #[test]
    fn source_keys_differ_by_kind() {
        let remote = ImageSource::Remote("x.png".into());
        let asset = ImageSource::Asset(PathBuf::from("x.png"));
        assert_ne!(remote.key(), asset.key());
    }

    #[test]
    fn loader_deduplicates() {
        let mut loader = ImageLoader::new();
        let source = ImageSource::Remote("http://127.0.0.1:9/img.png".into());
        loader.request(&source, || {});
        loader.request(&source, || {});
        assert_eq!(loader.pending_count(), 1);
    }

    #[test]
    fn missing_asset_fails_once() {
        let mut loader = ImageLoader::new();
        let source = ImageSource::Asset(PathBuf::from("/nonexistent/maha-idea/none.png"));
        let key = source.key();
        loader.request(&source, || {});

        let deadline = Instant::now() + Duration::from_secs(5);
        while loader.is_pending(&key) {
            assert!(Instant::now() < deadline);
            loader.poll();
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(loader.is_failed(&key));
        loader.request(&source, || {});
        assert!(!loader.is_pending(&key));
    }

    #[test]
    fn wide_images_are_downscaled() {
        let img = image::RgbaImage::from_pixel(2400, 600, image::Rgba([83, 1, 187, 255]));
        let mut bytes = std::io::Cursor::new(Vec::new());
        img.write_to(&mut bytes, image::ImageFormat::Png).unwrap();

        let data = decode(bytes.get_ref()).unwrap();
        assert_eq!(data.width, MAX_IMAGE_WIDTH);
        assert_eq!(data.height, 300);
        assert_eq!(data.rgba.len(), (MAX_IMAGE_WIDTH * 300 * 4) as usize);
    }
}
