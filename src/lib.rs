pub mod book;
pub mod config;
pub mod content;
pub mod forms;
pub mod net;
pub mod record;
pub mod render;
pub mod route;

pub use config::SiteConfig;
pub use net::fetch::{FetchError, HttpRecordSource, RecordSource};
pub use net::image::normalize_image_url;
pub use record::{resolve_field, Record};
