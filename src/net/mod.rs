//! Networking: the record fetch, its background loader and image loading.

pub mod fetch;
pub mod image;
pub mod loader;
