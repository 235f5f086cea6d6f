//! Scroll-driven presentation math for the landing page.

pub mod animator;
