pub mod components;
pub mod format;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use layouts::premium::{plain_layout, premium_layout};
