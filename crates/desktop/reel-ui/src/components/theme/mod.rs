//! Theme configuration for the player overlay.
//!
//! Components read colors through [`ThemeExt`]; hosts install a theme once
//! with [`ThemeProvider::init`] or [`ThemeProvider::init_with_theme`].

mod theme_config;
mod theme_provider;

pub use theme_config::ThemeConfig;
pub use theme_provider::{ThemeExt, ThemeProvider};
