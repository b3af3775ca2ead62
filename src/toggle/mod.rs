//! Theme preference controller.
//!
//! This module provides:
//!
//! - [`ThemeToggle`]: flips, sets and initializes the active theme
//! - [`ThemePreference`] / [`ColorMode`]: chosen preference and concrete mode
//! - [`PreferenceStore`], [`PresentationRoot`], [`SystemPreference`]: the
//!   host collaborators, with in-memory, file and OS-backed implementations
//! - [`Host`] and [`create_theme_toggle`]: construction that yields `None`
//!   outside a browser-like environment

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
mod browser;
mod config;
mod controller;
mod host;
mod preference;
mod root;
mod signal;
mod store;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
pub use browser::{BrowserHost, DocumentRoot, LocalStorage, MatchMedia};
pub use config::{ToggleConfig, DEFAULT_DARK_CLASS, DEFAULT_MEDIA_QUERY, DEFAULT_STORAGE_KEY};
pub use controller::ThemeToggle;
pub use host::{create_theme_toggle, create_theme_toggle_with, Attached, Host, ServerHost};
pub use preference::{ColorMode, ThemePreference};
pub use root::{ClassList, PresentationRoot};
pub use signal::{
    detect_color_mode, reset_system_detector, set_system_detector, FixedPreference, OsPreference,
    SystemPreference,
};
pub use store::{FileStore, MemoryStore, PreferenceStore};
