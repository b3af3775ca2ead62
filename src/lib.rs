//! # tailwind-config-utils - Tailwind CSS v4 plugins and theme toggling
//!
//! Common building blocks for Tailwind v4 projects that core leaves out:
//!
//! - **Theme tokens**: semantic colors, fluid typography, spacing, radii and
//!   shadows as ordered static maps, rendered into one `@theme` block
//! - **Dark mode**: toggle, transition, system-following and flash-prevention
//!   utilities plus a paired light/dark palette
//! - **Breakpoints**: extra breakpoints, container queries, print, reduced
//!   motion, high contrast, aspect ratios and safe-area insets
//! - **Utilities**: gradients, animations with keyframes, masks, glass and glow
//! - **Theme toggle**: a controller that persists a light/dark/system choice
//!   and keeps the `dark` class on the document root in sync
//!
//! Everything CSS is static text handed verbatim to the build tool.
//!
//! ## Quick Start
//!
//! ```rust
//! use tailwind_config_utils::{all_plugins, theme_plugin};
//!
//! let theme = theme_plugin().unwrap();
//! assert!(theme.contains("--color-primary: #3b82f6;"));
//!
//! let bundle = all_plugins().unwrap();
//! assert!(bundle.contains("@keyframes fadeIn"));
//! ```
//!
//! ## Theme toggle
//!
//! ```rust
//! use tailwind_config_utils::{
//!     create_theme_toggle, Attached, ClassList, FixedPreference, MemoryStore, ServerHost,
//!     ThemePreference,
//! };
//!
//! // No document during server-side rendering.
//! assert!(create_theme_toggle(ServerHost).is_none());
//!
//! let host = Attached::new(MemoryStore::new(), ClassList::new(), FixedPreference(false));
//! let mut toggle = create_theme_toggle(host).unwrap();
//! toggle.init_theme();
//! toggle.set_theme(ThemePreference::Dark);
//! assert!(toggle.is_dark());
//! ```
//!
//! In the browser, enable the `browser` feature and pass `BrowserHost`.

pub mod breakpoints;
pub mod dark_mode;
mod error;
pub mod render;
pub mod theme;
pub mod toggle;
pub mod utilities;

pub use breakpoints::breakpoints_plugin;
pub use dark_mode::dark_mode_plugin;
pub use error::Error;
pub use render::{all_plugins, Plugin, PluginRenderer};
pub use theme::{theme_plugin, token_group, token_groups, Token, TokenGroup};
pub use toggle::*;
pub use utilities::utilities_plugin;
