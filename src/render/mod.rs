//! Plugin rendering.
//!
//! - [`Plugin`]: identifies one of the CSS bundles
//! - [`PluginRenderer`]: MiniJinja environment that renders them
//!
//! The free functions ([`theme_plugin`](crate::theme_plugin),
//! [`all_plugins`](crate::all_plugins), ...) share one lazily built renderer.

mod plugin;
mod renderer;

use once_cell::sync::Lazy;

pub use plugin::Plugin;
pub use renderer::PluginRenderer;

use crate::error::Error;

static RENDERER: Lazy<PluginRenderer> = Lazy::new(PluginRenderer::new);

/// Renders one plugin with the shared renderer.
pub fn render(plugin: Plugin) -> Result<String, Error> {
    RENDERER.render(plugin)
}

/// Renders every plugin, in [`Plugin::ALL`] order.
pub fn all_plugins() -> Result<String, Error> {
    RENDERER.render_all()
}
