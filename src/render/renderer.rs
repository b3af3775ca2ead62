//! Plugin renderer backed by a MiniJinja environment.

use minijinja::{context, AutoEscape, Environment, Value};

use super::plugin::Plugin;
use crate::error::Error;
use crate::theme::token_groups;
use crate::{breakpoints, dark_mode, utilities};

/// A renderer with every plugin template registered.
///
/// Templates are loaded and compiled on first use, then cached by the
/// environment. All fragments and token groups are exposed to templates as
/// context variables, so [`render_str`](Self::render_str) can compose a custom
/// bundle from the same pieces.
///
/// # Example
///
/// ```rust
/// use tailwind_config_utils::{Plugin, PluginRenderer};
///
/// let renderer = PluginRenderer::new();
/// let css = renderer.render(Plugin::Breakpoints).unwrap();
/// assert!(css.contains("--breakpoint-3xl"));
///
/// let custom = renderer.render_str("{{ glass_morphism }}{{ glow_utilities }}").unwrap();
/// assert!(custom.contains("glass-dark"));
/// ```
pub struct PluginRenderer {
    env: Environment<'static>,
    context: Value,
}

impl PluginRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        // CSS is emitted verbatim; never HTML-escape quotes or ampersands.
        env.set_auto_escape_callback(|_| AutoEscape::None);
        env.set_loader(|name| Ok(Plugin::from_name(name).map(|p| p.template().to_string())));
        Self {
            env,
            context: fragment_context(),
        }
    }

    /// Renders one plugin.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the plugin template fails to compile or render.
    pub fn render(&self, plugin: Plugin) -> Result<String, Error> {
        let template = self.env.get_template(plugin.name())?;
        Ok(template.render(&self.context)?)
    }

    /// Renders every plugin in [`Plugin::ALL`] order, separated by a blank line.
    pub fn render_all(&self) -> Result<String, Error> {
        let mut parts = Vec::with_capacity(Plugin::ALL.len());
        for plugin in Plugin::ALL {
            parts.push(self.render(plugin)?);
        }
        Ok(parts.join("\n\n"))
    }

    /// Renders an ad-hoc template against the fragment context.
    ///
    /// Variables available: `groups` plus one variable per CSS fragment,
    /// named after the fragment constant in lower case (`dark_toggle`,
    /// `keyframes`, `safe_area_insets`, ...).
    pub fn render_str(&self, source: &str) -> Result<String, Error> {
        Ok(self.env.render_str(source, &self.context)?)
    }
}

impl Default for PluginRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn fragment_context() -> Value {
    context! {
        groups => token_groups(),
        dark_toggle => dark_mode::DARK_TOGGLE,
        dark_transition => dark_mode::DARK_TRANSITION,
        dark_system => dark_mode::DARK_SYSTEM,
        dark_persistence => dark_mode::DARK_PERSISTENCE,
        dark_mode_colors => dark_mode::DARK_MODE_COLORS,
        color_scheme_transition => dark_mode::COLOR_SCHEME_TRANSITION,
        flash_prevention => dark_mode::FLASH_PREVENTION,
        fade_in_dark => dark_mode::FADE_IN_DARK,
        custom_breakpoints => breakpoints::CUSTOM_BREAKPOINTS,
        container_queries => breakpoints::CONTAINER_QUERIES,
        print_utilities => breakpoints::PRINT_UTILITIES,
        reduced_motion => breakpoints::REDUCED_MOTION,
        high_contrast => breakpoints::HIGH_CONTRAST,
        aspect_ratios => breakpoints::ASPECT_RATIOS,
        safe_area_insets => breakpoints::SAFE_AREA_INSETS,
        gradient_utilities => utilities::GRADIENT_UTILITIES,
        animation_utilities => utilities::ANIMATION_UTILITIES,
        keyframes => utilities::KEYFRAMES,
        mask_utilities => utilities::MASK_UTILITIES,
        glass_morphism => utilities::GLASS_MORPHISM,
        glow_utilities => utilities::GLOW_UTILITIES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_block_layout() {
        let css = PluginRenderer::new().render(Plugin::Theme).unwrap();
        assert!(css.starts_with("@theme {\n  --color-surface: #ffffff;\n"));
        assert!(css.ends_with("--shadow-xl: 0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1);\n}"));
        // Groups are separated by exactly one blank line.
        assert!(css.contains("--color-border-strong: #94a3b8;\n\n  --font-size-xs:"));
        assert_eq!(css.matches("\n\n").count(), 4);
    }

    #[test]
    fn test_theme_has_no_keyframes() {
        let css = PluginRenderer::new().render(Plugin::Theme).unwrap();
        assert!(!css.contains("@keyframes"));
    }

    #[test]
    fn test_no_html_escaping() {
        let css = PluginRenderer::new().render(Plugin::Utilities).unwrap();
        assert!(css.contains("content: \"\";"));
        assert!(!css.contains("&quot;"));
        assert!(!css.contains("&amp;"));
    }

    #[test]
    fn test_dark_mode_order() {
        let css = PluginRenderer::new().render(Plugin::DarkMode).unwrap();
        let colors = css.find("--color-dark-bg").unwrap();
        let transition = css.find("color-scheme-transition").unwrap();
        let fade = css.find("@keyframes fadeInDark").unwrap();
        assert!(colors < transition && transition < fade);
    }

    #[test]
    fn test_render_all_contains_every_plugin() {
        let renderer = PluginRenderer::new();
        let all = renderer.render_all().unwrap();
        for plugin in Plugin::ALL {
            assert!(all.contains(&renderer.render(plugin).unwrap()));
        }
    }

    #[test]
    fn test_render_str_fragments() {
        let css = PluginRenderer::new()
            .render_str("{% for g in groups %}{{ g.name }};{% endfor %}")
            .unwrap();
        assert_eq!(
            css,
            "semantic-colors;fluid-typography;spacing;border-radius;shadows;"
        );
    }

    #[test]
    fn test_render_str_syntax_error() {
        let err = PluginRenderer::new().render_str("{% for %}").unwrap_err();
        assert!(matches!(err, Error::Render(_)));
    }
}
