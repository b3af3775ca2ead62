//! Plugin identifiers and their templates.

use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// One of the CSS bundles this crate produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Plugin {
    /// Design tokens as a single `@theme` block.
    Theme,
    /// Dark palette, color-scheme transition and fade keyframes.
    DarkMode,
    /// Breakpoints, container queries and media-feature utilities.
    Breakpoints,
    /// Gradients, animations, masks, glass and glow.
    Utilities,
}

impl Plugin {
    /// Every plugin, in the order [`all_plugins`](crate::all_plugins) emits them.
    pub const ALL: [Plugin; 4] = [
        Plugin::Theme,
        Plugin::DarkMode,
        Plugin::Breakpoints,
        Plugin::Utilities,
    ];

    /// Stable kebab-case name, also used as the template name.
    pub fn name(self) -> &'static str {
        match self {
            Plugin::Theme => "theme",
            Plugin::DarkMode => "dark-mode",
            Plugin::Breakpoints => "breakpoints",
            Plugin::Utilities => "utilities",
        }
    }

    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Plugin::ALL.into_iter().find(|p| p.name() == name)
    }

    pub(crate) fn template(self) -> &'static str {
        match self {
            Plugin::Theme => THEME_TEMPLATE,
            Plugin::DarkMode => DARK_MODE_TEMPLATE,
            Plugin::Breakpoints => BREAKPOINTS_TEMPLATE,
            Plugin::Utilities => UTILITIES_TEMPLATE,
        }
    }
}

impl fmt::Display for Plugin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Plugin {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plugin::from_name(s.trim()).ok_or_else(|| Error::UnknownPlugin(s.to_string()))
    }
}

// Groups are separated by a blank line; tokens keep insertion order.
const THEME_TEMPLATE: &str = "@theme {
{%- for group in groups %}
{%- if not loop.first %}
{% endif %}
{%- for token in group.tokens %}
  {{ token.name }}: {{ token.value }};
{%- endfor %}
{%- endfor %}
}
";

// Fragments end in a newline, so a single separator yields a blank line.
const DARK_MODE_TEMPLATE: &str = "{{ dark_mode_colors }}
{{ color_scheme_transition }}
{{ fade_in_dark }}";

const BREAKPOINTS_TEMPLATE: &str = "{{ custom_breakpoints }}
{{ container_queries }}
{{ print_utilities }}
{{ reduced_motion }}
{{ high_contrast }}
{{ aspect_ratios }}
{{ safe_area_insets }}";

const UTILITIES_TEMPLATE: &str = "{{ gradient_utilities }}
{{ animation_utilities }}
{{ keyframes }}
{{ mask_utilities }}
{{ glass_morphism }}
{{ glow_utilities }}";
