//! Dark-mode CSS fragments.
//!
//! The `dark` class on the root element is the signal these fragments key
//! off. `DARK_SYSTEM` and `FLASH_PREVENTION` additionally honor a `light`
//! class so an explicit light choice can override a dark OS preference.

use crate::error::Error;

/// Applies dark surface colors when the element carries the `dark` class.
pub const DARK_TOGGLE: &str = r#"@utility dark-toggle {
  &.dark {
    @apply text-white bg-slate-900;
  }
}
"#;

/// Smooth theme transition. Prevents a hard flash when switching themes.
pub const DARK_TRANSITION: &str = r#"@utility dark-transition {
  transition: background-color 0.3s ease, color 0.3s ease, border-color 0.3s ease;
}
"#;

/// Follows the OS color scheme unless `.light` is set.
pub const DARK_SYSTEM: &str = r#"@utility dark-system {
  @media (prefers-color-scheme: dark) {
    &:not(.light) {
      @apply text-white bg-slate-900;
    }
  }
}
"#;

/// Marks an element whose theme is driven by a persisted preference.
pub const DARK_PERSISTENCE: &str = r#"@utility dark-persistence {
  --theme-toggle: auto;

  &.dark {
    @apply text-white bg-slate-900;
  }
}
"#;

/// Paired light and dark palette tokens.
pub const DARK_MODE_COLORS: &str = r#"@theme {
  --color-dark-bg: #0f172a;
  --color-dark-surface: #1e293b;
  --color-dark-surface-elevated: #334155;
  --color-dark-text: #f8fafc;
  --color-dark-text-secondary: #94a3b8;
  --color-dark-border: #334155;

  --color-light-bg: #ffffff;
  --color-light-surface: #f8fafc;
  --color-light-surface-elevated: #f1f5f9;
  --color-light-text: #0f172a;
  --color-light-text-secondary: #64748b;
  --color-light-border: #e2e8f0;
}
"#;

pub const COLOR_SCHEME_TRANSITION: &str = r#"@utility color-scheme-transition {
  transition: background-color 0.3s ease, color 0.3s ease, border-color 0.3s ease, fill 0.3s ease;
}
"#;

/// Hides content until the theme is resolved, avoiding a flash of the
/// wrong scheme on page load.
pub const FLASH_PREVENTION: &str = r#"@utility flash-prevention {
  &.dark {
    display: none;
  }

  @media (prefers-color-scheme: dark) {
    &:not(.light) {
      display: none;
    }
  }
}
"#;

/// Fade used when the dark palette is first applied.
pub const FADE_IN_DARK: &str = r#"@keyframes fadeInDark {
  from { opacity: 0; }
  to { opacity: 1; }
}
"#;

/// Renders the dark palette, the color-scheme transition and the
/// `fadeInDark` keyframes.
pub fn dark_mode_plugin() -> Result<String, Error> {
    crate::render::render(crate::render::Plugin::DarkMode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_toggle() {
        assert!(DARK_TOGGLE.contains("dark-toggle"));
        assert!(DARK_TOGGLE.contains("@utility"));
    }

    #[test]
    fn test_dark_system_reads_light_override() {
        assert!(DARK_SYSTEM.contains("prefers-color-scheme: dark"));
        assert!(DARK_SYSTEM.contains(":not(.light)"));
        assert!(FLASH_PREVENTION.contains(":not(.light)"));
    }

    #[test]
    fn test_dark_mode_colors() {
        assert!(DARK_MODE_COLORS.contains("--color-dark-bg"));
        assert!(DARK_MODE_COLORS.contains("--color-light-bg"));
    }

    #[test]
    fn test_fragments_named() {
        assert!(DARK_TRANSITION.contains("dark-transition"));
        assert!(DARK_PERSISTENCE.contains("dark-persistence"));
        assert!(COLOR_SCHEME_TRANSITION.contains("color-scheme-transition"));
    }
}
