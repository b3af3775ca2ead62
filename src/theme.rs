//! Design tokens for the Tailwind `@theme` layer.
//!
//! Each token group is an ordered static map from CSS custom-property name
//! to value. Insertion order is preserved so the generated `@theme` block is
//! stable across builds.
//!
//! # Example
//!
//! ```rust
//! use tailwind_config_utils::theme::{SEMANTIC_COLORS, SPACING};
//!
//! assert_eq!(SEMANTIC_COLORS.get("--color-primary"), Some(&"#3b82f6"));
//! assert_eq!(SPACING.get("--spacing-container"), Some(&"1280px"));
//! ```

use phf::{phf_ordered_map, OrderedMap};
use serde::Serialize;

use crate::error::Error;

/// Semantic color tokens. Use these instead of hardcoded colors.
pub static SEMANTIC_COLORS: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    // Surface
    "--color-surface" => "#ffffff",
    "--color-surface-elevated" => "#f8fafc",
    "--color-surface-inverted" => "#0f172a",

    // Text
    "--color-text" => "#0f172a",
    "--color-text-secondary" => "#64748b",
    "--color-text-muted" => "#94a3b8",
    "--color-text-inverted" => "#f8fafc",

    // Accent
    "--color-primary" => "#3b82f6",
    "--color-primary-hover" => "#2563eb",
    "--color-secondary" => "#8b5cf6",
    "--color-accent" => "#06b6d4",

    // Status
    "--color-success" => "#22c55e",
    "--color-warning" => "#f59e0b",
    "--color-error" => "#ef4444",
    "--color-info" => "#3b82f6",

    // Border
    "--color-border" => "#e2e8f0",
    "--color-border-strong" => "#94a3b8",
};

/// Fluid type scale, clamped between a minimum and maximum size.
pub static FLUID_TYPOGRAPHY: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "--font-size-xs" => "clamp(0.75rem, 0.7rem + 0.25vw, 0.875rem)",
    "--font-size-sm" => "clamp(0.875rem, 0.8rem + 0.375vw, 1rem)",
    "--font-size-base" => "clamp(1rem, 0.9rem + 0.5vw, 1.125rem)",
    "--font-size-lg" => "clamp(1.125rem, 1rem + 0.625vw, 1.25rem)",
    "--font-size-xl" => "clamp(1.25rem, 1.1rem + 0.75vw, 1.5rem)",
    "--font-size-2xl" => "clamp(1.5rem, 1.3rem + 1vw, 1.875rem)",
    "--font-size-3xl" => "clamp(1.875rem, 1.6rem + 1.375vw, 2.25rem)",
    "--font-size-4xl" => "clamp(2.25rem, 1.9rem + 1.75vw, 3rem)",
};

pub static SPACING: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "--spacing-container" => "1280px",
    "--spacing-section" => "clamp(3rem, 5vw, 6rem)",
    "--spacing-element" => "clamp(1rem, 2vw, 1.5rem)",
    "--spacing-inline" => "clamp(0.5rem, 1vw, 1rem)",
};

pub static BORDER_RADIUS: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "--radius-sm" => "0.25rem",
    "--radius-md" => "0.375rem",
    "--radius-lg" => "0.5rem",
    "--radius-xl" => "0.75rem",
    "--radius-2xl" => "1rem",
    "--radius-full" => "9999px",
};

pub static SHADOWS: OrderedMap<&'static str, &'static str> = phf_ordered_map! {
    "--shadow-sm" => "0 1px 2px 0 rgb(0 0 0 / 0.05)",
    "--shadow-md" => "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    "--shadow-lg" => "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    "--shadow-xl" => "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
};

/// Group names paired with their maps, in `@theme` output order.
static GROUPS: [(&str, &OrderedMap<&str, &str>); 5] = [
    ("semantic-colors", &SEMANTIC_COLORS),
    ("fluid-typography", &FLUID_TYPOGRAPHY),
    ("spacing", &SPACING),
    ("border-radius", &BORDER_RADIUS),
    ("shadows", &SHADOWS),
];

/// A single custom property declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Token {
    pub name: &'static str,
    pub value: &'static str,
}

/// A named, ordered collection of tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TokenGroup {
    pub name: &'static str,
    pub tokens: Vec<Token>,
}

impl TokenGroup {
    fn from_map(name: &'static str, map: &OrderedMap<&'static str, &'static str>) -> Self {
        let tokens = map
            .entries()
            .map(|(key, value)| Token {
                name: *key,
                value: *value,
            })
            .collect();
        Self { name, tokens }
    }

    /// Looks up a token value by property name.
    pub fn get(&self, name: &str) -> Option<&'static str> {
        self.tokens.iter().find(|t| t.name == name).map(|t| t.value)
    }
}

/// Returns every token group in `@theme` output order.
pub fn token_groups() -> Vec<TokenGroup> {
    GROUPS
        .iter()
        .map(|(name, map)| TokenGroup::from_map(*name, map))
        .collect()
}

/// Returns a single token group by its kebab-case name.
///
/// # Errors
///
/// Returns [`Error::UnknownTokenGroup`] if no group has that name.
pub fn token_group(name: &str) -> Result<TokenGroup, Error> {
    GROUPS
        .iter()
        .find(|(group, _)| *group == name)
        .map(|(group, map)| TokenGroup::from_map(*group, map))
        .ok_or_else(|| Error::UnknownTokenGroup(name.to_string()))
}

/// Renders all token groups as one `@theme` block.
///
/// ```rust
/// let css = tailwind_config_utils::theme_plugin().unwrap();
/// assert!(css.contains("@theme"));
/// assert!(css.contains("--color-primary: #3b82f6;"));
/// ```
pub fn theme_plugin() -> Result<String, Error> {
    crate::render::render(crate::render::Plugin::Theme)
}
