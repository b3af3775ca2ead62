//! Plugin output checks against the published CSS contract.

use tailwind_config_utils::breakpoints::*;
use tailwind_config_utils::dark_mode::*;
use tailwind_config_utils::utilities::*;
use tailwind_config_utils::{
    all_plugins, breakpoints_plugin, dark_mode_plugin, theme_plugin, utilities_plugin, Plugin,
    PluginRenderer,
};

#[test]
fn test_theme_plugin() {
    let css = theme_plugin().unwrap();
    assert!(css.contains("@theme"));
    assert!(css.contains("--color-primary"));
    assert!(css.contains("--font-size-xl"));
    assert!(css.contains("--radius-full: 9999px;"));
    assert!(!css.contains("@keyframes"));
}

#[test]
fn test_dark_mode_plugin() {
    let css = dark_mode_plugin().unwrap();
    assert!(css.contains("@theme"));
    assert!(css.contains("--color-dark-bg"));
    assert!(css.contains(COLOR_SCHEME_TRANSITION));
    assert!(css.contains("@keyframes fadeInDark"));
    // Toggle utilities are exported separately, not bundled.
    assert!(!css.contains("dark-toggle"));
}

#[test]
fn test_breakpoints_plugin_order() {
    let css = breakpoints_plugin().unwrap();
    assert!(css.contains("--breakpoint-3xl"));
    assert!(css.contains("container-type"));
    assert!(css.contains("print-hidden"));

    let positions: Vec<usize> = [
        CUSTOM_BREAKPOINTS,
        CONTAINER_QUERIES,
        PRINT_UTILITIES,
        REDUCED_MOTION,
        HIGH_CONTRAST,
        ASPECT_RATIOS,
        SAFE_AREA_INSETS,
    ]
    .iter()
    .map(|fragment| css.find(fragment).expect("fragment present verbatim"))
    .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_utilities_plugin() {
    let css = utilities_plugin().unwrap();
    assert!(css.contains("@utility"));
    assert!(css.contains("animate-fade-in"));
    assert!(css.contains("mask-fade"));
    assert!(css.contains("glass"));
    assert!(css.contains("glow-"));
    assert!(css.contains("@keyframes fadeIn"));
    assert!(css.contains("@keyframes slideUp"));
    assert!(css.contains("@keyframes elastic"));

    let animations = css.find(ANIMATION_UTILITIES).unwrap();
    let keyframes = css.find(KEYFRAMES).unwrap();
    let masks = css.find(MASK_UTILITIES).unwrap();
    assert!(animations < keyframes && keyframes < masks);
}

#[test]
fn test_all_plugins_matches_renderer() {
    let shared = all_plugins().unwrap();
    let owned = PluginRenderer::new().render_all().unwrap();
    assert_eq!(shared, owned);
    for plugin in Plugin::ALL {
        assert!(shared.contains(&PluginRenderer::new().render(plugin).unwrap()));
    }
}

#[test]
fn test_plugins_are_stable() {
    assert_eq!(theme_plugin().unwrap(), theme_plugin().unwrap());
    assert_eq!(utilities_plugin().unwrap(), utilities_plugin().unwrap());
}
