//! System color-scheme signal.

use std::sync::{Mutex, PoisonError};

use dark_light::{detect as detect_os_theme, Mode as OsThemeMode};
use once_cell::sync::Lazy;

use super::preference::ColorMode;

/// Read-only signal: does the host environment prefer a dark color scheme?
///
/// Polled once per controller call; no listener is registered.
pub trait SystemPreference {
    fn prefers_dark(&self) -> bool;
}

impl<F: Fn() -> bool> SystemPreference for F {
    fn prefers_dark(&self) -> bool {
        self()
    }
}

/// A signal with a fixed answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPreference(pub bool);

impl SystemPreference for FixedPreference {
    fn prefers_dark(&self) -> bool {
        self.0
    }
}

/// The operating system's color scheme, as reported by `dark-light`.
///
/// Detection goes through a process-wide detector that can be replaced with
/// [`set_system_detector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OsPreference;

impl SystemPreference for OsPreference {
    fn prefers_dark(&self) -> bool {
        detect_color_mode().is_dark()
    }
}

type SystemDetector = fn() -> ColorMode;

static SYSTEM_DETECTOR: Lazy<Mutex<SystemDetector>> = Lazy::new(|| Mutex::new(os_theme_detector));

/// Overrides the detector used by [`OsPreference`].
///
/// This is useful for testing or when you want to force a specific color mode.
pub fn set_system_detector(detector: SystemDetector) {
    let mut guard = SYSTEM_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    *guard = detector;
}

/// Restores the `dark-light` backed detector.
pub fn reset_system_detector() {
    set_system_detector(os_theme_detector);
}

/// Runs the current detector.
pub fn detect_color_mode() -> ColorMode {
    let detector = SYSTEM_DETECTOR.lock().unwrap_or_else(PoisonError::into_inner);
    (*detector)()
}

fn os_theme_detector() -> ColorMode {
    match detect_os_theme() {
        OsThemeMode::Dark => ColorMode::Dark,
        OsThemeMode::Light => ColorMode::Light,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_fixed_preference() {
        assert!(FixedPreference(true).prefers_dark());
        assert!(!FixedPreference::default().prefers_dark());
    }

    #[test]
    fn test_closure_preference() {
        let signal = || true;
        assert!(signal.prefers_dark());
    }

    #[test]
    #[serial]
    fn test_os_preference_uses_detector() {
        set_system_detector(|| ColorMode::Dark);
        assert!(OsPreference.prefers_dark());

        set_system_detector(|| ColorMode::Light);
        assert!(!OsPreference.prefers_dark());

        reset_system_detector();
    }
}
