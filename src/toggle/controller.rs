//! The theme toggle controller.

use tracing::debug;

use super::config::ToggleConfig;
use super::preference::{ColorMode, ThemePreference};
use super::root::PresentationRoot;
use super::signal::SystemPreference;
use super::store::PreferenceStore;

/// Reconciles a persisted theme preference, the system color-scheme signal
/// and the dark class on the presentation root.
///
/// The root is dark if and only if the stored preference is `dark`, or no
/// preference is stored and the system prefers dark. `light`/`dark` are the
/// only values ever written; following the system is represented by the
/// absence of the key.
///
/// Obtain one through [`create_theme_toggle`](crate::create_theme_toggle), or
/// build it directly with [`ThemeToggle::new`] when the collaborators are
/// already at hand.
///
/// # Example
///
/// ```rust
/// use tailwind_config_utils::{
///     ClassList, FixedPreference, MemoryStore, PreferenceStore, PresentationRoot,
///     ThemePreference, ThemeToggle,
/// };
///
/// let mut toggle = ThemeToggle::new(MemoryStore::new(), ClassList::new(), FixedPreference(true));
/// toggle.init_theme();
/// assert!(toggle.root().has_class("dark"));
///
/// toggle.set_theme(ThemePreference::Dark);
/// assert!(!toggle.toggle());
/// assert_eq!(toggle.store().get("theme").as_deref(), Some("light"));
/// ```
#[derive(Debug, Clone)]
pub struct ThemeToggle<S, R, P> {
    store: S,
    root: R,
    signal: P,
    config: ToggleConfig,
}

impl<S, R, P> ThemeToggle<S, R, P>
where
    S: PreferenceStore,
    R: PresentationRoot,
    P: SystemPreference,
{
    /// Creates a controller with the default [`ToggleConfig`].
    pub fn new(store: S, root: R, signal: P) -> Self {
        Self::with_config(store, root, signal, ToggleConfig::default())
    }

    pub fn with_config(store: S, root: R, signal: P, config: ToggleConfig) -> Self {
        Self {
            store,
            root,
            signal,
            config,
        }
    }

    /// Flips the dark class and persists the resulting concrete mode.
    ///
    /// Returns `true` if dark is now active. Never persists `system`.
    pub fn toggle(&mut self) -> bool {
        self.root.toggle_class(&self.config.dark_class);
        // Persist what the root actually shows, even if the mutation was rejected.
        let is_dark = self.is_dark();
        let mode = ColorMode::from_dark(is_dark);
        self.store.set(&self.config.storage_key, mode.as_str());
        debug!(mode = %mode, "theme toggled");
        is_dark
    }

    /// Applies an explicit preference.
    ///
    /// `System` removes the stored key and follows the system signal;
    /// `Light`/`Dark` persist the value and set the class to match.
    pub fn set_theme(&mut self, preference: ThemePreference) {
        let mode = match preference.color_mode() {
            Some(mode) => {
                self.store.set(&self.config.storage_key, mode.as_str());
                mode
            }
            None => {
                self.store.remove(&self.config.storage_key);
                ColorMode::from_dark(self.signal.prefers_dark())
            }
        };
        self.apply(mode);
        debug!(preference = %preference, mode = %mode, "theme set");
    }

    /// Reconciles the root with the stored preference at startup.
    ///
    /// A stored value is applied as if passed to [`set_theme`](Self::set_theme).
    /// Stored values are matched exactly: anything other than `dark` or
    /// `system` (including `DARK`) is applied as `light`. An empty value counts
    /// as absent. Without a stored value, the dark class is added when the
    /// system prefers dark; otherwise the root is left untouched.
    pub fn init_theme(&mut self) {
        match self.saved_value() {
            Some(saved) => {
                let preference = ThemePreference::from_stored(&saved).unwrap_or_else(|| {
                    debug!(value = %saved, "unrecognized stored theme; applying light");
                    ThemePreference::Light
                });
                self.set_theme(preference);
            }
            None => {
                if self.signal.prefers_dark() {
                    self.root.add_class(&self.config.dark_class);
                }
                debug!(dark = self.is_dark(), "theme initialized from system preference");
            }
        }
    }

    /// Whether the dark class is currently on the root.
    pub fn is_dark(&self) -> bool {
        self.root.has_class(&self.config.dark_class)
    }

    /// The persisted preference. Absence reads as `System`.
    ///
    /// Matches what [`init_theme`](Self::init_theme) would apply: an
    /// unrecognized value reads as `Light`.
    pub fn stored_preference(&self) -> ThemePreference {
        match self.saved_value() {
            Some(saved) => ThemePreference::from_stored(&saved).unwrap_or(ThemePreference::Light),
            None => ThemePreference::System,
        }
    }

    fn saved_value(&self) -> Option<String> {
        self.store
            .get(&self.config.storage_key)
            .filter(|saved| !saved.is_empty())
    }

    fn apply(&mut self, mode: ColorMode) {
        if mode.is_dark() {
            self.root.add_class(&self.config.dark_class);
        } else {
            self.root.remove_class(&self.config.dark_class);
        }
    }
}

impl<S, R, P> ThemeToggle<S, R, P> {
    pub fn config(&self) -> &ToggleConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn signal(&self) -> &P {
        &self.signal
    }

    /// Gives the collaborators back.
    pub fn into_parts(self) -> (S, R, P) {
        (self.store, self.root, self.signal)
    }
}
