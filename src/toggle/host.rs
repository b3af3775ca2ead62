//! Host environments and controller construction.
//!
//! A controller can only exist where a preference store, a presentation
//! root and a system signal are all available. [`create_theme_toggle`]
//! returns `None` instead of failing when the host cannot provide them,
//! for example during server-side rendering.

use tracing::{debug, warn};

use super::config::ToggleConfig;
use super::controller::ThemeToggle;
use super::root::{ClassList, PresentationRoot};
use super::signal::{FixedPreference, SystemPreference};
use super::store::{MemoryStore, PreferenceStore};

/// An environment that may be able to supply the controller's collaborators.
pub trait Host {
    type Store: PreferenceStore;
    type Root: PresentationRoot;
    type Signal: SystemPreference;

    /// Attaches to the environment, or returns `None` if it lacks any of
    /// the three collaborators.
    fn attach(self, config: &ToggleConfig) -> Option<(Self::Store, Self::Root, Self::Signal)>;
}

/// A server-side rendering context: no document, no window, no storage.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServerHost;

impl Host for ServerHost {
    type Store = MemoryStore;
    type Root = ClassList;
    type Signal = FixedPreference;

    fn attach(self, _config: &ToggleConfig) -> Option<(MemoryStore, ClassList, FixedPreference)> {
        None
    }
}

/// A host whose collaborators are already available.
#[derive(Debug, Clone, Default)]
pub struct Attached<S, R, P> {
    pub store: S,
    pub root: R,
    pub signal: P,
}

impl<S, R, P> Attached<S, R, P> {
    pub fn new(store: S, root: R, signal: P) -> Self {
        Self {
            store,
            root,
            signal,
        }
    }
}

impl<S, R, P> Host for Attached<S, R, P>
where
    S: PreferenceStore,
    R: PresentationRoot,
    P: SystemPreference,
{
    type Store = S;
    type Root = R;
    type Signal = P;

    fn attach(self, _config: &ToggleConfig) -> Option<(S, R, P)> {
        Some((self.store, self.root, self.signal))
    }
}

/// Creates a controller for `host` with the default [`ToggleConfig`].
///
/// Returns `None` when the host is not a browser-like environment. Callers
/// must check before use:
///
/// ```rust
/// use tailwind_config_utils::{create_theme_toggle, ServerHost};
///
/// assert!(create_theme_toggle(ServerHost).is_none());
/// ```
pub fn create_theme_toggle<H: Host>(host: H) -> Option<ThemeToggle<H::Store, H::Root, H::Signal>> {
    create_theme_toggle_with(host, ToggleConfig::default())
}

/// Creates a controller for `host` with an explicit configuration.
///
/// Returns `None` when the host cannot attach or the configuration fails
/// [`ToggleConfig::validate`].
pub fn create_theme_toggle_with<H: Host>(
    host: H,
    config: ToggleConfig,
) -> Option<ThemeToggle<H::Store, H::Root, H::Signal>> {
    if let Err(e) = config.validate() {
        warn!(error = %e, "theme toggle unavailable");
        return None;
    }
    let Some((store, root, signal)) = host.attach(&config) else {
        debug!("host has no document or window; theme toggle unavailable");
        return None;
    };
    Some(ThemeToggle::with_config(store, root, signal, config))
}
