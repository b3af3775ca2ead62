//! Crate error type.

/// Error returned by rendering, parsing and persistence operations.
///
/// The theme controller itself never returns this: its operations are
/// infallible once constructed. Errors only surface from plugin rendering,
/// from parsing user-supplied names, and from the fallible internals of
/// [`FileStore`](crate::FileStore) (which logs and swallows them).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A theme preference string was not `light`, `dark` or `system`.
    #[error("unknown theme preference '{0}' (expected light, dark or system)")]
    UnknownPreference(String),
    /// A plugin name did not match any known plugin.
    #[error("unknown plugin '{0}'")]
    UnknownPlugin(String),
    /// A token group name did not match any known group.
    #[error("unknown token group '{0}'")]
    UnknownTokenGroup(String),
    /// A [`ToggleConfig`](crate::ToggleConfig) field cannot be used by a host.
    #[error("invalid toggle config: {0}")]
    InvalidConfig(String),
    #[error("template error: {0}")]
    Render(#[from] minijinja::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
