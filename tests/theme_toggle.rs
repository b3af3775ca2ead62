//! Theme toggle scenarios across hosts and stores.

use serial_test::serial;
use tailwind_config_utils::{
    create_theme_toggle, reset_system_detector, set_system_detector, Attached, ClassList,
    ColorMode, FileStore, FixedPreference, MemoryStore, OsPreference, PreferenceStore,
    PresentationRoot, ServerHost, ThemePreference, ThemeToggle,
};

#[test]
fn test_server_host_has_no_toggle() {
    assert!(create_theme_toggle(ServerHost).is_none());
}

#[test]
fn test_empty_store_system_dark_init() {
    let host = Attached::new(MemoryStore::new(), ClassList::new(), FixedPreference(true));
    let mut toggle = create_theme_toggle(host).unwrap();
    toggle.init_theme();
    assert!(toggle.root().has_class("dark"));
}

#[test]
fn test_stored_light_system_dark_init() {
    let host = Attached::new(
        MemoryStore::with_entry("theme", "light"),
        ClassList::new(),
        FixedPreference(true),
    );
    let mut toggle = create_theme_toggle(host).unwrap();
    toggle.init_theme();
    assert!(!toggle.root().has_class("dark"));
}

#[test]
fn test_set_dark_then_toggle_returns_light() {
    let host = Attached::new(MemoryStore::new(), ClassList::new(), FixedPreference(false));
    let mut toggle = create_theme_toggle(host).unwrap();
    toggle.set_theme(ThemePreference::Dark);
    assert!(!toggle.toggle());
    assert_eq!(toggle.store().get("theme").as_deref(), Some("light"));
}

#[test]
fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs.json");

    let mut first = ThemeToggle::new(FileStore::new(&path), ClassList::new(), FixedPreference(false));
    first.init_theme();
    assert!(!first.is_dark());
    assert!(first.toggle());

    // A fresh page load reads the persisted choice back.
    let mut second = ThemeToggle::new(FileStore::new(&path), ClassList::new(), FixedPreference(false));
    second.init_theme();
    assert!(second.is_dark());
    assert_eq!(second.stored_preference(), ThemePreference::Dark);

    second.set_theme(ThemePreference::System);
    let (store, _, _) = second.into_parts();
    assert_eq!(store.get("theme"), None);
}

#[test]
#[serial]
fn test_os_preference_follows_detector() {
    set_system_detector(|| ColorMode::Dark);
    let mut toggle = ThemeToggle::new(MemoryStore::new(), ClassList::new(), OsPreference);
    toggle.init_theme();
    assert!(toggle.is_dark());

    set_system_detector(|| ColorMode::Light);
    toggle.set_theme(ThemePreference::System);
    assert!(!toggle.is_dark());

    reset_system_detector();
}
