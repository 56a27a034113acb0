//! Startup theme restoration
//!
//! The stored preference is read once, before mounting, and only the exact
//! value `"dark"` changes the presentation. Storage is never written here.

/// Stored value that selects the dark presentation
pub const DARK_VALUE: &str = "dark";

/// Class added to the root element for the dark presentation
pub const DARK_CLASS: &str = "dark-theme";

/// Presentation mode resolved at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Default (light) presentation
    #[default]
    Default,
    /// Dark presentation
    Dark,
}

impl Theme {
    /// Interpret a stored preference. Anything but exactly `"dark"` is default.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some(DARK_VALUE) => Theme::Dark,
            _ => Theme::Default,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Theme provider context (read-only, fixed at startup)
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: Theme,
}

/// Persistent key-value store holding user preferences
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read the raw value under `key`. Unavailable storage reads as `None`.
    fn read(&self, key: &str) -> Option<String>;
}

/// Root presentation context that can be switched to dark
#[cfg_attr(test, mockall::automock)]
pub trait ThemeTarget {
    fn mark_dark(&self);
}

/// Restore the persisted theme and apply it to `target`.
pub fn apply_startup_theme<S, T>(store: &S, target: &T, key: &str) -> Theme
where
    S: PreferenceStore + ?Sized,
    T: ThemeTarget + ?Sized,
{
    let stored = store.read(key);
    let theme = Theme::from_stored(stored.as_deref());

    if theme.is_dark() {
        target.mark_dark();
    }

    tracing::info!(?theme, "Restored startup theme");
    theme
}

/// `window.localStorage`, read as raw strings
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl PreferenceStore for BrowserStorage {
    fn read(&self, key: &str) -> Option<String> {
        // localStorage access throws when storage is disabled
        let storage = match web_sys::window()?.local_storage() {
            Ok(Some(storage)) => storage,
            Ok(None) => return None,
            Err(e) => {
                tracing::debug!("localStorage unavailable: {:?}", e);
                return None;
            }
        };

        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, "localStorage read failed: {:?}", e);
                None
            }
        }
    }
}

/// The document's `<html>` element
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentRoot;

impl ThemeTarget for DocumentRoot {
    fn mark_dark(&self) {
        let Some(html) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };

        match html.class_list().add_1(DARK_CLASS) {
            Ok(()) => gloo_console::log!("Added class to html:", DARK_CLASS),
            Err(e) => tracing::warn!("Failed to apply dark theme class: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    fn store_with(value: Option<&str>) -> MockPreferenceStore {
        let mut store = MockPreferenceStore::new();
        store
            .expect_read()
            .with(eq("theme"))
            .times(1)
            .return_const(value.map(str::to_string));
        store
    }

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("light")), Theme::Default);
        assert_eq!(Theme::from_stored(Some("")), Theme::Default);
        assert_eq!(Theme::from_stored(Some("Dark")), Theme::Default);
        assert_eq!(Theme::from_stored(Some(" dark")), Theme::Default);
        assert_eq!(Theme::from_stored(Some("\"dark\"")), Theme::Default);
        assert_eq!(Theme::from_stored(None), Theme::Default);
        assert_eq!(Theme::default(), Theme::Default);
    }

    #[test]
    fn test_dark_preference_marks_root() {
        let store = store_with(Some("dark"));
        let mut target = MockThemeTarget::new();
        target.expect_mark_dark().times(1).return_const(());

        let theme = apply_startup_theme(&store, &target, "theme");
        assert_eq!(theme, Theme::Dark);
        assert!(theme.is_dark());
    }

    #[test]
    fn test_other_values_leave_root_untouched() {
        for value in [Some("light"), Some(""), Some("system"), Some("DARK"), None] {
            let store = store_with(value);
            let mut target = MockThemeTarget::new();
            target.expect_mark_dark().never();

            let theme = apply_startup_theme(&store, &target, "theme");
            assert_eq!(theme, Theme::Default, "value: {:?}", value);
        }
    }

    #[test]
    fn test_repeated_startup_is_stable() {
        for _ in 0..3 {
            let store = store_with(Some("dark"));
            let mut target = MockThemeTarget::new();
            target.expect_mark_dark().times(1).return_const(());

            assert_eq!(apply_startup_theme(&store, &target, "theme"), Theme::Dark);
        }
    }

    #[test]
    fn test_reads_configured_key() {
        let mut store = MockPreferenceStore::new();
        store
            .expect_read()
            .with(eq("shelf_theme"))
            .times(1)
            .return_const(Some("dark".to_string()));
        let mut target = MockThemeTarget::new();
        target.expect_mark_dark().times(1).return_const(());

        assert_eq!(apply_startup_theme(&store, &target, "shelf_theme"), Theme::Dark);
    }
}
