use std::cell::RefCell;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    /// The class applied to the document root, also the persisted wire value.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Light => "light-mode",
            Theme::Dark => "dark-mode",
        }
    }

    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn from_stored(value: &str) -> Option<Theme> {
        match value {
            "light-mode" => Some(Theme::Light),
            "dark-mode" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Key-value persistence for the theme preference. Failures are the store's
/// problem: callers fall back to the default theme and keep going.
pub trait ThemeStore {
    fn load(&self) -> Option<String>;
    fn save(&self, value: &str);
}

#[derive(Debug, Serialize, Deserialize)]
struct ThemeFile {
    theme: String,
}

/// File-backed store, one small JSON document.
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// `<user config dir>/portfolio-render/theme.json`.
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("portfolio-render");
        path.push("theme.json");
        path
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str::<ThemeFile>(&contents) {
            Ok(file) => Some(file.theme),
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "unreadable theme file");
                None
            }
        }
    }

    fn save(&self, value: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(err) = std::fs::create_dir_all(parent) {
                tracing::warn!(path = %parent.display(), %err, "cannot create state dir");
                return;
            }
        }
        let file = ThemeFile {
            theme: value.to_string(),
        };
        let json = match serde_json::to_string_pretty(&file) {
            Ok(json) => json,
            Err(err) => {
                tracing::warn!(%err, "cannot serialize theme file");
                return;
            }
        };
        if let Err(err) = std::fs::write(&self.path, json) {
            tracing::warn!(path = %self.path.display(), %err, "cannot write theme file");
        }
    }
}

/// In-memory store for tests and embedding.
#[derive(Default)]
pub struct MemoryThemeStore {
    value: RefCell<Option<String>>,
}

impl MemoryThemeStore {
    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }
}

pub struct ThemeController<S: ThemeStore> {
    store: S,
    current: Theme,
}

impl<S: ThemeStore> ThemeController<S> {
    /// Reads the persisted preference and applies it. Absent or unrecognized
    /// values fall back to light.
    pub fn initialize(store: S) -> Self {
        let current = store
            .load()
            .as_deref()
            .and_then(Theme::from_stored)
            .unwrap_or(Theme::Light);
        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the current theme and persists the new value.
    pub fn toggle(&mut self) -> Theme {
        self.set(self.current.flipped())
    }

    pub fn set(&mut self, theme: Theme) -> Theme {
        self.current = theme;
        self.store.save(theme.class_name());
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_light_when_absent_or_invalid() {
        let controller = ThemeController::initialize(MemoryThemeStore::default());
        assert_eq!(controller.current(), Theme::Light);

        let controller = ThemeController::initialize(MemoryThemeStore::with_value("sepia-mode"));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let mut controller = ThemeController::initialize(MemoryThemeStore::default());
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.store.load().as_deref(), Some("dark-mode"));
        assert_eq!(controller.toggle(), Theme::Light);
        assert_eq!(controller.store.load().as_deref(), Some("light-mode"));
    }

    #[test]
    fn reinitialize_reproduces_persisted_theme() {
        let mut controller = ThemeController::initialize(MemoryThemeStore::default());
        controller.toggle();
        let stored = controller.store.load().unwrap();

        let controller = ThemeController::initialize(MemoryThemeStore::with_value(&stored));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn file_store_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("state/theme.json");
        let store = FileThemeStore::new(path.clone());
        assert!(store.load().is_none());

        store.save("dark-mode");
        assert_eq!(store.load().as_deref(), Some("dark-mode"));

        std::fs::write(&path, "not json").unwrap();
        assert!(store.load().is_none());
    }
}
