//! Dark-mode preference, persisted under the `darkMode` flag and applied at
//! the document root so every page inherits it.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

const DARK_MODE_KEY: &str = "darkMode";

pub fn load() -> Theme {
    let stored = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|s| s.get_item(DARK_MODE_KEY).ok().flatten());
    match stored.as_deref() {
        Some("true") => Theme::Dark,
        _ => Theme::Light,
    }
}

pub fn store(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let flag = if theme == Theme::Dark { "true" } else { "false" };
        let _ = storage.set_item(DARK_MODE_KEY, flag);
    }
}

/// Force-toggles the `dark` class on the document element.
pub fn apply(theme: Theme) {
    if let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let _ = root
            .class_list()
            .toggle_with_force("dark", theme == Theme::Dark);
    }
}
