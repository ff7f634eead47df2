// Theme preference: persisted in localStorage, seeded from the system
// prefers-color-scheme, applied as a `dark` class on the document root.
// Independent of auth.

use web_sys::window;

use crate::utils::constants::THEME_STORAGE_KEY;
use crate::utils::storage::{load_string, save_string};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }
}

/// Stored preference wins; otherwise follow the system color scheme.
pub fn initial_theme() -> Theme {
    if let Some(theme) = load_string(THEME_STORAGE_KEY).as_deref().and_then(Theme::parse) {
        return theme;
    }
    if prefers_dark() {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Toggle the `dark` class on `<html>` and persist the choice.
pub fn apply_theme(theme: Theme) {
    if let Some(root) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        let classes = root.class_list();
        let result = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
        if result.is_err() {
            log::warn!("could not update theme class on document root");
        }
    }
    save_string(THEME_STORAGE_KEY, theme.as_str());
}

fn prefers_dark() -> bool {
    window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok())
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_round_trips() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("solarized"), None);
        assert_eq!(Theme::parse(Theme::Dark.as_str()), Some(Theme::Dark));
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }
}
