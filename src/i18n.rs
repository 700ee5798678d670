//! User-facing strings in the supported languages.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Interface language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        })
    }
}

/// Message table for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Messages {
    locale: Locale,
}

impl Messages {
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    pub fn add_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "＋ Add node",
            Locale::Ru => "＋ Добавить узел",
        }
    }

    pub fn remove_button(&self) -> &'static str {
        match self.locale {
            Locale::En => "× Remove selected",
            Locale::Ru => "× Удалить выбранный",
        }
    }

    pub fn order_title(&self) -> &'static str {
        match self.locale {
            Locale::En => "Traversal (pre-order, via each)",
            Locale::Ru => "Обход дерева (pre-order, via each)",
        }
    }

    pub fn added(&self, label: &str, parent: &str) -> String {
        match self.locale {
            Locale::En => format!("Added node \"{label}\" to \"{parent}\"."),
            Locale::Ru => format!("Добавлен узел \"{label}\" в \"{parent}\"."),
        }
    }

    pub fn removed(&self, label: &str) -> String {
        match self.locale {
            Locale::En => format!("Removed node \"{label}\"."),
            Locale::Ru => format!("Удалён узел \"{label}\"."),
        }
    }

    pub fn root_not_removable(&self) -> &'static str {
        match self.locale {
            Locale::En => "The root cannot be removed.",
            Locale::Ru => "Корень удалить нельзя.",
        }
    }

    pub fn moved(&self, label: &str, target: &str) -> String {
        match self.locale {
            Locale::En => format!("Moved \"{label}\" → \"{target}\"."),
            Locale::Ru => format!("Переместили \"{label}\" → \"{target}\"."),
        }
    }

    pub fn move_into_self(&self) -> &'static str {
        match self.locale {
            Locale::En => "A node cannot be moved inside itself.",
            Locale::Ru => "Нельзя переместить узел внутрь самого себя.",
        }
    }

    pub fn root_not_movable(&self) -> &'static str {
        match self.locale {
            Locale::En => "The root cannot be moved.",
            Locale::Ru => "Корень переместить нельзя.",
        }
    }

    pub fn moving(&self, label: &str) -> String {
        match self.locale {
            Locale::En => format!("Moving \"{label}\": pick a target and press Enter."),
            Locale::Ru => format!("Перемещение \"{label}\": выберите цель и нажмите Enter."),
        }
    }

    pub fn move_cancelled(&self) -> &'static str {
        match self.locale {
            Locale::En => "Move cancelled.",
            Locale::Ru => "Перемещение отменено.",
        }
    }

    pub fn active_node(&self, label: &str) -> String {
        match self.locale {
            Locale::En => format!("Active node: {label}"),
            Locale::Ru => format!("Активный узел: {label}"),
        }
    }

    pub fn unnamed(&self) -> &'static str {
        match self.locale {
            Locale::En => "Unnamed",
            Locale::Ru => "Без имени",
        }
    }

    pub fn depth(&self, depth: usize) -> String {
        format!("depth: {depth}")
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::new(Locale::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn russian_strings() {
        let m = Messages::new(Locale::Ru);
        assert_eq!(m.root_not_removable(), "Корень удалить нельзя.");
        assert_eq!(m.removed("A"), "Удалён узел \"A\".");
        assert_eq!(m.active_node("B"), "Активный узел: B");
    }

    #[test]
    fn english_is_default() {
        let m = Messages::default();
        assert_eq!(m.locale(), Locale::En);
        assert_eq!(m.moved("C", "B"), "Moved \"C\" → \"B\".");
    }

    #[test]
    fn locale_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            locale: Locale,
        }
        let w: Wrapper = toml::from_str("locale = \"ru\"").unwrap();
        assert_eq!(w.locale, Locale::Ru);
    }
}
