//! UI string tables
//!
//! Every user-facing string goes through [`Localizer::t`]. Tables are nested
//! JSON documents compiled into the binary and flattened to dotted keys
//! (`auth.email`). Lookups fall back to English, then to the key itself, so
//! a missing translation shows up as its key instead of an empty label.

use std::collections::HashMap;

use serde_json::Value;

use crate::shared::locale::Locale;

const EN_TABLE: &str = include_str!("locales/en.json");
const TR_TABLE: &str = include_str!("locales/tr.json");

type Table = HashMap<String, String>;

/// Key lookup with `{{name}}` interpolation over two locales
#[derive(Debug, Clone)]
pub struct Localizer {
    locale: Locale,
    en: Table,
    tr: Table,
}

impl Localizer {
    pub fn new(locale: Locale) -> Result<Self, serde_json::Error> {
        Ok(Self {
            locale,
            en: parse_table(EN_TABLE)?,
            tr: parse_table(TR_TABLE)?,
        })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_locale(&mut self, locale: Locale) {
        if self.locale != locale {
            tracing::info!("[I18N] locale changed {} -> {}", self.locale, locale);
        }
        self.locale = locale;
    }

    /// Flip between the two locales and return the new one.
    pub fn toggle(&mut self) -> Locale {
        self.set_locale(self.locale.toggled());
        self.locale
    }

    /// Translate `key` in the current locale.
    pub fn t(&self, key: &str) -> String {
        self.lookup(key).to_string()
    }

    /// Translate `key` and substitute each `{{name}}` placeholder.
    pub fn t_with(&self, key: &str, params: &[(&str, &str)]) -> String {
        params
            .iter()
            .fold(self.lookup(key).to_string(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }

    /// All keys of a locale's table
    pub fn keys(&self, locale: Locale) -> impl Iterator<Item = &str> {
        self.table(locale).keys().map(String::as_str)
    }

    fn table(&self, locale: Locale) -> &Table {
        match locale {
            Locale::En => &self.en,
            Locale::Tr => &self.tr,
        }
    }

    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.table(self.locale)
            .get(key)
            .or_else(|| self.en.get(key))
            .map_or(key, String::as_str)
    }
}

fn parse_table(source: &str) -> Result<Table, serde_json::Error> {
    let root: Value = serde_json::from_str(source)?;
    let mut table = Table::new();
    flatten(&root, String::new(), &mut table);
    Ok(table)
}

fn flatten(value: &Value, prefix: String, table: &mut Table) {
    match value {
        Value::Object(map) => {
            for (name, child) in map {
                let key = if prefix.is_empty() {
                    name.clone()
                } else {
                    format!("{prefix}.{name}")
                };
                flatten(child, key, table);
            }
        }
        Value::String(text) => {
            table.insert(prefix, text.clone());
        }
        // Non-string leaves are not translations.
        _ => {}
    }
}
