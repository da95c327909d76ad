// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::Error;

const ENGLISH: &str = include_str!("translations/en.properties");
const GERMAN: &str = include_str!("translations/de.properties");

/// Resolves message keys into localized strings.
///
/// Formatting functions of this crate only ever call [Translate::tr];
/// [Translate::country] is used to pick a default [UnitSystem](crate::UnitSystem).
pub trait Translate {
    /// Translates `key`, substituting `args` into the message template.
    fn tr(&self, key: &str, args: &[&str]) -> String;

    /// Returns the upper-case region code of the current locale (e.g. "US"),
    /// or an empty string if the locale has no region.
    fn country(&self) -> &str;
}

/// [Translate] implementation backed by a map of message templates,
/// usually loaded from a `.properties` file.
///
/// Each `%s` in a template is replaced by the next argument.
/// Missing keys translate to the key itself.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Translation {
    locale: String,
    country: String,
    messages: HashMap<String, String>,
}

impl Translation {
    /// Parses `key=value` lines. Blank lines and lines starting with `#` or `!` are skipped.
    pub fn from_properties(locale: &str, text: &str) -> Result<Self, Error> {
        let mut messages = HashMap::default();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
                continue;
            }

            let (key, value) = line.split_once('=').ok_or_else(|| Error::MalformedTranslation {
                line: line.to_string(),
            })?;
            messages.insert(key.trim().to_string(), value.trim().to_string());
        }

        let country = locale
            .split_once(['_', '-'])
            .map(|(_, region)| region.to_ascii_uppercase())
            .unwrap_or_default();

        Ok(Self {
            locale: locale.to_string(),
            country,
            messages,
        })
    }

    /// Built-in English (United States) messages.
    pub fn english() -> Self {
        Self::from_properties("en_US", ENGLISH).expect("built-in english translation must be valid")
    }

    /// Built-in German (Germany) messages.
    pub fn german() -> Self {
        Self::from_properties("de_DE", GERMAN).expect("built-in german translation must be valid")
    }

    /// Picks a built-in translation by the language part of `locale`,
    /// falling back to English. The region of `locale` is preserved.
    pub fn for_locale(locale: &str) -> Self {
        let language = locale.split(['_', '-']).next().unwrap_or_default();
        let text = match language.to_ascii_lowercase().as_str() {
            "de" => GERMAN,
            _ => ENGLISH,
        };
        Self::from_properties(locale, text).expect("built-in translation must be valid")
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }
}

impl Translate for Translation {
    fn tr(&self, key: &str, args: &[&str]) -> String {
        let Some(template) = self.messages.get(key) else {
            log::warn!("missing translation for {:?} in locale {}", key, self.locale);
            return key.to_string();
        };

        let mut result = String::with_capacity(template.len());
        let mut args = args.iter();
        let mut rest = template.as_str();
        while let Some(idx) = rest.find("%s") {
            result.push_str(&rest[..idx]);
            result.push_str(args.next().copied().unwrap_or_default());
            rest = &rest[idx + 2..];
        }
        result.push_str(rest);
        result
    }

    fn country(&self) -> &str {
        &self.country
    }
}
