// SPDX-License-Identifier: MPL-2.0
//! Fluent bundle loading and message lookup.
//!
//! Locale files are embedded at compile time from `assets/i18n/`. The
//! active locale is resolved from the CLI flag, then the config file, then
//! the OS locale, falling back to `en-US`.

use crate::config::Config;
use fluent_bundle::{FluentBundle, FluentResource};
use rust_embed::RustEmbed;
use std::collections::HashMap;
use unic_langid::LanguageIdentifier;

#[derive(RustEmbed)]
#[folder = "assets/i18n/"]
struct Locales;

const FALLBACK_LOCALE: &str = "en-US";

pub struct I18n {
    bundles: HashMap<LanguageIdentifier, FluentBundle<FluentResource>>,
    current_locale: LanguageIdentifier,
}

impl Default for I18n {
    fn default() -> Self {
        Self::new(None, &Config::default())
    }
}

impl I18n {
    pub fn new(cli_lang: Option<String>, config: &Config) -> Self {
        let mut bundles = HashMap::new();
        let mut available_locales = Vec::new();

        for file in Locales::iter() {
            let Some(locale_str) = file.as_ref().strip_suffix(".ftl") else {
                continue;
            };
            let Ok(locale) = locale_str.parse::<LanguageIdentifier>() else {
                continue;
            };
            let Some(content) = Locales::get(file.as_ref()) else {
                continue;
            };

            let source = String::from_utf8_lossy(content.data.as_ref()).to_string();
            let resource =
                FluentResource::try_new(source).expect("embedded FTL file failed to parse");
            let mut bundle = FluentBundle::new(vec![locale.clone()]);
            bundle
                .add_resource(resource)
                .expect("embedded FTL resource conflicts with itself");
            bundles.insert(locale.clone(), bundle);
            available_locales.push(locale);
        }

        let fallback: LanguageIdentifier = FALLBACK_LOCALE
            .parse()
            .expect("fallback locale identifier is valid");
        let current_locale =
            resolve_locale(cli_lang, config, &available_locales).unwrap_or(fallback);

        Self {
            bundles,
            current_locale,
        }
    }

    pub fn current_locale(&self) -> &LanguageIdentifier {
        &self.current_locale
    }

    /// Looks up a message by key in the active locale.
    pub fn tr(&self, key: &str) -> String {
        if let Some(bundle) = self.bundles.get(&self.current_locale) {
            if let Some(pattern) = bundle.get_message(key).and_then(|msg| msg.value()) {
                let mut errors = vec![];
                let value = bundle.format_pattern(pattern, None, &mut errors);
                if errors.is_empty() {
                    return value.to_string();
                }
            }
        }
        format!("MISSING: {}", key)
    }
}

fn resolve_locale(
    cli_lang: Option<String>,
    config: &Config,
    available: &[LanguageIdentifier],
) -> Option<LanguageIdentifier> {
    let candidates = cli_lang
        .into_iter()
        .chain(config.language.clone())
        .chain(sys_locale::get_locale());

    for candidate in candidates {
        if let Ok(locale) = candidate.parse::<LanguageIdentifier>() {
            if available.contains(&locale) {
                return Some(locale);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn available() -> Vec<LanguageIdentifier> {
        vec!["en-US".parse().unwrap(), "fr".parse().unwrap()]
    }

    #[test]
    fn cli_flag_wins_over_config() {
        let config = Config {
            language: Some("en-US".to_string()),
            ..Config::default()
        };
        let locale = resolve_locale(Some("fr".to_string()), &config, &available());
        assert_eq!(locale, Some("fr".parse().unwrap()));
    }

    #[test]
    fn config_language_is_used_without_cli_flag() {
        let config = Config {
            language: Some("fr".to_string()),
            ..Config::default()
        };
        let locale = resolve_locale(None, &config, &available());
        assert_eq!(locale, Some("fr".parse().unwrap()));
    }

    #[test]
    fn unknown_candidates_are_skipped() {
        let config = Config {
            language: Some("xx-YY".to_string()),
            ..Config::default()
        };
        let locale = resolve_locale(Some("zz".to_string()), &config, &available());
        // Falls through to the OS locale, which may or may not be available.
        if let Some(l) = locale {
            assert!(available().contains(&l));
        }
    }

    #[test]
    fn embedded_locale_translates_known_key() {
        let i18n = I18n::default();
        let title = i18n.tr("window-title");
        assert!(!title.starts_with("MISSING:"));
    }

    #[test]
    fn missing_key_is_flagged() {
        let i18n = I18n::default();
        assert_eq!(i18n.tr("no-such-key"), "MISSING: no-such-key");
    }
}
