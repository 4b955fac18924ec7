//! Dotted-key translation resolver.

use std::collections::HashMap;

use serde_json::Value;

use super::Language;

/// Nested string dictionaries for every supported language, compiled into
/// the binary from `locales/*.json`.
pub struct Translator {
    dictionaries: HashMap<Language, Value>,
}

impl Translator {
    /// Build the translator from the bundled dictionaries.
    ///
    /// Fails only when a bundled dictionary is not valid JSON, which is a
    /// packaging defect surfaced at startup rather than at lookup time.
    pub fn new() -> anyhow::Result<Self> {
        let mut dictionaries = HashMap::new();
        for language in Language::ALL {
            let parsed: Value =
                serde_json::from_str(Self::bundled_source(language)).map_err(|err| {
                    anyhow::anyhow!("invalid bundled dictionary for {}: {err}", language.as_tag())
                })?;
            dictionaries.insert(language, parsed);
        }
        Ok(Self { dictionaries })
    }

    fn bundled_source(language: Language) -> &'static str {
        match language {
            Language::Sk => include_str!("../../locales/sk.json"),
            Language::En => include_str!("../../locales/en.json"),
            Language::Uk => include_str!("../../locales/uk.json"),
            Language::Ru => include_str!("../../locales/ru.json"),
            Language::Hu => include_str!("../../locales/hu.json"),
        }
    }

    /// Resolve a dotted key in the given language.
    ///
    /// Walks the nested dictionary one segment at a time. A missing segment,
    /// a non-object partway through, or a non-string leaf all yield the
    /// original key unchanged; the resolver never returns an empty string
    /// and never panics.
    pub fn translate(&self, language: Language, key: &str) -> String {
        let Some(mut current) = self.dictionaries.get(&language) else {
            return key.to_string();
        };
        for segment in key.split('.') {
            match current {
                Value::Object(map) => match map.get(segment) {
                    Some(next) => current = next,
                    None => return key.to_string(),
                },
                _ => return key.to_string(),
            }
        }
        match current {
            Value::String(text) => text.clone(),
            _ => key.to_string(),
        }
    }

    /// The raw dictionary for one language.
    pub fn dictionary(&self, language: Language) -> Option<&Value> {
        self.dictionaries.get(&language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn translator() -> Translator {
        Translator::new().unwrap()
    }

    fn collect_keys(value: &Value, prefix: &str, keys: &mut Vec<String>) {
        match value {
            Value::Object(map) => {
                for (name, child) in map {
                    let path = if prefix.is_empty() {
                        name.clone()
                    } else {
                        format!("{prefix}.{name}")
                    };
                    collect_keys(child, &path, keys);
                }
            }
            _ => keys.push(prefix.to_string()),
        }
    }

    #[test]
    fn known_keys_resolve_in_every_language() {
        let t = translator();
        for language in Language::ALL {
            let text = t.translate(language, "onboarding.step1_title");
            assert_ne!(text, "onboarding.step1_title", "{}", language.as_tag());
            assert!(!text.is_empty());
        }
    }

    #[test]
    fn missing_keys_fall_back_to_the_key_itself() {
        let t = translator();
        assert_eq!(t.translate(Language::Sk, "no.such.key"), "no.such.key");
        assert_eq!(t.translate(Language::En, "onboarding.missing"), "onboarding.missing");
    }

    #[test]
    fn non_string_leaves_fall_back_to_the_key() {
        let t = translator();
        // A branch node is not a displayable string.
        assert_eq!(t.translate(Language::Sk, "onboarding"), "onboarding");
    }

    #[test]
    fn walking_past_a_leaf_falls_back_to_the_key() {
        let t = translator();
        assert_eq!(
            t.translate(Language::Sk, "onboarding.step1_title.deeper"),
            "onboarding.step1_title.deeper"
        );
    }

    #[test]
    fn all_dictionaries_expose_the_same_key_paths() {
        let t = translator();
        let mut reference = Vec::new();
        collect_keys(t.dictionary(Language::Sk).unwrap(), "", &mut reference);
        reference.sort();
        assert!(!reference.is_empty());

        for language in [Language::En, Language::Uk, Language::Ru, Language::Hu] {
            let mut keys = Vec::new();
            collect_keys(t.dictionary(language).unwrap(), "", &mut keys);
            keys.sort();
            assert_eq!(keys, reference, "key paths diverge for {}", language.as_tag());
        }
    }

    #[test]
    fn every_leaf_resolves_to_a_non_empty_string() {
        let t = translator();
        for language in Language::ALL {
            let mut keys = Vec::new();
            collect_keys(t.dictionary(language).unwrap(), "", &mut keys);
            for key in keys {
                let text = t.translate(language, &key);
                assert_ne!(text, key, "{}: {key}", language.as_tag());
                assert!(!text.is_empty(), "{}: {key}", language.as_tag());
            }
        }
    }
}
