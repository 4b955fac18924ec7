use serde::{Deserialize, Serialize};

/// Supported interface languages. Slovak is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Sk,
    En,
    Uk,
    Ru,
    Hu,
}

impl Language {
    pub const ALL: [Language; 5] = [
        Language::Sk,
        Language::En,
        Language::Uk,
        Language::Ru,
        Language::Hu,
    ];

    pub fn as_tag(self) -> &'static str {
        match self {
            Language::Sk => "sk",
            Language::En => "en",
            Language::Uk => "uk",
            Language::Ru => "ru",
            Language::Hu => "hu",
        }
    }

    /// Parse a stored tag. Anything outside the supported set is `None`;
    /// callers fall back to the default.
    pub fn from_tag(tag: &str) -> Option<Language> {
        match tag {
            "sk" => Some(Language::Sk),
            "en" => Some(Language::En),
            "uk" => Some(Language::Uk),
            "ru" => Some(Language::Ru),
            "hu" => Some(Language::Hu),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Language;

    #[test]
    fn tags_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_tag(language.as_tag()), Some(language));
        }
    }

    #[test]
    fn unknown_tags_are_rejected() {
        assert_eq!(Language::from_tag("de"), None);
        assert_eq!(Language::from_tag(""), None);
        assert_eq!(Language::from_tag("SK"), None);
    }
}
