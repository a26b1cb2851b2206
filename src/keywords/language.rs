use std::fmt;

/// Natural languages supported by the keyword extractor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    English,
    German,
    Italian,
    Dutch,
    Portuguese,
    Spanish,
    Swedish,
}

impl Language {
    pub const ALL: [Language; 7] = [
        Language::English,
        Language::German,
        Language::Italian,
        Language::Dutch,
        Language::Portuguese,
        Language::Spanish,
        Language::Swedish,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::German => "German",
            Language::Italian => "Italian",
            Language::Dutch => "Dutch",
            Language::Portuguese => "Portuguese",
            Language::Spanish => "Spanish",
            Language::Swedish => "Swedish",
        }
    }

    /// Case-insensitive lookup by display name.
    pub fn parse(name: &str) -> Option<Language> {
        let wanted = name.trim();
        Language::ALL
            .iter()
            .copied()
            .find(|language| language.name().eq_ignore_ascii_case(wanted))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(Language::parse("german"), Some(Language::German));
        assert_eq!(Language::parse(" SWEDISH "), Some(Language::Swedish));
        assert_eq!(Language::parse("klingon"), None);
    }

    #[test]
    fn test_default_is_english() {
        assert_eq!(Language::default(), Language::English);
    }
}
