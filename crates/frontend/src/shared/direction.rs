/// Text direction for a UI language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

const RTL_LANGUAGES: [&str; 4] = ["ar", "fa", "he", "ur"];

impl TextDirection {
    /// Direction from a language tag such as "ar" or "en-US"
    pub fn for_language(language: &str) -> Self {
        let primary = language.split(['-', '_']).next().unwrap_or_default();
        if RTL_LANGUAGES
            .iter()
            .any(|rtl| primary.eq_ignore_ascii_case(rtl))
        {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    /// Value for the HTML `dir` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "ltr",
            TextDirection::Rtl => "rtl",
        }
    }

    pub fn text_align(&self) -> &'static str {
        match self {
            TextDirection::Ltr => "left",
            TextDirection::Rtl => "right",
        }
    }
}
