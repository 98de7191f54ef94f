//! Locale negotiation for bilingual content.
//!
//! Every localized field is stored twice (`*_en` and `*_pl`). The public API
//! picks one of them from the request's `Accept-Language` header.

use serde::{Deserialize, Serialize};

/// A supported content language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Pl,
}

impl Locale {
    /// Resolve a locale from a raw `Accept-Language` header value.
    ///
    /// Only the first language range is considered; quality parameters are
    /// ignored. Anything that does not start with `pl` falls back to English.
    ///
    /// ```
    /// use folio_core::locale::Locale;
    ///
    /// assert_eq!(Locale::from_accept_language(Some("pl-PL,pl;q=0.9")), Locale::Pl);
    /// assert_eq!(Locale::from_accept_language(Some("en-US")), Locale::En);
    /// assert_eq!(Locale::from_accept_language(None), Locale::En);
    /// ```
    pub fn from_accept_language(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::En;
        };

        let first = header
            .split(',')
            .next()
            .unwrap_or("")
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();

        if first.starts_with("pl") {
            Self::Pl
        } else {
            Self::En
        }
    }

    /// Select the variant of a bilingual pair matching this locale.
    pub fn pick<'a, T: ?Sized>(self, en: &'a T, pl: &'a T) -> &'a T {
        match self {
            Self::En => en,
            Self::Pl => pl,
        }
    }

    /// Owned variant of [`Locale::pick`] for optional columns.
    pub fn pick_opt(self, en: &Option<String>, pl: &Option<String>) -> Option<String> {
        match self {
            Self::En => en.clone(),
            Self::Pl => pl.clone(),
        }
    }

    /// Two-letter language code.
    pub fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Pl => "pl",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn polish_prefix_selects_polish() {
        assert_eq!(Locale::from_accept_language(Some("pl")), Locale::Pl);
        assert_eq!(Locale::from_accept_language(Some("pl-PL")), Locale::Pl);
        assert_eq!(Locale::from_accept_language(Some("PL-pl")), Locale::Pl);
    }

    #[test]
    fn only_first_range_is_considered() {
        assert_eq!(
            Locale::from_accept_language(Some("en-GB,pl;q=0.9")),
            Locale::En
        );
        assert_eq!(
            Locale::from_accept_language(Some(" pl ;q=1.0, en")),
            Locale::Pl
        );
    }

    #[test]
    fn empty_or_unknown_falls_back_to_english() {
        assert_eq!(Locale::from_accept_language(Some("")), Locale::En);
        assert_eq!(Locale::from_accept_language(Some("de-DE")), Locale::En);
        assert_eq!(Locale::from_accept_language(Some("*")), Locale::En);
    }

    #[test]
    fn pick_returns_matching_variant() {
        assert_eq!(Locale::Pl.pick("Hello", "Cześć"), "Cześć");
        assert_eq!(Locale::En.pick("Hello", "Cześć"), "Hello");
        assert_eq!(
            Locale::Pl.pick_opt(&Some("a".into()), &None),
            None::<String>
        );
    }
}
