//! Display language, translated strings and date/place formatting.

mod format;
mod strings;

pub use format::{format_coords, format_datetime, format_place};
pub use strings::Strings;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Supported display languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "es-AR")]
    EsAr,
    #[serde(rename = "en-US")]
    EnUs,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl Locale {
    pub const ALL: [Locale; 3] = [Locale::EsAr, Locale::EnUs, Locale::PtBr];

    /// Parses a BCP-47-ish tag. Matches the full tag first, then the
    /// language subtag alone (`es-MX` resolves to `es-AR`).
    pub fn from_tag(tag: &str) -> Option<Locale> {
        let normalized = tag.trim().replace('_', "-").to_ascii_lowercase();
        let exact = Self::ALL
            .into_iter()
            .find(|locale| locale.tag().eq_ignore_ascii_case(&normalized));
        if exact.is_some() {
            return exact;
        }
        match normalized.split('-').next() {
            Some("es") => Some(Locale::EsAr),
            Some("en") => Some(Locale::EnUs),
            Some("pt") => Some(Locale::PtBr),
            _ => None,
        }
    }

    /// Like [`Locale::from_tag`], with the default locale for unknown tags.
    pub fn resolve(tag: &str) -> Locale {
        Self::from_tag(tag).unwrap_or_else(|| {
            tracing::debug!(tag, "Unsupported locale, using default");
            Locale::default()
        })
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::EsAr => "es-AR",
            Locale::EnUs => "en-US",
            Locale::PtBr => "pt-BR",
        }
    }

    pub fn strings(self) -> &'static Strings {
        Strings::for_locale(self)
    }

    /// Cycles es-AR, en-US, pt-BR.
    pub fn next(self) -> Locale {
        match self {
            Locale::EsAr => Locale::EnUs,
            Locale::EnUs => Locale::PtBr,
            Locale::PtBr => Locale::EsAr,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_and_language_only_tags() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("pt_BR"), Some(Locale::PtBr));
        assert_eq!(Locale::from_tag("es-mx"), Some(Locale::EsAr));
        assert_eq!(Locale::from_tag("en"), Some(Locale::EnUs));
        assert_eq!(Locale::from_tag("fr-FR"), None);
    }

    #[test]
    fn unknown_tag_resolves_to_spanish() {
        assert_eq!(Locale::resolve("de-DE"), Locale::EsAr);
        assert_eq!(Locale::resolve(""), Locale::EsAr);
    }

    #[test]
    fn next_cycles_through_all() {
        let mut locale = Locale::EsAr;
        for expected in [Locale::EnUs, Locale::PtBr, Locale::EsAr] {
            locale = locale.next();
            assert_eq!(locale, expected);
        }
    }
}
