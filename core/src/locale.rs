use std::fmt;

/// A language/country/variant triple used to pick catalog bundles.
///
/// Language is stored lower-case and country upper-case; the variant is kept
/// as given. The empty locale (`Locale::ROOT`) selects the base bundle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Locale {
    language: String,
    country: String,
    variant: String,
}

impl Locale {
    pub const ROOT: Locale = Locale {
        language: String::new(),
        country: String::new(),
        variant: String::new(),
    };

    pub fn new(language: &str, country: &str, variant: &str) -> Self {
        Self {
            language: language.trim().to_ascii_lowercase(),
            country: country.trim().to_ascii_uppercase(),
            variant: variant.trim().to_string(),
        }
    }

    /// Parses `en`, `en_US`, `en-US`, `en_US_POSIX` and POSIX environment
    /// values such as `de_DE.UTF-8@euro`. `C`, `POSIX` and blank input map to
    /// the root locale.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let s = s.split(['.', '@']).next().unwrap_or_default();
        if s.is_empty() || s == "C" || s == "POSIX" {
            return Self::ROOT;
        }

        let mut parts = s.splitn(3, ['_', '-']);
        let language = parts.next().unwrap_or_default();
        let country = parts.next().unwrap_or_default();
        let variant = parts.next().unwrap_or_default();
        Self::new(language, country, variant)
    }

    /// Reads the process locale from `LC_ALL`, `LC_MESSAGES` and `LANG`, in
    /// that order. Blank values are skipped.
    pub fn from_env() -> Self {
        for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
            if let Ok(v) = std::env::var(var) {
                if !v.trim().is_empty() {
                    return Self::parse(&v);
                }
            }
        }
        Self::ROOT
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn variant(&self) -> &str {
        &self.variant
    }

    pub fn is_root(&self) -> bool {
        self.language.is_empty() && self.country.is_empty() && self.variant.is_empty()
    }

    /// Underscore-joined form used in bundle file names (`en_US`). Empty for
    /// the root locale.
    pub fn tag(&self) -> String {
        let mut parts: Vec<&str> = Vec::with_capacity(3);
        if !self.language.is_empty() {
            parts.push(&self.language);
        }
        if !self.country.is_empty() || !self.variant.is_empty() {
            parts.push(&self.country);
        }
        if !self.variant.is_empty() {
            parts.push(&self.variant);
        }
        parts.join("_")
    }

    /// Most-specific-first search chain, always ending with the root locale.
    pub fn candidates(&self) -> Vec<Locale> {
        let mut out = Vec::with_capacity(4);
        if !self.variant.is_empty() {
            out.push(self.clone());
        }
        if !self.country.is_empty() {
            out.push(Locale::new(&self.language, &self.country, ""));
        }
        if !self.language.is_empty() {
            out.push(Locale::new(&self.language, "", ""));
        }
        out.push(Locale::ROOT);
        out
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, "root")
        } else {
            write!(f, "{}", self.tag())
        }
    }
}

impl From<&str> for Locale {
    fn from(s: &str) -> Self {
        Locale::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!(Locale::parse("en_US"), Locale::new("en", "US", ""));
        assert_eq!(Locale::parse("EN-us"), Locale::new("en", "US", ""));
        assert_eq!(Locale::parse("fr"), Locale::new("fr", "", ""));
        assert_eq!(
            Locale::parse("de_DE.UTF-8@euro"),
            Locale::new("de", "DE", "")
        );
        assert_eq!(
            Locale::parse("en_US_POSIX"),
            Locale::new("en", "US", "POSIX")
        );
    }

    #[test]
    fn test_parse_root_forms() {
        assert!(Locale::parse("").is_root());
        assert!(Locale::parse("C").is_root());
        assert!(Locale::parse("POSIX").is_root());
        assert!(Locale::parse("C.UTF-8").is_root());
    }

    #[test]
    fn test_candidates_chain() {
        let chain = Locale::parse("en_US_x").candidates();
        let tags: Vec<String> = chain.iter().map(|l| l.tag()).collect();
        assert_eq!(tags, vec!["en_US_x", "en_US", "en", ""]);

        let chain = Locale::ROOT.candidates();
        assert_eq!(chain, vec![Locale::ROOT]);
    }

    #[test]
    fn test_tag_with_variant_and_no_country() {
        let l = Locale::new("es", "", "trad");
        assert_eq!(l.tag(), "es__trad");
        assert_eq!(l.to_string(), "es__trad");
        assert_eq!(Locale::ROOT.to_string(), "root");
    }
}
