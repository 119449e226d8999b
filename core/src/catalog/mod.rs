pub mod dir;
pub mod memory;
pub mod r#trait;

pub use dir::DirCatalog;
pub use memory::MemoryCatalog;
pub use r#trait::{MessageCatalog, NoCatalog};

use crate::locale::Locale;

/// Locales to search for `locale`: its own chain without root, then the
/// fallback locale's chain without root, then root. Duplicates are dropped.
pub(crate) fn search_chain(locale: &Locale, fallback: Option<&Locale>) -> Vec<Locale> {
    let mut out: Vec<Locale> = Vec::new();
    let fallback_chain = fallback.map(Locale::candidates).unwrap_or_default();
    for l in locale.candidates().into_iter().chain(fallback_chain) {
        if !l.is_root() && !out.contains(&l) {
            out.push(l);
        }
    }
    out.push(Locale::ROOT);
    out
}
