//! Locale-aware ordering for display names.
//!
//! Uses the Unicode Collation Algorithm with the CLDR root tailoring, so
//! letters without a canonical decomposition (`æ`, `ø`, `ł`, `ß`) sort next
//! to their base letters and punctuation sorts before digits. Strings that
//! collate equal fall back to code point order so sorting stays
//! deterministic.

use std::cmp::Ordering;
use std::sync::LazyLock;

use icu_collator::options::CollatorOptions;
use icu_collator::{Collator, CollatorBorrowed};

static ROOT_COLLATOR: LazyLock<Option<CollatorBorrowed<'static>>> = LazyLock::new(|| {
    match Collator::try_new(Default::default(), CollatorOptions::default()) {
        Ok(collator) => Some(collator),
        Err(err) => {
            tracing::warn!(%err, "root collator unavailable; names sort by code point");
            None
        }
    }
});

pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let collated = match ROOT_COLLATOR.as_ref() {
        Some(collator) => collator.compare(a, b),
        None => Ordering::Equal,
    };
    collated.then_with(|| a.cmp(b))
}
