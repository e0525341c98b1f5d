//! Fuzzy containment, the single text-matching primitive behind every keyword,
//! skill, culture and location check in the crate.
//!
//! Matching is case-insensitive substring containment and is NOT word-boundary
//! aware: `"ai"` matches inside `"aiming"`. Scores depend on this exact behaviour,
//! so any smarter matcher must be swapped in here and nowhere else.

/// Text lower-cased once so that many needles can be tested against it cheaply.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Haystack(String);

impl Haystack {
    pub fn new(text: &str) -> Self {
        Self(text.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when `needle` occurs anywhere in the text, ignoring case.
    pub fn contains(&self, needle: &str) -> bool {
        contains_lowered(&self.0, &needle.to_lowercase())
    }

    /// Number of lexicon entries present in the text. Each entry counts at most once,
    /// however often it occurs.
    pub fn count_hits(&self, lexicon: &[&str]) -> usize {
        lexicon.iter().filter(|kw| self.contains(kw)).count()
    }

    /// The lexicon entries present in the text, in lexicon order.
    pub fn hits<'a>(&self, lexicon: &[&'a str]) -> Vec<&'a str> {
        lexicon.iter().copied().filter(|kw| self.contains(kw)).collect()
    }
}

/// Symmetric fuzzy match: either string contains the other.
/// Used for skill-vs-stack and interest-vs-culture comparisons.
pub fn fuzzy_overlaps(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    contains_lowered(&a, &b) || contains_lowered(&b, &a)
}

fn contains_lowered(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}
