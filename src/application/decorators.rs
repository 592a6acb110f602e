use crate::domain::ports::TextSource;
use crate::error::Result;
use regex::{NoExpand, Regex, RegexBuilder};
use std::sync::LazyLock;
use tracing::trace;

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[.?!]").unwrap());
static SPACE_BEFORE_PERIOD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+\.").unwrap());

const TERMINAL_PUNCTUATION: [char; 3] = ['.', '?', '!'];

/// Upper-cases the first letter of every sentence.
///
/// This is a plain split on `.`, `?` and `!`: every punctuation mark becomes
/// its own segment, non-blank segments are trimmed and capitalized, and the
/// segments are joined back with single spaces before the spaces in front of
/// periods are dropped again. Abbreviations and decimals are split too.
pub fn capitalize_sentences(text: &str) -> String {
    let mut segments = Vec::new();
    let mut last = 0;
    for mark in SENTENCE_END.find_iter(text) {
        segments.push(&text[last..mark.start()]);
        segments.push(mark.as_str());
        last = mark.end();
    }
    segments.push(&text[last..]);

    let joined = segments
        .into_iter()
        .map(|segment| {
            let trimmed = segment.trim();
            if trimmed.is_empty() {
                return segment.to_string();
            }
            let mut chars = trimmed.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ");

    SPACE_BEFORE_PERIOD.replace_all(&joined, ".").into_owned()
}

/// Appends `!` unless the trimmed text already ends a sentence.
pub fn emphasize(text: String) -> String {
    if text.trim().ends_with(TERMINAL_PUNCTUATION) {
        text
    } else {
        text + "!"
    }
}

/// Identity decorator: hands back the wrapped text untouched.
pub struct MessageDecorator<S: TextSource> {
    inner: S,
}

impl<S: TextSource> MessageDecorator<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: TextSource> TextSource for MessageDecorator<S> {
    fn text(&self) -> String {
        self.inner.text()
    }
}

pub struct CapitalizeDecorator<S: TextSource> {
    inner: S,
}

impl<S: TextSource> CapitalizeDecorator<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: TextSource> TextSource for CapitalizeDecorator<S> {
    fn text(&self) -> String {
        let text = capitalize_sentences(&self.inner.text());
        trace!(%text, "capitalized");
        text
    }
}

pub struct EmphasizeDecorator<S: TextSource> {
    inner: S,
}

impl<S: TextSource> EmphasizeDecorator<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

impl<S: TextSource> TextSource for EmphasizeDecorator<S> {
    fn text(&self) -> String {
        let text = emphasize(self.inner.text());
        trace!(%text, "emphasized");
        text
    }
}

/// Ordered bad-word table used by [`ProfanityFilterDecorator`].
///
/// Entries are applied in insertion order. Overriding a word that is already
/// present (compared case-insensitively) swaps its replacement in place, so
/// the built-in entries keep their position ahead of caller additions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacements {
    entries: Vec<(String, String)>,
}

impl Replacements {
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, bad: impl Into<String>, replacement: impl Into<String>) {
        let bad = bad.into();
        let replacement = replacement.into();
        let key = bad.to_lowercase();
        match self
            .entries
            .iter_mut()
            .find(|(existing, _)| existing.to_lowercase() == key)
        {
            Some((_, value)) => *value = replacement,
            None => self.entries.push((bad, replacement)),
        }
    }

    /// Default table with `overrides` laid on top.
    pub fn with_overrides<I, K, V>(overrides: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut replacements = Self::default();
        for (bad, replacement) in overrides {
            replacements.insert(bad, replacement);
        }
        replacements
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(bad, replacement)| (bad.as_str(), replacement.as_str()))
    }
}

impl Default for Replacements {
    fn default() -> Self {
        let mut replacements = Self::empty();
        replacements.insert("horrível", "****");
        replacements
    }
}

/// Masks bad words with case-insensitive substring matching.
///
/// Matching ignores word boundaries, so a bad word is also replaced inside
/// longer words.
pub struct ProfanityFilterDecorator<S: TextSource> {
    inner: S,
    filters: Vec<(Regex, String)>,
}

impl<S: TextSource> ProfanityFilterDecorator<S> {
    /// Wraps `inner` with the default replacement table.
    pub fn new(inner: S) -> Result<Self> {
        Self::with_replacements(inner, Replacements::default())
    }

    pub fn with_replacements(inner: S, replacements: Replacements) -> Result<Self> {
        let filters = replacements
            .iter()
            .map(|(bad, replacement)| -> Result<(Regex, String)> {
                let pattern = RegexBuilder::new(&regex::escape(bad))
                    .case_insensitive(true)
                    .build()?;
                Ok((pattern, replacement.to_string()))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { inner, filters })
    }
}

impl<S: TextSource> TextSource for ProfanityFilterDecorator<S> {
    fn text(&self) -> String {
        let mut text = self.inner.text();
        for (pattern, replacement) in &self.filters {
            text = pattern
                .replace_all(&text, NoExpand(replacement))
                .into_owned();
        }
        trace!(%text, "filtered profanity");
        text
    }
}
