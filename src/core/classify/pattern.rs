use regex::Regex;

/// A named set of regular expressions that together form one piece of
/// evidence against a comment being prose.
#[derive(Debug)]
pub struct PatternGroup {
    name: &'static str,
    patterns: Vec<Regex>,
}

impl PatternGroup {
    /// Build a group from pattern sources.
    ///
    /// Panics on an invalid pattern. Groups are built from literals in
    /// static initializers, so a bad pattern is a programming error.
    pub fn new(name: &'static str, sources: &[&str]) -> Self {
        let patterns = sources
            .iter()
            .map(|source| {
                Regex::new(source)
                    .unwrap_or_else(|e| panic!("invalid pattern in group '{name}': {e}"))
            })
            .collect();
        Self { name, patterns }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// True if any pattern in the group matches.
    pub fn matches(&self, text: &str) -> bool {
        self.patterns.iter().any(|p| p.is_match(text))
    }
}

/// Length in characters rather than bytes.
///
/// Counts Unicode scalar values, not UTF-16 code units as a browser's
/// `String.length` does, so a character outside the BMP counts once here
/// and twice there.
pub(crate) fn char_len(text: &str) -> usize {
    text.chars().count()
}
