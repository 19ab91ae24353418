//! Parsing of `git config --get-regexp` style output.
//!
//! Each line is `<key> <value...>`. The first whitespace-separated token is
//! the key and the remaining tokens, rejoined with single spaces, form the
//! value. Lines with fewer than two tokens are dropped.

use std::collections::HashMap;

/// Raw key/value pairs read from a configuration source.
///
/// Keys are stored verbatim. When the same key appears more than once the
/// last value wins, but the entry keeps the position of its first
/// appearance, so iteration order is deterministic.
///
/// # Examples
///
/// ```
/// use gitsign_config::config::RawConfig;
///
/// let raw = RawConfig::parse("user.name Jane Doe\nuser.name Jane Q. Doe\nbroken\n");
/// assert_eq!(raw.len(), 1);
/// assert_eq!(raw.get("user.name"), Some("Jane Q. Doe"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawConfig {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RawConfig {
    /// Create an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse line-oriented configuration text.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        Self::from_lines(text.lines())
    }

    /// Parse a sequence of lines.
    pub fn from_lines<'a, I>(lines: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut raw = Self::new();
        for line in lines {
            if let Some((key, value)) = parse_line(line) {
                raw.insert(key, value);
            }
        }
        raw
    }

    /// Insert a key/value pair, replacing any value already stored under
    /// the exact same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.index.get(&key) {
            Some(&pos) => self.entries[pos].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
    }

    /// Look up a value by its exact key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.index
            .get(key)
            .map(|&pos| self.entries[pos].1.as_str())
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no keys were parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in order of first appearance.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Split a single line into key and value.
///
/// Returns `None` when the line has fewer than two whitespace-separated
/// tokens.
fn parse_line(line: &str) -> Option<(&str, String)> {
    let mut tokens = line.split_whitespace();
    let key = tokens.next()?;
    let first = tokens.next()?;

    let mut value = first.to_string();
    for token in tokens {
        value.push(' ');
        value.push_str(token);
    }
    Some((key, value))
}
