//! Secret word list
//!
//! Embeds the default list at build time. A word file can replace it at
//! startup (see `config`). Lists are de-duplicated case-insensitively so
//! every distinct word has the same chance of being drawn.

use once_cell::sync::Lazy;
use rand::Rng;
use std::collections::HashSet;
use std::io;
use std::path::Path;

/// Embedded default list, one word per line
static WORDS_DATA: &str = include_str!("../../data/words.txt");

/// Parsed default list, built on first use
static DEFAULT_WORDS: Lazy<WordList> = Lazy::new(|| WordList::parse(WORDS_DATA));

/// An ordered list of candidate secret words
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// The built-in word list.
    pub fn default_list() -> Self {
        DEFAULT_WORDS.clone()
    }

    /// Build a list from already-split words, applying the same cleanup as `parse`.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_string())
            .filter(|w| !w.is_empty())
            .filter(|w| seen.insert(w.to_lowercase()))
            .collect();
        Self { words }
    }

    /// Parse a word file: one word per line, `#` starts a comment line.
    pub fn parse(text: &str) -> Self {
        Self::from_words(
            text.lines()
                .map(str::trim)
                .filter(|line| !line.starts_with('#')),
        )
    }

    /// Read and parse a word file.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::parse(&text))
    }

    /// Draw one word uniformly at random. `None` when the list is empty.
    pub fn pick<R: Rng>(&self, rng: &mut R) -> Option<&str> {
        if self.is_empty() {
            return None;
        }
        let index = rng.random_range(0..self.words.len());
        Some(self.words[index].as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
