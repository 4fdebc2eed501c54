//! Flagging listed words in item text.

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::{collections::HashSet, path::Path};

use crate::{error::AppError, model::settings::WordMatch};

/// A case-insensitive list of words to flag.
#[derive(Debug, Clone)]
pub struct WordFilter {
    words: Vec<String>,
    mode: WordMatch,
    whole_word: Option<Regex>,
}

impl WordFilter {
    /// Builds a filter from words. Blank entries and duplicates are dropped.
    pub fn new<I, S>(words: I, mode: WordMatch) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        let words: Vec<String> = words
            .into_iter()
            .map(|word| word.as_ref().trim().to_lowercase())
            .filter(|word| !word.is_empty() && seen.insert(word.clone()))
            .collect();

        let whole_word = match mode {
            WordMatch::WholeWord if !words.is_empty() => {
                let alternatives: Vec<String> = words.iter().map(|w| whole_word_pattern(w)).collect();
                Some(
                    RegexBuilder::new(&format!("(?:{})", alternatives.join("|")))
                        .case_insensitive(true)
                        .build()?,
                )
            }
            _ => None,
        };

        Ok(Self {
            words,
            mode,
            whole_word,
        })
    }

    /// Loads a word list file with one word per line.
    pub fn load(path: &Path, mode: WordMatch) -> Result<Self, AppError> {
        let raw = std::fs::read_to_string(path)?;

        Self::new(raw.lines(), mode).map_err(|e| {
            AppError::ConfigErr(crate::error::config::ConfigError::InvalidSettings(format!(
                "word list {} cannot be compiled: {}",
                path.display(),
                e
            )))
        })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Distinct listed words found in `text`, in list order.
    pub fn matches(&self, text: &str) -> Vec<String> {
        match self.mode {
            WordMatch::Substring => {
                let text = text.to_lowercase();
                self.words
                    .iter()
                    .filter(|word| text.contains(word.as_str()))
                    .cloned()
                    .collect()
            }
            WordMatch::WholeWord => {
                let Some(regex) = &self.whole_word else {
                    return Vec::new();
                };
                let found: HashSet<String> = regex
                    .find_iter(text)
                    .map(|m| m.as_str().to_lowercase())
                    .collect();
                self.words
                    .iter()
                    .filter(|word| found.contains(*word))
                    .cloned()
                    .collect()
            }
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Pattern matching `word` only when it stands alone.
///
/// A word edge gets `\b`; a symbol edge such as the `$` of `$hit` gets `\B`, which
/// requires the neighbouring character to be a symbol, whitespace or the text edge.
fn whole_word_pattern(word: &str) -> String {
    let edge = |c: Option<char>| match c {
        Some(c) if !is_word_char(c) => r"\B",
        _ => r"\b",
    };

    format!(
        "{}{}{}",
        edge(word.chars().next()),
        regex::escape(word),
        edge(word.chars().next_back())
    )
}

#[derive(Deserialize)]
struct WordRecords {
    #[serde(rename = "RECORDS")]
    records: Vec<WordRecord>,
}

#[derive(Deserialize)]
struct WordRecord {
    word: String,
    language: String,
}

/// Words of one language from a `{"RECORDS": [{"word", "language"}]}` export.
pub fn extract_language(records_json: &str, language: &str) -> Result<Vec<String>, serde_json::Error> {
    let parsed: WordRecords = serde_json::from_str(records_json)?;

    Ok(parsed
        .records
        .into_iter()
        .filter(|record| record.language == language)
        .map(|record| record.word)
        .collect())
}
