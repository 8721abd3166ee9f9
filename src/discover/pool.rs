//! Candidate pool for random handle sampling

use super::words::builtin_words;
use crate::error::{LensFinderError, Result};
use crate::handle::HandleValidator;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Immutable list of candidate handles.
///
/// Cloning is cheap; every clone shares the same words. Only entries that are
/// valid handles (after lowercasing and trimming) are kept, so sampling never
/// sends an invalid handle to the oracle.
#[derive(Debug, Clone)]
pub struct CandidatePool {
    words: Arc<[String]>,
}

/// Accepted word list file layouts
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum WordListFile {
    Named {
        #[serde(rename = "commonNamesAndWords")]
        words: Vec<String>,
    },
    Plain(Vec<String>),
}

impl CandidatePool {
    /// Build a pool from the built-in word list
    pub fn builtin() -> Result<Self> {
        Self::from_words(builtin_words())
    }

    /// Build a pool from arbitrary words, dropping entries that are not valid handles
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let validator = HandleValidator::default();
        let mut dropped = 0usize;

        let words: Vec<String> = words
            .into_iter()
            .filter_map(|word| {
                let handle = validator.normalize(word.as_ref().trim());
                if validator.is_valid(&handle) {
                    Some(handle)
                } else {
                    dropped += 1;
                    None
                }
            })
            .collect();

        if words.is_empty() {
            return Err(LensFinderError::config(
                "Candidate word list has no valid handles (5-31 characters of a-z, 0-9, - and _)",
            ));
        }

        if dropped > 0 {
            tracing::debug!(kept = words.len(), dropped, "Dropped invalid candidate words");
        }

        Ok(Self {
            words: words.into(),
        })
    }

    /// Parse a JSON word list: either `{"commonNamesAndWords": [...]}` or a bare array
    pub fn from_json_str(content: &str) -> Result<Self> {
        let file: WordListFile = serde_json::from_str(content)
            .map_err(|e| LensFinderError::parse(e.to_string(), None))?;

        match file {
            WordListFile::Named { words } | WordListFile::Plain(words) => Self::from_words(words),
        }
    }

    /// Load a JSON word list from disk
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LensFinderError::io(e.to_string(), Some(path.to_string_lossy().to_string()))
        })?;

        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}
