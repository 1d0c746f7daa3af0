use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;
use tokio::fs;

/// Seed list of candidate target words
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Load a word list from a file, one word per line
    pub async fn load<P: AsRef<Path>>(path: P, word_length: usize) -> Result<Self> {
        let content = fs::read_to_string(path).await?;
        let list = Self::parse(&content, word_length);

        tracing::info!("Loaded {} words of length {}", list.len(), word_length);

        Ok(list)
    }

    /// Keep ASCII-alphabetic lines of exactly `word_length` letters, uppercased
    /// and de-duplicated, in sorted order
    pub fn parse(content: &str, word_length: usize) -> Self {
        let words: BTreeSet<String> = content
            .lines()
            .map(|line| line.trim().to_uppercase())
            .filter(|word| word.len() == word_length && word.chars().all(|c| c.is_ascii_alphabetic()))
            .collect();

        Self {
            words: words.into_iter().collect(),
        }
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
