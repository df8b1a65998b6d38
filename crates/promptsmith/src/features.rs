// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Derived prompt features.
//!
//! Both the quality analyzer and the strategy selector decide from the same
//! small feature vector: a lowercased view of the prompt, its length buckets,
//! and keyword presence. Extracting it once keeps every rule check a cheap
//! substring test with no repeated allocation.

/// Feature vector derived from a raw prompt string.
///
/// Purely a function of the input text; extracting features from the same
/// string always yields the same vector.
#[derive(Debug, Clone)]
pub struct PromptFeatures {
    lower: String,
    /// Whitespace-separated word count.
    pub word_count: usize,
    /// Character count of the raw prompt.
    pub char_count: usize,
    /// Whether the prompt contains a question mark.
    pub has_question: bool,
}

impl PromptFeatures {
    /// Extract features from a prompt.
    pub fn extract(prompt: &str) -> Self {
        Self {
            lower: prompt.to_lowercase(),
            word_count: prompt.split_whitespace().count(),
            char_count: prompt.chars().count(),
            has_question: prompt.contains('?'),
        }
    }

    /// Lowercased view of the prompt.
    #[inline]
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Whether the prompt contains the given keyword (case-insensitive).
    #[inline]
    pub fn contains(&self, keyword: &str) -> bool {
        self.lower.contains(keyword)
    }

    /// Whether the prompt contains any keyword from the set.
    pub fn contains_any(&self, keywords: &[&str]) -> bool {
        keywords.iter().any(|k| self.lower.contains(k))
    }

    /// Count how many keywords from the set the prompt contains.
    pub fn matched(&self, keywords: &[&str]) -> u32 {
        keywords.iter().filter(|k| self.lower.contains(**k)).count() as u32
    }

    /// Whether the prompt contains any ASCII digit.
    pub fn has_digit(&self) -> bool {
        self.lower.bytes().any(|b| b.is_ascii_digit())
    }
}
