// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Prompt quality analysis.
//!
//! A fixed, ordered list of rule checks is evaluated against the prompt.
//! Each triggered rule appends one issue and one suggestion and subtracts a
//! fixed weight from a starting score of 100, floored at 0. Rule order is
//! part of the contract: re-analyzing the same prompt always yields an
//! identical report, including suggestion ordering.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::{Error, Result};
use crate::features::PromptFeatures;

/// Words that signal a vague, underspecified request.
const VAGUE_WORDS: &[&str] = &[
    "thing",
    "stuff",
    "something",
    "whatever",
    "somehow",
    "etc.",
    "and so on",
];

/// Imperative verbs that mark a clear instruction.
const ACTION_VERBS: &[&str] = &[
    "explain",
    "describe",
    "create",
    "analyze",
    "generate",
    "summarize",
    "list",
    "compare",
    "write",
    "develop",
    "classify",
    "design",
];

/// Markers that an output format was requested.
const FORMAT_MARKERS: &[&str] = &[
    "format",
    "structure",
    "output as",
    "in the form of",
    "as json",
    "bullet points",
    "table",
];

/// Measurable qualifiers that bound the response.
const CONSTRAINT_MARKERS: &[&str] = &[
    "at least",
    "at most",
    "no more than",
    "limit",
    "within",
    "maximum",
    "minimum",
    "exactly",
];

/// Markers that a tone or writing style was requested.
const TONE_MARKERS: &[&str] = &[
    "tone",
    "style",
    "professional",
    "casual",
    "friendly",
    "formal",
    "persuasive",
];

/// Prompts shorter than this many characters are flagged as too short.
const MIN_PROMPT_CHARS: usize = 30;

/// Prompts with fewer words than this lack context.
const MIN_CONTEXT_WORDS: usize = 15;

/// Issue kinds the analyzer can detect, in rule-check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Issue {
    /// Contains vague filler words (thing, stuff, something, ...).
    TooVague,
    /// Fewer than [`MIN_PROMPT_CHARS`] characters.
    TooShort,
    /// No clear action verb or instruction.
    NoActionVerb,
    /// Fewer than [`MIN_CONTEXT_WORDS`] words of context.
    MissingContext,
    /// No explicit output format instructions.
    NoOutputFormat,
    /// No measurable qualifier bounding the response.
    NoConstraints,
    /// No tone or style guidance.
    NoToneGuidance,
}

impl Issue {
    /// Score weight subtracted when this issue triggers.
    pub fn weight(&self) -> u32 {
        match self {
            Self::TooVague => 15,
            Self::TooShort => 12,
            Self::NoActionVerb => 12,
            Self::MissingContext => 10,
            Self::NoOutputFormat => 10,
            Self::NoConstraints => 8,
            Self::NoToneGuidance => 5,
        }
    }

    /// Improvement suggestion paired with this issue.
    pub fn suggestion(&self) -> &'static str {
        match self {
            Self::TooVague => "Replace vague words with specific terms or concrete examples.",
            Self::TooShort => "Add more context, details, and specific instructions.",
            Self::NoActionVerb => {
                "Start the prompt with a clear action verb (e.g., 'Generate', 'Analyze', 'Write')."
            }
            Self::MissingContext => "Provide background information, purpose, or scenario.",
            Self::NoOutputFormat => {
                "Specify the desired output format (e.g., 'as a JSON object', 'in bullet points')."
            }
            Self::NoConstraints => {
                "Add measurable constraints (length, scope, or count) to bound the response."
            }
            Self::NoToneGuidance => {
                "Specify the desired tone or writing style (e.g., 'professional', 'casual')."
            }
        }
    }

    /// Stable snake_case label for this issue.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TooVague => "too_vague",
            Self::TooShort => "too_short",
            Self::NoActionVerb => "no_action_verb",
            Self::MissingContext => "missing_context",
            Self::NoOutputFormat => "no_output_format",
            Self::NoConstraints => "no_constraints",
            Self::NoToneGuidance => "no_tone_guidance",
        }
    }
}

impl core::fmt::Display for Issue {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured diagnostic report for a prompt.
///
/// Fully determined by the input prompt string; no hidden state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    /// Quality score in 0..=100. Starts at 100, each detected issue
    /// subtracts its weight, floored at 0.
    pub score: u32,
    /// Detected issues, in rule-check order.
    pub issues: SmallVec<[Issue; 8]>,
    /// One suggestion per detected issue, same order as `issues`.
    pub suggestions: SmallVec<[&'static str; 8]>,
}

impl AnalysisReport {
    /// Whether the analyzer found no issues at all.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Whether a specific issue was detected.
    pub fn has_issue(&self, issue: Issue) -> bool {
        self.issues.contains(&issue)
    }
}

/// Analyze a prompt for common issues.
///
/// Deterministic and pure: the rule list below is evaluated in order, and
/// each triggered rule appends exactly one issue and one suggestion.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the prompt is empty or whitespace-only.
pub fn analyze(prompt: &str) -> Result<AnalysisReport> {
    if prompt.trim().is_empty() {
        return Err(Error::invalid_input("prompt is empty"));
    }

    let features = PromptFeatures::extract(prompt);
    let mut issues: SmallVec<[Issue; 8]> = SmallVec::new();

    if features.contains_any(VAGUE_WORDS) {
        issues.push(Issue::TooVague);
    }
    if features.char_count < MIN_PROMPT_CHARS {
        issues.push(Issue::TooShort);
    }
    if !features.contains_any(ACTION_VERBS) {
        issues.push(Issue::NoActionVerb);
    }
    if features.word_count < MIN_CONTEXT_WORDS {
        issues.push(Issue::MissingContext);
    }
    if !features.contains_any(FORMAT_MARKERS) {
        issues.push(Issue::NoOutputFormat);
    }
    if !features.has_digit() && !features.contains_any(CONSTRAINT_MARKERS) {
        issues.push(Issue::NoConstraints);
    }
    if !features.contains_any(TONE_MARKERS) {
        issues.push(Issue::NoToneGuidance);
    }

    let penalty: u32 = issues.iter().map(Issue::weight).sum();
    let suggestions = issues.iter().map(Issue::suggestion).collect();

    Ok(AnalysisReport {
        score: 100u32.saturating_sub(penalty),
        issues,
        suggestions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_prompt_rejected() {
        assert!(matches!(analyze(""), Err(Error::InvalidInput(_))));
        assert!(matches!(analyze("   \n\t"), Err(Error::InvalidInput(_))));
    }

    #[test]
    fn test_vague_short_prompt() {
        let report = analyze("write something about AI").unwrap();
        assert!(report.has_issue(Issue::TooVague));
        assert!(report.score < 50);
        // Rules 1, 2, 4, 5, 6, 7 trigger: 15+12+10+10+8+5 = 60.
        assert_eq!(report.score, 40);
    }

    #[test]
    fn test_issue_order_matches_rule_order() {
        let report = analyze("stuff").unwrap();
        assert_eq!(
            report.issues.as_slice(),
            &[
                Issue::TooVague,
                Issue::TooShort,
                Issue::NoActionVerb,
                Issue::MissingContext,
                Issue::NoOutputFormat,
                Issue::NoConstraints,
                Issue::NoToneGuidance,
            ]
        );
        assert_eq!(report.score, 100 - 72);
    }

    #[test]
    fn test_one_suggestion_per_issue() {
        let report = analyze("do a thing").unwrap();
        assert_eq!(report.issues.len(), report.suggestions.len());
        for (issue, suggestion) in report.issues.iter().zip(report.suggestions.iter()) {
            assert_eq!(issue.suggestion(), *suggestion);
        }
    }

    #[test]
    fn test_well_formed_prompt_is_clean() {
        let report = analyze(
            "Write a professional summary of the attached quarterly sales report \
             for the executive team, structured as 3 bullet points with a formal tone, \
             output as json, within 200 words.",
        )
        .unwrap();
        assert!(report.is_clean());
        assert_eq!(report.score, 100);
    }

    #[test]
    fn test_deterministic() {
        let a = analyze("summarize this article").unwrap();
        let b = analyze("summarize this article").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_score_floor() {
        // Weights sum to 72, so the floor is never hit today; the arithmetic
        // still must saturate rather than wrap.
        let report = analyze("x").unwrap();
        assert!(report.score <= 100);
    }

    #[test]
    fn test_constraint_rule_accepts_digits() {
        let long_tail = "covering each module of the data ingestion pipeline in depth";
        let with_digits = format!("Describe 3 failure modes {long_tail}");
        let report = analyze(&with_digits).unwrap();
        assert!(!report.has_issue(Issue::NoConstraints));

        let without = format!("Describe the failure modes {long_tail}");
        let report = analyze(&without).unwrap();
        assert!(report.has_issue(Issue::NoConstraints));
    }

    #[test]
    fn test_issue_display() {
        assert_eq!(Issue::TooVague.to_string(), "too_vague");
        assert_eq!(Issue::NoOutputFormat.to_string(), "no_output_format");
    }
}
