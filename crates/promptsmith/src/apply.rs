// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Strategy application.
//!
//! The applier resolves a strategy within a tier, runs its transform, and
//! packages the result with provenance metadata. Transforms are pure and
//! total, so there are no retries and no partial failures.

use serde::Serialize;
use smallvec::SmallVec;

use crate::catalog::{Catalog, StrategyId, Tier};
use crate::error::{Error, Result};
use crate::features::PromptFeatures;

/// Growth ratio above which the rewrite counts as added instructions.
const GROWTH_THRESHOLD: f64 = 1.1;

/// Result of applying one strategy to one prompt.
///
/// Constructed once per invocation, returned, never mutated or cached.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Optimization {
    /// The prompt as supplied by the caller.
    pub original: String,
    /// The rewritten prompt.
    pub optimized: String,
    /// The strategy that was applied.
    pub strategy: StrategyId,
    /// Explanation of what the transform changed.
    pub rationale: &'static str,
    /// Static expected-improvement metadata for display.
    pub expected_improvement: &'static str,
    /// Static confidence figure for display.
    pub confidence: f64,
    /// Deterministic summary of the structural changes made.
    pub improvements: SmallVec<[&'static str; 8]>,
}

/// Applies catalog strategies to prompts.
#[derive(Debug, Clone, Copy)]
pub struct Applier<'a> {
    catalog: &'a Catalog,
}

impl<'a> Applier<'a> {
    /// Create an applier over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Apply a strategy (by id string) within a tier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] on empty prompt text;
    /// [`Error::UnknownStrategy`] if the id is not in the tier's catalog.
    pub fn apply(&self, prompt: &str, tier: Tier, id: &str) -> Result<Optimization> {
        let strategy = self.catalog.resolve(tier, id)?;
        self.apply_strategy(prompt, strategy.id)
    }

    /// Apply an already-resolved strategy id.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] on empty prompt text.
    pub fn apply_strategy(&self, prompt: &str, id: StrategyId) -> Result<Optimization> {
        if prompt.trim().is_empty() {
            return Err(Error::invalid_input("prompt is empty"));
        }

        let strategy = self.catalog.get(id);
        let optimized = strategy.transform(prompt);
        let improvements = list_improvements(prompt, &optimized);

        Ok(Optimization {
            original: prompt.to_string(),
            optimized,
            strategy: strategy.id,
            rationale: strategy.rationale(),
            expected_improvement: strategy.expected_improvement,
            confidence: strategy.confidence,
            improvements,
        })
    }
}

/// Summarize what the rewrite changed, from the text alone.
///
/// Deterministic: marker checks run in a fixed order and only fire for
/// markers the rewrite introduced.
fn list_improvements(original: &str, optimized: &str) -> SmallVec<[&'static str; 8]> {
    let orig = PromptFeatures::extract(original);
    let opt = PromptFeatures::extract(optimized);
    let mut improvements = SmallVec::new();

    if optimized.len() as f64 > original.len() as f64 * GROWTH_THRESHOLD {
        improvements.push("Added detailed instructions or context.");
    }
    if opt.contains("step-by-step") && !orig.contains("step-by-step") {
        improvements.push("Incorporated step-by-step reasoning (Chain-of-Thought).");
    }
    if (opt.contains("example format") || opt.contains("example:"))
        && !(orig.contains("example format") || orig.contains("example:"))
    {
        improvements.push("Included example formats for structured responses (Few-Shot).");
    }
    if (opt.contains("structure your response as follows") || opt.contains("output format"))
        && !(orig.contains("structure your response as follows") || orig.contains("output format"))
    {
        improvements.push("Defined explicit output structure.");
    }
    if opt.contains("as a ") && !orig.contains("as a ") && opt.contains("expertise") {
        improvements.push("Applied role-based context for specialized expertise.");
    }
    if opt.contains("constraints:") && !orig.contains("constraints:") {
        improvements.push("Added explicit constraints to guide the response.");
    }
    if opt.contains("self-critique") && !orig.contains("self-critique") {
        improvements.push("Added a self-critique pass against fixed principles.");
    }
    if opt.contains("multiple solution paths") && !orig.contains("multiple solution paths") {
        improvements.push("Explored multiple reasoning branches with evaluation.");
    }

    improvements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_basic_strategy() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        let result = applier
            .apply("summarize the incident report", Tier::Basic, "clarity")
            .unwrap();

        assert_eq!(result.strategy, StrategyId::Clarity);
        assert_eq!(result.original, "summarize the incident report");
        assert_ne!(result.optimized, result.original);
        assert!(!result.rationale.is_empty());
    }

    #[test]
    fn test_apply_advanced_strategy() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        let result = applier
            .apply("triage the oncall queue", Tier::Advanced, "self_refine")
            .unwrap();

        assert_eq!(result.strategy, StrategyId::SelfRefine);
        assert!(result.optimized.contains("triage the oncall queue"));
        assert_eq!(result.expected_improvement, "20% absolute improvement via iterative feedback");
    }

    #[test]
    fn test_apply_unknown_strategy() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        assert!(matches!(
            applier.apply("a prompt", Tier::Basic, "telepathy"),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_apply_wrong_tier() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        assert!(matches!(
            applier.apply("a prompt", Tier::Basic, "medprompt"),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_apply_empty_prompt() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        assert!(matches!(
            applier.apply("", Tier::Basic, "clarity"),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            applier.apply_strategy(" \n", StrategyId::Clarity),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_improvements_detect_chain_of_thought() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        let result = applier
            .apply("how do transformers work", Tier::Basic, "chain_of_thought")
            .unwrap();
        assert!(result
            .improvements
            .contains(&"Incorporated step-by-step reasoning (Chain-of-Thought)."));
    }

    #[test]
    fn test_improvements_detect_growth() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        let result = applier
            .apply("compare these vendors", Tier::Basic, "structured_output")
            .unwrap();
        assert!(result
            .improvements
            .contains(&"Added detailed instructions or context."));
        assert!(result
            .improvements
            .contains(&"Defined explicit output structure."));
    }

    #[test]
    fn test_every_strategy_produces_non_empty_output() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        for tier in [Tier::Basic, Tier::Advanced] {
            for strategy in catalog.list(tier) {
                let result = applier
                    .apply_strategy("outline a rollout plan", strategy.id)
                    .unwrap();
                assert!(!result.optimized.is_empty(), "{} empty", strategy.id);
            }
        }
    }

    #[test]
    fn test_result_is_deterministic() {
        let catalog = Catalog::new();
        let applier = Applier::new(&catalog);
        let a = applier.apply("draft an faq", Tier::Basic, "few_shot").unwrap();
        let b = applier.apply("draft an faq", Tier::Basic, "few_shot").unwrap();
        assert_eq!(a, b);
    }
}
