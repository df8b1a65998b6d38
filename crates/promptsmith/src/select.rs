// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Strategy selection.
//!
//! Selection is data-driven: each strategy has a keyword rule, and a few have
//! structural rules over the derived feature vector. Affinity is the weighted
//! count of matched signals; the highest-affinity strategy in the requested
//! tier wins, ties breaking by catalog declaration order. Zero affinity falls
//! back to the tier default. Deterministic given identical inputs.

use smallvec::SmallVec;

use crate::catalog::{Catalog, StrategyId, Tier};
use crate::error::{Error, Result};
use crate::features::PromptFeatures;

/// Weight of one matched keyword signal.
///
/// Keyword evidence outweighs structural evidence so that an explicit topic
/// match (e.g. "classify" -> medprompt) beats the short-prompt signal that
/// would otherwise route everything terse to meta-prompting.
const KEYWORD_WEIGHT: u32 = 2;

/// Weight of one matched structural signal.
const STRUCTURAL_WEIGHT: u32 = 1;

/// Prompts with fewer words than this are treated as underspecified.
const SHORT_PROMPT_WORDS: usize = 10;

/// One affinity rule: keywords that vote for a strategy.
struct AffinityRule {
    strategy: StrategyId,
    keywords: &'static [&'static str],
}

/// Keyword rules for the basic tier.
const BASIC_RULES: &[AffinityRule] = &[
    AffinityRule {
        strategy: StrategyId::Clarity,
        keywords: &["help", "need", "want", "unclear"],
    },
    AffinityRule {
        strategy: StrategyId::Specificity,
        keywords: &["explain", "describe", "detail", "specific"],
    },
    AffinityRule {
        strategy: StrategyId::ChainOfThought,
        keywords: &["solve", "why", "how", "calculate", "reason", "logic"],
    },
    AffinityRule {
        strategy: StrategyId::FewShot,
        keywords: &["example", "sample", "similar to", "like this"],
    },
    AffinityRule {
        strategy: StrategyId::StructuredOutput,
        keywords: &["list", "table", "json", "csv", "sections", "report"],
    },
    AffinityRule {
        strategy: StrategyId::RoleBased,
        keywords: &["expert", "act as", "professional", "advise"],
    },
];

/// Keyword rules for the advanced tier.
const ADVANCED_RULES: &[AffinityRule] = &[
    AffinityRule {
        strategy: StrategyId::TreeOfThoughts,
        keywords: &["solve", "puzzle", "plan", "design", "architecture", "optimize"],
    },
    AffinityRule {
        strategy: StrategyId::ConstitutionalAi,
        keywords: &["ethical", "safe", "harm", "bias"],
    },
    AffinityRule {
        strategy: StrategyId::AutomaticPromptEngineer,
        keywords: &["analyze", "systematic", "comprehensive"],
    },
    AffinityRule {
        strategy: StrategyId::MetaPrompting,
        keywords: &["vague", "unclear", "not sure"],
    },
    AffinityRule {
        strategy: StrategyId::SelfRefine,
        keywords: &["improve", "refine", "iterate", "polish"],
    },
    AffinityRule {
        strategy: StrategyId::Textgrad,
        keywords: &["feedback", "gradient", "tune"],
    },
    AffinityRule {
        strategy: StrategyId::Medprompt,
        keywords: &["accurate", "precise", "exact", "medical", "classify", "categorize", "category"],
    },
    AffinityRule {
        strategy: StrategyId::PromptWizard,
        keywords: &["evolve", "adapt", "learn from"],
    },
];

/// Structural affinity signals beyond plain keyword matches.
fn structural_affinity(strategy: StrategyId, features: &PromptFeatures) -> u32 {
    match strategy {
        // Terse or interrogative prompts benefit from prompt regeneration.
        StrategyId::MetaPrompting
            if features.word_count < SHORT_PROMPT_WORDS || features.has_question =>
        {
            STRUCTURAL_WEIGHT
        }
        _ => 0,
    }
}

/// Chooses the best-matching strategy for a prompt within a tier.
#[derive(Debug, Clone, Copy)]
pub struct Selector<'a> {
    catalog: &'a Catalog,
}

impl<'a> Selector<'a> {
    /// Create a selector over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Select the best-matching strategy id for a prompt.
    ///
    /// A `hint` short-circuits scoring entirely but is still validated
    /// against the requested tier.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidInput`] on empty prompt text;
    /// [`Error::UnknownStrategy`] if `hint` is not in the tier's catalog.
    pub fn select(&self, prompt: &str, tier: Tier, hint: Option<&str>) -> Result<StrategyId> {
        if prompt.trim().is_empty() {
            return Err(Error::invalid_input("prompt is empty"));
        }
        if let Some(id) = hint {
            return Ok(self.catalog.resolve(tier, id)?.id);
        }

        let features = PromptFeatures::extract(prompt);
        let scores = self.affinities(tier, &features);

        // First-declared wins ties: only a strictly greater score replaces
        // the current best.
        let mut best: Option<(StrategyId, u32)> = None;
        for (strategy, score) in scores {
            if score > 0 && best.map_or(true, |(_, s)| score > s) {
                best = Some((strategy, score));
            }
        }

        Ok(best
            .map(|(strategy, _)| strategy)
            .unwrap_or_else(|| self.catalog.default_for(tier).id))
    }

    /// Affinity score per strategy, in catalog declaration order.
    fn affinities(&self, tier: Tier, features: &PromptFeatures) -> SmallVec<[(StrategyId, u32); 8]> {
        let rules = match tier {
            Tier::Basic => BASIC_RULES,
            Tier::Advanced => ADVANCED_RULES,
        };
        rules
            .iter()
            .map(|rule| {
                let score = features.matched(rule.keywords) * KEYWORD_WEIGHT
                    + structural_affinity(rule.strategy, features);
                (rule.strategy, score)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_selects_medprompt() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let id = selector
            .select("classify customer support tickets", Tier::Advanced, None)
            .unwrap();
        assert_eq!(id, StrategyId::Medprompt);
    }

    #[test]
    fn test_architecture_selects_tree_of_thoughts() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let id = selector
            .select(
                "design a scalable microservices architecture",
                Tier::Advanced,
                None,
            )
            .unwrap();
        assert_eq!(id, StrategyId::TreeOfThoughts);
    }

    #[test]
    fn test_safety_selects_constitutional_ai() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let id = selector
            .select(
                "review this moderation policy for harmful or biased outcomes across regions",
                Tier::Advanced,
                None,
            )
            .unwrap();
        assert_eq!(id, StrategyId::ConstitutionalAi);
    }

    #[test]
    fn test_basic_help_selects_clarity() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let id = selector.select("help me code", Tier::Basic, None).unwrap();
        assert_eq!(id, StrategyId::Clarity);
    }

    #[test]
    fn test_no_signal_falls_back_to_tier_default() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        // Long enough to avoid the short-prompt structural signal, with no
        // keyword from any rule.
        let prompt = "the quarterly numbers were shared with the board yesterday afternoon during lunch";
        assert_eq!(
            selector.select(prompt, Tier::Basic, None).unwrap(),
            StrategyId::Clarity
        );
        assert_eq!(
            selector.select(prompt, Tier::Advanced, None).unwrap(),
            StrategyId::TreeOfThoughts
        );
    }

    #[test]
    fn test_short_prompt_selects_meta_prompting() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let id = selector
            .select("summarize the memo", Tier::Advanced, None)
            .unwrap();
        assert_eq!(id, StrategyId::MetaPrompting);
    }

    #[test]
    fn test_hint_short_circuits() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let id = selector
            .select("classify these tickets", Tier::Advanced, Some("self_refine"))
            .unwrap();
        assert_eq!(id, StrategyId::SelfRefine);
    }

    #[test]
    fn test_hint_validated_against_tier() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        assert!(matches!(
            selector.select("anything", Tier::Basic, Some("medprompt")),
            Err(Error::UnknownStrategy(_))
        ));
        assert!(matches!(
            selector.select("anything", Tier::Advanced, Some("made_up")),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_selection_never_leaves_tier() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let prompts = [
            "classify customer support tickets",
            "help me code",
            "solve this puzzle",
            "improve the draft",
            "x",
        ];
        for tier in [Tier::Basic, Tier::Advanced] {
            for prompt in prompts {
                let id = selector.select(prompt, tier, None).unwrap();
                assert_eq!(id.tier(), tier, "{id} escaped {tier:?}");
            }
        }
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        assert!(matches!(
            selector.select("  ", Tier::Basic, None),
            Err(Error::InvalidInput(_))
        ));
    }

    #[test]
    fn test_deterministic() {
        let catalog = Catalog::new();
        let selector = Selector::new(&catalog);
        let a = selector.select("plan a migration", Tier::Advanced, None).unwrap();
        let b = selector.select("plan a migration", Tier::Advanced, None).unwrap();
        assert_eq!(a, b);
    }
}
