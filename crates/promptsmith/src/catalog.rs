// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! The strategy catalog.
//!
//! An immutable registry mapping strategy identifiers to metadata and to a
//! pure text transformation. Two tiers exist: the basic catalog (everyday
//! rewrites) and the advanced catalog (research-derived techniques). The
//! catalog is populated once at startup and never mutated; declaration order
//! is stable and doubles as the selector's tie-break order.
//!
//! Expected-improvement figures are static descriptive metadata quoted from
//! the research the strategies derive from. They are never measured or
//! updated at runtime.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::strategies::{advanced, basic};

/// Catalog tier a strategy belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Everyday rewrites: clarity, specificity, structure.
    Basic,
    /// Research-derived techniques: ToT, Constitutional AI, Medprompt, ...
    Advanced,
}

/// Identifier for one rewriting strategy.
///
/// String forms are snake_case and stable; they are the caller-facing
/// selector used by the transport adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyId {
    /// Strip filler, state the task imperatively.
    Clarity,
    /// Append concrete requirements and constraints.
    Specificity,
    /// Ask for step-by-step reasoning before the answer.
    ChainOfThought,
    /// Provide an example response format.
    FewShot,
    /// Ask for an explicitly structured response.
    StructuredOutput,
    /// Assign a domain-expert role.
    RoleBased,
    /// Explore and evaluate multiple reasoning branches.
    TreeOfThoughts,
    /// Self-critique against fixed safety/helpfulness principles.
    ConstitutionalAi,
    /// APE-discovered systematic instruction patterns.
    AutomaticPromptEngineer,
    /// Generate an optimal prompt before executing it.
    MetaPrompting,
    /// Iterative critique-then-improve loop with a stop condition.
    SelfRefine,
    /// Natural-language feedback treated as gradients.
    Textgrad,
    /// Composed few-shot + chain-of-thought + self-consistency.
    Medprompt,
    /// Feedback-driven prompt evolution.
    PromptWizard,
}

impl StrategyId {
    /// Stable snake_case string form of this id.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clarity => "clarity",
            Self::Specificity => "specificity",
            Self::ChainOfThought => "chain_of_thought",
            Self::FewShot => "few_shot",
            Self::StructuredOutput => "structured_output",
            Self::RoleBased => "role_based",
            Self::TreeOfThoughts => "tree_of_thoughts",
            Self::ConstitutionalAi => "constitutional_ai",
            Self::AutomaticPromptEngineer => "automatic_prompt_engineer",
            Self::MetaPrompting => "meta_prompting",
            Self::SelfRefine => "self_refine",
            Self::Textgrad => "textgrad",
            Self::Medprompt => "medprompt",
            Self::PromptWizard => "prompt_wizard",
        }
    }

    /// The tier this strategy belongs to.
    pub fn tier(&self) -> Tier {
        match self {
            Self::Clarity
            | Self::Specificity
            | Self::ChainOfThought
            | Self::FewShot
            | Self::StructuredOutput
            | Self::RoleBased => Tier::Basic,
            _ => Tier::Advanced,
        }
    }
}

impl core::fmt::Display for StrategyId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for StrategyId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        ALL_STRATEGIES
            .iter()
            .find(|d| d.id.as_str() == s)
            .map(|d| d.id)
            .ok_or_else(|| Error::unknown_strategy(s))
    }
}

/// Descriptor for one rewriting strategy.
///
/// `transform` is a pure function `&str -> String`; `rationale` is a static
/// explanation of what the transform changes. Neither ever varies at runtime.
#[derive(Clone, Copy)]
pub struct Strategy {
    /// Unique id, stable across the catalog.
    pub id: StrategyId,
    /// Human-readable name. Never used in decision logic.
    pub display_name: &'static str,
    /// Human-readable summary. Never used in decision logic.
    pub description: &'static str,
    /// Static expected-improvement metadata from the source research.
    pub expected_improvement: &'static str,
    /// Static confidence figure from the source research.
    pub confidence: f64,
    transform: fn(&str) -> String,
    rationale: &'static str,
}

impl Strategy {
    /// Apply this strategy's rewrite to a prompt.
    ///
    /// Pure and total over any non-empty input string.
    pub fn transform(&self, prompt: &str) -> String {
        (self.transform)(prompt)
    }

    /// Explanation of what the transform changes.
    pub fn rationale(&self) -> &'static str {
        self.rationale
    }
}

impl core::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Strategy")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .finish_non_exhaustive()
    }
}

/// All strategies in declaration order: the basic six, then the advanced
/// eight. This order is the selector's tie-break order.
const ALL_STRATEGIES: &[Strategy] = &[
    Strategy {
        id: StrategyId::Clarity,
        display_name: "Clarity",
        description: "Removes ambiguity and states the task directly with explicit response guidance.",
        expected_improvement: "Clearer task framing, fewer off-target responses",
        confidence: 0.80,
        transform: basic::clarity,
        rationale: "Improved clarity by labeling the task and adding specific response instructions.",
    },
    Strategy {
        id: StrategyId::Specificity,
        display_name: "Specificity",
        description: "Appends a requirements block asking for concrete length, scope, and audience detail.",
        expected_improvement: "More concrete, bounded responses",
        confidence: 0.80,
        transform: basic::specificity,
        rationale: "Added specific requirements, constraints, and scope detail.",
    },
    Strategy {
        id: StrategyId::ChainOfThought,
        display_name: "Chain of Thought",
        description: "Instructs the model to reason step by step before answering.",
        expected_improvement: "Large gains on multi-step reasoning tasks",
        confidence: 0.85,
        transform: basic::chain_of_thought,
        rationale: "Added chain-of-thought instructions to guide the model's reasoning process.",
    },
    Strategy {
        id: StrategyId::FewShot,
        display_name: "Few-Shot Format",
        description: "Provides an example response format to anchor structure and content.",
        expected_improvement: "More consistent response structure",
        confidence: 0.78,
        transform: basic::few_shot,
        rationale: "Added an example format to guide the response structure and content.",
    },
    Strategy {
        id: StrategyId::StructuredOutput,
        display_name: "Structured Output",
        description: "Requests an explicit overview/analysis/takeaways response structure.",
        expected_improvement: "Organized, predictable output",
        confidence: 0.78,
        transform: basic::structured_output,
        rationale: "Added explicit structure for organized and predictable output.",
    },
    Strategy {
        id: StrategyId::RoleBased,
        display_name: "Role-Based",
        description: "Assigns a domain-expert role inferred from the prompt's subject matter.",
        expected_improvement: "Deeper domain-specific responses",
        confidence: 0.76,
        transform: basic::role_based,
        rationale: "Assigned a specific expert role to leverage domain expertise.",
    },
    Strategy {
        id: StrategyId::TreeOfThoughts,
        display_name: "Tree of Thoughts",
        description: "Explores multiple independent reasoning branches with evaluation and backtracking.",
        expected_improvement: "Up to 74% success rate on complex reasoning tasks",
        confidence: 0.85,
        transform: advanced::tree_of_thoughts,
        rationale: "Implemented multi-path exploration with evaluation and backtracking.",
    },
    Strategy {
        id: StrategyId::ConstitutionalAi,
        display_name: "Constitutional AI",
        description: "Adds a self-critique-and-revise loop against fixed safety and helpfulness principles.",
        expected_improvement: "Safer, better-aligned responses without helpfulness loss",
        confidence: 0.90,
        transform: advanced::constitutional_ai,
        rationale: "Applied constitutional principles with a self-critique loop.",
    },
    Strategy {
        id: StrategyId::AutomaticPromptEngineer,
        display_name: "Automatic Prompt Engineer",
        description: "Applies APE-discovered instruction patterns matched to the detected task type.",
        expected_improvement: "Human-level instruction quality",
        confidence: 0.88,
        transform: advanced::automatic_prompt_engineer,
        rationale: "Applied APE-discovered optimal instruction patterns.",
    },
    Strategy {
        id: StrategyId::MetaPrompting,
        display_name: "Meta-Prompting",
        description: "Has the model generate an optimized prompt for the task before executing it.",
        expected_improvement: "Resolves ambiguity in vague or underspecified requests",
        confidence: 0.87,
        transform: advanced::meta_prompting,
        rationale: "Used prompt self-generation to clarify and structure the task before execution.",
    },
    Strategy {
        id: StrategyId::SelfRefine,
        display_name: "Self-Refine",
        description: "Iterative critique-then-improve loop that stops when no further improvement is found.",
        expected_improvement: "20% absolute improvement via iterative feedback",
        confidence: 0.89,
        transform: advanced::self_refine,
        rationale: "Implemented iterative refinement with a self-feedback loop and stop condition.",
    },
    Strategy {
        id: StrategyId::Textgrad,
        display_name: "TEXTGRAD",
        description: "Treats natural-language feedback as gradients over the prompt text.",
        expected_improvement: "Gradient-guided clarity and specificity gains",
        confidence: 0.86,
        transform: advanced::textgrad,
        rationale: "Applied natural-language gradients to optimize the prompt.",
    },
    Strategy {
        id: StrategyId::Medprompt,
        display_name: "Medprompt",
        description: "Composes few-shot, chain-of-thought, ensembling, and self-consistency in a fixed order.",
        expected_improvement: "90%+ accuracy on classification benchmarks",
        confidence: 0.92,
        transform: advanced::medprompt,
        rationale: "Combined few-shot, chain-of-thought, ensemble, and self-consistency techniques.",
    },
    Strategy {
        id: StrategyId::PromptWizard,
        display_name: "PromptWizard",
        description: "Feedback-driven prompt evolution over synthetic critique generations.",
        expected_improvement: "Self-improving prompts from usage feedback",
        confidence: 0.88,
        transform: advanced::prompt_wizard,
        rationale: "Implemented feedback-driven prompt evolution.",
    },
];

/// Default strategy per tier when no selection signal matches.
const BASIC_DEFAULT: StrategyId = StrategyId::Clarity;
const ADVANCED_DEFAULT: StrategyId = StrategyId::TreeOfThoughts;

/// Immutable registry of all rewriting strategies.
///
/// Constructed once at startup; safe to share across threads by reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct Catalog;

impl Catalog {
    /// Create the catalog.
    pub fn new() -> Self {
        Self
    }

    /// All strategies in a tier, in declaration order.
    pub fn list(&self, tier: Tier) -> impl Iterator<Item = &'static Strategy> {
        ALL_STRATEGIES.iter().filter(move |d| d.id.tier() == tier)
    }

    /// Look up a strategy by id.
    pub fn get(&self, id: StrategyId) -> &'static Strategy {
        // Every StrategyId variant has a catalog entry; the unreachable arm
        // is guarded by `test_every_id_has_an_entry`.
        ALL_STRATEGIES
            .iter()
            .find(|d| d.id == id)
            .expect("catalog covers every StrategyId")
    }

    /// Resolve a caller-supplied id string within a tier.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownStrategy`] if the id is unknown or belongs to the
    /// other tier.
    pub fn resolve(&self, tier: Tier, id: &str) -> Result<&'static Strategy> {
        let parsed: StrategyId = id.parse()?;
        if parsed.tier() != tier {
            return Err(Error::unknown_strategy(id));
        }
        Ok(self.get(parsed))
    }

    /// The fallback strategy for a tier.
    pub fn default_for(&self, tier: Tier) -> &'static Strategy {
        match tier {
            Tier::Basic => self.get(BASIC_DEFAULT),
            Tier::Advanced => self.get(ADVANCED_DEFAULT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_sizes() {
        let catalog = Catalog::new();
        assert_eq!(catalog.list(Tier::Basic).count(), 6);
        assert_eq!(catalog.list(Tier::Advanced).count(), 8);
    }

    #[test]
    fn test_ids_unique() {
        let mut seen = std::collections::HashSet::new();
        for d in ALL_STRATEGIES {
            assert!(seen.insert(d.id.as_str()), "duplicate id {}", d.id);
        }
    }

    #[test]
    fn test_every_id_has_an_entry() {
        let catalog = Catalog::new();
        for d in ALL_STRATEGIES {
            assert_eq!(catalog.get(d.id).id, d.id);
        }
    }

    #[test]
    fn test_resolve_in_tier() {
        let catalog = Catalog::new();
        assert_eq!(
            catalog.resolve(Tier::Basic, "clarity").unwrap().id,
            StrategyId::Clarity
        );
        assert_eq!(
            catalog.resolve(Tier::Advanced, "medprompt").unwrap().id,
            StrategyId::Medprompt
        );
    }

    #[test]
    fn test_resolve_rejects_cross_tier() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.resolve(Tier::Basic, "tree_of_thoughts"),
            Err(Error::UnknownStrategy(_))
        ));
        assert!(matches!(
            catalog.resolve(Tier::Advanced, "clarity"),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_resolve_rejects_unknown() {
        let catalog = Catalog::new();
        assert!(matches!(
            catalog.resolve(Tier::Basic, "mind_reading"),
            Err(Error::UnknownStrategy(_))
        ));
    }

    #[test]
    fn test_defaults() {
        let catalog = Catalog::new();
        assert_eq!(catalog.default_for(Tier::Basic).id, StrategyId::Clarity);
        assert_eq!(
            catalog.default_for(Tier::Advanced).id,
            StrategyId::TreeOfThoughts
        );
    }

    #[test]
    fn test_id_round_trip() {
        for d in ALL_STRATEGIES {
            let parsed: StrategyId = d.id.as_str().parse().unwrap();
            assert_eq!(parsed, d.id);
        }
    }

    #[test]
    fn test_id_serde_matches_as_str() {
        for d in ALL_STRATEGIES {
            let json = serde_json::to_string(&d.id).unwrap();
            assert_eq!(json, format!("\"{}\"", d.id.as_str()));
        }
    }

    #[test]
    fn test_transforms_total_over_non_empty_input() {
        let catalog = Catalog::new();
        for tier in [Tier::Basic, Tier::Advanced] {
            for strategy in catalog.list(tier) {
                let out = strategy.transform("x");
                assert!(!out.is_empty(), "{} produced empty output", strategy.id);
            }
        }
    }
}
