// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Advanced tier transforms.
//!
//! Research-derived rewrites: Tree of Thoughts, Constitutional AI, Automatic
//! Prompt Engineer, meta-prompting, Self-Refine, TEXTGRAD, Medprompt, and
//! PromptWizard. Each wraps the prompt in the scaffolding its technique
//! prescribes; all are total, deterministic string rewrites.

use crate::features::PromptFeatures;

/// Constitutional principles referenced by [`constitutional_ai`].
const PRINCIPLES: &[&str] = &[
    "Be helpful, harmless, and honest",
    "Avoid generating harmful or biased content",
    "Respect user privacy and confidentiality",
    "Provide accurate, verifiable information",
    "Acknowledge limitations and uncertainties",
];

/// APE-discovered instruction patterns, keyed by detected task type.
const APE_PATTERNS: &[(&str, &str)] = &[
    (
        "analysis",
        "Let's break this down systematically and analyze each component.",
    ),
    (
        "creative",
        "Let's explore this creatively while maintaining logical consistency.",
    ),
    (
        "technical",
        "Let's approach this with technical precision and clear documentation.",
    ),
    (
        "reasoning",
        "Let's work this out in a step by step way to be sure we have the right answer.",
    ),
];

/// Detect the task type for APE pattern selection.
fn detect_task_type(features: &PromptFeatures) -> &'static str {
    if features.contains_any(&["analyze", "evaluate", "assess", "review"]) {
        "analysis"
    } else if features.contains_any(&["create", "generate", "write", "design"]) {
        "creative"
    } else if features.contains_any(&["code", "implement", "debug", "program"]) {
        "technical"
    } else {
        "reasoning"
    }
}

/// Wrap the prompt in multi-path exploration with evaluation and backtracking.
pub fn tree_of_thoughts(prompt: &str) -> String {
    format!(
        "I need to approach this systematically using a tree of thoughts method.\n\
         \n\
         Task: {prompt}\n\
         \n\
         I'll explore multiple solution paths:\n\
         \n\
         **Path 1: [Initial Approach]**\n\
         1. First, identify the key components: [decompose problem]\n\
         2. Consider possible first steps: [list 2-3 options]\n\
         3. Evaluate each option: [brief pros/cons]\n\
         4. Select most promising: [chosen approach]\n\
         \n\
         **Path 2: [Alternative Approach]**\n\
         1. Different starting point: [alternative decomposition]\n\
         2. Explore variations: [2-3 different options]\n\
         3. Assess feasibility: [evaluation criteria]\n\
         4. Compare with Path 1: [relative merits]\n\
         \n\
         **Evaluation & Selection:**\n\
         - Compare paths using: [success likelihood, efficiency, completeness]\n\
         - Select the optimal path based on: [specific criteria]\n\
         - Implement with a backtracking option if needed\n\
         \n\
         **Execution:**\n\
         [Detailed implementation of the selected path with checkpoints]\n\
         \n\
         **Self-Evaluation:**\n\
         At each step, assess:\n\
         - Is this working as expected?\n\
         - Should I backtrack and try an alternative?\n\
         - What have I learned for next steps?"
    )
}

/// Wrap the prompt with a self-critique loop against fixed principles.
pub fn constitutional_ai(prompt: &str) -> String {
    let mut guidelines = String::new();
    for p in PRINCIPLES {
        guidelines.push_str("- ");
        guidelines.push_str(p);
        guidelines.push('\n');
    }

    format!(
        "I'll approach this request while adhering to key principles:\n\
         \n\
         **Constitutional Guidelines:**\n\
         {guidelines}\
         \n\
         **Original Request:** {prompt}\n\
         \n\
         **Approach:**\n\
         1. First, evaluate the request against these principles\n\
         2. Identify any potential concerns or edge cases\n\
         3. Provide a response that maximizes helpfulness while maintaining safety\n\
         \n\
         **Response:**\n\
         [Main response content]\n\
         \n\
         **Self-Critique:**\n\
         - Does this response align with all constitutional principles?\n\
         - Are there any potential harms to address?\n\
         - Have I been transparent about limitations?\n\
         \n\
         **Refinement if needed:**\n\
         [Any adjustments based on self-critique]"
    )
}

/// Apply APE-discovered instruction patterns matched to the task type.
pub fn automatic_prompt_engineer(prompt: &str) -> String {
    let features = PromptFeatures::extract(prompt);
    let task_type = detect_task_type(&features);
    let pattern = APE_PATTERNS
        .iter()
        .find(|(t, _)| *t == task_type)
        .map(|(_, p)| *p)
        .unwrap_or(APE_PATTERNS[3].1);

    format!(
        "{pattern}\n\
         \n\
         **Task Specification:**\n\
         {prompt}\n\
         \n\
         **Systematic Approach:**\n\
         1. Problem Understanding:\n\
         \x20  - Core objective: [identify main goal]\n\
         \x20  - Key constraints: [list limitations]\n\
         \x20  - Success criteria: [define what good looks like]\n\
         \n\
         2. Solution Development:\n\
         \x20  - Generate multiple candidate approaches\n\
         \x20  - Evaluate each against the criteria\n\
         \x20  - Select and refine the best approach\n\
         \n\
         3. Implementation:\n\
         \x20  - Execute step-by-step\n\
         \x20  - Validate at each milestone\n\
         \x20  - Document reasoning\n\
         \n\
         4. Quality Assurance:\n\
         \x20  - Verify the solution meets all requirements\n\
         \x20  - Check for edge cases\n\
         \x20  - Confirm accuracy\n\
         \n\
         **Let's begin:**"
    )
}

/// Have the model generate an optimal prompt before executing it.
pub fn meta_prompting(prompt: &str) -> String {
    format!(
        "I need to first generate an optimal prompt for this task, then execute it.\n\
         \n\
         **Original Request:** {prompt}\n\
         \n\
         **Meta-Prompt Generation:**\n\
         Given the task above, I'll create an optimized prompt that:\n\
         1. Clarifies ambiguities\n\
         2. Adds helpful structure\n\
         3. Includes success criteria\n\
         4. Provides an output format\n\
         \n\
         **Generated Optimal Prompt:**\n\
         <optimal_prompt>\n\
         Task: {prompt}\n\
         \n\
         Context: [Inferred context and assumptions]\n\
         \n\
         Requirements:\n\
         - [Specific requirement 1]\n\
         - [Specific requirement 2]\n\
         - [Quality criteria]\n\
         \n\
         Expected Output:\n\
         - Format: [Structured format]\n\
         - Length: [Appropriate scope]\n\
         - Style: [Tone and approach]\n\
         </optimal_prompt>\n\
         \n\
         **Execution Using Optimal Prompt:**\n\
         [Response following the optimized structure]"
    )
}

/// Wrap the prompt in an iterative critique-then-improve loop.
///
/// The loop carries an explicit stop condition: iterate until a pass produces
/// no further improvement.
pub fn self_refine(prompt: &str) -> String {
    format!(
        "I'll use an iterative self-refinement approach for this task.\n\
         \n\
         **Initial Task:** {prompt}\n\
         \n\
         **Iteration 1 - Initial Response:**\n\
         [Generate initial response]\n\
         \n\
         **Self-Feedback:**\n\
         - Strengths: [What works well]\n\
         - Weaknesses: [What could be improved]\n\
         - Missing elements: [What's not addressed]\n\
         \n\
         **Iteration 2 - Refined Response:**\n\
         [Improved response addressing the feedback]\n\
         \n\
         **Self-Feedback:**\n\
         - Improvements made: [List changes]\n\
         - Remaining issues: [Any persisting problems]\n\
         \n\
         **Further Iterations:**\n\
         Repeat the critique-then-improve cycle until a pass finds no further\n\
         improvement, then stop.\n\
         \n\
         **Final Validation:**\n\
         - Addresses all aspects of the request\n\
         - Clear and well-structured\n\
         - Accurate and complete"
    )
}

/// Treat natural-language feedback as gradients over the prompt text.
pub fn textgrad(prompt: &str) -> String {
    format!(
        "I'll optimize this request using textual gradient feedback.\n\
         \n\
         **Objective Function:** {prompt}\n\
         \n\
         **Gradient Computation (Feedback Analysis):**\n\
         - Clarity gradient: [Areas needing clarification]\n\
         - Specificity gradient: [Where more detail helps]\n\
         - Structure gradient: [Organization improvements]\n\
         - Constraint gradient: [Missing boundaries]\n\
         \n\
         **Optimized Prompt:**\n\
         Task: {prompt}\n\
         \n\
         With optimizations:\n\
         - Objective: [Clarified goal]\n\
         - Constraints: [Explicit boundaries]\n\
         - Approach: [Structured methodology]\n\
         - Success metrics: [Measurable outcomes]\n\
         \n\
         **Execution with Optimized Prompt:**\n\
         [Response using the optimized version]"
    )
}

/// Compose few-shot, chain-of-thought, ensembling, and self-consistency.
///
/// The four technique sections appear in a fixed order; composition order is
/// part of the strategy's definition.
pub fn medprompt(prompt: &str) -> String {
    format!(
        "I'll apply a comprehensive multi-technique approach for optimal results.\n\
         \n\
         **Task:** {prompt}\n\
         \n\
         **Technique 1 - Few-Shot Examples:**\n\
         Based on similar successful patterns:\n\
         - Example 1: [Relevant example with outcome]\n\
         - Example 2: [Another relevant example]\n\
         - Pattern identified: [Common successful approach]\n\
         \n\
         **Technique 2 - Chain of Thought:**\n\
         Step-by-step reasoning:\n\
         1. [First logical step]\n\
         2. [Build on previous]\n\
         3. [Continue systematically]\n\
         \n\
         **Technique 3 - Ensemble Approach:**\n\
         Multiple perspectives:\n\
         - Approach A: [First method]\n\
         - Approach B: [Alternative method]\n\
         - Approach C: [Different angle]\n\
         \n\
         **Technique 4 - Self-Consistency:**\n\
         Validation across approaches:\n\
         - Common elements: [Consistent findings]\n\
         - Divergences: [Where approaches differ]\n\
         - Reconciliation: [Unified solution]\n\
         \n\
         **Synthesized Response:**\n\
         [Combined insights from all techniques]\n\
         \n\
         **Confidence Calibration:**\n\
         - High confidence: [Well-supported conclusions]\n\
         - Moderate confidence: [Reasonable inferences]\n\
         - Low confidence: [Speculative elements]"
    )
}

/// Wrap the prompt in feedback-driven evolution generations.
pub fn prompt_wizard(prompt: &str) -> String {
    format!(
        "I'll create a self-improving prompt system for this task.\n\
         \n\
         **Base Task:** {prompt}\n\
         \n\
         **Prompt Evolution - Generation 1:**\n\
         Original: \"{prompt}\"\n\
         \n\
         **Synthetic Feedback Analysis:**\n\
         - Ambiguities detected: [List unclear elements]\n\
         - Missing context: [What would help]\n\
         - Improvement opportunities: [Specific suggestions]\n\
         \n\
         **Prompt Evolution - Generation 2:**\n\
         Enhanced version:\n\
         \"{prompt}\n\
         \n\
         Additional context: [Added clarifications]\n\
         Specific requirements: [Explicit needs]\n\
         Quality criteria: [Success measures]\"\n\
         \n\
         **Final Evolved Prompt:**\n\
         [Optimized version incorporating all learnings]\n\
         \n\
         **Execution with Evolved Prompt:**\n\
         [Response using the evolved prompt]"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "design a caching layer";

    #[test]
    fn test_tree_of_thoughts_wraps_unconditionally() {
        // Even prompts with no reasoning keywords get the full scaffold.
        let out = tree_of_thoughts("hello");
        assert!(out.contains("Task: hello"));
        assert!(out.contains("**Path 2: [Alternative Approach]**"));
        assert!(out.contains("backtrack"));
    }

    #[test]
    fn test_constitutional_ai_lists_all_principles() {
        let out = constitutional_ai(INPUT);
        for p in PRINCIPLES {
            assert!(out.contains(p), "missing principle: {p}");
        }
        assert!(out.contains("**Self-Critique:**"));
    }

    #[test]
    fn test_ape_task_type_detection() {
        let f = |s: &str| detect_task_type(&PromptFeatures::extract(s));
        assert_eq!(f("analyze churn numbers"), "analysis");
        assert_eq!(f("write a poem"), "creative");
        assert_eq!(f("debug the allocator"), "technical");
        assert_eq!(f("what is the best move"), "reasoning");
    }

    #[test]
    fn test_ape_embeds_matching_pattern() {
        let out = automatic_prompt_engineer("analyze churn numbers");
        assert!(out.starts_with("Let's break this down systematically"));
        assert!(out.contains("**Task Specification:**"));
    }

    #[test]
    fn test_meta_prompting_embeds_prompt_twice() {
        let out = meta_prompting(INPUT);
        assert_eq!(out.matches(INPUT).count(), 2);
        assert!(out.contains("<optimal_prompt>"));
    }

    #[test]
    fn test_self_refine_has_stop_condition() {
        let out = self_refine(INPUT);
        assert!(out.contains("no further"));
        assert!(out.contains("then stop"));
    }

    #[test]
    fn test_textgrad_sections() {
        let out = textgrad(INPUT);
        assert!(out.contains("Clarity gradient"));
        assert!(out.contains("**Objective Function:**"));
    }

    #[test]
    fn test_medprompt_technique_order() {
        let out = medprompt(INPUT);
        let few = out.find("Technique 1 - Few-Shot").unwrap();
        let cot = out.find("Technique 2 - Chain of Thought").unwrap();
        let ens = out.find("Technique 3 - Ensemble").unwrap();
        let sc = out.find("Technique 4 - Self-Consistency").unwrap();
        assert!(few < cot && cot < ens && ens < sc);
    }

    #[test]
    fn test_prompt_wizard_generations() {
        let out = prompt_wizard(INPUT);
        assert!(out.contains("Generation 1"));
        assert!(out.contains("Generation 2"));
    }

    #[test]
    fn test_all_transforms_differ_from_input() {
        for f in [
            tree_of_thoughts,
            constitutional_ai,
            automatic_prompt_engineer,
            meta_prompting,
            self_refine,
            textgrad,
            medprompt,
            prompt_wizard,
        ] {
            let out = f(INPUT);
            assert_ne!(out, INPUT);
            assert!(out.contains(INPUT));
        }
    }
}
