// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Basic tier transforms.
//!
//! Everyday rewrites: label the task, bound it with requirements, ask for
//! reasoning, anchor the format, structure the output, assign a role.

use crate::features::PromptFeatures;

/// Role keyword table for [`role_based`]: first matching row wins, so more
/// specific roles are listed before generic ones.
const ROLE_RULES: &[(&[&str], &str)] = &[
    (
        &["code", "program", "software", "debug", "api"],
        "senior software engineer and architect",
    ),
    (
        &["business", "strategy", "market", "finance", "investment"],
        "seasoned business strategist and financial analyst",
    ),
    (
        &["write", "content", "article", "story", "blog"],
        "professional writer and content creator",
    ),
    (
        &["data", "analyze", "statistics", "insights"],
        "expert data scientist and analyst",
    ),
    (
        &["design", "ui", "ux", "user experience"],
        "experienced UX/UI designer",
    ),
    (
        &["legal", "contract", "compliance"],
        "legal counsel specializing in contract law",
    ),
    (
        &["project management", "agile", "scrum"],
        "certified project manager",
    ),
];

/// Fallback role when no keyword row matches.
const DEFAULT_ROLE: &str = "subject-matter expert";

/// Strip ambiguity: label the task and add explicit response guidance.
pub fn clarity(prompt: &str) -> String {
    let features = PromptFeatures::extract(prompt);
    let mut out = String::with_capacity(prompt.len() + 256);

    if features.contains("objective:") || features.contains("task:") {
        out.push_str(prompt);
    } else if features.contains_any(&["help", "need", "want"]) {
        out.push_str("Objective: ");
        out.push_str(prompt);
    } else {
        out.push_str("Task: ");
        out.push_str(prompt);
    }

    if !features.contains("clear and detailed") && !features.contains("concise and direct") {
        out.push_str("\n\nProvide a clear, concise, and detailed response that:");
        out.push_str("\n- Directly addresses the main request.");
        out.push_str("\n- Uses simple, precise, and unambiguous language.");
        out.push_str("\n- Avoids jargon unless explicitly requested.");
        out.push_str("\n- Includes relevant examples where helpful.");
    }

    out
}

/// Append concrete requirements and constraints.
///
/// Explanatory prompts get a definition/example block; generative prompts get
/// a requirements block. Prompts matching neither still receive a generic
/// constraints block, so the transform always adds scope detail.
pub fn specificity(prompt: &str) -> String {
    let features = PromptFeatures::extract(prompt);
    let mut out = String::with_capacity(prompt.len() + 512);
    out.push_str(prompt);

    let mut amended = false;

    if features.contains_any(&["explain", "describe"]) && !features.contains("specifically:") {
        out.push_str("\n\nSpecifically:");
        out.push_str("\n- Define all key terms and concepts.");
        out.push_str("\n- Provide concrete, real-world examples.");
        out.push_str("\n- Include relevant background context and assumptions.");
        amended = true;
    }

    if features.contains_any(&["create", "write", "generate"]) && !features.contains("requirements:")
    {
        out.push_str("\n\nRequirements:");
        out.push_str("\n- Length: Be comprehensive but concise, aiming for [specify length, e.g., 500 words].");
        out.push_str("\n- Style: Maintain a professional and clear writing style.");
        out.push_str("\n- Format: Well-structured with clear sections and bullet points where appropriate.");
        out.push_str("\n- Target Audience: Tailor the response for [specify audience].");
        amended = true;
    }

    if !amended && !features.contains("constraints:") {
        out.push_str("\n\nConstraints:");
        out.push_str("\n- Keep the response within [specify length, e.g., 300 words].");
        out.push_str("\n- Focus solely on the stated topic; avoid tangents.");
        out.push_str("\n- If information is unavailable, say so rather than fabricating.");
    }

    out
}

/// Append step-by-step reasoning instructions.
pub fn chain_of_thought(prompt: &str) -> String {
    let mut out = String::with_capacity(prompt.len() + 512);
    out.push_str(prompt);
    out.push_str("\n\nPlease approach this step-by-step:");
    out.push_str("\n1. First, clearly understand the core problem or request.");
    out.push_str("\n2. Break down the problem into its fundamental components.");
    out.push_str("\n3. Address each component systematically, showing your thought process.");
    out.push_str("\n4. Synthesize your findings into a comprehensive final response.");
    out.push_str("\n\nShow your reasoning for each step, explaining why you reached specific conclusions.");
    out
}

/// Append an example response format.
pub fn few_shot(prompt: &str) -> String {
    let features = PromptFeatures::extract(prompt);
    let mut out = String::with_capacity(prompt.len() + 384);
    out.push_str(prompt);

    if !features.contains("example format") && !features.contains("example:") {
        out.push_str("\n\nExample format for your response:");
        out.push_str("\n\n**Main Point**: [Your key insight here]");
        out.push_str("\n**Explanation**: [Detailed explanation of the main point]");
        out.push_str("\n**Example**: [A concrete, illustrative example]");
        out.push_str("\n**Additional Considerations**: [Any other relevant points or caveats]");
    }

    out
}

/// Append an explicit response structure.
pub fn structured_output(prompt: &str) -> String {
    let features = PromptFeatures::extract(prompt);
    let mut out = String::with_capacity(prompt.len() + 512);
    out.push_str(prompt);

    if !features.contains("structure your response as follows")
        && !features.contains("output format")
    {
        out.push_str("\n\nPlease structure your response as follows:");
        out.push_str("\n\n1. **Overview**: A brief, high-level summary of the entire response.");
        out.push_str("\n2. **Detailed Analysis**: An in-depth exploration, broken into logical sections.");
        out.push_str("\n3. **Key Takeaways**: A bulleted list of the most important conclusions.");
        out.push_str("\n4. **Next Steps**: Actionable recommendations based on the analysis.");
    }

    out
}

/// Prefix the prompt with a domain-expert role inferred from its keywords.
pub fn role_based(prompt: &str) -> String {
    let features = PromptFeatures::extract(prompt);
    let role = ROLE_RULES
        .iter()
        .find(|(keywords, _)| features.contains_any(keywords))
        .map(|(_, role)| *role)
        .unwrap_or(DEFAULT_ROLE);

    let mut out = String::with_capacity(prompt.len() + 192);
    out.push_str("As a ");
    out.push_str(role);
    out.push_str(", ");
    out.push_str(prompt);
    out.push_str("\n\nDraw upon your extensive expertise to provide insights that only a ");
    out.push_str(role);
    out.push_str(" would know, ensuring accuracy and depth.");
    out
}
