// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! # Promptsmith - Deterministic Prompt Optimization Engine
//!
//! Rule-based analysis and rewriting of LLM prompts. No model calls, no I/O,
//! no randomness: every operation is a pure function over the prompt text, so
//! identical inputs always produce identical outputs.
//!
//! ## Architecture
//!
//! - **Analyzer**: scores a prompt 0-100 against a fixed rule table and
//!   reports detected quality issues with suggestions
//! - **Strategy Catalog**: fourteen compiled-in rewrite strategies across a
//!   basic and an advanced tier, each a pure text transform with static
//!   provenance metadata
//! - **Selector**: keyword and structural affinity scoring that picks the
//!   best-matching strategy within a tier, with deterministic tie-breaking
//! - **Template Registry**: parameterized domain templates with strict
//!   `{placeholder}` rendering
//!
//! ## Quick Start
//!
//! ```
//! use promptsmith::prelude::*;
//!
//! let engine = Engine::new();
//!
//! // Score a prompt and see what's wrong with it.
//! let report = engine.analyze_prompt("write something about AI")?;
//! assert!(report.score < 100);
//!
//! // Let the selector choose a basic-tier rewrite.
//! let result = engine.auto_optimize("help me code")?;
//! assert_eq!(result.strategy, StrategyId::Clarity);
//!
//! // Or pick an advanced strategy explicitly.
//! let result = engine.advanced_optimize("plan the migration", Some("self_refine"))?;
//! assert!(result.optimized.contains("plan the migration"));
//! # Ok::<(), promptsmith::Error>(())
//! ```

#![warn(missing_docs)]

pub mod analyze;
pub mod apply;
pub mod catalog;
pub mod engine;
pub mod error;
pub mod features;
pub mod select;
pub mod strategies;
pub mod template;

pub use analyze::{analyze, AnalysisReport, Issue};
pub use apply::{Applier, Optimization};
pub use catalog::{Catalog, Strategy, StrategyId, Tier};
pub use engine::Engine;
pub use error::{Error, Result};
pub use features::PromptFeatures;
pub use select::Selector;
pub use template::{Domain, TemplateDescriptor, TemplateRegistry};

/// Prelude module for convenient imports.
pub mod prelude {
    // Error handling
    pub use crate::{Error, Result};

    // Engine facade
    pub use crate::Engine;

    // Analysis
    pub use crate::{analyze, AnalysisReport, Issue};

    // Strategies
    pub use crate::{Applier, Catalog, Optimization, Selector, Strategy, StrategyId, Tier};

    // Templates
    pub use crate::{Domain, TemplateDescriptor, TemplateRegistry};
}

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
