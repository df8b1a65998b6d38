// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Engine facade.
//!
//! One value owning the strategy catalog and template registry, exposing the
//! public operations. Every method takes `&self`: the engine holds no mutable
//! state and is safe to share across threads.

use std::collections::HashMap;

use crate::analyze::{analyze, AnalysisReport};
use crate::apply::{Applier, Optimization};
use crate::catalog::{Catalog, Tier};
use crate::error::Result;
use crate::select::Selector;
use crate::template::{Domain, TemplateDescriptor, TemplateRegistry};

/// Deterministic prompt-optimization engine.
///
/// Construction is free of I/O: all strategies and templates are compiled in.
#[derive(Debug, Clone, Copy, Default)]
pub struct Engine {
    catalog: Catalog,
    templates: TemplateRegistry,
}

impl Engine {
    /// Create an engine with the built-in catalog and templates.
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
            templates: TemplateRegistry::new(),
        }
    }

    /// The strategy catalog backing this engine.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// The template registry backing this engine.
    pub fn templates(&self) -> &TemplateRegistry {
        &self.templates
    }

    /// Score a prompt and report detected issues with suggestions.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidInput`] on empty prompt text.
    pub fn analyze_prompt(&self, prompt: &str) -> Result<AnalysisReport> {
        analyze(prompt)
    }

    /// Apply a named basic-tier strategy to a prompt.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UnknownStrategy`] if `strategy` is not a basic-tier
    /// id; [`crate::Error::InvalidInput`] on empty prompt text.
    pub fn optimize_prompt(&self, prompt: &str, strategy: &str) -> Result<Optimization> {
        Applier::new(&self.catalog).apply(prompt, Tier::Basic, strategy)
    }

    /// Select and apply the best-matching basic-tier strategy.
    pub fn auto_optimize(&self, prompt: &str) -> Result<Optimization> {
        let id = Selector::new(&self.catalog).select(prompt, Tier::Basic, None)?;
        Applier::new(&self.catalog).apply_strategy(prompt, id)
    }

    /// Select (or accept as hint) and apply an advanced-tier strategy.
    ///
    /// A `strategy` hint short-circuits selection but is validated against
    /// the advanced tier.
    pub fn advanced_optimize(&self, prompt: &str, strategy: Option<&str>) -> Result<Optimization> {
        let id = Selector::new(&self.catalog).select(prompt, Tier::Advanced, strategy)?;
        Applier::new(&self.catalog).apply_strategy(prompt, id)
    }

    /// Look up a general use-case template by name.
    pub fn get_prompt_template(&self, name: &str) -> Result<&'static TemplateDescriptor> {
        self.templates.get(Domain::General, name)
    }

    /// Look up a template by domain string and name.
    ///
    /// # Errors
    ///
    /// [`crate::Error::UnknownDomain`] if `domain` does not parse;
    /// [`crate::Error::UnknownTemplate`] if the name is not registered there.
    pub fn get_domain_template(
        &self,
        domain: &str,
        name: &str,
    ) -> Result<&'static TemplateDescriptor> {
        self.templates.get(domain.parse()?, name)
    }

    /// List templates, optionally restricted to one domain string.
    pub fn list_domain_templates(
        &self,
        domain: Option<&str>,
    ) -> Result<Vec<&'static TemplateDescriptor>> {
        let domain = match domain {
            Some(s) => Some(s.parse::<Domain>()?),
            None => None,
        };
        Ok(self.templates.list(domain))
    }

    /// Render a template by domain string and name with the given values.
    pub fn render_template(
        &self,
        domain: &str,
        name: &str,
        values: &HashMap<String, String>,
    ) -> Result<String> {
        self.templates.render(domain.parse()?, name, values)
    }
}
