// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Domain template registry.
//!
//! A static mapping from (domain, name) to a parameterized template body.
//! Bodies use `{placeholder}` syntax and declare their variables under a
//! closed-world invariant: every placeholder in the body appears in
//! `variables` and vice versa, with `variables` ordered by first appearance.
//! Rendering is strict: missing values and surplus keys are both errors.

mod catalog;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

pub(crate) use catalog::TEMPLATES;

/// Domain a template belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    /// General-purpose use-case templates (code generation, analysis, ...).
    General,
    /// Software development workflows.
    Development,
    /// Data science and analytics.
    DataScience,
    /// Operational runbooks and procedures.
    Operations,
    /// Security assessments and incident handling.
    Security,
    /// Business analysis and communication.
    Business,
    /// Quality engineering and feedback.
    Quality,
}

impl Domain {
    /// Every domain, in a fixed listing order.
    pub const ALL: &'static [Domain] = &[
        Self::General,
        Self::Development,
        Self::DataScience,
        Self::Operations,
        Self::Security,
        Self::Business,
        Self::Quality,
    ];

    /// Stable snake_case string form of this domain.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Development => "development",
            Self::DataScience => "data_science",
            Self::Operations => "operations",
            Self::Security => "security",
            Self::Business => "business",
            Self::Quality => "quality",
        }
    }
}

impl core::fmt::Display for Domain {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl core::str::FromStr for Domain {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .iter()
            .find(|d| d.as_str() == s)
            .copied()
            .ok_or_else(|| Error::unknown_domain(s))
    }
}

/// One parameterized domain template.
///
/// All fields are static: templates are compiled in and never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    /// Domain this template belongs to.
    pub domain: Domain,
    /// Unique key within the domain.
    pub name: &'static str,
    /// Human-readable title.
    pub display_name: &'static str,
    /// Template text with `{placeholder}` variables.
    pub body: &'static str,
    /// Declared placeholders, ordered by first appearance in `body`.
    pub variables: &'static [&'static str],
}

impl TemplateDescriptor {
    /// Substitute caller-supplied values into the body (strict mode).
    ///
    /// # Errors
    ///
    /// [`Error::MissingVariable`] naming the first declared variable (in
    /// declaration order) that `values` does not supply;
    /// [`Error::UnknownVariable`] naming the lexicographically first supplied
    /// key the template does not declare. Missing takes precedence.
    pub fn render(&self, values: &HashMap<String, String>) -> Result<String> {
        for var in self.variables {
            if !values.contains_key(*var) {
                return Err(Error::missing_variable(*var));
            }
        }

        let mut surplus: Vec<&str> = values
            .keys()
            .map(String::as_str)
            .filter(|k| !self.variables.iter().any(|v| v == k))
            .collect();
        surplus.sort_unstable();
        if let Some(key) = surplus.first() {
            return Err(Error::unknown_variable(*key));
        }

        let mut out = self.body.to_string();
        for var in self.variables {
            // Safe index: presence was checked above.
            out = out.replace(&format!("{{{var}}}"), &values[*var]);
        }
        Ok(out)
    }
}

/// Extract `{placeholder}` names from a body, in first-appearance order,
/// deduplicated. Used by the registry's invariant checks and tests.
pub fn placeholders(body: &str) -> Vec<&str> {
    let mut names: Vec<&str> = Vec::new();
    let mut rest = body;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                let name = &after[..close];
                if !name.is_empty() && !names.contains(&name) {
                    names.push(name);
                }
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    names
}

/// Immutable registry of all domain templates.
///
/// Constructed once at startup; safe to share across threads by reference.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateRegistry;

impl TemplateRegistry {
    /// Create the registry.
    pub fn new() -> Self {
        Self
    }

    /// Look up a template by domain and name.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownTemplate`] if no such pair is registered.
    pub fn get(&self, domain: Domain, name: &str) -> Result<&'static TemplateDescriptor> {
        TEMPLATES
            .iter()
            .find(|t| t.domain == domain && t.name == name)
            .ok_or_else(|| Error::unknown_template(domain.as_str(), name))
    }

    /// All templates, optionally filtered by domain, in declaration order.
    pub fn list(&self, domain: Option<Domain>) -> Vec<&'static TemplateDescriptor> {
        TEMPLATES
            .iter()
            .filter(|t| domain.map_or(true, |d| t.domain == d))
            .collect()
    }

    /// Render a template by (domain, name) with the supplied values.
    pub fn render(
        &self,
        domain: Domain,
        name: &str,
        values: &HashMap<String, String>,
    ) -> Result<String> {
        self.get(domain, name)?.render(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values_for(t: &TemplateDescriptor) -> HashMap<String, String> {
        t.variables
            .iter()
            .map(|v| (v.to_string(), format!("<{v}>")))
            .collect()
    }

    #[test]
    fn test_domain_round_trip() {
        for d in Domain::ALL {
            let parsed: Domain = d.as_str().parse().unwrap();
            assert_eq!(parsed, *d);
        }
    }

    #[test]
    fn test_unknown_domain() {
        assert!(matches!(
            "astrology".parse::<Domain>(),
            Err(Error::UnknownDomain(_))
        ));
    }

    #[test]
    fn test_placeholders_extraction() {
        let names = placeholders("Hi {name}, meet {other} and {name} again");
        assert_eq!(names, vec!["name", "other"]);
    }

    #[test]
    fn test_placeholders_ignores_unclosed() {
        assert_eq!(placeholders("no vars here"), Vec::<&str>::new());
        assert_eq!(placeholders("dangling {brace"), Vec::<&str>::new());
    }

    #[test]
    fn test_get_known_template() {
        let registry = TemplateRegistry::new();
        let t = registry.get(Domain::Security, "security_assessment").unwrap();
        assert_eq!(t.name, "security_assessment");
        assert!(!t.variables.is_empty());
    }

    #[test]
    fn test_get_unknown_template() {
        let registry = TemplateRegistry::new();
        assert!(matches!(
            registry.get(Domain::Security, "horoscope"),
            Err(Error::UnknownTemplate { .. })
        ));
        // Right name, wrong domain is also unknown.
        assert!(matches!(
            registry.get(Domain::Business, "security_assessment"),
            Err(Error::UnknownTemplate { .. })
        ));
    }

    #[test]
    fn test_list_all_and_by_domain() {
        let registry = TemplateRegistry::new();
        let all = registry.list(None);
        assert_eq!(all.len(), TEMPLATES.len());

        let security = registry.list(Some(Domain::Security));
        assert!(!security.is_empty());
        assert!(security.iter().all(|t| t.domain == Domain::Security));
        assert!(security.len() < all.len());
    }

    #[test]
    fn test_render_round_trip() {
        let registry = TemplateRegistry::new();
        for t in registry.list(None) {
            let rendered = t.render(&values_for(t)).unwrap();
            assert!(
                placeholders(&rendered).is_empty(),
                "{}/{} left placeholders",
                t.domain,
                t.name
            );
        }
    }

    #[test]
    fn test_render_missing_variable_in_declaration_order() {
        let registry = TemplateRegistry::new();
        let t = registry.get(Domain::General, "code_generation").unwrap();
        let mut values = values_for(t);
        values.remove(t.variables[1]);
        values.remove(t.variables[2]);
        // The first missing variable in declaration order is named.
        assert_eq!(
            t.render(&values),
            Err(Error::missing_variable(t.variables[1]))
        );
    }

    #[test]
    fn test_render_unknown_variable() {
        let registry = TemplateRegistry::new();
        let t = registry.get(Domain::General, "tutoring").unwrap();
        let mut values = values_for(t);
        values.insert("surplus_key".to_string(), "x".to_string());
        assert_eq!(t.render(&values), Err(Error::unknown_variable("surplus_key")));
    }

    #[test]
    fn test_missing_takes_precedence_over_unknown() {
        let registry = TemplateRegistry::new();
        let t = registry.get(Domain::General, "tutoring").unwrap();
        let mut values = values_for(t);
        values.remove(t.variables[0]);
        values.insert("surplus_key".to_string(), "x".to_string());
        assert_eq!(
            t.render(&values),
            Err(Error::missing_variable(t.variables[0]))
        );
    }

    #[test]
    fn test_closed_world_invariant() {
        // Every placeholder in every body is declared, in first-appearance
        // order, and every declared variable appears in the body.
        for t in TEMPLATES {
            let found = placeholders(t.body);
            assert_eq!(
                found, t.variables,
                "{}/{} variables out of sync with body",
                t.domain, t.name
            );
        }
    }

    #[test]
    fn test_names_unique_within_domain() {
        let mut seen = std::collections::HashSet::new();
        for t in TEMPLATES {
            assert!(
                seen.insert((t.domain, t.name)),
                "duplicate template {}/{}",
                t.domain,
                t.name
            );
        }
    }
}
