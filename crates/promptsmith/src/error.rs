// Copyright © 2025 lituus-io <spicyzhug@gmail.com>
// All Rights Reserved.
// Licensed under PolyForm Noncommercial 1.0.0

//! Error types for Promptsmith

use thiserror::Error;

/// Result type alias for Promptsmith operations
pub type Result<T> = core::result::Result<T, Error>;

/// Main error type for the Promptsmith library.
///
/// Every core operation is a pure computation, so there are no transient
/// failure modes: malformed input always yields one of these typed errors,
/// never a panic, and never triggers a retry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The prompt text was empty or whitespace-only.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The strategy id is not present in the requested catalog tier.
    #[error("Unknown strategy: {0}")]
    UnknownStrategy(String),

    /// No template registered under the given domain/name pair.
    #[error("Unknown template: {domain}/{name}")]
    UnknownTemplate {
        /// Domain the caller asked for.
        domain: String,
        /// Template name the caller asked for.
        name: String,
    },

    /// The domain string did not parse to a known domain.
    #[error("Unknown domain: {0}")]
    UnknownDomain(String),

    /// A declared template variable was not supplied at render time.
    /// Names the first unresolved placeholder in declaration order.
    #[error("Missing variable: {0}")]
    MissingVariable(String),

    /// A supplied value key is not declared by the template (strict mode).
    #[error("Unknown variable: {0}")]
    UnknownVariable(String),
}

impl Error {
    /// Create an invalid-input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Create an unknown-strategy error.
    pub fn unknown_strategy(id: impl Into<String>) -> Self {
        Self::UnknownStrategy(id.into())
    }

    /// Create an unknown-template error.
    pub fn unknown_template(domain: impl Into<String>, name: impl Into<String>) -> Self {
        Self::UnknownTemplate {
            domain: domain.into(),
            name: name.into(),
        }
    }

    /// Create an unknown-domain error.
    pub fn unknown_domain(domain: impl Into<String>) -> Self {
        Self::UnknownDomain(domain.into())
    }

    /// Create a missing-variable error.
    pub fn missing_variable(name: impl Into<String>) -> Self {
        Self::MissingVariable(name.into())
    }

    /// Create an unknown-variable error.
    pub fn unknown_variable(name: impl Into<String>) -> Self {
        Self::UnknownVariable(name.into())
    }

    /// Get the error category for logging/metrics in the transport layer.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidInput(_) => "invalid_input",
            Self::UnknownStrategy(_) => "unknown_strategy",
            Self::UnknownTemplate { .. } => "unknown_template",
            Self::UnknownDomain(_) => "unknown_domain",
            Self::MissingVariable(_) => "missing_variable",
            Self::UnknownVariable(_) => "unknown_variable",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_invalid_input() {
        let err = Error::invalid_input("prompt is empty");
        assert!(matches!(err, Error::InvalidInput(_)));
        assert_eq!(err.to_string(), "Invalid input: prompt is empty");
    }

    #[test]
    fn test_error_unknown_strategy() {
        let err = Error::unknown_strategy("quantum_prompting");
        assert!(matches!(err, Error::UnknownStrategy(_)));
        assert_eq!(err.to_string(), "Unknown strategy: quantum_prompting");
    }

    #[test]
    fn test_error_unknown_template() {
        let err = Error::unknown_template("security", "nonexistent");
        assert_eq!(err.to_string(), "Unknown template: security/nonexistent");
    }

    #[test]
    fn test_error_missing_variable() {
        let err = Error::missing_variable("company_name");
        assert_eq!(err.to_string(), "Missing variable: company_name");
    }

    #[test]
    fn test_error_unknown_variable() {
        let err = Error::unknown_variable("surplus_key");
        assert_eq!(err.to_string(), "Unknown variable: surplus_key");
    }

    #[test]
    fn test_error_category() {
        assert_eq!(Error::invalid_input("x").category(), "invalid_input");
        assert_eq!(Error::unknown_strategy("x").category(), "unknown_strategy");
        assert_eq!(
            Error::unknown_template("a", "b").category(),
            "unknown_template"
        );
        assert_eq!(Error::unknown_domain("x").category(), "unknown_domain");
        assert_eq!(Error::missing_variable("x").category(), "missing_variable");
        assert_eq!(Error::unknown_variable("x").category(), "unknown_variable");
    }

    #[test]
    fn test_result_type() {
        let ok: Result<u32> = Ok(40);
        assert!(ok.is_ok());

        let err: Result<u32> = Err(Error::invalid_input("empty"));
        assert!(err.is_err());
    }
}
