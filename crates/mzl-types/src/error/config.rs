//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Errors that can occur while loading or validating widget configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Config parse error (JSON)
    #[error("Config parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Config validation error (invalid values)
    #[error("Config validation error for {field}: {message}")]
    ValidationError {
        /// Name of the field that failed validation
        field: String,
        /// Description of the validation failure
        message: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    /// Report the first failed rule, by field path, of a `validator` run.
    ///
    /// Paths use the JSON (camelCase) field names, nested with dots:
    /// `tooltip.openDelayMs`.
    pub fn from_validation_errors(errors: &ValidationErrors) -> Self {
        let mut failures = Vec::new();
        collect_failures("", errors, &mut failures);
        failures.sort();
        match failures.into_iter().next() {
            Some((field, message)) => Self::ValidationError { field, message },
            None => Self::ValidationError {
                field: String::new(),
                message: "invalid configuration".to_string(),
            },
        }
    }
}

impl From<ValidationErrors> for ConfigError {
    fn from(errors: ValidationErrors) -> Self {
        Self::from_validation_errors(&errors)
    }
}

fn collect_failures(prefix: &str, errors: &ValidationErrors, out: &mut Vec<(String, String)>) {
    for (field, kind) in errors.errors() {
        let path = format!("{prefix}{}", camel_case(field));
        match kind {
            ValidationErrorsKind::Field(failed) => {
                for error in failed {
                    let message = error
                        .message
                        .as_ref()
                        .map_or_else(|| error.code.to_string(), ToString::to_string);
                    out.push((path.clone(), message));
                }
            },
            ValidationErrorsKind::Struct(nested) => {
                collect_failures(&format!("{path}."), nested, out);
            },
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_failures(&format!("{path}[{index}]."), nested, out);
                }
            },
        }
    }
}

fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
