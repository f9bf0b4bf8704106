//! Attribute validators run before any remote call is made

use crate::diagnostics::Diagnostics;
use regex::Regex;

/// Validates a string attribute against a regular expression.
pub struct StringPatternValidator {
    pattern: Regex,
    description: String,
}

impl StringPatternValidator {
    pub fn new(pattern: Regex, description: impl Into<String>) -> Self {
        Self {
            pattern,
            description: description.into(),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn validate(&self, value: &str, attribute: &str, diagnostics: &mut Diagnostics) {
        if !self.pattern.is_match(value) {
            diagnostics.add_error(
                format!("{} {}", attribute, self.description),
                Some(format!("value '{}' does not match pattern", value)),
            );
        }
    }
}
