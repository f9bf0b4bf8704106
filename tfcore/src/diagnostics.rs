//! Diagnostics reported back to the runtime for user display

/// Severity level for a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
}

/// A single warning or error surfaced by a provider operation
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub summary: String,
    pub detail: Option<String>,
}

impl Diagnostic {
    pub fn error(summary: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            severity: Severity::Error,
            summary: summary.into(),
            detail,
        }
    }

    pub fn warning(summary: impl Into<String>, detail: Option<String>) -> Self {
        Self {
            severity: Severity::Warning,
            summary: summary.into(),
            detail,
        }
    }
}

/// Collected diagnostics for one operation
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, summary: impl Into<String>, detail: Option<String>) {
        self.errors.push(Diagnostic::error(summary, detail));
    }

    pub fn add_warning(&mut self, summary: impl Into<String>, detail: Option<String>) {
        self.warnings.push(Diagnostic::warning(summary, detail));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn extend(&mut self, other: Diagnostics) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    /// All error summaries joined into one line, for converting diagnostics
    /// into a hard failure.
    pub fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|d| d.summary.as_str())
            .collect::<Vec<_>>()
            .join("; ")
    }
}
