//! Report formatting

use crate::diagnostic::Diagnostic;
use crate::issue::Severity;
use serde::Serialize;

/// Ordered diagnostics of one analysis run
#[derive(Debug, Default, Serialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    errors: usize,
    warnings: usize,
    infos: usize,
    diagnostics: &'a [Diagnostic],
}

impl Report {
    pub fn new(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// No error-severity diagnostics
    pub fn is_clean(&self) -> bool {
        self.error_count() == 0
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    /// One-line summary
    pub fn summary(&self) -> String {
        if self.diagnostics.is_empty() {
            return "No warnings.".to_string();
        }
        format!("{} errors, {} warnings", self.error_count(), self.warning_count())
    }

    /// Console format: one line per diagnostic, indented secondary
    /// locations, then the summary
    pub fn to_text(&self) -> String {
        if self.diagnostics.is_empty() {
            return self.summary();
        }

        let mut out = String::new();
        for d in &self.diagnostics {
            out.push_str(&format!(
                "{}: {}: {} [{}]\n",
                d.location.path,
                d.severity.label(),
                d.message,
                d.issue
            ));
            for s in &d.secondary {
                out.push_str(&format!(
                    "    {}: {}\n",
                    s.location.path,
                    s.message.as_deref().unwrap_or("<No location-specific message")
                ));
            }
        }
        out.push_str(&self.summary());
        out.push('\n');
        out
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&JsonReport {
            errors: self.error_count(),
            warnings: self.warning_count(),
            infos: self.info_count(),
            diagnostics: &self.diagnostics,
        })
    }
}
