//! Diagnostic and location types

use crate::issue::{IssueId, Severity};
use serde::Serialize;

/// A place in the resource tree: a file, a folder or a root
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// Display path (`res/drawable-hdpi/icon.png`)
    pub path: String,
    /// Final path segment, used as a sort key
    pub name: String,
}

impl Location {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let name = path.rsplit('/').next().unwrap_or(&path).to_string();
        Self { path, name }
    }
}

/// Additional location attached to a diagnostic
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SecondaryLocation {
    #[serde(flatten)]
    pub location: Location,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// A single finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub issue: IssueId,
    pub severity: Severity,
    pub location: Location,
    pub message: String,
    pub secondary: Vec<SecondaryLocation>,
}

impl Diagnostic {
    /// Create a diagnostic; the analyzer assigns the configured severity
    pub fn new(issue: IssueId, path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            issue,
            severity: Severity::Warning,
            location: Location::new(path),
            message: message.into(),
            secondary: Vec::new(),
        }
    }

    /// Diagnostic over a chain of related files.
    ///
    /// The last path becomes the primary location and the rest follow as
    /// secondaries in reverse order.
    pub fn chained<S: AsRef<str>>(issue: IssueId, paths: &[S], message: impl Into<String>) -> Option<Self> {
        let (last, rest) = paths.split_last()?;
        let mut diagnostic = Self::new(issue, last.as_ref(), message);
        for path in rest.iter().rev() {
            diagnostic = diagnostic.with_secondary(path.as_ref());
        }
        Some(diagnostic)
    }

    pub fn with_secondary(mut self, path: impl Into<String>) -> Self {
        self.secondary.push(SecondaryLocation {
            location: Location::new(path),
            message: None,
        });
        self
    }

    pub fn with_secondary_message(mut self, path: impl Into<String>, message: impl Into<String>) -> Self {
        self.secondary.push(SecondaryLocation {
            location: Location::new(path),
            message: Some(message.into()),
        });
        self
    }

    pub fn path(&self) -> &str {
        &self.location.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_name() {
        assert_eq!(Location::new("res/drawable/icon.png").name, "icon.png");
        assert_eq!(Location::new("res").name, "res");
    }

    #[test]
    fn test_chained_orders_secondaries() {
        let d = Diagnostic::chained(IssueId::Duplicates, &["a", "b", "c"], "msg").unwrap();
        assert_eq!(d.path(), "c");
        let rest: Vec<&str> = d.secondary.iter().map(|s| s.location.path.as_str()).collect();
        assert_eq!(rest, vec!["b", "a"]);
        assert!(Diagnostic::chained::<&str>(IssueId::Duplicates, &[], "msg").is_none());
    }

    #[test]
    fn test_serialize() {
        let d = Diagnostic::new(IssueId::GifUsage, "res/drawable/a.gif", "m").with_secondary_message("res", "here");
        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["issue"], "GifUsage");
        assert_eq!(json["severity"], "warning");
        assert_eq!(json["location"]["path"], "res/drawable/a.gif");
        assert_eq!(json["secondary"][0]["path"], "res");
        assert_eq!(json["secondary"][0]["message"], "here");
    }
}
