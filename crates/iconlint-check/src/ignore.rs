//! Exemption policies

use crate::issue::IssueId;
use std::collections::BTreeMap;

/// Decides whether a location is exempt from an issue
pub trait IgnorePolicy: Send + Sync {
    fn is_ignored(&self, issue: IssueId, path: &str) -> bool;
}

/// Nothing is exempt
#[derive(Debug, Default, Clone, Copy)]
pub struct NoIgnores;

impl IgnorePolicy for NoIgnores {
    fn is_ignored(&self, _issue: IssueId, _path: &str) -> bool {
        false
    }
}

/// Path-prefix exemptions, per issue or for every issue.
///
/// A rule covers the path itself and everything below it.
#[derive(Debug, Default, Clone)]
pub struct IgnoreRules {
    per_issue: BTreeMap<IssueId, Vec<String>>,
    everywhere: Vec<String>,
}

impl IgnoreRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exempt `path` from `issue`
    pub fn ignore(&mut self, issue: IssueId, path: &str) {
        self.per_issue
            .entry(issue)
            .or_default()
            .push(normalize(path));
    }

    /// Exempt `path` from every issue
    pub fn ignore_all(&mut self, path: &str) {
        self.everywhere.push(normalize(path));
    }

    pub fn with(mut self, issue: IssueId, path: &str) -> Self {
        self.ignore(issue, path);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.everywhere.is_empty() && self.per_issue.values().all(|v| v.is_empty())
    }
}

fn normalize(path: &str) -> String {
    path.replace('\\', "/").trim_end_matches('/').to_string()
}

fn covers(rule: &str, path: &str) -> bool {
    path == rule
        || (path.len() > rule.len() && path.starts_with(rule) && path.as_bytes()[rule.len()] == b'/')
}

impl IgnorePolicy for IgnoreRules {
    fn is_ignored(&self, issue: IssueId, path: &str) -> bool {
        let path = normalize(path);
        self.everywhere.iter().any(|r| covers(r, &path))
            || self
                .per_issue
                .get(&issue)
                .is_some_and(|rules| rules.iter().any(|r| covers(r, &path)))
    }
}
