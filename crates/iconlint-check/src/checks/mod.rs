//! Individual checkers
//!
//! Each checker reads the snapshot and appends diagnostics; none of them
//! mutate shared state, so they can run in any order.

mod colors;
mod densities;
mod dip_size;
mod duplicates;
mod expected_size;
mod extension;
mod location;
mod nodpi;
mod unreadable;

pub use colors::ColorCheck;
pub use densities::DensityCheck;
pub use dip_size::DipSizeCheck;
pub use duplicates::DuplicateCheck;
pub use expected_size::ExpectedSizeCheck;
pub use extension::ExtensionCheck;
pub use location::LocationCheck;
pub use nodpi::NoDpiCheck;
pub use unreadable::UnreadableCheck;

use crate::config::LintOptions;
use crate::diagnostic::Diagnostic;
use crate::ignore::IgnorePolicy;
use crate::issue::{IssueId, IssueRegistry};
use crate::signals::UsageSignals;
use iconlint_resource::{ResourceFolder, ResourceSnapshot};

/// Everything a checker may read
pub struct CheckContext<'a> {
    pub snapshot: &'a ResourceSnapshot,
    pub options: &'a LintOptions,
    pub registry: &'a IssueRegistry,
    pub ignore: &'a dyn IgnorePolicy,
    pub signals: &'a dyn UsageSignals,
}

impl CheckContext<'_> {
    pub fn is_enabled(&self, issue: IssueId) -> bool {
        self.registry.is_enabled(issue)
    }

    /// Effective platform level of a folder: the higher of its `vNN`
    /// qualifier and the minimum SDK, when either is known
    pub fn api_level(&self, folder: &ResourceFolder) -> Option<u32> {
        match (folder.qualifiers.api_level, self.options.min_sdk) {
            (Some(a), Some(b)) => Some(a.max(b)),
            (a, b) => a.or(b),
        }
    }

    pub fn list_limit(&self) -> Option<usize> {
        self.options.list_limit()
    }
}

/// A checker over the resource snapshot
pub trait Check: Send + Sync {
    /// Short name used in logs and progress events
    fn name(&self) -> &'static str;

    /// Issues this checker can report
    fn issues(&self) -> &'static [IssueId];

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>);
}

/// Every built-in checker, in execution order
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(UnreadableCheck),
        Box::new(LocationCheck),
        Box::new(DuplicateCheck),
        Box::new(DensityCheck),
        Box::new(NoDpiCheck),
        Box::new(DipSizeCheck),
        Box::new(ExtensionCheck),
        Box::new(ColorCheck),
        Box::new(ExpectedSizeCheck),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn test_every_issue_has_a_checker() {
        let covered: BTreeSet<IssueId> = default_checks()
            .iter()
            .flat_map(|c| c.issues().iter().copied())
            .collect();
        for id in IssueId::ALL {
            assert!(covered.contains(&id), "no checker reports {}", id);
        }
    }

    #[test]
    fn test_checker_names_unique() {
        let names: BTreeSet<&str> = default_checks().iter().map(|c| c.name()).collect();
        assert_eq!(names.len(), default_checks().len());
    }
}
