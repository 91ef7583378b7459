//! Analysis engine: runs the checkers and merges their findings

use crate::checks::{default_checks, Check, CheckContext};
use crate::config::{LintOptions, ReportOrder};
use crate::diagnostic::Diagnostic;
use crate::ignore::{IgnorePolicy, NoIgnores};
use crate::issue::IssueRegistry;
use crate::signals::{NoSignals, UsageSignals};
use iconlint_resource::ResourceSnapshot;
use std::cmp::Reverse;
use std::ops::ControlFlow;

/// Progress event sent to the observer after each checker
#[derive(Debug, Clone, Copy)]
pub struct CheckProgress<'a> {
    pub check: &'a str,
    /// Position of the checker in execution order
    pub index: usize,
    pub total: usize,
    /// Raw diagnostics collected so far
    pub diagnostics: usize,
}

/// Result of a possibly interrupted analysis
#[derive(Debug)]
pub struct AnalysisOutcome {
    pub diagnostics: Vec<Diagnostic>,
    /// Name of the last checker that ran
    pub last_check: Option<&'static str>,
    /// False when the observer stopped the run early
    pub completed: bool,
}

/// Runs checkers over a snapshot
pub struct Analyzer<'a> {
    registry: &'a IssueRegistry,
    options: &'a LintOptions,
    ignore: &'a dyn IgnorePolicy,
    signals: &'a dyn UsageSignals,
    checks: Vec<Box<dyn Check>>,
}

impl<'a> Analyzer<'a> {
    /// Create an analyzer with every built-in checker and no collaborators
    pub fn new(registry: &'a IssueRegistry, options: &'a LintOptions) -> Self {
        Self {
            registry,
            options,
            ignore: &NoIgnores,
            signals: &NoSignals,
            checks: default_checks(),
        }
    }

    pub fn with_ignore(mut self, ignore: &'a dyn IgnorePolicy) -> Self {
        self.ignore = ignore;
        self
    }

    pub fn with_signals(mut self, signals: &'a dyn UsageSignals) -> Self {
        self.signals = signals;
        self
    }

    /// Replace the checker list
    pub fn with_checks(mut self, checks: Vec<Box<dyn Check>>) -> Self {
        self.checks = checks;
        self
    }

    /// Run every checker and return the ordered diagnostics
    pub fn analyze(&self, snapshot: &ResourceSnapshot) -> Vec<Diagnostic> {
        self.analyze_with(snapshot, |_| ControlFlow::Continue(()))
            .diagnostics
    }

    /// Run the checkers in order, consulting `observer` after each one.
    ///
    /// Returning `ControlFlow::Break` stops the run; diagnostics found so
    /// far are still filtered and ordered.
    pub fn analyze_with<F>(&self, snapshot: &ResourceSnapshot, mut observer: F) -> AnalysisOutcome
    where
        F: FnMut(&CheckProgress<'_>) -> ControlFlow<()>,
    {
        let ctx = CheckContext {
            snapshot,
            options: self.options,
            registry: self.registry,
            ignore: self.ignore,
            signals: self.signals,
        };

        let total = self.checks.len();
        let mut collected = Vec::new();
        let mut last_check = None;

        let flow = self
            .checks
            .iter()
            .enumerate()
            .filter(|(_, check)| check.issues().iter().any(|id| self.registry.is_enabled(*id)))
            .try_for_each(|(index, check)| {
                let before = collected.len();
                check.run(&ctx, &mut collected);
                last_check = Some(check.name());
                tracing::debug!(
                    check = check.name(),
                    found = collected.len() - before,
                    "check finished"
                );
                observer(&CheckProgress {
                    check: check.name(),
                    index,
                    total,
                    diagnostics: collected.len(),
                })
            });

        if flow.is_break() {
            tracing::debug!(last = ?last_check, "analysis stopped early");
        }

        AnalysisOutcome {
            diagnostics: self.finish(collected),
            last_check,
            completed: flow.is_continue(),
        }
    }

    /// Drop disabled and exempt findings, assign severities and order
    fn finish(&self, collected: Vec<Diagnostic>) -> Vec<Diagnostic> {
        let mut diagnostics: Vec<Diagnostic> = collected
            .into_iter()
            .filter(|d| self.registry.is_enabled(d.issue))
            .filter(|d| !self.ignore.is_ignored(d.issue, d.path()))
            .map(|mut d| {
                d.severity = self.registry.severity(d.issue);
                d
            })
            .collect();

        match self.options.order {
            ReportOrder::Path => diagnostics.sort_by(|a, b| {
                (a.path(), a.issue.as_str(), &a.message).cmp(&(b.path(), b.issue.as_str(), &b.message))
            }),
            ReportOrder::Priority => diagnostics.sort_by(|a, b| {
                let key = |d: &Diagnostic| {
                    (
                        Reverse(self.registry.priority(d.issue)),
                        d.issue.as_str(),
                        d.location.name.clone(),
                        d.message.clone(),
                        d.location.path.clone(),
                    )
                };
                key(a).cmp(&key(b))
            }),
        }
        diagnostics
    }
}
