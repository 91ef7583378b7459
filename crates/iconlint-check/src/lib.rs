//! iconlint Check - Icon consistency checks and reporting
//!
//! This crate runs a set of independent checkers over an immutable
//! `ResourceSnapshot` and merges their findings into one ordered list of
//! diagnostics.

mod analyzer;
mod checks;
mod config;
mod diagnostic;
mod format;
mod ignore;
mod issue;
mod report;
mod signals;

#[cfg(test)]
mod fixtures;

pub use analyzer::{AnalysisOutcome, Analyzer, CheckProgress};
pub use checks::{
    default_checks, Check, CheckContext, ColorCheck, DensityCheck, DipSizeCheck, DuplicateCheck,
    ExpectedSizeCheck, ExtensionCheck, LocationCheck, NoDpiCheck, UnreadableCheck,
};
pub use config::{
    ExpectedSizes, IssueOverride, LintConfig, LintConfigFile, LintOptions, ReportOrder,
    ThresholdOverrides, Thresholds,
};
pub use diagnostic::{Diagnostic, Location, SecondaryLocation};
pub use format::format_list;
pub use ignore::{IgnorePolicy, IgnoreRules, NoIgnores};
pub use issue::{Issue, IssueId, IssueRegistry, Severity};
pub use report::Report;
pub use signals::{IconRole, NamingConventions, NoSignals, RoleMap, SignalChain, UsageSignals};
