//! Issue definitions and the issue registry

use crate::config::IssueOverride;
use iconlint_core::{IconLintError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Severity level for diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl Severity {
    /// Label used in the text report
    pub fn label(self) -> &'static str {
        match self {
            Severity::Error => "Error",
            Severity::Warning => "Warning",
            Severity::Info => "Info",
        }
    }
}

/// Stable identifiers of the issues the checkers report
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IssueId {
    #[serde(rename = "IconDuplicatesConfig")]
    DuplicatesConfig,
    #[serde(rename = "IconDuplicates")]
    Duplicates,
    #[serde(rename = "GifUsage")]
    GifUsage,
    #[serde(rename = "IconDensities")]
    Densities,
    #[serde(rename = "IconDipSize")]
    DipSize,
    #[serde(rename = "IconExtension")]
    Extension,
    #[serde(rename = "IconLocation")]
    Location,
    #[serde(rename = "IconMissingDensityFolder")]
    MissingDensityFolder,
    #[serde(rename = "IconNoDpi")]
    NoDpi,
    #[serde(rename = "IconColors")]
    Colors,
    #[serde(rename = "IconExpectedSize")]
    ExpectedSize,
    #[serde(rename = "IconUnreadable")]
    Unreadable,
}

impl IssueId {
    pub const ALL: [IssueId; 12] = [
        IssueId::DuplicatesConfig,
        IssueId::Duplicates,
        IssueId::GifUsage,
        IssueId::Densities,
        IssueId::DipSize,
        IssueId::Extension,
        IssueId::Location,
        IssueId::MissingDensityFolder,
        IssueId::NoDpi,
        IssueId::Colors,
        IssueId::ExpectedSize,
        IssueId::Unreadable,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            IssueId::DuplicatesConfig => "IconDuplicatesConfig",
            IssueId::Duplicates => "IconDuplicates",
            IssueId::GifUsage => "GifUsage",
            IssueId::Densities => "IconDensities",
            IssueId::DipSize => "IconDipSize",
            IssueId::Extension => "IconExtension",
            IssueId::Location => "IconLocation",
            IssueId::MissingDensityFolder => "IconMissingDensityFolder",
            IssueId::NoDpi => "IconNoDpi",
            IssueId::Colors => "IconColors",
            IssueId::ExpectedSize => "IconExpectedSize",
            IssueId::Unreadable => "IconUnreadable",
        }
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IssueId {
    type Err = IconLintError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| IconLintError::UnknownIssue(s.to_string()))
    }
}

/// Static description of an issue
#[derive(Debug, Clone, Serialize)]
pub struct Issue {
    pub id: IssueId,
    pub summary: &'static str,
    pub explanation: &'static str,
    /// 1-10, higher sorts first in priority-ordered reports
    pub priority: u8,
    pub default_severity: Severity,
    pub enabled_by_default: bool,
}

fn builtin_issues() -> Vec<Issue> {
    vec![
        Issue {
            id: IssueId::DuplicatesConfig,
            summary: "Identical bitmaps across various configurations",
            explanation: "If an icon is provided under different configuration parameters such as \
                drawable-hdpi or -v11, they should typically be different. This check finds \
                icons that have identical contents in several configuration folders, which is \
                usually a copy-paste mistake.",
            priority: 5,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::Duplicates,
            summary: "Duplicated icons under different names",
            explanation: "Icons with different names but identical contents waste space. Keep \
                one copy and reference it, or use an alias resource.",
            priority: 3,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::GifUsage,
            summary: "Using the .gif format for bitmaps is discouraged",
            explanation: "The .gif file format is discouraged. Consider using .png (preferred) \
                or .jpg (acceptable) instead.",
            priority: 5,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::Densities,
            summary: "Icon densities validation",
            explanation: "Icons will look best if a custom version is provided for each of the \
                major screen density classes. This check finds density folders that are \
                missing icons present in the other density folders.",
            priority: 4,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::DipSize,
            summary: "Icon density-independent size validation",
            explanation: "The density-independent size of an icon should be the same across \
                density folders. An icon whose pixel size does not scale with the density \
                ratio was probably placed in the wrong folder.",
            priority: 5,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::Extension,
            summary: "Icon format does not match the file extension",
            explanation: "A file named .png that actually holds a JPEG or GIF (or the other way \
                around) is misleading and may be handled incorrectly by build tools.",
            priority: 3,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::Location,
            summary: "Image defined in density-independent drawable folder",
            explanation: "Bitmaps in a folder without a density qualifier are scaled at \
                runtime. Provide density-specific versions, or move the bitmap to a -nodpi \
                folder if it should never be scaled.",
            priority: 5,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::MissingDensityFolder,
            summary: "Missing density folder",
            explanation: "Icons will look best if a custom version is provided for each of the \
                major screen density classes. This check reports the standard density folders \
                that do not exist at all.",
            priority: 3,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::NoDpi,
            summary: "Icon appears in both -nodpi and dpi folders",
            explanation: "Bitmaps in a -nodpi folder are never scaled. Also providing the same \
                icon in a density folder is ambiguous: the density version usually wins.",
            priority: 7,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::Colors,
            summary: "Icon colors do not follow the recommended visual style",
            explanation: "Action bar icons should use a single gray color, and notification \
                icons must be entirely white. Only icons known to play one of these roles are \
                checked.",
            priority: 6,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
        Issue {
            id: IssueId::ExpectedSize,
            summary: "Icon has incorrect size",
            explanation: "Launcher, action bar, notification and other icon roles have \
                recommended pixel sizes per density. This check compares the actual size of \
                icons with a known role against those sizes.",
            priority: 5,
            default_severity: Severity::Warning,
            enabled_by_default: false,
        },
        Issue {
            id: IssueId::Unreadable,
            summary: "Icon could not be decoded",
            explanation: "The file has a bitmap extension but its contents could not be read \
                as an image. It is excluded from all other content checks.",
            priority: 6,
            default_severity: Severity::Warning,
            enabled_by_default: true,
        },
    ]
}

#[derive(Debug, Clone, Copy)]
struct IssueSettings {
    enabled: bool,
    severity: Severity,
}

/// Registry holding every issue and its effective settings
#[derive(Debug, Clone)]
pub struct IssueRegistry {
    issues: Vec<Issue>,
    settings: BTreeMap<IssueId, IssueSettings>,
}

impl Default for IssueRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl IssueRegistry {
    /// Registry with the built-in issues and their default settings
    pub fn builtin() -> Self {
        let issues = builtin_issues();
        let settings = issues
            .iter()
            .map(|i| {
                (
                    i.id,
                    IssueSettings {
                        enabled: i.enabled_by_default,
                        severity: i.default_severity,
                    },
                )
            })
            .collect();
        Self { issues, settings }
    }

    /// Apply configuration overrides
    pub fn apply_overrides(&mut self, overrides: &BTreeMap<IssueId, IssueOverride>) {
        for (id, o) in overrides {
            if let Some(enabled) = o.enabled {
                self.set_enabled(*id, enabled);
            }
            if let Some(severity) = o.severity {
                self.set_severity(*id, severity);
            }
        }
    }

    /// Enable exactly the given issues
    pub fn enable_only(&mut self, ids: &[IssueId]) {
        for (id, s) in self.settings.iter_mut() {
            s.enabled = ids.contains(id);
        }
    }

    /// Enable every issue, including those off by default
    pub fn enable_all(&mut self) {
        for s in self.settings.values_mut() {
            s.enabled = true;
        }
    }

    pub fn set_enabled(&mut self, id: IssueId, enabled: bool) {
        if let Some(s) = self.settings.get_mut(&id) {
            s.enabled = enabled;
        }
    }

    pub fn set_severity(&mut self, id: IssueId, severity: Severity) {
        if let Some(s) = self.settings.get_mut(&id) {
            s.severity = severity;
        }
    }

    pub fn is_enabled(&self, id: IssueId) -> bool {
        self.settings.get(&id).map(|s| s.enabled).unwrap_or(false)
    }

    pub fn severity(&self, id: IssueId) -> Severity {
        self.settings
            .get(&id)
            .map(|s| s.severity)
            .unwrap_or(Severity::Warning)
    }

    /// Get an issue description
    pub fn get(&self, id: IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| i.id == id)
    }

    /// Priority of an issue (0 if unknown)
    pub fn priority(&self, id: IssueId) -> u8 {
        self.get(id).map(|i| i.priority).unwrap_or(0)
    }

    /// Get all issues
    pub fn all(&self) -> &[Issue] {
        &self.issues
    }

    /// Ids of the enabled issues
    pub fn enabled(&self) -> Vec<IssueId> {
        self.settings
            .iter()
            .filter(|(_, s)| s.enabled)
            .map(|(id, _)| *id)
            .collect()
    }
}
