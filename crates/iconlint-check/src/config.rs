//! Layered configuration
//!
//! Settings are resolved with increasing precedence:
//! 1. `AndroidManifest.xml` (minimum SDK only)
//! 2. Global: `~/.iconlint/config.toml`
//! 3. Project: `iconlint.toml`, then `lint.xml` issue settings, or one
//!    explicitly named file in their place
//! 4. Environment variables: `ICONLINT_MIN_SDK`, `ICONLINT_ABBREVIATE`
//!
//! Command-line flags are applied on top by the caller.

use crate::ignore::IgnoreRules;
use crate::issue::{IssueId, IssueRegistry, Severity};
use crate::signals::{IconRole, NamingConventions, RoleMap, SignalChain};
use iconlint_core::{Density, IconLintError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use xmltree::{Element, XMLNode};

/// Diagnostic ordering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportOrder {
    /// Primary path, then issue id, then message
    #[default]
    Path,
    /// Issue priority (highest first), issue id, file name, message
    Priority,
}

impl std::str::FromStr for ReportOrder {
    type Err = IconLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "path" => Ok(ReportOrder::Path),
            "priority" => Ok(ReportOrder::Priority),
            _ => Err(IconLintError::ConfigError(format!("unknown report order '{}'", s))),
        }
    }
}

/// Numeric thresholds used by the content checks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    /// Relative deviation from the mean dip size that is still accepted
    pub dip_tolerance: f32,
    /// Minimum number of density buckets before dip sizes are compared
    pub dip_min_buckets: usize,
    /// Accepted difference between gray levels in action bar icons
    pub gray_tolerance: u8,
    /// Accepted spread between color channels for a pixel to count as gray
    pub channel_tolerance: u8,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            dip_tolerance: 0.1,
            dip_min_buckets: 3,
            gray_tolerance: 0,
            channel_tolerance: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdOverrides {
    pub dip_tolerance: Option<f32>,
    pub dip_min_buckets: Option<usize>,
    pub gray_tolerance: Option<u8>,
    pub channel_tolerance: Option<u8>,
}

/// Base (mdpi) icon sizes per role, as `[width, height]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpectedSizes {
    pub launcher: [u32; 2],
    pub action_bar: [u32; 2],
    pub notification: [u32; 2],
    pub dialog: [u32; 2],
    pub tab: [u32; 2],
    pub menu: [u32; 2],
}

impl Default for ExpectedSizes {
    fn default() -> Self {
        Self {
            launcher: [48, 48],
            action_bar: [32, 32],
            notification: [24, 24],
            dialog: [32, 32],
            tab: [32, 32],
            menu: [48, 48],
        }
    }
}

impl ExpectedSizes {
    pub fn base(&self, role: IconRole) -> [u32; 2] {
        match role {
            IconRole::Launcher => self.launcher,
            IconRole::ActionBar => self.action_bar,
            IconRole::Notification => self.notification,
            IconRole::Dialog => self.dialog,
            IconRole::Tab => self.tab,
            IconRole::Menu => self.menu,
        }
    }

    pub fn set(&mut self, role: IconRole, size: [u32; 2]) {
        let slot = match role {
            IconRole::Launcher => &mut self.launcher,
            IconRole::ActionBar => &mut self.action_bar,
            IconRole::Notification => &mut self.notification,
            IconRole::Dialog => &mut self.dialog,
            IconRole::Tab => &mut self.tab,
            IconRole::Menu => &mut self.menu,
        };
        *slot = size;
    }
}

/// Options read by the checkers
#[derive(Debug, Clone, PartialEq)]
pub struct LintOptions {
    /// Minimum supported platform level, if known
    pub min_sdk: Option<u32>,
    /// Truncate long name lists in messages
    pub abbreviate: bool,
    /// Names shown before a list is truncated
    pub abbreviation_limit: usize,
    /// Density folders every root with density folders should have
    pub required_densities: Vec<Density>,
    pub order: ReportOrder,
    pub thresholds: Thresholds,
    pub expected_sizes: ExpectedSizes,
}

impl Default for LintOptions {
    fn default() -> Self {
        Self {
            min_sdk: None,
            abbreviate: true,
            abbreviation_limit: 5,
            required_densities: Density::REQUIRED.to_vec(),
            order: ReportOrder::Path,
            thresholds: Thresholds::default(),
            expected_sizes: ExpectedSizes::default(),
        }
    }
}

impl LintOptions {
    /// Limit for name lists, `None` when abbreviation is off
    pub fn list_limit(&self) -> Option<usize> {
        self.abbreviate.then_some(self.abbreviation_limit)
    }
}

/// Per-issue settings from a config file or `lint.xml`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IssueOverride {
    pub enabled: Option<bool>,
    pub severity: Option<Severity>,
    /// Paths exempt from the issue (prefix match)
    pub ignore: Vec<String>,
}

impl IssueOverride {
    fn merge(&mut self, overlay: IssueOverride) {
        if overlay.enabled.is_some() {
            self.enabled = overlay.enabled;
        }
        if overlay.severity.is_some() {
            self.severity = overlay.severity;
        }
        self.ignore.extend(overlay.ignore);
    }
}

/// On-disk configuration file; every field is optional so layers merge
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LintConfigFile {
    pub min_sdk: Option<u32>,
    pub abbreviate: Option<bool>,
    pub abbreviation_limit: Option<usize>,
    pub order: Option<ReportOrder>,
    pub required_densities: Option<Vec<Density>>,
    pub naming_conventions: Option<bool>,
    pub thresholds: ThresholdOverrides,
    pub expected_sizes: BTreeMap<String, [u32; 2]>,
    pub roles: BTreeMap<String, String>,
    /// Keyed by issue id, or `all`
    pub issues: BTreeMap<String, IssueOverride>,
}

/// Key in `issues` that applies to every issue
const ALL_ISSUES: &str = "all";

/// Resolved configuration
#[derive(Debug, Clone, Default)]
pub struct LintConfig {
    pub options: LintOptions,
    /// Guess roles from `ic_*` names when no explicit role is given
    pub naming_conventions: bool,
    pub roles: RoleMap,
    pub issues: BTreeMap<IssueId, IssueOverride>,
    /// Paths exempt from every issue
    pub ignore_everywhere: Vec<String>,
}

impl LintConfig {
    /// Load every layer for the project in `project_dir`
    pub fn load(project_dir: &Path) -> Result<Self> {
        Self::load_with(project_dir, None)
    }

    /// Load every layer, with `project_file` (when given) standing in for
    /// the project's `iconlint.toml` and `lint.xml`
    pub fn load_with(project_dir: &Path, project_file: Option<&Path>) -> Result<Self> {
        let mut config = LintConfigFile::default();

        // Layer 1: manifest
        let manifest = project_dir.join("AndroidManifest.xml");
        if manifest.exists() {
            match iconlint_resource::read_min_sdk(&manifest) {
                Ok(min_sdk) => config.min_sdk = min_sdk,
                Err(e) => tracing::warn!("skipping {}: {}", manifest.display(), e),
            }
        }

        // Layer 2: global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                let global = Self::load_file(&global_path)?;
                Self::merge_into(&mut config, global);
            }
        }

        // Layer 3: project config and lint.xml, or the explicit file
        match project_file {
            Some(path) => {
                let explicit = Self::load_file(path)?;
                Self::merge_into(&mut config, explicit);
            }
            None => {
                let local_path = project_dir.join("iconlint.toml");
                if local_path.exists() {
                    let local = Self::load_file(&local_path)?;
                    Self::merge_into(&mut config, local);
                }
                let lint_xml = project_dir.join("lint.xml");
                if lint_xml.exists() {
                    let issues = Self::load_lint_xml(&lint_xml)?;
                    Self::merge_into(
                        &mut config,
                        LintConfigFile {
                            issues,
                            ..Default::default()
                        },
                    );
                }
            }
        }

        // Layer 4: environment
        Self::apply_env_overrides(&mut config);

        Self::resolve(config)
    }

    /// Parse config file contents without touching the environment
    pub fn from_toml(content: &str) -> Result<Self> {
        Self::resolve(toml::from_str(content)?)
    }

    /// Issue registry with this configuration's overrides applied
    pub fn registry(&self) -> IssueRegistry {
        let mut registry = IssueRegistry::builtin();
        registry.apply_overrides(&self.issues);
        registry
    }

    /// Exemptions from the `ignore` lists
    pub fn ignore_rules(&self) -> IgnoreRules {
        let mut rules = IgnoreRules::new();
        for path in &self.ignore_everywhere {
            rules.ignore_all(path);
        }
        for (id, o) in &self.issues {
            for path in &o.ignore {
                rules.ignore(*id, path);
            }
        }
        rules
    }

    /// Role sources: the explicit table first, then naming conventions
    pub fn signals(&self) -> SignalChain {
        let mut chain = SignalChain::new();
        if !self.roles.is_empty() {
            chain = chain.push(self.roles.clone());
        }
        if self.naming_conventions {
            chain = chain.push(NamingConventions);
        }
        chain
    }

    /// Read issue settings from a `lint.xml` file
    pub fn load_lint_xml(path: &Path) -> Result<BTreeMap<String, IssueOverride>> {
        let content = std::fs::read(path)?;
        let root = Element::parse(content.as_slice()).map_err(|e| IconLintError::XmlParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let mut issues: BTreeMap<String, IssueOverride> = BTreeMap::new();
        for node in &root.children {
            let XMLNode::Element(issue) = node else {
                continue;
            };
            if issue.name != "issue" {
                continue;
            }
            let Some(id) = issue.attributes.get("id") else {
                continue;
            };

            let mut o = IssueOverride::default();
            match issue.attributes.get("severity").map(|s| s.as_str()) {
                Some("ignore") => o.enabled = Some(false),
                Some("error") | Some("fatal") => o.severity = Some(Severity::Error),
                Some("warning") => o.severity = Some(Severity::Warning),
                Some("informational") | Some("info") => o.severity = Some(Severity::Info),
                Some(other) => tracing::warn!("unknown severity '{}' for {} in lint.xml", other, id),
                None => {}
            }
            for child in &issue.children {
                if let XMLNode::Element(ignore) = child {
                    if ignore.name == "ignore" {
                        if let Some(path) = ignore.attributes.get("path") {
                            o.ignore.push(path.clone());
                        }
                    }
                }
            }

            issues.entry(id.clone()).or_default().merge(o);
        }
        Ok(issues)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".iconlint").join("config.toml"))
    }

    fn load_file(path: &Path) -> Result<LintConfigFile> {
        let content = std::fs::read_to_string(path)?;
        let config: LintConfigFile = toml::from_str(&content).map_err(|e| {
            IconLintError::ConfigError(format!("Failed to parse config {}: {}", path.display(), e))
        })?;
        Ok(config)
    }

    fn merge_into(base: &mut LintConfigFile, overlay: LintConfigFile) {
        if overlay.min_sdk.is_some() {
            base.min_sdk = overlay.min_sdk;
        }
        if overlay.abbreviate.is_some() {
            base.abbreviate = overlay.abbreviate;
        }
        if overlay.abbreviation_limit.is_some() {
            base.abbreviation_limit = overlay.abbreviation_limit;
        }
        if overlay.order.is_some() {
            base.order = overlay.order;
        }
        if overlay.required_densities.is_some() {
            base.required_densities = overlay.required_densities;
        }
        if overlay.naming_conventions.is_some() {
            base.naming_conventions = overlay.naming_conventions;
        }

        let t = overlay.thresholds;
        if t.dip_tolerance.is_some() {
            base.thresholds.dip_tolerance = t.dip_tolerance;
        }
        if t.dip_min_buckets.is_some() {
            base.thresholds.dip_min_buckets = t.dip_min_buckets;
        }
        if t.gray_tolerance.is_some() {
            base.thresholds.gray_tolerance = t.gray_tolerance;
        }
        if t.channel_tolerance.is_some() {
            base.thresholds.channel_tolerance = t.channel_tolerance;
        }

        base.expected_sizes.extend(overlay.expected_sizes);
        base.roles.extend(overlay.roles);
        for (id, o) in overlay.issues {
            base.issues.entry(id).or_default().merge(o);
        }
    }

    fn apply_env_overrides(config: &mut LintConfigFile) {
        if let Ok(value) = std::env::var("ICONLINT_MIN_SDK") {
            match value.trim().parse::<u32>() {
                Ok(level) => config.min_sdk = Some(level),
                Err(_) => tracing::warn!("ignoring ICONLINT_MIN_SDK='{}'", value),
            }
        }
        if let Ok(value) = std::env::var("ICONLINT_ABBREVIATE") {
            config.abbreviate = Some(!matches!(
                value.trim().to_ascii_lowercase().as_str(),
                "0" | "false" | "no" | "off"
            ));
        }
    }

    fn resolve(file: LintConfigFile) -> Result<Self> {
        let defaults = LintOptions::default();
        let t = file.thresholds;

        let mut required = file
            .required_densities
            .unwrap_or(defaults.required_densities);
        required.sort();
        required.dedup();

        let mut expected_sizes = ExpectedSizes::default();
        for (role, size) in &file.expected_sizes {
            expected_sizes.set(role.parse()?, *size);
        }

        let mut roles = RoleMap::new();
        for (stem, role) in &file.roles {
            roles.insert(stem.clone(), role.parse()?);
        }

        let mut issues = BTreeMap::new();
        let mut ignore_everywhere = Vec::new();
        for (key, o) in file.issues {
            if key.eq_ignore_ascii_case(ALL_ISSUES) {
                ignore_everywhere.extend(o.ignore);
                continue;
            }
            let id: IssueId = key.parse()?;
            issues.insert(id, o);
        }

        Ok(LintConfig {
            options: LintOptions {
                min_sdk: file.min_sdk,
                abbreviate: file.abbreviate.unwrap_or(defaults.abbreviate),
                abbreviation_limit: file.abbreviation_limit.unwrap_or(defaults.abbreviation_limit),
                required_densities: required,
                order: file.order.unwrap_or(defaults.order),
                thresholds: Thresholds {
                    dip_tolerance: t.dip_tolerance.unwrap_or(defaults.thresholds.dip_tolerance),
                    dip_min_buckets: t
                        .dip_min_buckets
                        .unwrap_or(defaults.thresholds.dip_min_buckets),
                    gray_tolerance: t.gray_tolerance.unwrap_or(defaults.thresholds.gray_tolerance),
                    channel_tolerance: t
                        .channel_tolerance
                        .unwrap_or(defaults.thresholds.channel_tolerance),
                },
                expected_sizes,
            },
            naming_conventions: file.naming_conventions.unwrap_or(true),
            roles,
            issues,
            ignore_everywhere,
        })
    }
}
