//! Usage signals: which icons play a known role

use iconlint_core::{IconLintError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Roles with specific size and color guidelines
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IconRole {
    Launcher,
    ActionBar,
    Notification,
    Dialog,
    Tab,
    Menu,
}

impl fmt::Display for IconRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            IconRole::Launcher => "launcher",
            IconRole::ActionBar => "action_bar",
            IconRole::Notification => "notification",
            IconRole::Dialog => "dialog",
            IconRole::Tab => "tab",
            IconRole::Menu => "menu",
        };
        f.write_str(s)
    }
}

impl FromStr for IconRole {
    type Err = IconLintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "launcher" => Ok(IconRole::Launcher),
            "action_bar" | "actionbar" => Ok(IconRole::ActionBar),
            "notification" => Ok(IconRole::Notification),
            "dialog" => Ok(IconRole::Dialog),
            "tab" => Ok(IconRole::Tab),
            "menu" => Ok(IconRole::Menu),
            _ => Err(IconLintError::ConfigError(format!("unknown icon role '{}'", s))),
        }
    }
}

/// Source of icon role information.
///
/// Color and size checks only look at icons a signal source claims; without
/// any source they are silent.
pub trait UsageSignals: Send + Sync {
    /// Role of the icon named `stem`, as seen from a folder with the given
    /// effective platform level
    fn role(&self, stem: &str, api_level: Option<u32>) -> Option<IconRole>;
}

/// No usage information
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSignals;

impl UsageSignals for NoSignals {
    fn role(&self, _stem: &str, _api_level: Option<u32>) -> Option<IconRole> {
        None
    }
}

/// Explicit stem -> role assignments
#[derive(Debug, Default, Clone)]
pub struct RoleMap {
    roles: BTreeMap<String, IconRole>,
}

impl RoleMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, stem: impl Into<String>, role: IconRole) {
        self.roles.insert(stem.into(), role);
    }

    pub fn with(mut self, stem: impl Into<String>, role: IconRole) -> Self {
        self.insert(stem, role);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<(String, IconRole)> for RoleMap {
    fn from_iter<I: IntoIterator<Item = (String, IconRole)>>(iter: I) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}

impl UsageSignals for RoleMap {
    fn role(&self, stem: &str, _api_level: Option<u32>) -> Option<IconRole> {
        self.roles.get(stem).copied()
    }
}

/// Roles guessed from the conventional `ic_*` name prefixes
#[derive(Debug, Default, Clone, Copy)]
pub struct NamingConventions;

/// Platform level where menu icons moved into the action bar
const ACTION_BAR_API: u32 = 11;

impl UsageSignals for NamingConventions {
    fn role(&self, stem: &str, api_level: Option<u32>) -> Option<IconRole> {
        if stem.starts_with("ic_launcher") {
            Some(IconRole::Launcher)
        } else if stem.starts_with("ic_action_") {
            Some(IconRole::ActionBar)
        } else if stem.starts_with("ic_menu_") {
            match api_level {
                Some(level) if level >= ACTION_BAR_API => Some(IconRole::ActionBar),
                _ => Some(IconRole::Menu),
            }
        } else if stem.starts_with("ic_stat_") {
            Some(IconRole::Notification)
        } else if stem.starts_with("ic_dialog_") {
            Some(IconRole::Dialog)
        } else if stem.starts_with("ic_tab_") {
            Some(IconRole::Tab)
        } else if stem.starts_with("ic_") {
            Some(IconRole::Menu)
        } else {
            None
        }
    }
}

/// Several sources consulted in order; the first answer wins
#[derive(Default)]
pub struct SignalChain {
    sources: Vec<Box<dyn UsageSignals>>,
}

impl SignalChain {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, source: impl UsageSignals + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }
}

impl UsageSignals for SignalChain {
    fn role(&self, stem: &str, api_level: Option<u32>) -> Option<IconRole> {
        self.sources.iter().find_map(|s| s.role(stem, api_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_signals() {
        assert_eq!(NoSignals.role("ic_launcher", Some(20)), None);
    }

    #[test]
    fn test_naming_conventions() {
        let n = NamingConventions;
        assert_eq!(n.role("ic_launcher", None), Some(IconRole::Launcher));
        assert_eq!(n.role("ic_launcher_round", None), Some(IconRole::Launcher));
        assert_eq!(n.role("ic_action_search", None), Some(IconRole::ActionBar));
        assert_eq!(n.role("ic_stat_sync", None), Some(IconRole::Notification));
        assert_eq!(n.role("ic_dialog_alert", None), Some(IconRole::Dialog));
        assert_eq!(n.role("ic_tab_home", None), Some(IconRole::Tab));
        assert_eq!(n.role("ic_other", None), Some(IconRole::Menu));
        assert_eq!(n.role("background", None), None);
    }

    #[test]
    fn test_menu_icons_follow_api_level() {
        let n = NamingConventions;
        assert_eq!(n.role("ic_menu_add", Some(14)), Some(IconRole::ActionBar));
        assert_eq!(n.role("ic_menu_add", Some(8)), Some(IconRole::Menu));
        assert_eq!(n.role("ic_menu_add", None), Some(IconRole::Menu));
    }

    #[test]
    fn test_chain_prefers_earlier_sources() {
        let chain = SignalChain::new()
            .push(RoleMap::new().with("ic_stat_custom", IconRole::ActionBar))
            .push(NamingConventions);
        assert_eq!(chain.len(), 2);
        assert_eq!(chain.role("ic_stat_custom", None), Some(IconRole::ActionBar));
        assert_eq!(chain.role("ic_stat_other", None), Some(IconRole::Notification));
        assert_eq!(SignalChain::new().role("ic_launcher", None), None);
    }

    #[test]
    fn test_role_serde() {
        let role: IconRole = toml::from_str::<BTreeMap<String, IconRole>>("a = \"action_bar\"")
            .unwrap()["a"];
        assert_eq!(role, IconRole::ActionBar);
        assert_eq!(IconRole::ActionBar.to_string(), "action_bar");
        assert_eq!("Action-Bar".parse::<IconRole>().unwrap(), IconRole::ActionBar);
        assert!("toolbar".parse::<IconRole>().is_err());
    }
}
