//! IconColors: gray action bar icons and white notification icons

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;
use crate::signals::IconRole;

/// Platform level of the holo style guidelines
const HOLO_API: u32 = 11;
/// Platform level where notification icons became gray-scale
const GRAY_NOTIFICATION_API: u32 = 9;

const ACTION_BAR_MESSAGE: &str = "Action Bar icons should use a single gray color (#333333 for light themes (with 60%/30% opacity for enabled/disabled), and #FFFFFF with opacity 80%/30% for dark themes";

/// Color conventions for action bar and notification icons
pub struct ColorCheck;

impl Check for ColorCheck {
    fn name(&self) -> &'static str {
        "colors"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::Colors]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        let thresholds = &ctx.options.thresholds;

        for (folder, file) in ctx.snapshot.files() {
            if file.is_nine_patch() {
                continue;
            }
            let Some(profile) = file.color_profile() else {
                continue;
            };
            let api = ctx.api_level(folder);
            let Some(role) = ctx.signals.role(&file.stem, api) else {
                continue;
            };
            let holo = api.map_or(true, |level| level >= HOLO_API);

            let message = match role {
                IconRole::ActionBar if holo => {
                    let single_gray =
                        profile.is_single_gray(thresholds.channel_tolerance, thresholds.gray_tolerance);
                    (!single_gray).then_some(ACTION_BAR_MESSAGE)
                }
                IconRole::Notification => match api {
                    _ if holo => (!profile.all_white).then_some("Notification icons must be entirely white"),
                    Some(level) if level >= GRAY_NOTIFICATION_API => {
                        (!profile.is_colorless(thresholds.channel_tolerance))
                            .then_some("Notification icons should not use colors")
                    }
                    _ => None,
                },
                _ => None,
            };

            if let Some(message) = message {
                tracing::trace!(path = %file.path, %role, "color convention violated");
                out.push(Diagnostic::new(IssueId::Colors, &file.path, message));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LintOptions;
    use crate::fixtures::{messages, pattern_png, png, run_with};
    use crate::ignore::NoIgnores;
    use crate::issue::IssueId;
    use crate::signals::{IconRole, NamingConventions, NoSignals, RoleMap};
    use iconlint_resource::MemoryProvider;

    fn min_sdk(level: u32) -> LintOptions {
        LintOptions {
            min_sdk: Some(level),
            ..Default::default()
        }
    }

    const GRAY: [u8; 4] = [0x33, 0x33, 0x33, 0x99];

    #[test]
    fn test_conventions_at_api_14() {
        let colorful = pattern_png(32, 32, 5);
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/ic_menu_my_action.png", colorful.clone())
            .file("res/drawable-mdpi-v11/ic_stat_my_notification.png", colorful.clone())
            .file("res/drawable-mdpi-v9/ic_stat_my_notification2.png", colorful)
            .file("res/drawable-mdpi/ic_menu_add_clip_normal.png", png(32, 32, GRAY));

        let diagnostics = run_with(&provider, &min_sdk(14), &[IssueId::Colors], &NoIgnores, &NamingConventions);
        let paths: Vec<&str> = diagnostics.iter().map(|d| d.path()).collect();
        assert_eq!(
            paths,
            vec![
                "res/drawable-mdpi-v11/ic_stat_my_notification.png",
                "res/drawable-mdpi-v9/ic_stat_my_notification2.png",
                "res/drawable-mdpi/ic_menu_my_action.png",
            ]
        );
        assert_eq!(diagnostics[0].message, "Notification icons must be entirely white");
        assert_eq!(diagnostics[2].message, super::ACTION_BAR_MESSAGE);
    }

    #[test]
    fn test_no_role_no_check() {
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/icon1.png", pattern_png(32, 32, 1))
            .file("res/drawable-mdpi/ic_stat_x.png", pattern_png(32, 32, 2));
        let diagnostics = run_with(&provider, &min_sdk(14), &[IssueId::Colors], &NoIgnores, &NoSignals);
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_explicit_roles() {
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/icon1.png", pattern_png(32, 32, 1))
            .file("res/drawable-mdpi/icon2.png", png(32, 32, GRAY))
            .file("res/drawable-mdpi/icon3.png", png(24, 24, [255, 255, 255, 200]))
            .file("res/drawable-mdpi/icon4.png", png(24, 24, [0xcc, 0xcc, 0xcc, 255]));
        let roles = RoleMap::new()
            .with("icon1", IconRole::ActionBar)
            .with("icon2", IconRole::ActionBar)
            .with("icon3", IconRole::Notification)
            .with("icon4", IconRole::Notification);
        let diagnostics = run_with(&provider, &min_sdk(14), &[IssueId::Colors], &NoIgnores, &roles);
        let paths: Vec<&str> = diagnostics.iter().map(|d| d.path()).collect();
        assert_eq!(paths, vec!["res/drawable-mdpi/icon1.png", "res/drawable-mdpi/icon4.png"]);
    }

    #[test]
    fn test_legacy_notifications() {
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/gray.png", png(25, 25, [0x80, 0x80, 0x80, 255]))
            .file("res/drawable-mdpi/color.png", pattern_png(25, 25, 3));
        let roles = RoleMap::new()
            .with("gray", IconRole::Notification)
            .with("color", IconRole::Notification);

        let at_9 = run_with(&provider, &min_sdk(9), &[IssueId::Colors], &NoIgnores, &roles);
        assert_eq!(messages(&at_9), vec!["Notification icons should not use colors"]);
        assert_eq!(at_9[0].path(), "res/drawable-mdpi/color.png");

        let at_4 = run_with(&provider, &min_sdk(4), &[IssueId::Colors], &NoIgnores, &roles);
        assert!(at_4.is_empty());
    }

    #[test]
    fn test_action_bar_ignored_before_holo() {
        let provider = MemoryProvider::new().file("res/drawable-mdpi/a.png", pattern_png(32, 32, 1));
        let roles = RoleMap::new().with("a", IconRole::ActionBar);
        assert!(run_with(&provider, &min_sdk(8), &[IssueId::Colors], &NoIgnores, &roles).is_empty());
        assert_eq!(
            run_with(&provider, &LintOptions::default(), &[IssueId::Colors], &NoIgnores, &roles).len(),
            1
        );
    }

    #[test]
    fn test_nine_patch_skipped() {
        let provider = MemoryProvider::new().file("res/drawable-mdpi/ic_action_bg.9.png", pattern_png(32, 32, 1));
        let diagnostics = run_with(&provider, &min_sdk(14), &[IssueId::Colors], &NoIgnores, &NamingConventions);
        assert!(diagnostics.is_empty());
    }
}
