//! IconExpectedSize: pixel sizes against the recommended size per role

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;
use crate::signals::IconRole;
use iconlint_core::Density;

const HOLO_API: u32 = 11;
const GRAY_NOTIFICATION_API: u32 = 9;

/// Pre-holo gray notification icons: at most this size at mdpi
const GRAY_NOTIFICATION_MAX: [u32; 2] = [16, 25];
/// Oldest notification icons: exactly this size at mdpi
const LEGACY_NOTIFICATION: [u32; 2] = [25, 25];

/// Actual pixel size against the recommended size for the icon's role
pub struct ExpectedSizeCheck;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SizeRule {
    Exact(u32, u32),
    AtMost(u32, u32),
}

impl SizeRule {
    fn scaled(base: [u32; 2], density: Density, exact: bool) -> Self {
        let (w, h) = (density.scale_from_mdpi(base[0]), density.scale_from_mdpi(base[1]));
        if exact {
            SizeRule::Exact(w, h)
        } else {
            SizeRule::AtMost(w, h)
        }
    }

    fn violation(self, width: u32, height: u32) -> Option<String> {
        match self {
            SizeRule::Exact(w, h) if (w, h) != (width, height) => {
                Some(format!("expected {}x{}, but was {}x{}", w, h, width, height))
            }
            SizeRule::AtMost(w, h) if width > w || height > h => Some(format!(
                "icon size should be at most {}x{}, but was {}x{}",
                w, h, width, height
            )),
            _ => None,
        }
    }
}

impl Check for ExpectedSizeCheck {
    fn name(&self) -> &'static str {
        "expected_size"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::ExpectedSize]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        let sizes = &ctx.options.expected_sizes;

        for (folder, file) in ctx.snapshot.files() {
            let Some(density) = folder.qualifiers.density.bucket() else {
                continue;
            };
            let checked_format = match file.extension.as_str() {
                "png" => !file.is_nine_patch(),
                "jpg" | "jpeg" => true,
                _ => false,
            };
            if !checked_format {
                continue;
            }
            let Some(info) = file.image() else {
                continue;
            };

            let api = ctx.api_level(folder);
            let Some(role) = ctx.signals.role(&file.stem, api) else {
                continue;
            };

            let rule = match role {
                IconRole::Notification => match api {
                    Some(level) if level < GRAY_NOTIFICATION_API => {
                        SizeRule::scaled(LEGACY_NOTIFICATION, density, true)
                    }
                    Some(level) if level < HOLO_API => SizeRule::scaled(GRAY_NOTIFICATION_MAX, density, false),
                    _ => SizeRule::scaled(sizes.base(role), density, true),
                },
                _ => SizeRule::scaled(sizes.base(role), density, true),
            };

            if let Some(problem) = rule.violation(info.width, info.height) {
                out.push(Diagnostic::new(
                    IssueId::ExpectedSize,
                    &file.path,
                    format!("Incorrect icon size for {}/{}: {}", folder.name, file.name, problem),
                ));
            }
        }
    }
}
