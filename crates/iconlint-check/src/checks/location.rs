//! GifUsage and IconLocation

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;
use iconlint_resource::FolderDensity;

/// First platform level with density-specific resource folders
const DENSITY_FOLDERS_API: u32 = 4;

/// GIF usage and bitmaps in density-less folders
pub struct LocationCheck;

impl Check for LocationCheck {
    fn name(&self) -> &'static str {
        "location"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::GifUsage, IssueId::Location]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        let gif = ctx.is_enabled(IssueId::GifUsage);
        let location = ctx.is_enabled(IssueId::Location)
            && ctx.options.min_sdk.is_some_and(|v| v >= DENSITY_FOLDERS_API);

        for (folder, file) in ctx.snapshot.files() {
            if gif && file.extension == "gif" {
                out.push(Diagnostic::new(
                    IssueId::GifUsage,
                    &file.path,
                    "Using the .gif format for bitmaps is discouraged",
                ));
            }
            if location && file.is_bitmap() && folder.qualifiers.density == FolderDensity::Unqualified {
                out.push(Diagnostic::new(
                    IssueId::Location,
                    &file.path,
                    format!("Found bitmap drawable {} in densityless folder", file.path),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::LintOptions;
    use crate::fixtures::{gif, messages, pattern_png, run};
    use crate::issue::IssueId;
    use iconlint_resource::MemoryProvider;

    fn tree() -> MemoryProvider {
        MemoryProvider::new()
            .file("res/drawable/icon.png", pattern_png(8, 8, 1))
            .file("res/drawable/shape.xml", b"<shape/>".to_vec())
            .file("res/drawable-nodpi/bg.png", pattern_png(8, 8, 2))
            .file("res/drawable-hdpi/anim.gif", gif(4, 4))
    }

    #[test]
    fn test_gif_usage() {
        let diagnostics = run(&tree(), &LintOptions::default(), &[IssueId::GifUsage]);
        assert_eq!(
            messages(&diagnostics),
            vec!["Using the .gif format for bitmaps is discouraged"]
        );
        assert_eq!(diagnostics[0].path(), "res/drawable-hdpi/anim.gif");
    }

    #[test]
    fn test_densityless_bitmaps_need_min_sdk() {
        assert!(run(&tree(), &LintOptions::default(), &[IssueId::Location]).is_empty());

        let options = LintOptions {
            min_sdk: Some(4),
            ..Default::default()
        };
        let diagnostics = run(&tree(), &options, &[IssueId::Location]);
        assert_eq!(
            messages(&diagnostics),
            vec!["Found bitmap drawable res/drawable/icon.png in densityless folder"]
        );
    }
}
