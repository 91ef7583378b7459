//! IconNoDpi: icons present both in -nodpi and in a density folder

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::format::format_list;
use crate::issue::IssueId;
use iconlint_resource::{FolderDensity, ResourceFile, ResourceType};
use std::collections::{BTreeMap, BTreeSet};

/// Names listed before truncating
const NAME_LIMIT: usize = 10;

/// Icons present both in `-nodpi` and in a density folder
pub struct NoDpiCheck;

#[derive(Default)]
struct Placements<'a> {
    nodpi: Vec<&'a ResourceFile>,
    density: Vec<&'a ResourceFile>,
}

impl Check for NoDpiCheck {
    fn name(&self) -> &'static str {
        "nodpi"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::NoDpi]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for root in ctx.snapshot.roots() {
            // `@drawable/x` and `@mipmap/x` are different resources
            let mut by_stem: BTreeMap<(ResourceType, &str), Placements<'_>> = BTreeMap::new();
            for folder in &root.folders {
                for file in &folder.files {
                    let key = (folder.qualifiers.resource_type, file.stem.as_str());
                    let entry = by_stem.entry(key).or_default();
                    match folder.qualifiers.density {
                        FolderDensity::NoDpi => entry.nodpi.push(file),
                        FolderDensity::Bucket(_) => entry.density.push(file),
                        FolderDensity::Unqualified => {}
                    }
                }
            }

            for placements in by_stem.into_values() {
                if placements.nodpi.is_empty() || placements.density.is_empty() {
                    continue;
                }
                out.push(overlap_diagnostic(ctx, placements));
            }
        }
    }
}

fn overlap_diagnostic(ctx: &CheckContext<'_>, placements: Placements<'_>) -> Diagnostic {
    let mut nodpi = placements.nodpi;
    nodpi.sort_by(|a, b| a.path.cmp(&b.path));
    let primary = nodpi[0];

    let mut all: Vec<&ResourceFile> = nodpi.iter().copied().chain(placements.density).collect();
    all.sort_by(|a, b| a.path.cmp(&b.path));

    let names: Vec<&str> = all
        .iter()
        .map(|f| f.name.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();
    let limit = ctx.options.abbreviate.then_some(NAME_LIMIT);

    let mut diagnostic = Diagnostic::new(
        IssueId::NoDpi,
        &primary.path,
        format!(
            "The following images appear in both -nodpi and in a density folder: {}",
            format_list(&names, limit)
        ),
    );
    for file in all.iter().filter(|f| f.path != primary.path) {
        diagnostic = diagnostic.with_secondary(&file.path);
    }
    diagnostic
}

#[cfg(test)]
mod tests {
    use crate::config::LintOptions;
    use crate::fixtures::{pattern_png, run};
    use crate::issue::IssueId;
    use iconlint_resource::MemoryProvider;

    #[test]
    fn test_overlap_reported_once() {
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/frame.png", pattern_png(8, 8, 1))
            .file("res/drawable-nodpi/frame.png", pattern_png(8, 8, 2))
            .file("res/drawable-xlarge-nodpi-v11/frame.png", pattern_png(8, 8, 3));
        let diagnostics = run(&provider, &LintOptions::default(), &[IssueId::NoDpi]);
        assert_eq!(diagnostics.len(), 1);
        let d = &diagnostics[0];
        assert_eq!(
            d.message,
            "The following images appear in both -nodpi and in a density folder: frame.png"
        );
        assert_eq!(d.path(), "res/drawable-nodpi/frame.png");
        let secondary: Vec<&str> = d.secondary.iter().map(|s| s.location.path.as_str()).collect();
        assert_eq!(
            secondary,
            vec!["res/drawable-mdpi/frame.png", "res/drawable-xlarge-nodpi-v11/frame.png"]
        );
    }

    #[test]
    fn test_overlap_across_extensions() {
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/frame.png", pattern_png(8, 8, 1))
            .file("res/drawable-nodpi/frame.xml", b"<selector/>".to_vec());
        let diagnostics = run(&provider, &LintOptions::default(), &[IssueId::NoDpi]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(
            diagnostics[0].message,
            "The following images appear in both -nodpi and in a density folder: frame.png, frame.xml"
        );
        assert_eq!(diagnostics[0].path(), "res/drawable-nodpi/frame.xml");
    }

    #[test]
    fn test_extra_nodpi_names_are_fine() {
        let icon = pattern_png(8, 8, 1);
        let provider = MemoryProvider::new()
            .file("res/drawable-mdpi/frame.png", icon.clone())
            .file("res/drawable-nodpi/file1.png", icon.clone())
            .file("res/drawable/frame.png", icon);
        assert!(run(&provider, &LintOptions::default(), &[IssueId::NoDpi]).is_empty());
    }

    #[test]
    fn test_separate_roots() {
        let provider = MemoryProvider::new()
            .file("app/res/drawable-mdpi/frame.png", pattern_png(8, 8, 1))
            .file("lib/res/drawable-nodpi/frame.png", pattern_png(8, 8, 2));
        assert!(run(&provider, &LintOptions::default(), &[IssueId::NoDpi]).is_empty());
    }

    #[test]
    fn test_resource_types_kept_apart() {
        let provider = MemoryProvider::new()
            .file("res/drawable-nodpi/frame.png", pattern_png(8, 8, 1))
            .file("res/mipmap-mdpi/frame.png", pattern_png(8, 8, 2))
            .file("res/mipmap-nodpi/icon.png", pattern_png(8, 8, 3))
            .file("res/mipmap-hdpi/icon.png", pattern_png(8, 8, 4));
        let diagnostics = run(&provider, &LintOptions::default(), &[IssueId::NoDpi]);
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].path(), "res/mipmap-nodpi/icon.png");
    }
}
