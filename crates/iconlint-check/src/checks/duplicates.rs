//! Identical bitmap contents across files

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;
use iconlint_core::ContentHash;
use iconlint_resource::ResourceFile;
use std::collections::BTreeMap;

/// Same-name duplicates across configurations and cross-name duplicates
pub struct DuplicateCheck;

impl Check for DuplicateCheck {
    fn name(&self) -> &'static str {
        "duplicates"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::DuplicatesConfig, IssueId::Duplicates]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        let mut classes: BTreeMap<ContentHash, Vec<&ResourceFile>> = BTreeMap::new();
        for (_, file) in ctx.snapshot.files() {
            if file.is_readable_bitmap() {
                classes.entry(file.hash).or_default().push(file);
            }
        }

        for mut class in classes.into_values().filter(|c| c.len() >= 2) {
            class.sort_by(|a, b| a.path.cmp(&b.path));
            check_class(ctx, &class, out);
        }
    }
}

fn check_class(ctx: &CheckContext<'_>, class: &[&ResourceFile], out: &mut Vec<Diagnostic>) {
    // Name groups in order of first appearance; files stay in path order
    let mut groups: Vec<(&str, Vec<&ResourceFile>)> = Vec::new();
    for &file in class {
        match groups.iter_mut().find(|(name, _)| *name == file.name.as_str()) {
            Some((_, files)) => files.push(file),
            None => groups.push((file.name.as_str(), vec![file])),
        }
    }

    let mut representatives = Vec::new();
    for (name, files) in &groups {
        if files.len() >= 2 && ctx.is_enabled(IssueId::DuplicatesConfig) {
            let folders: Vec<&str> = files.iter().map(|f| f.folder_name.as_str()).collect();
            let paths: Vec<&str> = files.iter().map(|f| f.path.as_str()).collect();
            let message = format!(
                "The {} icon has identical contents in the following configuration folders: {}",
                name,
                folders.join(", ")
            );
            out.extend(Diagnostic::chained(IssueId::DuplicatesConfig, &paths, message));
        }
        if let Some(last) = files.last() {
            representatives.push(*last);
        }
    }

    if representatives.len() >= 2 && ctx.is_enabled(IssueId::Duplicates) {
        representatives.sort_by(|a, b| a.path.cmp(&b.path));
        let names: Vec<&str> = representatives.iter().map(|f| f.name.as_str()).collect();
        let paths: Vec<&str> = representatives.iter().map(|f| f.path.as_str()).collect();
        let message = format!(
            "The following unrelated icon files have identical contents: {}",
            names.join(", ")
        );
        out.extend(Diagnostic::chained(IssueId::Duplicates, &paths, message));
    }
}
