//! Density completeness: missing icons and missing density folders

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::format::format_list;
use crate::issue::IssueId;
use iconlint_core::Density;
use iconlint_resource::{file_stem, ResourceFolder, ResourceRoot, ResourceType};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Folders listed in a "found in" hint before truncating
const FOUND_IN_LIMIT: usize = 5;

pub struct DensityCheck;

impl Check for DensityCheck {
    fn name(&self) -> &'static str {
        "densities"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::Densities, IssueId::MissingDensityFolder]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for root in ctx.snapshot.roots() {
            if ctx.is_enabled(IssueId::Densities) {
                for folders in density_families(root).values() {
                    check_family(ctx, folders, out);
                }
            }
            if ctx.is_enabled(IssueId::MissingDensityFolder) {
                check_missing_folders(ctx, root, out);
            }
        }
    }
}

/// Density folders grouped by family, each in canonical density order
fn density_families(root: &ResourceRoot) -> BTreeMap<String, Vec<&ResourceFolder>> {
    let mut families: BTreeMap<String, Vec<&ResourceFolder>> = BTreeMap::new();
    for folder in &root.folders {
        if folder.qualifiers.density.bucket().is_some() {
            families
                .entry(folder.qualifiers.family())
                .or_default()
                .push(folder);
        }
    }
    for folders in families.values_mut() {
        folders.sort_by(|a, b| {
            (a.qualifiers.density.bucket(), &a.name).cmp(&(b.qualifiers.density.bucket(), &b.name))
        });
    }
    families
}

fn check_family(ctx: &CheckContext<'_>, folders: &[&ResourceFolder], out: &mut Vec<Diagnostic>) {
    let all_names: BTreeSet<&str> = folders
        .iter()
        .flat_map(|f| f.files.iter().map(|file| file.name.as_str()))
        .collect();

    for folder in folders {
        // Exempt folders still contribute names above
        if ctx.ignore.is_ignored(IssueId::Densities, &folder.path) {
            continue;
        }

        let stems: HashSet<&str> = folder.files.iter().map(|f| f.stem.as_str()).collect();
        let missing: Vec<&str> = all_names
            .iter()
            .copied()
            .filter(|name| !stems.contains(file_stem(name)))
            .collect();
        if missing.is_empty() {
            continue;
        }

        let found = match missing.as_slice() {
            [single] => {
                let found_in: Vec<&str> = folders
                    .iter()
                    .filter(|f| f.files.iter().any(|file| file.name == *single))
                    .map(|f| f.name.as_str())
                    .collect();
                format!(" (found in {})", format_list(&found_in, Some(FOUND_IN_LIMIT)))
            }
            _ => String::new(),
        };

        out.push(Diagnostic::new(
            IssueId::Densities,
            &folder.path,
            format!(
                "Missing the following drawables in {}: {}{}",
                folder.name,
                format_list(&missing, ctx.list_limit()),
                found
            ),
        ));
    }
}

fn check_missing_folders(ctx: &CheckContext<'_>, root: &ResourceRoot, out: &mut Vec<Diagnostic>) {
    let mut present: BTreeMap<ResourceType, BTreeSet<Density>> = BTreeMap::new();
    for folder in &root.folders {
        if let Some(density) = folder.qualifiers.density.bucket() {
            present
                .entry(folder.qualifiers.resource_type)
                .or_default()
                .insert(density);
        }
    }

    let mut missing = Vec::new();
    for (resource_type, densities) in &present {
        for required in &ctx.options.required_densities {
            if !densities.contains(required) {
                missing.push(format!("{}-{}", resource_type, required.qualifier()));
            }
        }
    }

    if !missing.is_empty() {
        out.push(Diagnostic::new(
            IssueId::MissingDensityFolder,
            &root.path,
            format!(
                "Missing density variation folders in {}: {}",
                root.path,
                missing.join(", ")
            ),
        ));
    }
}
