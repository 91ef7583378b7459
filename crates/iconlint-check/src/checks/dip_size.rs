//! Density-independent size consistency

use super::{Check, CheckContext};
use crate::diagnostic::Diagnostic;
use crate::issue::IssueId;
use iconlint_core::Density;
use iconlint_resource::{ImageInfo, ResourceFile, ResourceFolder};
use std::collections::{BTreeMap, BTreeSet};

pub struct DipSizeCheck;

struct Variant<'a> {
    density: Density,
    folder: &'a ResourceFolder,
    file: &'a ResourceFile,
    info: &'a ImageInfo,
}

impl Variant<'_> {
    fn dip(&self) -> (u32, u32) {
        (self.density.to_dip(self.info.width), self.density.to_dip(self.info.height))
    }
}

impl Check for DipSizeCheck {
    fn name(&self) -> &'static str {
        "dip_size"
    }

    fn issues(&self) -> &'static [IssueId] {
        &[IssueId::DipSize]
    }

    fn run(&self, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        for root in ctx.snapshot.roots() {
            let mut groups: BTreeMap<(String, &str), Vec<Variant<'_>>> = BTreeMap::new();
            for folder in &root.folders {
                let Some(density) = folder.qualifiers.density.bucket() else {
                    continue;
                };
                for file in &folder.files {
                    if file.is_nine_patch() {
                        continue;
                    }
                    let Some(info) = file.image() else {
                        continue;
                    };
                    groups
                        .entry((folder.qualifiers.family(), file.name.as_str()))
                        .or_default()
                        .push(Variant {
                            density,
                            folder,
                            file,
                            info,
                        });
                }
            }

            for ((_, name), mut variants) in groups {
                variants.sort_by(|a, b| (a.density, &a.folder.name).cmp(&(b.density, &b.folder.name)));
                if let Some(d) = check_group(ctx, name, &variants) {
                    out.push(d);
                }
            }
        }
    }
}

fn check_group(ctx: &CheckContext<'_>, name: &str, variants: &[Variant<'_>]) -> Option<Diagnostic> {
    let thresholds = &ctx.options.thresholds;
    let buckets: BTreeSet<Density> = variants.iter().map(|v| v.density).collect();
    if buckets.len() < thresholds.dip_min_buckets {
        return None;
    }

    let dips: Vec<(u32, u32)> = variants.iter().map(|v| v.dip()).collect();
    let count = dips.len() as f32;
    let mean_w = dips.iter().map(|d| d.0 as f32).sum::<f32>() / count;
    let mean_h = dips.iter().map(|d| d.1 as f32).sum::<f32>() / count;

    let deviates = |value: u32, mean: f32| (value as f32 - mean).abs() > mean * thresholds.dip_tolerance;
    if !dips.iter().any(|&(w, h)| deviates(w, mean_w) || deviates(h, mean_h)) {
        return None;
    }

    let sizes: Vec<String> = variants
        .iter()
        .zip(&dips)
        .map(|(v, (w, h))| {
            format!(
                "{}/{}: {}x{} dp ({}x{} px)",
                v.folder.name, v.file.name, w, h, v.info.width, v.info.height
            )
        })
        .collect();
    let message = format!(
        "The image {} varies significantly in its density-independent (dip) size across the various density versions: {}",
        name,
        sizes.join(", ")
    );
    let paths: Vec<&str> = variants.iter().map(|v| v.file.path.as_str()).collect();
    Diagnostic::chained(IssueId::DipSize, &paths, message)
}
