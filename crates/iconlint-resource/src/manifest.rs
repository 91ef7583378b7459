//! Minimum SDK lookup from `AndroidManifest.xml`

use iconlint_core::{IconLintError, Result};
use std::fs;
use std::path::Path;
use xmltree::Element;

/// Read `<uses-sdk android:minSdkVersion="N"/>` from a manifest file.
///
/// Returns `Ok(None)` when the element or attribute is absent, or when the
/// value is a codename rather than a number.
pub fn read_min_sdk<P: AsRef<Path>>(path: P) -> Result<Option<u32>> {
    let path = path.as_ref();
    let content = fs::read(path)?;
    let root = Element::parse(content.as_slice()).map_err(|e| IconLintError::XmlParseError {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let value = match root
        .get_child("uses-sdk")
        .and_then(|sdk| sdk.attributes.get("minSdkVersion"))
    {
        Some(v) => v,
        None => return Ok(None),
    };

    match value.trim().parse::<u32>() {
        Ok(level) => Ok(Some(level)),
        Err(_) => {
            tracing::warn!("ignoring non-numeric minSdkVersion '{}' in {}", value, path.display());
            Ok(None)
        }
    }
}
