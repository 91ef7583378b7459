//! Folder and file-name classification

use iconlint_core::Density;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Resource folder types that hold icons
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    Drawable,
    Mipmap,
}

impl ResourceType {
    pub fn as_str(self) -> &'static str {
        match self {
            ResourceType::Drawable => "drawable",
            ResourceType::Mipmap => "mipmap",
        }
    }

    fn from_prefix(prefix: &str) -> Option<Self> {
        match prefix {
            "drawable" => Some(ResourceType::Drawable),
            "mipmap" => Some(ResourceType::Mipmap),
            _ => None,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The density placement of a folder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "density")]
pub enum FolderDensity {
    /// A scaled bucket such as `-hdpi`
    Bucket(Density),
    /// `-nodpi`: never scaled
    NoDpi,
    /// No density qualifier at all
    Unqualified,
}

impl FolderDensity {
    pub fn bucket(self) -> Option<Density> {
        match self {
            FolderDensity::Bucket(d) => Some(d),
            _ => None,
        }
    }
}

/// Parsed qualifiers of an icon folder name
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderQualifiers {
    pub resource_type: ResourceType,
    pub density: FolderDensity,
    /// Platform version from a `vNN` qualifier
    pub api_level: Option<u32>,
    /// Every other qualifier, in folder-name order
    pub others: Vec<String>,
}

impl FolderQualifiers {
    /// Folder name with the density qualifier removed.
    ///
    /// Folders sharing a family differ only by density, so they are the ones
    /// compared for completeness and dip sizes.
    pub fn family(&self) -> String {
        let mut family = self.resource_type.as_str().to_string();
        for other in &self.others {
            family.push('-');
            family.push_str(other);
        }
        if let Some(api) = self.api_level {
            family.push_str(&format!("-v{}", api));
        }
        family
    }
}

/// Classify a folder name.
///
/// Returns `None` for folders that don't hold icons (`layout`, `values`, ...).
/// Unknown qualifiers are kept in `others` rather than rejected.
pub fn classify_folder(name: &str) -> Option<FolderQualifiers> {
    let mut parts = name.split('-');
    let resource_type = ResourceType::from_prefix(parts.next()?)?;

    let mut density = FolderDensity::Unqualified;
    let mut api_level = None;
    let mut others = Vec::new();

    for part in parts {
        if part.is_empty() {
            continue;
        }
        if density == FolderDensity::Unqualified {
            if part == "nodpi" {
                density = FolderDensity::NoDpi;
                continue;
            }
            if let Some(d) = Density::from_qualifier(part) {
                density = FolderDensity::Bucket(d);
                continue;
            }
        }
        if api_level.is_none() {
            if let Some(api) = parse_version_qualifier(part) {
                api_level = Some(api);
                continue;
            }
        }
        others.push(part.to_string());
    }

    Some(FolderQualifiers {
        resource_type,
        density,
        api_level,
        others,
    })
}

fn parse_version_qualifier(part: &str) -> Option<u32> {
    let digits = part.strip_prefix('v')?;
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// What kind of drawable a file is, judged by its name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Bitmap { nine_patch: bool },
    Xml,
}

/// Last extension segment, lower-cased (`foo.9.PNG` -> `png`)
pub fn final_extension(name: &str) -> Option<String> {
    let (_, ext) = name.rsplit_once('.')?;
    Some(ext.to_ascii_lowercase())
}

/// File name up to the first `.` (`foo.9.png` -> `foo`)
pub fn file_stem(name: &str) -> &str {
    name.split('.').next().unwrap_or(name)
}

/// Classify a file name; `None` for names that are not drawable resources
pub fn file_kind(name: &str) -> Option<FileKind> {
    match final_extension(name)?.as_str() {
        "png" => Some(FileKind::Bitmap {
            nine_patch: name.to_ascii_lowercase().ends_with(".9.png"),
        }),
        "jpg" | "jpeg" | "gif" => Some(FileKind::Bitmap { nine_patch: false }),
        "xml" => Some(FileKind::Xml),
        _ => None,
    }
}

/// Whether a file takes part in the analysis at all.
///
/// Hidden entries such as `.svn` or `.DS_Store` are never icons.
pub fn is_resource_file(name: &str) -> bool {
    !name.starts_with('.') && file_kind(name).is_some()
}
