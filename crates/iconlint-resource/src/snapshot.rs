//! Immutable resource snapshot built once per analysis run

use crate::probe::{probe_image, ColorProfile, DecodedImage, ImageInfo};
use crate::provider::{RawFolder, RawRoot, ResourceProvider};
use crate::qualifier::{
    classify_folder, file_kind, file_stem, final_extension, is_resource_file, FileKind,
    FolderQualifiers,
};
use iconlint_core::{ContentHash, Result};
use std::collections::BTreeMap;
use std::fmt;

/// A drawable file with its content identity and decoded image summary
pub struct ResourceFile {
    pub name: String,
    pub stem: String,
    /// Final extension segment, lower-cased
    pub extension: String,
    pub kind: FileKind,
    /// Display path (`res/drawable-mdpi/icon.png`)
    pub path: String,
    pub folder_name: String,
    pub len: u64,
    pub hash: ContentHash,
    /// Decode result; `None` for XML drawables
    probe: Option<std::result::Result<DecodedImage, String>>,
}

impl ResourceFile {
    fn new(folder_name: &str, folder_path: &str, name: String, bytes: Vec<u8>) -> Option<Self> {
        let kind = file_kind(&name)?;
        let probe = match kind {
            FileKind::Bitmap { .. } => Some(probe_image(&bytes)),
            FileKind::Xml => None,
        };
        Some(Self {
            stem: file_stem(&name).to_string(),
            extension: final_extension(&name).unwrap_or_default(),
            kind,
            path: format!("{}/{}", folder_path, name),
            folder_name: folder_name.to_string(),
            len: bytes.len() as u64,
            hash: ContentHash::from_bytes(&bytes),
            probe,
            name,
        })
    }

    pub fn is_bitmap(&self) -> bool {
        matches!(self.kind, FileKind::Bitmap { .. })
    }

    pub fn is_nine_patch(&self) -> bool {
        matches!(self.kind, FileKind::Bitmap { nine_patch: true })
    }

    /// Format and size of a readable bitmap; `None` for XML and unreadable files
    pub fn image(&self) -> Option<&ImageInfo> {
        self.decoded().map(|d| &d.info)
    }

    /// Why a bitmap could not be read, if it couldn't
    pub fn unreadable_reason(&self) -> Option<&str> {
        self.probe
            .as_ref()
            .and_then(|p| p.as_ref().err())
            .map(|s| s.as_str())
    }

    /// Readable bitmap (takes part in content checks)
    pub fn is_readable_bitmap(&self) -> bool {
        self.image().is_some()
    }

    /// Pixel summary of a readable bitmap
    pub fn color_profile(&self) -> Option<&ColorProfile> {
        self.decoded().map(|d| &d.colors)
    }

    fn decoded(&self) -> Option<&DecodedImage> {
        self.probe.as_ref().and_then(|p| p.as_ref().ok())
    }
}

impl fmt::Debug for ResourceFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceFile")
            .field("path", &self.path)
            .field("kind", &self.kind)
            .field("len", &self.len)
            .field("hash", &self.hash)
            .field("probe", &self.probe)
            .finish()
    }
}

/// An icon folder and its drawable files, sorted by name
#[derive(Debug)]
pub struct ResourceFolder {
    pub name: String,
    pub path: String,
    pub qualifiers: FolderQualifiers,
    pub files: Vec<ResourceFile>,
}

impl ResourceFolder {
    fn from_raw(root_path: &str, raw: RawFolder) -> Option<Self> {
        let qualifiers = classify_folder(&raw.name)?;
        let path = join_path(root_path, &raw.name);

        // Later entries with the same name replace earlier ones
        let mut by_name = BTreeMap::new();
        for file in raw.files {
            if is_resource_file(&file.name) {
                by_name.insert(file.name.clone(), file.bytes);
            }
        }

        let files = by_name
            .into_iter()
            .filter_map(|(name, bytes)| ResourceFile::new(&raw.name, &path, name, bytes))
            .collect();

        Some(Self {
            name: raw.name,
            path,
            qualifiers,
            files,
        })
    }
}

/// A resource root (`res`) and its icon folders, sorted by name
#[derive(Debug)]
pub struct ResourceRoot {
    pub path: String,
    pub folders: Vec<ResourceFolder>,
}

/// Immutable view of every icon file in the analyzed tree
#[derive(Debug, Default)]
pub struct ResourceSnapshot {
    roots: Vec<ResourceRoot>,
}

impl ResourceSnapshot {
    /// Build a snapshot from raw provider output.
    ///
    /// Non-icon folders and non-drawable files are dropped; each remaining file
    /// is hashed and decoded exactly once.
    pub fn build(raw_roots: Vec<RawRoot>) -> Self {
        let mut roots: Vec<ResourceRoot> = raw_roots
            .into_iter()
            .map(|raw| {
                let mut folders: Vec<ResourceFolder> = raw
                    .folders
                    .into_iter()
                    .filter_map(|f| ResourceFolder::from_raw(&raw.path, f))
                    .collect();
                folders.sort_by(|a, b| a.name.cmp(&b.name));
                ResourceRoot {
                    path: raw.path,
                    folders,
                }
            })
            .collect();
        roots.sort_by(|a, b| a.path.cmp(&b.path));

        let snapshot = Self { roots };
        tracing::debug!(
            roots = snapshot.roots.len(),
            files = snapshot.file_count(),
            "built resource snapshot"
        );
        snapshot
    }

    /// Load from a provider and build the snapshot
    pub fn load(provider: &dyn ResourceProvider) -> Result<Self> {
        Ok(Self::build(provider.load()?))
    }

    pub fn roots(&self) -> &[ResourceRoot] {
        &self.roots
    }

    pub fn is_empty(&self) -> bool {
        self.file_count() == 0
    }

    pub fn file_count(&self) -> usize {
        self.files().count()
    }

    /// Every file with its folder, in root/folder/name order
    pub fn files(&self) -> impl Iterator<Item = (&ResourceFolder, &ResourceFile)> {
        self.roots
            .iter()
            .flat_map(|r| r.folders.iter())
            .flat_map(|folder| folder.files.iter().map(move |file| (folder, file)))
    }

    /// Files grouped by stem across all folders (the icon groups)
    pub fn icon_groups(&self) -> BTreeMap<&str, Vec<&ResourceFile>> {
        let mut groups: BTreeMap<&str, Vec<&ResourceFile>> = BTreeMap::new();
        for (_, file) in self.files() {
            groups.entry(file.stem.as_str()).or_default().push(file);
        }
        groups
    }
}

fn join_path(root: &str, name: &str) -> String {
    if root.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", root, name)
    }
}
