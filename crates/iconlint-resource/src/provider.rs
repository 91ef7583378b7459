//! Resource tree providers

use crate::qualifier::{classify_folder, is_resource_file};
use iconlint_core::{IconLintError, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// A file as delivered by a provider
#[derive(Debug, Clone)]
pub struct RawFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

/// A folder as delivered by a provider
#[derive(Debug, Clone)]
pub struct RawFolder {
    pub name: String,
    pub files: Vec<RawFile>,
}

/// A resource root (e.g. `res`) as delivered by a provider
#[derive(Debug, Clone)]
pub struct RawRoot {
    /// Stable display path used in diagnostics
    pub path: String,
    pub folders: Vec<RawFolder>,
}

/// Source of resource trees
pub trait ResourceProvider {
    /// Load every root with its folders and file bytes
    fn load(&self) -> Result<Vec<RawRoot>>;
}

/// Reads resource roots from the filesystem.
///
/// Only icon folders (`drawable*`, `mipmap*`) and drawable files are read;
/// everything else is skipped without touching its contents.
#[derive(Debug, Default)]
pub struct DirectoryProvider {
    roots: Vec<(PathBuf, String)>,
}

impl DirectoryProvider {
    /// Create a provider with no roots
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a root directory, reported in diagnostics under `display`
    pub fn with_root<P: AsRef<Path>>(mut self, dir: P, display: impl Into<String>) -> Self {
        self.roots.push((dir.as_ref().to_path_buf(), display.into()));
        self
    }

    /// Locate the resource root of a project directory.
    ///
    /// Accepts either a project containing `res/` or a resource directory
    /// itself (one that holds `drawable*`/`mipmap*` folders).
    pub fn for_project<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref();
        let res = dir.join("res");
        if res.is_dir() {
            return Ok(Self::new().with_root(res, "res"));
        }

        if dir.is_dir() && Self::has_icon_folders(dir)? {
            let display = dir
                .file_name()
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "res".to_string());
            return Ok(Self::new().with_root(dir, display));
        }

        Err(IconLintError::InvalidResourceRoot(dir.display().to_string()))
    }

    /// Root directories and their display paths
    pub fn roots(&self) -> &[(PathBuf, String)] {
        &self.roots
    }

    fn has_icon_folders(dir: &Path) -> Result<bool> {
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let name = entry.file_name();
            if entry.path().is_dir() && classify_folder(&name.to_string_lossy()).is_some() {
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn load_root(dir: &Path, display: &str) -> Result<RawRoot> {
        let mut folders = Vec::new();

        if dir.exists() {
            for entry in fs::read_dir(dir)? {
                let entry = entry?;
                // Symlinked folders and files are followed
                if !entry.path().is_dir() {
                    continue;
                }
                let name = entry.file_name().to_string_lossy().to_string();
                if classify_folder(&name).is_none() {
                    continue;
                }

                let mut files = Vec::new();
                for file_entry in fs::read_dir(entry.path())? {
                    let file_entry = file_entry?;
                    let file_name = file_entry.file_name().to_string_lossy().to_string();
                    if !file_entry.path().is_file() || !is_resource_file(&file_name) {
                        continue;
                    }
                    let bytes = fs::read(file_entry.path())?;
                    files.push(RawFile {
                        name: file_name,
                        bytes,
                    });
                }
                folders.push(RawFolder { name, files });
            }
        }

        Ok(RawRoot {
            path: display.to_string(),
            folders,
        })
    }
}

impl ResourceProvider for DirectoryProvider {
    fn load(&self) -> Result<Vec<RawRoot>> {
        self.roots
            .iter()
            .map(|(dir, display)| Self::load_root(dir, display))
            .collect()
    }
}

/// In-memory resource tree, keyed by display path.
///
/// Paths are `<root>/<folder>/<file>`; the root may itself contain slashes.
#[derive(Debug, Default, Clone)]
pub struct MemoryProvider {
    // root -> folder -> file -> bytes
    tree: BTreeMap<String, BTreeMap<String, BTreeMap<String, Vec<u8>>>>,
}

impl MemoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) a file at `root/folder/name`
    pub fn file(mut self, path: &str, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(path, bytes);
        self
    }

    /// Add an empty folder at `root/folder`
    pub fn folder(mut self, path: &str) -> Self {
        let (root, folder) = path.rsplit_once('/').unwrap_or(("", path));
        self.tree
            .entry(root.to_string())
            .or_default()
            .entry(folder.to_string())
            .or_default();
        self
    }

    /// Add (or replace) a file at `root/folder/name`
    pub fn insert(&mut self, path: &str, bytes: impl Into<Vec<u8>>) {
        let (parent, name) = path.rsplit_once('/').unwrap_or(("", path));
        let (root, folder) = parent.rsplit_once('/').unwrap_or(("", parent));
        self.tree
            .entry(root.to_string())
            .or_default()
            .entry(folder.to_string())
            .or_default()
            .insert(name.to_string(), bytes.into());
    }
}

impl ResourceProvider for MemoryProvider {
    fn load(&self) -> Result<Vec<RawRoot>> {
        Ok(self
            .tree
            .iter()
            .map(|(root, folders)| RawRoot {
                path: root.clone(),
                folders: folders
                    .iter()
                    .map(|(name, files)| RawFolder {
                        name: name.clone(),
                        files: files
                            .iter()
                            .map(|(file, bytes)| RawFile {
                                name: file.clone(),
                                bytes: bytes.clone(),
                            })
                            .collect(),
                    })
                    .collect(),
            })
            .collect())
    }
}
