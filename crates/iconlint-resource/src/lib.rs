//! iconlint Resource - Immutable resource-tree snapshots
//!
//! This crate turns a set of resource roots (folders of icon files) into a
//! `ResourceSnapshot`: folders are classified by their qualifiers, files are
//! hashed and their bitmaps decoded exactly once.

mod manifest;
mod probe;
mod provider;
mod qualifier;
mod snapshot;

pub use manifest::read_min_sdk;
pub use probe::{probe_image, ColorProfile, DecodedImage, IconFormat, ImageInfo};
pub use provider::{DirectoryProvider, MemoryProvider, RawFile, RawFolder, RawRoot, ResourceProvider};
pub use qualifier::{
    classify_folder, file_kind, file_stem, final_extension, is_resource_file, FileKind,
    FolderDensity, FolderQualifiers, ResourceType,
};
pub use snapshot::{ResourceFile, ResourceFolder, ResourceRoot, ResourceSnapshot};
