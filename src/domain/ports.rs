use crate::domain::model::{AssetCandidate, AssetKind, RelocationReport, StagedAssets};
use crate::utils::error::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

/// A directory entry as seen by the scan phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub path: PathBuf,
    pub file_name: Option<String>,
    pub modified: Option<SystemTime>,
}

/// The filesystem primitives the relocator needs. Errors stay raw
/// `io::Error`s so callers decide what is fatal.
pub trait FileSystem {
    fn read_dir(&self, dir: &Path) -> io::Result<Vec<DirEntryInfo>>;
    fn rename(&self, from: &Path, to: &Path) -> io::Result<()>;
    fn create_dir_all(&self, dir: &Path) -> io::Result<()>;
    fn remove_file(&self, path: &Path) -> io::Result<()>;
    fn is_dir(&self, path: &Path) -> bool;
}

pub trait LayoutProvider {
    fn source_dir(&self) -> &Path;
    fn dest_dir(&self) -> &Path;
    fn canonical_name(&self, kind: AssetKind) -> &str;
}

pub trait RelocationPipeline {
    fn scan(&self) -> Result<Vec<AssetCandidate>>;
    fn canonicalize(&self, candidates: Vec<AssetCandidate>) -> Result<StagedAssets>;
    fn install(&self, staged: StagedAssets) -> Result<RelocationReport>;
}
