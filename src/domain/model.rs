use std::path::PathBuf;
use std::time::SystemTime;

/// The two bundle flavours a front-end build emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    Stylesheet,
    Script,
}

impl AssetKind {
    pub const ALL: [AssetKind; 2] = [AssetKind::Stylesheet, AssetKind::Script];

    pub fn suffix(self) -> &'static str {
        match self {
            AssetKind::Stylesheet => ".css",
            AssetKind::Script => ".js",
        }
    }

    /// Literal, case-sensitive suffix match on the file name.
    pub fn classify(file_name: &str) -> Option<AssetKind> {
        Self::ALL
            .into_iter()
            .find(|kind| file_name.ends_with(kind.suffix()))
    }
}

/// A source entry whose name matched one of the bundle suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetCandidate {
    pub path: PathBuf,
    pub file_name: String,
    pub kind: AssetKind,
    pub modified: Option<SystemTime>,
}

/// Output of the canonicalize phase: where each canonical file now lives
/// in the source directory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedAssets {
    pub stylesheet: Option<PathBuf>,
    pub script: Option<PathBuf>,
    /// Candidates overwritten by a later match of the same kind.
    pub superseded: Vec<String>,
}

impl StagedAssets {
    pub fn slot_mut(&mut self, kind: AssetKind) -> &mut Option<PathBuf> {
        match kind {
            AssetKind::Stylesheet => &mut self.stylesheet,
            AssetKind::Script => &mut self.script,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationReport {
    pub script: PathBuf,
    pub stylesheet: PathBuf,
    pub superseded: Vec<String>,
    pub created_dest_dir: bool,
}
