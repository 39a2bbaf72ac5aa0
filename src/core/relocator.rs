use crate::core::{
    AssetCandidate, AssetKind, FileSystem, LayoutProvider, RelocationPipeline, RelocationReport,
    StagedAssets,
};
use crate::utils::error::{RelocateError, Result};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

/// Renames hashed bundles to their canonical names and moves them into the
/// destination directory.
pub struct AssetRelocator<F: FileSystem, L: LayoutProvider> {
    fs: F,
    layout: L,
}

impl<F: FileSystem, L: LayoutProvider> AssetRelocator<F, L> {
    pub fn new(fs: F, layout: L) -> Self {
        Self { fs, layout }
    }

    fn source_path(&self, kind: AssetKind) -> PathBuf {
        self.layout
            .source_dir()
            .join(self.layout.canonical_name(kind))
    }

    fn dest_path(&self, kind: AssetKind) -> PathBuf {
        self.layout.dest_dir().join(self.layout.canonical_name(kind))
    }

    fn prepare_dest(&self) -> bool {
        let dest = self.layout.dest_dir();
        let existed = self.fs.is_dir(dest);

        // best-effort: a real problem resurfaces as a failed move
        let created = match self.fs.create_dir_all(dest) {
            Ok(()) => !existed,
            Err(e) => {
                tracing::warn!("Could not create {}: {}", dest.display(), e);
                false
            }
        };

        for kind in [AssetKind::Script, AssetKind::Stylesheet] {
            let stale = self.dest_path(kind);
            match self.fs.remove_file(&stale) {
                Ok(()) => tracing::debug!("Removed previous {}", stale.display()),
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => tracing::warn!("Could not remove {}: {}", stale.display(), e),
            }
        }

        created
    }

    fn move_into_dest(&self, kind: AssetKind) -> Result<PathBuf> {
        let from = self.source_path(kind);
        let to = self.dest_path(kind);

        self.fs
            .rename(&from, &to)
            .map_err(|source| RelocateError::Move {
                from: from.clone(),
                to: to.clone(),
                source,
            })?;

        tracing::debug!("Moved {} -> {}", from.display(), to.display());
        Ok(to)
    }
}

impl<F: FileSystem, L: LayoutProvider> RelocationPipeline for AssetRelocator<F, L> {
    fn scan(&self) -> Result<Vec<AssetCandidate>> {
        let source_dir = self.layout.source_dir();
        let entries =
            self.fs
                .read_dir(source_dir)
                .map_err(|source| RelocateError::SourceUnreadable {
                    path: source_dir.to_path_buf(),
                    source,
                })?;

        let mut candidates: Vec<AssetCandidate> = entries
            .into_iter()
            .filter_map(|entry| {
                let Some(file_name) = entry.file_name else {
                    tracing::debug!("Skipping non UTF-8 entry {}", entry.path.display());
                    return None;
                };
                let kind = AssetKind::classify(&file_name)?;
                if self.fs.is_dir(&entry.path) {
                    tracing::debug!("Skipping directory {}", entry.path.display());
                    return None;
                }
                Some(AssetCandidate {
                    path: entry.path,
                    file_name,
                    kind,
                    modified: entry.modified,
                })
            })
            .collect();

        // Oldest first; the newest bundle of each kind wins. On equal mtimes a
        // leftover canonical file loses.
        candidates.sort_by(|a, b| {
            let a_canonical = a.file_name == self.layout.canonical_name(a.kind);
            let b_canonical = b.file_name == self.layout.canonical_name(b.kind);
            a.modified
                .cmp(&b.modified)
                .then_with(|| b_canonical.cmp(&a_canonical))
                .then_with(|| a.file_name.cmp(&b.file_name))
        });

        Ok(candidates)
    }

    fn canonicalize(&self, candidates: Vec<AssetCandidate>) -> Result<StagedAssets> {
        let mut staged = StagedAssets::default();
        let mut by_kind: HashMap<AssetKind, Vec<AssetCandidate>> = HashMap::new();
        for candidate in candidates {
            by_kind.entry(candidate.kind).or_default().push(candidate);
        }

        for kind in AssetKind::ALL {
            let Some(mut group) = by_kind.remove(&kind) else {
                continue;
            };
            // scan order is oldest first; the last entry is the winner
            let Some(winner) = group.pop() else {
                continue;
            };
            let target = self.source_path(kind);

            if winner.path != target {
                self.fs
                    .rename(&winner.path, &target)
                    .map_err(|source| RelocateError::Rename {
                        from: winner.path.clone(),
                        to: target.clone(),
                        source,
                    })?;
                tracing::debug!("Renamed {} -> {}", winner.file_name, target.display());
            }

            for loser in group {
                tracing::warn!(
                    "Bundle {} superseded by newer {}",
                    loser.file_name,
                    winner.file_name
                );
                // a loser at the canonical path was already replaced by the rename
                if loser.path != target {
                    if let Err(e) = self.fs.remove_file(&loser.path) {
                        tracing::warn!("Could not remove {}: {}", loser.path.display(), e);
                    }
                }
                staged.superseded.push(loser.file_name);
            }

            *staged.slot_mut(kind) = Some(target);
        }

        Ok(staged)
    }

    fn install(&self, staged: StagedAssets) -> Result<RelocationReport> {
        if staged.script.is_none() {
            tracing::debug!("No .js bundle staged; the move is expected to fail");
        }
        if staged.stylesheet.is_none() {
            tracing::debug!("No .css bundle staged; the move is expected to fail");
        }

        let created_dest_dir = self.prepare_dest();

        let script = self.move_into_dest(AssetKind::Script)?;
        let stylesheet = self.move_into_dest(AssetKind::Stylesheet)?;

        Ok(RelocationReport {
            script,
            stylesheet,
            superseded: staged.superseded,
            created_dest_dir,
        })
    }
}
