use crate::domain::model::AssetKind;
use crate::domain::ports::LayoutProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_distinct, validate_file_name, validate_path, Validate};
use std::path::{Path, PathBuf};

/// Where the webview build drops its hashed bundles.
pub const SOURCE_DIR: &str = "webview/dist/assets/";
/// Where the extension loads its assets from.
pub const DEST_DIR: &str = "media/";
pub const STYLESHEET_NAME: &str = "styles.css";
pub const SCRIPT_NAME: &str = "main.js";

/// Fixed directory layout. The CLI only ever uses `Default`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocatorConfig {
    pub source_dir: PathBuf,
    pub dest_dir: PathBuf,
}

impl Default for RelocatorConfig {
    fn default() -> Self {
        Self {
            source_dir: PathBuf::from(SOURCE_DIR),
            dest_dir: PathBuf::from(DEST_DIR),
        }
    }
}

impl RelocatorConfig {
    /// The same layout, resolved under `base` instead of the working directory.
    pub fn rooted_at(base: impl AsRef<Path>) -> Self {
        let base = base.as_ref();
        Self {
            source_dir: base.join(SOURCE_DIR),
            dest_dir: base.join(DEST_DIR),
        }
    }
}

impl LayoutProvider for RelocatorConfig {
    fn source_dir(&self) -> &Path {
        &self.source_dir
    }

    fn dest_dir(&self) -> &Path {
        &self.dest_dir
    }

    fn canonical_name(&self, kind: AssetKind) -> &str {
        match kind {
            AssetKind::Stylesheet => STYLESHEET_NAME,
            AssetKind::Script => SCRIPT_NAME,
        }
    }
}

impl Validate for RelocatorConfig {
    fn validate(&self) -> Result<()> {
        validate_path("source_dir", &self.source_dir)?;
        validate_path("dest_dir", &self.dest_dir)?;
        validate_distinct("dest_dir", &self.source_dir, &self.dest_dir)?;

        for kind in AssetKind::ALL {
            validate_file_name("canonical_name", self.canonical_name(kind), kind.suffix())?;
        }

        Ok(())
    }
}
