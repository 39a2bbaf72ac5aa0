pub mod engine;
pub mod relocator;

pub use crate::domain::model::{AssetCandidate, AssetKind, RelocationReport, StagedAssets};
pub use crate::domain::ports::{DirEntryInfo, FileSystem, LayoutProvider, RelocationPipeline};
pub use crate::utils::error::Result;
