pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::local_fs::LocalFileSystem;
pub use config::RelocatorConfig;
pub use core::{engine::RelocationEngine, relocator::AssetRelocator};
pub use utils::error::{RelocateError, Result};

/// Runs the full relocation against the real filesystem.
pub fn relocate(config: RelocatorConfig) -> Result<domain::model::RelocationReport> {
    use utils::validation::Validate;

    config.validate()?;
    let relocator = AssetRelocator::new(LocalFileSystem::new(), config);
    RelocationEngine::new(relocator).run()
}
