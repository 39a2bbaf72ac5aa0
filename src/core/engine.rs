use crate::core::{RelocationPipeline, RelocationReport};
use crate::utils::error::Result;

pub struct RelocationEngine<P: RelocationPipeline> {
    pipeline: P,
}

impl<P: RelocationPipeline> RelocationEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<RelocationReport> {
        tracing::debug!("Starting asset relocation");

        // Scan
        let candidates = self.pipeline.scan()?;
        tracing::debug!("Found {} bundle candidates", candidates.len());

        // Canonicalize
        let staged = self.pipeline.canonicalize(candidates)?;
        tracing::debug!(
            "Staged script: {:?}, stylesheet: {:?}",
            staged.script,
            staged.stylesheet
        );

        // Install
        let report = self.pipeline.install(staged)?;
        tracing::info!(
            "Installed {} and {}",
            report.script.display(),
            report.stylesheet.display()
        );

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AssetCandidate, AssetKind, StagedAssets};
    use crate::utils::error::RelocateError;
    use std::cell::RefCell;
    use std::path::PathBuf;

    struct RecordingPipeline {
        calls: RefCell<Vec<&'static str>>,
        fail_scan: bool,
    }

    impl RecordingPipeline {
        fn new(fail_scan: bool) -> Self {
            Self {
                calls: RefCell::new(Vec::new()),
                fail_scan,
            }
        }
    }

    impl RelocationPipeline for RecordingPipeline {
        fn scan(&self) -> Result<Vec<AssetCandidate>> {
            self.calls.borrow_mut().push("scan");
            if self.fail_scan {
                return Err(RelocateError::SourceUnreadable {
                    path: PathBuf::from("in"),
                    source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
                });
            }
            Ok(vec![AssetCandidate {
                path: PathBuf::from("in/a.js"),
                file_name: "a.js".to_string(),
                kind: AssetKind::Script,
                modified: None,
            }])
        }

        fn canonicalize(&self, candidates: Vec<AssetCandidate>) -> Result<StagedAssets> {
            self.calls.borrow_mut().push("canonicalize");
            assert_eq!(candidates.len(), 1);
            Ok(StagedAssets {
                script: Some(PathBuf::from("in/main.js")),
                ..StagedAssets::default()
            })
        }

        fn install(&self, staged: StagedAssets) -> Result<RelocationReport> {
            self.calls.borrow_mut().push("install");
            Ok(RelocationReport {
                script: PathBuf::from("out/main.js"),
                stylesheet: PathBuf::from("out/styles.css"),
                superseded: staged.superseded,
                created_dest_dir: false,
            })
        }
    }

    #[test]
    fn test_runs_phases_in_order() {
        let engine = RelocationEngine::new(RecordingPipeline::new(false));
        let report = engine.run().unwrap();

        assert_eq!(report.script, PathBuf::from("out/main.js"));
        assert_eq!(
            *engine.pipeline.calls.borrow(),
            vec!["scan", "canonicalize", "install"]
        );
    }

    #[test]
    fn test_stops_at_first_failing_phase() {
        let engine = RelocationEngine::new(RecordingPipeline::new(true));

        assert!(engine.run().is_err());
        assert_eq!(*engine.pipeline.calls.borrow(), vec!["scan"]);
    }
}
