use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RelocateError {
    #[error("Cannot read source directory {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to rename {} to {}: {source}", .from.display(), .to.display())]
    Rename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layout value for {field}: '{value}' ({reason})")]
    InvalidLayout {
        field: String,
        value: String,
        reason: String,
    },
}

impl RelocateError {
    /// Process exit code for this failure. `2` is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            RelocateError::SourceUnreadable { .. } => 1,
            RelocateError::Rename { .. } => 3,
            RelocateError::Move { .. } => 4,
            RelocateError::InvalidLayout { .. } => 5,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RelocateError::SourceUnreadable { path, .. } => {
                format!("Build output directory {} could not be read", path.display())
            }
            RelocateError::Rename { from, .. } => {
                format!("Could not rename bundle {}", from.display())
            }
            RelocateError::Move { from, to, source } => {
                if source.kind() == std::io::ErrorKind::NotFound {
                    format!("No bundle found at {}", from.display())
                } else {
                    format!("Could not move {} into {}", from.display(), to.display())
                }
            }
            RelocateError::InvalidLayout { field, reason, .. } => {
                format!("Layout setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            RelocateError::SourceUnreadable { .. } => {
                "Run the webview build first and invoke this tool from the project root"
            }
            RelocateError::Rename { .. } => {
                "Check that nothing else is writing to the build output directory"
            }
            RelocateError::Move { source, .. }
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                "Rebuild the webview; bundles are consumed by each successful run"
            }
            RelocateError::Move { .. } => "Check permissions on the media directory",
            RelocateError::InvalidLayout { .. } => "Fix the directory constants and rebuild",
        }
    }
}

pub type Result<T> = std::result::Result<T, RelocateError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "missing")
    }

    #[test]
    fn test_exit_codes_are_distinct_and_nonzero() {
        let errors = [
            RelocateError::SourceUnreadable {
                path: "in".into(),
                source: not_found(),
            },
            RelocateError::Rename {
                from: "a".into(),
                to: "b".into(),
                source: not_found(),
            },
            RelocateError::Move {
                from: "a".into(),
                to: "b".into(),
                source: not_found(),
            },
            RelocateError::InvalidLayout {
                field: "source_dir".into(),
                value: String::new(),
                reason: "empty".into(),
            },
        ];

        let mut codes: Vec<i32> = errors.iter().map(|e| e.exit_code()).collect();
        assert!(codes.iter().all(|&c| c != 0 && c != 2));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_missing_bundle_message() {
        let err = RelocateError::Move {
            from: PathBuf::from("webview/dist/assets/main.js"),
            to: PathBuf::from("media/main.js"),
            source: not_found(),
        };

        assert!(err.user_friendly_message().contains("No bundle found"));
        assert!(err.recovery_suggestion().contains("Rebuild"));
        assert!(err.to_string().contains("media/main.js"));
    }

    #[test]
    fn test_move_permission_message() {
        let err = RelocateError::Move {
            from: PathBuf::from("in/styles.css"),
            to: PathBuf::from("out/styles.css"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        assert!(err.user_friendly_message().contains("Could not move"));
        assert_eq!(
            err.recovery_suggestion(),
            "Check permissions on the media directory"
        );
    }
}
