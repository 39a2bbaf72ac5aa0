use crate::utils::error::{RelocateError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &Path) -> Result<()> {
    let display = path.to_string_lossy();

    if path.as_os_str().is_empty() {
        return Err(RelocateError::InvalidLayout {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if display.contains('\0') {
        return Err(RelocateError::InvalidLayout {
            field: field_name.to_string(),
            value: display.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// A canonical name must be a bare file name carrying the given suffix.
pub fn validate_file_name(field_name: &str, name: &str, suffix: &str) -> Result<()> {
    let invalid = |reason: String| RelocateError::InvalidLayout {
        field: field_name.to_string(),
        value: name.to_string(),
        reason,
    };

    if name.trim().is_empty() {
        return Err(invalid("Value cannot be empty or whitespace-only".to_string()));
    }
    if name.contains('/') || name.contains('\\') {
        return Err(invalid("File name cannot contain path separators".to_string()));
    }
    if !name.ends_with(suffix) {
        return Err(invalid(format!("File name must end with {}", suffix)));
    }

    Ok(())
}

pub fn validate_distinct(field_name: &str, left: &Path, right: &Path) -> Result<()> {
    if left == right {
        return Err(RelocateError::InvalidLayout {
            field: field_name.to_string(),
            value: left.to_string_lossy().to_string(),
            reason: "Source and destination must differ".to_string(),
        });
    }
    Ok(())
}
