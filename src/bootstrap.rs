//! Template root bootstrapping.
//! The template root must exist before any template is resolved or rendered.

use crate::error::{Error, Result};
use log::debug;
use std::fs;
use std::io;
use std::path::Path;

/// Ensures the template root directory exists, creating it recursively if absent.
///
/// # Arguments
/// * `path` - Template root directory, relative or absolute
///
/// # Returns
/// * `Result<()>` - Success if the directory exists or was created
///
/// # Errors
/// * `Error::TemplateDirCreateError` if the directory is missing and cannot be created
/// * `Error::TemplateDirAccessError` if inspecting the path fails for a reason other than absence
/// * `Error::TemplateDirNotADirectory` if the path exists but is not a directory
pub fn ensure_template_root<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() {
        return Err(Error::TemplateDirCreateError {
            path: String::new(),
            source: io::Error::new(io::ErrorKind::InvalidInput, "empty path"),
        });
    }

    match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => {
            debug!("Template directory '{}' exists.", path.display());
            Ok(())
        }
        Ok(_) => Err(Error::TemplateDirNotADirectory { path: path.display().to_string() }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!("Creating template directory '{}'.", path.display());
            fs::create_dir_all(path).map_err(|source| Error::TemplateDirCreateError {
                path: path.display().to_string(),
                source,
            })
        }
        Err(source) => {
            Err(Error::TemplateDirAccessError { path: path.display().to_string(), source })
        }
    }
}
