//! Process-wide configuration for Kiln.
//! The template root is resolved once at startup and never mutated afterwards.

use crate::constants::{APP_NAME, CONFIG_DIR, TEMPLATE_DIR_NAME};
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Directory under which template definitions are stored.
    pub template_dir: PathBuf,
}

impl Configuration {
    /// Resolves the configuration from an optional explicit template directory.
    ///
    /// # Arguments
    /// * `template_dir` - Value of `--template-dir` (or `KILN_TEMPLATE_DIR`), if any
    ///
    /// # Returns
    /// * `Result<Configuration>` - Configuration with a non-empty template root
    ///
    /// # Errors
    /// * `Error::ConfigError` if no directory is given and the home directory is unknown,
    ///   or if the given directory is empty
    pub fn resolve(template_dir: Option<PathBuf>) -> Result<Self> {
        let template_dir = match template_dir {
            Some(dir) if dir.as_os_str().is_empty() => {
                return Err(Error::ConfigError("template directory must not be empty".into()))
            }
            Some(dir) => expand_home(&dir)?,
            None => default_template_dir()?,
        };

        debug!("Using template directory '{}'.", template_dir.display());
        Ok(Self { template_dir })
    }
}

/// Returns `$HOME/.config/kiln/templates`.
pub fn default_template_dir() -> Result<PathBuf> {
    Ok(home_dir()?
        .join(CONFIG_DIR)
        .join(APP_NAME)
        .join(TEMPLATE_DIR_NAME))
}

/// Expands a leading `~` component to the user's home directory.
pub fn expand_home(path: &Path) -> Result<PathBuf> {
    match path.strip_prefix("~") {
        Ok(rest) => Ok(home_dir()?.join(rest)),
        Err(_) => Ok(path.to_path_buf()),
    }
}

fn home_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .ok_or_else(|| Error::ConfigError("Could not determine home directory".to_string()))
}
