//! Error handling for the Kiln application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Kiln operations.
///
/// This enum represents all possible errors that can occur within the Kiln application.
/// It implements the standard Error trait through thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The template root was missing and could not be created.
    #[error(
        "Tried to initialise your template directory '{path}', but it has failed: {source}."
    )]
    TemplateDirCreateError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The template root could not be inspected for a reason other than absence.
    #[error("Failed to init template directory '{path}': {source}.")]
    TemplateDirAccessError {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Template directory '{path}' exists but is not a directory.")]
    TemplateDirNotADirectory { path: String },

    /// A template referenced data keys that were not supplied.
    #[error("Undefined key{} {} in template '{template}'.", plural(.keys), quoted(.keys))]
    UndefinedKeyError { keys: Vec<String>, template: String },

    /// Represents errors that occur during template processing
    #[error("Template error: {0}.")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Template '{template}' does not exist.")]
    TemplateDoesNotExistsError { template: String },

    /// Represents errors that occur during configuration resolution
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents errors in the data supplied to a render call
    #[error("Data error: {0}.")]
    DataError(String),
}

fn plural(keys: &[String]) -> &'static str {
    if keys.len() == 1 {
        ""
    } else {
        "s"
    }
}

fn quoted(keys: &[String]) -> String {
    keys.iter()
        .map(|key| format!("'{key}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convenience type alias for Results with Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The Error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{err}");
    std::process::exit(1);
}
