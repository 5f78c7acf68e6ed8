//! Common constants used throughout the Kiln application.

/// Application name, used for the configuration directory
pub const APP_NAME: &str = "kiln";

/// Directory under `$HOME` holding kiln's configuration
pub const CONFIG_DIR: &str = ".config";

/// Directory under the configuration directory holding templates
pub const TEMPLATE_DIR_NAME: &str = "templates";

/// Environment variable overriding the template root
pub const TEMPLATE_DIR_ENV: &str = "KILN_TEMPLATE_DIR";

/// Environment variable read by the `hostname` template function
pub const HOSTNAME_ENV: &str = "HOSTNAME";

/// Returned by the `username` template function when the user lookup fails
pub const UNKNOWN_USER: &str = "Unknown";

/// Name under which inline template sources are registered
pub const INLINE_TEMPLATE_NAME: &str = "<inline>";
