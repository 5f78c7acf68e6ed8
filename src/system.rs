//! Access to the host process environment for template functions.
//! Abstracted behind a trait so tests can supply a deterministic host.

use chrono::{DateTime, FixedOffset, Local};

/// Source of environment variables, user identity and wall-clock time.
pub trait SystemInfo: Send + Sync {
    /// Returns the value of an environment variable, if set.
    fn var(&self, name: &str) -> Option<String>;

    /// Returns the current user's display name, or `None` if the lookup fails.
    fn real_name(&self) -> Option<String>;

    /// Returns the current wall-clock time.
    fn now(&self) -> DateTime<FixedOffset>;
}

/// The real host: process environment, OS user database and local clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSystem;

impl SystemInfo for HostSystem {
    fn var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }

    fn real_name(&self) -> Option<String> {
        match whoami::fallible::realname() {
            Ok(name) if !name.trim().is_empty() => Some(name),
            // Accounts without a GECOS name still have a login name.
            Ok(_) => whoami::fallible::username().ok(),
            Err(_) => None,
        }
    }

    fn now(&self) -> DateTime<FixedOffset> {
        Local::now().fixed_offset()
    }
}
