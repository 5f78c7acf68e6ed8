//! Render options applied uniformly to every template render.

use log::debug;
use minijinja::{Environment, UndefinedBehavior};
use std::fmt;

/// How references to keys absent from the supplied data are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingKey {
    /// Referencing an undefined key fails the render.
    Error,
    /// Undefined keys render as empty values.
    Default,
}

/// A single engine directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    MissingKey(MissingKey),
    /// Keep the final newline of a template in the rendered output.
    KeepTrailingNewline,
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::MissingKey(MissingKey::Error) => write!(f, "missingkey=error"),
            Directive::MissingKey(MissingKey::Default) => write!(f, "missingkey=default"),
            Directive::KeepTrailingNewline => write!(f, "keep_trailing_newline"),
        }
    }
}

/// Ordered engine directives, fixed once the renderer is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    directives: Vec<Directive>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::new(vec![Directive::MissingKey(MissingKey::Error), Directive::KeepTrailingNewline])
    }
}

impl RenderOptions {
    pub fn new(directives: Vec<Directive>) -> Self {
        Self { directives }
    }

    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// The effective missing-key policy; the last directive wins.
    pub fn missing_key(&self) -> MissingKey {
        self.directives
            .iter()
            .rev()
            .find_map(|directive| match directive {
                Directive::MissingKey(policy) => Some(*policy),
                _ => None,
            })
            .unwrap_or(MissingKey::Default)
    }

    /// Applies the directives to the engine environment, in order.
    pub fn apply(&self, env: &mut Environment<'_>) {
        for directive in &self.directives {
            debug!("Applying render option '{directive}'.");
            match directive {
                Directive::MissingKey(MissingKey::Error) => {
                    env.set_undefined_behavior(UndefinedBehavior::Strict)
                }
                Directive::MissingKey(MissingKey::Default) => {
                    env.set_undefined_behavior(UndefinedBehavior::Lenient)
                }
                Directive::KeepTrailingNewline => env.set_keep_trailing_newline(true),
            }
        }
    }
}
