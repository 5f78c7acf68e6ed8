//! Function library exposed to template expressions.
//!
//! The set of functions is fixed when a [`FunctionLibrary`] is constructed and
//! registered into the engine environment before any template is rendered.
//! Formatting helpers (`toBinary`, `formatFilesize`) never fail a render: bad
//! input degrades to a pass-through or an empty string.

use crate::constants::{HOSTNAME_ENV, UNKNOWN_USER};
use crate::layout::format_time;
use crate::system::{HostSystem, SystemInfo};
use minijinja::value::ValueKind;
use minijinja::{Environment, Error as EngineError, ErrorKind, State, UndefinedBehavior, Value};
use std::fmt;
use std::sync::Arc;

/// Names of every function registered by [`FunctionLibrary::register`].
pub const FUNCTION_NAMES: [&str; 16] = [
    "env",
    "time",
    "hostname",
    "username",
    "toBinary",
    "formatFilesize",
    "toLower",
    "toUpper",
    "toTitle",
    "title",
    "trimSpace",
    "trimPrefix",
    "trimSuffix",
    "repeat",
    "replace",
    "camel",
];

const SIZE_UNITS: [&str; 6] = ["bytes", "KB", "MB", "GB", "TB", "PB"];

/// The named helper transformations available inside templates.
#[derive(Clone)]
pub struct FunctionLibrary {
    system: Arc<dyn SystemInfo>,
}

impl fmt::Debug for FunctionLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionLibrary")
            .field("functions", &FUNCTION_NAMES)
            .finish()
    }
}

impl Default for FunctionLibrary {
    fn default() -> Self {
        FunctionLibrary::new()
    }
}

impl FunctionLibrary {
    /// Creates a library backed by the real host environment.
    pub fn new() -> Self {
        Self::with_system(Arc::new(HostSystem))
    }

    /// Creates a library backed by the given system access.
    pub fn with_system(system: Arc<dyn SystemInfo>) -> Self {
        Self { system }
    }

    /// Returns whether `name` is one of the registered functions.
    pub fn contains(&self, name: &str) -> bool {
        FUNCTION_NAMES.contains(&name)
    }

    /// Value of the named environment variable, or an empty string if unset.
    pub fn env(&self, name: &str) -> String {
        self.system.var(name).unwrap_or_default()
    }

    /// Current wall-clock time formatted with a reference-time layout.
    pub fn time(&self, layout: &str) -> String {
        format_time(&self.system.now(), layout)
    }

    /// Value of `$HOSTNAME`; the OS hostname is deliberately not consulted.
    pub fn hostname(&self) -> String {
        self.env(HOSTNAME_ENV)
    }

    /// Current user's display name, or `"Unknown"` if the lookup fails.
    pub fn username(&self) -> String {
        self.system.real_name().unwrap_or_else(|| UNKNOWN_USER.to_string())
    }

    /// Registers every function into the engine environment.
    pub fn register(&self, env: &mut Environment<'_>) {
        let lib = self.clone();
        env.add_function("env", move |name: String| lib.env(&name));
        let lib = self.clone();
        env.add_function("time", move |layout: String| lib.time(&layout));
        let lib = self.clone();
        env.add_function("hostname", move || lib.hostname());
        let lib = self.clone();
        env.add_function("username", move || lib.username());

        env.add_function("toBinary", to_binary_arg);
        env.add_function("formatFilesize", format_filesize_arg);

        env.add_function("toLower", |s: String| to_lower(&s));
        env.add_function("toUpper", |s: String| to_upper(&s));
        env.add_function("toTitle", |s: String| to_title(&s));
        env.add_function("title", |s: String| title(&s));

        env.add_function("trimSpace", |s: String| s.trim().to_string());
        env.add_function("trimPrefix", |s: String, prefix: String| trim_prefix(&s, &prefix));
        env.add_function("trimSuffix", |s: String, suffix: String| trim_suffix(&s, &suffix));

        env.add_function("repeat", |s: String, count: i64| repeat(&s, count));
        env.add_function("replace", |s: String, old: String, new: String, count: i64| {
            replace(&s, &old, &new, count)
        });
        env.add_function("camel", |s: String, sep: String| camel(&s, &sep));
    }
}

/// Untyped arguments skip the engine's own undefined check, so strict mode is enforced here.
fn require_defined(state: &State, value: &Value) -> Result<(), EngineError> {
    if value.is_undefined() && matches!(state.undefined_behavior(), UndefinedBehavior::Strict) {
        return Err(EngineError::new(
            ErrorKind::UndefinedError,
            "undefined value passed to a template function",
        ));
    }
    Ok(())
}

fn to_binary_arg(state: &State, value: Value) -> Result<String, EngineError> {
    require_defined(state, &value)?;
    Ok(to_binary(&arg_text(&value)))
}

fn format_filesize_arg(state: &State, value: Value) -> Result<String, EngineError> {
    require_defined(state, &value)?;
    Ok(format_filesize(&value))
}

/// Strings pass through; anything else is stringified.
fn arg_text(value: &Value) -> String {
    value
        .as_str()
        .map(str::to_owned)
        .unwrap_or_else(|| value.to_string())
}

/// Base-2 representation of a decimal integer string; unparsable input is returned unchanged.
pub fn to_binary(s: &str) -> String {
    match s.parse::<i64>() {
        Ok(n) if n < 0 => format!("-{:b}", n.unsigned_abs()),
        Ok(n) => format!("{n:b}"),
        Err(_) => s.to_string(),
    }
}

/// A numeric template argument, decided once at the call boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Integer(i128),
    Float(f64),
}

impl Numeric {
    /// Classifies an engine value. Only numbers qualify; numeric strings do not.
    pub fn from_value(value: &Value) -> Option<Self> {
        if value.kind() != ValueKind::Number {
            return None;
        }
        i128::try_from(value.clone())
            .map(Numeric::Integer)
            .or_else(|_| f64::try_from(value.clone()).map(Numeric::Float))
            .ok()
    }

    fn as_f64(self) -> f64 {
        match self {
            Numeric::Integer(n) => n as f64,
            Numeric::Float(f) => f,
        }
    }
}

impl From<i64> for Numeric {
    fn from(n: i64) -> Self {
        Numeric::Integer(n.into())
    }
}

impl From<u64> for Numeric {
    fn from(n: u64) -> Self {
        Numeric::Integer(n.into())
    }
}

impl From<f64> for Numeric {
    fn from(f: f64) -> Self {
        Numeric::Float(f)
    }
}

/// Human-readable size of an engine value, or an empty string if it is not a number.
pub fn format_filesize(value: &Value) -> String {
    Numeric::from_value(value).map(format_size).unwrap_or_default()
}

/// Human-readable size using 1024-based units, e.g. `1.5 KB` or `2 GB`.
pub fn format_size(size: Numeric) -> String {
    let size = size.as_f64();
    let last = SIZE_UNITS.len() - 1;
    let rank = (0..last)
        .find(|&rank| size < 1024f64.powi(rank as i32 + 1))
        .unwrap_or(last);
    let scaled = match size / 1024f64.powi(rank as i32) {
        f if f == f64::INFINITY => "+Inf".to_string(),
        f if f == f64::NEG_INFINITY => "-Inf".to_string(),
        f => format!("{f:.1}"),
    };
    let scaled = scaled.strip_suffix(".0").unwrap_or(&scaled);
    format!("{scaled} {}", SIZE_UNITS[rank])
}

/// Latin digraphs have a titlecase form distinct from their uppercase.
fn digraph_title(c: char) -> Option<char> {
    match c {
        '\u{01C4}'..='\u{01C6}' => Some('\u{01C5}'),
        '\u{01C7}'..='\u{01C9}' => Some('\u{01C8}'),
        '\u{01CA}'..='\u{01CC}' => Some('\u{01CB}'),
        '\u{01F1}'..='\u{01F3}' => Some('\u{01F2}'),
        _ => None,
    }
}

fn push_title_char(out: &mut String, c: char) {
    match digraph_title(c) {
        Some(title) => out.push(title),
        None => out.extend(c.to_uppercase()),
    }
}

/// The mapping if it is exactly one character.
fn single(mut mapped: impl Iterator<Item = char>) -> Option<char> {
    match (mapped.next(), mapped.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Simple (one-to-one) uppercase mapping. Characters whose uppercase expands,
/// such as `ß` or `ﬁ`, are left unchanged.
fn simple_upper(c: char) -> char {
    match c {
        // Greek with ypogegrammeni: the simple mapping is the prosgegrammeni form.
        '\u{1F80}'..='\u{1F87}' | '\u{1F90}'..='\u{1F97}' | '\u{1FA0}'..='\u{1FA7}' => {
            char::from_u32(c as u32 + 8).unwrap_or(c)
        }
        '\u{1FB3}' => '\u{1FBC}',
        '\u{1FC3}' => '\u{1FCC}',
        '\u{1FF3}' => '\u{1FFC}',
        _ => single(c.to_uppercase()).unwrap_or(c),
    }
}

/// Simple (one-to-one) lowercase mapping, independent of the surrounding text.
fn simple_lower(c: char) -> char {
    match c {
        '\u{0130}' => 'i',
        _ => single(c.to_lowercase()).unwrap_or(c),
    }
}

/// Maps every character to its uppercase form, one character at a time.
pub fn to_upper(s: &str) -> String {
    s.chars().map(simple_upper).collect()
}

/// Maps every character to its lowercase form, one character at a time.
pub fn to_lower(s: &str) -> String {
    s.chars().map(simple_lower).collect()
}

/// Maps every character to its title form.
pub fn to_title(s: &str) -> String {
    s.chars()
        .map(|c| digraph_title(c).unwrap_or_else(|| simple_upper(c)))
        .collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_apostrophe(c: char) -> bool {
    c == '\'' || c == '\u{2019}'
}

/// English title case: the first character of each word is title-cased, the rest lowercased.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        if is_word_char(c) {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                push_title_char(&mut out, c);
            }
            in_word = true;
        } else {
            // "o'neil" is one word.
            in_word = in_word
                && is_apostrophe(c)
                && chars.peek().is_some_and(|next| next.is_alphabetic());
            out.push(c);
        }
    }
    out
}

pub fn trim_prefix(s: &str, prefix: &str) -> String {
    s.strip_prefix(prefix).unwrap_or(s).to_string()
}

pub fn trim_suffix(s: &str, suffix: &str) -> String {
    s.strip_suffix(suffix).unwrap_or(s).to_string()
}

/// `s` concatenated `count` times. A negative count fails the render.
pub fn repeat(s: &str, count: i64) -> Result<String, EngineError> {
    let count = usize::try_from(count)
        .map_err(|_| EngineError::new(ErrorKind::InvalidOperation, "negative repeat count"))?;
    if s.len().checked_mul(count).is_none() {
        return Err(EngineError::new(
            ErrorKind::InvalidOperation,
            "repeat count causes overflow",
        ));
    }
    Ok(s.repeat(count))
}

/// Replaces the first `count` non-overlapping occurrences of `old`; a negative count replaces all.
pub fn replace(s: &str, old: &str, new: &str, count: i64) -> String {
    match usize::try_from(count) {
        Ok(count) => s.replacen(old, new, count),
        Err(_) => s.replace(old, new),
    }
}

/// Splits on `sep` and joins the parts, title-casing every part after the first.
pub fn camel(value: &str, sep: &str) -> String {
    let mut parts = split(value, sep).into_iter();
    let mut result = parts.next().unwrap_or_default().to_string();
    for part in parts {
        result.push_str(&title(part));
    }
    result
}

/// An empty separator splits between characters.
fn split<'a>(value: &'a str, sep: &str) -> Vec<&'a str> {
    if sep.is_empty() {
        value
            .char_indices()
            .map(|(i, c)| &value[i..i + c.len_utf8()])
            .collect()
    } else {
        value.split(sep).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_on_empty_separator() {
        assert_eq!(split("añb", ""), vec!["a", "ñ", "b"]);
        assert!(split("", "").is_empty());
    }

    #[test]
    fn test_split_keeps_empty_segments() {
        assert_eq!(split("a__b", "_"), vec!["a", "", "b"]);
    }

    #[test]
    fn test_arg_text() {
        assert_eq!(arg_text(&Value::from("10")), "10");
        assert_eq!(arg_text(&Value::from(10)), "10");
    }
}
