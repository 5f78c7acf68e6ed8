//! Template renderer and rendering functionality for Kiln.
//! Wraps a MiniJinja environment carrying the function library, the case
//! filters and the render options.
use crate::constants::INLINE_TEMPLATE_NAME;
use crate::error::{Error, Result};
use crate::filters::register_case_filters;
use crate::functions::FunctionLibrary;
use crate::options::{MissingKey, RenderOptions};
use log::debug;
use minijinja::{Environment, ErrorKind, Template};
use std::path::Path;

/// Global functions provided by the engine itself.
const BUILTIN_GLOBALS: [&str; 4] = ["range", "dict", "debug", "namespace"];

/// Trait for template rendering engines.
pub trait TemplateRenderer {
    /// Renders a named template source with the given context.
    ///
    /// # Arguments
    /// * `name` - Name reported in errors
    /// * `template` - Template string to render
    /// * `context` - Context variables for rendering
    ///
    /// # Returns
    /// * `Result<String>` - Rendered template string
    fn render_as(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String>;

    /// Renders an inline template string with the given context.
    fn render(&self, template: &str, context: &serde_json::Value) -> Result<String> {
        self.render_as(INLINE_TEMPLATE_NAME, template, context)
    }

    /// Reads and renders a template file, naming it by its path.
    fn render_file(&self, path: &Path, context: &serde_json::Value) -> Result<String> {
        let template = std::fs::read_to_string(path)?;
        self.render_as(&path.display().to_string(), &template, context)
    }
}

/// MiniJinja-based template rendering engine.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance, configured once
    env: Environment<'static>,
    library: FunctionLibrary,
    options: RenderOptions,
}

impl MiniJinjaRenderer {
    /// Creates a renderer with the host function library and default (strict) options.
    pub fn new() -> Self {
        Self::with_parts(FunctionLibrary::new(), RenderOptions::default())
    }

    /// Creates a renderer from an explicit function library and render options.
    pub fn with_parts(library: FunctionLibrary, options: RenderOptions) -> Self {
        let mut env = Environment::new();
        options.apply(&mut env);
        library.register(&mut env);
        register_case_filters(&mut env);
        Self { env, library, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn is_global(&self, name: &str) -> bool {
        self.library.contains(name) || BUILTIN_GLOBALS.contains(&name)
    }

    /// Works out which referenced keys are absent from `context`.
    ///
    /// Candidates are the template's undeclared variables (with attribute paths)
    /// minus globals and anything that resolves. When the engine reports where
    /// the failure happened, candidates mentioned there are preferred.
    fn missing_keys(
        &self,
        tmpl: &Template<'_, '_>,
        source: &str,
        context: &serde_json::Value,
        err: &minijinja::Error,
    ) -> Vec<String> {
        let mut missing: Vec<String> = tmpl
            .undeclared_variables(true)
            .into_iter()
            .filter(|path| {
                let root = path.split('.').next().unwrap_or(path);
                !self.is_global(root) && !resolves(context, path)
            })
            .collect();
        missing.sort();

        let snippet = err.range().and_then(|range| source.get(range));
        if let Some(snippet) = snippet {
            let focused: Vec<String> = missing
                .iter()
                .filter(|path| snippet.contains(path.as_str()))
                .cloned()
                .collect();
            if !focused.is_empty() {
                return focused;
            }
            if missing.is_empty() {
                return vec![snippet.trim().to_string()];
            }
        }
        missing
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        MiniJinjaRenderer::new()
    }
}

/// Returns whether a dotted path resolves to a value in `context`.
fn resolves(context: &serde_json::Value, path: &str) -> bool {
    path.split('.')
        .try_fold(context, |value, segment| match value {
            serde_json::Value::Object(map) => map.get(segment),
            serde_json::Value::Array(items) => {
                segment.parse::<usize>().ok().and_then(|index| items.get(index))
            }
            _ => None,
        })
        .is_some()
}

impl TemplateRenderer for MiniJinjaRenderer {
    /// Renders a template string using MiniJinja.
    ///
    /// # Errors
    /// * `Error::UndefinedKeyError` if the template references keys missing from `context`
    ///   while the missing-key policy is strict
    /// * `Error::MinijinjaError` if the template cannot be parsed or evaluated
    fn render_as(&self, name: &str, template: &str, context: &serde_json::Value) -> Result<String> {
        debug!("Rendering template '{name}'.");
        let mut env = self.env.clone();
        env.add_template_owned(name.to_string(), template.to_string())?;
        let tmpl = env.get_template(name)?;

        tmpl.render(context).map_err(|err| {
            if err.kind() != ErrorKind::UndefinedError
                || self.options.missing_key() != MissingKey::Error
            {
                return Error::MinijinjaError(err);
            }
            let keys = self.missing_keys(&tmpl, template, context, &err);
            if keys.is_empty() {
                return Error::MinijinjaError(err);
            }
            debug!("Template '{name}' references undefined keys: {}", keys.join(", "));
            Error::UndefinedKeyError { keys, template: name.to_string() }
        })
    }
}
