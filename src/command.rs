//! Subcommand implementations. Each one runs after the template root has been bootstrapped.

use crate::cli::RenderArgs;
use crate::config::Configuration;
use crate::error::{Error, Result};
use crate::parser::{load_data_file, load_from_stdin, merge_data};
use crate::renderer::TemplateRenderer;
use log::debug;
use std::path::{Path, PathBuf};

/// Formats the `version` output.
pub fn version_message(version: &str, dont_prettify: bool) -> String {
    if dont_prettify {
        version.to_string()
    } else {
        format!("Current version is {version}")
    }
}

/// Resolves a template path: taken as given if it exists, otherwise looked up
/// under the template root.
///
/// # Errors
/// * `Error::TemplateDoesNotExistsError` if neither location holds a file
pub fn resolve_template_path(template_dir: &Path, template: &str) -> Result<PathBuf> {
    let direct = PathBuf::from(template);
    if direct.is_file() {
        return Ok(direct);
    }

    let under_root = template_dir.join(template);
    if under_root.is_file() {
        debug!("Resolved template '{}' under '{}'.", template, template_dir.display());
        return Ok(under_root);
    }

    Err(Error::TemplateDoesNotExistsError { template: template.to_string() })
}

/// Assembles the data mapping from the data file or stdin plus `--var` overrides.
pub fn collect_data(args: &RenderArgs) -> Result<serde_json::Value> {
    let base = if let Some(path) = &args.data {
        load_data_file(path)?
    } else if args.stdin {
        load_from_stdin()?
    } else {
        serde_json::Value::Object(serde_json::Map::new())
    };
    Ok(merge_data(base, args.vars.clone()))
}

fn write_file(content: &str, dest_path: &Path) -> Result<()> {
    if let Some(parent) = dest_path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
    {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

/// Renders one template and writes it to `--output` or stdout.
pub fn run_render(
    engine: &dyn TemplateRenderer,
    config: &Configuration,
    args: &RenderArgs,
) -> Result<()> {
    let context = collect_data(args)?;

    let rendered = if args.inline {
        engine.render(&args.template, &context)?
    } else {
        let path = resolve_template_path(&config.template_dir, &args.template)?;
        engine.render_file(&path, &context)?
    };

    match &args.output {
        Some(output) => {
            write_file(&rendered, output)?;
            debug!("Wrote '{}'.", output.display());
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
