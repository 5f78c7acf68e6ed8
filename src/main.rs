//! Kiln's main application entry point.
//! Parses arguments, bootstraps the template root, then dispatches the subcommand.

use kiln::{
    bootstrap::ensure_template_root,
    cli::{get_args, Args, Command},
    command::{run_render, version_message},
    config::Configuration,
    error::{default_error_handler, Result},
    logger::init_logger,
    renderer::MiniJinjaRenderer,
};

/// Main application entry point.
fn main() {
    let args = get_args();
    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the configuration
/// 2. Ensures the template root exists (fatal on failure)
/// 3. Runs the requested subcommand
fn run(args: Args) -> Result<()> {
    let config = Configuration::resolve(args.template_dir)?;
    ensure_template_root(&config.template_dir)?;

    match args.command {
        Command::Version => {
            println!("{}", version_message(env!("CARGO_PKG_VERSION"), args.dont_prettify));
            Ok(())
        }
        Command::Render(render_args) => {
            let engine = MiniJinjaRenderer::new();
            run_render(&engine, &config, &render_args)
        }
    }
}
