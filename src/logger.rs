use log::LevelFilter;

/// Installs the `env_logger` backend. Logs go to stderr so rendered output on stdout stays clean.
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
}
