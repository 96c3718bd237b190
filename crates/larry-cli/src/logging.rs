use tracing_subscriber::{fmt, EnvFilter};

/// The filter used when neither flags, `RUST_LOG` nor the config choose one.
pub const DEFAULT_LEVEL: &str = "warn";

/// Picks the log filter: `-q` and `-v` win over the config file level.
pub fn log_level(verbose: u8, quiet: bool, configured: Option<&str>) -> String {
    if quiet {
        return "error".to_string();
    }
    match verbose {
        0 => configured.unwrap_or(DEFAULT_LEVEL).to_string(),
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Installs the global subscriber, writing to stderr. `RUST_LOG` overrides
/// `level` when set.
pub fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
