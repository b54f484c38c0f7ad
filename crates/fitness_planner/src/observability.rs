//! Tracing subscriber setup for binaries and examples embedding the planner.

use tracing_subscriber::EnvFilter;

/// Per-target overrides appended to the configured filter so HTTP internals
/// stay quiet by default.
const QUIET_TARGETS: &str = "reqwest=warn,hyper=warn,hyper_util=warn";

/// Build the log filter from `FITNESS_PLANNER_LOG_LEVEL`, falling back to
/// `RUST_LOG` and then `info`.
pub fn log_filter_with<F>(mut get: F) -> String
where
    F: FnMut(&str) -> Option<String>,
{
    let level = get("FITNESS_PLANNER_LOG_LEVEL")
        .or_else(|| get("RUST_LOG"))
        .unwrap_or_else(|| "info".to_string());
    format!("{level},{QUIET_TARGETS}")
}

/// Install a compact stderr subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_tracing() {
    let filter = log_filter_with(|k| std::env::var(k).ok());
    let env_filter = EnvFilter::try_new(&filter)
        .unwrap_or_else(|_| EnvFilter::new(format!("info,{QUIET_TARGETS}")));
    let installed = tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(env_filter)
        .try_init()
        .is_ok();
    if installed {
        tracing::info!("fitness_planner: log filter: {}", filter);
    }
}
