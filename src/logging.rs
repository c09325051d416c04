/// Tracing subscriber setup.
use tracing_subscriber::EnvFilter;

/// Install the global subscriber, writing to stderr so stdout stays clean.
///
/// `RUST_LOG` takes precedence; otherwise the level is `debug` for this crate
/// when `debug` is set and `warn` everywhere else.
pub fn init(debug: bool) {
    let default = if debug { "warn,agent_mint=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
