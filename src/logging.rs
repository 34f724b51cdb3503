//! Tracing setup for the desktop app.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `default_level`. Calling this twice is harmless;
/// the second call leaves the first subscriber in place.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::init_logging;

    #[test]
    fn test_init_is_idempotent() {
        init_logging("debug");
        init_logging("not a level ((");
        tracing::info!("logging still works");
    }
}
