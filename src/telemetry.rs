use tracing_subscriber::EnvFilter;

use pipegraph_core::LogConfig;

/// Install a global `fmt` subscriber.
///
/// `RUST_LOG` takes precedence; otherwise `config.filter` is used. Returns
/// `false` if a global subscriber was already installed.
pub fn init(config: &LogConfig) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(build_filter(config))
        .with_target(config.with_target)
        .try_init()
        .is_ok()
}

fn build_filter(config: &LogConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_harmless() {
        let config = LogConfig::default();
        let _ = init(&config);
        assert!(!init(&config));
    }
}
