use crate::config::HarnessConfig;
use crate::error::Result;

/// Install the global `fmt` subscriber with the configured directives.
///
/// Safe to call from every test: once a subscriber is installed, later calls
/// only validate the directives.
pub fn init_tracing(config: &HarnessConfig) -> Result<()> {
    let filter = config.tracing_env_filter()?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_test_writer()
        .try_init()
        .is_ok();
    if installed {
        tracing::debug!(network = config.network.network, "tracing initialised");
    }
    Ok(())
}
