use anyhow::Result;
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::core::Configuration;

/// Initialize structured logging based on verbosity level
pub fn init_logging(verbose: bool) -> Result<()> {
    let env_filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pw_scaffold=debug,info"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pw_scaffold=info,warn"))
    };

    // Logs go to stderr so they never interleave with the prompts on stdout
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    if verbose {
        tracing::info!("Verbose logging enabled");
    }

    Ok(())
}

/// Log the configuration the collector settled on
pub fn log_configuration_resolved(config: &Configuration) {
    tracing::debug!(
        test_dir = %config.test_dir_name,
        root = %config.framework_root.display(),
        base_url = %config.base_url,
        workers = %config.max_workers,
        retries = config.retries,
        browsers = %config.browser_list(),
        "Configuration resolved"
    );
}

/// Log a browser token the classifier could not map to a project
pub fn log_token_discarded(token: &str) {
    tracing::warn!(token = token, "Ignoring unrecognized browser");
}

/// Log a base URL that does not parse; it is still used as given
pub fn log_unparsed_base_url(base_url: &str) {
    tracing::warn!(base_url = base_url, "Base URL does not look like a URL, using it as-is");
}

/// Log a single emitted template
pub fn log_template_written(template: &str, path: &Path, bytes: usize) {
    tracing::debug!(
        template = template,
        path = %path.display(),
        bytes = bytes,
        "Template written"
    );
}

/// Log an external command and how it ended
pub fn log_command_run(command: &str, exit_code: Option<i32>) {
    match exit_code {
        Some(0) => tracing::info!(command = command, "Command completed"),
        Some(code) => tracing::warn!(command = command, exit_code = code, "Command exited with failure"),
        None => tracing::error!(command = command, "Command terminated without an exit code"),
    }
}

/// Log system information for debugging
pub fn log_system_info() {
    tracing::debug!(
        os = std::env::consts::OS,
        arch = std::env::consts::ARCH,
        "System information"
    );
}
