mod app;
mod constants;
mod handlers;
mod rendering;
mod state;

use tracing::info;
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    color_backtrace::install();
    init_logging()?;

    info!(
        "portal-notifications ({})",
        env!("CARGO_PKG_VERSION")
    );

    app::run()?;
    Ok(())
}

fn init_logging() -> anyhow::Result<()> {
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();

    #[cfg(feature = "systemd")]
    if let Ok(journald) = tracing_journald::layer() {
        tracing_subscriber::registry()
            .with(journald)
            .with(env_filter)
            .try_init()?;
        return Ok(());
    }

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter)
        .try_init()?;
    Ok(())
}
