use anyhow::Result;
use tracing::subscriber::set_global_default;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{EnvFilter, Registry, layer::SubscriberExt};

/// Installs the global subscriber. `RUST_LOG` overrides the default `info`
/// filter. Records from the `log` facade are forwarded.
///
/// Logs go to stderr so stdout carries only batch output and the summary.
pub fn init(json: bool) -> Result<()> {
    LogTracer::init()?;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if json {
        let subscriber = Registry::default()
            .with(env_filter)
            .with(JsonStorageLayer)
            .with(BunyanFormattingLayer::new(
                env!("CARGO_PKG_NAME").to_string(),
                std::io::stderr,
            ));
        set_global_default(subscriber)?;
    } else {
        let subscriber = Registry::default().with(env_filter).with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        );
        set_global_default(subscriber)?;
    }

    Ok(())
}
