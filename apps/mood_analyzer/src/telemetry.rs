use crate::config::Config;
use anyhow::Context;
use tracing_subscriber::{filter::EnvFilter, fmt::format::JsonFields, layer::SubscriberExt, util::SubscriberInitExt, Layer};

/// Installs the global subscriber. Logs go to stderr so they never mix with
/// the menu on stdout.
pub fn init_tracing(config: &Config) -> anyhow::Result<()> {
	let filter = EnvFilter::try_new(&config.rust_log).with_context(|| format!("invalid log filter \"{}\"", config.rust_log))?;

	tracing_subscriber::registry()
		.with(if config.log_json {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			) as Box<dyn Layer<_> + Send + Sync>
		} else {
			Box::new(
				tracing_subscriber::fmt::layer()
					.with_writer(std::io::stderr)
					.event_format(tracing_subscriber::fmt::format().pretty())
					.with_filter(filter),
			)
		})
		.try_init()
		.context("could not install tracing subscriber")?;
	Ok(())
}
