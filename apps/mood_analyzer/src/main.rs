use anyhow::Context;
use clap::Parser;
use mood_analysis::{SentimentClassifier, SuggestionProvider, VaderScorer};
use mood_analyzer::config::Config;
use mood_analyzer::session::{Console, Session};
use mood_analyzer::telemetry::init_tracing;
use mood_log::MoodLog;
use std::io;

fn main() -> anyhow::Result<()> {
	dotenv::dotenv().ok();

	let config = Config::parse();
	init_tracing(&config)?;

	let scorer = VaderScorer::new();
	let store = MoodLog::initialize(config.store_config()).with_context(|| format!("could not initialize mood log in {}", config.data_dir.display()))?;
	tracing::info!(path = %store.path().display(), "starting mood analyzer session");

	let session = Session::new(SentimentClassifier::new(scorer), SuggestionProvider::new(), store);
	let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
	session.run(&mut console).context("console I/O failed")?;

	Ok(())
}
