use mood_log::Emotion;
use thiserror::Error;
use tracing::warn;
use vader_sentiment::SentimentIntensityAnalyzer;

const WARMUP_TEXT: &str = "good";

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
	#[error("scorer returned no compound score")]
	MissingCompound,

	#[error("scorer returned a non-finite compound score: {0}")]
	NonFinite(f64),

	#[error("scorer unavailable: {0}")]
	Unavailable(String),
}

/// Anything that turns text into a compound polarity score in [-1, 1].
pub trait PolarityScorer {
	fn compound(&self, text: &str) -> Result<f64, ScoreError>;
}

/// VADER lexicon scorer. The lexicon ships inside the `vader_sentiment`
/// crate, so there is nothing to download at startup.
pub struct VaderScorer {
	analyzer: SentimentIntensityAnalyzer<'static>,
	unavailable: Option<String>,
}

impl VaderScorer {
	/// Builds the analyzer and scores a known-positive word once. A failed check is
	/// logged here and every later call returns [`ScoreError::Unavailable`].
	pub fn new() -> Self {
		Self::checked(WARMUP_TEXT)
	}

	fn checked(sample: &str) -> Self {
		let mut scorer = Self {
			analyzer: SentimentIntensityAnalyzer::new(),
			unavailable: None,
		};
		match scorer.score(sample) {
			Ok(score) if score > 0.0 => tracing::debug!(score, "VADER lexicon loaded"),
			Ok(score) => scorer.unavailable = Some(format!("\"{sample}\" scored {score}")),
			Err(e) => scorer.unavailable = Some(e.to_string()),
		}
		if let Some(reason) = &scorer.unavailable {
			warn!(%reason, "sentiment lexicon unusable, entries will be labelled unknown");
		}
		scorer
	}

	pub const fn is_available(&self) -> bool {
		self.unavailable.is_none()
	}

	fn score(&self, text: &str) -> Result<f64, ScoreError> {
		let scores = self.analyzer.polarity_scores(text);
		let compound = scores.get("compound").copied().ok_or(ScoreError::MissingCompound)?;
		if compound.is_finite() {
			Ok(compound)
		} else {
			Err(ScoreError::NonFinite(compound))
		}
	}
}

impl Default for VaderScorer {
	fn default() -> Self {
		Self::new()
	}
}

impl PolarityScorer for VaderScorer {
	fn compound(&self, text: &str) -> Result<f64, ScoreError> {
		if let Some(reason) = &self.unavailable {
			return Err(ScoreError::Unavailable(reason.clone()));
		}
		self.score(text)
	}
}

pub struct SentimentClassifier<S> {
	scorer: S,
}

impl<S: PolarityScorer> SentimentClassifier<S> {
	pub const fn new(scorer: S) -> Self {
		Self { scorer }
	}

	/// Empty text is `(Unknown, 0.0)` and never reaches the scorer. A scorer
	/// failure degrades to the same result.
	pub fn classify(&self, text: &str) -> (Emotion, f64) {
		if text.trim().is_empty() {
			return (Emotion::Unknown, 0.0);
		}

		match self.scorer.compound(text) {
			Ok(score) if score.is_finite() => (Emotion::from_score(score), score),
			Ok(score) => {
				warn!(score, "discarding non-finite sentiment score");
				(Emotion::Unknown, 0.0)
			}
			Err(e) => {
				warn!(error = %e, "sentiment scoring failed");
				(Emotion::Unknown, 0.0)
			}
		}
	}
}
