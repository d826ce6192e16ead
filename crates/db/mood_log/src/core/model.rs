use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const POSITIVE_THRESHOLD: f64 = 0.05;
pub const NEGATIVE_THRESHOLD: f64 = -0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
	Positive,
	Neutral,
	Negative,
	Unknown,
}

impl Emotion {
	pub const ALL: [Self; 4] = [Self::Positive, Self::Neutral, Self::Negative, Self::Unknown];

	/// Maps a compound score onto a label. Both thresholds are inclusive.
	pub fn from_score(score: f64) -> Self {
		if score >= POSITIVE_THRESHOLD {
			Self::Positive
		} else if score <= NEGATIVE_THRESHOLD {
			Self::Negative
		} else {
			Self::Neutral
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Positive => "positive",
			Self::Neutral => "neutral",
			Self::Negative => "negative",
			Self::Unknown => "unknown",
		}
	}

	pub const fn capitalized(self) -> &'static str {
		match self {
			Self::Positive => "Positive",
			Self::Neutral => "Neutral",
			Self::Negative => "Negative",
			Self::Unknown => "Unknown",
		}
	}
}

impl fmt::Display for Emotion {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown emotion label \"{0}\"")]
pub struct ParseEmotionError(pub String);

impl FromStr for Emotion {
	type Err = ParseEmotionError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"positive" => Ok(Self::Positive),
			"neutral" => Ok(Self::Neutral),
			"negative" => Ok(Self::Negative),
			"unknown" => Ok(Self::Unknown),
			other => Err(ParseEmotionError(other.to_string())),
		}
	}
}

/// A stored `emotion_score` field. Fields that are not a finite number are
/// kept verbatim so listings still show them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Score {
	Value(f64),
	Unparsed(String),
}

impl Score {
	pub fn parse(field: &str) -> Self {
		match field.trim().parse::<f64>() {
			Ok(value) if value.is_finite() => Self::Value(value),
			_ => Self::Unparsed(field.to_string()),
		}
	}

	pub const fn value(&self) -> Option<f64> {
		match self {
			Self::Value(value) => Some(*value),
			Self::Unparsed(_) => None,
		}
	}
}

impl fmt::Display for Score {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Value(value) => match f.precision() {
				Some(precision) => write!(f, "{value:.precision$}"),
				None => write!(f, "{value}"),
			},
			Self::Unparsed(raw) => f.write_str(raw),
		}
	}
}

/// The caller-supplied part of an entry; the store adds the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewMoodEntry {
	pub employee_id: String,
	pub text_input: String,
	pub detected_emotion: Emotion,
	pub emotion_score: f64,
	pub suggestion_given: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
	pub timestamp: NaiveDateTime,
	pub employee_id: String,
	pub text_input: String,
	pub detected_emotion: Emotion,
	pub emotion_score: Score,
	pub suggestion_given: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoodSummary {
	pub count: usize,
	pub average_score: Option<f64>,
	pub min_score: Option<f64>,
	pub max_score: Option<f64>,
	pub positive: usize,
	pub neutral: usize,
	pub negative: usize,
	pub unknown: usize,
}

impl MoodSummary {
	/// Aggregates entries with a numeric score. Unparsed scores are skipped.
	pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a MoodEntry>) -> Self {
		let mut summary = Self::default();
		let mut total = 0.0;

		for entry in entries {
			let Some(score) = entry.emotion_score.value() else {
				continue;
			};
			summary.count += 1;
			total += score;
			summary.min_score = Some(summary.min_score.map_or(score, |min| min.min(score)));
			summary.max_score = Some(summary.max_score.map_or(score, |max| max.max(score)));
			match entry.detected_emotion {
				Emotion::Positive => summary.positive += 1,
				Emotion::Neutral => summary.neutral += 1,
				Emotion::Negative => summary.negative += 1,
				Emotion::Unknown => summary.unknown += 1,
			}
		}

		if summary.count > 0 {
			#[allow(clippy::cast_precision_loss)]
			let count = summary.count as f64;
			summary.average_score = Some(total / count);
		}
		summary
	}

	/// Overall label for the average, `None` when there is no valid data.
	pub fn overall(&self) -> Option<Emotion> {
		self.average_score.map(Emotion::from_score)
	}
}
