use mood_log::Emotion;
use rand::seq::SliceRandom;

pub const FALLBACK_SUGGESTION: &str = "No specific suggestion available for this mood.";

pub const POSITIVE_SUGGESTIONS: &[&str] = &[
	"Excellent! Channel this positive energy into a creative or challenging task.",
	"Great to hear! Consider collaborating with your team or mentoring someone.",
];

pub const NEUTRAL_SUGGESTIONS: &[&str] = &[
	"A good state for focused work. Tackle your to-do list or routine tasks.",
	"Neutral mood. This might be a good time for planning or organizing.",
];

pub const NEGATIVE_SUGGESTIONS: &[&str] = &[
	"I'm sorry you're feeling this way. Consider taking a short break or stretching.",
	"If you're stressed, perhaps switch to a less demanding task for a while.",
];

pub const UNKNOWN_SUGGESTIONS: &[&str] = &["Mood not determined. Please provide input about how you're feeling."];

/// The fixed candidate pool for a label. Never empty.
pub const fn pool_for(emotion: Emotion) -> &'static [&'static str] {
	match emotion {
		Emotion::Positive => POSITIVE_SUGGESTIONS,
		Emotion::Neutral => NEUTRAL_SUGGESTIONS,
		Emotion::Negative => NEGATIVE_SUGGESTIONS,
		Emotion::Unknown => UNKNOWN_SUGGESTIONS,
	}
}

/// Picks a coping suggestion uniformly at random from the label's pool.
#[derive(Debug, Default, Clone, Copy)]
pub struct SuggestionProvider;

impl SuggestionProvider {
	pub const fn new() -> Self {
		Self
	}

	pub fn suggest(&self, emotion: Emotion) -> &'static str {
		pool_for(emotion).choose(&mut rand::thread_rng()).copied().unwrap_or(FALLBACK_SUGGESTION)
	}

	/// Like [`Self::suggest`] for a raw label; labels outside the known set
	/// get [`FALLBACK_SUGGESTION`].
	pub fn suggest_label(&self, label: &str) -> &'static str {
		label.parse::<Emotion>().map_or(FALLBACK_SUGGESTION, |emotion| self.suggest(emotion))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashSet;

	#[test]
	fn test_every_pool_is_non_empty() {
		for emotion in Emotion::ALL {
			assert!(!pool_for(emotion).is_empty(), "empty pool for {emotion}");
		}
	}

	#[test]
	fn test_suggestions_come_from_the_pool() {
		let provider = SuggestionProvider::new();
		for emotion in Emotion::ALL {
			for _ in 0..50 {
				let suggestion = provider.suggest(emotion);
				assert!(pool_for(emotion).contains(&suggestion), "{suggestion:?} not in {emotion} pool");
			}
		}
	}

	#[test]
	fn test_suggest_label() {
		let provider = SuggestionProvider::new();
		assert!(POSITIVE_SUGGESTIONS.contains(&provider.suggest_label("positive")));
		assert_eq!(provider.suggest_label("furious"), FALLBACK_SUGGESTION);
		assert_eq!(provider.suggest_label(""), FALLBACK_SUGGESTION);
	}

	#[test]
	fn test_both_candidates_eventually_chosen() {
		let provider = SuggestionProvider::new();
		let seen: HashSet<_> = (0..200).map(|_| provider.suggest(Emotion::Negative)).collect();
		assert_eq!(seen.len(), NEGATIVE_SUGGESTIONS.len());
	}
}
