pub mod classifier;
pub mod suggestion;

pub use classifier::{PolarityScorer, ScoreError, SentimentClassifier, VaderScorer};
pub use mood_log::Emotion;
pub use suggestion::{pool_for, SuggestionProvider, FALLBACK_SUGGESTION};
