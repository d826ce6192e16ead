use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
	#[error(transparent)]
	Io(#[from] io::Error),

	#[error(transparent)]
	Csv(#[from] csv::Error),

	#[error("could not replace mood log: {0}")]
	Persist(#[from] tempfile::PersistError),

	#[error("mood log header does not match the expected columns, found [{}]", .found.join(","))]
	SchemaMismatch { found: Vec<String> },

	#[error("Employee ID cannot be empty")]
	EmptyEmployeeId,

	#[error("emotion score must be a finite number, got {0}")]
	InvalidScore(f64),
}

/// Why a stored row could not be coerced into a [`crate::MoodEntry`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
	#[error("expected {expected} fields, found {found}")]
	FieldCount { expected: usize, found: usize },

	#[error("invalid timestamp \"{0}\"")]
	InvalidTimestamp(String),

	#[error("unknown emotion label \"{0}\"")]
	UnknownEmotion(String),

	#[error("empty employee id")]
	EmptyEmployeeId,
}
