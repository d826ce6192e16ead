use super::config::StoreConfig;
use super::error::StoreError;
use super::model::{MoodEntry, MoodSummary, NewMoodEntry, Score};
use super::queries;
use super::schema;
use chrono::{Local, NaiveDateTime, Timelike};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Append-only mood table backed by a single CSV file.
///
/// A `MoodLog` only exists once its table has been initialized, so every
/// method can assume the data directory and header are in place.
///
/// Every append rewrites the whole file, which is O(total rows). That is fine
/// for small per-team logs and is the known ceiling of this store.
#[derive(Debug, Clone)]
pub struct MoodLog {
	config: StoreConfig,
	path: PathBuf,
}

impl MoodLog {
	/// Creates the data directory and a header-only table if either is
	/// missing. Calling it again on an existing table changes nothing.
	pub fn initialize(config: StoreConfig) -> Result<Self, StoreError> {
		let path = config.table_path();
		queries::create_table(&path)?;
		info!(path = %path.display(), "mood log ready");
		Ok(Self { config, path })
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	pub const fn config(&self) -> &StoreConfig {
		&self.config
	}

	/// Appends one entry stamped with the current local time.
	pub fn append(&self, entry: NewMoodEntry) -> Result<MoodEntry, StoreError> {
		let now = Local::now().naive_local();
		self.append_at(entry, now.with_nanosecond(0).unwrap_or(now))
	}

	/// Appends one entry with an explicit timestamp. Existing rows are
	/// copied over verbatim; on error the table is left as it was.
	pub fn append_at(&self, entry: NewMoodEntry, timestamp: NaiveDateTime) -> Result<MoodEntry, StoreError> {
		let employee_id = entry.employee_id.trim();
		if employee_id.is_empty() {
			return Err(StoreError::EmptyEmployeeId);
		}
		if !entry.emotion_score.is_finite() {
			return Err(StoreError::InvalidScore(entry.emotion_score));
		}

		let stored = MoodEntry {
			timestamp,
			employee_id: employee_id.to_string(),
			text_input: entry.text_input.trim().to_string(),
			detected_emotion: entry.detected_emotion,
			emotion_score: Score::Value(entry.emotion_score),
			suggestion_given: entry.suggestion_given.trim().to_string(),
		};

		let mut rows = queries::read_records(&self.path)?;
		rows.push(schema::to_record(&stored));
		queries::replace_table(&self.path, &rows)?;

		debug!(employee_id = %stored.employee_id, rows = rows.len(), "appended mood entry");
		Ok(stored)
	}

	/// All entries in arrival order, or only those whose trimmed
	/// `employee_id` equals the trimmed filter. A filter that is blank after
	/// trimming counts as no filter, so `Some("  ")` returns every row.
	pub fn query(&self, employee_id: Option<&str>) -> Result<Vec<MoodEntry>, StoreError> {
		queries::fetch_entries(&self.path, employee_id)
	}

	/// Average and breakdown over one employee's entries. Rows whose score is
	/// not numeric are left out without error.
	pub fn summarize(&self, employee_id: &str) -> Result<MoodSummary, StoreError> {
		let employee_id = employee_id.trim();
		if employee_id.is_empty() {
			return Err(StoreError::EmptyEmployeeId);
		}

		let entries = queries::fetch_entries(&self.path, Some(employee_id))?;
		let summary = MoodSummary::from_entries(&entries);

		let dropped = entries.len() - summary.count;
		if dropped > 0 {
			debug!(employee_id, dropped, "ignored rows with unparsed scores");
		}
		Ok(summary)
	}
}
