use super::error::{RowError, StoreError};
use super::model::{Emotion, MoodEntry, Score};
use chrono::NaiveDateTime;
use csv::StringRecord;

pub const COLUMNS: [&str; 6] = ["timestamp", "employee_id", "text_input", "detected_emotion", "emotion_score", "suggestion_given"];

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn check_header(headers: &StringRecord) -> Result<(), StoreError> {
	if headers.iter().eq(COLUMNS.iter().copied()) {
		return Ok(());
	}
	Err(StoreError::SchemaMismatch {
		found: headers.iter().map(str::to_string).collect(),
	})
}

/// Coerces one stored row through the fixed column schema.
pub fn coerce_record(record: &StringRecord) -> Result<MoodEntry, RowError> {
	let [timestamp, employee_id, text_input, detected_emotion, emotion_score, suggestion_given] = fields(record)?;

	let timestamp = NaiveDateTime::parse_from_str(timestamp.trim(), TIMESTAMP_FORMAT).map_err(|_| RowError::InvalidTimestamp(timestamp.to_string()))?;

	let employee_id = employee_id.trim();
	if employee_id.is_empty() {
		return Err(RowError::EmptyEmployeeId);
	}

	let detected_emotion = detected_emotion
		.parse::<Emotion>()
		.map_err(|_| RowError::UnknownEmotion(detected_emotion.to_string()))?;

	Ok(MoodEntry {
		timestamp,
		employee_id: employee_id.to_string(),
		text_input: text_input.to_string(),
		detected_emotion,
		emotion_score: Score::parse(emotion_score),
		suggestion_given: suggestion_given.to_string(),
	})
}

pub fn to_record(entry: &MoodEntry) -> StringRecord {
	StringRecord::from(vec![
		entry.timestamp.format(TIMESTAMP_FORMAT).to_string(),
		entry.employee_id.clone(),
		entry.text_input.clone(),
		entry.detected_emotion.as_str().to_string(),
		entry.emotion_score.to_string(),
		entry.suggestion_given.clone(),
	])
}

fn fields(record: &StringRecord) -> Result<[&str; 6], RowError> {
	let count = record.len();
	if count != COLUMNS.len() {
		return Err(RowError::FieldCount {
			expected: COLUMNS.len(),
			found: count,
		});
	}
	Ok([&record[0], &record[1], &record[2], &record[3], &record[4], &record[5]])
}

#[cfg(test)]
mod tests {
	use super::*;
	use chrono::NaiveDate;

	fn record(fields: &[&str]) -> StringRecord {
		StringRecord::from(fields.to_vec())
	}

	#[test]
	fn test_header_matches_columns() {
		assert!(check_header(&record(&COLUMNS)).is_ok());
	}

	#[test]
	fn test_header_mismatch_is_rejected() {
		let err = check_header(&record(&["timestamp", "employee", "text_input"])).unwrap_err();
		match err {
			StoreError::SchemaMismatch { found } => assert_eq!(found, vec!["timestamp", "employee", "text_input"]),
			other => panic!("Expected SchemaMismatch, got {other:?}"),
		}
	}

	#[test]
	fn test_coerce_valid_row() {
		let entry = coerce_record(&record(&["2024-03-01 09:30:00", " 007 ", "fine, thanks", "positive", "0.44", "Keep going"])).unwrap();

		assert_eq!(entry.timestamp, NaiveDate::from_ymd_opt(2024, 3, 1).unwrap().and_hms_opt(9, 30, 0).unwrap());
		assert_eq!(entry.employee_id, "007");
		assert_eq!(entry.text_input, "fine, thanks");
		assert_eq!(entry.detected_emotion, Emotion::Positive);
		assert_eq!(entry.emotion_score, Score::Value(0.44));
	}

	#[test]
	fn test_coerce_keeps_unparsed_score() {
		let entry = coerce_record(&record(&["2024-03-01 09:30:00", "A1", "meh", "neutral", "not-a-number", "Plan"])).unwrap();
		assert_eq!(entry.emotion_score, Score::Unparsed("not-a-number".to_string()));
	}

	#[test]
	fn test_coerce_rejects_bad_rows() {
		assert_eq!(
			coerce_record(&record(&["yesterday", "A1", "x", "neutral", "0.0", "s"])),
			Err(RowError::InvalidTimestamp("yesterday".to_string()))
		);
		assert_eq!(
			coerce_record(&record(&["2024-03-01 09:30:00", "A1", "x", "ecstatic", "0.0", "s"])),
			Err(RowError::UnknownEmotion("ecstatic".to_string()))
		);
		assert_eq!(
			coerce_record(&record(&["2024-03-01 09:30:00", "  ", "x", "neutral", "0.0", "s"])),
			Err(RowError::EmptyEmployeeId)
		);
		assert_eq!(coerce_record(&record(&["2024-03-01 09:30:00", "A1"])), Err(RowError::FieldCount { expected: 6, found: 2 }));
	}

	#[test]
	fn test_to_record_uses_fixed_formats() {
		let entry = MoodEntry {
			timestamp: NaiveDate::from_ymd_opt(2024, 12, 31).unwrap().and_hms_opt(23, 5, 9).unwrap(),
			employee_id: "A1".to_string(),
			text_input: "hello".to_string(),
			detected_emotion: Emotion::Negative,
			emotion_score: Score::Value(-0.25),
			suggestion_given: "Take a break".to_string(),
		};
		let record = to_record(&entry);

		assert_eq!(record.iter().collect::<Vec<_>>(), vec!["2024-12-31 23:05:09", "A1", "hello", "negative", "-0.25", "Take a break"]);
	}
}
