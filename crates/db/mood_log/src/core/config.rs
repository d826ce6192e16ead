use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_FILE_NAME: &str = "employee_mood_logs.csv";

/// Where the mood table lives. Passed to [`crate::MoodLog::initialize`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
	pub data_dir: PathBuf,
	pub file_name: String,
}

impl StoreConfig {
	pub fn new(data_dir: impl Into<PathBuf>, file_name: impl Into<String>) -> Self {
		Self {
			data_dir: data_dir.into(),
			file_name: file_name.into(),
		}
	}

	pub fn table_path(&self) -> PathBuf {
		self.data_dir.join(&self.file_name)
	}
}

impl Default for StoreConfig {
	fn default() -> Self {
		Self::new(DEFAULT_DATA_DIR, DEFAULT_FILE_NAME)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::path::Path;

	#[test]
	fn test_default_config() {
		let config = StoreConfig::default();
		assert_eq!(config.data_dir, PathBuf::from("data"));
		assert_eq!(config.file_name, "employee_mood_logs.csv");
		assert_eq!(config.table_path(), Path::new("data").join("employee_mood_logs.csv"));
	}
}
