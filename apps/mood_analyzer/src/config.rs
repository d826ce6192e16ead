use clap::Parser;
use mood_log::config::{DEFAULT_DATA_DIR, DEFAULT_FILE_NAME};
use mood_log::StoreConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about = "Log employee moods, get a suggestion, review the history", long_about = None)]
pub struct Config {
	#[arg(long, env = "MOOD_DATA_DIR", default_value = DEFAULT_DATA_DIR, help = "Directory holding the mood log")]
	pub data_dir: PathBuf,

	#[arg(long, env = "MOOD_LOG_FILE", default_value = DEFAULT_FILE_NAME, help = "File name of the mood log inside the data directory")]
	pub log_file_name: String,

	#[arg(long, env = "RUST_LOG", default_value = "warn", help = "Tracing filter directives")]
	pub rust_log: String,

	#[arg(long, env = "LOG_JSON", help = "Emit logs as JSON")]
	pub log_json: bool,
}

impl Config {
	pub fn store_config(&self) -> StoreConfig {
		StoreConfig::new(self.data_dir.clone(), self.log_file_name.clone())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_config_parser() {
		let args = vec![
			"mood_analyzer",
			"--data-dir",
			"/tmp/moods",
			"--log-file-name",
			"team.csv",
			"--rust-log",
			"debug",
			"--log-json",
		];

		let config = Config::try_parse_from(args).unwrap();
		assert_eq!(config.data_dir, PathBuf::from("/tmp/moods"));
		assert_eq!(config.log_file_name, "team.csv");
		assert_eq!(config.rust_log, "debug");
		assert!(config.log_json);
		assert_eq!(config.store_config().table_path(), PathBuf::from("/tmp/moods/team.csv"));
	}

	#[test]
	fn test_unknown_flag_is_rejected() {
		assert!(Config::try_parse_from(["mood_analyzer", "--nope"]).is_err());
	}
}
