use super::error::StoreError;
use super::model::MoodEntry;
use super::schema::{self, COLUMNS};
use csv::{ReaderBuilder, StringRecord, WriterBuilder};
use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, warn};

/// `None` when the table file is absent.
pub fn table_len(path: &Path) -> Result<Option<u64>, StoreError> {
	match fs::metadata(path) {
		Ok(meta) => Ok(Some(meta.len())),
		Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
		Err(e) => Err(e.into()),
	}
}

/// Reads every data row verbatim. An absent or zero-length table is an
/// empty table. Rows with the wrong number of fields are returned as-is;
/// typed reads quarantine them.
pub fn read_records(path: &Path) -> Result<Vec<StringRecord>, StoreError> {
	if !matches!(table_len(path)?, Some(len) if len > 0) {
		return Ok(Vec::new());
	}

	let mut reader = ReaderBuilder::new().has_headers(true).flexible(true).from_path(path)?;
	schema::check_header(reader.headers()?)?;

	let records = reader.records().collect::<Result<Vec<_>, _>>()?;
	debug!(path = %path.display(), rows = records.len(), "read mood table");
	Ok(records)
}

/// Writes the header and `rows` to a temporary file next to `path`, then
/// renames it over `path`. The old table stays intact if anything fails.
/// The replacement keeps the permissions of the file it replaces.
pub fn replace_table<'a>(path: &Path, rows: impl IntoIterator<Item = &'a StringRecord>) -> Result<(), StoreError> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut tmp = NamedTempFile::new_in(dir)?;
	{
		let mut writer = WriterBuilder::new().flexible(true).from_writer(tmp.as_file_mut());
		writer.write_record(COLUMNS)?;
		for row in rows {
			writer.write_record(row)?;
		}
		writer.flush()?;
	}
	tmp.as_file().sync_all()?;
	if let Some(meta) = fs::metadata(path).ok().filter(fs::Metadata::is_file) {
		fs::set_permissions(tmp.path(), meta.permissions())?;
	}
	tmp.persist(path)?;
	Ok(())
}

pub fn create_table(path: &Path) -> Result<(), StoreError> {
	if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
		create_dir(parent)?;
	}
	if table_len(path)?.is_none() {
		// Placeholder picks up the process umask; the header rewrite keeps it.
		OpenOptions::new().write(true).create_new(true).open(path)?;
		replace_table(path, std::iter::empty())?;
		debug!(path = %path.display(), "created mood table");
	}
	Ok(())
}

fn create_dir(dir: &Path) -> io::Result<()> {
	if !dir.exists() {
		fs::create_dir_all(dir)?;
		debug!(dir = %dir.display(), "created data directory");
	}
	Ok(())
}

/// Typed rows in arrival order, optionally restricted to one employee.
/// Rows that fail schema coercion are skipped and logged.
///
/// The filter is trimmed first; a blank filter (`Some("")`, `Some("  ")`)
/// means no filter and returns every row.
pub fn fetch_entries(path: &Path, employee_id: Option<&str>) -> Result<Vec<MoodEntry>, StoreError> {
	let filter = employee_id.map(str::trim).filter(|id| !id.is_empty());
	let records = read_records(path)?;

	let mut entries = Vec::with_capacity(records.len());
	for record in &records {
		match schema::coerce_record(record) {
			Ok(entry) => {
				if filter.map_or(true, |id| entry.employee_id == id) {
					entries.push(entry);
				}
			}
			Err(e) => {
				let line = record.position().map(csv::Position::line);
				warn!(path = %path.display(), ?line, error = %e, "skipping malformed mood row");
			}
		}
	}
	Ok(entries)
}

#[cfg(test)]
mod tests {
	use super::*;
	use tempfile::TempDir;

	fn row(fields: &[&str]) -> StringRecord {
		StringRecord::from(fields.to_vec())
	}

	#[test]
	fn test_failed_replace_leaves_target_and_no_temp_file() {
		let dir = TempDir::new().unwrap();
		let target = dir.path().join("table.csv");
		fs::create_dir(&target).unwrap();
		fs::write(target.join("keep.txt"), "untouched").unwrap();

		let rows = [row(&["2024-05-06 10:00:00", "A1", "x", "neutral", "0.0", "s"])];
		assert!(matches!(replace_table(&target, &rows), Err(StoreError::Persist(_))));

		assert_eq!(fs::read_to_string(target.join("keep.txt")).unwrap(), "untouched");
		let leftovers: Vec<_> = fs::read_dir(dir.path()).unwrap().map(|e| e.unwrap().file_name()).collect();
		assert_eq!(leftovers, vec![std::ffi::OsString::from("table.csv")]);
	}

	#[test]
	fn test_ragged_rows_round_trip_verbatim() {
		let dir = TempDir::new().unwrap();
		let path = dir.path().join("table.csv");
		let rows = [row(&["2024-05-06 10:00:00", "A1", "x", "neutral", "0.0", "s", "extra"]), row(&["short"])];

		replace_table(&path, &rows).unwrap();

		let fields = |records: &[StringRecord]| records.iter().map(|r| r.iter().map(str::to_string).collect::<Vec<_>>()).collect::<Vec<_>>();
		assert_eq!(fields(read_records(&path).unwrap().as_slice()), fields(&rows[..]));
	}
}
