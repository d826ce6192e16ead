use mood_analysis::{PolarityScorer, SentimentClassifier, SuggestionProvider};
use mood_log::{MoodLog, MoodSummary, NewMoodEntry, TIMESTAMP_FORMAT};
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

const PREVIEW_CHARS: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
	LogMood,
	ViewLogs,
	Summary,
	Exit,
}

impl MenuChoice {
	pub fn parse(input: &str) -> Option<Self> {
		match input.trim() {
			"1" => Some(Self::LogMood),
			"2" => Some(Self::ViewLogs),
			"3" => Some(Self::Summary),
			"4" => Some(Self::Exit),
			_ => None,
		}
	}
}

/// Line-oriented prompt over any reader/writer pair.
pub struct Console<R, W> {
	input: R,
	output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
	pub const fn new(input: R, output: W) -> Self {
		Self { input, output }
	}

	/// Prints `message`, then reads one trimmed line. `None` at end of input.
	pub fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
		write!(self.output, "{message}")?;
		self.output.flush()?;

		let mut line = String::new();
		if self.input.read_line(&mut line)? == 0 {
			return Ok(None);
		}
		Ok(Some(line.trim().to_string()))
	}

	pub fn say(&mut self, line: impl Display) -> io::Result<()> {
		writeln!(self.output, "{line}")
	}

	pub fn into_output(self) -> W {
		self.output
	}
}

/// The interactive menu: classify, suggest and log entries, list them, and
/// summarize one employee's history.
pub struct Session<S> {
	classifier: SentimentClassifier<S>,
	suggester: SuggestionProvider,
	store: MoodLog,
}

impl<S: PolarityScorer> Session<S> {
	pub const fn new(classifier: SentimentClassifier<S>, suggester: SuggestionProvider, store: MoodLog) -> Self {
		Self { classifier, suggester, store }
	}

	/// Runs until the user picks Exit or input ends. Only console I/O errors
	/// escape; store errors are reported to the user and the loop goes on.
	pub fn run<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
		loop {
			Self::print_menu(console)?;
			let Some(choice) = console.prompt("Enter choice (1-4): ")? else {
				info!("input closed, ending session");
				return Ok(());
			};

			match MenuChoice::parse(&choice) {
				Some(MenuChoice::LogMood) => self.log_mood(console)?,
				Some(MenuChoice::ViewLogs) => self.view_logs(console)?,
				Some(MenuChoice::Summary) => self.summary(console)?,
				Some(MenuChoice::Exit) => {
					console.say("Exiting. Goodbye!")?;
					return Ok(());
				}
				None => console.say("Invalid choice. Please try again.")?,
			}
		}
	}

	fn print_menu<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
		console.say("\n===== Mood Analyzer Menu =====")?;
		console.say("1. Log Mood")?;
		console.say("2. View Logs")?;
		console.say("3. Employee Mood Summary")?;
		console.say("4. Exit")
	}

	fn log_mood<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
		console.say("\n--- Log New Mood Entry ---")?;
		let Some(employee_id) = console.prompt("Enter your Employee ID: ")? else {
			return Ok(());
		};
		if employee_id.is_empty() {
			return console.say("Employee ID cannot be empty.");
		}

		let Some(text_input) = console.prompt(&format!("Hi {employee_id}, how are you feeling or what's on your mind?\n> "))? else {
			return Ok(());
		};
		if text_input.is_empty() {
			return console.say("No input provided.");
		}

		let (emotion, score) = self.classifier.classify(&text_input);
		let suggestion = self.suggester.suggest(emotion);
		console.say(format_args!(
			"\nAnalysis: Mood: {} (Score: {score:.2}), Suggestion: {suggestion}",
			emotion.capitalized()
		))?;

		let entry = NewMoodEntry {
			employee_id,
			text_input,
			detected_emotion: emotion,
			emotion_score: score,
			suggestion_given: suggestion.to_string(),
		};
		match self.store.append(entry) {
			Ok(_) => console.say("Entry logged."),
			Err(e) => {
				error!(error = %e, path = %self.store.path().display(), "failed to log mood entry");
				console.say(format_args!("Error logging entry: {e}"))
			}
		}
	}

	fn view_logs<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
		console.say("\n--- View Mood Logs ---")?;
		let filter = console.prompt("Enter Employee ID to filter by (or press Enter for all logs): ")?.unwrap_or_default();

		let entries = match self.store.query(Some(filter.as_str()).filter(|id| !id.is_empty())) {
			Ok(entries) => entries,
			Err(e) => {
				error!(error = %e, path = %self.store.path().display(), "failed to read mood log");
				return console.say(format_args!("Error retrieving logs: {e}"));
			}
		};

		if entries.is_empty() {
			return console.say("No logs found matching your criteria.");
		}

		console.say("\n--- Log Entries ---")?;
		for entry in &entries {
			console.say(format_args!(
				"[{}] ID: {}, Mood: {} ({:.2}), Input: '{}...'",
				entry.timestamp.format(TIMESTAMP_FORMAT),
				entry.employee_id,
				entry.detected_emotion,
				entry.emotion_score,
				preview(&entry.text_input, PREVIEW_CHARS)
			))?;
		}
		Ok(())
	}

	fn summary<R: BufRead, W: Write>(&self, console: &mut Console<R, W>) -> io::Result<()> {
		console.say("\n--- Employee Mood Summary ---")?;
		let Some(employee_id) = console.prompt("Enter Employee ID for mood summary: ")? else {
			return Ok(());
		};
		if employee_id.is_empty() {
			return console.say("Employee ID cannot be empty.");
		}

		match self.store.summarize(&employee_id) {
			Ok(summary) => print_summary(console, &employee_id, &summary),
			Err(e) => {
				error!(error = %e, path = %self.store.path().display(), "failed to summarize mood log");
				console.say(format_args!("Error retrieving logs: {e}"))
			}
		}
	}
}

fn print_summary<R: BufRead, W: Write>(console: &mut Console<R, W>, employee_id: &str, summary: &MoodSummary) -> io::Result<()> {
	let (Some(average), Some(overall)) = (summary.average_score, summary.overall()) else {
		return console.say(format_args!("No sufficient mood data found for {employee_id}."));
	};

	console.say(format_args!(
		"\nSummary for {employee_id}: {} entries, Avg. Score: {average:.2} (Overall: {})",
		summary.count,
		overall.capitalized()
	))?;
	console.say(format_args!(
		"Breakdown: {} positive, {} neutral, {} negative, {} unknown (range {:.2} to {:.2})",
		summary.positive,
		summary.neutral,
		summary.negative,
		summary.unknown,
		summary.min_score.unwrap_or(average),
		summary.max_score.unwrap_or(average)
	))
}

/// The first `max_chars` characters of `text`, cut on a char boundary.
pub fn preview(text: &str, max_chars: usize) -> &str {
	text.char_indices().nth(max_chars).map_or(text, |(index, _)| &text[..index])
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_menu_choice_parse() {
		assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::LogMood));
		assert_eq!(MenuChoice::parse(" 2 "), Some(MenuChoice::ViewLogs));
		assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Summary));
		assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
		assert_eq!(MenuChoice::parse("5"), None);
		assert_eq!(MenuChoice::parse("exit"), None);
		assert_eq!(MenuChoice::parse(""), None);
	}

	#[test]
	fn test_preview_truncates_by_char() {
		assert_eq!(preview("short", 30), "short");
		assert_eq!(preview("abcdefghij", 4), "abcd");
		assert_eq!(preview("héllo wörld", 7), "héllo w");
		assert_eq!(preview("", 30), "");
	}

	#[test]
	fn test_prompt_reads_trimmed_lines_until_eof() {
		let mut console = Console::new("  A1  \n".as_bytes(), Vec::new());

		assert_eq!(console.prompt("id: ").unwrap(), Some("A1".to_string()));
		assert_eq!(console.prompt("again: ").unwrap(), None);
		assert_eq!(String::from_utf8(console.into_output()).unwrap(), "id: again: ");
	}
}
