//! Reading test outcome records
//!
//! Records are [`TestOutcome`]s serialized as JSON, one per line. Blank lines
//! are ignored.

use crate::error::{Error, Result};
use crate::state::TestOutcome;
use std::fs;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

/// Parse outcome records from a string
pub fn parse_events(content: &str) -> Result<Vec<TestOutcome>> {
    read_events(content.as_bytes())
}

/// Parse outcome records from a reader
pub fn read_events(reader: impl Read) -> Result<Vec<TestOutcome>> {
    let reader = BufReader::new(reader);

    let mut outcomes = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let outcome = serde_json::from_str(trimmed)
            .map_err(|e| Error::Parse(format!("line {}: {}", index + 1, e)))?;
        outcomes.push(outcome);
    }

    Ok(outcomes)
}

/// Parse outcome records from a file
pub fn read_events_file(path: &Path) -> Result<Vec<TestOutcome>> {
    let file = fs::File::open(path)?;
    read_events(file)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use tempfile::TempDir;

    #[test]
    fn test_parse_events() {
        let content = r#"
{"action":"fail","package":"pkg","test":"TestFoo","elapsed":0.5,"output":["boom\n"]}

{"action":"pass","package":"pkg","elapsed":1.25}
"#;
        let outcomes = parse_events(content).unwrap();

        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].action, Action::Fail);
        assert_eq!(outcomes[0].test.as_deref(), Some("TestFoo"));
        assert_eq!(outcomes[0].output, vec!["boom\n"]);
        assert_eq!(outcomes[1].test, None);
        assert_eq!(outcomes[1].elapsed, 1.25);
    }

    #[test]
    fn test_parse_error_names_line() {
        let content = "{\"action\":\"pass\",\"package\":\"p\"}\n{\"action\":\"explode\",\"package\":\"p\"}\n";
        let err = parse_events(content).unwrap_err();

        assert!(matches!(err, Error::Parse(_)));
        assert!(err.to_string().contains("line 2"));
    }

    #[test]
    fn test_read_events_file() {
        let temp = TempDir::new().unwrap();
        let file_path = temp.path().join("events.jsonl");
        fs::write(
            &file_path,
            "{\"action\":\"skip\",\"package\":\"pkg\",\"test\":\"TestSkip\"}\n",
        )
        .unwrap();

        let outcomes = read_events_file(&file_path).unwrap();
        assert_eq!(outcomes.len(), 1);
        assert_eq!(outcomes[0].action, Action::Skip);
    }

    #[test]
    fn test_read_events_file_not_found() {
        let temp = TempDir::new().unwrap();
        let result = read_events_file(&temp.path().join("nonexistent.jsonl"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}
