//! Test outcome data structures

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of a test for counting purposes: its package and name.
///
/// Keys order by package first, then by test name.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TestKey {
    pub package: String,
    pub test: String,
}

impl TestKey {
    /// Creates a key from a package and test name.
    pub fn new(package: impl Into<String>, test: impl Into<String>) -> Self {
        TestKey {
            package: package.into(),
            test: test.into(),
        }
    }
}

impl fmt::Display for TestKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            write!(f, "{}", self.test)
        } else {
            write!(f, "{} {}", self.package, self.test)
        }
    }
}

/// What happened to a test (or package) in one execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    /// Test passed.
    Pass,
    /// Test failed.
    Fail,
    /// Test was skipped.
    Skip,
}

impl Action {
    /// Label used in metrics and rendered tables.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Pass => "pass",
            Action::Fail => "fail",
            Action::Skip => "skip",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One finished execution reported by the ingestion stage.
///
/// An outcome without a test name is a package-level summary carrying the
/// package's own elapsed time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestOutcome {
    pub action: Action,
    pub package: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test: Option<String>,
    /// Elapsed seconds.
    #[serde(default)]
    pub elapsed: f64,
    /// Captured output lines, in order, including their line terminators.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub output: Vec<String>,
    /// Raw race-detector dumps observed during this execution.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub races: Vec<String>,
}

impl TestOutcome {
    fn new(action: Action, package: impl Into<String>, test: Option<String>) -> Self {
        TestOutcome {
            action,
            package: package.into(),
            test,
            elapsed: 0.0,
            output: Vec::new(),
            races: Vec::new(),
        }
    }

    /// Create a passing test outcome
    pub fn pass(package: impl Into<String>, test: impl Into<String>) -> Self {
        Self::new(Action::Pass, package, Some(test.into()))
    }

    /// Create a failing test outcome
    pub fn fail(package: impl Into<String>, test: impl Into<String>) -> Self {
        Self::new(Action::Fail, package, Some(test.into()))
    }

    /// Create a skipped test outcome
    pub fn skip(package: impl Into<String>, test: impl Into<String>) -> Self {
        Self::new(Action::Skip, package, Some(test.into()))
    }

    /// Create a package-level summary outcome
    pub fn package(action: Action, package: impl Into<String>) -> Self {
        Self::new(action, package, None)
    }

    /// Set the elapsed seconds
    pub fn with_elapsed(mut self, elapsed: f64) -> Self {
        self.elapsed = elapsed;
        self
    }

    /// Append an output line
    pub fn with_output(mut self, line: impl Into<String>) -> Self {
        self.output.push(line.into());
        self
    }

    /// Attach a raw race-detector dump
    pub fn with_race(mut self, dump: impl Into<String>) -> Self {
        self.races.push(dump.into());
        self
    }

    /// Key identifying the test, or `None` for package-level outcomes.
    pub fn key(&self) -> Option<TestKey> {
        self.test
            .as_deref()
            .filter(|test| !test.is_empty())
            .map(|test| TestKey::new(self.package.clone(), test))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_ordering() {
        let a = TestKey::new("pkg/a", "TestZ");
        let b = TestKey::new("pkg/b", "TestA");
        assert!(a < b);
        assert!(TestKey::new("pkg/a", "TestA") < a);
    }

    #[test]
    fn test_key_display() {
        assert_eq!(TestKey::new("pkg", "TestFoo").to_string(), "pkg TestFoo");
        assert_eq!(TestKey::new("", "TestFoo").to_string(), "TestFoo");
    }

    #[test]
    fn test_action_display() {
        assert_eq!(Action::Pass.to_string(), "pass");
        assert_eq!(Action::Fail.to_string(), "fail");
        assert_eq!(Action::Skip.to_string(), "skip");
    }

    #[test]
    fn test_outcome_builders() {
        let outcome = TestOutcome::fail("pkg", "TestFoo")
            .with_elapsed(1.5)
            .with_output("boom\n")
            .with_race("WARNING: DATA RACE");

        assert_eq!(outcome.action, Action::Fail);
        assert_eq!(outcome.elapsed, 1.5);
        assert_eq!(outcome.output, vec!["boom\n"]);
        assert_eq!(outcome.races.len(), 1);
        assert_eq!(outcome.key(), Some(TestKey::new("pkg", "TestFoo")));
    }

    #[test]
    fn test_package_outcome_has_no_key() {
        let outcome = TestOutcome::package(Action::Pass, "pkg").with_elapsed(3.0);
        assert_eq!(outcome.key(), None);

        let mut blank = TestOutcome::pass("pkg", "");
        assert_eq!(blank.key(), None);
        blank.test = None;
        assert_eq!(blank.key(), None);
    }

    #[test]
    fn test_outcome_deserialize() {
        let json = r#"{"action":"pass","package":"pkg","test":"TestFoo","elapsed":0.25}"#;
        let outcome: TestOutcome = serde_json::from_str(json).unwrap();
        assert_eq!(outcome, TestOutcome::pass("pkg", "TestFoo").with_elapsed(0.25));
    }
}
