//! Race signature normalization
//!
//! Two race-detector dumps describing the same race differ in memory
//! addresses, goroutine/thread numbers and timestamps. Stripping those yields
//! a signature that keeps the stack structure (functions, files, lines) and is
//! used as the deduplication key.

use regex::Regex;
use std::sync::LazyLock;

static DEFAULT_RULES: LazyLock<StripRules> = LazyLock::new(StripRules::default);

/// Ordered list of regex substitutions applied to a raw dump.
#[derive(Debug, Clone)]
pub struct StripRules {
    rules: Vec<(Regex, String)>,
}

impl StripRules {
    /// Creates an empty rule set; applying it returns the input unchanged.
    pub fn empty() -> Self {
        StripRules { rules: Vec::new() }
    }

    /// Appends a rule replacing every match of `pattern` with `replacement`.
    ///
    /// The replacement may reference capture groups (`${1}`).
    pub fn with_rule(
        mut self,
        pattern: &str,
        replacement: impl Into<String>,
    ) -> Result<Self, regex::Error> {
        self.rules.push((Regex::new(pattern)?, replacement.into()));
        Ok(self)
    }

    /// Number of rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Applies every rule in order.
    pub fn apply(&self, raw: &str) -> String {
        let mut signature = raw.to_string();
        for (pattern, replacement) in &self.rules {
            signature = pattern
                .replace_all(&signature, replacement.as_str())
                .into_owned();
        }
        signature
    }
}

impl Default for StripRules {
    fn default() -> Self {
        let rules = [
            // ISO-8601 / RFC-3339 timestamps
            (
                r"\d{4}-\d{2}-\d{2}[T ]\d{2}:\d{2}:\d{2}(?:\.\d+)?(?:Z|[+-]\d{2}:?\d{2})?",
                "<time>",
            ),
            // Wall-clock times
            (r"\b\d{2}:\d{2}:\d{2}(?:\.\d+)?\b", "<time>"),
            // Addresses and PC offsets
            (r"0x[0-9a-fA-F]+", "0x?"),
            // Goroutine and thread numbers
            (r"(?i)\b(goroutine|thread)\s+\d+", "${1} ?"),
            (r"\bT\d+\b", "T?"),
            (r"(?m)[ \t]+$", ""),
        ];

        StripRules {
            rules: rules
                .iter()
                .map(|(pattern, replacement)| {
                    let regex = Regex::new(pattern).expect("built-in strip rule compiles");
                    (regex, replacement.to_string())
                })
                .collect(),
        }
    }
}

/// Normalizes a raw race dump with the default rules.
///
/// # Examples
///
/// ```
/// use teststat::normalize::normalize;
///
/// let a = "Write at 0x00c0000a4010 by goroutine 8:\n  main.f()\n      /src/x.go:10 +0x3c";
/// let b = "Write at 0x00c0000b0020 by goroutine 12:\n  main.f()\n      /src/x.go:10 +0x3c";
/// assert_eq!(normalize(a), normalize(b));
/// ```
pub fn normalize(raw: &str) -> String {
    DEFAULT_RULES.apply(raw)
}

/// The rules used by [`normalize`].
pub fn default_rules() -> &'static StripRules {
    &DEFAULT_RULES
}
