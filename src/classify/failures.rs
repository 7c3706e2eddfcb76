//! Failure digest

use crate::state::TestKey;
use std::collections::BTreeMap;

/// Joins each failing test's captured output lines.
///
/// Lines carry their own terminators, so they are concatenated without a
/// separator. The result iterates in key order.
pub fn classify_failures(failures: &BTreeMap<TestKey, Vec<String>>) -> BTreeMap<TestKey, String> {
    failures
        .iter()
        .map(|(key, lines)| (key.clone(), lines.concat()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_joined_in_key_order() {
        let mut failures = BTreeMap::new();
        failures.insert(
            TestKey::new("pkg/b", "TestB"),
            vec!["b1\n".to_string(), "b2\n".to_string()],
        );
        failures.insert(TestKey::new("pkg/a", "TestZ"), vec!["z\n".to_string()]);
        failures.insert(TestKey::new("pkg/a", "TestNoOutput"), vec![]);

        let digest = classify_failures(&failures);
        let entries: Vec<_> = digest
            .iter()
            .map(|(key, output)| (key.test.as_str(), output.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![("TestNoOutput", ""), ("TestZ", "z\n"), ("TestB", "b1\nb2\n")]
        );
    }

    #[test]
    fn test_empty() {
        assert!(classify_failures(&BTreeMap::new()).is_empty());
    }
}
