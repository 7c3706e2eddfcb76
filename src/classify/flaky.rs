//! Flaky test detection

use crate::state::TestKey;
use std::collections::BTreeMap;

/// A test that both passed and failed within the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlakyTest {
    pub test: String,
    pub package: String,
    pub passed: usize,
    pub failed: usize,
}

impl FlakyTest {
    /// The counting key this entry was derived from.
    pub fn key(&self) -> TestKey {
        TestKey::new(self.package.as_str(), self.test.as_str())
    }
}

/// Returns every test with at least one pass and one failure, ordered by
/// test name descending (then package descending).
///
/// A test that only failed is a failure, not flaky.
pub fn classify_flaky(
    passed: &BTreeMap<TestKey, usize>,
    failed: &BTreeMap<TestKey, usize>,
) -> Vec<FlakyTest> {
    let mut flaky: Vec<FlakyTest> = failed
        .iter()
        .filter(|&(_, &fail_count)| fail_count > 0)
        .filter_map(|(key, &fail_count)| {
            let pass_count = passed.get(key).copied().unwrap_or(0);
            (pass_count > 0).then(|| FlakyTest {
                test: key.test.clone(),
                package: key.package.clone(),
                passed: pass_count,
                failed: fail_count,
            })
        })
        .collect();

    flaky.sort_by(|a, b| {
        b.test
            .cmp(&a.test)
            .then_with(|| b.package.cmp(&a.package))
    });

    flaky
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(entries: &[(&str, &str, usize)]) -> BTreeMap<TestKey, usize> {
        entries
            .iter()
            .map(|(package, test, count)| (TestKey::new(*package, *test), *count))
            .collect()
    }

    #[test]
    fn test_fail_then_pass_is_flaky() {
        let passed = counts(&[("pkg", "Foo", 1)]);
        let failed = counts(&[("pkg", "Foo", 1)]);

        let flaky = classify_flaky(&passed, &failed);
        assert_eq!(
            flaky,
            vec![FlakyTest {
                test: "Foo".to_string(),
                package: "pkg".to_string(),
                passed: 1,
                failed: 1,
            }]
        );
    }

    #[test]
    fn test_only_failures_are_not_flaky() {
        let passed = counts(&[("pkg", "Other", 3)]);
        let failed = counts(&[("pkg", "Broken", 2)]);

        assert!(classify_flaky(&passed, &failed).is_empty());
    }

    #[test]
    fn test_only_passes_are_not_flaky() {
        let passed = counts(&[("pkg", "Fine", 3)]);
        assert!(classify_flaky(&passed, &BTreeMap::new()).is_empty());
    }

    #[test]
    fn test_descending_name_order() {
        let passed = counts(&[
            ("pkg", "TestAlpha", 1),
            ("pkg", "TestGamma", 2),
            ("pkg", "TestBeta", 1),
            ("pkg", "TestDelta", 1),
        ]);
        let failed = counts(&[
            ("pkg", "TestAlpha", 1),
            ("pkg", "TestGamma", 1),
            ("pkg", "TestBeta", 4),
            ("pkg", "TestEpsilon", 1),
        ]);

        let names: Vec<_> = classify_flaky(&passed, &failed)
            .into_iter()
            .map(|f| f.test)
            .collect();
        assert_eq!(names, vec!["TestGamma", "TestBeta", "TestAlpha"]);
    }

    #[test]
    fn test_same_name_in_two_packages() {
        let passed = counts(&[("pkg/a", "TestFoo", 1), ("pkg/b", "TestFoo", 1)]);
        let failed = counts(&[("pkg/a", "TestFoo", 1), ("pkg/b", "TestFoo", 2)]);

        let flaky = classify_flaky(&passed, &failed);
        assert_eq!(flaky.len(), 2);
        assert_eq!(flaky[0].package, "pkg/b");
        assert_eq!(flaky[0].failed, 2);
        assert_eq!(flaky[1].package, "pkg/a");
        assert_eq!(flaky[1].key(), TestKey::new("pkg/a", "TestFoo"));
    }
}
