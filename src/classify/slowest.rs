//! Slow test ranking

use crate::state::SlowRecord;

/// Sorts every recorded execution by elapsed time, slowest first.
///
/// The sort is stable, so executions with equal elapsed time keep their
/// arrival order. The whole list is returned; display code applies the
/// row limit.
pub fn classify_slowest(records: &[SlowRecord]) -> Vec<SlowRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| b.elapsed.total_cmp(&a.elapsed));
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;

    fn record(test: &str, elapsed: f64) -> SlowRecord {
        SlowRecord {
            action: Action::Pass,
            package: "pkg".to_string(),
            test: test.to_string(),
            elapsed,
        }
    }

    #[test]
    fn test_sorted_descending() {
        let records = vec![record("a", 0.1), record("b", 5.0), record("c", 2.0)];

        let sorted = classify_slowest(&records);
        let elapsed: Vec<f64> = sorted.iter().map(|r| r.elapsed).collect();
        assert_eq!(elapsed, vec![5.0, 2.0, 0.1]);
    }

    #[test]
    fn test_ties_keep_arrival_order() {
        let records = vec![
            record("first", 1.0),
            record("fast", 0.5),
            record("second", 1.0),
            record("third", 1.0),
        ];

        let names: Vec<_> = classify_slowest(&records)
            .into_iter()
            .map(|r| r.test)
            .collect();
        assert_eq!(names, vec!["first", "second", "third", "fast"]);
    }

    #[test]
    fn test_empty() {
        assert!(classify_slowest(&[]).is_empty());
    }
}
