//! Race incident deduplication

use crate::normalize::{default_rules, StripRules};
use crate::state::RaceIncident;
use std::collections::{BTreeMap, HashSet};

/// All incidents sharing one stripped signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RaceGroup {
    /// First raw dump seen for the signature, verbatim.
    pub text: String,
    /// Tests that triggered the race, first-seen order, duplicates kept.
    pub tests: Vec<String>,
}

/// Deduplicated view of every race incident in a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RaceSummary {
    /// Number of distinct raw dumps.
    pub total: usize,
    /// Groups keyed by stripped signature, iterated in ascending order.
    pub groups: BTreeMap<String, RaceGroup>,
}

impl RaceSummary {
    /// Whether no race was recorded.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of unique signatures.
    pub fn unique(&self) -> usize {
        self.groups.len()
    }
}

/// Groups incidents by their signature under the default strip rules.
pub fn classify_races(incidents: &[RaceIncident]) -> RaceSummary {
    classify_races_with(incidents, default_rules())
}

/// Groups incidents by their signature under `rules`.
pub fn classify_races_with(incidents: &[RaceIncident], rules: &StripRules) -> RaceSummary {
    let mut distinct = HashSet::new();
    let mut groups: BTreeMap<String, RaceGroup> = BTreeMap::new();

    for incident in incidents {
        distinct.insert(incident.text.as_str());

        let signature = rules.apply(&incident.text);
        groups
            .entry(signature)
            .or_insert_with(|| RaceGroup {
                text: incident.text.clone(),
                tests: Vec::new(),
            })
            .tests
            .push(incident.test.clone());
    }

    RaceSummary {
        total: distinct.len(),
        groups,
    }
}
