//! Package timing ranking

use crate::state::PackageTiming;

/// Sorts packages by accumulated elapsed time, slowest first, stable on ties.
pub fn classify_packages(packages: &[PackageTiming]) -> Vec<PackageTiming> {
    let mut sorted = packages.to_vec();
    sorted.sort_by(|a, b| b.elapsed.total_cmp(&a.elapsed));
    sorted
}
