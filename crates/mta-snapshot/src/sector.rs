//! Per-sector aggregates over categorized snapshots.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::categorize::CategorizedSnapshot;
use crate::tiers::SectorGroup;

/// Aggregate of every snapshot in one sector group.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SectorSummary {
    /// Snapshots in the group.
    pub count: usize,
    /// Mean of the finite change percents; `None` when there are none.
    pub mean_change_percent: Option<f64>,
    /// Sum of the finite volumes.
    pub total_volume: f64,
}

/// Group categorized snapshots by [`SectorGroup`].
///
/// Groups appear in [`SectorGroup::ALL`] order and only when at least one
/// snapshot falls in them. Non-finite change percents and volumes are skipped.
///
/// ```rust
/// use mta_snapshot::{categorize_snapshot, sector_summary, SectorGroup, Snapshot};
///
/// let rows: Vec<_> = [
///     Snapshot::new("A", 102.0, 100.0, 102.0, 100.0, 10.0).with_sector("Technology"),
///     Snapshot::new("B", 96.0, 100.0, 100.0, 96.0, 30.0).with_sector("Software"),
/// ]
/// .iter()
/// .map(categorize_snapshot)
/// .collect();
///
/// let summary = sector_summary(&rows);
/// let tech = summary[&SectorGroup::Technology];
/// assert_eq!(tech.count, 2);
/// assert_eq!(tech.mean_change_percent, Some(-1.0));
/// assert_eq!(tech.total_volume, 40.0);
/// ```
#[must_use]
pub fn sector_summary(rows: &[CategorizedSnapshot]) -> IndexMap<SectorGroup, SectorSummary> {
    let mut summary: IndexMap<SectorGroup, SectorSummary> = IndexMap::new();
    for &group in SectorGroup::ALL {
        let members = rows.iter().filter(|row| row.sector_category == group);

        let mut entry = SectorSummary::default();
        let mut change_sum = 0.0;
        let mut change_count = 0usize;
        for row in members {
            entry.count += 1;
            let change = row.metrics.change_percent;
            if change.is_finite() {
                change_sum += change;
                change_count += 1;
            }
            if row.snapshot.volume.is_finite() {
                entry.total_volume += row.snapshot.volume;
            }
        }

        if entry.count > 0 {
            entry.mean_change_percent =
                (change_count > 0).then(|| change_sum / change_count as f64);
            summary.insert(group, entry);
        }
    }
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categorize::categorize_snapshot;
    use crate::snapshot::Snapshot;

    fn row(symbol: &str, price: f64, volume: f64, sector: Option<&str>) -> CategorizedSnapshot {
        let mut quote = Snapshot::new(symbol, price, 100.0, price, price, volume);
        quote.sector = sector.map(str::to_string);
        categorize_snapshot(&quote)
    }

    #[test]
    fn test_groups_in_fixed_order() {
        let rows = [
            row("XOM", 99.0, 5.0, Some("Energy")),
            row("JPM", 104.0, 20.0, Some("Banks")),
            row("AAPL", 101.0, 10.0, Some("Technology")),
            row("GS", 98.0, 30.0, Some("Financial Services")),
        ];
        let summary = sector_summary(&rows);

        let groups: Vec<_> = summary.keys().copied().collect();
        assert_eq!(
            groups,
            [SectorGroup::Technology, SectorGroup::Financial, SectorGroup::Other]
        );

        let financial = summary[&SectorGroup::Financial];
        assert_eq!(financial.count, 2);
        assert_eq!(financial.mean_change_percent, Some(1.0));
        assert_eq!(financial.total_volume, 50.0);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let rows = [
            row("A", f64::NAN, f64::INFINITY, None),
            row("B", 110.0, 7.0, Some("")),
        ];
        let unknown = sector_summary(&rows)[&SectorGroup::Unknown];
        assert_eq!(unknown.count, 2);
        assert_eq!(unknown.mean_change_percent, Some(10.0));
        assert_eq!(unknown.total_volume, 7.0);

        let only_nan = sector_summary(&rows[..1])[&SectorGroup::Unknown];
        assert_eq!(only_nan.mean_change_percent, None);
        assert_eq!(only_nan.total_volume, 0.0);
    }

    #[test]
    fn test_empty_input() {
        assert!(sector_summary(&[]).is_empty());
    }
}
