//! Snapshot categorization.
//!
//! Every function here is total: any `f64`, including zero, negative, NaN and
//! infinite values, maps to exactly one bucket.

use indexmap::IndexMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::config::{CategorizerConfig, SectorKeywords};
use crate::snapshot::Snapshot;
use crate::tiers::{ChangeTier, MarketCapTier, PriceTier, SectorGroup, VolatilityTier, VolumeTier};

/// Bucket a price.
#[must_use]
pub fn price_tier(price: f64, config: &CategorizerConfig) -> PriceTier {
    let t = &config.price;
    if !price.is_finite() {
        PriceTier::Unknown
    } else if price < t.medium {
        PriceTier::Low
    } else if price < t.high {
        PriceTier::Medium
    } else if price < t.very_high {
        PriceTier::High
    } else {
        PriceTier::VeryHigh
    }
}

/// Bucket a percent change.
#[must_use]
pub fn change_tier(change_percent: f64, config: &CategorizerConfig) -> ChangeTier {
    let t = &config.change;
    if !change_percent.is_finite() {
        ChangeTier::Unknown
    } else if change_percent < t.decrease {
        ChangeTier::LargeDecrease
    } else if change_percent < t.stable {
        ChangeTier::Decrease
    } else if change_percent < t.increase {
        ChangeTier::Stable
    } else if change_percent < t.large_increase {
        ChangeTier::Increase
    } else {
        ChangeTier::LargeIncrease
    }
}

/// Bucket volume against average volume.
///
/// A missing, zero, negative or non-finite average is `Unknown`.
#[must_use]
pub fn volume_tier(volume: f64, average_volume: Option<f64>, config: &CategorizerConfig) -> VolumeTier {
    let Some(ratio) = volume_ratio(volume, average_volume) else {
        return VolumeTier::Unknown;
    };
    let t = &config.volume;
    if !ratio.is_finite() {
        VolumeTier::Unknown
    } else if ratio < t.normal {
        VolumeTier::Low
    } else if ratio < t.high {
        VolumeTier::Normal
    } else if ratio < t.very_high {
        VolumeTier::High
    } else {
        VolumeTier::VeryHigh
    }
}

/// Bucket a market capitalization. Missing or non-positive is `Unknown`.
#[must_use]
pub fn market_cap_tier(market_cap: Option<f64>, config: &CategorizerConfig) -> MarketCapTier {
    let t = &config.market_cap;
    match market_cap {
        Some(cap) if cap.is_finite() && cap > 0.0 => {
            if cap < t.mid {
                MarketCapTier::Small
            } else if cap < t.large {
                MarketCapTier::Mid
            } else if cap < t.mega {
                MarketCapTier::Large
            } else {
                MarketCapTier::Mega
            }
        }
        _ => MarketCapTier::Unknown,
    }
}

/// Bucket an intraday range percent.
#[must_use]
pub fn volatility_tier(volatility_percent: f64, config: &CategorizerConfig) -> VolatilityTier {
    let t = &config.volatility;
    if !volatility_percent.is_finite() {
        VolatilityTier::Unknown
    } else if volatility_percent < t.low {
        VolatilityTier::VeryLow
    } else if volatility_percent < t.medium {
        VolatilityTier::Low
    } else if volatility_percent < t.high {
        VolatilityTier::Medium
    } else if volatility_percent < t.very_high {
        VolatilityTier::High
    } else {
        VolatilityTier::VeryHigh
    }
}

/// Group a sector name by keyword.
///
/// Matching is ASCII case-insensitive substring search, first group wins.
/// An empty name or the literal `Unknown` is `Unknown`; a name matching no
/// keyword is `Other`.
#[must_use]
pub fn sector_group(sector: Option<&str>, config: &CategorizerConfig) -> SectorGroup {
    let sector = match sector.map(str::trim) {
        Some(s) if !s.is_empty() && !s.eq_ignore_ascii_case("unknown") => s,
        _ => return SectorGroup::Unknown,
    };
    match_keywords(sector, &config.sectors).unwrap_or(SectorGroup::Other)
}

fn match_keywords(sector: &str, keywords: &SectorKeywords) -> Option<SectorGroup> {
    let haystack = sector.to_ascii_lowercase();
    let mut best: Option<(SectorGroup, usize)> = None;
    for (group, words) in keywords.groups() {
        for word in words.iter().filter(|w| !w.is_empty()) {
            // Longest keyword wins; ties go to the earlier group.
            if haystack.contains(&word.to_ascii_lowercase())
                && best.map_or(true, |(_, len)| word.len() > len)
            {
                best = Some((group, word.len()));
            }
        }
    }
    best.map(|(group, _)| group)
}

/// `(price - previous_close) / previous_close * 100`, 0 when the previous
/// close is not positive.
#[must_use]
pub fn change_percent(price: f64, previous_close: f64) -> f64 {
    if previous_close > 0.0 {
        (price - previous_close) / previous_close * 100.0
    } else {
        0.0
    }
}

/// `(high - low) / price * 100`, 0 when the price is not positive.
#[must_use]
pub fn volatility_percent(day_high: f64, day_low: f64, price: f64) -> f64 {
    if price > 0.0 {
        (day_high - day_low) / price * 100.0
    } else {
        0.0
    }
}

/// Volume over average volume, `None` when the average is unusable.
#[must_use]
pub fn volume_ratio(volume: f64, average_volume: Option<f64>) -> Option<f64> {
    average_volume
        .filter(|avg| avg.is_finite() && *avg > 0.0)
        .map(|avg| volume / avg)
}

/// Numbers derived from a snapshot.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotMetrics {
    /// `price - previous_close`.
    pub change: f64,
    /// See [`change_percent`].
    pub change_percent: f64,
    /// See [`volume_ratio`].
    pub volume_ratio: Option<f64>,
    /// See [`volatility_percent`].
    pub volatility_percent: f64,
    /// `day_high - day_low`.
    pub day_range_spread: f64,
    /// 52-week high minus low, when both are known.
    pub fifty_two_week_spread: Option<f64>,
    /// Market cap in billions, when positive.
    pub market_cap_billions: Option<f64>,
}

/// Boolean markers for dashboard filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SnapshotFlags {
    /// Price above previous close.
    pub is_gain: bool,
    /// Price below previous close.
    pub is_loss: bool,
    /// Volume above the configured multiple of average volume.
    pub is_high_volume: bool,
    /// Volatility percent above the configured level.
    pub is_high_volatility: bool,
    /// Market cap above the configured level.
    pub is_large_cap: bool,
}

/// A snapshot with its derived metrics, flags and category labels.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CategorizedSnapshot {
    /// The input quote.
    pub snapshot: Snapshot,
    /// Derived numbers.
    pub metrics: SnapshotMetrics,
    /// Analytic flags.
    pub flags: SnapshotFlags,
    /// Price bucket.
    pub price_category: PriceTier,
    /// Change bucket.
    pub change_category: ChangeTier,
    /// Volume bucket.
    pub volume_category: VolumeTier,
    /// Market cap bucket.
    pub market_cap_category: MarketCapTier,
    /// Volatility bucket.
    pub volatility_category: VolatilityTier,
    /// Sector group.
    pub sector_category: SectorGroup,
}

impl CategorizedSnapshot {
    /// Category name to label, in a fixed order.
    ///
    /// ```rust
    /// use mta_snapshot::{categorize_snapshot, Snapshot};
    ///
    /// let labels = categorize_snapshot(&Snapshot::new("X", 10.0, 10.0, 10.0, 10.0, 0.0)).labels();
    /// assert_eq!(labels["price_category"], "Medium");
    /// assert_eq!(labels.keys().next(), Some(&"price_category"));
    /// ```
    #[must_use]
    pub fn labels(&self) -> IndexMap<&'static str, &'static str> {
        IndexMap::from([
            ("price_category", self.price_category.as_str()),
            ("change_category", self.change_category.as_str()),
            ("volume_category", self.volume_category.as_str()),
            ("market_cap_category", self.market_cap_category.as_str()),
            ("volatility_category", self.volatility_category.as_str()),
            ("sector_category", self.sector_category.as_str()),
        ])
    }
}

/// Categorize with the default thresholds.
#[must_use]
pub fn categorize_snapshot(snapshot: &Snapshot) -> CategorizedSnapshot {
    categorize_snapshot_with(snapshot, &CategorizerConfig::default())
}

/// Categorize with caller-supplied thresholds.
#[must_use]
pub fn categorize_snapshot_with(snapshot: &Snapshot, config: &CategorizerConfig) -> CategorizedSnapshot {
    let change = snapshot.price - snapshot.previous_close;
    let change_pct = change_percent(snapshot.price, snapshot.previous_close);
    let ratio = volume_ratio(snapshot.volume, snapshot.average_volume);
    let volatility = volatility_percent(snapshot.day_high, snapshot.day_low, snapshot.price);
    let market_cap = snapshot.market_cap.filter(|cap| cap.is_finite() && *cap > 0.0);

    let metrics = SnapshotMetrics {
        change,
        change_percent: change_pct,
        volume_ratio: ratio,
        volatility_percent: volatility,
        day_range_spread: snapshot.day_high - snapshot.day_low,
        fifty_two_week_spread: snapshot
            .fifty_two_week_high
            .zip(snapshot.fifty_two_week_low)
            .map(|(high, low)| high - low),
        market_cap_billions: market_cap.map(|cap| cap / 1e9),
    };

    let flags = SnapshotFlags {
        is_gain: change > 0.0,
        is_loss: change < 0.0,
        is_high_volume: ratio.is_some_and(|r| r > config.flags.high_volume_multiple),
        is_high_volatility: volatility > config.flags.high_volatility_percent,
        is_large_cap: market_cap.is_some_and(|cap| cap > config.flags.large_cap),
    };

    CategorizedSnapshot {
        snapshot: snapshot.clone(),
        metrics,
        flags,
        price_category: price_tier(snapshot.price, config),
        change_category: change_tier(change_pct, config),
        volume_category: volume_tier(snapshot.volume, snapshot.average_volume, config),
        market_cap_category: market_cap_tier(snapshot.market_cap, config),
        volatility_category: volatility_tier(volatility, config),
        sector_category: sector_group(snapshot.sector.as_deref(), config),
    }
}
