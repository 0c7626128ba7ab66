//! Categorizer thresholds and the sector keyword table.
//!
//! Every bucket is a half-open interval with an inclusive lower bound, so each
//! threshold below is the first value that falls into the named bucket.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::tiers::SectorGroup;

/// Price tier boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PriceThresholds {
    /// Lowest `Medium` price.
    pub medium: f64,
    /// Lowest `High` price.
    pub high: f64,
    /// Lowest `VeryHigh` price.
    pub very_high: f64,
}

impl Default for PriceThresholds {
    fn default() -> Self {
        Self {
            medium: 10.0,
            high: 50.0,
            very_high: 100.0,
        }
    }
}

/// Percent change tier boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChangeThresholds {
    /// Lowest `Decrease` change; anything below is `LargeDecrease`.
    pub decrease: f64,
    /// Lowest `Stable` change.
    pub stable: f64,
    /// Lowest `Increase` change.
    pub increase: f64,
    /// Lowest `LargeIncrease` change.
    pub large_increase: f64,
}

impl Default for ChangeThresholds {
    fn default() -> Self {
        Self {
            decrease: -5.0,
            stable: -1.0,
            increase: 1.0,
            large_increase: 5.0,
        }
    }
}

/// Volume ratio tier boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolumeThresholds {
    /// Lowest `Normal` ratio.
    pub normal: f64,
    /// Lowest `High` ratio.
    pub high: f64,
    /// Lowest `VeryHigh` ratio.
    pub very_high: f64,
}

impl Default for VolumeThresholds {
    fn default() -> Self {
        Self {
            normal: 0.5,
            high: 1.5,
            very_high: 3.0,
        }
    }
}

/// Market cap tier boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MarketCapThresholds {
    /// Lowest `Mid` value.
    pub mid: f64,
    /// Lowest `Large` value.
    pub large: f64,
    /// Lowest `Mega` value.
    pub mega: f64,
}

impl Default for MarketCapThresholds {
    fn default() -> Self {
        Self {
            mid: 2e9,
            large: 1e10,
            mega: 2e11,
        }
    }
}

/// Volatility percent tier boundaries.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct VolatilityThresholds {
    /// Lowest `Low` volatility.
    pub low: f64,
    /// Lowest `Medium` volatility.
    pub medium: f64,
    /// Lowest `High` volatility.
    pub high: f64,
    /// Lowest `VeryHigh` volatility.
    pub very_high: f64,
}

impl Default for VolatilityThresholds {
    fn default() -> Self {
        Self {
            low: 1.0,
            medium: 2.0,
            high: 3.0,
            very_high: 5.0,
        }
    }
}

/// Keywords per sector group.
///
/// The longest keyword found in a sector name picks its group; equal lengths
/// resolve in declaration order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SectorKeywords {
    /// Keywords mapping to [`SectorGroup::Technology`].
    pub technology: Vec<String>,
    /// Keywords mapping to [`SectorGroup::Financial`].
    pub financial: Vec<String>,
    /// Keywords mapping to [`SectorGroup::Healthcare`].
    pub healthcare: Vec<String>,
    /// Keywords mapping to [`SectorGroup::Consumer`].
    pub consumer: Vec<String>,
}

fn owned(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| (*w).to_string()).collect()
}

impl Default for SectorKeywords {
    fn default() -> Self {
        Self {
            technology: owned(&["Technology", "Software", "Hardware", "Semiconductors"]),
            financial: owned(&["Financial", "Financial Services", "Banks", "Insurance"]),
            healthcare: owned(&[
                "Healthcare",
                "Health",
                "Biotechnology",
                "Pharmaceuticals",
            ]),
            consumer: owned(&[
                "Consumer",
                "Consumer Discretionary",
                "Consumer Staples",
                "Retail",
            ]),
        }
    }
}

impl SectorKeywords {
    /// `(group, keywords)` pairs in match priority order.
    pub fn groups(&self) -> impl Iterator<Item = (SectorGroup, &[String])> {
        [
            (SectorGroup::Technology, self.technology.as_slice()),
            (SectorGroup::Financial, self.financial.as_slice()),
            (SectorGroup::Healthcare, self.healthcare.as_slice()),
            (SectorGroup::Consumer, self.consumer.as_slice()),
        ]
        .into_iter()
    }
}

/// Thresholds for the analytic flags.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlagThresholds {
    /// Volume above this multiple of average volume is high volume.
    pub high_volume_multiple: f64,
    /// Volatility percent above this is high volatility.
    pub high_volatility_percent: f64,
    /// Market cap above this is large cap.
    pub large_cap: f64,
}

impl Default for FlagThresholds {
    fn default() -> Self {
        Self {
            high_volume_multiple: 1.5,
            high_volatility_percent: 5.0,
            large_cap: 1e10,
        }
    }
}

/// Everything the categorizer needs, passed per call.
///
/// ```rust
/// use mta_snapshot::CategorizerConfig;
///
/// let config = CategorizerConfig::default();
/// assert_eq!(config.price.medium, 10.0);
/// assert_eq!(config.market_cap.mid, 2e9);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CategorizerConfig {
    /// Price tiers.
    pub price: PriceThresholds,
    /// Change tiers.
    pub change: ChangeThresholds,
    /// Volume ratio tiers.
    pub volume: VolumeThresholds,
    /// Market cap tiers.
    pub market_cap: MarketCapThresholds,
    /// Volatility tiers.
    pub volatility: VolatilityThresholds,
    /// Sector keyword table.
    pub sectors: SectorKeywords,
    /// Flag thresholds.
    pub flags: FlagThresholds,
}
