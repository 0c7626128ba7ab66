//! # mta-snapshot
//!
//! Categorization of point-in-time quote snapshots into ordinal and nominal
//! buckets: price tier, change tier, volume tier, market-cap tier, volatility
//! tier and sector group.
//!
//! All bucket functions are total and pure. Thresholds and the sector keyword
//! table live in an immutable [`CategorizerConfig`] passed per call.
//! [`sector_summary`] aggregates categorized rows per sector group.
//!
//! ```rust
//! use mta_snapshot::{categorize_snapshot, ChangeTier, Snapshot};
//!
//! let quote = Snapshot::new("KO", 61.0, 64.5, 64.8, 60.9, 14_000_000.0)
//!     .with_average_volume(12_000_000.0)
//!     .with_sector("Consumer Staples");
//! let out = categorize_snapshot(&quote);
//!
//! assert_eq!(out.change_category, ChangeTier::LargeDecrease);
//! assert!(out.flags.is_loss);
//! assert_eq!(out.labels()["sector_category"], "Consumer");
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod categorize;
pub mod config;
pub mod sector;
pub mod snapshot;
pub mod tiers;

pub use categorize::{
    categorize_snapshot, categorize_snapshot_with, change_percent, change_tier, market_cap_tier,
    price_tier, sector_group, volatility_percent, volatility_tier, volume_ratio, volume_tier,
    CategorizedSnapshot, SnapshotFlags, SnapshotMetrics,
};
pub use config::{
    CategorizerConfig, ChangeThresholds, FlagThresholds, MarketCapThresholds, PriceThresholds,
    SectorKeywords, VolatilityThresholds, VolumeThresholds,
};
pub use sector::{sector_summary, SectorSummary};
pub use snapshot::Snapshot;
pub use tiers::{ChangeTier, MarketCapTier, PriceTier, SectorGroup, VolatilityTier, VolumeTier};
