//! Property-based tests for mta-snapshot.
//!
//! Categorization must be total: every input maps to exactly one bucket.

use proptest::prelude::*;

use mta_snapshot::*;

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Any `f64`, including NaN, infinities, zero and negatives.
fn any_number() -> impl Strategy<Value = f64> {
    prop::num::f64::ANY
}

/// An optional value drawn from the whole `f64` domain.
fn any_optional() -> impl Strategy<Value = Option<f64>> {
    prop::option::of(any_number())
}

fn any_sector() -> impl Strategy<Value = Option<String>> {
    prop::option::of(prop_oneof![
        Just(String::new()),
        Just("Unknown".to_string()),
        Just("Technology".to_string()),
        Just("Financial Services".to_string()),
        Just("Healthcare".to_string()),
        Just("Consumer Staples".to_string()),
        "[A-Za-z &]{0,24}",
    ])
}

fn any_snapshot() -> impl Strategy<Value = Snapshot> {
    (
        (any_number(), any_number(), any_number(), any_number(), any_number()),
        (any_optional(), any_optional(), any_optional(), any_optional()),
        any_sector(),
    )
        .prop_map(
            |((price, prev, high, low, volume), (avg, cap, wk_high, wk_low), sector)| Snapshot {
                symbol: "TEST".to_string(),
                name: None,
                price,
                previous_close: prev,
                day_high: high,
                day_low: low,
                volume,
                average_volume: avg,
                market_cap: cap,
                fifty_two_week_high: wk_high,
                fifty_two_week_low: wk_low,
                sector,
            },
        )
}

// ============================================================================
// Totality
// ============================================================================

proptest! {
    /// Any snapshot categorizes, with the six labels in fixed order.
    #[test]
    fn categorize_is_total(snapshot in any_snapshot()) {
        let out = categorize_snapshot(&snapshot);
        let labels = out.labels();
        let keys: Vec<&str> = labels.keys().copied().collect();
        prop_assert_eq!(
            keys,
            vec![
                "price_category",
                "change_category",
                "volume_category",
                "market_cap_category",
                "volatility_category",
                "sector_category",
            ]
        );
        prop_assert!(labels.values().all(|label| !label.is_empty()));
        prop_assert_eq!(&out.snapshot.symbol, &snapshot.symbol);
    }

    /// Gain and loss are never both set.
    #[test]
    fn gain_and_loss_exclusive(snapshot in any_snapshot()) {
        let flags = categorize_snapshot(&snapshot).flags;
        prop_assert!(!(flags.is_gain && flags.is_loss));
    }

    /// Without a usable average volume the volume tier is unknown.
    #[test]
    fn volume_unknown_without_average(volume in any_number(), avg in -1e12f64..=0.0) {
        let config = CategorizerConfig::default();
        prop_assert_eq!(volume_tier(volume, Some(avg), &config), VolumeTier::Unknown);
        prop_assert_eq!(volume_tier(volume, None, &config), VolumeTier::Unknown);
    }

    /// A non-positive price gives zero volatility and the lowest tier.
    #[test]
    fn non_positive_price_has_zero_volatility(
        price in -1e6f64..=0.0,
        high in any_number(),
        low in any_number(),
    ) {
        let snapshot = Snapshot::new("P", price, 1.0, high, low, 1.0);
        let out = categorize_snapshot(&snapshot);
        prop_assert_eq!(out.metrics.volatility_percent, 0.0);
        prop_assert_eq!(out.volatility_category, VolatilityTier::VeryLow);
    }
}

// ============================================================================
// Monotonicity
// ============================================================================

proptest! {
    /// Higher prices never land in a lower tier.
    #[test]
    fn price_tier_monotonic(a in -1e6f64..1e6, b in -1e6f64..1e6) {
        let config = CategorizerConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(price_tier(lo, &config) <= price_tier(hi, &config));
    }

    /// Larger changes never land in a lower tier.
    #[test]
    fn change_tier_monotonic(a in -100f64..100.0, b in -100f64..100.0) {
        let config = CategorizerConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(change_tier(lo, &config) <= change_tier(hi, &config));
    }

    /// Larger market caps never land in a lower tier.
    #[test]
    fn market_cap_tier_monotonic(a in 1.0f64..1e13, b in 1.0f64..1e13) {
        let config = CategorizerConfig::default();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(market_cap_tier(Some(lo), &config) <= market_cap_tier(Some(hi), &config));
    }

    /// Sector matching ignores ASCII case.
    #[test]
    fn sector_case_insensitive(sector in "[A-Za-z ]{1,24}") {
        let config = CategorizerConfig::default();
        prop_assert_eq!(
            sector_group(Some(&sector.to_ascii_uppercase()), &config),
            sector_group(Some(&sector.to_ascii_lowercase()), &config)
        );
    }
}
