//! Property-based tests for mta-indicators.
//!
//! These tests verify invariants that must hold for all inputs.

use proptest::prelude::*;

use mta_core::ohlcv::{Bar, OhlcvSeries};
use mta_core::traits::Indicator;

use mta_indicators::prelude::*;

// ============================================================================
// Proptest Strategies
// ============================================================================

/// Generate a valid close price (positive, finite).
fn valid_price() -> impl Strategy<Value = f64> {
    (0.01f64..10000.0).prop_filter("must be finite", |x| x.is_finite())
}

/// Generate a valid volume (non-negative, finite).
fn valid_volume() -> impl Strategy<Value = f64> {
    (0.0f64..1_000_000.0).prop_filter("must be finite", |x| x.is_finite())
}

/// Generate a valid bar with plausible OHLCV values.
fn valid_bar() -> impl Strategy<Value = Bar<f64>> {
    (valid_price(), valid_volume()).prop_map(|(close, volume)| {
        let range = close * 0.1;
        Bar::new(close, close + range / 2.0, close - range / 2.0, close, volume)
    })
}

/// Generate a series of valid bars with ascending timestamps.
fn valid_ohlcv_series(min_len: usize, max_len: usize) -> impl Strategy<Value = OhlcvSeries<f64>> {
    prop::collection::vec(valid_bar(), min_len..=max_len).prop_map(|bars| {
        bars.into_iter()
            .enumerate()
            .map(|(i, bar)| bar.timestamp(i as i64 * 60_000))
            .collect::<OhlcvSeries<f64>>()
    })
}

/// Generate a constant price series.
fn constant_price_series(len: usize) -> impl Strategy<Value = OhlcvSeries<f64>> {
    (valid_price(), valid_volume()).prop_map(move |(price, volume)| {
        (0..len)
            .map(|_| Bar::new(price, price, price, price, volume))
            .collect::<OhlcvSeries<f64>>()
    })
}

/// Generate a monotonically increasing price series.
fn increasing_price_series(len: usize) -> impl Strategy<Value = OhlcvSeries<f64>> {
    (valid_price(), valid_volume()).prop_map(move |(start, volume)| {
        (0..len)
            .map(|i| {
                let price = start + i as f64;
                Bar::new(price, price, price, price, volume)
            })
            .collect::<OhlcvSeries<f64>>()
    })
}

/// Generate a monotonically decreasing price series.
fn decreasing_price_series(len: usize) -> impl Strategy<Value = OhlcvSeries<f64>> {
    (valid_price(), valid_volume())
        .prop_filter("start must be high enough", |(start, _)| *start > 100.0)
        .prop_map(move |(start, volume)| {
            (0..len)
                .map(|i| {
                    let price = start - i as f64;
                    Bar::new(price, price, price, price, volume)
                })
                .collect::<OhlcvSeries<f64>>()
        })
}

fn close_at_zero(ohlcv: &OhlcvSeries<f64>) -> f64 {
    ohlcv.close()[0]
}

// ============================================================================
// SMA Property Tests
// ============================================================================

proptest! {
    /// SMA of constant series should equal the constant.
    #[test]
    fn sma_constant_equals_input(
        ohlcv in constant_price_series(30),
        window in 1usize..=20,
    ) {
        let sma = Sma::<f64>::new(SmaConfig::new(window)).unwrap();
        let result = sma.calculate(&ohlcv).unwrap();
        let price = close_at_zero(&ohlcv);

        for i in (window - 1)..30 {
            let diff = (result[i] - price).abs();
            prop_assert!(diff <= 1e-9 * price, "SMA at {} is {} vs {}", i, result[i], price);
        }
    }

    /// A series shorter than the window has no SMA values at all.
    #[test]
    fn sma_short_series_unavailable(
        ohlcv in valid_ohlcv_series(1, 19),
        extra in 1usize..10,
    ) {
        let window = ohlcv.len() + extra;
        let result = simple_moving_average(ohlcv.close().as_slice(), window);
        prop_assert_eq!(result.len(), ohlcv.len());
        prop_assert_eq!(result.available_count(), 0);
    }

    /// Exactly the first window-1 positions are unavailable.
    #[test]
    fn sma_gating(
        ohlcv in valid_ohlcv_series(1, 60),
        window in 1usize..=30,
    ) {
        let result = simple_moving_average(ohlcv.close().as_slice(), window);
        for i in 0..ohlcv.len() {
            prop_assert_eq!(result.value(i).is_some(), i + 1 >= window);
        }
    }
}

// ============================================================================
// RSI Property Tests
// ============================================================================

proptest! {
    /// RSI should always be between 0 and 100.
    #[test]
    fn rsi_bounded(
        ohlcv in valid_ohlcv_series(2, 80),
        window in 1usize..=20,
    ) {
        let result = rsi(ohlcv.close().as_slice(), window);
        for value in result.to_options().into_iter().flatten() {
            prop_assert!((0.0..=100.0).contains(&value), "RSI out of range: {}", value);
        }
    }

    /// RSI becomes available once `window` differences exist.
    #[test]
    fn rsi_gating(
        ohlcv in valid_ohlcv_series(1, 40),
        window in 1usize..=20,
    ) {
        let result = rsi(ohlcv.close().as_slice(), window);
        prop_assert_eq!(result.len(), ohlcv.len());
        for i in 0..ohlcv.len() {
            prop_assert_eq!(result.value(i).is_some(), i >= window);
        }
    }

    /// RSI of a strictly rising series saturates at 100.
    #[test]
    fn rsi_all_gains_is_100(ohlcv in increasing_price_series(30)) {
        let indicator = Rsi::<f64>::new(RsiConfig::new(14)).unwrap();
        let result = indicator.calculate(&ohlcv).unwrap();
        for i in 14..30 {
            prop_assert_eq!(result[i], 100.0);
        }
    }

    /// RSI of a strictly falling series is 0.
    #[test]
    fn rsi_all_losses_is_0(ohlcv in decreasing_price_series(30)) {
        let result = rsi(ohlcv.close().as_slice(), 14);
        for i in 14..30 {
            prop_assert_eq!(result[i], 0.0);
        }
    }
}

// ============================================================================
// Bollinger Bands Property Tests
// ============================================================================

proptest! {
    /// Bands are ordered: lower <= middle <= upper.
    #[test]
    fn bollinger_ordered(
        ohlcv in valid_ohlcv_series(20, 80),
        window in 2usize..=20,
        k in 0.5f64..4.0,
    ) {
        let bands = bollinger_bands(ohlcv.close().as_slice(), window, k);
        for i in (window - 1)..ohlcv.len() {
            prop_assert!(bands.lower[i] <= bands.middle[i]);
            prop_assert!(bands.middle[i] <= bands.upper[i]);
        }
    }

    /// Middle band equals the SMA and the bands are symmetric around it.
    #[test]
    fn bollinger_symmetric(ohlcv in valid_ohlcv_series(20, 80)) {
        let closes = ohlcv.close().as_slice();
        let bands = bollinger_bands(closes, 20, 2.0);
        let sma = simple_moving_average(closes, 20);
        let std = rolling_std(closes, 20);

        prop_assert_eq!(bands.middle.as_slice().len(), sma.len());
        for i in 19..closes.len() {
            prop_assert_eq!(bands.middle[i], sma[i]);
            let up = bands.upper[i] - bands.middle[i];
            let down = bands.middle[i] - bands.lower[i];
            let scale = bands.middle[i].abs().max(1.0);
            prop_assert!((up - down).abs() <= 1e-9 * scale);
            prop_assert!((bands.upper[i] - bands.lower[i] - 4.0 * std[i]).abs() <= 1e-9 * scale);
        }
    }

    /// Constant prices collapse the bands onto the middle.
    #[test]
    fn bollinger_constant_zero_width(ohlcv in constant_price_series(25)) {
        let bands = bollinger_bands(ohlcv.close().as_slice(), 20, 2.0);
        let price = close_at_zero(&ohlcv);
        for i in 19..25 {
            prop_assert!((bands.upper[i] - bands.lower[i]).abs() <= 1e-9 * price);
        }
    }
}

// ============================================================================
// MACD Property Tests
// ============================================================================

proptest! {
    /// Histogram is MACD minus signal at every index.
    #[test]
    fn macd_histogram_identity(ohlcv in valid_ohlcv_series(1, 80)) {
        let out = macd(ohlcv.close().as_slice(), 12, 26, 9);
        prop_assert_eq!(out.len(), ohlcv.len());
        for i in 0..ohlcv.len() {
            prop_assert_eq!(out.histogram[i], out.macd[i] - out.signal[i]);
        }
    }

    /// MACD is defined from the first bar on.
    #[test]
    fn macd_defined_everywhere(ohlcv in valid_ohlcv_series(1, 40)) {
        let out = macd(ohlcv.close().as_slice(), 12, 26, 9);
        prop_assert_eq!(out.macd.available_count(), ohlcv.len());
        prop_assert_eq!(out.signal.available_count(), ohlcv.len());
        prop_assert_eq!(out.macd[0], 0.0);
    }

    /// Constant prices give a flat zero MACD.
    #[test]
    fn macd_constant_is_zero(ohlcv in constant_price_series(40)) {
        let out = macd(ohlcv.close().as_slice(), 12, 26, 9);
        let price = close_at_zero(&ohlcv);
        for i in 0..40 {
            prop_assert!(out.macd[i].abs() <= 1e-9 * price);
        }
    }
}

// ============================================================================
// Enrichment Property Tests
// ============================================================================

proptest! {
    /// Every derived column is aligned with the input, and the input is not
    /// modified.
    #[test]
    fn enrich_aligned_and_pure(ohlcv in valid_ohlcv_series(0, 80)) {
        let before = ohlcv.clone();
        let enriched = enrich_series(&ohlcv);

        prop_assert_eq!(&ohlcv, &before);
        prop_assert_eq!(enriched.len(), ohlcv.len());
        prop_assert_eq!(enriched.bars(), &ohlcv);

        let df = enriched.to_dataframe().unwrap();
        for (name, column) in df.iter() {
            prop_assert_eq!(column.len(), ohlcv.len(), "column {} misaligned", name);
        }
    }

    /// Enrichment is deterministic.
    #[test]
    fn enrich_deterministic(ohlcv in valid_ohlcv_series(0, 60)) {
        let a = enrich_series(&ohlcv).to_dataframe().unwrap();
        let b = enrich_series(&ohlcv).to_dataframe().unwrap();
        for ((name_a, col_a), (name_b, col_b)) in a.iter().zip(b.iter()) {
            prop_assert_eq!(name_a, name_b);
            prop_assert_eq!(col_a.to_options(), col_b.to_options());
        }
    }

    /// Validated enrichment accepts generated series with ascending timestamps.
    #[test]
    fn enrich_validated_accepts_valid_bars(ohlcv in valid_ohlcv_series(1, 40)) {
        let bars: Vec<Bar<f64>> = ohlcv.iter().collect();
        prop_assert!(enrich_validated(&bars, &EnrichConfig::default()).is_ok());
    }
}
