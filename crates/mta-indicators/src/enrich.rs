//! Series enrichment.
//!
//! [`enrich_series`] attaches the moving averages, RSI, Bollinger Bands and
//! MACD to one instrument's bars. Every derived column is aligned
//! index-for-index with the input; positions without enough history are
//! unavailable and surface as `None` through [`EnrichedSeries::row`].

use mta_core::{
    dataframe::DataFrame,
    error::{IndicatorError, Result},
    num::TaFloat,
    ohlcv::{Bar, OhlcvSeries},
    series::Series,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::momentum::{rsi, RsiConfig};
use crate::trend::{macd, simple_moving_average, MacdConfig, MacdSeries, SmaConfig};
use crate::volatility::{bollinger_bands, BollingerConfig, BollingerSeries};

/// Parameters for [`enrich_series_with`].
///
/// The default reproduces the standard set: MA 5/20/50, RSI 14,
/// Bollinger 20 ± 2σ and MACD 12/26/9.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EnrichConfig {
    /// Windows of the simple moving averages, in output order.
    pub ma_windows: Vec<usize>,
    /// RSI parameters.
    pub rsi: RsiConfig,
    /// Bollinger Bands parameters.
    pub bollinger: BollingerConfig,
    /// MACD parameters.
    pub macd: MacdConfig,
}

impl Default for EnrichConfig {
    fn default() -> Self {
        Self {
            ma_windows: vec![5, 20, 50],
            rsi: RsiConfig::default(),
            bollinger: BollingerConfig::default(),
            macd: MacdConfig::default(),
        }
    }
}

impl EnrichConfig {
    /// Replace the moving-average windows.
    #[must_use]
    pub fn with_ma_windows(mut self, windows: Vec<usize>) -> Self {
        self.ma_windows = windows;
        self
    }

    /// Replace the RSI parameters.
    #[must_use]
    pub fn with_rsi(mut self, rsi: RsiConfig) -> Self {
        self.rsi = rsi;
        self
    }

    /// Replace the Bollinger Bands parameters.
    #[must_use]
    pub fn with_bollinger(mut self, bollinger: BollingerConfig) -> Self {
        self.bollinger = bollinger;
        self
    }

    /// Replace the MACD parameters.
    #[must_use]
    pub fn with_macd(mut self, macd: MacdConfig) -> Self {
        self.macd = macd;
        self
    }

    /// Check every indicator's parameters.
    ///
    /// # Errors
    ///
    /// Returns the first invalid window, multiplier or span pair. Duplicate
    /// moving-average windows are rejected as well.
    pub fn validate(&self) -> Result<()> {
        for (i, &window) in self.ma_windows.iter().enumerate() {
            SmaConfig::new(window).validate()?;
            if self.ma_windows[..i].contains(&window) {
                return Err(IndicatorError::InvalidParameter {
                    name: "ma_windows",
                    value: window.to_string(),
                    expected: "distinct moving-average windows",
                });
            }
        }
        self.rsi.validate()?;
        self.bollinger.validate()?;
        self.macd.validate()
    }
}

/// One instrument's bars plus every derived column.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct EnrichedSeries<T: TaFloat> {
    bars: OhlcvSeries<T>,
    moving_averages: Vec<(usize, Series<T>)>,
    rsi_window: usize,
    rsi: Series<T>,
    bollinger: BollingerSeries<T>,
    macd: MacdSeries<T>,
}

/// All fields of one enriched position, unavailable values as `None`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(bound = "T: TaFloat"))]
pub struct EnrichedRow<T: TaFloat> {
    /// The input bar at this position.
    pub bar: Bar<T>,
    /// `(window, value)` for each configured moving average.
    pub moving_averages: Vec<(usize, Option<T>)>,
    /// RSI value.
    pub rsi: Option<T>,
    /// Bollinger middle band.
    pub bb_middle: Option<T>,
    /// Bollinger upper band.
    pub bb_upper: Option<T>,
    /// Bollinger lower band.
    pub bb_lower: Option<T>,
    /// MACD line.
    pub macd: Option<T>,
    /// MACD signal line.
    pub macd_signal: Option<T>,
    /// MACD histogram.
    pub macd_histogram: Option<T>,
}

impl<T: TaFloat> EnrichedRow<T> {
    /// Moving average with the given window, if configured and available.
    #[must_use]
    pub fn ma(&self, window: usize) -> Option<T> {
        self.moving_averages
            .iter()
            .find(|(w, _)| *w == window)
            .and_then(|&(_, value)| value)
    }
}

impl<T: TaFloat> EnrichedSeries<T> {
    /// Number of positions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    /// Returns `true` for an enrichment of no bars.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    /// The input bars.
    #[must_use]
    pub fn bars(&self) -> &OhlcvSeries<T> {
        &self.bars
    }

    /// Moving average column for `window`, if it was configured.
    #[must_use]
    pub fn ma(&self, window: usize) -> Option<&Series<T>> {
        self.moving_averages
            .iter()
            .find(|(w, _)| *w == window)
            .map(|(_, series)| series)
    }

    /// All moving averages in configured order.
    #[must_use]
    pub fn moving_averages(&self) -> &[(usize, Series<T>)] {
        &self.moving_averages
    }

    /// RSI column.
    #[must_use]
    pub fn rsi(&self) -> &Series<T> {
        &self.rsi
    }

    /// Bollinger Bands columns.
    #[must_use]
    pub fn bollinger(&self) -> &BollingerSeries<T> {
        &self.bollinger
    }

    /// MACD columns.
    #[must_use]
    pub fn macd(&self) -> &MacdSeries<T> {
        &self.macd
    }

    /// Every field at `index`, `None` when out of range.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<EnrichedRow<T>> {
        let bar = self.bars.get(index)?;
        Some(EnrichedRow {
            bar,
            moving_averages: self
                .moving_averages
                .iter()
                .map(|(window, series)| (*window, series.value(index)))
                .collect(),
            rsi: self.rsi.value(index),
            bb_middle: self.bollinger.middle.value(index),
            bb_upper: self.bollinger.upper.value(index),
            bb_lower: self.bollinger.lower.value(index),
            macd: self.macd.macd.value(index),
            macd_signal: self.macd.signal.value(index),
            macd_histogram: self.macd.histogram.value(index),
        })
    }

    /// The most recent row.
    #[must_use]
    pub fn latest(&self) -> Option<EnrichedRow<T>> {
        self.len().checked_sub(1).and_then(|i| self.row(i))
    }

    /// Iterate all rows in order.
    pub fn rows(&self) -> impl Iterator<Item = EnrichedRow<T>> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Flatten into a table: the price columns, then `MA_<w>`, `RSI_<w>`,
    /// `BB_Middle`, `BB_Upper`, `BB_Lower`, `MACD`, `MACD_Signal`,
    /// `MACD_Histogram`.
    ///
    /// # Errors
    ///
    /// Only fails if the columns were not aligned, which the constructors
    /// rule out.
    pub fn to_dataframe(&self) -> Result<DataFrame<T>> {
        let mut df = DataFrame::from_ohlcv(&self.bars);
        for (window, series) in &self.moving_averages {
            df.add_column(format!("MA_{window}"), series.clone())?;
        }
        df.add_column(format!("RSI_{}", self.rsi_window), self.rsi.clone())?;
        df.add_column("BB_Middle", self.bollinger.middle.clone())?;
        df.add_column("BB_Upper", self.bollinger.upper.clone())?;
        df.add_column("BB_Lower", self.bollinger.lower.clone())?;
        df.add_column("MACD", self.macd.macd.clone())?;
        df.add_column("MACD_Signal", self.macd.signal.clone())?;
        df.add_column("MACD_Histogram", self.macd.histogram.clone())?;
        Ok(df)
    }
}

fn compute<T: TaFloat>(bars: &OhlcvSeries<T>, config: &EnrichConfig) -> EnrichedSeries<T> {
    let closes = bars.close().as_slice();

    let moving_averages = config
        .ma_windows
        .iter()
        .map(|&window| (window, simple_moving_average(closes, window)))
        .collect();

    EnrichedSeries {
        bars: bars.clone(),
        moving_averages,
        rsi_window: config.rsi.window,
        rsi: rsi(closes, config.rsi.window),
        bollinger: bollinger_bands(closes, config.bollinger.window, config.bollinger.num_std),
        macd: macd(
            closes,
            config.macd.fast,
            config.macd.slow,
            config.macd.signal,
        ),
    }
}

/// Enrich `bars` with the default [`EnrichConfig`].
///
/// Assumes validated input (see [`mta_core::validate_bars`]). Empty input
/// yields an empty result.
///
/// # Example
///
/// ```rust
/// use mta_core::{Bar, OhlcvSeries};
/// use mta_indicators::enrich_series;
///
/// let bars: OhlcvSeries<f64> = (1..=6)
///     .map(|i| {
///         let c = f64::from(i);
///         Bar::new(c, c, c, c, 100.0)
///     })
///     .collect();
/// let enriched = enrich_series(&bars);
///
/// assert_eq!(enriched.len(), 6);
/// assert_eq!(enriched.row(4).and_then(|r| r.ma(5)), Some(3.0));
/// assert_eq!(enriched.row(3).and_then(|r| r.ma(5)), None);
/// ```
#[must_use]
pub fn enrich_series<T: TaFloat>(bars: &OhlcvSeries<T>) -> EnrichedSeries<T> {
    compute(bars, &EnrichConfig::default())
}

/// Enrich `bars` with a caller-supplied configuration.
///
/// # Errors
///
/// Returns a configuration error from [`EnrichConfig::validate`]; short input
/// is never an error.
pub fn enrich_series_with<T: TaFloat>(
    bars: &OhlcvSeries<T>,
    config: &EnrichConfig,
) -> Result<EnrichedSeries<T>> {
    config.validate()?;
    Ok(compute(bars, config))
}

/// Validate `bars`, then enrich them.
///
/// # Errors
///
/// Returns [`IndicatorError::MalformedInput`] for the first bad bar, or a
/// configuration error.
pub fn enrich_validated<T: TaFloat>(
    bars: &[Bar<T>],
    config: &EnrichConfig,
) -> Result<EnrichedSeries<T>> {
    mta_core::validate_bars(bars)?;
    enrich_series_with(&OhlcvSeries::from_bars(bars), config)
}
