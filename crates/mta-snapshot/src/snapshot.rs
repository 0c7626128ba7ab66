//! Point-in-time quote records.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One quote for one instrument.
///
/// Fields the data source may omit are `Option`. Numeric fields are plain
/// `f64` so that categorization stays total over whatever a collector hands
/// in, including zero, negative and non-finite values.
///
/// # Example
///
/// ```rust
/// use mta_snapshot::Snapshot;
///
/// let quote = Snapshot::new("AAPL", 189.5, 187.0, 190.2, 186.9, 52_000_000.0)
///     .with_average_volume(48_000_000.0)
///     .with_market_cap(2.9e12)
///     .with_sector("Technology");
///
/// assert_eq!(quote.sector.as_deref(), Some("Technology"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Snapshot {
    /// Ticker symbol.
    pub symbol: String,
    /// Company or instrument name.
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    /// Current price.
    pub price: f64,
    /// Previous session's close.
    pub previous_close: f64,
    /// Session high.
    pub day_high: f64,
    /// Session low.
    pub day_low: f64,
    /// Session volume.
    pub volume: f64,
    /// Average daily volume.
    #[cfg_attr(feature = "serde", serde(default))]
    pub average_volume: Option<f64>,
    /// Market capitalization in the quote currency.
    #[cfg_attr(feature = "serde", serde(default))]
    pub market_cap: Option<f64>,
    /// 52-week high.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fifty_two_week_high: Option<f64>,
    /// 52-week low.
    #[cfg_attr(feature = "serde", serde(default))]
    pub fifty_two_week_low: Option<f64>,
    /// Sector name as reported by the data source.
    #[cfg_attr(feature = "serde", serde(default))]
    pub sector: Option<String>,
}

impl Snapshot {
    /// Create a snapshot with the required quote fields.
    #[must_use]
    pub fn new(
        symbol: impl Into<String>,
        price: f64,
        previous_close: f64,
        day_high: f64,
        day_low: f64,
        volume: f64,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            name: None,
            price,
            previous_close,
            day_high,
            day_low,
            volume,
            average_volume: None,
            market_cap: None,
            fifty_two_week_high: None,
            fifty_two_week_low: None,
            sector: None,
        }
    }

    /// Set the instrument name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the average volume.
    #[must_use]
    pub fn with_average_volume(mut self, average_volume: f64) -> Self {
        self.average_volume = Some(average_volume);
        self
    }

    /// Set the market capitalization.
    #[must_use]
    pub fn with_market_cap(mut self, market_cap: f64) -> Self {
        self.market_cap = Some(market_cap);
        self
    }

    /// Set the 52-week range.
    #[must_use]
    pub fn with_fifty_two_week_range(mut self, high: f64, low: f64) -> Self {
        self.fifty_two_week_high = Some(high);
        self.fifty_two_week_low = Some(low);
        self
    }

    /// Set the sector name.
    #[must_use]
    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = Some(sector.into());
        self
    }
}
