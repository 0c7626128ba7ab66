//! Prelude for mta-indicators.

pub use crate::enrich::{
    enrich_series, enrich_series_with, enrich_validated, EnrichConfig, EnrichedRow,
    EnrichedSeries,
};

pub use crate::momentum::{rsi, Rsi, RsiConfig};

pub use crate::trend::{
    exponential_moving_average, macd, simple_moving_average, Ema, EmaConfig, Macd, MacdConfig,
    MacdSeries, Sma, SmaConfig,
};

pub use crate::volatility::{
    bollinger_bands, rolling_std, BollingerBands, BollingerConfig, BollingerSeries,
};
