//! Category labels.
//!
//! Each enum's [`as_str`](PriceTier::as_str) is the label written to
//! dashboards and exports.

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            /// Every variant in ascending order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label text.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

labelled_enum! {
    /// Price level bucket.
    PriceTier {
        /// Below the medium threshold.
        Low => "Low",
        /// Medium price.
        Medium => "Medium",
        /// High price.
        High => "High",
        /// At or above the very-high threshold.
        VeryHigh => "VeryHigh",
        /// Price was NaN or infinite.
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Day-over-day percent change bucket.
    ChangeTier {
        /// Falling by at least the large threshold.
        LargeDecrease => "LargeDecrease",
        /// Falling.
        Decrease => "Decrease",
        /// Roughly unchanged.
        Stable => "Stable",
        /// Rising.
        Increase => "Increase",
        /// Rising by at least the large threshold.
        LargeIncrease => "LargeIncrease",
        /// Change could not be computed.
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Volume relative to average volume.
    VolumeTier {
        /// Well below average.
        Low => "Low",
        /// Around average.
        Normal => "Normal",
        /// Above average.
        High => "High",
        /// Far above average.
        VeryHigh => "VeryHigh",
        /// Average volume missing, zero or negative.
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Market capitalization class.
    MarketCapTier {
        /// Small cap.
        Small => "Small",
        /// Mid cap.
        Mid => "Mid",
        /// Large cap.
        Large => "Large",
        /// Mega cap.
        Mega => "Mega",
        /// Market cap missing or not positive.
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Intraday range as a percent of price.
    VolatilityTier {
        /// Very quiet session.
        VeryLow => "VeryLow",
        /// Low.
        Low => "Low",
        /// Medium.
        Medium => "Medium",
        /// High.
        High => "High",
        /// Very high.
        VeryHigh => "VeryHigh",
        /// Range could not be computed.
        Unknown => "Unknown",
    }
}

labelled_enum! {
    /// Coarse sector grouping.
    SectorGroup {
        /// Technology, software, hardware, semiconductors.
        Technology => "Technology",
        /// Financial services, banks, insurance.
        Financial => "Financial",
        /// Healthcare, biotechnology, pharmaceuticals.
        Healthcare => "Healthcare",
        /// Consumer discretionary, staples, retail.
        Consumer => "Consumer",
        /// A sector that matched no keyword.
        Other => "Other",
        /// No sector reported.
        Unknown => "Unknown",
    }
}
