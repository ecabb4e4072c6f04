//! UTCI assessment scale
//!
//! Maps an equivalent temperature onto the ten thermal stress categories of
//! the UTCI assessment scale.
//!
//! # References
//! - Błażejczyk, K. et al. (2013). "An introduction to the Universal Thermal
//!   Climate Index (UTCI)". Geographia Polonica 86(1), 5-10.

use crate::core_types::units::Kelvin;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category boundaries in °C.
///
/// Rust `Range` types are inclusive below and exclusive above `[a, b)`, so a
/// value sitting exactly on a boundary belongs to the warmer category.
pub mod stress_ranges {
    use std::ops::{Range, RangeFrom, RangeTo};

    /// Extreme cold stress `(-∞, -40.0)`
    pub const EXTREME_COLD: RangeTo<f64> = ..-40.0;

    /// Very strong cold stress `[-40.0, -27.0)`
    pub const VERY_STRONG_COLD: Range<f64> = -40.0..-27.0;

    /// Strong cold stress `[-27.0, -13.0)`
    pub const STRONG_COLD: Range<f64> = -27.0..-13.0;

    /// Moderate cold stress `[-13.0, 0.0)`
    pub const MODERATE_COLD: Range<f64> = -13.0..0.0;

    /// Slight cold stress `[0.0, 9.0)`
    pub const SLIGHT_COLD: Range<f64> = 0.0..9.0;

    /// No thermal stress `[9.0, 26.0)`
    pub const NO_STRESS: Range<f64> = 9.0..26.0;

    /// Moderate heat stress `[26.0, 32.0)`
    pub const MODERATE_HEAT: Range<f64> = 26.0..32.0;

    /// Strong heat stress `[32.0, 38.0)`
    pub const STRONG_HEAT: Range<f64> = 32.0..38.0;

    /// Very strong heat stress `[38.0, 46.0)`
    pub const VERY_STRONG_HEAT: Range<f64> = 38.0..46.0;

    /// Extreme heat stress `[46.0, ∞)`
    pub const EXTREME_HEAT: RangeFrom<f64> = 46.0..;
}

/// Thermal stress category, coldest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThermalStress {
    /// Below -40 °C
    ExtremeCold,
    /// -40 to -27 °C
    VeryStrongCold,
    /// -27 to -13 °C
    StrongCold,
    /// -13 to 0 °C
    ModerateCold,
    /// 0 to 9 °C
    SlightCold,
    /// 9 to 26 °C
    NoStress,
    /// 26 to 32 °C
    ModerateHeat,
    /// 32 to 38 °C
    StrongHeat,
    /// 38 to 46 °C
    VeryStrongHeat,
    /// 46 °C and above
    ExtremeHeat,
}

impl ThermalStress {
    /// All categories, coldest first
    pub const ALL: [ThermalStress; 10] = [
        ThermalStress::ExtremeCold,
        ThermalStress::VeryStrongCold,
        ThermalStress::StrongCold,
        ThermalStress::ModerateCold,
        ThermalStress::SlightCold,
        ThermalStress::NoStress,
        ThermalStress::ModerateHeat,
        ThermalStress::StrongHeat,
        ThermalStress::VeryStrongHeat,
        ThermalStress::ExtremeHeat,
    ];

    /// Classify a UTCI value given in °C. NaN has no category.
    #[must_use]
    pub fn from_celsius(utci_c: f64) -> Option<Self> {
        use stress_ranges as r;
        let category = match utci_c {
            _ if utci_c.is_nan() => return None,
            _ if r::EXTREME_COLD.contains(&utci_c) => Self::ExtremeCold,
            _ if r::VERY_STRONG_COLD.contains(&utci_c) => Self::VeryStrongCold,
            _ if r::STRONG_COLD.contains(&utci_c) => Self::StrongCold,
            _ if r::MODERATE_COLD.contains(&utci_c) => Self::ModerateCold,
            _ if r::SLIGHT_COLD.contains(&utci_c) => Self::SlightCold,
            _ if r::NO_STRESS.contains(&utci_c) => Self::NoStress,
            _ if r::MODERATE_HEAT.contains(&utci_c) => Self::ModerateHeat,
            _ if r::STRONG_HEAT.contains(&utci_c) => Self::StrongHeat,
            _ if r::VERY_STRONG_HEAT.contains(&utci_c) => Self::VeryStrongHeat,
            _ => Self::ExtremeHeat,
        };
        Some(category)
    }

    /// Classify a UTCI value given in Kelvin
    #[must_use]
    pub fn from_kelvin(utci: Kelvin) -> Option<Self> {
        Self::from_celsius(*utci.to_celsius())
    }

    /// Index on the scale, 0 (extreme cold) to 9 (extreme heat)
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ExtremeCold => "extreme cold stress",
            Self::VeryStrongCold => "very strong cold stress",
            Self::StrongCold => "strong cold stress",
            Self::ModerateCold => "moderate cold stress",
            Self::SlightCold => "slight cold stress",
            Self::NoStress => "no thermal stress",
            Self::ModerateHeat => "moderate heat stress",
            Self::StrongHeat => "strong heat stress",
            Self::VeryStrongHeat => "very strong heat stress",
            Self::ExtremeHeat => "extreme heat stress",
        }
    }
}

impl fmt::Display for ThermalStress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_belong_to_warmer_category() {
        let cases = [
            (-40.0, ThermalStress::VeryStrongCold),
            (-27.0, ThermalStress::StrongCold),
            (-13.0, ThermalStress::ModerateCold),
            (0.0, ThermalStress::SlightCold),
            (9.0, ThermalStress::NoStress),
            (26.0, ThermalStress::ModerateHeat),
            (32.0, ThermalStress::StrongHeat),
            (38.0, ThermalStress::VeryStrongHeat),
            (46.0, ThermalStress::ExtremeHeat),
        ];
        for (value, expected) in cases {
            assert_eq!(ThermalStress::from_celsius(value), Some(expected), "{value}");
        }
    }

    #[test]
    fn test_extremes() {
        assert_eq!(
            ThermalStress::from_celsius(-40.01),
            Some(ThermalStress::ExtremeCold)
        );
        assert_eq!(
            ThermalStress::from_celsius(f64::NEG_INFINITY),
            Some(ThermalStress::ExtremeCold)
        );
        assert_eq!(
            ThermalStress::from_celsius(f64::INFINITY),
            Some(ThermalStress::ExtremeHeat)
        );
        assert_eq!(ThermalStress::from_celsius(f64::NAN), None);
    }

    #[test]
    fn test_categories_are_monotonic() {
        let mut previous = ThermalStress::ExtremeCold;
        for tenth in -600..=600 {
            let c = f64::from(tenth) / 10.0;
            let category = ThermalStress::from_celsius(c).unwrap();
            assert!(category >= previous, "category decreased at {c}°C");
            previous = category;
        }
        assert_eq!(previous, ThermalStress::ExtremeHeat);
    }

    #[test]
    fn test_index_matches_order() {
        for (i, category) in ThermalStress::ALL.iter().enumerate() {
            assert_eq!(usize::from(category.index()), i);
        }
    }

    #[test]
    fn test_from_kelvin() {
        let k = Kelvin::new(297.99571565605277);
        assert_eq!(ThermalStress::from_kelvin(k), Some(ThermalStress::NoStress));
        assert_eq!(ThermalStress::NoStress.to_string(), "no thermal stress");
    }
}
