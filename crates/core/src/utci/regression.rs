//! Regression input variables and their validity ranges
//!
//! The polynomial is fitted over a bounded box of `(Ta, va, D_Tmrt, Pa)`.
//! Outside that box a sixth-order fit diverges quickly, so every variable is
//! clamped into its range before evaluation. Clamping is the only treatment:
//! out-of-range inputs are never rejected.

use crate::core_types::units::{
    Celsius, CelsiusDelta, Kilopascals, MetersPerSecond, CELSIUS_KELVIN_OFFSET,
};
use crate::physics::humidity::vapor_pressure_kpa;
use crate::physics::wind::wind_speed;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Validity ranges of the regression variables
///
/// Bounds are inclusive on both ends.
pub mod clip_ranges {
    use std::ops::RangeInclusive;

    /// Air temperature `Ta` (°C)
    pub const TA: RangeInclusive<f64> = -50.0..=50.0;

    /// Radiant offset `D_Tmrt = Tmrt - Ta` (°C)
    pub const D_TMRT: RangeInclusive<f64> = -30.0..=70.0;

    /// Water-vapour pressure `Pa` (kPa)
    pub const PA: RangeInclusive<f64> = 0.0..=5.0;

    /// Wind speed `va` (m/s)
    pub const VA: RangeInclusive<f64> = 0.5..=17.0;
}

/// Clamp `value` into `range`; NaN stays NaN
#[inline]
fn clip(value: f64, range: &RangeInclusive<f64>) -> f64 {
    value.clamp(*range.start(), *range.end())
}

/// The four regression variables of the UTCI polynomial
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionInputs {
    /// Air temperature (°C)
    pub ta: f64,
    /// Wind speed (m/s)
    pub va: f64,
    /// Mean radiant temperature minus air temperature (°C)
    pub d_tmrt: f64,
    /// Water-vapour pressure (kPa)
    pub pa: f64,
}

impl RegressionInputs {
    /// Derive unclipped regression variables from raw meteorological values
    ///
    /// # Arguments
    /// * `t2` - Air temperature (K)
    /// * `mrt` - Mean radiant temperature (K)
    /// * `r2` - Relative humidity (%)
    /// * `u10` - Eastward wind (m/s)
    /// * `v10` - Northward wind (m/s)
    #[inline]
    #[must_use]
    pub fn from_raw(t2: f64, mrt: f64, r2: f64, u10: f64, v10: f64) -> Self {
        Self {
            ta: t2 - CELSIUS_KELVIN_OFFSET,
            va: wind_speed(u10, v10),
            d_tmrt: mrt - t2,
            pa: vapor_pressure_kpa(t2, r2),
        }
    }

    /// Clamp every variable into its validity range
    #[inline]
    #[must_use]
    pub fn clipped(self) -> Self {
        Self {
            ta: clip(self.ta, &clip_ranges::TA),
            va: clip(self.va, &clip_ranges::VA),
            d_tmrt: clip(self.d_tmrt, &clip_ranges::D_TMRT),
            pa: clip(self.pa, &clip_ranges::PA),
        }
    }

    /// True if every finite variable already lies inside its range
    #[must_use]
    pub fn is_within_ranges(&self) -> bool {
        clip_ranges::TA.contains(&self.ta)
            && clip_ranges::VA.contains(&self.va)
            && clip_ranges::D_TMRT.contains(&self.d_tmrt)
            && clip_ranges::PA.contains(&self.pa)
    }

    /// Variables in polynomial order `[Ta, va, D_Tmrt, Pa]`
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> [f64; 4] {
        [self.ta, self.va, self.d_tmrt, self.pa]
    }

    /// Air temperature as a typed value
    #[must_use]
    pub fn air_temperature(&self) -> Celsius {
        Celsius::new(self.ta)
    }

    /// Wind speed as a typed value
    #[must_use]
    pub fn wind_speed(&self) -> MetersPerSecond {
        MetersPerSecond::new(self.va)
    }

    /// Radiant offset as a typed value
    #[must_use]
    pub fn radiant_offset(&self) -> CelsiusDelta {
        CelsiusDelta::new(self.d_tmrt)
    }

    /// Vapour pressure as a typed value
    #[must_use]
    pub fn vapor_pressure(&self) -> Kilopascals {
        Kilopascals::new(self.pa)
    }
}
