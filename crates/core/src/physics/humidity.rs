//! Saturation and partial water-vapour pressure
//!
//! Saturation pressure over liquid water follows the integrated
//! Clausius-Clapeyron form with temperature-dependent latent heat, using the
//! coefficients in [`super::constants`]. No clamping happens here; the UTCI
//! regression clips the resulting vapour pressure itself.

use super::constants::thermo;
use crate::core_types::units::{Kelvin, Kilopascals, Pascals, Percent};

/// Saturation vapour pressure over water (Pa) at air temperature `t_k` (K)
///
/// `e_sat = exp(RALPW - RBETW / T - RGAMW * ln(T))`
///
/// Non-positive or NaN temperatures yield NaN (or zero as `T` approaches 0 K).
#[inline]
#[must_use]
pub fn saturation_vapor_pressure_pa(t_k: f64) -> f64 {
    let c = thermo();
    (c.ralpw - c.rbetw / t_k - c.rgamw * t_k.ln()).exp()
}

/// Partial water-vapour pressure (kPa) from relative humidity (%) and air temperature (K)
///
/// `Pa = (RH / 100) * e_sat / 1000`
#[inline]
#[must_use]
pub fn vapor_pressure_kpa(t_k: f64, rh_percent: f64) -> f64 {
    rh_percent / 100.0 * saturation_vapor_pressure_pa(t_k) / 1000.0
}

/// Typed form of [`saturation_vapor_pressure_pa`]
#[must_use]
pub fn saturation_vapor_pressure(t: Kelvin) -> Pascals {
    Pascals::new(saturation_vapor_pressure_pa(*t))
}

/// Typed form of [`vapor_pressure_kpa`]
#[must_use]
pub fn vapor_pressure(t: Kelvin, rh: Percent) -> Kilopascals {
    (saturation_vapor_pressure(t) * rh.to_fraction()).to_kilopascals()
}
