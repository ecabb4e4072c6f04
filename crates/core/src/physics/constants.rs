//! Thermodynamic constants for saturation vapour pressure over water
//!
//! The literals are the ones used by the operational UTCI procedure. Changing
//! any of them (even to a newer CODATA value) shifts results in the last
//! digits, so they are kept exactly as published.
//!
//! # References
//! - Bröde, P. et al. (2012). "Deriving the operational procedure for the
//!   Universal Thermal Climate Index (UTCI)". Int. J. Biometeorol. 56, 481-494.

use std::sync::LazyLock;

/// Boltzmann constant (J/K)
pub const RKBOL: f64 = 1.380658E-23;
/// Avogadro number (1/mol)
pub const RNAVO: f64 = 6.0221367E+23;
/// Molar mass of water (g/mol)
pub const RMV: f64 = 18.0153;
/// Specific heat of liquid water (J/(kg K))
pub const RCW: f64 = 4218.0;
/// Latent heat of vaporisation at the triple point (J/kg)
pub const RLVTT: f64 = 2.5008E+06;
/// Saturation vapour pressure at the triple point (Pa)
pub const RESTT: f64 = 611.14;
/// Triple point temperature of water (K)
pub const RTT: f64 = 273.16;

/// Coefficients of the integrated Clausius-Clapeyron relation
///
/// `ln(e_sat) = RALPW - RBETW / T - RGAMW * ln(T)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThermoCoefficients {
    /// Molar gas constant, `RNAVO * RKBOL` (J/(mol K))
    pub r: f64,
    /// Specific gas constant of water vapour (J/(kg K))
    pub rv: f64,
    /// Specific heat of water vapour at constant pressure, `4 * RV`
    pub rcpv: f64,
    /// `(RCW - RCPV) / RV`
    pub rgamw: f64,
    /// `RLVTT / RV + RGAMW * RTT`
    pub rbetw: f64,
    /// `ln(RESTT) + RBETW / RTT + RGAMW * ln(RTT)`
    pub ralpw: f64,
}

impl ThermoCoefficients {
    /// Derive the coefficients from the literal constants
    #[must_use]
    pub fn derive() -> Self {
        let r = RNAVO * RKBOL;
        let rv = 1000.0 * r / RMV;
        let rcpv = 4.0 * rv;
        let rgamw = (RCW - rcpv) / rv;
        let rbetw = RLVTT / rv + rgamw * RTT;
        let ralpw = RESTT.ln() + rbetw / RTT + rgamw * RTT.ln();
        Self {
            r,
            rv,
            rcpv,
            rgamw,
            rbetw,
            ralpw,
        }
    }
}

static THERMO: LazyLock<ThermoCoefficients> = LazyLock::new(ThermoCoefficients::derive);

/// Process-wide coefficients, derived on first use
#[inline]
#[must_use]
pub fn thermo() -> &'static ThermoCoefficients {
    &THERMO
}
