//! Physical sub-computations feeding the UTCI regression

pub mod constants;
pub mod humidity;
pub mod wind;

pub use constants::{thermo, ThermoCoefficients};
pub use humidity::{
    saturation_vapor_pressure, saturation_vapor_pressure_pa, vapor_pressure, vapor_pressure_kpa,
};
pub use wind::{wind_speed, wind_speed_from_components};
