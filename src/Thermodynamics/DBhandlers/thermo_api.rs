use super::ConstCpData::ConstCpData;
use super::NASAdata::NASAdata;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// errors of the thermodynamic models
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ThermoError {
    #[error("No coefficients found for temperature {temperature} K. Valid range: {range}")]
    NoCoefficientsFound { temperature: f64, range: String },
    #[error("Temperature {temperature} K is outside of the valid range {tmin} - {tmax} K")]
    OutOfRange { temperature: f64, tmin: f64, tmax: f64 },
    #[error("Invalid temperature range in coefficient data")]
    InvalidTemperatureRange,
    #[error("No thermodynamic model for {0}")]
    MissingModel(String),
    #[error("Failed to deserialize thermodynamic data: {0}")]
    SerdeError(String),
}

/// Interface every thermodynamic model of a species (or transition state) provides.
/// All quantities are molar and in SI units: J/(mol K) for heat capacity and entropy,
/// J/mol for enthalpy and free energy.
#[enum_dispatch]
pub trait ThermoCalculator {
    fn get_heat_capacity(&self, t: f64) -> Result<f64, ThermoError>;
    fn get_enthalpy(&self, t: f64) -> Result<f64, ThermoError>;
    fn get_entropy(&self, t: f64) -> Result<f64, ThermoError>;
    /// Gibbs free energy G = H - T*S
    fn get_free_energy(&self, t: f64) -> Result<f64, ThermoError> {
        Ok(self.get_enthalpy(t)? - t * self.get_entropy(t)?)
    }
    /// (Tmin, Tmax) of the model
    fn temperature_range(&self) -> (f64, f64);
}

/// closed set of available thermodynamic models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "model")]
#[enum_dispatch(ThermoCalculator)]
pub enum ThermoEnum {
    NASA(NASAdata),
    ConstCp(ConstCpData),
}

impl ThermoEnum {
    /// takes serde Value and parses it into one of the models; the "model" field selects it
    pub fn from_serde(serde: Value) -> Result<Self, ThermoError> {
        serde_json::from_value(serde).map_err(|e| ThermoError::SerdeError(e.to_string()))
    }
}

pub(crate) fn check_temperature(t: f64, tmin: f64, tmax: f64) -> Result<(), ThermoError> {
    if t.is_finite() && t > 0.0 && t >= tmin && t <= tmax {
        Ok(())
    } else {
        Err(ThermoError::OutOfRange {
            temperature: t,
            tmin,
            tmax,
        })
    }
}
