use super::thermo_api::{ThermoCalculator, ThermoError, check_temperature};
use crate::Utils::constants::T_REF;
use serde::{Deserialize, Serialize};

/// Thermodynamic model with a constant heat capacity:
/// H(T) = H298 + Cp (T - 298.15), S(T) = S298 + Cp ln(T / 298.15)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstCpData {
    /// enthalpy of formation at 298.15 K, J/mol
    pub h298: f64,
    /// entropy at 298.15 K, J/(mol K)
    pub s298: f64,
    /// heat capacity, J/(mol K)
    pub cp: f64,
    #[serde(default)]
    pub tmin: Option<f64>,
    #[serde(default)]
    pub tmax: Option<f64>,
}

impl ConstCpData {
    pub fn new(h298: f64, s298: f64, cp: f64) -> Self {
        Self {
            h298,
            s298,
            cp,
            tmin: None,
            tmax: None,
        }
    }
    /// restricts the model to [tmin, tmax]
    pub fn with_range(mut self, tmin: f64, tmax: f64) -> Self {
        self.tmin = Some(tmin);
        self.tmax = Some(tmax);
        self
    }
    fn check(&self, t: f64) -> Result<(), ThermoError> {
        let (tmin, tmax) = self.temperature_range();
        check_temperature(t, tmin, tmax)
    }
}

impl ThermoCalculator for ConstCpData {
    fn get_heat_capacity(&self, t: f64) -> Result<f64, ThermoError> {
        self.check(t)?;
        Ok(self.cp)
    }
    fn get_enthalpy(&self, t: f64) -> Result<f64, ThermoError> {
        self.check(t)?;
        Ok(self.h298 + self.cp * (t - T_REF))
    }
    fn get_entropy(&self, t: f64) -> Result<f64, ThermoError> {
        self.check(t)?;
        Ok(self.s298 + self.cp * (t / T_REF).ln())
    }
    fn temperature_range(&self) -> (f64, f64) {
        (self.tmin.unwrap_or(0.0), self.tmax.unwrap_or(f64::INFINITY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reference_values() {
        let thermo = ConstCpData::new(1000.0, 100.0, 30.0);
        assert_relative_eq!(thermo.get_enthalpy(T_REF).unwrap(), 1000.0);
        assert_relative_eq!(thermo.get_entropy(T_REF).unwrap(), 100.0);
    }

    #[test]
    fn test_temperature_dependence() {
        let thermo = ConstCpData::new(0.0, 0.0, 30.0);
        assert_relative_eq!(thermo.get_enthalpy(1298.15).unwrap(), 30000.0, epsilon = 1e-9);
        assert_relative_eq!(
            thermo.get_entropy(2.0 * T_REF).unwrap(),
            30.0 * 2.0_f64.ln(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_range_violation() {
        let thermo = ConstCpData::new(0.0, 0.0, 30.0).with_range(300.0, 2000.0);
        assert!(thermo.get_enthalpy(1000.0).is_ok());
        let result = thermo.get_entropy(2500.0);
        assert!(matches!(
            result,
            Err(ThermoError::OutOfRange {
                temperature: 2500.0,
                ..
            })
        ));
    }
}
