use super::thermo_api::{ThermoCalculator, ThermoError};
use crate::Utils::constants::R;
use serde::{Deserialize, Serialize};

fn Cp(t: f64, a: &[f64; 7]) -> f64 {
    R * (a[0] + a[1] * t + a[2] * t.powi(2) + a[3] * t.powi(3) + a[4] * t.powi(4))
}
fn dh(t: f64, a: &[f64; 7]) -> f64 {
    R * t
        * (a[0]
            + a[1] * t / 2.0
            + a[2] * t.powi(2) / 3.0
            + a[3] * t.powi(3) / 4.0
            + a[4] * t.powi(4) / 5.0
            + a[5] / t)
}
fn ds(t: f64, a: &[f64; 7]) -> f64 {
    R * (a[0] * t.ln()
        + a[1] * t
        + a[2] * t.powi(2) / 2.0
        + a[3] * t.powi(3) / 3.0
        + a[4] * t.powi(4) / 4.0
        + a[6])
}

/// NASA 7-coefficient polynomials.
///
/// `coeffs` uses the flat layout of the thermo libraries: the temperature bounds first, then
/// 7 coefficients per range. 9 numbers = one range `[T1, T2, a1..a7]`, 17 numbers = two ranges
/// `[T1, T2, T3, a1..a7, b1..b7]`, 25 numbers = three ranges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NASAdata {
    #[serde(alias = "Cp")]
    pub coeffs: Vec<f64>,
}

impl NASAdata {
    pub fn new(coeffs: Vec<f64>) -> Result<Self, ThermoError> {
        let data = Self { coeffs };
        data.bounds()?;
        Ok(data)
    }
    /// temperature bounds of the ranges
    fn bounds(&self) -> Result<&[f64], ThermoError> {
        let n_bounds = match self.coeffs.len() {
            9 => 2,
            17 => 3,
            25 => 4,
            _ => return Err(ThermoError::InvalidTemperatureRange),
        };
        let bounds = &self.coeffs[..n_bounds];
        if bounds.windows(2).any(|w| !(w[0] < w[1])) {
            return Err(ThermoError::InvalidTemperatureRange);
        }
        Ok(bounds)
    }
    /// the 7 constants of the range containing t
    pub fn extract_coefficients(&self, t: f64) -> Result<[f64; 7], ThermoError> {
        let bounds = self.bounds()?;
        let n_bounds = bounds.len();
        let range = bounds
            .windows(2)
            .position(|w| w[0] <= t && t <= w[1])
            .ok_or_else(|| ThermoError::NoCoefficientsFound {
                temperature: t,
                range: bounds
                    .iter()
                    .map(|t| t.to_string())
                    .collect::<Vec<_>>()
                    .join(" - "),
            })?;
        let start = n_bounds + 7 * range;
        let mut a = [0.0; 7];
        a.copy_from_slice(&self.coeffs[start..start + 7]);
        Ok(a)
    }
}

impl ThermoCalculator for NASAdata {
    fn get_heat_capacity(&self, t: f64) -> Result<f64, ThermoError> {
        Ok(Cp(t, &self.extract_coefficients(t)?))
    }
    fn get_enthalpy(&self, t: f64) -> Result<f64, ThermoError> {
        Ok(dh(t, &self.extract_coefficients(t)?))
    }
    fn get_entropy(&self, t: f64) -> Result<f64, ThermoError> {
        Ok(ds(t, &self.extract_coefficients(t)?))
    }
    fn temperature_range(&self) -> (f64, f64) {
        match self.bounds() {
            Ok(bounds) => (bounds[0], bounds[bounds.len() - 1]),
            Err(_) => (f64::NAN, f64::NAN),
        }
    }
}
