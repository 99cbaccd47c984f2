#[allow(non_snake_case)]
/// thermodynamic models of species and transition states
/// # Examples
/// ```
/// use KiRate::Thermodynamics::DBhandlers::thermo_api::{ThermoCalculator, ThermoEnum};
/// use serde_json::json;
/// let thermo = ThermoEnum::from_serde(json!({
///     "model": "ConstCp", "h298": -110530.0, "s298": 197.66, "cp": 29.1
/// })).unwrap();
/// let g = thermo.get_free_energy(298.15).unwrap();
/// assert!((g - (-110530.0 - 298.15 * 197.66)).abs() < 1e-6);
/// ```
pub mod DBhandlers;
/// species and the registry reactions refer to
pub mod species;
