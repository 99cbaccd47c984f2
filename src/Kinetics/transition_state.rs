use crate::Kinetics::reaction_errors::ReactionError;
use crate::Thermodynamics::DBhandlers::thermo_api::{ThermoCalculator, ThermoEnum};
use serde::{Deserialize, Serialize};

/// Transition state of a reaction. Each field is optional because fitted kinetics need none of
/// them; operations that do need a value fail with `MissingData` when it is absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TransitionState {
    pub label: String,
    /// ground-state energy including zero-point energy, J/mol
    #[serde(default)]
    pub e0: Option<f64>,
    #[serde(default)]
    pub thermo: Option<ThermoEnum>,
    /// imaginary frequency of the reaction coordinate, cm^-1 (sign is ignored)
    #[serde(default)]
    pub frequency: Option<f64>,
}

impl TransitionState {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            ..Self::default()
        }
    }
    pub fn with_e0(mut self, e0: f64) -> Self {
        self.e0 = Some(e0);
        self
    }
    pub fn with_thermo(mut self, thermo: impl Into<ThermoEnum>) -> Self {
        self.thermo = Some(thermo.into());
        self
    }
    pub fn with_frequency(mut self, frequency: f64) -> Self {
        self.frequency = Some(frequency);
        self
    }
    pub fn e0(&self) -> Result<f64, ReactionError> {
        self.e0.ok_or_else(|| {
            ReactionError::MissingData(format!(
                "transition state {} has no ground-state energy",
                self.label
            ))
        })
    }
    /// magnitude of the imaginary frequency, cm^-1
    pub fn frequency(&self) -> Result<f64, ReactionError> {
        self.frequency.map(f64::abs).ok_or_else(|| {
            ReactionError::MissingData(format!(
                "transition state {} has no imaginary frequency",
                self.label
            ))
        })
    }
    pub fn get_free_energy(&self, t: f64) -> Result<f64, ReactionError> {
        let thermo = self.thermo.as_ref().ok_or_else(|| {
            ReactionError::MissingData(format!(
                "transition state {} has no thermodynamic model",
                self.label
            ))
        })?;
        Ok(thermo.get_free_energy(t)?)
    }
}
