//! # Kinetics API
//!
//! ## Purpose
//! Common interface of the fitted kinetics models: rate coefficients that do not need any
//! transition state data. A reaction whose rate is not computed with transition state theory
//! takes its forward rate coefficient from one of these models.
//!
//! ## Models
//! | type | k(T, P) |
//! |------|---------|
//! | `Arrhenius` | A (T/T0)^n exp(-Ea/RT) |
//! | `ThirdBody` | k0(T) [M] |
//! | `Lindemann` | k∞ Pr/(1 + Pr), Pr = k0 [M]/k∞ |
//! | `Troe` | Lindemann form times the broadening factor F |
//!
//! [M] = Peff/(RT) where Peff is the pressure weighted by the collider efficiencies.
//!
//! ## Serialization
//! Models are internally tagged by the `"type"` field:
//! ```rust
//! use KiRate::Kinetics::kinetics_api::{KineticsCalculator, KineticsEnum};
//! use serde_json::json;
//! let kinetics = KineticsEnum::from_serde(json!({
//!     "type": "Arrhenius", "a": 1.0e10, "n": 0.0, "ea": 0.0
//! })).unwrap();
//! assert_eq!(kinetics.get_rate_coefficient(1000.0, 1e5).unwrap(), 1.0e10);
//! ```

use crate::Kinetics::kinetics::{Arrhenius, Lindemann, ThirdBody, Troe};
use crate::Kinetics::reaction_errors::ReactionError;
use enum_dispatch::enum_dispatch;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[enum_dispatch]
pub trait KineticsCalculator {
    /// rate coefficient at temperature t (K) and pressure p (Pa), SI units
    fn get_rate_coefficient(&self, t: f64, p: f64) -> Result<f64, ReactionError>;
    fn is_pressure_dependent(&self) -> bool;
    /// multiplies the rate coefficient by a constant factor
    fn change_rate(&mut self, factor: f64);
    fn comment(&self) -> &str;
    /// collider efficiencies keyed by species label; None for pressure independent models
    fn efficiencies(&self) -> Option<&HashMap<String, f64>> {
        None
    }
    /// efficiency of each collider; species not listed count as 1
    fn get_effective_collider_efficiencies(&self, labels: &[&str]) -> Vec<f64> {
        labels
            .iter()
            .map(|label| {
                self.efficiencies()
                    .and_then(|eff| eff.get(*label))
                    .copied()
                    .unwrap_or(1.0)
            })
            .collect()
    }
    /// Pressure weighted by the collider efficiencies of the bath gas. The fractions need not be
    /// normalised; an empty or all-zero composition leaves the pressure unchanged.
    fn get_effective_pressure(&self, p: f64, labels: &[&str], fractions: &[f64]) -> f64 {
        let efficiencies = self.get_effective_collider_efficiencies(labels);
        let total: f64 = fractions.iter().sum();
        if total <= 0.0 {
            return p;
        }
        let weighted: f64 = efficiencies
            .iter()
            .zip(fractions.iter())
            .map(|(eff, x)| eff * x)
            .sum();
        p * weighted / total
    }
}

/// closed set of fitted kinetics models
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
#[enum_dispatch(KineticsCalculator)]
pub enum KineticsEnum {
    Arrhenius(Arrhenius),
    ThirdBody(ThirdBody),
    Lindemann(Lindemann),
    Troe(Troe),
}

impl KineticsEnum {
    /// parses a serde Value; the "type" field selects the model
    pub fn from_serde(serde: Value) -> Result<Self, ReactionError> {
        serde_json::from_value(serde)
            .map_err(|e| ReactionError::InvalidArgument(format!("bad kinetics data: {}", e)))
    }
}
