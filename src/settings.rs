//! # Settings Module
//!
//! ## Purpose
//! Numerical configuration shared by every reaction of a network: the standard-state
//! pressure used for concentration based equilibrium constants and TST rate coefficients,
//! and the controls of the Eckart tunneling quadrature.
//!
//! ## Usage Pattern
//! ```rust
//! use KiRate::settings::ReactionSettings;
//!
//! let settings = ReactionSettings::from_json_str(
//!     r#"{"reference_pressure": 101325.0, "eckart": {"rel_tol": 1e-8}}"#,
//! ).unwrap();
//! assert_eq!(settings.eckart.initial_panels, 64);
//! ```
//!
//! ## Defaults
//! | Field | Default | Meaning |
//! |-------|---------|---------|
//! | `reference_pressure` | 1e5 Pa | standard state P0 |
//! | `eckart.rel_tol` | 1e-6 | relative change between successive panel doublings |
//! | `eckart.initial_panels` | 64 | Simpson panels of the first estimate (even) |
//! | `eckart.max_doublings` | 16 | cap on panel doublings before giving up |
//! | `eckart.upper_limit_kt` | 50 | integration range above the barrier top, in units of kT |

use crate::Kinetics::reaction_errors::ReactionError;
use serde::{Deserialize, Serialize};

/// Controls of the Eckart tunneling integral
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EckartSettings {
    /// relative tolerance between two successive estimates
    pub rel_tol: f64,
    /// number of Simpson panels of the first estimate
    pub initial_panels: usize,
    /// maximal number of panel doublings
    pub max_doublings: usize,
    /// upper integration limit above the barrier top in units of kT
    pub upper_limit_kt: f64,
}

impl Default for EckartSettings {
    fn default() -> Self {
        Self {
            rel_tol: 1e-6,
            initial_panels: 64,
            max_doublings: 16,
            upper_limit_kt: 50.0,
        }
    }
}

/// Numerical settings carried by each reaction
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionSettings {
    /// standard state pressure, Pa
    pub reference_pressure: f64,
    pub eckart: EckartSettings,
}

impl Default for ReactionSettings {
    fn default() -> Self {
        Self {
            reference_pressure: 1e5,
            eckart: EckartSettings::default(),
        }
    }
}

impl ReactionSettings {
    pub fn new() -> Self {
        Self::default()
    }
    /// parses settings from a JSON document; absent fields keep their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ReactionError> {
        let settings: ReactionSettings = serde_json::from_str(json)
            .map_err(|e| ReactionError::InvalidArgument(format!("bad settings: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }
    /// checks that all values are usable
    pub fn validate(&self) -> Result<(), ReactionError> {
        if !(self.reference_pressure > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "reference pressure must be positive, got {}",
                self.reference_pressure
            )));
        }
        let eckart = &self.eckart;
        if !(eckart.rel_tol > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "Eckart tolerance must be positive, got {}",
                eckart.rel_tol
            )));
        }
        if eckart.initial_panels < 2 || eckart.initial_panels % 2 != 0 {
            return Err(ReactionError::InvalidArgument(format!(
                "Eckart initial panels must be an even number >= 2, got {}",
                eckart.initial_panels
            )));
        }
        if !(eckart.upper_limit_kt > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "Eckart upper limit must be positive, got {}",
                eckart.upper_limit_kt
            )));
        }
        Ok(())
    }
}
