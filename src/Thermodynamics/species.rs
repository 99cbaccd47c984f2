use crate::Kinetics::reaction_errors::ReactionError;
use crate::Thermodynamics::DBhandlers::thermo_api::{ThermoCalculator, ThermoEnum, ThermoError};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// index of a species in a [`SpeciesRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpeciesId(pub usize);

impl fmt::Display for SpeciesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// chemical species: a label, its thermodynamic model and its ground-state energy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Species {
    pub label: String,
    #[serde(default)]
    pub thermo: Option<ThermoEnum>,
    /// ground-state energy including zero-point energy, J/mol
    #[serde(default)]
    pub e0: Option<f64>,
}

impl Species {
    pub fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            thermo: None,
            e0: None,
        }
    }
    pub fn with_thermo(mut self, thermo: impl Into<ThermoEnum>) -> Self {
        self.thermo = Some(thermo.into());
        self
    }
    pub fn with_e0(mut self, e0: f64) -> Self {
        self.e0 = Some(e0);
        self
    }
    pub fn thermo(&self) -> Result<&ThermoEnum, ThermoError> {
        self.thermo
            .as_ref()
            .ok_or_else(|| ThermoError::MissingModel(self.label.clone()))
    }
    pub fn get_heat_capacity(&self, t: f64) -> Result<f64, ThermoError> {
        self.thermo()?.get_heat_capacity(t)
    }
    pub fn get_enthalpy(&self, t: f64) -> Result<f64, ThermoError> {
        self.thermo()?.get_enthalpy(t)
    }
    pub fn get_entropy(&self, t: f64) -> Result<f64, ThermoError> {
        self.thermo()?.get_entropy(t)
    }
    pub fn get_free_energy(&self, t: f64) -> Result<f64, ThermoError> {
        self.thermo()?.get_free_energy(t)
    }
}

/// Canonical, append-only storage of species. Reactions and reaction models refer to its
/// entries by [`SpeciesId`], so one species can take part in many reactions without being
/// copied.
#[derive(Debug, Clone, Default)]
pub struct SpeciesRegistry {
    species: Vec<Species>,
    by_label: HashMap<String, SpeciesId>,
}

impl SpeciesRegistry {
    pub fn new() -> Self {
        Self::default()
    }
    /// stores a species; labels must be unique
    pub fn add(&mut self, species: Species) -> Result<SpeciesId, ReactionError> {
        if self.by_label.contains_key(&species.label) {
            return Err(ReactionError::InvalidArgument(format!(
                "species {} is already registered",
                species.label
            )));
        }
        let id = SpeciesId(self.species.len());
        self.by_label.insert(species.label.clone(), id);
        self.species.push(species);
        Ok(id)
    }
    pub fn get(&self, id: SpeciesId) -> Result<&Species, ReactionError> {
        self.species
            .get(id.0)
            .ok_or_else(|| ReactionError::InvalidArgument(format!("unknown species {}", id)))
    }
    pub fn id_of(&self, label: &str) -> Option<SpeciesId> {
        self.by_label.get(label).copied()
    }
    pub fn label(&self, id: SpeciesId) -> String {
        match self.species.get(id.0) {
            Some(species) => species.label.clone(),
            None => id.to_string(),
        }
    }
    pub fn len(&self) -> usize {
        self.species.len()
    }
    pub fn is_empty(&self) -> bool {
        self.species.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = (SpeciesId, &Species)> {
        self.species
            .iter()
            .enumerate()
            .map(|(i, species)| (SpeciesId(i), species))
    }
}
