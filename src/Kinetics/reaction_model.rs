//! # Reaction model
//!
//! ## Purpose
//! A reaction network: an ordered list of species and an ordered list of reactions. The species
//! order defines the rows of the stoichiometry matrix and the entries of the rate vector.
//!
//! ## Construction
//! Species are added first, reactions after them. A reaction may only refer to species already in
//! the model; anything else is rejected when the reaction is inserted. Reactions without an index
//! get the next free one.
//!
//! ## Rates
//! For reaction j with forward coefficient kf:
//! r_j = kf Π[reactants] - (kf/Kc) Π[products]   (second term only for reversible reactions)
//! and dC_i/dt = Σ_j S(i, j) r_j. Species missing from the concentration map count as zero.
//! A reaction whose reactant and product terms both vanish contributes zero without evaluating
//! its rate coefficient. The reverse term is formed in log space; a rate that still is not finite
//! is a `Numerical` error.
//!
//! ## Example
//! ```rust
//! use KiRate::Kinetics::kinetics::Arrhenius;
//! use KiRate::Kinetics::reaction::{RateSource, Reaction};
//! use KiRate::Kinetics::reaction_model::ReactionModel;
//! use KiRate::Thermodynamics::species::{Species, SpeciesRegistry};
//! use std::collections::HashMap;
//!
//! let mut registry = SpeciesRegistry::new();
//! let a = registry.add(Species::new("A")).unwrap();
//! let b = registry.add(Species::new("B")).unwrap();
//! let mut model = ReactionModel::new();
//! model.add_species(a).unwrap();
//! model.add_species(b).unwrap();
//! let kinetics = Arrhenius::new(2.0, 0.0, 0.0).into();
//! model
//!     .add_reaction(Reaction::new(vec![a], vec![b], false, RateSource::Fitted(kinetics)).unwrap())
//!     .unwrap();
//! let rates = model
//!     .get_reaction_rates(&registry, 1000.0, 1e5, &HashMap::from([(a, 3.0)]))
//!     .unwrap();
//! assert_eq!(rates.as_slice(), &[-6.0, 6.0]);
//! ```

use crate::Kinetics::kinetics_api::KineticsCalculator;
use crate::Kinetics::reaction::{EquilibriumConstantType, Reaction};
use crate::Kinetics::reaction_errors::ReactionError;
use crate::Thermodynamics::species::{SpeciesId, SpeciesRegistry};
use log::{debug, info};
use nalgebra::{DMatrix, DVector};
use prettytable::{Cell, Row, Table};
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct ReactionModel {
    species: Vec<SpeciesId>,
    positions: HashMap<SpeciesId, usize>,
    reactions: Vec<Reaction>,
}

impl ReactionModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// appends a species and returns its row in the stoichiometry matrix
    pub fn add_species(&mut self, species: SpeciesId) -> Result<usize, ReactionError> {
        if self.positions.contains_key(&species) {
            return Err(ReactionError::InvalidArgument(format!(
                "species {} is already in the model",
                species
            )));
        }
        let position = self.species.len();
        self.species.push(species);
        self.positions.insert(species, position);
        Ok(position)
    }

    /// appends a reaction and returns its column in the stoichiometry matrix
    pub fn add_reaction(&mut self, mut reaction: Reaction) -> Result<usize, ReactionError> {
        if let Some(missing) = reaction
            .reactants()
            .iter()
            .chain(reaction.products().iter())
            .find(|id| !self.positions.contains_key(id))
        {
            return Err(ReactionError::InvalidArgument(format!(
                "reaction refers to species {} which is not in the model",
                missing
            )));
        }
        match reaction.index {
            Some(index) => {
                if self.reactions.iter().any(|r| r.index == Some(index)) {
                    return Err(ReactionError::InvalidArgument(format!(
                        "reaction index {} is already used",
                        index
                    )));
                }
            }
            None => {
                let next = self
                    .reactions
                    .iter()
                    .filter_map(|r| r.index)
                    .max()
                    .map_or(0, |max| max + 1);
                reaction.index = Some(next);
            }
        }
        self.reactions.push(reaction);
        Ok(self.reactions.len() - 1)
    }

    pub fn species(&self) -> &[SpeciesId] {
        &self.species
    }
    pub fn reactions(&self) -> &[Reaction] {
        &self.reactions
    }
    /// row of a species, None if it is not in the model
    pub fn species_index(&self, species: SpeciesId) -> Option<usize> {
        self.positions.get(&species).copied()
    }
    pub fn n_species(&self) -> usize {
        self.species.len()
    }
    /// number of reactions
    pub fn len(&self) -> usize {
        self.reactions.len()
    }
    pub fn is_empty(&self) -> bool {
        self.reactions.is_empty()
    }

    /// S(i, j) = stoichiometric coefficient of species i in reaction j. Built from the current
    /// contents on every call.
    pub fn generate_stoichiometry_matrix(&self) -> DMatrix<i32> {
        DMatrix::from_fn(self.species.len(), self.reactions.len(), |i, j| {
            self.reactions[j].get_stoichiometric_coefficient(self.species[i])
        })
    }

    /// Net rate of change of every species, mol/(m^3 s), ordered like [`ReactionModel::species`].
    /// t in K, p in Pa, concentrations in mol/m^3. The first failing reaction aborts the call.
    pub fn get_reaction_rates(
        &self,
        registry: &SpeciesRegistry,
        t: f64,
        p: f64,
        concentrations: &HashMap<SpeciesId, f64>,
    ) -> Result<DVector<f64>, ReactionError> {
        if !(t.is_finite() && t > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "temperature must be positive, got {}",
                t
            )));
        }
        for id in concentrations.keys() {
            if !self.positions.contains_key(id) {
                debug!("concentration of {} ignored: not in the model", registry.label(*id));
            }
        }
        let c: Vec<f64> = self
            .species
            .iter()
            .map(|id| concentrations.get(id).copied().unwrap_or(0.0))
            .collect();
        let labels: Vec<String> = self.species.iter().map(|id| registry.label(*id)).collect();
        let labels: Vec<&str> = labels.iter().map(|s| s.as_str()).collect();

        let stoichiometry = self.generate_stoichiometry_matrix();
        let mut rates = DVector::zeros(self.species.len());
        for (j, reaction) in self.reactions.iter().enumerate() {
            let concentration_of = |id: &SpeciesId| self.positions.get(id).map_or(0.0, |i| c[*i]);
            let forward: f64 = reaction.reactants().iter().map(concentration_of).product();
            // sign and ln|Π[products]|, None when a product is absent
            let reverse = if reaction.is_reversible() {
                reaction
                    .products()
                    .iter()
                    .map(concentration_of)
                    .try_fold((1.0, 0.0), |(sign, ln_abs): (f64, f64), ci| {
                        (ci != 0.0).then(|| (sign * ci.signum(), ln_abs + ci.abs().ln()))
                    })
            } else {
                None
            };
            if forward == 0.0 && reverse.is_none() {
                continue;
            }
            let p_eff = match reaction.kinetics() {
                Some(kinetics) if kinetics.is_pressure_dependent() => {
                    kinetics.get_effective_pressure(p, &labels, &c)
                }
                _ => p,
            };
            let kf = reaction.get_rate_coefficient(registry, t, p_eff)?;
            let mut r = kf * forward;
            if let Some((sign, ln_products)) = reverse {
                if kf != 0.0 {
                    let ln_kc = reaction.get_ln_equilibrium_constant(
                        registry,
                        &[t],
                        EquilibriumConstantType::Kc,
                    )?[0];
                    // kf/Kc Π[products] without forming Kc
                    r -= sign * (kf.ln() - ln_kc + ln_products).exp();
                }
            }
            if !r.is_finite() {
                return Err(ReactionError::Numerical(format!(
                    "rate of reaction is not finite ({}), kf = {}",
                    r, kf
                ))
                .in_reaction(&reaction.label(registry), t));
            }
            for (i, s) in stoichiometry.column(j).iter().enumerate() {
                if *s != 0 {
                    rates[i] += *s as f64 * r;
                }
            }
        }
        Ok(rates)
    }

    /// stoichiometry matrix with species labels as rows and reaction equations as columns
    pub fn stoichiometry_table(&self, registry: &SpeciesRegistry) -> Table {
        let stoichiometry = self.generate_stoichiometry_matrix();
        let mut table = Table::new();
        let mut header = vec![Cell::new("species")];
        header.extend(self.reactions.iter().map(|r| Cell::new(&r.label(registry))));
        table.add_row(Row::new(header));
        for (i, id) in self.species.iter().enumerate() {
            let mut row = vec![Cell::new(&registry.label(*id))];
            row.extend(
                stoichiometry
                    .row(i)
                    .iter()
                    .map(|s| Cell::new(&s.to_string())),
            );
            table.add_row(Row::new(row));
        }
        table
    }

    /// rate vector returned by [`ReactionModel::get_reaction_rates`] next to the species labels
    pub fn rates_table(&self, registry: &SpeciesRegistry, rates: &DVector<f64>) -> Table {
        let mut table = Table::new();
        table.add_row(Row::new(vec![
            Cell::new("species"),
            Cell::new("dC/dt, mol/(m^3 s)"),
        ]));
        for (id, rate) in self.species.iter().zip(rates.iter()) {
            table.add_row(Row::new(vec![
                Cell::new(&registry.label(*id)),
                Cell::new(&format!("{:.6e}", rate)),
            ]));
        }
        table
    }

    pub fn pretty_print(&self, registry: &SpeciesRegistry) {
        info!(
            "reaction model with {} species and {} reactions",
            self.species.len(),
            self.reactions.len()
        );
        self.stoichiometry_table(registry).printstd();
    }
}
