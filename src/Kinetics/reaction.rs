//! # Reaction
//!
//! ## Purpose
//! One elementary or overall reaction step: its participants, reversibility and the source of its
//! forward rate coefficient. Computes thermochemistry of reaction, equilibrium constants and
//! transition state theory (TST) rate coefficients over arrays of temperatures.
//!
//! ## Participants
//! Reactants and products are [`SpeciesId`]s of a [`SpeciesRegistry`]; a species listed twice has
//! stoichiometric coefficient 2. Every computation that needs species data takes the registry
//! as an argument.
//!
//! ## Rate source
//! Resolved once at construction ([`RateSource::from_parts`]):
//! - `Tst`: transition state plus tunneling method
//! - `Fitted`: any model of [`KineticsEnum`]
//!
//! ## Errors
//! Array operations evaluate every temperature and stop at the first failure. The error carries
//! the reaction equation and the temperature (`ReactionError::InReaction`).
//!
//! ## Units
//! SI throughout: J/mol, J/(mol K), Pa, mol/m^3. TST rate coefficients of reactions with n
//! reactants are in (m^3/mol)^(n-1)/s.

use crate::Kinetics::kinetics_api::{KineticsCalculator, KineticsEnum};
use crate::Kinetics::reaction_errors::ReactionError;
use crate::Kinetics::transition_state::TransitionState;
use crate::Kinetics::tunneling::{TunnelingContext, TunnelingMethod, wigner_correction};
use crate::Thermodynamics::DBhandlers::thermo_api::ThermoError;
use crate::Thermodynamics::species::{Species, SpeciesId, SpeciesRegistry};
use crate::Utils::constants::{H, KB, R};
use crate::settings::ReactionSettings;
use log::debug;
use std::fmt;
use std::str::FromStr;

/// units of an equilibrium constant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EquilibriumConstantType {
    /// activities, dimensionless
    Ka,
    /// concentrations, (mol/m^3)^Δn
    #[default]
    Kc,
    /// pressures, Pa^Δn
    Kp,
}

impl FromStr for EquilibriumConstantType {
    type Err = ReactionError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ka" => Ok(EquilibriumConstantType::Ka),
            "kc" => Ok(EquilibriumConstantType::Kc),
            "kp" => Ok(EquilibriumConstantType::Kp),
            _ => Err(ReactionError::InvalidArgument(format!(
                "unknown equilibrium constant type '{}', expected Ka, Kc or Kp",
                s
            ))),
        }
    }
}

impl fmt::Display for EquilibriumConstantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EquilibriumConstantType::Ka => "Ka",
            EquilibriumConstantType::Kc => "Kc",
            EquilibriumConstantType::Kp => "Kp",
        };
        write!(f, "{}", name)
    }
}

/// where the forward rate coefficient comes from
#[derive(Debug, Clone, PartialEq)]
pub enum RateSource {
    Tst {
        transition_state: TransitionState,
        tunneling: TunnelingMethod,
    },
    Fitted(KineticsEnum),
}

impl RateSource {
    /// Picks the rate source from optional parts. A requested tunneling method selects TST when a
    /// transition state is present; otherwise fitted kinetics win over a bare transition state.
    pub fn from_parts(
        transition_state: Option<TransitionState>,
        kinetics: Option<KineticsEnum>,
        tunneling: Option<TunnelingMethod>,
    ) -> Result<Self, ReactionError> {
        match (transition_state, kinetics, tunneling) {
            (Some(transition_state), _, Some(tunneling)) => Ok(RateSource::Tst {
                transition_state,
                tunneling,
            }),
            (_, Some(kinetics), _) => Ok(RateSource::Fitted(kinetics)),
            (Some(transition_state), None, None) => Ok(RateSource::Tst {
                transition_state,
                tunneling: TunnelingMethod::None,
            }),
            (None, None, _) => Err(ReactionError::MissingData(
                "reaction needs either kinetics or a transition state".to_string(),
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Reaction {
    /// identifier unique within a reaction model; assigned on insertion when absent
    pub index: Option<usize>,
    reactants: Vec<SpeciesId>,
    products: Vec<SpeciesId>,
    reversible: bool,
    rate_source: RateSource,
    settings: ReactionSettings,
}

impl Reaction {
    pub fn new(
        reactants: Vec<SpeciesId>,
        products: Vec<SpeciesId>,
        reversible: bool,
        rate_source: RateSource,
    ) -> Result<Self, ReactionError> {
        if reactants.is_empty() {
            return Err(ReactionError::InvalidArgument(
                "reaction has no reactants".to_string(),
            ));
        }
        if products.is_empty() {
            return Err(ReactionError::InvalidArgument(
                "reaction has no products".to_string(),
            ));
        }
        Ok(Self {
            index: None,
            reactants,
            products,
            reversible,
            rate_source,
            settings: ReactionSettings::default(),
        })
    }

    /// constructor from optional transition state / kinetics, see [`RateSource::from_parts`]
    pub fn from_parts(
        reactants: Vec<SpeciesId>,
        products: Vec<SpeciesId>,
        reversible: bool,
        transition_state: Option<TransitionState>,
        kinetics: Option<KineticsEnum>,
        tunneling: Option<TunnelingMethod>,
    ) -> Result<Self, ReactionError> {
        let rate_source = RateSource::from_parts(transition_state, kinetics, tunneling)?;
        Self::new(reactants, products, reversible, rate_source)
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_settings(mut self, settings: ReactionSettings) -> Result<Self, ReactionError> {
        settings.validate()?;
        self.settings = settings;
        Ok(self)
    }

    pub fn reactants(&self) -> &[SpeciesId] {
        &self.reactants
    }
    pub fn products(&self) -> &[SpeciesId] {
        &self.products
    }
    pub fn is_reversible(&self) -> bool {
        self.reversible
    }
    pub fn rate_source(&self) -> &RateSource {
        &self.rate_source
    }
    pub fn settings(&self) -> &ReactionSettings {
        &self.settings
    }
    pub fn transition_state(&self) -> Option<&TransitionState> {
        match &self.rate_source {
            RateSource::Tst {
                transition_state, ..
            } => Some(transition_state),
            RateSource::Fitted(_) => None,
        }
    }
    pub fn kinetics(&self) -> Option<&KineticsEnum> {
        match &self.rate_source {
            RateSource::Fitted(kinetics) => Some(kinetics),
            RateSource::Tst { .. } => None,
        }
    }
    pub fn is_pressure_dependent(&self) -> bool {
        self.kinetics()
            .is_some_and(|kinetics| kinetics.is_pressure_dependent())
    }

    /// equation such as "A + B <=> C" ("=>" for irreversible reactions)
    pub fn label(&self, registry: &SpeciesRegistry) -> String {
        let side = |ids: &[SpeciesId]| {
            ids.iter()
                .map(|id| registry.label(*id))
                .collect::<Vec<_>>()
                .join(" + ")
        };
        let arrow = if self.reversible { "<=>" } else { "=>" };
        format!("{} {} {}", side(&self.reactants), arrow, side(&self.products))
    }

    /// number of product molecules minus number of reactant molecules
    pub fn delta_n(&self) -> i32 {
        self.products.len() as i32 - self.reactants.len() as i32
    }

    /// count in products minus count in reactants, 0 if the species does not take part
    pub fn get_stoichiometric_coefficient(&self, species: SpeciesId) -> i32 {
        let count = |ids: &[SpeciesId]| ids.iter().filter(|id| **id == species).count() as i32;
        count(&self.products) - count(&self.reactants)
    }

    /// Σ f(products) - Σ f(reactants) at each temperature
    fn change_of<F>(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
        property: F,
    ) -> Result<Vec<f64>, ReactionError>
    where
        F: Fn(&Species, f64) -> Result<f64, ThermoError>,
    {
        let reactants = self.species_of(registry, &self.reactants)?;
        let products = self.species_of(registry, &self.products)?;
        let change_at = |t: f64| -> Result<f64, ThermoError> {
            let mut change = 0.0;
            for species in products.iter() {
                change += property(*species, t)?;
            }
            for species in reactants.iter() {
                change -= property(*species, t)?;
            }
            Ok(change)
        };
        let label = self.label(registry);
        let mut values = Vec::with_capacity(tlist.len());
        for &t in tlist {
            let value = change_at(t).map_err(|e| ReactionError::from(e).in_reaction(&label, t))?;
            values.push(value);
        }
        Ok(values)
    }

    fn species_of<'a>(
        &self,
        registry: &'a SpeciesRegistry,
        ids: &[SpeciesId],
    ) -> Result<Vec<&'a Species>, ReactionError> {
        ids.iter().map(|id| registry.get(*id)).collect()
    }

    /// ΔH(T), J/mol
    pub fn get_enthalpy_of_reaction(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
    ) -> Result<Vec<f64>, ReactionError> {
        self.change_of(registry, tlist, |species, t| species.get_enthalpy(t))
    }

    /// ΔS(T), J/(mol K)
    pub fn get_entropy_of_reaction(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
    ) -> Result<Vec<f64>, ReactionError> {
        self.change_of(registry, tlist, |species, t| species.get_entropy(t))
    }

    /// ΔG(T) = ΔH(T) - T ΔS(T), J/mol
    pub fn get_free_energy_of_reaction(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
    ) -> Result<Vec<f64>, ReactionError> {
        let dh = self.get_enthalpy_of_reaction(registry, tlist)?;
        let ds = self.get_entropy_of_reaction(registry, tlist)?;
        Ok(tlist
            .iter()
            .zip(dh.iter().zip(ds.iter()))
            .map(|(t, (dh, ds))| dh - t * ds)
            .collect())
    }

    /// ln K(T) = -ΔG/RT plus the unit conversion with the reference pressure P0. Stays finite
    /// where K itself over- or underflows.
    pub fn get_ln_equilibrium_constant(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
        k_type: EquilibriumConstantType,
    ) -> Result<Vec<f64>, ReactionError> {
        let dg = self.get_free_energy_of_reaction(registry, tlist)?;
        let p0 = self.settings.reference_pressure;
        let dn = self.delta_n() as f64;
        Ok(tlist
            .iter()
            .zip(dg.iter())
            .map(|(t, dg)| {
                let ln_ka = -dg / (R * t);
                match k_type {
                    EquilibriumConstantType::Ka => ln_ka,
                    EquilibriumConstantType::Kc => ln_ka + dn * (p0 / (R * t)).ln(),
                    EquilibriumConstantType::Kp => ln_ka + dn * p0.ln(),
                }
            })
            .collect())
    }

    /// K(T) = exp(-ΔG/RT) converted to the requested units with the reference pressure P0
    pub fn get_equilibrium_constant(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
        k_type: EquilibriumConstantType,
    ) -> Result<Vec<f64>, ReactionError> {
        let ln_k = self.get_ln_equilibrium_constant(registry, tlist, k_type)?;
        Ok(ln_k.into_iter().map(f64::exp).collect())
    }

    fn e0_of(species: &Species) -> Result<f64, ReactionError> {
        species.e0.ok_or_else(|| {
            ReactionError::MissingData(format!(
                "species {} has no ground-state energy",
                species.label
            ))
        })
    }

    /// summed ground-state energy of one side, None if any species lacks it
    fn side_e0(
        &self,
        registry: &SpeciesRegistry,
        ids: &[SpeciesId],
    ) -> Result<Option<f64>, ReactionError> {
        let mut total = Some(0.0);
        for id in ids {
            let e0 = registry.get(*id)?.e0;
            total = total.zip(e0).map(|(sum, e0)| sum + e0);
        }
        Ok(total)
    }

    /// k(T) = κ(T) (kB T/h) (RT/P0)^(n-1) Q‡/ΠQr exp(-ΔE0/RT), evaluated in log space
    pub fn calculate_tst_rate_coefficient(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
        transition_state: &TransitionState,
        tunneling: TunnelingMethod,
    ) -> Result<Vec<f64>, ReactionError> {
        let label = self.label(registry);
        let reactants = self.species_of(registry, &self.reactants)?;
        let context = TunnelingContext {
            transition_state,
            e0_reactants: self.side_e0(registry, &self.reactants)?,
            e0_products: self.side_e0(registry, &self.products)?,
            eckart: &self.settings.eckart,
        };
        let mut k = Vec::with_capacity(tlist.len());
        for &t in tlist {
            let value = self
                .tst_rate_at(t, &reactants, transition_state, tunneling, &context)
                .map_err(|e| e.in_reaction(&label, t))?;
            k.push(value);
        }
        debug!("TST rate coefficient of {} with {} tunneling: {:?}", label, tunneling, k);
        Ok(k)
    }

    fn tst_rate_at(
        &self,
        t: f64,
        reactants: &[&Species],
        transition_state: &TransitionState,
        tunneling: TunnelingMethod,
        context: &TunnelingContext,
    ) -> Result<f64, ReactionError> {
        if !(t.is_finite() && t > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "temperature must be positive, got {}",
                t
            )));
        }
        let rt = R * t;
        let p0 = self.settings.reference_pressure;
        let molecularity = reactants.len() as f64;
        // ln Q = -(G - E0)/RT
        let e0_ts = transition_state.e0()?;
        let ln_q_ts = -(transition_state.get_free_energy(t)? - e0_ts) / rt;
        let mut ln_q_reactants = 0.0;
        let mut e0_reactants = 0.0;
        for species in reactants {
            let e0 = Self::e0_of(species)?;
            ln_q_reactants += -(species.get_free_energy(t)? - e0) / rt;
            e0_reactants += e0;
        }
        let kappa = tunneling.correction(context, &[t])?[0];
        let ln_k = (KB * t / H).ln() + (molecularity - 1.0) * (rt / p0).ln() + ln_q_ts
            - ln_q_reactants
            - (e0_ts - e0_reactants) / rt;
        Ok(kappa * ln_k.exp())
    }

    /// Wigner κ(T) from the imaginary frequency of the given transition state
    pub fn calculate_wigner_tunneling_correction(
        &self,
        tlist: &[f64],
        transition_state: &TransitionState,
    ) -> Result<Vec<f64>, ReactionError> {
        wigner_correction(transition_state.frequency()?, tlist)
    }

    /// Eckart κ(T) from this reaction's transition state and the ground-state energies of its
    /// reactants and products
    pub fn calculate_eckart_tunneling_correction(
        &self,
        registry: &SpeciesRegistry,
        tlist: &[f64],
    ) -> Result<Vec<f64>, ReactionError> {
        let transition_state = self.transition_state().ok_or_else(|| {
            ReactionError::MissingData(format!(
                "reaction {} has no transition state",
                self.label(registry)
            ))
        })?;
        let context = TunnelingContext {
            transition_state,
            e0_reactants: self.side_e0(registry, &self.reactants)?,
            e0_products: self.side_e0(registry, &self.products)?,
            eckart: &self.settings.eckart,
        };
        TunnelingMethod::Eckart.correction(&context, tlist)
    }

    /// forward rate coefficient at (t, p) from whichever rate source the reaction has
    pub fn get_rate_coefficient(
        &self,
        registry: &SpeciesRegistry,
        t: f64,
        p: f64,
    ) -> Result<f64, ReactionError> {
        match &self.rate_source {
            RateSource::Tst {
                transition_state,
                tunneling,
            } => Ok(self.calculate_tst_rate_coefficient(
                registry,
                &[t],
                transition_state,
                *tunneling,
            )?[0]),
            RateSource::Fitted(kinetics) => kinetics
                .get_rate_coefficient(t, p)
                .map_err(|e| e.in_reaction(&self.label(registry), t)),
        }
    }

    /// kf / Kc; only defined for reversible reactions
    pub fn get_reverse_rate_coefficient(
        &self,
        registry: &SpeciesRegistry,
        t: f64,
        p: f64,
    ) -> Result<f64, ReactionError> {
        if !self.reversible {
            return Err(ReactionError::InvalidArgument(format!(
                "reaction {} is irreversible",
                self.label(registry)
            )));
        }
        let kf = self.get_rate_coefficient(registry, t, p)?;
        let kc =
            self.get_equilibrium_constant(registry, &[t], EquilibriumConstantType::Kc)?[0];
        Ok(kf / kc)
    }
}
