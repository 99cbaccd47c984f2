//! # Tunneling corrections
//!
//! ## Purpose
//! Multiplicative factors κ(T) applied to transition state theory rate coefficients to account
//! for quantum mechanical crossing of the barrier below its top.
//!
//! ## Methods
//! - **None**: κ = 1
//! - **Wigner**: first order correction κ = 1 + (hc|ν̃|/kBT)²/24. Only meaningful while κ stays
//!   close to 1; values above 2 are reported with a warning and returned unchanged.
//! - **Eckart**: transmission probability of the one dimensional Eckart barrier averaged over the
//!   Boltzmann distribution. The barrier is built from the ground-state energies of reactants,
//!   transition state and products, so asymmetric barriers are handled.
//!
//! ## Eckart quadrature
//! The dimensionless integral over x = E/kT is evaluated with the composite Simpson rule on
//! [0, dV1/kT + `upper_limit_kt`]. The number of panels starts at `initial_panels` and is doubled
//! until two successive estimates agree within `rel_tol`; more than `max_doublings` doublings is a
//! `Numerical` error.

use crate::Kinetics::reaction_errors::ReactionError;
use crate::Kinetics::transition_state::TransitionState;
use crate::Utils::constants::{KB, NA, R, wavenumber_to_joule};
use crate::settings::EckartSettings;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// tunneling correction applied to a TST rate coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum TunnelingMethod {
    #[default]
    None,
    Wigner,
    Eckart,
}

/// data a tunneling strategy may draw on; Eckart needs the energies, Wigner only the frequency
#[derive(Debug, Clone, Copy)]
pub struct TunnelingContext<'a> {
    pub transition_state: &'a TransitionState,
    /// summed ground-state energy of the reactants, J/mol
    pub e0_reactants: Option<f64>,
    /// summed ground-state energy of the products, J/mol
    pub e0_products: Option<f64>,
    pub eckart: &'a EckartSettings,
}

type TunnelingStrategy = fn(&TunnelingContext, &[f64]) -> Result<Vec<f64>, ReactionError>;

impl TunnelingMethod {
    pub const ALL: [TunnelingMethod; 3] = [
        TunnelingMethod::None,
        TunnelingMethod::Wigner,
        TunnelingMethod::Eckart,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TunnelingMethod::None => "none",
            TunnelingMethod::Wigner => "Wigner",
            TunnelingMethod::Eckart => "Eckart",
        }
    }

    fn strategy(&self) -> TunnelingStrategy {
        match self {
            TunnelingMethod::None => no_tunneling,
            TunnelingMethod::Wigner => wigner_strategy,
            TunnelingMethod::Eckart => eckart_strategy,
        }
    }

    /// κ(T) for every temperature of tlist
    pub fn correction(
        &self,
        context: &TunnelingContext,
        tlist: &[f64],
    ) -> Result<Vec<f64>, ReactionError> {
        (self.strategy())(context, tlist)
    }
}

impl FromStr for TunnelingMethod {
    type Err = ReactionError;
    /// case insensitive; an empty string means no tunneling
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(TunnelingMethod::None);
        }
        TunnelingMethod::ALL
            .iter()
            .find(|method| method.name().eq_ignore_ascii_case(s))
            .copied()
            .ok_or_else(|| {
                ReactionError::InvalidArgument(format!(
                    "unknown tunneling method '{}', expected one of none, Wigner, Eckart",
                    s
                ))
            })
    }
}

impl fmt::Display for TunnelingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn check_temperatures(tlist: &[f64]) -> Result<(), ReactionError> {
    match tlist.iter().find(|t| !(t.is_finite() && **t > 0.0)) {
        Some(t) => Err(ReactionError::InvalidArgument(format!(
            "temperature must be positive, got {}",
            t
        ))),
        None => Ok(()),
    }
}

fn no_tunneling(_context: &TunnelingContext, tlist: &[f64]) -> Result<Vec<f64>, ReactionError> {
    Ok(vec![1.0; tlist.len()])
}

fn wigner_strategy(context: &TunnelingContext, tlist: &[f64]) -> Result<Vec<f64>, ReactionError> {
    wigner_correction(context.transition_state.frequency()?, tlist)
}

fn eckart_strategy(context: &TunnelingContext, tlist: &[f64]) -> Result<Vec<f64>, ReactionError> {
    let ts = context.transition_state;
    let missing = |side: &str| {
        ReactionError::MissingData(format!(
            "Eckart tunneling through {} needs the ground-state energies of all {}",
            ts.label, side
        ))
    };
    let e0_reactants = context.e0_reactants.ok_or_else(|| missing("reactants"))?;
    let e0_products = context.e0_products.ok_or_else(|| missing("products"))?;
    let barrier = EckartBarrier::new(e0_reactants, ts.e0()?, e0_products, ts.frequency()?)?;
    barrier.correction(tlist, context.eckart)
}

/// Wigner correction for an imaginary frequency of magnitude `frequency` (cm^-1)
pub fn wigner_correction(frequency: f64, tlist: &[f64]) -> Result<Vec<f64>, ReactionError> {
    check_temperatures(tlist)?;
    let h_nu = wavenumber_to_joule(frequency.abs());
    let kappa: Vec<f64> = tlist
        .iter()
        .map(|t| {
            let u = h_nu / (KB * t);
            1.0 + u * u / 24.0
        })
        .collect();
    for (t, k) in tlist.iter().zip(kappa.iter()) {
        if *k > 2.0 {
            warn!(
                "Wigner correction {:.3} at T = {} K: the approximation is not valid here",
                k, t
            );
        }
    }
    Ok(kappa)
}

/// Transmission probability weighted by the Boltzmann factor, in units of x = E/kT with the
/// energy measured from the higher of the two wells.
fn eckart_integrand(e_kt: f64, kt: f64, dv1: f64, alpha1: f64, alpha2: f64) -> f64 {
    let xi = e_kt * kt / dv1;
    let shape = 1.0 / alpha1.sqrt() + 1.0 / alpha2.sqrt();
    let a = 2.0 * (alpha1 * xi).sqrt() / shape;
    let b = 2.0 * ((xi - 1.0) * alpha1 + alpha2).abs().sqrt() / shape;
    let d = 2.0 * (alpha1 * alpha2 - PI * PI / 4.0).abs().sqrt();
    if !(a > 0.0 && b > 0.0) {
        return 0.0;
    }
    (dv1 / kt - e_kt + ln_transmission(a, b, d)).exp()
}

/// ln of 2 sinh(a) sinh(b) / (cosh(a + b) + cosh(d)), finite for arguments of any size
fn ln_transmission(a: f64, b: f64, d: f64) -> f64 {
    let s = a + b;
    let m = s.max(d);
    let ln_denominator =
        m + ((s - m).exp() + (-s - m).exp() + (d - m).exp() + (-d - m).exp()).ln();
    (-(-2.0 * a).exp()).ln_1p() + (-(-2.0 * b).exp()).ln_1p() + s - ln_denominator
}

/// Eckart barrier shape. Energies in J/mol; dv1 <= dv2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EckartBarrier {
    /// barrier height above the higher well
    pub dv1: f64,
    /// barrier height above the lower well
    pub dv2: f64,
    pub alpha1: f64,
    pub alpha2: f64,
}

impl EckartBarrier {
    /// builds the barrier from summed ground-state energies (J/mol) and the imaginary
    /// frequency (cm^-1)
    pub fn new(
        e0_reactants: f64,
        e0_ts: f64,
        e0_products: f64,
        frequency: f64,
    ) -> Result<Self, ReactionError> {
        let e0 = e0_reactants.max(e0_products);
        let dv1 = e0_ts - e0;
        let dv2 = e0_ts - e0_reactants.min(e0_products);
        if !(dv1 > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "Eckart barrier must lie above both wells, got dV1 = {} J/mol",
                dv1
            )));
        }
        let h_nu = wavenumber_to_joule(frequency.abs()) * NA;
        if !(h_nu > 0.0) {
            return Err(ReactionError::InvalidArgument(format!(
                "Eckart barrier needs a nonzero imaginary frequency, got {}",
                frequency
            )));
        }
        Ok(Self {
            dv1,
            dv2,
            alpha1: 2.0 * PI * dv1 / h_nu,
            alpha2: 2.0 * PI * dv2 / h_nu,
        })
    }

    fn integrand(&self, x: f64, kt: f64) -> f64 {
        eckart_integrand(x, kt, self.dv1, self.alpha1, self.alpha2)
    }

    /// composite Simpson estimate of κ(t) with a fixed even number of panels
    pub fn integrate_fixed(&self, t: f64, panels: usize, upper_limit_kt: f64) -> f64 {
        let panels = panels.max(2);
        let panels = panels + panels % 2;
        let kt = R * t;
        let upper = self.dv1 / kt + upper_limit_kt;
        let h = upper / panels as f64;
        let mut sum = self.integrand(0.0, kt) + self.integrand(upper, kt);
        for i in 1..panels {
            let weight = if i % 2 == 1 { 4.0 } else { 2.0 };
            sum += weight * self.integrand(i as f64 * h, kt);
        }
        sum * h / 3.0
    }

    /// κ(t) together with the number of panels of the accepted estimate
    pub fn kappa_with_panels(
        &self,
        t: f64,
        settings: &EckartSettings,
    ) -> Result<(f64, usize), ReactionError> {
        let mut panels = settings.initial_panels;
        let mut previous = self.integrate_fixed(t, panels, settings.upper_limit_kt);
        for _ in 0..settings.max_doublings {
            panels *= 2;
            let current = self.integrate_fixed(t, panels, settings.upper_limit_kt);
            if !current.is_finite() {
                return Err(ReactionError::Numerical(format!(
                    "Eckart integral is not finite at T = {} K",
                    t
                )));
            }
            if (current - previous).abs() <= settings.rel_tol * current.abs() {
                debug!("Eckart integral at T = {} K converged with {} panels", t, panels);
                return Ok((current, panels));
            }
            previous = current;
        }
        Err(ReactionError::Numerical(format!(
            "Eckart integral at T = {} K did not converge to {} after {} panel doublings",
            t, settings.rel_tol, settings.max_doublings
        )))
    }

    pub fn kappa(&self, t: f64, settings: &EckartSettings) -> Result<f64, ReactionError> {
        self.kappa_with_panels(t, settings).map(|(kappa, _)| kappa)
    }

    /// κ(T) for every temperature of tlist
    pub fn correction(
        &self,
        tlist: &[f64],
        settings: &EckartSettings,
    ) -> Result<Vec<f64>, ReactionError> {
        check_temperatures(tlist)?;
        tlist.iter().map(|t| self.kappa(*t, settings)).collect()
    }
}
