/// errors of reaction computations
pub mod reaction_errors;
/// common interface of fitted kinetics models and the enum over them
/// # Examples
/// ```
/// use KiRate::Kinetics::kinetics::{Arrhenius, Troe};
/// use KiRate::Kinetics::kinetics_api::KineticsCalculator;
/// let troe = Troe::new(
///     Arrhenius::new(1.39e10, -0.534, 2243.0),
///     Arrhenius::new(2.62e21, -4.76, 10210.0),
///     0.783, 74.0, 2941.0, Some(6964.0),
/// );
/// let k = troe.get_rate_coefficient(1000.0, 1e5).unwrap();
/// assert!((k / 2.87338709e7 - 1.0).abs() < 1e-4);
/// ```
pub mod kinetics_api;
/// Arrhenius, third-body, Lindemann and Troe rate coefficients
pub mod kinetics;
/// transition state data used by transition state theory
pub mod transition_state;
/// Wigner and Eckart tunneling corrections
pub mod tunneling;
/// thermochemistry, equilibrium constants and TST rate coefficients of one reaction
pub mod reaction;
/// stoichiometry matrix and species rates of a reaction network
pub mod reaction_model;
#[cfg(test)]
mod reaction_model_tests;
