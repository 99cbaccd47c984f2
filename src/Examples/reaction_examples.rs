use crate::Kinetics::kinetics::{Arrhenius, Troe};
use crate::Kinetics::reaction::{EquilibriumConstantType, RateSource, Reaction};
use crate::Kinetics::reaction_errors::ReactionError;
use crate::Kinetics::reaction_model::ReactionModel;
use crate::Kinetics::transition_state::TransitionState;
use crate::Kinetics::tunneling::TunnelingMethod;
use crate::Thermodynamics::DBhandlers::ConstCpData::ConstCpData;
use crate::Thermodynamics::DBhandlers::NASAdata::NASAdata;
use crate::Thermodynamics::DBhandlers::thermo_api::ThermoError;
use crate::Thermodynamics::species::{Species, SpeciesRegistry};
use log::error;
use prettytable::{Cell, Row, Table};
use std::collections::HashMap;

// GRI-Mech 3.0 polynomials
fn h2() -> Result<NASAdata, ThermoError> {
    NASAdata::new(vec![
        200.0,
        1000.0,
        3500.0,
        2.34433112E+00,
        7.98052075E-03,
        -1.94781510E-05,
        2.01572094E-08,
        -7.37611761E-12,
        -9.17935173E+02,
        6.83010238E-01,
        3.33727920E+00,
        -4.94024731E-05,
        4.99456778E-07,
        -1.79566394E-10,
        2.00255376E-14,
        -9.50158922E+02,
        -3.20502331E+00,
    ])
}

fn o2() -> Result<NASAdata, ThermoError> {
    NASAdata::new(vec![
        200.0,
        1000.0,
        3500.0,
        3.78245636E+00,
        -2.99673416E-03,
        9.84730201E-06,
        -9.68129509E-09,
        3.24372837E-12,
        -1.06394356E+03,
        3.65767573E+00,
        3.28253784E+00,
        1.48308754E-03,
        -7.57966669E-07,
        2.09470555E-10,
        -2.16717794E-14,
        -1.08845772E+03,
        5.45323129E+00,
    ])
}

fn h2o() -> Result<NASAdata, ThermoError> {
    NASAdata::new(vec![
        200.0,
        1000.0,
        3500.0,
        4.19864056E+00,
        -2.03643410E-03,
        6.52040211E-06,
        -5.48797062E-09,
        1.77197817E-12,
        -3.02937267E+04,
        -8.49032208E-01,
        3.03399249E+00,
        2.17691804E-03,
        -1.64072518E-07,
        -9.70419870E-11,
        1.68200992E-14,
        -3.00042971E+04,
        4.96677010E+00,
    ])
}

/// thermochemistry and equilibrium constants of 2 H2O <=> 2 H2 + O2
fn water_dissociation() -> Result<(), ReactionError> {
    let mut registry = SpeciesRegistry::new();
    let h2o = registry.add(Species::new("H2O").with_thermo(h2o()?))?;
    let h2 = registry.add(Species::new("H2").with_thermo(h2()?))?;
    let o2 = registry.add(Species::new("O2").with_thermo(o2()?))?;
    let kinetics = Arrhenius::new(1.0, 0.0, 0.0);
    let reaction = Reaction::new(
        vec![h2o, h2o],
        vec![h2, h2, o2],
        true,
        RateSource::Fitted(kinetics.into()),
    )?;
    let tlist = [300.0, 1000.0, 2000.0, 3000.0];
    let dh = reaction.get_enthalpy_of_reaction(&registry, &tlist)?;
    let ds = reaction.get_entropy_of_reaction(&registry, &tlist)?;
    let dg = reaction.get_free_energy_of_reaction(&registry, &tlist)?;
    let kp = reaction.get_equilibrium_constant(&registry, &tlist, EquilibriumConstantType::Kp)?;
    let mut table = Table::new();
    table.add_row(Row::new(vec![
        Cell::new("T, K"),
        Cell::new("dH, J/mol"),
        Cell::new("dS, J/(mol K)"),
        Cell::new("dG, J/mol"),
        Cell::new("Kp, Pa"),
    ]));
    for i in 0..tlist.len() {
        table.add_row(Row::new(vec![
            Cell::new(&tlist[i].to_string()),
            Cell::new(&format!("{:.1}", dh[i])),
            Cell::new(&format!("{:.3}", ds[i])),
            Cell::new(&format!("{:.1}", dg[i])),
            Cell::new(&format!("{:.4e}", kp[i])),
        ]));
    }
    println!("{}", reaction.label(&registry));
    table.printstd();
    Ok(())
}

/// TST rate coefficient of a hydrogen abstraction with and without tunneling
fn tst_with_tunneling() -> Result<(), ReactionError> {
    let mut registry = SpeciesRegistry::new();
    let h = registry.add(
        Species::new("H")
            .with_thermo(ConstCpData::new(217998.0, 114.7, 20.8))
            .with_e0(216000.0),
    )?;
    let ch4 = registry.add(
        Species::new("CH4")
            .with_thermo(ConstCpData::new(-74600.0, 186.3, 35.7))
            .with_e0(-66600.0),
    )?;
    let h2 = registry.add(
        Species::new("H2")
            .with_thermo(ConstCpData::new(0.0, 130.7, 28.8))
            .with_e0(8500.0),
    )?;
    let ch3 = registry.add(
        Species::new("CH3")
            .with_thermo(ConstCpData::new(145700.0, 194.2, 38.7))
            .with_e0(150000.0),
    )?;
    let ts = TransitionState::new("[H..H..CH3]")
        .with_thermo(ConstCpData::new(198000.0, 250.0, 50.0))
        .with_e0(201000.0)
        .with_frequency(-1400.0);
    let reaction = Reaction::new(
        vec![h, ch4],
        vec![h2, ch3],
        true,
        RateSource::Tst {
            transition_state: ts.clone(),
            tunneling: TunnelingMethod::Eckart,
        },
    )?;
    let tlist = [300.0, 500.0, 1000.0, 1500.0];
    let mut table = Table::new();
    let mut header = vec![Cell::new("tunneling")];
    header.extend(tlist.iter().map(|t| Cell::new(&format!("k({} K)", t))));
    table.add_row(Row::new(header));
    for method in TunnelingMethod::ALL {
        let k = reaction.calculate_tst_rate_coefficient(&registry, &tlist, &ts, method)?;
        let mut row = vec![Cell::new(method.name())];
        row.extend(k.iter().map(|k| Cell::new(&format!("{:.4e}", k))));
        table.add_row(Row::new(row));
    }
    println!("{}, m^3/(mol s)", reaction.label(&registry));
    table.printstd();
    let kappa = reaction.calculate_eckart_tunneling_correction(&registry, &tlist)?;
    println!("Eckart correction: {:?}", kappa);
    Ok(())
}

/// rates of change in a small network with a falloff reaction
fn network_rates() -> Result<(), ReactionError> {
    let mut registry = SpeciesRegistry::new();
    let a = registry.add(Species::new("A").with_thermo(ConstCpData::new(0.0, 100.0, 30.0)))?;
    let b = registry.add(Species::new("B").with_thermo(ConstCpData::new(-20000.0, 90.0, 30.0)))?;
    let c = registry.add(Species::new("C").with_thermo(ConstCpData::new(10000.0, 120.0, 30.0)))?;
    let m = registry.add(Species::new("N2").with_thermo(ConstCpData::new(0.0, 191.6, 29.1)))?;
    let mut model = ReactionModel::new();
    for id in [a, b, c, m] {
        model.add_species(id)?;
    }
    let isomerisation = Reaction::new(
        vec![a],
        vec![b],
        true,
        RateSource::Fitted(Arrhenius::new(1.0e8, 0.0, 80000.0).into()),
    )?;
    let mut recombination = Troe::new(
        Arrhenius::new(1.39e10, -0.534, 2243.0),
        Arrhenius::new(2.62e21, -4.76, 10210.0),
        0.783,
        74.0,
        2941.0,
        Some(6964.0),
    );
    recombination.efficiencies = HashMap::from([("N2".to_string(), 0.7)]);
    let association = Reaction::new(
        vec![a, c],
        vec![b],
        false,
        RateSource::Fitted(recombination.into()),
    )?;
    model.add_reaction(isomerisation)?;
    model.add_reaction(association)?;
    model.pretty_print(&registry);
    let concentrations = HashMap::from([(a, 2.0), (c, 1.0), (m, 10.0)]);
    let rates = model.get_reaction_rates(&registry, 1000.0, 1e5, &concentrations)?;
    model.rates_table(&registry, &rates).printstd();
    Ok(())
}

pub fn reaction_examples(task: usize) {
    let result = match task {
        0 => water_dissociation(),
        1 => tst_with_tunneling(),
        2 => network_rates(),
        _ => Err(ReactionError::InvalidArgument(format!(
            "no example number {}",
            task
        ))),
    };
    if let Err(e) = result {
        error!("example {} failed: {}", task, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_examples_run() {
        assert!(water_dissociation().is_ok());
        assert!(tst_with_tunneling().is_ok());
        assert!(network_rates().is_ok());
    }
}
