/////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// TESTS
//////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
#[cfg(test)]
mod tests {
    use crate::Kinetics::kinetics::{Arrhenius, ThirdBody};
    use crate::Kinetics::kinetics_api::{KineticsCalculator, KineticsEnum};
    use crate::Kinetics::reaction::{EquilibriumConstantType, RateSource, Reaction};
    use crate::Kinetics::reaction_errors::ErrorKind;
    use crate::Kinetics::reaction_model::ReactionModel;
    use crate::Kinetics::transition_state::TransitionState;
    use crate::Kinetics::tunneling::TunnelingMethod;
    use crate::Thermodynamics::DBhandlers::ConstCpData::ConstCpData;
    use crate::Thermodynamics::species::{Species, SpeciesId, SpeciesRegistry};
    use crate::Utils::constants::R;
    use crate::Utils::logger::init_default_logger;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    fn arrhenius(a: f64, ea: f64) -> RateSource {
        RateSource::Fitted(KineticsEnum::Arrhenius(Arrhenius::new(a, 0.0, ea)))
    }

    /// species A, B, C with constant Cp thermo; all of them in the model
    fn network() -> (SpeciesRegistry, ReactionModel, [SpeciesId; 3]) {
        let mut registry = SpeciesRegistry::new();
        let a = registry
            .add(Species::new("A").with_thermo(ConstCpData::new(0.0, 100.0, 30.0)))
            .unwrap();
        let b = registry
            .add(Species::new("B").with_thermo(ConstCpData::new(-15000.0, 95.0, 30.0)))
            .unwrap();
        let c = registry
            .add(Species::new("C").with_thermo(ConstCpData::new(5000.0, 120.0, 25.0)))
            .unwrap();
        let mut model = ReactionModel::new();
        for id in [a, b, c] {
            model.add_species(id).unwrap();
        }
        (registry, model, [a, b, c])
    }

    #[test]
    fn test_stoichiometry_matrix_shape_and_column_sums() {
        let (_, mut model, [a, b, c]) = network();
        model
            .add_reaction(Reaction::new(vec![a], vec![b], true, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        model
            .add_reaction(Reaction::new(vec![a], vec![b, c], false, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        let s = model.generate_stoichiometry_matrix();
        assert_eq!(s.shape(), (3, 2));
        assert_eq!(s[(0, 0)], -1);
        assert_eq!(s[(1, 0)], 1);
        assert_eq!(s[(2, 0)], 0);
        assert_eq!(s[(2, 1)], 1);
        // the first reaction keeps the number of molecules, the second does not
        assert_eq!(s.column(0).sum(), 0);
        assert_eq!(s.column(1).sum(), 1);
    }

    #[test]
    fn test_stoichiometry_matrix_follows_model_changes() {
        let (mut registry, mut model, [a, b, _]) = network();
        model
            .add_reaction(Reaction::new(vec![a, a], vec![b], true, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        assert_eq!(model.generate_stoichiometry_matrix().shape(), (3, 1));
        let d = registry.add(Species::new("D")).unwrap();
        model.add_species(d).unwrap();
        model
            .add_reaction(Reaction::new(vec![b], vec![d], false, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        let s = model.generate_stoichiometry_matrix();
        assert_eq!(s.shape(), (4, 2));
        assert_eq!(s[(0, 0)], -2);
        assert_eq!(s[(3, 1)], 1);
    }

    #[test]
    fn test_closure_and_uniqueness() {
        let (mut registry, mut model, [a, b, _]) = network();
        let outsider = registry.add(Species::new("X")).unwrap();
        let stray = Reaction::new(vec![a], vec![outsider], false, arrhenius(1.0, 0.0)).unwrap();
        let e = model.add_reaction(stray).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert!(model.is_empty());

        let e = model.add_species(a).unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);

        model
            .add_reaction(Reaction::new(vec![a], vec![b], false, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        model
            .add_reaction(
                Reaction::new(vec![b], vec![a], false, arrhenius(1.0, 0.0))
                    .unwrap()
                    .with_index(5),
            )
            .unwrap();
        model
            .add_reaction(Reaction::new(vec![a], vec![b], false, arrhenius(2.0, 0.0)).unwrap())
            .unwrap();
        let indices: Vec<Option<usize>> = model.reactions().iter().map(|r| r.index).collect();
        assert_eq!(indices, vec![Some(0), Some(5), Some(6)]);
        let e = model
            .add_reaction(
                Reaction::new(vec![b], vec![a], false, arrhenius(1.0, 0.0))
                    .unwrap()
                    .with_index(5),
            )
            .unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
        assert_eq!(model.len(), 3);
        assert_eq!(model.species_index(b), Some(1));
        assert_eq!(model.species_index(outsider), None);
    }

    #[test]
    fn test_zero_concentrations_give_zero_rates() {
        let (registry, mut model, [a, b, c]) = network();
        model
            .add_reaction(Reaction::new(vec![a], vec![b], true, arrhenius(1.0e6, 50000.0)).unwrap())
            .unwrap();
        model
            .add_reaction(Reaction::new(vec![a, b], vec![c], false, arrhenius(1.0e3, 0.0)).unwrap())
            .unwrap();
        for (t, p) in [(300.0, 1e3), (1000.0, 1e5), (2500.0, 1e7)] {
            let empty = model
                .get_reaction_rates(&registry, t, p, &HashMap::new())
                .unwrap();
            assert!(empty.iter().all(|r| *r == 0.0));
            let zeros = HashMap::from([(a, 0.0), (b, 0.0), (c, 0.0)]);
            let rates = model.get_reaction_rates(&registry, t, p, &zeros).unwrap();
            assert_eq!(rates.len(), 3);
            assert!(rates.iter().all(|r| *r == 0.0));
        }
    }

    #[test]
    fn test_irreversible_first_order_rate() {
        let (registry, mut model, [a, b, _]) = network();
        let reaction = Reaction::new(vec![a], vec![b], false, arrhenius(2.5e3, 10000.0)).unwrap();
        let k = reaction.get_rate_coefficient(&registry, 800.0, 1e5).unwrap();
        model.add_reaction(reaction).unwrap();
        let c = 0.37;
        let rates = model
            .get_reaction_rates(&registry, 800.0, 1e5, &HashMap::from([(a, c)]))
            .unwrap();
        assert_eq!(rates[0], -k * c);
        assert_eq!(rates[1], k * c);
        assert_eq!(rates[2], 0.0);
    }

    #[test]
    fn test_second_order_rate_uses_multiplicity() {
        let (registry, mut model, [a, b, _]) = network();
        model
            .add_reaction(Reaction::new(vec![a, a], vec![b], false, arrhenius(3.0, 0.0)).unwrap())
            .unwrap();
        let rates = model
            .get_reaction_rates(&registry, 600.0, 1e5, &HashMap::from([(a, 2.0)]))
            .unwrap();
        // r = k [A]^2 = 12, A is consumed twice per event
        assert_relative_eq!(rates[0], -24.0, max_relative = 1e-14);
        assert_relative_eq!(rates[1], 12.0, max_relative = 1e-14);
    }

    #[test]
    fn test_reversible_reaction_at_equilibrium() {
        let (registry, mut model, [a, b, _]) = network();
        let reaction = Reaction::new(vec![a], vec![b], true, arrhenius(1.0e5, 30000.0)).unwrap();
        let t = 900.0;
        let kc = reaction
            .get_equilibrium_constant(&registry, &[t], EquilibriumConstantType::Kc)
            .unwrap()[0];
        let kf = reaction.get_rate_coefficient(&registry, t, 1e5).unwrap();
        model.add_reaction(reaction).unwrap();
        let c_a = 1.5;
        let at_equilibrium = HashMap::from([(a, c_a), (b, kc * c_a)]);
        let rates = model
            .get_reaction_rates(&registry, t, 1e5, &at_equilibrium)
            .unwrap();
        assert!(rates[0].abs() < 1e-9 * kf * c_a);
        // only products present: the reaction runs backwards
        let rates = model
            .get_reaction_rates(&registry, t, 1e5, &HashMap::from([(b, 1.0)]))
            .unwrap();
        assert_relative_eq!(rates[0], kf / kc, max_relative = 1e-12);
        assert_relative_eq!(rates[1], -kf / kc, max_relative = 1e-12);
    }

    #[test]
    fn test_missing_product_of_irreversible_reaction_is_zero() {
        let (registry, mut model, [a, b, c]) = network();
        model
            .add_reaction(Reaction::new(vec![a], vec![b, c], false, arrhenius(4.0, 0.0)).unwrap())
            .unwrap();
        let rates = model
            .get_reaction_rates(&registry, 500.0, 1e5, &HashMap::from([(a, 1.0)]))
            .unwrap();
        assert_eq!(rates.as_slice(), &[-4.0, 4.0, 4.0]);
    }

    #[test]
    fn test_first_failure_aborts_rates() {
        let (registry, mut model, [a, b, c]) = network();
        model
            .add_reaction(Reaction::new(vec![a], vec![b], false, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        // transition state without a ground-state energy
        let ts = TransitionState::new("TS").with_thermo(ConstCpData::new(80000.0, 50.0, 0.0));
        model
            .add_reaction(
                Reaction::new(
                    vec![b],
                    vec![c],
                    false,
                    RateSource::Tst {
                        transition_state: ts,
                        tunneling: TunnelingMethod::None,
                    },
                )
                .unwrap(),
            )
            .unwrap();
        let e = model
            .get_reaction_rates(&registry, 1000.0, 1e5, &HashMap::from([(a, 1.0), (b, 1.0)]))
            .unwrap_err();
        assert_eq!(e.kind(), ErrorKind::MissingData);
        assert!(e.to_string().contains("B => C"));
        // the broken reaction is not evaluated while B is absent
        assert!(
            model
                .get_reaction_rates(&registry, 1000.0, 1e5, &HashMap::from([(a, 1.0)]))
                .is_ok()
        );
    }

    #[test]
    fn test_pressure_dependent_kinetics_use_effective_pressure() {
        let mut registry = SpeciesRegistry::new();
        let a = registry.add(Species::new("A")).unwrap();
        let b = registry.add(Species::new("B")).unwrap();
        let n2 = registry.add(Species::new("N2")).unwrap();
        let mut model = ReactionModel::new();
        for id in [a, b, n2] {
            model.add_species(id).unwrap();
        }
        let mut third_body = ThirdBody::new(Arrhenius::new(1.0e3, 0.0, 0.0));
        third_body.efficiencies = HashMap::from([("N2".to_string(), 2.0)]);
        let kinetics = KineticsEnum::ThirdBody(third_body);
        let reaction = Reaction::new(vec![a], vec![b], false, RateSource::Fitted(kinetics.clone()))
            .unwrap();
        assert!(reaction.is_pressure_dependent());
        model.add_reaction(reaction).unwrap();
        let (t, p) = (1000.0, 1e5);
        let rates = model
            .get_reaction_rates(&registry, t, p, &HashMap::from([(a, 1.0), (n2, 1.0)]))
            .unwrap();
        // equal amounts of A (efficiency 1) and N2 (efficiency 2)
        let k = kinetics.get_rate_coefficient(t, 1.5 * p).unwrap();
        assert_relative_eq!(rates[0], -k, max_relative = 1e-12);
        assert_relative_eq!(rates[1], k, max_relative = 1e-12);
    }

    #[test]
    fn test_invalid_temperature() {
        let (registry, model, _) = network();
        let e = model
            .get_reaction_rates(&registry, 0.0, 1e5, &HashMap::new())
            .unwrap_err();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_tables() {
        init_default_logger();
        let (registry, mut model, [a, b, c]) = network();
        model
            .add_reaction(Reaction::new(vec![a], vec![b, c], true, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        let table = model.stoichiometry_table(&registry);
        assert_eq!(table.len(), 4);
        let rates = model
            .get_reaction_rates(&registry, 1000.0, 1e5, &HashMap::from([(a, 1.0)]))
            .unwrap();
        let table = model.rates_table(&registry, &rates);
        assert_eq!(table.len(), 4);
        model.pretty_print(&registry);
    }

    /// A <=> B with ΔG = ΔH = dh and ΔS = 0 at every temperature
    fn uphill_pair(dh: f64) -> (SpeciesRegistry, ReactionModel, [SpeciesId; 2]) {
        let mut registry = SpeciesRegistry::new();
        let a = registry
            .add(Species::new("A").with_thermo(ConstCpData::new(0.0, 100.0, 30.0)))
            .unwrap();
        let b = registry
            .add(Species::new("B").with_thermo(ConstCpData::new(dh, 100.0, 30.0)))
            .unwrap();
        let mut model = ReactionModel::new();
        model.add_species(a).unwrap();
        model.add_species(b).unwrap();
        model
            .add_reaction(Reaction::new(vec![a], vec![b], true, arrhenius(1.0, 0.0)).unwrap())
            .unwrap();
        (registry, model, [a, b])
    }

    #[test]
    fn test_overflowing_reverse_rate_is_numerical_error() {
        let (registry, model, [a, b]) = uphill_pair(2.0e6);
        let e = model
            .get_reaction_rates(&registry, 300.0, 1e5, &HashMap::from([(a, 1.0), (b, 1.0)]))
            .unwrap_err();
        assert_eq!(e.kind(), ErrorKind::Numerical);
        assert!(e.to_string().contains("A <=> B"));
    }

    #[test]
    fn test_reverse_rate_survives_underflowing_kc() {
        // Kc = exp(-760) is below the smallest f64, kf/Kc [B] is not
        let t = 300.0;
        let (registry, model, [_, b]) = uphill_pair(760.0 * R * t);
        let reaction = &model.reactions()[0];
        let kc = reaction
            .get_equilibrium_constant(&registry, &[t], EquilibriumConstantType::Kc)
            .unwrap()[0];
        assert_eq!(kc, 0.0);
        let ln_kc = reaction
            .get_ln_equilibrium_constant(&registry, &[t], EquilibriumConstantType::Kc)
            .unwrap()[0];
        let c_b = 1e-320;
        let rates = model
            .get_reaction_rates(&registry, t, 1e5, &HashMap::from([(b, c_b)]))
            .unwrap();
        let expected = (-ln_kc + f64::ln(c_b)).exp();
        assert!(expected.is_finite() && expected > 1e9);
        assert_relative_eq!(rates[0], expected, max_relative = 1e-9);
        assert_relative_eq!(rates[1], -expected, max_relative = 1e-9);
    }

    #[test]
    fn test_tst_reaction_in_network() {
        let t = 1000.0;
        let c = 0.8;
        for tunneling in [TunnelingMethod::Wigner, TunnelingMethod::Eckart] {
            let mut registry = SpeciesRegistry::new();
            let a = registry
                .add(
                    Species::new("A")
                        .with_thermo(ConstCpData::new(0.0, 250.0, 40.0))
                        .with_e0(0.0),
                )
                .unwrap();
            let b = registry
                .add(
                    Species::new("B")
                        .with_thermo(ConstCpData::new(-20000.0, 245.0, 40.0))
                        .with_e0(-20000.0),
                )
                .unwrap();
            let ts = TransitionState::new("TS")
                .with_thermo(ConstCpData::new(48000.0, 240.0, 38.0))
                .with_e0(50000.0)
                .with_frequency(-1500.0);
            let source = RateSource::Tst {
                transition_state: ts.clone(),
                tunneling,
            };
            let reaction = Reaction::new(vec![a], vec![b], false, source).unwrap();
            let kf = reaction
                .calculate_tst_rate_coefficient(&registry, &[t], &ts, tunneling)
                .unwrap()[0];
            let plain = reaction
                .calculate_tst_rate_coefficient(&registry, &[t], &ts, TunnelingMethod::None)
                .unwrap()[0];
            assert!(kf > plain);
            let mut model = ReactionModel::new();
            model.add_species(a).unwrap();
            model.add_species(b).unwrap();
            model.add_reaction(reaction).unwrap();
            let rates = model
                .get_reaction_rates(&registry, t, 1e5, &HashMap::from([(a, c)]))
                .unwrap();
            assert_relative_eq!(rates[0], -kf * c, max_relative = 1e-12);
            assert_relative_eq!(rates[1], kf * c, max_relative = 1e-12);
        }
    }
}
