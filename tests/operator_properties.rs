use std::sync::Arc;

use proptest::collection::vec;
use proptest::prelude::*;
use spl_moea::model::{ConstraintOracle, FeatureModel};
use spl_moea::operators::{
    BitFlipMutation, CrossoverParams, MutationParams, RepairConfig, RepairStatus,
    SatAwareMutation, SinglePointCrossover,
};
use spl_moea::random::create_rng;
use spl_moea::Chromosome;

/// Two parents of a shared length in `1..64`.
fn parents() -> impl Strategy<Value = (Vec<bool>, Vec<bool>)> {
    (1usize..64).prop_flat_map(|n| (vec(any::<bool>(), n), vec(any::<bool>(), n)))
}

/// A random CNF model plus a chromosome of matching length.
fn model_and_chromosome() -> impl Strategy<Value = (FeatureModel, Vec<bool>)> {
    (1usize..12).prop_flat_map(|n| {
        let literal = (1..=n as i32, any::<bool>()).prop_map(|(v, neg)| if neg { -v } else { v });
        (
            vec(vec(literal, 1..4), 1..10),
            vec(any::<bool>(), n),
        )
            .prop_map(move |(clauses, genes)| {
                let model = FeatureModel::from_dimacs_clauses(n, clauses)
                    .expect("generated literals are in range");
                (model, genes)
            })
    })
}

/// Like [`model_and_chromosome`], with every clause extended so that the
/// chromosome satisfies it.
fn satisfied_model_and_chromosome() -> impl Strategy<Value = (FeatureModel, Vec<bool>)> {
    (1usize..12).prop_flat_map(|n| {
        let literal = (1..=n as i32, any::<bool>()).prop_map(|(v, neg)| if neg { -v } else { v });
        (
            vec(vec(literal, 1..4), 1..10),
            vec(any::<bool>(), n),
            0..n,
        )
            .prop_map(move |(mut clauses, genes, anchor)| {
                let witness = if genes[anchor] {
                    anchor as i32 + 1
                } else {
                    -(anchor as i32 + 1)
                };
                for clause in &mut clauses {
                    let holds = clause
                        .iter()
                        .any(|&l| genes[l.unsigned_abs() as usize - 1] == (l > 0));
                    if !holds {
                        clause.push(witness);
                    }
                }
                let model = FeatureModel::from_dimacs_clauses(n, clauses)
                    .expect("generated literals are in range");
                (model, genes)
            })
    })
}

proptest! {
    #[test]
    fn crossover_preserves_length_and_alleles(
        (a, b) in parents(),
        p in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let crossover = SinglePointCrossover::new(CrossoverParams::new(p)).unwrap();
        let p1 = Chromosome::new(a);
        let p2 = Chromosome::new(b);
        let (c1, c2) = crossover.execute(&p1, &p2, &mut create_rng(seed)).unwrap();

        prop_assert_eq!(c1.len(), p1.len());
        prop_assert_eq!(c2.len(), p1.len());
        for i in 0..p1.len() {
            let mut parents = [p1[i], p2[i]];
            let mut children = [c1[i], c2[i]];
            parents.sort();
            children.sort();
            prop_assert_eq!(parents, children);
        }
    }

    #[test]
    fn crossover_always_applied_exchanges_tails((a, b) in parents(), seed in any::<u64>()) {
        prop_assume!(a.len() >= 2);
        let crossover = SinglePointCrossover::new(CrossoverParams::new(1.0)).unwrap();
        let p1 = Chromosome::new(a.clone());
        let p2 = Chromosome::new(b.clone());
        let (c1, c2) = crossover.execute(&p1, &p2, &mut create_rng(seed)).unwrap();

        let n = a.len();
        let found = (1..n).any(|k| {
            let e1: Vec<bool> = a[..k].iter().chain(&b[k..]).copied().collect();
            let e2: Vec<bool> = b[..k].iter().chain(&a[k..]).copied().collect();
            c1.as_slice() == e1.as_slice() && c2.as_slice() == e2.as_slice()
        });
        prop_assert!(found);
    }

    #[test]
    fn crossover_never_applied_copies_parents((a, b) in parents(), seed in any::<u64>()) {
        let crossover = SinglePointCrossover::new(CrossoverParams::new(0.0)).unwrap();
        let p1 = Chromosome::new(a);
        let p2 = Chromosome::new(b);
        let (c1, c2) = crossover.execute(&p1, &p2, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(c1, p1);
        prop_assert_eq!(c2, p2);
    }

    #[test]
    fn bit_flip_extremes(genes in vec(any::<bool>(), 1..128), seed in any::<u64>()) {
        let original = Chromosome::new(genes);
        let mut rng = create_rng(seed);

        let mut untouched = original.clone();
        let flips = BitFlipMutation::new(MutationParams::new(0.0))
            .unwrap()
            .execute(&mut untouched, &mut rng)
            .unwrap();
        prop_assert_eq!(flips, 0);
        prop_assert_eq!(&untouched, &original);

        let mut inverted = original.clone();
        let flips = BitFlipMutation::new(MutationParams::new(1.0))
            .unwrap()
            .execute(&mut inverted, &mut rng)
            .unwrap();
        prop_assert_eq!(flips, original.len());
        prop_assert_eq!(inverted, original.complement());
    }

    #[test]
    fn sat_aware_repair_is_bounded_and_sound(
        (model, genes) in model_and_chromosome(),
        p in 0.0f64..=1.0,
        max_attempts in 0usize..20,
        noise in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let model = Arc::new(model);
        let n = model.feature_count();
        let repair = RepairConfig::default()
            .with_max_attempts(max_attempts)
            .with_noise(noise);
        let mutation =
            SatAwareMutation::new(MutationParams::new(p), n, model.clone(), repair).unwrap();

        let mut chromosome = Chromosome::new(genes);
        let outcome = mutation.execute(&mut chromosome, &mut create_rng(seed)).unwrap();

        prop_assert!(outcome.repair_attempts <= max_attempts);
        prop_assert_eq!(chromosome.len(), n);
        match outcome.status {
            RepairStatus::Satisfied => {
                prop_assert_eq!(outcome.repair_attempts, 0);
                prop_assert!(model.is_satisfiable(&chromosome));
            }
            RepairStatus::Repaired => {
                prop_assert!(outcome.repair_attempts > 0);
                prop_assert!(model.is_satisfiable(&chromosome));
            }
            RepairStatus::BoundExceeded => {
                prop_assert!(!model.is_satisfiable(&chromosome));
            }
            RepairStatus::Unchecked => prop_assert!(false, "SAT-aware mutation always checks"),
        }
    }

    #[test]
    fn sat_aware_keeps_valid_input_without_mutation(
        (model, genes) in satisfied_model_and_chromosome(),
        seed in any::<u64>(),
    ) {
        let original = Chromosome::new(genes);
        prop_assert!(model.is_satisfiable(&original));

        let model = Arc::new(model);
        let mutation = SatAwareMutation::new(
            MutationParams::new(0.0),
            model.feature_count(),
            model.clone(),
            RepairConfig::default(),
        )
        .unwrap();

        let mut chromosome = original.clone();
        let outcome = mutation.execute(&mut chromosome, &mut create_rng(seed)).unwrap();
        prop_assert_eq!(outcome.status, RepairStatus::Satisfied);
        prop_assert_eq!(outcome.repair_attempts, 0);
        prop_assert_eq!(chromosome, original);
    }
}
