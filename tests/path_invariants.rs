//! Property tests for the path invariants held across a whole run.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use u_evopath::ga::operators::{
    interior_swap_mutation, is_valid_path, prefix_order_crossover, random_path,
};
use u_evopath::ga::{Evolution, GaConfig, GaProblem, GaRunner, Individual};
use u_evopath::graph::DistanceMatrix;
use u_evopath::path::{exhaustive_optimum, Path, PathProblem};

/// `(node_count, start, end)` with distinct endpoints.
fn endpoints(max_nodes: usize) -> impl Strategy<Value = (usize, usize, usize)> {
    (2..=max_nodes)
        .prop_flat_map(|n| (Just(n), 0..n, 0..n))
        .prop_filter("start and end must differ", |(_, s, e)| s != e)
}

/// A problem on a random asymmetric graph.
fn arb_problem(max_nodes: usize) -> impl Strategy<Value = PathProblem> {
    endpoints(max_nodes).prop_flat_map(|(n, s, e)| {
        prop::collection::vec(0.0f64..100.0, n * n).prop_map(move |data| {
            let dm = DistanceMatrix::from_data(n, data).expect("n*n weights");
            PathProblem::new(dm, s, e).expect("valid endpoints")
        })
    })
}

fn assert_population_valid(population: &[Path], problem: &PathProblem) {
    for path in population {
        assert!(
            is_valid_path(
                path.nodes(),
                problem.node_count(),
                problem.start(),
                problem.end()
            ),
            "invalid path {path:?}"
        );
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn random_path_is_valid((n, s, e) in endpoints(40), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let path = random_path(n, s, e, &mut rng);
        prop_assert!(is_valid_path(&path, n, s, e), "{:?}", path);
    }

    #[test]
    fn crossover_child_is_valid((n, s, e) in endpoints(40), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p1 = random_path(n, s, e, &mut rng);
        let p2 = random_path(n, s, e, &mut rng);
        let child = prefix_order_crossover(&p1, &p2, &mut rng);
        prop_assert!(is_valid_path(&child, n, s, e), "{:?} x {:?} -> {:?}", p1, p2, child);
        prop_assert!(child[1] == p1[1] || child[1] == p2[1]);
    }

    #[test]
    fn mutation_keeps_endpoints((n, s, e) in endpoints(40), seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut path = random_path(n, s, e, &mut rng);
        for _ in 0..10 {
            interior_swap_mutation(&mut path, &mut rng);
            prop_assert_eq!(path[0], s);
            prop_assert_eq!(path[n - 1], e);
            prop_assert!(is_valid_path(&path, n, s, e));
        }
    }

    #[test]
    fn every_generation_is_valid_and_full(
        problem in arb_problem(12),
        population_size in 2usize..24,
        mutation_rate in 0.0f64..=1.0,
        seed in any::<u64>(),
    ) {
        let config = GaConfig::default()
            .with_population_size(population_size)
            .with_generations(15)
            .with_mutation_rate(mutation_rate);
        let mut evolution =
            Evolution::new(&problem, &config, StdRng::seed_from_u64(seed)).expect("valid config");

        assert_population_valid(evolution.population(), &problem);
        prop_assert_eq!(evolution.population().len(), population_size);

        let mut previous = f64::INFINITY;
        while !evolution.is_finished() {
            let stats = evolution.step();
            prop_assert!(stats.best_so_far <= previous);
            previous = stats.best_so_far;

            assert_population_valid(evolution.population(), &problem);
            prop_assert_eq!(evolution.population().len(), population_size);
        }
    }

    #[test]
    fn result_is_bounded_by_optimum(problem in arb_problem(7), seed in any::<u64>()) {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_generations(20)
            .with_seed(seed);
        let result = GaRunner::run(&problem, &config).expect("valid config");
        let optimum = exhaustive_optimum(&problem);

        prop_assert!(result.best_fitness >= optimum.length() - 1e-9);
        prop_assert!((problem.evaluate(&result.best) - result.best_fitness).abs() < 1e-9);
        prop_assert!(is_valid_path(
            result.best.nodes(),
            problem.node_count(),
            problem.start(),
            problem.end()
        ));
    }
}

fn scenario() -> PathProblem {
    let dm = DistanceMatrix::from_rows(&[
        [0.0, 2.0, 1.0, 14.0],
        [7.0, 0.0, 7.0, 8.0],
        [5.0, 1.0, 0.0, 2.0],
        [1.0, 3.0, 5.0, 0.0],
    ])
    .expect("square");
    PathProblem::new(dm, 0, 3).expect("valid")
}

#[test]
fn scenario_result_between_optimum_and_known_path() {
    let problem = scenario();
    let optimum = exhaustive_optimum(&problem).length();
    assert_eq!(optimum, 10.0);

    for seed in 0..50 {
        let config = GaConfig::default()
            .with_population_size(10)
            .with_generations(20)
            .with_seed(seed);
        let result = GaRunner::run(&problem, &config).expect("valid");
        assert!(result.best_fitness <= 10.0, "seed {seed}: {}", result.best_fitness);
        assert!(result.best_fitness >= optimum);
        assert_eq!(result.best.nodes(), &[0, 2, 1, 3]);
    }
}

#[test]
fn seeded_runs_produce_identical_populations() {
    let dm = {
        let mut dm = DistanceMatrix::new(9);
        for i in 0..9 {
            for j in 0..9 {
                dm.set(i, j, ((i * 7 + j * 13) % 17) as f64);
            }
        }
        dm
    };
    let problem = PathProblem::new(dm, 2, 6).expect("valid");
    let config = GaConfig::default()
        .with_population_size(16)
        .with_generations(25)
        .with_mutation_rate(0.4);

    let mut a = Evolution::new(&problem, &config, StdRng::seed_from_u64(11)).expect("valid");
    let mut b = Evolution::new(&problem, &config, StdRng::seed_from_u64(11)).expect("valid");
    while !a.is_finished() {
        assert_eq!(a.step(), b.step());
        let nodes_a: Vec<&[usize]> = a.population().iter().map(Path::nodes).collect();
        let nodes_b: Vec<&[usize]> = b.population().iter().map(Path::nodes).collect();
        assert_eq!(nodes_a, nodes_b);
    }
    let ra = a.finish().expect("ran");
    let rb = b.finish().expect("ran");
    assert_eq!(ra.best, rb.best);
    assert_eq!(ra.fitness_history, rb.fitness_history);
}

#[test]
fn best_path_comes_from_any_generation() {
    // The returned best must equal the minimum of the recorded history,
    // even when the final population is worse.
    let problem = scenario();
    let config = GaConfig::default()
        .with_population_size(4)
        .with_generations(40)
        .with_mutation_rate(1.0)
        .with_seed(3);
    let result = GaRunner::run(&problem, &config).expect("valid");
    let min = result
        .fitness_history
        .iter()
        .copied()
        .fold(f64::INFINITY, f64::min);
    assert_eq!(result.best_fitness, min);
    assert_eq!(result.best.fitness(), min);
}

#[test]
fn degenerate_inputs_fail_before_running() {
    let problem = scenario();
    for size in [0, 1] {
        let config = GaConfig::default().with_population_size(size);
        assert!(GaRunner::run(&problem, &config).is_err());
    }
    assert!(PathProblem::new(DistanceMatrix::new(4), 1, 1).is_err());
    assert!(PathProblem::new(DistanceMatrix::new(4), 0, 4).is_err());
    assert!(PathProblem::new(DistanceMatrix::new(1), 0, 0).is_err());
}
