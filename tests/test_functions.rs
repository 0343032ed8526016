use std::f64::consts::PI;

use recsel::function::{
    self, Ackley, Griewank, Michalewicz, Norwegian, ObjectiveFunction, Rastrigin, Schwefel,
};

const FITNESS_EPSILON: f64 = 1e-10;

#[test]
fn test_zero_vector_values() {
    let zero = vec![0.0; 100];

    assert_eq!(Rastrigin.calculate(&zero), 0.0);
    assert_eq!(Griewank.calculate(&zero), 0.0);
    assert!(Ackley.calculate(&zero).abs() < FITNESS_EPSILON);
    assert_eq!(Michalewicz.calculate(&zero), 0.0);
    assert!((Schwefel.calculate(&zero) - 41898.29).abs() < FITNESS_EPSILON);
    assert!((Norwegian.calculate(&zero) + 0.99f64.powi(100)).abs() < FITNESS_EPSILON);
}

#[test]
fn test_bounds() {
    let expected = [
        ("Ackley", -32.768, 32.768),
        ("Griewank", -600.0, 600.0),
        ("Michalewicz", 0.0, PI),
        ("Norwegian", -1.1, 1.1),
        ("Rastrigin", -5.12, 5.12),
        ("Schwefel", -500.0, 500.0),
    ];

    for (title, minimum, maximum) in expected {
        let function = function::by_title(title).unwrap();
        assert_eq!(function.minimum(), minimum, "{}", title);
        assert_eq!(function.maximum(), maximum, "{}", title);
    }
}

#[test]
fn test_accepts_any_length_and_out_of_bounds_input() {
    for function in function::all() {
        for length in [1, 2, 7, 100] {
            let inside = vec![function.maximum() * 0.5; length];
            let outside = vec![function.maximum() * 3.0; length];

            assert!(function.calculate(&inside).is_finite(), "{}", function.title());
            assert!(function.calculate(&outside).is_finite(), "{}", function.title());
        }
    }
}

#[test]
fn test_deterministic() {
    let input: Vec<f64> = (0..50).map(|i| (i as f64 * 0.37).sin()).collect();

    for function in function::all() {
        assert_eq!(function.calculate(&input), function.calculate(&input));
    }
}

#[test]
fn test_custom_function_is_pluggable() {
    use recsel::{
        rng::RandomNumberGenerator, search::RecursiveLauncher, selection::ExhaustivePairwise,
        SearchOptions,
    };

    #[derive(Debug)]
    struct Sphere;

    impl ObjectiveFunction for Sphere {
        fn calculate(&self, input: &[f64]) -> f64 {
            input.iter().map(|x| x * x).sum()
        }

        fn minimum(&self) -> f64 {
            -1.0
        }

        fn maximum(&self) -> f64 {
            1.0
        }

        fn title(&self) -> &str {
            "Sphere"
        }
    }

    let launcher =
        RecursiveLauncher::new(ExhaustivePairwise, Sphere, SearchOptions::new(5, 0.01)).unwrap();
    let outcome = launcher
        .run(2, 3, &mut RandomNumberGenerator::from_seed(2))
        .unwrap();

    assert_eq!(outcome.solution.len(), 5);
    assert_eq!(outcome.fitness, Sphere.calculate(&outcome.solution));
}
