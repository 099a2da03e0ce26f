use std::time::Duration;

use approx::assert_relative_eq;

use jacomat_core::{LinearSystem, MatrixError, SystemError};

use super::{Config, Error, Event, Policy, PolicyError, Status, solve, solve_rows, solve_unobserved};

fn system<R: AsRef<[f64]>>(rows: &[R], rhs: &[f64]) -> LinearSystem {
    LinearSystem::from_rows(rows, rhs.to_vec()).expect("valid system")
}

/// 4x − y = 1, −x + 4y = 2, solution (0.4, 0.6).
fn two_by_two() -> LinearSystem {
    system(&[[4.0, -1.0], [-1.0, 4.0]], &[1.0, 2.0])
}

/// 10x + y = 11, x + 10y = 11, solution (1, 1).
fn fast_contraction() -> LinearSystem {
    system(&[[10.0, 1.0], [1.0, 10.0]], &[11.0, 11.0])
}

#[test]
fn epsilon_policy_solves_two_by_two() {
    let solution = solve_unobserved(&two_by_two(), Policy::Epsilon(1e-6), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.converged());
    assert!(solution.delta <= 1e-6);
    assert_relative_eq!(solution.x[0], 0.4, epsilon = 1e-6);
    assert_relative_eq!(solution.x[1], 0.6, epsilon = 1e-6);
}

#[test]
fn non_dominant_matrix_is_refused_by_both_policies() {
    let system = system(&[[1.0, 2.0], [3.0, 4.0]], &[1.0, 1.0]);

    for policy in [Policy::Epsilon(1e-6), Policy::MaxIters(50)] {
        let mut sweeps = 0;
        let err = solve(&system, policy, &Config::default(), |_: &Event<'_>| {
            sweeps += 1;
            None
        })
        .expect_err("should refuse to iterate");

        assert!(err.is_precondition());
        assert!(matches!(err, Error::NotDiagonallyDominant { row: 0, .. }));
        assert!(err.to_string().contains("not convergent"));
        assert_eq!(sweeps, 0, "no sweep may run before validation passes");
    }
}

#[test]
fn single_sweep_budget_runs_exactly_once() {
    let solution = solve_unobserved(&fast_contraction(), Policy::MaxIters(1), &Config::default())
        .expect("should run");

    assert_eq!(solution.iters, 1);
    assert_eq!(solution.status, Status::MaxIters);
    assert!(!solution.converged());
    assert_relative_eq!(solution.x[0], 1.1);
    assert_relative_eq!(solution.x[1], 1.1);
    assert_relative_eq!(solution.delta, 2.2);
    assert_eq!(solution.history.len(), 1);
    assert_eq!(solution.complexity.per_iteration, 4);
    assert_eq!(solution.complexity.total, 4);
}

#[test]
fn zero_rhs_converges_to_zero_after_one_sweep() {
    let system = system(&[[5.0, 1.0, -2.0], [0.5, 3.0, 1.0], [1.0, 1.0, 4.0]], &[0.0; 3]);

    for policy in [Policy::Epsilon(1e-9), Policy::MaxIters(10)] {
        let solution = solve_unobserved(&system, policy, &Config::default()).expect("should run");

        assert!(solution.converged());
        assert_eq!(solution.iters, 1);
        assert_eq!(solution.x, vec![0.0; 3]);
        assert_relative_eq!(solution.delta, 0.0);
    }
}

#[test]
fn max_iters_policy_exits_early_below_fixed_threshold() {
    // Deltas: 2.2, 0.22, 0.022, 0.0022 → the fourth sweep drops below 0.01.
    let solution = solve_unobserved(&fast_contraction(), Policy::MaxIters(100), &Config::default())
        .expect("should converge");

    assert_eq!(solution.status, Status::Converged);
    assert_eq!(solution.iters, 4);
    assert!(solution.delta < 0.01);
    assert_relative_eq!(solution.x[0], 0.9999, epsilon = 1e-12);
    assert_eq!(solution.history.len(), 4);
    assert_eq!(solution.complexity.total, 16);
}

#[test]
fn max_iters_exhaustion_is_not_convergence() {
    // Three sweeps leave a delta of 0.022, above the early-exit threshold.
    let solution = solve_unobserved(&fast_contraction(), Policy::MaxIters(3), &Config::default())
        .expect("should run");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 3);
    assert!(!solution.converged());
    assert_relative_eq!(solution.delta, 0.022, epsilon = 1e-12);
}

#[test]
fn epsilon_threshold_ignores_the_fixed_early_exit() {
    // 0.22 is well above 0.01 but within epsilon = 0.5.
    let solution = solve_unobserved(&fast_contraction(), Policy::Epsilon(0.5), &Config::default())
        .expect("should converge");

    assert!(solution.converged());
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.x[0], 0.99, epsilon = 1e-12);
}

#[test]
fn history_is_post_update_and_matches_iteration_count() {
    let solution = solve_unobserved(&fast_contraction(), Policy::MaxIters(100), &Config::default())
        .expect("should converge");

    assert_eq!(solution.history.len(), solution.iters);
    assert_eq!(solution.history.last(), Some(solution.x.as_slice()));

    let first = solution.history.at_iteration(1).expect("first sweep");
    assert_relative_eq!(first[0], 1.1);

    let x0 = solution.history.variable(0);
    let expected = [1.1, 0.99, 1.001, 0.9999];
    for (actual, expected) in x0.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-12);
    }

    let max_errors = solution.history.max_errors();
    assert_relative_eq!(max_errors[0], 1.1);
    assert_relative_eq!(max_errors[3], 0.0011, epsilon = 1e-12);
}

#[test]
fn observer_sees_each_sweep_once_in_order() {
    let mut events = Vec::new();

    let solution = solve(
        &fast_contraction(),
        Policy::MaxIters(100),
        &Config::default(),
        |event: &Event<'_>| {
            events.push((event.iteration, event.x.to_vec(), event.delta));
            None
        },
    )
    .expect("should converge");

    assert_eq!(events.len(), solution.iters);
    for (index, (iteration, x, _)) in events.iter().enumerate() {
        assert_eq!(*iteration, index + 1);
        assert_eq!(Some(x.as_slice()), solution.history.at_iteration(*iteration));
    }

    let (_, _, last_delta) = events.last().expect("at least one event");
    assert_relative_eq!(*last_delta, solution.delta);
}

#[test]
fn observer_previous_is_prior_iterate() {
    let mut max_changes = Vec::new();

    let solution = solve(
        &fast_contraction(),
        Policy::MaxIters(100),
        &Config::default(),
        |event: &Event<'_>| {
            max_changes.push(event.max_change());
            None
        },
    )
    .expect("should converge");

    let from_history = solution.history.max_errors();
    assert_eq!(max_changes.len(), from_history.len());
    for (streamed, recorded) in max_changes.iter().zip(&from_history) {
        assert_relative_eq!(*streamed, *recorded);
    }
}

#[test]
fn repeated_solves_are_identical() {
    let system = system(
        &[[6.0, -1.0, 2.0], [1.0, -5.0, 1.5], [0.25, 2.0, 3.0]],
        &[1.0, -2.0, 0.5],
    );
    let policy = Policy::Epsilon(1e-10);

    let first = solve_unobserved(&system, policy, &Config::default()).unwrap();
    let second = solve_unobserved(&system, policy, &Config::default()).unwrap();

    assert_eq!(first, second);
}

#[test]
fn single_unknown_is_direct_division() {
    let system = system(&[[4.0]], &[8.0]);

    let solution = solve_unobserved(&system, Policy::Epsilon(1e-6), &Config::default()).unwrap();

    // Sweep 1 lands on the answer; sweep 2 confirms with a zero delta.
    assert_eq!(solution.iters, 2);
    assert!(solution.converged());
    assert_relative_eq!(solution.x[0], 2.0);
}

#[test]
fn zero_diagonal_is_reported_before_dominance() {
    let system = system(&[[0.0, 1.0], [1.0, 2.0]], &[1.0, 1.0]);

    let err = solve_unobserved(&system, Policy::MaxIters(10), &Config::default()).unwrap_err();

    assert_eq!(err, Error::ZeroDiagonal { row: 0 });
    assert!(err.is_precondition());
}

#[test]
fn invalid_policy_is_rejected_before_iterating() {
    let err = solve_unobserved(&two_by_two(), Policy::Epsilon(1.5), &Config::default())
        .unwrap_err();
    assert_eq!(err, Error::InvalidPolicy(PolicyError::Epsilon(1.5)));

    let err = solve_unobserved(&two_by_two(), Policy::MaxIters(0), &Config::default())
        .unwrap_err();
    assert_eq!(err, Error::InvalidPolicy(PolicyError::MaxIters));
}

#[test]
fn infinite_diagonal_is_refused() {
    let system = system(&[[f64::INFINITY, 1.0], [1.0, 4.0]], &[1.0, 1.0]);
    let mut sweeps = 0;

    let err = solve(&system, Policy::Epsilon(0.1), &Config::default(), |_: &Event<'_>| {
        sweeps += 1;
        None
    })
    .unwrap_err();

    assert!(matches!(
        err,
        Error::NonFiniteCoefficient { row: 0, col: 0, value } if value == f64::INFINITY
    ));
    assert!(err.is_precondition());
    assert_eq!(sweeps, 0);
}

#[test]
fn nan_coefficient_is_refused_before_zero_diagonal() {
    let system = system(&[[0.0, 1.0], [f64::NAN, 2.0]], &[1.0, 1.0]);

    let err = solve_unobserved(&system, Policy::MaxIters(10), &Config::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::NonFiniteCoefficient { row: 1, col: 0, .. }
    ));
}

#[test]
fn non_finite_rhs_is_refused() {
    for bad in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let system = system(&[[2.0, 1.0], [1.0, 2.0]], &[1.0, bad]);

        let err =
            solve_unobserved(&system, Policy::Epsilon(1e-6), &Config::default()).unwrap_err();

        assert!(matches!(err, Error::NonFiniteRhs { index: 1, .. }), "b = {bad}");
        assert!(err.is_precondition());
    }
}

#[test]
fn overflow_mid_solve_aborts_with_numeric_instability() {
    // Sweep 1 yields ±MAX/2; sweep 2 computes MAX + MAX/2, which overflows.
    let system = system(&[[2.0, 1.0], [1.0, 2.0]], &[f64::MAX, -f64::MAX]);

    let err = solve_unobserved(&system, Policy::Epsilon(1e-6), &Config::default()).unwrap_err();

    assert!(matches!(
        err,
        Error::NumericInstability {
            iteration: 2,
            index: 0,
            ..
        }
    ));
}

#[test]
fn safety_ceiling_stops_unreachable_tolerance() {
    let config = Config::new(3, None).unwrap();

    let solution = solve_unobserved(&two_by_two(), Policy::Epsilon(1e-12), &config).unwrap();

    assert_eq!(solution.status, Status::SafetyCeiling);
    assert!(!solution.converged());
    assert_eq!(solution.iters, 3);
    assert_eq!(solution.history.len(), 3);
}

#[test]
fn ceiling_also_caps_max_iters_policy() {
    let config = Config::new(2, None).unwrap();

    let solution = solve_unobserved(&fast_contraction(), Policy::MaxIters(10), &config).unwrap();

    assert_eq!(solution.status, Status::SafetyCeiling);
    assert_eq!(solution.iters, 2);
}

#[test]
fn timeout_ends_slow_solve() {
    // Spectral radius 0.999999: millions of sweeps to reach 1e-12.
    let system = system(&[[1.0, -0.999_999], [-0.999_999, 1.0]], &[1.0, 1.0]);
    let config = Config::default()
        .with_timeout(Duration::from_nanos(1))
        .unwrap();

    let solution = solve_unobserved(&system, Policy::Epsilon(1e-12), &config).unwrap();

    assert_eq!(solution.status, Status::TimedOut);
    assert!(!solution.converged());
    assert!(solution.iters >= 1);
    assert_eq!(solution.history.len(), solution.iters);
}

#[test]
fn solve_rows_maps_shape_errors() {
    let err = solve_rows(
        &[vec![4.0, 1.0], vec![1.0]],
        vec![1.0, 1.0],
        Policy::Epsilon(1e-6),
        &Config::default(),
        (),
    )
    .unwrap_err();

    assert!(err.is_precondition());
    assert!(matches!(
        err,
        Error::InvalidSystem(SystemError::Matrix(MatrixError::NotSquare { row: 1, .. }))
    ));

    let err = solve_rows(
        &[[4.0, 1.0], [1.0, 4.0]],
        vec![1.0],
        Policy::Epsilon(1e-6),
        &Config::default(),
        (),
    )
    .unwrap_err();

    assert!(matches!(
        err,
        Error::InvalidSystem(SystemError::RhsLength {
            expected: 2,
            actual: 1
        })
    ));
}

#[test]
fn solve_rows_solves_valid_input() {
    let solution = solve_rows(
        &[[4.0, -1.0], [-1.0, 4.0]],
        vec![1.0, 2.0],
        Policy::Epsilon(1e-8),
        &Config::default(),
        (),
    )
    .expect("should converge");

    assert!(solution.converged());
    assert_relative_eq!(solution.x[0], 0.4, epsilon = 1e-7);
    assert_relative_eq!(solution.x[1], 0.6, epsilon = 1e-7);
}
