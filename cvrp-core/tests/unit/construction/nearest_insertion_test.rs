use super::*;
use crate::helpers::models::*;
use crate::models::ProblemBuilder;

parameterized_test! {can_construct_solution, (problem, expected), {
    can_construct_solution_impl(problem, expected);
}}

can_construct_solution! {
    case01_single_route: (create_line_problem(4, 3.), vec![vec![1, 2, 3]]),
    case02_two_routes: (create_line_problem(5, 2.), vec![vec![1, 2], vec![3, 4]]),
    case03_route_per_location: (create_line_problem(4, 1.), vec![vec![1], vec![2], vec![3]]),
    case04_tie_by_index: (create_problem(vec![(0., 0.), (0., 1.), (0., -1.)], vec![0., 1., 1.], 1.), vec![vec![1], vec![2]]),
    case05_nearest_to_route: (
        create_problem(vec![(0., 0.), (10., 0.), (3., 0.), (11., 0.)], vec![0., 1., 1., 1.], 3.),
        vec![vec![2, 1, 3]]
    ),
}

fn can_construct_solution_impl(problem: Problem, expected: Vec<Vec<Location>>) {
    let solution = NearestInsertion::default().construct(&problem).unwrap();

    assert_eq!(get_routes(&solution), expected);
    assert_valid(&problem, &solution);
}

#[test]
fn can_detect_infeasible_location() {
    let problem = create_problem(vec![(0., 0.), (1., 0.), (2., 0.)], vec![0., 1., 5.], 3.);

    let result = NearestInsertion::default().construct(&problem);

    assert_eq!(result.err(), Some(SolverError::Infeasible { location: 2, demand: 5., capacity: 3. }));
}

#[test]
fn can_construct_with_zero_demand_locations() {
    let problem = ProblemBuilder::default()
        .with_coordinates(vec![(0., 0.), (1., 0.), (2., 0.)])
        .with_demands(vec![0., 0., 1.])
        .with_capacity(1.)
        .allow_zero_demand()
        .build()
        .unwrap();

    let solution = NearestInsertion::default().construct(&problem).unwrap();

    assert_eq!(get_routes(&solution), vec![vec![1, 2]]);
}

parameterized_test! {can_construct_feasible_greedy_solution, (size, capacity, seed), {
    can_construct_feasible_greedy_solution_impl(size, capacity, seed);
}}

can_construct_feasible_greedy_solution! {
    case01_tight: (20, 3., 1),
    case02_medium: (50, 10., 2),
    case03_loose: (30, 100., 3),
}

fn can_construct_feasible_greedy_solution_impl(size: usize, capacity: f64, seed: u64) {
    let problem = create_random_problem(size, capacity, seed);

    let solution = NearestInsertion::default().construct(&problem).unwrap();

    assert_valid(&problem, &solution);
    assert_eq!(solution.route_count(), solution.routes().len());
    let routes = solution.routes();
    for (idx, closed) in routes.iter().enumerate() {
        let is_closed_properly = routes
            .iter()
            .skip(idx + 1)
            .flat_map(|route| route.locations().iter())
            .all(|&location| closed.load() + problem.demand(location) > problem.capacity());

        assert!(is_closed_properly, "route {idx} was closed while some location still fits");
    }

    let other = NearestInsertion::default().construct(&problem).unwrap();
    assert_eq!(get_routes(&solution), get_routes(&other));
}

#[test]
fn can_check_feasibility() {
    let feasible = create_line_problem(4, 1.);
    let infeasible = create_problem(vec![(0., 0.), (1., 0.), (2., 0.)], vec![0., 2., 3.], 2.5);

    assert!(check_feasibility(&feasible).is_ok());
    assert_eq!(
        check_feasibility(&infeasible),
        Err(SolverError::Infeasible { location: 2, demand: 3., capacity: 2.5 })
    );
}
