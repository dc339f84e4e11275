use super::*;
use crate::helpers::models::*;
use crate::models::Location;

fn create_crossed_problem() -> Problem {
    create_problem(vec![(0., 0.), (0., 1.), (1., 0.), (1., 1.)], vec![0., 1., 1., 1.], 3.)
}

#[test]
fn can_find_move_which_uncrosses_route() {
    let problem = create_crossed_problem();
    let solution = create_solution(&problem, vec![vec![1, 2, 3]]);

    let mv = find_two_opt_move(&problem, &solution, 1E-9);

    match mv {
        Some(Move::TwoOpt { route: 0, start: 1, end: 2, delta }) => assert!((delta - (2. - 2. * 2_f64.sqrt())).abs() < 1E-9),
        _ => panic!("unexpected move: {mv:?}"),
    }
}

#[test]
fn can_apply_found_move() {
    let problem = create_crossed_problem();
    let mut solution = create_solution(&problem, vec![vec![1, 2, 3]]);
    let mv = find_two_opt_move(&problem, &solution, 1E-9).unwrap();

    assert!(mv.apply(&problem, &mut solution));

    assert_eq!(get_routes(&solution), vec![vec![1, 3, 2]]);
    assert_close!(solution.total_distance(), 4., 1E-9);
}

parameterized_test! {can_return_none_without_improvement, (routes, epsilon), {
    can_return_none_without_improvement_impl(routes, epsilon);
}}

can_return_none_without_improvement! {
    case01_optimal_route: (vec![vec![1, 3, 2]], 1E-9),
    case02_single_location_routes: (vec![vec![1], vec![2], vec![3]], 1E-9),
    case03_large_epsilon: (vec![vec![1, 2, 3]], 1.),
    case04_empty: (vec![], 1E-9),
}

fn can_return_none_without_improvement_impl(routes: Vec<Vec<Location>>, epsilon: f64) {
    let problem = create_crossed_problem();
    let solution = create_solution(&problem, routes);

    assert_eq!(find_two_opt_move(&problem, &solution, epsilon), None);
}

#[test]
fn can_find_move_in_second_route() {
    let problem = create_problem(
        vec![(0., 0.), (0., 1.), (1., 0.), (1., 1.), (-1., 0.), (-1., -1.), (0., -1.)],
        vec![0., 1., 1., 1., 1., 1., 1.],
        3.,
    );
    let solution = create_solution(&problem, vec![vec![1, 3, 2], vec![4, 6, 5]]);

    let mv = find_two_opt_move(&problem, &solution, 1E-9);

    assert!(matches!(mv, Some(Move::TwoOpt { route: 1, start: 1, end: 2, .. })));
}
