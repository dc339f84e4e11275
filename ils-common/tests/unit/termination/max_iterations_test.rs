use super::*;
use crate::helpers::utils::create_statistics;

parameterized_test! {can_detect_termination, (limit, iteration, expected), {
    can_detect_termination_impl(limit, iteration, expected);
}}

can_detect_termination! {
    case01_zero_budget: (0, 0, true),
    case02_not_reached: (10, 9, false),
    case03_reached: (10, 10, true),
    case04_exceeded: (10, 11, true),
}

fn can_detect_termination_impl(limit: usize, iteration: usize, expected: bool) {
    let statistics = create_statistics(iteration, 0);

    let result = MaxIterations::new(limit).is_termination(&statistics);

    assert_eq!(result, expected);
}

#[test]
fn can_estimate_progress() {
    let termination = MaxIterations::new(10);

    assert_eq!(termination.estimate(&create_statistics(5, 0)), 0.5);
    assert_eq!(termination.estimate(&create_statistics(20, 0)), 1.);
    assert_eq!(MaxIterations::new(0).estimate(&create_statistics(0, 0)), 1.);
}

#[test]
fn can_use_first_met_criteria_in_composite() {
    let termination =
        CompositeTermination::new(vec![Box::new(MaxTime::new(1000.)), Box::new(MaxIterations::new(3))]);

    assert!(!termination.is_termination(&create_statistics(2, 0)));
    assert!(termination.is_termination(&create_statistics(3, 0)));
}
