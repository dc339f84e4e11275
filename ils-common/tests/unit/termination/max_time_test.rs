use super::*;
use crate::helpers::utils::create_statistics;

#[test]
fn can_terminate_with_zero_limit() {
    let statistics = create_statistics(0, 0);

    assert!(MaxTime::new(0.).is_termination(&statistics));
}

#[test]
fn can_continue_before_limit() {
    let statistics = create_statistics(100, 0);
    let termination = MaxTime::new(3600.);

    assert!(!termination.is_termination(&statistics));
    assert!(termination.estimate(&statistics) < 0.1);
}

#[test]
fn can_calculate_stagnation() {
    assert_eq!(create_statistics(10, 4).stagnation(), 6);
    assert_eq!(create_statistics(3, 3).stagnation(), 0);
}
