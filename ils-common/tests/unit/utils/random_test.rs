use super::*;

#[test]
fn can_reproduce_sequence_with_same_seed() {
    let sample = |random: &DefaultRandom| {
        (0..64).map(|_| (random.uniform_int(0, 100), random.uniform_real(0., 1.).to_bits())).collect::<Vec<_>>()
    };

    let first = sample(&DefaultRandom::new_with_seed(7));
    let second = sample(&DefaultRandom::new_with_seed(7));
    let other = sample(&DefaultRandom::new_with_seed(8));

    assert_eq!(first, second);
    assert_ne!(first, other);
}

parameterized_test! {can_produce_uniform_int_in_closed_range, (min, max), {
    can_produce_uniform_int_in_closed_range_impl(min, max);
}}

can_produce_uniform_int_in_closed_range! {
    case01_same: (3, 3),
    case02_pair: (0, 1),
    case03_wide: (-5, 20),
}

fn can_produce_uniform_int_in_closed_range_impl(min: i32, max: i32) {
    let random = DefaultRandom::new_with_seed(0);

    let values = (0..1000).map(|_| random.uniform_int(min, max)).collect::<Vec<_>>();

    assert!(values.iter().all(|&value| value >= min && value <= max));
    assert!(values.contains(&min));
    assert!(values.contains(&max));
}

#[test]
fn can_handle_probability_bounds() {
    let random = DefaultRandom::new_with_seed(11);

    assert!((0..100).all(|_| random.is_hit(1.)));
    assert!((0..100).all(|_| !random.is_hit(0.)));
    assert!((0..100).all(|_| random.is_hit(2.)));
}

#[test]
fn can_hit_with_given_probability() {
    let random = DefaultRandom::new_with_seed(3);

    let hits = (0..10_000).filter(|_| random.is_hit(0.3)).count();

    assert!((2_500..3_500).contains(&hits), "unexpected amount of hits: {hits}");
}
