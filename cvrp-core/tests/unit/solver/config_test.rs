use super::*;
use crate::helpers::random::FakeRandom;
use crate::helpers::solver::create_config;

#[test]
fn can_create_default_config() {
    let config = SolverConfig::default();

    assert_eq!(config.time_limit_seconds, None);
    assert_eq!(config.max_iterations, None);
    assert_eq!(config.random_seed, 0);
    assert_eq!(config.first_improvement_epsilon, DEFAULT_EPSILON);
    assert_eq!(config.acceptance, AcceptancePolicy::NotWorse);
    assert_eq!(config.perturbation_kicks, 1);
    assert!(matches!(config.validate(), Err(SolverError::InvalidConfig(_))));
}

#[test]
fn can_read_config_from_json() {
    let json = r#"
    {
        "timeLimitSeconds": 2.5,
        "maxIterations": null,
        "randomSeed": 42,
        "firstImprovementEpsilon": 1e-6,
        "acceptance": { "type": "diversifying", "worseProbability": 0.05 },
        "restartAfter": 100,
        "perturbationKicks": 2,
        "logEvery": 10
    }
    "#;

    let config = SolverConfig::from_reader(json.as_bytes()).unwrap();

    assert_eq!(config.time_limit_seconds, Some(2.5));
    assert_eq!(config.max_iterations, None);
    assert_eq!(config.random_seed, 42);
    assert_eq!(config.first_improvement_epsilon, 1E-6);
    assert_eq!(config.acceptance, AcceptancePolicy::Diversifying { worse_probability: 0.05 });
    assert_eq!(config.restart_after, Some(100));
    assert_eq!(config.perturbation_kicks, 2);
    assert_eq!(config.max_local_search_moves, None);
    assert_eq!(config.log_every, Some(10));
}

#[test]
fn can_use_defaults_for_missing_fields() {
    let json = r#"{ "maxIterations": 10, "randomSeed": 7, "acceptance": { "type": "improving" } }"#;

    let config = SolverConfig::from_reader(json.as_bytes()).unwrap();

    assert_eq!(config, SolverConfig { acceptance: AcceptancePolicy::Improving, ..create_config(10, 7) });
}

#[test]
fn can_serialize_config() {
    let config = SolverConfig { time_limit_seconds: Some(1.), ..SolverConfig::default() };

    let json = serde_json::to_string(&config).unwrap();

    assert!(json.contains(r#""timeLimitSeconds":1.0"#));
    assert!(json.contains(r#""acceptance":{"type":"notWorse"}"#));
    let restored = serde_json::from_str::<SolverConfig>(json.as_str()).unwrap();
    assert_eq!(restored.time_limit_seconds, Some(1.));
    assert_eq!(restored.max_iterations, config.max_iterations);
    assert_eq!(restored.acceptance, config.acceptance);
}

parameterized_test! {can_reject_invalid_json, (json, expected), {
    can_reject_invalid_json_impl(json, expected);
}}

can_reject_invalid_json! {
    case01_syntax: ("{ \"randomSeed\": ", "cannot deserialize config"),
    case02_type: (r#"{ "maxIterations": "many" }"#, "cannot deserialize config"),
    case03_no_bounds: (r#"{ "maxIterations": null }"#, "either time limit or max iterations must be set"),
    case04_unknown_policy: (r#"{ "maxIterations": 1, "acceptance": { "type": "always" } }"#, "cannot deserialize config"),
    case05_empty: ("{}", "either time limit or max iterations must be set"),
    case06_seed_only: (r#"{ "randomSeed": 7 }"#, "either time limit or max iterations must be set"),
}

fn can_reject_invalid_json_impl(json: &str, expected: &str) {
    let result = SolverConfig::from_reader(json.as_bytes());

    let err = result.expect_err("expected an error");
    assert!(err.to_string().contains(expected), "unexpected error: '{err}'");
}

parameterized_test! {can_validate_config, (config, expected), {
    can_validate_config_impl(config, expected);
}}

can_validate_config! {
    case01_iterations_only: (create_config(10, 0), true),
    case02_time_only: (SolverConfig { time_limit_seconds: Some(1.), ..SolverConfig::default() }, true),
    case03_zero_iterations: (SolverConfig { max_iterations: Some(0), ..SolverConfig::default() }, true),
    case04_no_bounds: (SolverConfig::default(), false),
    case05_zero_time: (SolverConfig { time_limit_seconds: Some(0.), ..create_config(10, 0) }, false),
    case06_negative_time: (SolverConfig { time_limit_seconds: Some(-1.), ..create_config(10, 0) }, false),
    case07_nan_time: (SolverConfig { time_limit_seconds: Some(f64::NAN), ..create_config(10, 0) }, false),
    case08_negative_epsilon: (SolverConfig { first_improvement_epsilon: -1E-9, ..create_config(10, 0) }, false),
    case09_zero_epsilon: (SolverConfig { first_improvement_epsilon: 0., ..create_config(10, 0) }, true),
    case10_probability: (SolverConfig { acceptance: AcceptancePolicy::Diversifying { worse_probability: 1.5 }, ..create_config(10, 0) }, false),
    case11_zero_kicks: (SolverConfig { perturbation_kicks: 0, ..create_config(10, 0) }, false),
    case12_zero_restart: (SolverConfig { restart_after: Some(0), ..create_config(10, 0) }, false),
    case13_zero_log_every: (SolverConfig { log_every: Some(0), ..create_config(10, 0) }, false),
}

fn can_validate_config_impl(config: SolverConfig, expected: bool) {
    let result = config.validate();

    match (result, expected) {
        (Ok(_), true) => {}
        (Err(SolverError::InvalidConfig(_)), false) => {}
        (result, _) => panic!("unexpected result: {result:?}"),
    }
}

parameterized_test! {can_accept_candidate, (policy, candidate, current, reals, expected), {
    can_accept_candidate_impl(policy, candidate, current, reals, expected);
}}

can_accept_candidate! {
    case01_not_worse_better: (AcceptancePolicy::NotWorse, 9., 10., vec![], true),
    case02_not_worse_equal: (AcceptancePolicy::NotWorse, 10., 10., vec![], true),
    case03_not_worse_noise: (AcceptancePolicy::NotWorse, 10. + 1E-12, 10., vec![], true),
    case04_not_worse_worse: (AcceptancePolicy::NotWorse, 11., 10., vec![], false),
    case05_improving_better: (AcceptancePolicy::Improving, 9., 10., vec![], true),
    case06_improving_equal: (AcceptancePolicy::Improving, 10., 10., vec![], false),
    case07_diversifying_better: (AcceptancePolicy::Diversifying { worse_probability: 0.1 }, 9., 10., vec![], true),
    case08_diversifying_hit: (AcceptancePolicy::Diversifying { worse_probability: 0.1 }, 11., 10., vec![0.05], true),
    case09_diversifying_miss: (AcceptancePolicy::Diversifying { worse_probability: 0.1 }, 11., 10., vec![0.5], false),
}

fn can_accept_candidate_impl(policy: AcceptancePolicy, candidate: f64, current: f64, reals: Vec<f64>, expected: bool) {
    let random = FakeRandom::new(vec![], reals);

    assert_eq!(policy.accepts(candidate, current, 1E-9, &random), expected);
}
