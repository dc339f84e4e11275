use super::*;
use std::sync::Mutex;

#[test]
fn can_interrupt_via_shared_flag() {
    let flag = Arc::new(AtomicBool::new(false));
    let quota = InterruptQuota::new(flag.clone());

    assert!(!quota.is_reached());
    flag.store(true, Ordering::Release);
    assert!(quota.is_reached());
}

#[test]
fn can_interrupt_via_handle() {
    let quota = InterruptQuota::default();
    let flag = quota.flag();

    quota.interrupt();

    assert!(flag.load(Ordering::Acquire));
    assert!(quota.is_reached());
}

parameterized_test! {can_combine_quotas, (time_limit, is_interrupted, expected), {
    can_combine_quotas_impl(time_limit, is_interrupted, expected);
}}

can_combine_quotas! {
    case01_none_reached: (1000., false, false),
    case02_time_reached: (0., false, true),
    case03_interrupted: (1000., true, true),
    case04_both: (0., true, true),
}

fn can_combine_quotas_impl(time_limit: f64, is_interrupted: bool, expected: bool) {
    let interrupt = InterruptQuota::default();
    if is_interrupted {
        interrupt.interrupt();
    }

    let quota = CompositeQuota::new(vec![Arc::new(TimeQuota::new(time_limit)), Arc::new(interrupt)]);

    assert_eq!(quota.is_reached(), expected);
}

#[test]
fn can_check_quota_on_environment() {
    let interrupt = InterruptQuota::default();
    let environment = Environment::new_with_seed(0).silent();
    assert!(!environment.is_quota_reached());

    let environment = environment.with_quota(Some(Arc::new(interrupt.clone())));
    assert!(!environment.is_quota_reached());

    interrupt.interrupt();
    assert!(environment.is_quota_reached());
}

#[test]
fn can_replace_logger() {
    let messages = Arc::new(Mutex::new(Vec::<String>::new()));
    let environment = Environment::new_with_seed(0).with_logger({
        let messages = messages.clone();
        Arc::new(move |msg: &str| messages.lock().unwrap().push(msg.to_string()))
    });

    (environment.logger)("hello");

    assert_eq!(messages.lock().unwrap().as_slice(), &["hello".to_string()]);
}
