use super::*;

#[test]
fn test_default_thresholds() {
    let t = Thresholds::default();
    assert_eq!((t.xs_max, t.s_max, t.m_max, t.l_max), (10, 100, 500, 1000));
    assert!(t.is_ascending());
}

#[test]
fn test_is_ascending_rejects_equal_or_descending_boundaries() {
    let equal = Thresholds {
        s_max: 10,
        ..Thresholds::default()
    };
    assert!(!equal.is_ascending());

    let descending = Thresholds {
        xs_max: 1000,
        s_max: 500,
        m_max: 100,
        l_max: 10,
    };
    assert!(!descending.is_ascending());
}

#[test]
fn test_default_policy_does_not_fail_or_comment() {
    let policy = SizingPolicy::default();
    assert!(!policy.fail_if_xl);
    assert!(policy.message_if_xl.is_empty());
    assert!(policy.ignore.is_empty());
}

#[test]
fn test_thresholds_display() {
    assert_eq!(
        Thresholds::default().to_string(),
        "xs<10 s<100 m<500 l<1000"
    );
}
