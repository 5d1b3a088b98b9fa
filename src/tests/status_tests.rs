use crate::{BranchAction, BranchStatusClass, allowed_actions, classify, is_transitional};

#[test]
fn test_examples() {
    assert_eq!(classify(Some("ACTIVE_HEALTHY")), BranchStatusClass::Active);
    assert_eq!(classify(Some("RESTARTING")), BranchStatusClass::Transitional);
    assert_eq!(classify(Some("WOBBLY")), BranchStatusClass::Unknown);
}

#[test]
fn test_classify_is_total() {
    let inputs = [
        None,
        Some(""),
        Some(" "),
        Some("FROZEN"),
        Some("ACTIVE"),
        Some("stopped"),
        Some("ÄCTIVE_HEALTHY"),
    ];
    for raw in inputs {
        let class = classify(raw);
        let buckets = [
            BranchStatusClass::Active,
            BranchStatusClass::ActiveUnhealthy,
            BranchStatusClass::Stopped,
            BranchStatusClass::Transitional,
            BranchStatusClass::Error,
            BranchStatusClass::Unknown,
        ];
        assert_eq!(buckets.iter().filter(|b| **b == class).count(), 1);
    }
    assert_eq!(classify(Some("stopped")), BranchStatusClass::Stopped);
    assert_eq!(classify(Some("ACTIVE")), BranchStatusClass::Unknown);
}

#[test]
fn test_gating_follows_classification() {
    assert!(is_transitional(Some("RESIZING")));
    assert!(allowed_actions(classify(Some("RESIZING"))).is_empty());
    assert!(allowed_actions(classify(Some("ERROR"))).contains(&BranchAction::Restart));
    assert!(!allowed_actions(classify(Some("ERROR"))).contains(&BranchAction::Resize));
}
