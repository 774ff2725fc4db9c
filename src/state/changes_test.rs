use super::*;

#[test]
fn tracker_starts_clean() {
    let t = ChangeTracker::new(["about", "general"]);
    assert!(!t.is_changed("about"));
    assert_eq!(t.changed_count(), 0);
}

#[test]
fn mark_flags_owning_tab_only() {
    let mut t = ChangeTracker::new(["about", "general"]);
    assert!(t.mark("general"));
    assert!(t.is_changed("general"));
    assert!(!t.is_changed("about"));
}

#[test]
fn mark_is_idempotent_and_never_clears() {
    let mut t = ChangeTracker::new(["general"]);
    assert!(t.mark("general"));
    assert!(!t.mark("general"));
    assert!(t.is_changed("general"));
    assert_eq!(t.changed_count(), 1);
}

#[test]
fn mark_ignores_unknown_tab() {
    let mut t = ChangeTracker::new(["general"]);
    assert!(!t.mark("styles"));
    assert!(!t.is_changed("styles"));
    assert_eq!(t.changed_count(), 0);
}
