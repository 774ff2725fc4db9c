use super::*;
use crate::config::ScreenConfig;

fn config(theme_label: Option<&str>) -> ScreenConfig {
    let raw = serde_json::json!({
        "tabs": [
            {"id": "about", "label": "About"},
            {"id": "general", "label": "General", "active": true},
            {"id": "templates", "label": "Templates"},
            {"id": "apply-theme-tab", "label": "Apply a New Theme"}
        ],
        "theme_label": theme_label,
        "apply_tab": "apply-theme-tab",
        "endpoint": {"script_url": "/mt.cgi", "blog_id": "1"}
    });
    ScreenConfig::from_json(&raw.to_string()).unwrap()
}

fn controller() -> TabController {
    TabController::new(&config(Some("Minimalist Red")), &InitialHints::default()).unwrap().0
}

fn assert_single_active(c: &TabController) {
    let active: Vec<&Tab> = c.tabs().iter().filter(|t| c.is_active(&t.id)).collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0], c.active());
}

// =============================================================
// Initialisation
// =============================================================

#[test]
fn declared_tab_is_active_without_hints() {
    let (c, source) = TabController::new(&config(None), &InitialHints::default()).unwrap();
    assert_eq!(c.active().id, "general");
    assert_eq!(source, InitialSource::Declared);
}

#[test]
fn fragment_activates_tab_on_load() {
    let hints = InitialHints { fragment: Some("#templates".into()), paginated: false };
    let (c, source) = TabController::new(&config(None), &hints).unwrap();
    assert_eq!(c.active().id, "templates");
    assert_eq!(source, InitialSource::Fragment);
}

#[test]
fn unknown_fragment_is_a_noop_on_load() {
    let hints = InitialHints { fragment: Some("#styles".into()), paginated: false };
    let (c, source) = TabController::new(&config(None), &hints).unwrap();
    assert_eq!(c.active().id, "general");
    assert_eq!(source, InitialSource::Declared);
}

#[test]
fn empty_fragment_falls_back_to_declared() {
    let hints = InitialHints { fragment: Some("#".into()), paginated: false };
    let (c, _) = TabController::new(&config(None), &hints).unwrap();
    assert_eq!(c.active().id, "general");
}

#[test]
fn pagination_forces_apply_tab_over_fragment() {
    let hints = InitialHints { fragment: Some("templates".into()), paginated: true };
    let (c, source) = TabController::new(&config(None), &hints).unwrap();
    assert_eq!(c.active().id, "apply-theme-tab");
    assert_eq!(source, InitialSource::Pagination);
}

#[test]
fn pagination_without_apply_tab_uses_next_strategy() {
    let mut cfg = config(None);
    cfg.apply_tab = None;
    let hints = InitialHints { fragment: Some("about".into()), paginated: true };
    let (c, source) = TabController::new(&cfg, &hints).unwrap();
    assert_eq!(c.active().id, "about");
    assert_eq!(source, InitialSource::Fragment);
}

#[test]
fn new_rejects_empty_tab_list() {
    let mut cfg = config(None);
    cfg.tabs.clear();
    assert_eq!(TabController::new(&cfg, &InitialHints::default()).unwrap_err(), ConfigError::NoTabs);
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn switching_tabs_swaps_active_panel() {
    let mut c = controller();
    assert_eq!(c.active().panel_id(), "general-content");

    let t = c.transition("templates");
    assert_eq!(t, Transition::Switched { from: "general".into(), to: "templates".into() });
    assert_eq!(c.active().panel_id(), "templates-content");
    assert!(!c.is_active("general"));
    assert!(c.header_text().contains("Templates"));
}

#[test]
fn clicking_active_tab_is_idempotent() {
    let mut c = controller();
    let before = c.clone();
    assert_eq!(c.transition("general"), Transition::AlreadyActive);
    assert_eq!(c, before);
}

#[test]
fn unknown_tab_leaves_state_unchanged() {
    let mut c = controller();
    let before = c.clone();
    assert_eq!(c.transition("nope"), Transition::UnknownTab);
    assert_eq!(c, before);
}

#[test]
fn exactly_one_tab_active_after_every_click() {
    let mut c = controller();
    for id in ["about", "templates", "templates", "missing", "apply-theme-tab", "general", "about"] {
        c.transition(id);
        assert_single_active(&c);
    }
    assert_eq!(c.active().id, "about");
}

#[test]
fn follow_fragment_strips_hash() {
    let mut c = controller();
    c.follow_fragment("#about");
    assert_eq!(c.active().id, "about");
}

#[test]
fn empty_fragment_returns_to_load_time_tab() {
    let mut c = controller();
    c.follow_fragment("#templates");
    assert_eq!(c.active().id, "templates");

    let t = c.follow_fragment("");
    assert_eq!(t, Transition::Switched { from: "templates".into(), to: "general".into() });
    assert_eq!(c.active().id, "general");
}

#[test]
fn bare_hash_returns_to_fragment_chosen_tab() {
    let hints = InitialHints { fragment: Some("#about".into()), paginated: false };
    let (mut c, _) = TabController::new(&config(None), &hints).unwrap();
    c.transition("templates");
    c.follow_fragment("#");
    assert_eq!(c.active().id, "about");
}

#[test]
fn empty_fragment_on_load_time_tab_is_idempotent() {
    let mut c = controller();
    assert_eq!(c.follow_fragment(""), Transition::AlreadyActive);
    assert_eq!(c.active().id, "general");
}

// =============================================================
// Header text
// =============================================================

#[test]
fn header_prefixes_theme_name() {
    let mut c = controller();
    c.transition("templates");
    assert_eq!(c.header_text(), "Minimalist Red: Templates");
}

#[test]
fn apply_tab_header_omits_theme_name() {
    let mut c = controller();
    c.transition("apply-theme-tab");
    assert_eq!(c.header_text(), "Apply a New Theme");
}

#[test]
fn header_without_theme_label_is_tab_label() {
    let (c, _) = TabController::new(&config(None), &InitialHints::default()).unwrap();
    assert_eq!(c.header_text(), "General");
}
