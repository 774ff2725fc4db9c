use super::*;
use futures::executor::block_on;

fn endpoint() -> EndpointConfig {
    EndpointConfig { script_url: "/cgi-bin/mt.cgi".into(), blog_id: "3".into(), mode: "tm.rebuild_tmpl".into() }
}

// =============================================================
// Request
// =============================================================

#[test]
fn request_carries_mode_blog_and_template_id() {
    let req = RebuildRequest::new(&endpoint(), "42");
    assert_eq!(req.script_url, "/cgi-bin/mt.cgi");
    assert_eq!(req.query_pairs(), [("__mode", "tm.rebuild_tmpl"), ("blog_id", "3"), ("id", "42")]);
}

// =============================================================
// Response parsing
// =============================================================

#[test]
fn parse_success() {
    assert_eq!(parse_response(r#"{"success": true}"#), Ok(()));
}

#[test]
fn parse_success_ignores_errstr() {
    assert_eq!(parse_response(r#"{"success": true, "errstr": "stale"}"#), Ok(()));
}

#[test]
fn parse_application_failure_with_message() {
    let err = parse_response(r#"{"success": false, "errstr": "lock held"}"#).unwrap_err();
    assert_eq!(err, RebuildError::Application(Some("lock held".into())));
    assert_eq!(err.tooltip_message(), Some("lock held"));
}

#[test]
fn parse_missing_success_is_application_failure() {
    let err = parse_response("{}").unwrap_err();
    assert_eq!(err, RebuildError::Application(None));
    assert_eq!(err.tooltip_message(), None);
}

#[test]
fn parse_non_json_is_application_failure_without_message() {
    assert_eq!(parse_response("<html>oops</html>"), Err(RebuildError::Application(None)));
}

#[test]
fn blank_message_has_no_tooltip() {
    assert_eq!(RebuildError::Application(Some("  ".into())).tooltip_message(), None);
}

#[test]
fn transport_error_has_no_tooltip() {
    let err = RebuildError::Transport("offline".into());
    assert_eq!(err.tooltip_message(), None);
    assert_eq!(err.to_string(), "rebuild request failed: offline");
}

// =============================================================
// rebuild_with
// =============================================================

#[test]
fn rebuild_with_passes_request_to_fetch() {
    let req = RebuildRequest::new(&endpoint(), "42");
    let outcome = block_on(rebuild_with(req, |r| async move {
        assert_eq!(r.template_id, "42");
        Ok(r#"{"success": true}"#.to_owned())
    }));
    assert_eq!(outcome, Ok(()));
}

#[test]
fn rebuild_with_maps_fetch_error_to_transport() {
    let req = RebuildRequest::new(&endpoint(), "9");
    let outcome = block_on(rebuild_with(req, |_| async { Err("connection reset".to_owned()) }));
    assert_eq!(outcome, Err(RebuildError::Transport("connection reset".into())));
}

#[test]
fn send_rebuild_outside_browser_is_transport_failure() {
    let outcome = block_on(send_rebuild(RebuildRequest::new(&endpoint(), "1")));
    assert!(matches!(outcome, Err(RebuildError::Transport(_))));
}
