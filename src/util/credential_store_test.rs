use super::*;

// Each test runs on its own thread, so the process-local fallback map is
// fresh per test.

// =============================================================
// Round trips
// =============================================================

#[test]
fn starts_empty() {
    assert!(load().is_none());
    assert!(!has_session_marker());
}

#[test]
fn save_then_load_returns_the_token() {
    save("tok-123");
    assert_eq!(load().as_deref(), Some("tok-123"));
}

#[test]
fn save_sets_the_session_marker() {
    save("tok-123");
    assert!(has_session_marker());
}

#[test]
fn save_replaces_the_previous_token() {
    save("first");
    save("second");
    assert_eq!(load().as_deref(), Some("second"));
}

// =============================================================
// Clearing
// =============================================================

#[test]
fn clear_removes_token_and_marker() {
    save("tok-123");
    clear();
    assert!(load().is_none());
    assert!(!has_session_marker());
}

#[test]
fn clear_records_a_logout_timestamp() {
    assert!(last_logout_at().is_none());
    save("tok-123");
    clear();
    assert!(last_logout_at().is_some());
}

#[test]
fn clear_on_an_empty_store_is_harmless() {
    clear();
    assert!(load().is_none());
}
