//! URL fragment helpers.
//!
//! Writing the active tab id into `location.hash` keeps the tab across
//! reloads and back/forward navigation. Requires a browser environment;
//! elsewhere these are no-ops.

/// Replace the URL fragment with `tab_id` unless it already matches.
pub fn write_fragment(tab_id: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(location) = web_sys::window().map(|w| w.location()) else {
            return;
        };
        let current = location.hash().unwrap_or_default();
        if crate::state::tabs::normalize_fragment(&current) != tab_id {
            let _ = location.set_hash(tab_id);
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = tab_id;
    }
}
