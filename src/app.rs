//! Root application component.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::components::Router;

use crate::components::config_notice::ConfigNotice;
use crate::config;
use crate::pages::theme_manager::ThemeManagerPage;

/// Root application component.
///
/// Reads the screen description embedded in the page and mounts the Theme
/// Manager page, or an error notice when the description is unusable.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    match config::read_embedded() {
        Ok(cfg) => view! {
            <Router>
                <ThemeManagerPage config=cfg/>
            </Router>
        }
        .into_any(),
        Err(e) => {
            log::error!("{e}");
            view! { <ConfigNotice message=e.to_string()/> }.into_any()
        }
    }
}
