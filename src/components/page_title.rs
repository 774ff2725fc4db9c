//! Page header and document title for the active tab.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::state::tabs::TabController;

/// `<h2 id="page-title">` mirroring the active tab; the document title
/// follows the same text.
#[component]
pub fn PageTitle() -> impl IntoView {
    let tabs = expect_context::<RwSignal<TabController>>();

    let header = move || tabs.with(TabController::header_text);

    view! {
        <Title text=header/>
        <h2 id="page-title">
            <span>{header}</span>
        </h2>
    }
}
