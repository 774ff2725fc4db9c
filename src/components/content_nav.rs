//! Tab navigation list.

use leptos::prelude::*;

use crate::state::changes::ChangeTracker;
use crate::state::tabs::{TabController, Transition};
use crate::util::location;

/// Activate `id` and record it in the URL fragment.
pub fn switch_tab(tabs: RwSignal<TabController>, id: &str) {
    let transition = tabs.try_update(|c| c.transition(id));
    if let Some(Transition::Switched { from, to }) = transition {
        log::debug!("tab {from} -> {to}");
        location::write_fragment(&to);
    }
}

/// `#content-nav` list. Each item carries `active` when its tab is shown
/// and `changed` once one of its fields was edited.
#[component]
pub fn ContentNav() -> impl IntoView {
    let tabs = expect_context::<RwSignal<TabController>>();
    let changes = expect_context::<RwSignal<ChangeTracker>>();

    let items = tabs
        .with_untracked(|c| c.tabs().to_vec())
        .into_iter()
        .map(|tab| {
            let id = tab.id;
            let label = tab.label;

            let is_active = {
                let id = id.clone();
                move || tabs.with(|c| c.is_active(&id))
            };
            let is_changed = {
                let id = id.clone();
                move || changes.with(|c| c.is_changed(&id))
            };
            let on_click = {
                let id = id.clone();
                move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    switch_tab(tabs, &id);
                }
            };

            view! {
                <li class=format!("{id}-tab") class:active=is_active class:changed=is_changed>
                    <a href=format!("#{id}") id=format!("{id}-tab") title=label.clone() on:click=on_click>
                        <b>{label.clone()}</b>
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <div id="content-nav">
            <ul>{items}</ul>
        </div>
    }
}
