//! Templates table with a per-row rebuild link.
//!
//! Clicking a status link shows the pending icon at once, then fires one
//! request. Requests are independent: no de-duplication, no cancellation,
//! no timeout.

use leptos::prelude::*;

use crate::components::rebuild_tooltip::RebuildTooltip;
use crate::config::{AssetPaths, EndpointConfig};
use crate::net::rebuild::{RebuildRequest, send_rebuild};
use crate::state::rebuild::TemplatesState;

/// Mark row `id` pending and send its rebuild request.
pub fn start_rebuild(templates: RwSignal<TemplatesState>, endpoint: &EndpointConfig, id: &str) {
    if !templates.try_update(|s| s.begin(id)).unwrap_or(false) {
        return;
    }
    let request = RebuildRequest::new(endpoint, id);
    let id = id.to_owned();
    leptos::task::spawn_local(async move {
        let outcome = send_rebuild(request).await;
        templates.update(|s| s.apply(&id, &outcome));
    });
}

#[component]
pub fn TemplatesTable() -> impl IntoView {
    let templates = expect_context::<RwSignal<TemplatesState>>();
    let assets = expect_context::<AssetPaths>();
    let endpoint = expect_context::<EndpointConfig>();

    let on_dismiss = Callback::new(move |()| templates.update(TemplatesState::dismiss_tooltip));

    let rows = templates
        .with_untracked(|s| s.rows.clone())
        .into_iter()
        .map(|row| {
            let id = row.id;

            let style = {
                let id = id.clone();
                let assets = assets.clone();
                move || {
                    templates
                        .with(|s| s.row(&id).and_then(|r| r.status.background(&assets)))
                        .map(|bg| format!("background: {bg}"))
                        .unwrap_or_default()
                }
            };
            let tooltip = {
                let id = id.clone();
                move || {
                    templates
                        .with(|s| s.tooltip_for(&id).map(str::to_owned))
                        .map(|message| view! { <RebuildTooltip message on_dismiss/> })
                }
            };
            let on_click = {
                let id = id.clone();
                let endpoint = endpoint.clone();
                move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    start_rebuild(templates, &endpoint, &id);
                }
            };

            view! {
                <tr>
                    <td class="cb">
                        <input type="hidden" name="id" value=id.clone()/>
                    </td>
                    <td class="name">{row.name}</td>
                    <td class="kind">{row.kind.unwrap_or_default()}</td>
                    <td class="status">
                        <span class="status-anchor" style="position: relative; display: inline-block;">
                            <a href="#" class="rebuild-link" title="Rebuild this template" style=style on:click=on_click></a>
                            {tooltip}
                        </span>
                    </td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <table id="templates-table" class="listing-table">
            <thead>
                <tr>
                    <th class="cb"></th>
                    <th class="name">"Template"</th>
                    <th class="kind">"Type"</th>
                    <th class="status">"Rebuild"</th>
                </tr>
            </thead>
            <tbody>{rows}</tbody>
        </table>
    }
}
