//! Failure tooltip for a template's rebuild link.

use leptos::prelude::*;

/// Dismissible tooltip. Its top-right corner sits at the bottom-left of the
/// status link it is anchored to.
#[component]
pub fn RebuildTooltip(message: String, on_dismiss: Callback<()>) -> impl IntoView {
    view! {
        <div class="rebuild-tooltip" role="alert" style="position: absolute; top: 100%; right: 100%;">
            <span class="rebuild-tooltip__message">{message}</span>
            <button class="rebuild-tooltip__close" title="Dismiss" on:click=move |_| on_dismiss.run(())>
                "\u{2715}"
            </button>
        </div>
    }
}
