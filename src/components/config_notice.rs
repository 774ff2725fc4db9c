//! Inline notice shown when the screen description cannot be used.

use leptos::prelude::*;
use leptos_meta::Title;

#[component]
pub fn ConfigNotice(message: String) -> impl IntoView {
    view! {
        <Title text="Theme Manager"/>
        <div class="msg msg-error">
            <p>"The Theme Manager screen could not be loaded."</p>
            <p class="msg-detail">{message}</p>
        </div>
    }
}
