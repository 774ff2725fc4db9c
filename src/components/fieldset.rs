//! Per-tab fieldsets.
//!
//! Any `change` event on a field marks the field's owning tab as changed.
//! Field values themselves go to the server with the native form post.

use leptos::prelude::*;

use crate::components::image_radio::ImageRadio;
use crate::config::{FieldDecl, FieldKind, field_input_id};
use crate::state::changes::ChangeTracker;

#[component]
pub fn Fieldset(tab: String, fields: Vec<FieldDecl>) -> impl IntoView {
    let rows = fields.into_iter().map(|field| view! { <FieldRow field/> }).collect_view();

    view! {
        <fieldset id=tab class="tab-fields">
            {rows}
        </fieldset>
    }
}

/// One labelled field.
#[component]
pub fn FieldRow(field: FieldDecl) -> impl IntoView {
    let changes = expect_context::<RwSignal<ChangeTracker>>();

    let owner = field.tab.clone();
    let on_change = move |_| {
        changes.update(|c| {
            c.mark(&owner);
        });
    };

    let input_id = field_input_id(&field.name);
    let label = field.label.clone();
    let hint = field.hint.clone();
    let class = format!("field field-type-{}", kind_class(field.kind));

    let control = match field.kind {
        FieldKind::Text => view! {
            <input type="text" id=input_id.clone() name=field.name value=field.value on:change=on_change/>
        }
        .into_any(),
        FieldKind::Textarea => view! {
            <textarea id=input_id.clone() name=field.name rows="6" on:change=on_change>{field.value}</textarea>
        }
        .into_any(),
        FieldKind::Select => {
            let current = field.value;
            let options = field
                .choices
                .into_iter()
                .map(|c| {
                    let selected = c.value == current;
                    let text = if c.label.is_empty() { c.value.clone() } else { c.label };
                    view! { <option value=c.value selected=selected>{text}</option> }
                })
                .collect_view();
            view! {
                <select id=input_id.clone() name=field.name on:change=on_change>{options}</select>
            }
            .into_any()
        }
        FieldKind::RadioImage => view! { <ImageRadio field/> }.into_any(),
    };

    view! {
        <div class=class>
            <div class="field-header">
                <label for=input_id>{label}</label>
            </div>
            <div class="field-content">
                {control}
                {hint.map(|h| view! { <p class="hint">{h}</p> })}
            </div>
        </div>
    }
}

fn kind_class(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Text => "text",
        FieldKind::Textarea => "textarea",
        FieldKind::Select => "select",
        FieldKind::RadioImage => "radio-image",
    }
}
