//! Image-grid radio widget.

use leptos::prelude::*;

use crate::config::FieldDecl;
use crate::state::changes::ChangeTracker;
use crate::state::image_radio::ImageRadioGroup;

/// Clickable list of images backed by a native radio group. Clicking an
/// item checks its input, moves the `selected` marker and flags the owning
/// tab as changed.
#[component]
pub fn ImageRadio(field: FieldDecl) -> impl IntoView {
    let changes = expect_context::<RwSignal<ChangeTracker>>();
    let group = RwSignal::new(ImageRadioGroup::from_field(&field));
    let name = field.name;

    let items = group
        .with_untracked(|g| g.options.clone())
        .into_iter()
        .enumerate()
        .map(|(i, opt)| {
            let input_id = group.with_untracked(|g| g.option_input_id(i));
            let checked = move || group.with(|g| g.options[i].checked);
            let selected = move || group.with(|g| g.options[i].selected);
            let on_click = move |_| {
                let owner = group.try_update(|g| g.click(i).map(str::to_owned)).flatten();
                if let Some(tab) = owner {
                    changes.update(|c| {
                        c.mark(&tab);
                    });
                    group.with_untracked(|g| log::debug!("{} -> {:?}", g.name, g.checked_value()));
                }
            };

            let alt = opt.label.clone();
            let image = opt.image.map(|src| view! { <img src=src alt=alt/> });

            view! {
                <li class:selected=selected on:click=on_click>
                    <input type="radio" id=input_id name=name.clone() value=opt.value prop:checked=checked/>
                    {image}
                    <span class="label">{opt.label}</span>
                </li>
            }
        })
        .collect_view();

    view! { <ul class="field-type-radio-image">{items}</ul> }
}
