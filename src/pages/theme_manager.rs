//! Theme Manager page — header, tab navigation and tab panels.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_query_map};

use crate::components::config_notice::ConfigNotice;
use crate::components::content_nav::ContentNav;
use crate::components::fieldset::Fieldset;
use crate::components::page_title::PageTitle;
use crate::components::templates_table::TemplatesTable;
use crate::config::{FieldDecl, ScreenConfig};
use crate::state::changes::ChangeTracker;
use crate::state::rebuild::TemplatesState;
use crate::state::tabs::{InitialHints, TabController};

/// Builds the screen state from `config` and the current URL, provides it
/// as context, and lays out the page.
///
/// The initial tab comes from the pagination parameter, then the URL
/// fragment, then the server's declared tab. Later fragment changes (back
/// and forward navigation) switch tabs too.
#[component]
pub fn ThemeManagerPage(config: ScreenConfig) -> impl IntoView {
    let location = use_location();
    let query = use_query_map();

    let hints = InitialHints {
        fragment: Some(location.hash.get_untracked()).filter(|h| !h.is_empty()),
        paginated: query.with_untracked(|q| q.get(&config.pagination_param).is_some()),
    };
    let controller = match TabController::new(&config, &hints) {
        Ok((controller, source)) => {
            log::debug!("initial tab {} ({source:?})", controller.active().id);
            controller
        }
        Err(e) => {
            log::error!("{e}");
            return view! { <ConfigNotice message=e.to_string()/> }.into_any();
        }
    };

    let tab_list = controller.tabs().to_vec();
    let tabs = RwSignal::new(controller);
    let changes = RwSignal::new(ChangeTracker::new(config.tabs.iter().map(|t| t.id.clone())));
    let templates = RwSignal::new(TemplatesState::new(&config.templates));

    provide_context(tabs);
    provide_context(changes);
    provide_context(templates);
    provide_context(config.assets.clone());
    provide_context(config.endpoint.clone());

    // Skip the first run: the load-time fragment was already considered,
    // and pagination may have overridden it. An empty hash maps back to the
    // load-time tab.
    Effect::new(move |prev: Option<String>| {
        let hash = location.hash.get();
        if prev.is_some_and(|p| p != hash) {
            tabs.update(|c| {
                c.follow_fragment(&hash);
            });
        }
        hash
    });

    let panels = tab_list
        .into_iter()
        .map(|tab| {
            let panel_id = tab.panel_id();
            let fields: Vec<FieldDecl> = config.fields_for(&tab.id).cloned().collect();
            let has_templates = config.templates_tab.as_deref() == Some(tab.id.as_str());

            let style = {
                let id = tab.id.clone();
                move || if tabs.with(|c| c.is_active(&id)) { "display: block" } else { "display: none" }
            };

            view! {
                <div id=panel_id class="tab-content" style=style>
                    <Fieldset tab=tab.id.clone() fields/>
                    {has_templates.then(|| view! { <TemplatesTable/> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="theme-manager">
            <PageTitle/>
            <ContentNav/>
            <div id="fieldsets">{panels}</div>
        </div>
    }
    .into_any()
}
