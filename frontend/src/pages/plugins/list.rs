use std::rc::Rc;

use proxy_console_shared::{
    plugin::{PluginCreateRequest, PluginSort},
    resource::display_or_placeholder,
    screen::{ModalState, Notice},
    Plugin, Resource,
};
use yew::prelude::*;

use crate::{
    api,
    components::{
        delete_resource_modal::{DeleteResourceModal, InfoRow},
        empty_state::render_collection,
        modal::BUTTON_PRIMARY,
        notification::use_notify,
        resource_table::{Column, ResourceTable},
    },
    hooks::{confirm_delete_callback, spawn_mutation, use_query, use_resource_screen, ScreenHandle},
    i18n::{
        current::{common, plugins as t},
        fill_one,
    },
    pages::PageHeader,
    router::UiPrefs,
};

use super::add_form::PluginFormModal;

/// Columns capture the toggle handler, so they are rebuilt when it changes.
fn columns(on_toggle: Callback<Plugin>, disabled: bool) -> Vec<Column<Plugin>> {
    vec![
        Column::new(common::NAME, |plugin: &Plugin| html! {
            <div>
                <span class="font-semibold">{ plugin.name.clone() }</span>
                if !plugin.keywords.is_empty() {
                    <div class="mt-1 flex flex-wrap gap-1">
                        { for plugin.keywords.iter().map(|keyword| html! {
                            <span class="rounded bg-[var(--surface-alt)] px-1.5 text-xs text-[var(--muted)]">{ keyword.clone() }</span>
                        }) }
                    </div>
                }
            </div>
        })
        .sortable(PluginSort::Name),
        Column::new(t::COL_VERSION, |plugin: &Plugin| html! {
            <span class="font-mono text-xs">{ display_or_placeholder(plugin.version.as_deref()).to_string() }</span>
        })
        .sortable(PluginSort::Version),
        Column::new(t::COL_SOURCE, |plugin: &Plugin| html! {
            <span class="break-all font-mono text-xs">{ plugin.source.location().to_string() }</span>
        }),
        Column::new(t::COL_CATEGORY, |plugin: &Plugin| html! {
            <span>{ display_or_placeholder(plugin.category.as_deref()).to_string() }</span>
        }),
        Column::new(common::DESCRIPTION, |plugin: &Plugin| html! {
            <span class="text-[var(--muted)]">{ display_or_placeholder(plugin.description()).to_string() }</span>
        }),
        Column::new(t::COL_ENABLED, move |plugin: &Plugin| {
            let onchange = {
                let on_toggle = on_toggle.clone();
                let plugin = plugin.clone();
                Callback::from(move |_: Event| on_toggle.emit(plugin.clone()))
            };
            html! {
                <input type="checkbox" checked={plugin.enabled} {disabled} {onchange} aria-label={t::COL_ENABLED} />
            }
        }),
        Column::new(common::CREATED, |plugin: &Plugin| html! {
            <span class="whitespace-nowrap text-[var(--muted)]">
                { plugin.audit.created_at.format("%Y-%m-%d %H:%M").to_string() }
            </span>
        })
        .sortable(PluginSort::CreatedAt),
    ]
}

fn toggle_callback(screen: ScreenHandle, notify: Callback<Notice>, refetch: Callback<()>) -> Callback<Plugin> {
    Callback::from(move |plugin: Plugin| {
        let enable = !plugin.enabled;
        let name = plugin.name.clone();
        spawn_mutation(
            screen.clone(),
            async move { api::set_plugin_enabled(&name, enable).await },
            move |_: &()| {
                let template = if enable { t::ENABLED_TEMPLATE } else { t::DISABLED_TEMPLATE };
                fill_one(template, &plugin.name)
            },
            t::TOGGLE_FAILED,
            notify.clone(),
            refetch.clone(),
            None,
        );
    })
}

#[function_component(PluginsPage)]
pub fn plugins_page() -> Html {
    let plugins = use_query((), |_| async { api::fetch_plugins().await.map(Some) });
    let screen = use_resource_screen();
    let notify = use_notify();
    let compact = use_context::<UiPrefs>().map(|prefs| prefs.compact_rows).unwrap_or(false);

    let snapshot = screen.snapshot();
    let pending = snapshot.mutation().is_pending();
    let rows: Rc<Vec<Plugin>> = Rc::new(plugins.state.loaded().cloned().unwrap_or_default());
    // Delete is keyed by name; the table highlights by id.
    let highlighted = snapshot
        .target()
        .and_then(|name| rows.iter().find(|plugin| plugin.name == name))
        .map(|plugin| AttrValue::from(plugin.id.clone()));

    let columns = {
        let screen = screen.clone();
        let notify = notify.clone();
        let refetch = plugins.refetch.clone();
        use_memo(pending, move |disabled| columns(toggle_callback(screen, notify, refetch), *disabled))
    };

    let open_create = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.update(|s| s.open_create()))
    };
    let on_delete = {
        let screen = screen.clone();
        Callback::from(move |plugin: Plugin| screen.update(|s| s.request_delete(plugin.name)))
    };
    let on_cancel = {
        let screen = screen.clone();
        Callback::from(move |_: ()| screen.update(|s| s.cancel()))
    };
    let on_create_submit = {
        let screen = screen.clone();
        let notify = notify.clone();
        let refetch = plugins.refetch.clone();
        Callback::from(move |request: PluginCreateRequest| {
            spawn_mutation(
                screen.clone(),
                async move { api::create_plugin(&request).await },
                |plugin: &Plugin| fill_one(t::CREATED_TEMPLATE, &plugin.name),
                t::CREATE_FAILED,
                notify.clone(),
                refetch.clone(),
                None,
            );
        })
    };
    let on_confirm_delete = confirm_delete_callback(
        screen.clone(),
        |name: String| async move { api::delete_plugin(&name).await },
        t::DELETED,
        t::DELETE_FAILED,
        notify.clone(),
        plugins.refetch.clone(),
    );

    let modal = match snapshot.modal() {
        ModalState::Create => html! {
            <PluginFormModal {pending} on_submit={on_create_submit} on_cancel={on_cancel.clone()} />
        },
        ModalState::Delete(name) => {
            let info = match rows.iter().find(|plugin| plugin.name == *name) {
                Some(plugin) => vec![
                    InfoRow::text(common::NAME, plugin.name.clone()),
                    InfoRow::text(t::COL_VERSION, display_or_placeholder(plugin.version.as_deref()).to_string()),
                    InfoRow::code(t::COL_SOURCE, plugin.source.location().to_string()),
                ],
                None => vec![InfoRow::text(common::NAME, name.clone())],
            };
            html! {
                <DeleteResourceModal
                    title={t::DELETE_TITLE}
                    message={t::DELETE_MESSAGE}
                    info_title={t::DELETE_INFO_TITLE}
                    rows={info}
                    on_ok={on_confirm_delete}
                    on_cancel={on_cancel.clone()}
                    confirm_loading={pending}
                />
            }
        },
        ModalState::Closed | ModalState::Edit(_) => Html::default(),
    };

    let add_button = html! {
        <button type="button" class={BUTTON_PRIMARY} onclick={open_create.clone()}>
            <i class="fas fa-plus" aria-hidden="true"></i>
            { t::ADD_BUTTON }
        </button>
    };

    let content = render_collection(&plugins.state, plugins.refetch.clone(), || html! {
        <ResourceTable<Plugin>
            items={rows.clone()}
            columns={(*columns).clone()}
            empty_title={t::EMPTY_TITLE}
            empty_message={t::EMPTY_MESSAGE}
            empty_action={html! {
                <button type="button" class={BUTTON_PRIMARY} onclick={open_create.clone()}>{ t::ADD_BUTTON }</button>
            }}
            {on_delete}
            {compact}
            actions_disabled={pending}
            highlighted={highlighted.clone()}
        />
    });

    html! {
        <main class="mx-auto max-w-6xl px-4 py-8">
            <PageHeader title={t::TITLE} subtitle={Some(AttrValue::from(t::SUBTITLE))} action={add_button} />
            { content }
            { modal }
        </main>
    }
}
