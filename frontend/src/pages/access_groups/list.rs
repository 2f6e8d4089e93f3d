use std::rc::Rc;

use proxy_console_shared::{
    access_group::{AccessGroupCreateParams, AccessGroupSort},
    resource::display_or_placeholder,
    screen::{abbreviate_id, ModalState},
    AccessGroup, Resource,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        delete_resource_modal::{DeleteResourceModal, InfoRow},
        empty_state::render_collection,
        modal::BUTTON_PRIMARY,
        notification::use_notify,
        resource_table::{Column, ResourceTable},
    },
    hooks::{confirm_delete_callback, spawn_mutation, use_query, use_resource_screen},
    i18n::{
        current::{access_groups as t, common},
        fill_one,
    },
    pages::PageHeader,
    router::{Route, UiPrefs},
};

use super::form_modal::AccessGroupFormModal;

fn count_badge(template: &str, count: usize) -> Html {
    let tone = if count == 0 { "text-[var(--muted)]" } else { "text-[var(--primary)]" };
    html! {
        <span class={classes!("rounded-full", "bg-[var(--surface-alt)]", "px-2", "py-0.5", "text-xs", "font-semibold", tone)}>
            { fill_one(template, count) }
        </span>
    }
}

fn columns() -> Vec<Column<AccessGroup>> {
    vec![
        Column::new(common::ID, |group: &AccessGroup| {
            html! {
                <Link<Route>
                    to={Route::AccessGroupDetail { id: group.id.clone() }}
                    classes="font-mono text-xs text-[var(--primary)] hover:underline"
                >
                    { abbreviate_id(&group.id) }
                </Link<Route>>
            }
        }),
        Column::new(common::NAME, |group: &AccessGroup| html! {
            <span class="font-semibold">{ group.name.clone() }</span>
        })
        .sortable(AccessGroupSort::Name),
        Column::new(common::DESCRIPTION, |group: &AccessGroup| html! {
            <span class="text-[var(--muted)]">{ display_or_placeholder(group.description()).to_string() }</span>
        }),
        Column::new(t::COL_RESOURCES, |group: &AccessGroup| html! {
            <div class="flex flex-wrap gap-1">
                { count_badge(t::BADGE_MODELS_TEMPLATE, group.model_ids.len()) }
                { count_badge(t::BADGE_MCP_TEMPLATE, group.mcp_server_ids.len()) }
                { count_badge(t::BADGE_AGENTS_TEMPLATE, group.agent_ids.len()) }
            </div>
        }),
        Column::new(common::CREATED, |group: &AccessGroup| html! {
            <span class="whitespace-nowrap text-[var(--muted)]">
                { group.audit.created_at.format("%Y-%m-%d %H:%M").to_string() }
            </span>
        })
        .sortable(AccessGroupSort::CreatedAt),
    ]
}

#[function_component(AccessGroupsPage)]
pub fn access_groups_page() -> Html {
    let groups = use_query((), |_| async { api::fetch_access_groups().await.map(Some) });
    let screen = use_resource_screen();
    let notify = use_notify();
    let compact = use_context::<UiPrefs>().map(|prefs| prefs.compact_rows).unwrap_or(false);
    let columns = use_memo((), |_| columns());

    let snapshot = screen.snapshot();
    let pending = snapshot.mutation().is_pending();
    let highlighted = snapshot.target().map(|id| AttrValue::from(id.to_string()));
    let rows: Rc<Vec<AccessGroup>> = Rc::new(groups.state.loaded().cloned().unwrap_or_default());
    let find = |id: &str| rows.iter().find(|group| group.id == id).cloned();

    let open_create = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.update(|s| s.open_create()))
    };
    let on_edit = {
        let screen = screen.clone();
        Callback::from(move |group: AccessGroup| screen.update(|s| s.open_edit(group.id)))
    };
    let on_delete = {
        let screen = screen.clone();
        Callback::from(move |group: AccessGroup| screen.update(|s| s.request_delete(group.id)))
    };
    let on_cancel = {
        let screen = screen.clone();
        Callback::from(move |_: ()| screen.update(|s| s.cancel()))
    };

    let on_create_submit = {
        let screen = screen.clone();
        let notify = notify.clone();
        let refetch = groups.refetch.clone();
        Callback::from(move |params: AccessGroupCreateParams| {
            spawn_mutation(
                screen.clone(),
                async move { api::create_access_group(&params).await },
                |group: &AccessGroup| fill_one(t::CREATED_TEMPLATE, &group.name),
                t::CREATE_FAILED,
                notify.clone(),
                refetch.clone(),
                None,
            );
        })
    };

    let on_edit_submit = {
        let screen = screen.clone();
        let notify = notify.clone();
        let refetch = groups.refetch.clone();
        Callback::from(move |(id, params): (String, AccessGroupCreateParams)| {
            spawn_mutation(
                screen.clone(),
                async move { api::update_access_group(&id, &params).await },
                |group: &AccessGroup| fill_one(t::UPDATED_TEMPLATE, &group.name),
                t::UPDATE_FAILED,
                notify.clone(),
                refetch.clone(),
                None,
            );
        })
    };

    let on_confirm_delete = confirm_delete_callback(
        screen.clone(),
        |id: String| async move { api::delete_access_group(&id).await },
        t::DELETED,
        t::DELETE_FAILED,
        notify.clone(),
        groups.refetch.clone(),
    );

    let modal = match snapshot.modal() {
        ModalState::Closed => Html::default(),
        ModalState::Create => html! {
            <AccessGroupFormModal
                {pending}
                on_submit={on_create_submit}
                on_cancel={on_cancel.clone()}
            />
        },
        ModalState::Edit(id) => match find(id.as_str()) {
            Some(group) => {
                let id = id.clone();
                let on_submit = on_edit_submit.reform(move |params| (id.clone(), params));
                html! {
                    <AccessGroupFormModal
                        key={group.id.clone()}
                        group={Some(group.clone())}
                        {pending}
                        {on_submit}
                        on_cancel={on_cancel.clone()}
                    />
                }
            },
            None => Html::default(),
        },
        ModalState::Delete(id) => {
            let rows = match find(id.as_str()) {
                Some(group) => vec![
                    InfoRow::text(common::NAME, group.name.clone()),
                    InfoRow::code(common::ID, group.id.clone()),
                    InfoRow::text(t::COL_RESOURCES, format!(
                        "{} / {} / {}",
                        fill_one(t::BADGE_MODELS_TEMPLATE, group.model_ids.len()),
                        fill_one(t::BADGE_MCP_TEMPLATE, group.mcp_server_ids.len()),
                        fill_one(t::BADGE_AGENTS_TEMPLATE, group.agent_ids.len()),
                    )),
                ],
                None => vec![InfoRow::code(common::ID, id.clone())],
            };
            html! {
                <DeleteResourceModal
                    title={t::DELETE_TITLE}
                    message={t::DELETE_MESSAGE}
                    info_title={t::DELETE_INFO_TITLE}
                    {rows}
                    on_ok={on_confirm_delete}
                    on_cancel={on_cancel.clone()}
                    confirm_loading={pending}
                />
            }
        },
    };

    let create_button = html! {
        <button type="button" class={BUTTON_PRIMARY} onclick={open_create.clone()}>
            <i class="fas fa-plus" aria-hidden="true"></i>
            { t::CREATE_BUTTON }
        </button>
    };

    let content = render_collection(&groups.state, groups.refetch.clone(), || html! {
        <ResourceTable<AccessGroup>
            items={rows.clone()}
            columns={(*columns).clone()}
            empty_title={t::EMPTY_TITLE}
            empty_message={t::EMPTY_MESSAGE}
            empty_action={html! {
                <button type="button" class={BUTTON_PRIMARY} onclick={open_create.clone()}>{ t::CREATE_BUTTON }</button>
            }}
            on_edit={Some(on_edit)}
            {on_delete}
            {compact}
            actions_disabled={pending}
            highlighted={highlighted.clone()}
        />
    });

    html! {
        <main class="mx-auto max-w-6xl px-4 py-8">
            <PageHeader title={t::TITLE} subtitle={Some(AttrValue::from(t::SUBTITLE))} action={create_button} />
            { content }
            { modal }
        </main>
    }
}
