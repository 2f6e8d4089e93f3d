use proxy_console_shared::{
    access_group::AccessGroupCreateParams,
    resource::display_or_placeholder,
    screen::ModalState,
    AccessGroup, AssociationSet, Resource,
};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        association_preview::AssociationPanel,
        empty_state::{render_detail, EmptyState, NotFoundCopy},
        modal::BUTTON_PRIMARY,
        notification::use_notify,
    },
    hooks::{spawn_mutation, use_query, use_resource_screen},
    i18n::{
        current::{access_group_detail as t, access_groups as list_text, common},
        fill_one,
    },
    router::Route,
};

use super::form_modal::AccessGroupFormModal;

#[derive(Clone, Copy, PartialEq)]
enum DetailTab {
    Models,
    McpServers,
    Agents,
}

impl DetailTab {
    const ALL: [DetailTab; 3] = [DetailTab::Models, DetailTab::McpServers, DetailTab::Agents];

    fn label(self) -> &'static str {
        match self {
            DetailTab::Models => t::TAB_MODELS,
            DetailTab::McpServers => t::TAB_MCP,
            DetailTab::Agents => t::TAB_AGENTS,
        }
    }

    fn empty_text(self) -> &'static str {
        match self {
            DetailTab::Models => t::NO_MODELS,
            DetailTab::McpServers => t::NO_MCP,
            DetailTab::Agents => t::NO_AGENTS,
        }
    }

    fn ids(self, group: &AccessGroup) -> &AssociationSet {
        match self {
            DetailTab::Models => &group.model_ids,
            DetailTab::McpServers => &group.mcp_server_ids,
            DetailTab::Agents => &group.agent_ids,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AccessGroupDetailPageProps {
    pub id: String,
}

#[function_component(AccessGroupDetailPage)]
pub fn access_group_detail_page(props: &AccessGroupDetailPageProps) -> Html {
    let detail = use_query(props.id.clone(), |id: String| async move { api::fetch_access_group(&id).await });
    let screen = use_resource_screen();
    let notify = use_notify();
    let navigator = use_navigator();
    let tab = use_state(|| DetailTab::Models);

    let snapshot = screen.snapshot();
    let pending = snapshot.mutation().is_pending();

    let on_back = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::AccessGroups);
        }
    });

    let on_cancel = {
        let screen = screen.clone();
        Callback::from(move |_: ()| screen.update(|s| s.cancel()))
    };

    let on_submit = {
        let screen = screen.clone();
        let notify = notify.clone();
        let refetch = detail.refetch.clone();
        let id = props.id.clone();
        Callback::from(move |params: AccessGroupCreateParams| {
            let id = id.clone();
            spawn_mutation(
                screen.clone(),
                async move { api::update_access_group(&id, &params).await },
                |group: &AccessGroup| fill_one(list_text::UPDATED_TEMPLATE, &group.name),
                list_text::UPDATE_FAILED,
                notify.clone(),
                refetch.clone(),
                None,
            );
        })
    };

    let copy = NotFoundCopy {
        title: t::NOT_FOUND_TITLE,
        message: t::NOT_FOUND_MESSAGE,
        back_label: t::BACK,
    };

    let body = render_detail(&detail.state, copy, on_back, detail.refetch.clone(), |group| {
        let open_edit = {
            let screen = screen.clone();
            let id = group.id.clone();
            Callback::from(move |_: MouseEvent| {
                let id = id.clone();
                screen.update(|s| s.open_edit(id));
            })
        };

        let current = *tab;
        let tabs = DetailTab::ALL.iter().map(|&candidate| {
            let onclick = {
                let tab = tab.clone();
                Callback::from(move |_: MouseEvent| tab.set(candidate))
            };
            let active = current == candidate;
            html! {
                <button
                    type="button"
                    class={classes!(
                        "border-b-2", "px-3", "py-2", "text-sm", "font-semibold",
                        if active { "border-[var(--primary)] text-[var(--primary)]" } else { "border-transparent text-[var(--muted)]" }
                    )}
                    {onclick}
                >
                    { candidate.label() }
                    <span class="ml-1.5 rounded-full bg-[var(--surface-alt)] px-2 text-xs">
                        { candidate.ids(group).len() }
                    </span>
                </button>
            }
        });

        let ids = current.ids(group);
        let tab_body = if ids.is_empty() {
            html! { <EmptyState title={current.empty_text()} /> }
        } else {
            html! {
                <div class="grid gap-3 sm:grid-cols-2 lg:grid-cols-3">
                    { for ids.iter().map(|id| html! {
                        <div key={id.clone()} class="rounded-xl border border-[var(--border)] bg-[var(--surface)] p-4 font-mono text-sm">
                            { id.clone() }
                        </div>
                    }) }
                </div>
            }
        };

        let audit = group.audit();
        html! {
            <>
                <div class="mb-6 flex flex-wrap items-start justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold">{ group.name.clone() }</h1>
                        <p class="mt-1 font-mono text-xs text-[var(--muted)]">{ group.id.clone() }</p>
                    </div>
                    <button type="button" class={BUTTON_PRIMARY} onclick={open_edit}>
                        <i class="fas fa-pen" aria-hidden="true"></i>
                        { t::EDIT_BUTTON }
                    </button>
                </div>

                <section class="mb-6 rounded-xl border border-[var(--border)] p-4">
                    <h2 class="mb-3 font-semibold">{ t::OVERVIEW }</h2>
                    <dl class="grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm">
                        <dt class="text-[var(--muted)]">{ common::DESCRIPTION }</dt>
                        <dd>{ display_or_placeholder(group.description()).to_string() }</dd>
                        <dt class="text-[var(--muted)]">{ common::CREATED }</dt>
                        <dd>{ audit.created_at.format("%Y-%m-%d %H:%M:%S").to_string() }</dd>
                        <dt class="text-[var(--muted)]">{ common::CREATED_BY }</dt>
                        <dd>{ display_or_placeholder(audit.created_by.as_deref()).to_string() }</dd>
                        <dt class="text-[var(--muted)]">{ common::UPDATED }</dt>
                        <dd>{ audit.updated_at.format("%Y-%m-%d %H:%M:%S").to_string() }</dd>
                        <dt class="text-[var(--muted)]">{ common::UPDATED_BY }</dt>
                        <dd>{ display_or_placeholder(audit.updated_by.as_deref()).to_string() }</dd>
                    </dl>
                </section>

                <div class="mb-4 flex gap-1 border-b border-[var(--border)]">
                    { for tabs }
                </div>
                <div class="mb-6">{ tab_body }</div>

                <div class="grid gap-4 md:grid-cols-2">
                    <AssociationPanel
                        title={t::KEYS_TITLE}
                        ids={group.key_ids.to_vec()}
                        empty_text={t::NO_KEYS}
                        abbreviate={true}
                    />
                    <AssociationPanel
                        title={t::TEAMS_TITLE}
                        ids={group.team_ids.to_vec()}
                        empty_text={t::NO_TEAMS}
                    />
                </div>
            </>
        }
    });

    let modal = match (snapshot.modal(), detail.state.loaded()) {
        (ModalState::Edit(_), Some(group)) => html! {
            <AccessGroupFormModal
                group={Some(group.clone())}
                {pending}
                {on_submit}
                on_cancel={on_cancel}
            />
        },
        _ => Html::default(),
    };

    html! {
        <main class="mx-auto max-w-6xl px-4 py-8">
            <Link<Route> to={Route::AccessGroups} classes="mb-4 inline-flex items-center gap-2 text-sm text-[var(--muted)] hover:text-[var(--primary)]">
                <i class="fas fa-arrow-left" aria-hidden="true"></i>
                { t::BACK }
            </Link<Route>>
            { body }
            { modal }
        </main>
    }
}
