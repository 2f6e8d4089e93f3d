use std::rc::Rc;

use proxy_console_shared::{
    agent::AgentSort,
    resource::display_or_placeholder,
    screen::{abbreviate_id, ModalState},
    Agent,
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
    hooks::{confirm_delete_callback, use_query, use_resource_screen},
    i18n::current::{agents as t, common},
    pages::PageHeader,
    router::{Route, UiPrefs},
};

use super::wizard::AgentWizardModal;

fn card_url(agent: &Agent) -> Option<&str> {
    agent
        .agent_card_params
        .as_ref()
        .map(|card| card.url.as_str())
        .filter(|url| !url.is_empty())
}

fn columns() -> Vec<Column<Agent>> {
    vec![
        Column::new(common::ID, |agent: &Agent| html! {
            <Link<Route>
                to={Route::AgentDetail { id: agent.agent_id.clone() }}
                classes="font-mono text-xs text-[var(--primary)] hover:underline"
            >
                { abbreviate_id(&agent.agent_id) }
            </Link<Route>>
        }),
        Column::new(common::NAME, |agent: &Agent| html! {
            <span class="font-semibold">{ agent.agent_name.clone() }</span>
        })
        .sortable(AgentSort::Name),
        Column::new(t::COL_URL, |agent: &Agent| html! {
            <span class="break-all font-mono text-xs">{ display_or_placeholder(card_url(agent)).to_string() }</span>
        }),
        Column::new(t::COL_STREAMING, |agent: &Agent| {
            let streaming = agent.agent_card_params.as_ref().map(|card| card.capabilities.streaming).unwrap_or(false);
            html! { <span>{ if streaming { common::YES } else { common::NO } }</span> }
        }),
        Column::new(common::CREATED, |agent: &Agent| html! {
            <span class="whitespace-nowrap text-[var(--muted)]">
                { agent.audit.created_at.format("%Y-%m-%d %H:%M").to_string() }
            </span>
        })
        .sortable(AgentSort::CreatedAt),
    ]
}

#[function_component(AgentsPage)]
pub fn agents_page() -> Html {
    let agents = use_query((), |_| async { api::fetch_agents().await.map(Some) });
    let screen = use_resource_screen();
    let notify = use_notify();
    let compact = use_context::<UiPrefs>().map(|prefs| prefs.compact_rows).unwrap_or(false);
    let columns = use_memo((), |_| columns());

    let snapshot = screen.snapshot();
    let pending = snapshot.mutation().is_pending();
    let highlighted = snapshot.target().map(|id| AttrValue::from(id.to_string()));
    let rows: Rc<Vec<Agent>> = Rc::new(agents.state.loaded().cloned().unwrap_or_default());

    let open_wizard = {
        let screen = screen.clone();
        Callback::from(move |_: MouseEvent| screen.update(|s| s.open_create()))
    };
    let on_delete = {
        let screen = screen.clone();
        Callback::from(move |agent: Agent| screen.update(|s| s.request_delete(agent.agent_id)))
    };
    let on_cancel = {
        let screen = screen.clone();
        Callback::from(move |_: ()| screen.update(|s| s.cancel()))
    };
    let on_confirm_delete = confirm_delete_callback(
        screen.clone(),
        |id: String| async move { api::delete_agent(&id).await },
        t::DELETED,
        t::DELETE_FAILED,
        notify.clone(),
        agents.refetch.clone(),
    );

    let modal = match snapshot.modal() {
        ModalState::Create => html! {
            <AgentWizardModal on_close={on_cancel.clone()} on_created={agents.refetch.clone()} />
        },
        ModalState::Delete(id) => {
            let info = match rows.iter().find(|agent| agent.agent_id == *id) {
                Some(agent) => vec![
                    InfoRow::text(common::NAME, agent.agent_name.clone()),
                    InfoRow::code(common::ID, agent.agent_id.clone()),
                    InfoRow::code(t::COL_URL, display_or_placeholder(card_url(agent)).to_string()),
                ],
                None => vec![InfoRow::code(common::ID, id.clone())],
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
        <button type="button" class={BUTTON_PRIMARY} onclick={open_wizard.clone()}>
            <i class="fas fa-plus" aria-hidden="true"></i>
            { t::ADD_BUTTON }
        </button>
    };

    let content = render_collection(&agents.state, agents.refetch.clone(), || html! {
        <ResourceTable<Agent>
            items={rows.clone()}
            columns={(*columns).clone()}
            empty_title={t::EMPTY_TITLE}
            empty_message={t::EMPTY_MESSAGE}
            empty_action={html! {
                <button type="button" class={BUTTON_PRIMARY} onclick={open_wizard.clone()}>{ t::ADD_BUTTON }</button>
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
