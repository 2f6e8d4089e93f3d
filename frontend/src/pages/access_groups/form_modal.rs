use proxy_console_shared::{
    access_group::{AccessGroupCreateParams, AccessGroupForm, AccessGroupTab},
    AccessGroup, Resource,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api,
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::{Modal, BUTTON_PRIMARY, BUTTON_SECONDARY, INPUT},
        multi_select::MultiSelect,
    },
    hooks::use_query,
    i18n::current::{common, access_group_form as t},
    pages::field_row,
};

#[derive(Properties, PartialEq)]
pub struct AccessGroupFormModalProps {
    /// Group to edit; `None` opens a blank create form.
    #[prop_or_default]
    pub group: Option<AccessGroup>,
    pub pending: bool,
    pub on_submit: Callback<AccessGroupCreateParams>,
    pub on_cancel: Callback<()>,
}

fn tab_label(tab: AccessGroupTab) -> &'static str {
    match tab {
        AccessGroupTab::General => t::TAB_GENERAL,
        AccessGroupTab::Models => t::TAB_MODELS,
        AccessGroupTab::McpServers => t::TAB_MCP,
        AccessGroupTab::Agents => t::TAB_AGENTS,
    }
}

/// Create and edit share this modal; only the initial values and the
/// title differ.
#[function_component(AccessGroupFormModal)]
pub fn access_group_form_modal(props: &AccessGroupFormModalProps) -> Html {
    let form = {
        let group = props.group.clone();
        use_state(move || match &group {
            Some(group) => AccessGroupForm::edit(group, false),
            None => AccessGroupForm::create(),
        })
    };

    let models = use_query((), |_| async { api::fetch_model_names().await.map(Some) });
    let mcp_servers = use_query((), |_| async { api::fetch_mcp_server_ids().await.map(Some) });
    let agents = use_query((), |_| async {
        api::fetch_agents()
            .await
            .map(|agents| Some(agents.iter().map(|agent| agent.id().to_string()).collect::<Vec<_>>()))
    });

    let edit = {
        let form = form.clone();
        move |f: Box<dyn FnOnce(&mut AccessGroupForm)>| {
            let mut next = (*form).clone();
            f(&mut next);
            form.set(next);
        }
    };

    let on_name = {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                edit(Box::new(move |f: &mut AccessGroupForm| f.set_name(input.value())));
            }
        })
    };
    let on_description = {
        let edit = edit.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                edit(Box::new(move |f: &mut AccessGroupForm| f.set_description(input.value())));
            }
        })
    };
    let on_models = {
        let edit = edit.clone();
        Callback::from(move |ids: Vec<String>| edit(Box::new(move |f: &mut AccessGroupForm| f.set_model_ids(ids))))
    };
    let on_mcp = {
        let edit = edit.clone();
        Callback::from(move |ids: Vec<String>| edit(Box::new(move |f: &mut AccessGroupForm| f.set_mcp_server_ids(ids))))
    };
    let on_agents = {
        let edit = edit.clone();
        Callback::from(move |ids: Vec<String>| edit(Box::new(move |f: &mut AccessGroupForm| f.set_agent_ids(ids))))
    };

    let on_cancel = {
        let form = form.clone();
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: ()| {
            let mut next = (*form).clone();
            next.reset();
            form.set(next);
            on_cancel.emit(());
        })
    };

    let on_submit = {
        let form = form.clone();
        let on_submit = props.on_submit.clone();
        let pending = props.pending;
        Callback::from(move |_: MouseEvent| {
            if pending {
                return;
            }
            let mut next = (*form).clone();
            let result = next.submit();
            form.set(next);
            if let Ok(params) = result {
                on_submit.emit(params);
            }
        })
    };

    let values = form.values();
    let active = form.active_tab();

    let tabs = AccessGroupTab::ALL.iter().map(|&tab| {
        let count = match tab {
            AccessGroupTab::General => None,
            AccessGroupTab::Models => Some(values.model_ids.len()),
            AccessGroupTab::McpServers => Some(values.mcp_server_ids.len()),
            AccessGroupTab::Agents => Some(values.agent_ids.len()),
        };
        let onclick = {
            let edit = edit.clone();
            Callback::from(move |_: MouseEvent| edit(Box::new(move |f: &mut AccessGroupForm| f.set_tab(tab))))
        };
        let classes = classes!(
            "border-b-2", "px-3", "py-2", "text-sm", "font-semibold",
            if tab == active { "border-[var(--primary)] text-[var(--primary)]" } else { "border-transparent text-[var(--muted)]" }
        );
        html! {
            <button type="button" class={classes} {onclick}>
                { tab_label(tab) }
                if let Some(count) = count {
                    <span class="ml-1.5 rounded-full bg-[var(--surface-alt)] px-2 text-xs">{ count }</span>
                }
            </button>
        }
    });

    let body = match active {
        AccessGroupTab::General => html! {
            <div class="space-y-4">
                { field_row(t::NAME_LABEL, true, form.errors().message("name"), html! {
                    <input
                        type="text"
                        class={INPUT}
                        placeholder={t::NAME_PLACEHOLDER}
                        value={values.name.clone()}
                        disabled={form.is_name_disabled()}
                        oninput={on_name}
                    />
                }) }
                if form.is_name_disabled() {
                    <p class="text-xs text-[var(--muted)]">{ t::NAME_LOCKED_HINT }</p>
                }
                { field_row(t::DESCRIPTION_LABEL, false, None, html! {
                    <textarea
                        class={INPUT}
                        rows="3"
                        placeholder={t::DESCRIPTION_PLACEHOLDER}
                        value={values.description.clone()}
                        oninput={on_description}
                    />
                }) }
            </div>
        },
        AccessGroupTab::Models => html! {
            <div class="space-y-2">
                <p class="text-sm text-[var(--muted)]">{ t::MODELS_HINT }</p>
                <MultiSelect
                    options={models.state.loaded().cloned().unwrap_or_default()}
                    selected={values.model_ids.clone()}
                    on_change={on_models}
                    loading={models.state.is_loading()}
                />
            </div>
        },
        AccessGroupTab::McpServers => html! {
            <div class="space-y-2">
                <p class="text-sm text-[var(--muted)]">{ t::MCP_HINT }</p>
                <MultiSelect
                    options={mcp_servers.state.loaded().cloned().unwrap_or_default()}
                    selected={values.mcp_server_ids.clone()}
                    on_change={on_mcp}
                    loading={mcp_servers.state.is_loading()}
                />
            </div>
        },
        AccessGroupTab::Agents => html! {
            <div class="space-y-2">
                <p class="text-sm text-[var(--muted)]">{ t::AGENTS_HINT }</p>
                <MultiSelect
                    options={agents.state.loaded().cloned().unwrap_or_default()}
                    selected={values.agent_ids.clone()}
                    on_change={on_agents}
                    loading={agents.state.is_loading()}
                />
            </div>
        },
    };

    let is_edit = props.group.is_some();
    let submit_label = if props.pending {
        t::SUBMITTING
    } else if is_edit {
        t::SUBMIT_EDIT
    } else {
        t::SUBMIT_CREATE
    };
    let cancel_click = {
        let on_cancel = on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };
    let footer = html! {
        <>
            <button type="button" class={BUTTON_SECONDARY} onclick={cancel_click}>{ common::CANCEL }</button>
            <button
                type="button"
                class={BUTTON_PRIMARY}
                disabled={props.pending || (is_edit && !form.is_dirty())}
                onclick={on_submit}
            >
                if props.pending {
                    <LoadingSpinner size={SpinnerSize::Small} inline={true} />
                }
                { submit_label }
            </button>
        </>
    };

    html! {
        <Modal
            title={if is_edit { t::EDIT_TITLE } else { t::CREATE_TITLE }}
            on_close={on_cancel}
            {footer}
        >
            <div class="mb-4 flex gap-1 border-b border-[var(--border)]">
                { for tabs }
            </div>
            { body }
        </Modal>
    }
}
