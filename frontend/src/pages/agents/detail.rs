use proxy_console_shared::{
    agent::{detect_agent_type, AgentEditValues},
    resource::display_or_placeholder,
    Agent, FieldErrors, Resource,
};
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    api,
    components::{
        empty_state::{render_detail, NotFoundCopy},
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::{BUTTON_PRIMARY, BUTTON_SECONDARY, INPUT},
        notification::use_notify,
    },
    hooks::{spawn_mutation, use_query, use_resource_screen},
    i18n::current::{agent_detail as t, common},
    pages::field_row,
    router::Route,
};

fn info_row(label: &'static str, value: Html) -> Html {
    html! {
        <>
            <dt class="text-[var(--muted)]">{ label }</dt>
            <dd class="break-all">{ value }</dd>
        </>
    }
}

#[derive(Properties, PartialEq)]
pub struct AgentDetailPageProps {
    pub id: String,
}

#[function_component(AgentDetailPage)]
pub fn agent_detail_page(props: &AgentDetailPageProps) -> Html {
    let detail = use_query(props.id.clone(), |id: String| async move { api::fetch_agent(&id).await });
    let types = use_query((), |_| async { api::fetch_agent_types().await.map(Some) });
    let screen = use_resource_screen();
    let notify = use_notify();
    let navigator = use_navigator();
    // `Some` while the inline editor is open.
    let draft = use_state(|| None::<AgentEditValues>);
    let errors = use_state(FieldErrors::new);

    let pending = screen.snapshot().mutation().is_pending();

    let on_back = Callback::from(move |_: ()| {
        if let Some(navigator) = &navigator {
            navigator.push(&Route::Agents);
        }
    });

    let copy = NotFoundCopy {
        title: t::NOT_FOUND_TITLE,
        message: t::NOT_FOUND_MESSAGE,
        back_label: t::BACK,
    };
    let metadata = types.state.loaded().cloned().unwrap_or_default();

    let body = render_detail(&detail.state, copy, on_back, detail.refetch.clone(), |agent| {
        let card = agent.agent_card_params.as_ref();

        let editor = match &*draft {
            Some(values) => {
                let update = |apply: fn(&mut AgentEditValues, String)| {
                    let draft = draft.clone();
                    let errors = errors.clone();
                    move |value: String| {
                        if let Some(current) = (*draft).clone() {
                            let mut next = current;
                            apply(&mut next, value);
                            draft.set(Some(next));
                            errors.set(FieldErrors::new());
                        }
                    }
                };
                let on_name = {
                    let set = update(|v, value| v.agent_name = value);
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                            set(input.value());
                        }
                    })
                };
                let on_url = {
                    let set = update(|v, value| v.url = value);
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                            set(input.value());
                        }
                    })
                };
                let on_description = {
                    let set = update(|v, value| v.description = value);
                    Callback::from(move |e: InputEvent| {
                        if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                            set(input.value());
                        }
                    })
                };
                let on_cancel = {
                    let draft = draft.clone();
                    let errors = errors.clone();
                    Callback::from(move |_: MouseEvent| {
                        draft.set(None);
                        errors.set(FieldErrors::new());
                    })
                };
                let on_save = {
                    let draft = draft.clone();
                    let errors = errors.clone();
                    let screen = screen.clone();
                    let notify = notify.clone();
                    let refetch = detail.refetch.clone();
                    let agent = agent.clone();
                    Callback::from(move |_: MouseEvent| {
                        let Some(values) = (*draft).clone() else {
                            return;
                        };
                        match values.to_patch(&agent) {
                            Ok(patch) => {
                                let id = agent.agent_id.clone();
                                let draft = draft.clone();
                                spawn_mutation(
                                    screen.clone(),
                                    async move { api::patch_agent(&id, &patch).await },
                                    |_: &Agent| t::UPDATED.to_string(),
                                    t::UPDATE_FAILED,
                                    notify.clone(),
                                    refetch.clone(),
                                    Some(Callback::from(move |_: Agent| draft.set(None))),
                                );
                            },
                            Err(field_errors) => errors.set(field_errors),
                        }
                    })
                };
                html! {
                    <section class="mb-6 space-y-4 rounded-xl border border-[var(--primary)] p-4">
                        { field_row(common::NAME, true, errors.message("agent_name"), html! {
                            <input type="text" class={INPUT} value={values.agent_name.clone()} oninput={on_name} />
                        }) }
                        { field_row(t::URL_LABEL, false, errors.message("url"), html! {
                            <input type="url" class={INPUT} value={values.url.clone()} oninput={on_url} />
                        }) }
                        { field_row(common::DESCRIPTION, false, None, html! {
                            <textarea class={INPUT} rows="3" value={values.description.clone()} oninput={on_description} />
                        }) }
                        <div class="flex justify-end gap-2">
                            <button type="button" class={BUTTON_SECONDARY} onclick={on_cancel} disabled={pending}>
                                { common::CANCEL }
                            </button>
                            <button type="button" class={BUTTON_PRIMARY} onclick={on_save} disabled={pending}>
                                if pending {
                                    <LoadingSpinner size={SpinnerSize::Small} inline={true} />
                                }
                                { common::SAVE }
                            </button>
                        </div>
                    </section>
                }
            },
            None => Html::default(),
        };

        let open_editor = {
            let draft = draft.clone();
            let values = AgentEditValues::from_agent(agent);
            Callback::from(move |_: MouseEvent| draft.set(Some(values.clone())))
        };

        let params = if agent.litellm_params.is_empty() {
            html! { <p class="text-sm text-[var(--muted)]">{ t::NO_PARAMS }</p> }
        } else {
            let pretty = serde_json::to_string_pretty(&agent.litellm_params).unwrap_or_default();
            html! {
                <pre class="overflow-x-auto rounded-lg bg-[var(--surface-alt)] p-3 font-mono text-xs">{ pretty }</pre>
            }
        };

        let audit = agent.audit();
        html! {
            <>
                <div class="mb-6 flex flex-wrap items-start justify-between gap-4">
                    <div>
                        <h1 class="text-2xl font-bold">{ agent.agent_name.clone() }</h1>
                        <p class="mt-1 font-mono text-xs text-[var(--muted)]">{ agent.agent_id.clone() }</p>
                    </div>
                    if draft.is_none() {
                        <button type="button" class={BUTTON_PRIMARY} onclick={open_editor}>
                            <i class="fas fa-pen" aria-hidden="true"></i>
                            { common::EDIT }
                        </button>
                    }
                </div>
                { editor }
                <div class="grid gap-4 md:grid-cols-2">
                    <section class="rounded-xl border border-[var(--border)] p-4">
                        <h2 class="mb-3 font-semibold">{ t::CARD_TITLE }</h2>
                        <dl class="grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm">
                            { info_row(t::TYPE_LABEL, html! { { detect_agent_type(agent, &metadata) } }) }
                            { info_row(common::DESCRIPTION, html! { { display_or_placeholder(agent.description()).to_string() } }) }
                            { info_row(t::URL_LABEL, html! {
                                <span class="font-mono text-xs">
                                    { display_or_placeholder(card.map(|c| c.url.as_str()).filter(|url| !url.is_empty())).to_string() }
                                </span>
                            }) }
                            { info_row(t::VERSION_LABEL, html! { { display_or_placeholder(card.map(|c| c.version.as_str())).to_string() } }) }
                            { info_row(t::PROTOCOL_LABEL, html! { { display_or_placeholder(card.map(|c| c.protocol_version.as_str())).to_string() } }) }
                            { info_row(t::STREAMING_LABEL, html! {
                                { if card.map(|c| c.capabilities.streaming).unwrap_or(false) { common::YES } else { common::NO } }
                            }) }
                            { info_row(t::MODES_LABEL, html! {
                                { card.map(|c| format!("{} / {}", c.default_input_modes.join(", "), c.default_output_modes.join(", "))).unwrap_or_default() }
                            }) }
                            { info_row(t::SKILLS_LABEL, html! {
                                { display_or_placeholder(
                                    card.map(|c| c.skills.iter().map(|s| s.name.as_str()).collect::<Vec<_>>().join(", "))
                                        .filter(|names| !names.is_empty())
                                        .as_deref()
                                ).to_string() }
                            }) }
                        </dl>
                    </section>
                    <section class="rounded-xl border border-[var(--border)] p-4">
                        <h2 class="mb-3 font-semibold">{ t::PARAMS_TITLE }</h2>
                        { params }
                        <dl class="mt-4 grid grid-cols-[auto_1fr] gap-x-6 gap-y-2 text-sm">
                            { info_row(common::CREATED, html! { { audit.created_at.format("%Y-%m-%d %H:%M:%S").to_string() } }) }
                            { info_row(common::CREATED_BY, html! { { display_or_placeholder(audit.created_by.as_deref()).to_string() } }) }
                            { info_row(common::UPDATED, html! { { audit.updated_at.format("%Y-%m-%d %H:%M:%S").to_string() } }) }
                            { info_row(common::UPDATED_BY, html! { { display_or_placeholder(audit.updated_by.as_deref()).to_string() } }) }
                        </dl>
                    </section>
                </div>
            </>
        }
    });

    html! {
        <main class="mx-auto max-w-6xl px-4 py-8">
            <Link<Route> to={Route::Agents} classes="mb-4 inline-flex items-center gap-2 text-sm text-[var(--muted)] hover:text-[var(--primary)]">
                <i class="fas fa-arrow-left" aria-hidden="true"></i>
                { t::BACK }
            </Link<Route>>
            { body }
        </main>
    }
}
