use proxy_console_shared::{
    agent::{
        AgentField, AgentFormValues, AgentSubmission, AgentTemplate, AgentWizard, FieldKind,
        KeyAssignOption, KeyPlan, KeySummary, WizardOutcome, WizardStep,
    },
    screen::Notice,
    ApiError,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    api::{self, KeyGenerateRequest},
    components::{
        key_picker::KeyPicker,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::{Modal, BUTTON_PRIMARY, BUTTON_SECONDARY, INPUT},
        multi_select::MultiSelect,
        notification::use_notify,
    },
    hooks::use_query,
    i18n::{
        current::{agent_wizard as t, common},
        fill_one,
    },
    pages::field_row,
};

fn field_value(values: &AgentFormValues, key: &str) -> String {
    match key {
        "agent_name" => values.agent_name.clone(),
        "description" => values.description.clone(),
        "url" => values.url.clone(),
        "version" => values.version.clone(),
        "litellm_params_json" => values.litellm_params_json.clone(),
        credential => values.credentials.get(credential).cloned().unwrap_or_default(),
    }
}

fn set_field(values: &mut AgentFormValues, key: &str, value: String) {
    match key {
        "agent_name" => values.agent_name = value,
        "description" => values.description = value,
        "url" => values.url = value,
        "version" => values.version = value,
        "litellm_params_json" => values.litellm_params_json = value,
        credential => {
            values.credentials.insert(credential.to_string(), value);
        },
    }
}

/// Create the agent, then carry out the key plan. A key failure does not
/// undo the agent; it comes back next to the outcome.
async fn submit(
    submission: AgentSubmission,
    attached_alias: Option<String>,
) -> Result<(WizardOutcome, Option<ApiError>), ApiError> {
    let agent = api::create_agent(&submission.request).await?;
    let mut outcome = WizardOutcome {
        agent_name: agent.agent_name.clone(),
        created_key: None,
        assigned_key_alias: None,
    };
    let key_result = match submission.key_plan {
        KeyPlan::Create {
            key_name,
            models,
        } => {
            let request = KeyGenerateRequest {
                key_alias: Some(key_name),
                models,
                agent_id: agent.agent_id.clone(),
            };
            match api::generate_agent_key(&request).await {
                Ok(generated) => {
                    outcome.created_key = Some(generated.key);
                    Ok(())
                },
                Err(err) => Err(err),
            }
        },
        KeyPlan::Attach {
            token,
        } => match api::assign_key_to_agent(&token, &agent.agent_id).await {
            Ok(()) => {
                outcome.assigned_key_alias = attached_alias;
                Ok(())
            },
            Err(err) => Err(err),
        },
        KeyPlan::None => Ok(()),
    };
    Ok((outcome, key_result.err()))
}

#[derive(Properties, PartialEq)]
pub struct AgentWizardModalProps {
    pub on_close: Callback<()>,
    /// Fired once the agent exists, even if key assignment then failed.
    pub on_created: Callback<()>,
}

#[function_component(AgentWizardModal)]
pub fn agent_wizard_modal(props: &AgentWizardModalProps) -> Html {
    let wizard = use_mut_ref(AgentWizard::new);
    let redraw = use_force_update();
    let submitting = use_state(|| false);
    let notify = use_notify();
    let types = use_query((), |_| async { api::fetch_agent_types().await.map(Some) });
    let models = use_query((), |_| async { api::fetch_model_names().await.map(Some) });

    let metadata = types.state.loaded().cloned().unwrap_or_default();
    let edit = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        move |f: Box<dyn FnOnce(&mut AgentWizard)>| {
            f(&mut wizard.borrow_mut());
            redraw.force_update();
        }
    };

    let current = wizard.borrow().clone();
    let errors = current.errors();

    let on_next = {
        let edit = edit.clone();
        Callback::from(move |_: MouseEvent| {
            edit(Box::new(|w: &mut AgentWizard| {
                w.next();
            }))
        })
    };
    let on_back = {
        let edit = edit.clone();
        Callback::from(move |_: MouseEvent| edit(Box::new(AgentWizard::back)))
    };

    let on_submit = {
        let wizard = wizard.clone();
        let redraw = redraw.clone();
        let submitting = submitting.clone();
        let notify = notify.clone();
        let on_created = props.on_created.clone();
        let metadata = metadata.clone();
        Callback::from(move |_: MouseEvent| {
            if *submitting {
                return;
            }
            let prepared = wizard.borrow_mut().prepare_submit(&metadata);
            redraw.force_update();
            let Ok(submission) = prepared else {
                return;
            };
            let attached_alias = wizard.borrow().existing_key.as_ref().map(|key| key.display_label());

            submitting.set(true);
            let wizard = wizard.clone();
            let redraw = redraw.clone();
            let submitting = submitting.clone();
            let notify = notify.clone();
            let on_created = on_created.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match submit(submission, attached_alias).await {
                    Ok((outcome, key_error)) => {
                        notify.emit(Notice::success(fill_one(t::CREATED_TEMPLATE, &outcome.agent_name)));
                        if let Some(err) = key_error {
                            web_sys::console::error_1(&format!("Failed to assign key: {}", err).into());
                            notify.emit(Notice::error(err.user_message(t::KEY_FAILED)));
                        }
                        on_created.emit(());
                        wizard.borrow_mut().finish(outcome);
                    },
                    Err(err) => {
                        web_sys::console::error_1(&format!("Failed to create agent: {}", err).into());
                        notify.emit(Notice::error(err.user_message(t::CREATE_FAILED)));
                    },
                }
                submitting.set(false);
                redraw.force_update();
            });
        })
    };

    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let steps = [
        (WizardStep::Details, t::STEP_DETAILS),
        (WizardStep::AssignKey, t::STEP_KEY),
        (WizardStep::Done, t::STEP_DONE),
    ];
    let step_bar = html! {
        <ol class="mb-6 flex items-center gap-3 text-sm">
            { for steps.iter().enumerate().map(|(index, (step, label))| {
                let active = current.step() == *step;
                html! {
                    <li class={classes!("flex", "items-center", "gap-2", if active { "font-semibold text-[var(--primary)]" } else { "text-[var(--muted)]" })}>
                        <span class="inline-flex h-6 w-6 items-center justify-center rounded-full border border-current text-xs">
                            { index + 1 }
                        </span>
                        { *label }
                    </li>
                }
            }) }
        </ol>
    };

    let body = match current.step() {
        WizardStep::Details => {
            let on_type = {
                let edit = edit.clone();
                Callback::from(move |e: Event| {
                    if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                        edit(Box::new(move |w: &mut AgentWizard| w.set_agent_type(select.value())));
                    }
                })
            };
            let template = AgentTemplate::resolve(current.agent_type(), &metadata).unwrap_or(AgentTemplate::A2a);
            let fields = template.fields().into_iter().map(|field| {
                render_field(&field, &current.values, errors.message(&field.key), edit.clone())
            });
            html! {
                <div class="space-y-4">
                    { field_row(t::TYPE_LABEL, true, errors.message("agent_type"), html! {
                        <select class={INPUT} onchange={on_type} disabled={types.state.is_loading()}>
                            { for AgentTemplate::choices(&metadata).into_iter().map(|(value, label)| {
                                let selected = value == current.agent_type();
                                html! { <option {value} {selected}>{ label }</option> }
                            }) }
                        </select>
                    }) }
                    if types.state.is_loading() {
                        <p class="text-xs text-[var(--muted)]">{ t::TYPE_LOADING }</p>
                    }
                    { for fields }
                </div>
            }
        },
        WizardStep::AssignKey => {
            let options = [
                (KeyAssignOption::CreateNew, t::KEY_CREATE_NEW),
                (KeyAssignOption::Existing, t::KEY_EXISTING),
                (KeyAssignOption::Skip, t::KEY_SKIP),
            ];
            let radios = options.iter().map(|&(option, label)| {
                let onchange = {
                    let edit = edit.clone();
                    Callback::from(move |_: Event| edit(Box::new(move |w: &mut AgentWizard| w.key_option = option)))
                };
                html! {
                    <label class="flex items-center gap-2 text-sm">
                        <input type="radio" name="key-option" checked={current.key_option == option} {onchange} />
                        { label }
                    </label>
                }
            });
            let detail = match current.key_option {
                KeyAssignOption::CreateNew => {
                    let on_key_name = {
                        let edit = edit.clone();
                        Callback::from(move |e: InputEvent| {
                            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                                edit(Box::new(move |w: &mut AgentWizard| w.new_key_name = input.value()));
                            }
                        })
                    };
                    let on_models = {
                        let edit = edit.clone();
                        Callback::from(move |ids: Vec<String>| edit(Box::new(move |w: &mut AgentWizard| w.new_key_models = ids)))
                    };
                    html! {
                        <div class="space-y-4">
                            { field_row(t::KEY_NAME_LABEL, false, None, html! {
                                <input type="text" class={INPUT} value={current.new_key_name.clone()} oninput={on_key_name} />
                            }) }
                            <div class="space-y-1">
                                <span class="text-sm font-semibold">{ t::KEY_MODELS_LABEL }</span>
                                <MultiSelect
                                    options={models.state.loaded().cloned().unwrap_or_default()}
                                    selected={current.new_key_models.clone()}
                                    on_change={on_models}
                                    loading={models.state.is_loading()}
                                />
                            </div>
                        </div>
                    }
                },
                KeyAssignOption::Existing => {
                    let on_select = {
                        let edit = edit.clone();
                        Callback::from(move |key: Option<KeySummary>| edit(Box::new(move |w: &mut AgentWizard| w.existing_key = key)))
                    };
                    html! {
                        <KeyPicker
                            selected={current.existing_key.clone()}
                            {on_select}
                            error={errors.message("existing_key")}
                        />
                    }
                },
                KeyAssignOption::Skip => Html::default(),
            };
            html! {
                <div class="space-y-4">
                    <div class="flex flex-wrap gap-4">{ for radios }</div>
                    { detail }
                </div>
            }
        },
        WizardStep::Done => match current.outcome() {
            Some(outcome) => html! {
                <div class="space-y-3 text-sm">
                    <p class="font-semibold">{ fill_one(t::CREATED_TEMPLATE, &outcome.agent_name) }</p>
                    if let Some(key) = outcome.created_key.clone() {
                        <p>{ t::DONE_KEY_CREATED }</p>
                        <code class="block break-all rounded-lg bg-[var(--surface-alt)] p-3 font-mono text-xs">{ key }</code>
                    } else if let Some(alias) = outcome.assigned_key_alias.clone() {
                        <p>{ fill_one(t::DONE_KEY_ASSIGNED_TEMPLATE, alias) }</p>
                    } else {
                        <p class="text-[var(--muted)]">{ t::DONE_NO_KEY }</p>
                    }
                </div>
            },
            None => Html::default(),
        },
    };

    let footer = match current.step() {
        WizardStep::Details => html! {
            <>
                <button type="button" class={BUTTON_SECONDARY} onclick={on_close.clone()}>{ common::CANCEL }</button>
                <button type="button" class={BUTTON_PRIMARY} onclick={on_next}>{ common::NEXT }</button>
            </>
        },
        WizardStep::AssignKey => html! {
            <>
                <button type="button" class={BUTTON_SECONDARY} onclick={on_back} disabled={*submitting}>{ common::BACK }</button>
                <button type="button" class={BUTTON_PRIMARY} onclick={on_submit} disabled={*submitting}>
                    if *submitting {
                        <LoadingSpinner size={SpinnerSize::Small} inline={true} />
                        { t::SUBMITTING }
                    } else {
                        { t::SUBMIT }
                    }
                </button>
            </>
        },
        WizardStep::Done => html! {
            <button type="button" class={BUTTON_PRIMARY} onclick={on_close.clone()}>{ common::DONE }</button>
        },
    };

    html! {
        <Modal title={t::TITLE} on_close={props.on_close.clone()} {footer}>
            { step_bar }
            { body }
        </Modal>
    }
}

fn render_field(
    field: &AgentField,
    values: &AgentFormValues,
    error: Option<String>,
    edit: impl Fn(Box<dyn FnOnce(&mut AgentWizard)>) + Clone + 'static,
) -> Html {
    let key = field.key.clone();
    let input = match field.kind {
        FieldKind::Toggle => {
            let onchange = Callback::from(move |e: Event| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    let checked = input.checked();
                    edit(Box::new(move |w: &mut AgentWizard| w.values.streaming = checked));
                }
            });
            return html! {
                <label class="flex items-center gap-2 text-sm">
                    <input type="checkbox" checked={values.streaming} {onchange} />
                    { field.label.clone() }
                </label>
            };
        },
        FieldKind::TextArea | FieldKind::Json => {
            let oninput = Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlTextAreaElement>() {
                    let key = key.clone();
                    edit(Box::new(move |w: &mut AgentWizard| set_field(&mut w.values, &key, input.value())));
                }
            });
            let mono = (field.kind == FieldKind::Json).then_some("font-mono text-xs");
            html! {
                <textarea
                    class={classes!(INPUT, mono)}
                    rows={if field.kind == FieldKind::Json { "6" } else { "3" }}
                    value={field_value(values, &field.key)}
                    {oninput}
                />
            }
        },
        FieldKind::Text | FieldKind::Url | FieldKind::Secret => {
            let input_type = match field.kind {
                FieldKind::Url => "url",
                FieldKind::Secret => "password",
                _ => "text",
            };
            let oninput = Callback::from(move |e: InputEvent| {
                if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                    let key = key.clone();
                    edit(Box::new(move |w: &mut AgentWizard| set_field(&mut w.values, &key, input.value())));
                }
            });
            html! {
                <input type={input_type} class={INPUT} value={field_value(values, &field.key)} {oninput} />
            }
        },
    };
    field_row(&field.label, field.required, error, input)
}
