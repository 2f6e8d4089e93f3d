use proxy_console_shared::{
    plugin::{PluginCreateRequest, PluginFormValues, PluginSourceKind, PLUGIN_CATEGORIES},
    FieldErrors,
};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::{Modal, BUTTON_PRIMARY, BUTTON_SECONDARY, INPUT},
    },
    i18n::current::{common, plugin_form as t},
    pages::field_row,
};

#[derive(Properties, PartialEq)]
pub struct PluginFormModalProps {
    pub pending: bool,
    pub on_submit: Callback<PluginCreateRequest>,
    pub on_cancel: Callback<()>,
}

type Setter = fn(&mut PluginFormValues, String);

#[function_component(PluginFormModal)]
pub fn plugin_form_modal(props: &PluginFormModalProps) -> Html {
    let values = use_state(PluginFormValues::default);
    let errors = use_state(FieldErrors::new);

    let text_input = |set: Setter| {
        let values = values.clone();
        Callback::from(move |e: InputEvent| {
            let value = if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                input.value()
            } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
                area.value()
            } else {
                return;
            };
            let mut next = (*values).clone();
            set(&mut next, value);
            values.set(next);
        })
    };

    let on_source = {
        let values = values.clone();
        let errors = errors.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let kind = if select.value() == "url" { PluginSourceKind::Url } else { PluginSourceKind::Github };
                let mut next = (*values).clone();
                next.set_source_kind(kind);
                values.set(next);
                errors.set(FieldErrors::new());
            }
        })
    };
    let on_category = {
        let values = values.clone();
        Callback::from(move |e: Event| {
            if let Some(select) = e.target_dyn_into::<HtmlSelectElement>() {
                let mut next = (*values).clone();
                next.category = select.value();
                values.set(next);
            }
        })
    };

    let on_submit = {
        let values = values.clone();
        let errors = errors.clone();
        let on_submit = props.on_submit.clone();
        let pending = props.pending;
        Callback::from(move |_: MouseEvent| {
            if pending {
                return;
            }
            match values.to_request() {
                Ok(request) => {
                    errors.set(FieldErrors::new());
                    on_submit.emit(request);
                },
                Err(field_errors) => errors.set(field_errors),
            }
        })
    };
    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let source_input = match values.source_kind() {
        PluginSourceKind::Github => field_row(t::REPO_LABEL, true, errors.message("repo"), html! {
            <input type="text" class={INPUT} placeholder={t::REPO_PLACEHOLDER}
                value={values.repo.clone()} oninput={text_input(|v, s| v.repo = s)} />
        }),
        PluginSourceKind::Url => field_row(t::URL_LABEL, true, errors.message("url"), html! {
            <input type="url" class={INPUT} placeholder={t::URL_PLACEHOLDER}
                value={values.url.clone()} oninput={text_input(|v, s| v.url = s)} />
        }),
    };

    let footer = html! {
        <>
            <button type="button" class={BUTTON_SECONDARY} onclick={on_cancel_click}>{ common::CANCEL }</button>
            <button type="button" class={BUTTON_PRIMARY} disabled={props.pending} onclick={on_submit}>
                if props.pending {
                    <LoadingSpinner size={SpinnerSize::Small} inline={true} />
                    { t::SUBMITTING }
                } else {
                    { t::SUBMIT }
                }
            </button>
        </>
    };

    html! {
        <Modal title={t::TITLE} on_close={props.on_cancel.clone()} {footer}>
            <div class="space-y-4">
                { field_row(t::NAME_LABEL, true, errors.message("name"), html! {
                    <input type="text" class={INPUT} placeholder={t::NAME_PLACEHOLDER}
                        value={values.name.clone()} oninput={text_input(|v, s| v.name = s)} />
                }) }
                { field_row(t::SOURCE_LABEL, true, None, html! {
                    <select class={INPUT} onchange={on_source}>
                        <option value="github" selected={values.source_kind() == PluginSourceKind::Github}>{ t::SOURCE_GITHUB }</option>
                        <option value="url" selected={values.source_kind() == PluginSourceKind::Url}>{ t::SOURCE_URL }</option>
                    </select>
                }) }
                { source_input }
                <div class="grid gap-4 sm:grid-cols-2">
                    { field_row(t::VERSION_LABEL, false, errors.message("version"), html! {
                        <input type="text" class={INPUT} placeholder="1.0.0"
                            value={values.version.clone()} oninput={text_input(|v, s| v.version = s)} />
                    }) }
                    { field_row(t::CATEGORY_LABEL, false, None, html! {
                        <select class={INPUT} onchange={on_category}>
                            <option value="" selected={values.category.is_empty()}>{ t::CATEGORY_NONE }</option>
                            { for PLUGIN_CATEGORIES.iter().map(|category| html! {
                                <option value={*category} selected={values.category == *category}>{ *category }</option>
                            }) }
                        </select>
                    }) }
                </div>
                { field_row(t::DESCRIPTION_LABEL, false, None, html! {
                    <textarea class={INPUT} rows="3"
                        value={values.description.clone()} oninput={text_input(|v, s| v.description = s)} />
                }) }
                { field_row(t::KEYWORDS_LABEL, false, None, html! {
                    <input type="text" class={INPUT}
                        value={values.keywords.clone()} oninput={text_input(|v, s| v.keywords = s)} />
                }) }
                <div class="grid gap-4 sm:grid-cols-2">
                    { field_row(t::AUTHOR_NAME_LABEL, false, None, html! {
                        <input type="text" class={INPUT}
                            value={values.author_name.clone()} oninput={text_input(|v, s| v.author_name = s)} />
                    }) }
                    { field_row(t::AUTHOR_EMAIL_LABEL, false, errors.message("author_email"), html! {
                        <input type="email" class={INPUT}
                            value={values.author_email.clone()} oninput={text_input(|v, s| v.author_email = s)} />
                    }) }
                </div>
                { field_row(t::HOMEPAGE_LABEL, false, errors.message("homepage"), html! {
                    <input type="url" class={INPUT}
                        value={values.homepage.clone()} oninput={text_input(|v, s| v.homepage = s)} />
                }) }
            </div>
        </Modal>
    }
}
