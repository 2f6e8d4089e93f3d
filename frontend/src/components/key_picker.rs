use proxy_console_shared::{agent::KeySummary, screen::LoadState};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    api,
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::INPUT,
    },
    config::SEARCH_DEBOUNCE_MS,
    hooks::{use_debounced, use_query},
    i18n::current::agent_wizard as t,
};

#[derive(Properties, PartialEq)]
pub struct KeyPickerProps {
    pub selected: Option<KeySummary>,
    pub on_select: Callback<Option<KeySummary>>,
    #[prop_or_default]
    pub error: Option<String>,
}

/// Search existing keys by alias and pick one. Typing is debounced so the
/// server only sees the settled search text.
#[function_component(KeyPicker)]
pub fn key_picker(props: &KeyPickerProps) -> Html {
    let search = use_state(String::new);
    let settled = use_debounced((*search).clone(), SEARCH_DEBOUNCE_MS);
    let results = use_query(settled.clone(), |alias: String| async move {
        api::search_keys(&alias).await.map(Some)
    });

    let on_input = {
        let search = search.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                search.set(input.value());
            }
        })
    };

    let list = match &results.state {
        LoadState::Idle | LoadState::Loading => html! { <LoadingSpinner size={SpinnerSize::Small} /> },
        LoadState::NotFound => html! { <p class="text-sm text-[var(--muted)]">{ t::KEY_NO_RESULTS }</p> },
        LoadState::Failed(message) => html! { <p class="text-sm text-red-600">{ message.clone() }</p> },
        LoadState::Loaded(keys) if keys.is_empty() => {
            html! { <p class="text-sm text-[var(--muted)]">{ t::KEY_NO_RESULTS }</p> }
        },
        LoadState::Loaded(keys) => html! {
            <ul class="max-h-56 space-y-1 overflow-y-auto rounded-lg border border-[var(--border)] p-2">
                { for keys.iter().map(|key| {
                    let is_selected = props.selected.as_ref().map(|s| s.token == key.token).unwrap_or(false);
                    let onclick = {
                        let on_select = props.on_select.clone();
                        let key = key.clone();
                        Callback::from(move |_: MouseEvent| {
                            on_select.emit(if is_selected { None } else { Some(key.clone()) })
                        })
                    };
                    html! {
                        <li key={key.token.clone()}>
                            <button
                                type="button"
                                class={classes!(
                                    "w-full", "rounded", "px-2", "py-1", "text-left", "text-sm",
                                    "hover:bg-[var(--surface-alt)]",
                                    is_selected.then_some("bg-[var(--surface-alt)] font-semibold")
                                )}
                                aria-pressed={is_selected.to_string()}
                                {onclick}
                            >
                                { key.display_label() }
                            </button>
                        </li>
                    }
                }) }
            </ul>
        },
    };

    html! {
        <div class="space-y-2">
            <input
                type="search"
                class={INPUT}
                placeholder={t::KEY_SEARCH_PLACEHOLDER}
                value={(*search).clone()}
                oninput={on_input}
            />
            if *search != settled {
                <p class="text-xs text-[var(--muted)]">{ t::KEY_SEARCHING }</p>
            }
            { list }
            if let Some(error) = props.error.clone() {
                <p class="text-sm text-red-600">{ error }</p>
            }
        </div>
    }
}
