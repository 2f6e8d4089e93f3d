use proxy_console_shared::screen::LoadState;
use yew::prelude::*;

use crate::{
    components::{
        loading_spinner::LoadingSpinner,
        modal::BUTTON_SECONDARY,
    },
    i18n::current::{common, empty_state as t},
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub message: Option<AttrValue>,
    #[prop_or_default]
    pub action: Html,
}

#[function_component(EmptyState)]
pub fn empty_state(props: &EmptyStateProps) -> Html {
    html! {
        <div class="flex flex-col items-center justify-center gap-2 rounded-xl border border-dashed border-[var(--border)] px-6 py-10 text-center">
            <p class="font-semibold">{ props.title.clone() }</p>
            if let Some(message) = props.message.clone() {
                <p class="max-w-md text-sm text-[var(--muted)]">{ message }</p>
            }
            <div class="mt-2">{ props.action.clone() }</div>
        </div>
    }
}

/// Texts of a detail screen's not-found state.
pub struct NotFoundCopy {
    pub title: &'static str,
    pub message: &'static str,
    pub back_label: &'static str,
}

/// Render the non-loaded states of a detail query, or hand the loaded value
/// to `loaded`.
pub fn render_detail<T>(
    state: &LoadState<T>,
    copy: NotFoundCopy,
    on_back: Callback<()>,
    on_retry: Callback<()>,
    loaded: impl FnOnce(&T) -> Html,
) -> Html {
    match state {
        LoadState::Idle | LoadState::Loading => html! { <LoadingSpinner /> },
        LoadState::Loaded(value) => loaded(value),
        LoadState::NotFound => {
            let onclick = Callback::from(move |_: MouseEvent| on_back.emit(()));
            html! {
                <EmptyState
                    title={copy.title}
                    message={Some(AttrValue::from(copy.message))}
                    action={html! {
                        <button type="button" class={BUTTON_SECONDARY} {onclick}>{ copy.back_label }</button>
                    }}
                />
            }
        },
        LoadState::Failed(message) => {
            let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
            html! {
                <EmptyState
                    title={t::LOAD_FAILED_TITLE}
                    message={Some(AttrValue::from(message.clone()))}
                    action={html! {
                        <button type="button" class={BUTTON_SECONDARY} {onclick}>{ common::RETRY }</button>
                    }}
                />
            }
        },
    }
}

/// Render a collection query: spinner, failure with retry, or the loaded
/// view. A missing collection renders like an empty one.
pub fn render_collection<T>(state: &LoadState<T>, on_retry: Callback<()>, loaded: impl FnOnce() -> Html) -> Html {
    match state {
        LoadState::Idle | LoadState::Loading => html! { <LoadingSpinner /> },
        LoadState::Failed(message) => {
            let onclick = Callback::from(move |_: MouseEvent| on_retry.emit(()));
            html! {
                <EmptyState
                    title={t::LOAD_FAILED_TITLE}
                    message={Some(AttrValue::from(message.clone()))}
                    action={html! {
                        <button type="button" class={BUTTON_SECONDARY} {onclick}>{ common::RETRY }</button>
                    }}
                />
            }
        },
        LoadState::Loaded(_) | LoadState::NotFound => loaded(),
    }
}
