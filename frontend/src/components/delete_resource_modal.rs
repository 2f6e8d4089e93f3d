use yew::prelude::*;

use crate::{
    components::{
        loading_spinner::{LoadingSpinner, SpinnerSize},
        modal::{Modal, BUTTON_DANGER, BUTTON_SECONDARY},
    },
    i18n::current::{common, delete_modal as t},
};

/// One line of the "what will be deleted" summary.
#[derive(Clone, PartialEq)]
pub struct InfoRow {
    pub label: AttrValue,
    pub value: AttrValue,
    /// Render the value monospaced.
    pub code: bool,
}

impl InfoRow {
    pub fn text(label: &'static str, value: impl Into<AttrValue>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            code: false,
        }
    }

    pub fn code(label: &'static str, value: impl Into<AttrValue>) -> Self {
        Self {
            code: true,
            ..Self::text(label, value)
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct DeleteResourceModalProps {
    pub title: AttrValue,
    pub message: AttrValue,
    pub info_title: AttrValue,
    pub rows: Vec<InfoRow>,
    pub on_ok: Callback<()>,
    pub on_cancel: Callback<()>,
    #[prop_or(false)]
    pub confirm_loading: bool,
}

/// Confirmation dialog for a destructive action. Only the confirm button
/// fires `on_ok`; everything else dismisses through `on_cancel`.
#[function_component(DeleteResourceModal)]
pub fn delete_resource_modal(props: &DeleteResourceModalProps) -> Html {
    let on_ok = {
        let on_ok = props.on_ok.clone();
        let loading = props.confirm_loading;
        Callback::from(move |_: MouseEvent| {
            if !loading {
                on_ok.emit(());
            }
        })
    };
    let on_cancel_click = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let footer = html! {
        <>
            <button type="button" class={BUTTON_SECONDARY} onclick={on_cancel_click}>
                { common::CANCEL }
            </button>
            <button
                type="button"
                class={BUTTON_DANGER}
                disabled={props.confirm_loading}
                onclick={on_ok}
            >
                if props.confirm_loading {
                    <LoadingSpinner size={SpinnerSize::Small} inline={true} />
                    { t::DELETING }
                } else {
                    { t::CONFIRM }
                }
            </button>
        </>
    };

    html! {
        <Modal
            title={props.title.clone()}
            on_close={props.on_cancel.clone()}
            footer={footer}
            width={AttrValue::Static("max-w-lg")}
        >
            <p class="text-sm">{ props.message.clone() }</p>
            <p class="mt-1 text-sm font-semibold text-red-600">{ t::IRREVERSIBLE }</p>
            <div class="mt-4 rounded-xl border border-red-300/60 bg-red-50/60 p-4 dark:bg-red-950/30">
                <p class="mb-2 text-xs font-semibold uppercase tracking-wide text-[var(--muted)]">
                    { props.info_title.clone() }
                </p>
                <dl class="grid grid-cols-[auto_1fr] gap-x-4 gap-y-1 text-sm">
                    { for props.rows.iter().map(|row| html! {
                        <>
                            <dt class="text-[var(--muted)]">{ row.label.clone() }</dt>
                            <dd class={classes!("break-all", row.code.then_some("font-mono text-xs"))}>
                                { row.value.clone() }
                            </dd>
                        </>
                    }) }
                </dl>
            </div>
        </Modal>
    }
}
