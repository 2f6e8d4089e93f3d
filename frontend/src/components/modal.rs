use yew::prelude::*;

use crate::i18n::current::modal as t;

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    pub title: AttrValue,
    pub on_close: Callback<()>,
    #[prop_or_default]
    pub footer: Html,
    #[prop_or_default]
    pub children: Html,
    /// Tailwind max-width class of the dialog panel.
    #[prop_or(AttrValue::Static("max-w-2xl"))]
    pub width: AttrValue,
}

/// Centered dialog. Backdrop click and Escape both call `on_close`.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    let on_backdrop = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };
    let stop = Callback::from(|e: MouseEvent| e.stop_propagation());
    let on_keydown = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_close.emit(());
            }
        })
    };
    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class="fixed inset-0 z-[150] flex items-center justify-center bg-black/40 p-4"
            onclick={on_backdrop}
            onkeydown={on_keydown}
            tabindex="-1"
        >
            <div
                class={classes!(
                    "w-full",
                    props.width.to_string(),
                    "max-h-[90vh]",
                    "overflow-y-auto",
                    "rounded-2xl",
                    "border",
                    "border-[var(--border)]",
                    "bg-[var(--surface)]",
                    "text-[var(--text)]",
                    "shadow-[var(--shadow-16)]"
                )}
                role="dialog"
                aria-modal="true"
                aria-label={props.title.clone()}
                onclick={stop}
            >
                <div class="flex items-center justify-between border-b border-[var(--border)] px-6 py-4">
                    <h2 class="text-lg font-semibold">{ props.title.clone() }</h2>
                    <button
                        type="button"
                        class="inline-flex h-8 w-8 items-center justify-center rounded-full hover:bg-[var(--surface-alt)]"
                        aria-label={t::CLOSE_ARIA}
                        onclick={on_close_click}
                    >
                        {"×"}
                    </button>
                </div>
                <div class="px-6 py-5">{ props.children.clone() }</div>
                <div class="flex justify-end gap-3 border-t border-[var(--border)] px-6 py-4">
                    { props.footer.clone() }
                </div>
            </div>
        </div>
    }
}

pub const BUTTON_PRIMARY: &str = "inline-flex items-center gap-2 rounded-lg bg-[var(--primary)] px-4 py-2 text-sm font-semibold text-white hover:opacity-90 disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_SECONDARY: &str = "inline-flex items-center gap-2 rounded-lg border border-[var(--border)] px-4 py-2 text-sm font-semibold hover:bg-[var(--surface-alt)] disabled:opacity-50 disabled:cursor-not-allowed";
pub const BUTTON_DANGER: &str = "inline-flex items-center gap-2 rounded-lg bg-red-600 px-4 py-2 text-sm font-semibold text-white hover:bg-red-700 disabled:opacity-50 disabled:cursor-not-allowed";
pub const INPUT: &str = "w-full rounded-lg border border-[var(--border)] bg-[var(--surface)] px-3 py-2 text-sm focus:border-[var(--primary)] focus:outline-none disabled:opacity-60";
