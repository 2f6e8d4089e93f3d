use std::rc::Rc;

use proxy_console_shared::screen::{Notice, NoticeKind};
use yew::prelude::*;
use yew_hooks::prelude::use_timeout;

use crate::{config::NOTICE_DISMISS_MS, i18n::current::notification as t};

/// Context value: emit a [`Notice`] to show a toast.
#[derive(Clone, PartialEq)]
pub struct Notifier(pub Callback<Notice>);

/// The toast callback from the nearest [`NotificationHost`], or a no-op
/// outside one.
#[hook]
pub fn use_notify() -> Callback<Notice> {
    use_context::<Notifier>()
        .map(|notifier| notifier.0)
        .unwrap_or_default()
}

#[derive(Default, PartialEq)]
struct Toasts {
    next_id: u32,
    items: Vec<(u32, Notice)>,
}

enum ToastAction {
    Push(Notice),
    Dismiss(u32),
}

impl Reducible for Toasts {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut items = self.items.clone();
        let mut next_id = self.next_id;
        match action {
            ToastAction::Push(notice) => {
                items.push((next_id, notice));
                next_id = next_id.wrapping_add(1);
            },
            ToastAction::Dismiss(id) => items.retain(|(item_id, _)| *item_id != id),
        }
        Rc::new(Self {
            next_id,
            items,
        })
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationHostProps {
    #[prop_or_default]
    pub children: Html,
}

/// Provides [`Notifier`] to its children and renders the toast stack.
#[function_component(NotificationHost)]
pub fn notification_host(props: &NotificationHostProps) -> Html {
    let toasts = use_reducer(Toasts::default);

    let notifier = {
        let toasts = toasts.clone();
        Notifier(Callback::from(move |notice: Notice| toasts.dispatch(ToastAction::Push(notice))))
    };

    html! {
        <ContextProvider<Notifier> context={notifier}>
            { props.children.clone() }
            <div class="fixed top-4 right-4 z-[200] flex flex-col gap-3 items-end pointer-events-none">
                { for toasts.items.iter().map(|(id, notice)| {
                    let id = *id;
                    let on_close = {
                        let toasts = toasts.clone();
                        Callback::from(move |_| toasts.dispatch(ToastAction::Dismiss(id)))
                    };
                    html! { <Toast key={id} notice={notice.clone()} {on_close} /> }
                }) }
            </div>
        </ContextProvider<Notifier>>
    }
}

#[derive(Properties, PartialEq)]
struct ToastProps {
    notice: Notice,
    on_close: Callback<()>,
}

#[function_component(Toast)]
fn toast(props: &ToastProps) -> Html {
    let is_error = props.notice.kind == NoticeKind::Error;

    let auto_timeout = {
        let on_close = props.on_close.clone();
        use_timeout(move || on_close.emit(()), if is_error { 0 } else { NOTICE_DISMISS_MS })
    };

    {
        let auto_timeout = auto_timeout.clone();
        use_effect_with(is_error, move |is_error| {
            if *is_error {
                auto_timeout.cancel();
            } else {
                auto_timeout.reset();
            }
        });
    }

    let (icon, title, tone) = if is_error {
        ("⚠️", t::ERROR_TITLE, "border-red-400/60 bg-red-50 text-red-900 dark:bg-red-950/80 dark:text-red-100")
    } else {
        ("✓", t::SUCCESS_TITLE, "border-emerald-400/60 bg-emerald-50 text-emerald-900 dark:bg-emerald-950/80 dark:text-emerald-100")
    };

    let close_button = {
        let on_close = props.on_close.clone();
        Callback::from(move |_| on_close.emit(()))
    };

    html! {
        <div
            class={classes!(
                "pointer-events-auto",
                "flex",
                "items-start",
                "gap-3",
                "rounded-2xl",
                "border",
                "px-5",
                "py-4",
                "text-sm",
                "shadow-xl",
                "w-80",
                tone
            )}
            role={if is_error { "alert" } else { "status" }}
            aria-live={if is_error { "assertive" } else { "polite" }}
        >
            <span class="text-lg" aria-hidden="true">{ icon }</span>
            <div class="flex-1 space-y-1">
                <p class="font-semibold">{ title }</p>
                <p class="break-words">{ props.notice.message.clone() }</p>
            </div>
            <button
                type="button"
                class="inline-flex h-7 w-7 items-center justify-center rounded-full hover:bg-black/10 dark:hover:bg-white/15"
                aria-label={t::CLOSE_ARIA}
                onclick={close_button}
            >
                {"×"}
            </button>
        </div>
    }
}
