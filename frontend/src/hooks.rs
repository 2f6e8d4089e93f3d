use std::{cell::RefCell, future::Future, rc::Rc};

use gloo_timers::callback::Timeout;
use proxy_console_shared::{
    screen::{Effect, LoadState, Notice, ResourceScreen},
    seq::RequestSeq,
    ApiError,
};
use web_sys::{ScrollBehavior, ScrollToOptions};
use yew::prelude::*;
use yew_router::prelude::use_location;

/// Result of [`use_query`]: the current state plus a way to reload.
#[derive(Clone, PartialEq)]
pub struct QueryHandle<T> {
    pub state: LoadState<T>,
    pub refetch: Callback<()>,
}

/// Load data for a screen and reload it on demand.
///
/// The fetch runs whenever `deps` changes and every time `refetch` is
/// emitted. Each run takes a ticket from a [`RequestSeq`]; a response
/// arriving after a newer run started, or after unmount, is dropped.
/// While reloading, already loaded data stays on screen.
///
/// ```rust,ignore
/// let groups = use_query((), |_| async { api::fetch_access_groups().await.map(Some) });
/// match &groups.state {
///     LoadState::Loaded(rows) => html! { { rows.len() } },
///     _ => html! { <LoadingSpinner /> },
/// }
/// ```
#[hook]
pub fn use_query<T, D, F, Fut>(deps: D, fetch: F) -> QueryHandle<T>
where
    T: Clone + PartialEq + 'static,
    D: Clone + PartialEq + 'static,
    F: Fn(D) -> Fut + 'static,
    Fut: Future<Output = Result<Option<T>, ApiError>> + 'static,
{
    let state = use_state(LoadState::<T>::default);
    let seq = use_mut_ref(RequestSeq::new);
    // Always call the closure from the latest render.
    let fetch_ref: Rc<RefCell<Option<Rc<F>>>> = use_mut_ref(|| None);
    *fetch_ref.borrow_mut() = Some(Rc::new(fetch));

    let run = {
        let state = state.clone();
        let seq = seq.clone();
        let deps = deps.clone();
        let fetch_ref = fetch_ref.clone();
        Callback::from(move |_: ()| {
            let Some(fetch) = fetch_ref.borrow().clone() else {
                return;
            };
            let ticket = seq.borrow().issue();
            if state.loaded().is_none() {
                state.set(LoadState::Loading);
            }
            let future = fetch(deps.clone());
            let state = state.clone();
            let seq = seq.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let result = future.await;
                if !seq.borrow().is_current(ticket) {
                    return;
                }
                if let Err(err) = &result {
                    web_sys::console::error_1(&format!("Failed to load data: {}", err).into());
                }
                state.set(LoadState::from_lookup(result));
            });
        })
    };

    {
        let run = run.clone();
        let seq = seq.clone();
        use_effect_with(deps, move |_| {
            run.emit(());
            move || seq.borrow().invalidate()
        });
    }

    QueryHandle {
        state: (*state).clone(),
        refetch: run,
    }
}

/// `value`, but only after it has stopped changing for `millis`.
///
/// The pending timer lives in a ref: a new value replaces it, which drops
/// (and so cancels) the old one, and unmount drops it as well.
#[hook]
pub fn use_debounced<T>(value: T, millis: u32) -> T
where
    T: Clone + PartialEq + 'static,
{
    let debounced = use_state(|| value.clone());
    let timer = use_mut_ref(|| None::<Timeout>);

    {
        let debounced = debounced.clone();
        use_effect_with(value, move |value| {
            let value = value.clone();
            *timer.borrow_mut() = Some(Timeout::new(millis, move || debounced.set(value)));
            move || {
                timer.borrow_mut().take();
            }
        });
    }

    (*debounced).clone()
}

/// Shared handle on a screen's [`ResourceScreen`].
///
/// The state sits in a ref so async continuations always see the latest
/// value; every change forces a re-render.
#[derive(Clone)]
pub struct ScreenHandle {
    inner: Rc<RefCell<ResourceScreen>>,
    redraw: UseForceUpdateHandle,
}

impl PartialEq for ScreenHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl ScreenHandle {
    pub fn snapshot(&self) -> ResourceScreen {
        self.inner.borrow().clone()
    }

    pub fn update<R>(&self, f: impl FnOnce(&mut ResourceScreen) -> R) -> R {
        let out = f(&mut self.inner.borrow_mut());
        self.redraw.force_update();
        out
    }
}

#[hook]
pub fn use_resource_screen() -> ScreenHandle {
    let inner = use_mut_ref(ResourceScreen::new);
    let redraw = use_force_update();
    ScreenHandle {
        inner,
        redraw,
    }
}

/// Run the effects a screen transition asked for. Deletes are handed to
/// `on_delete`; the caller owns the actual call.
pub fn run_effects(
    effects: Vec<Effect>,
    notify: &Callback<Notice>,
    refetch: &Callback<()>,
    on_delete: &Callback<String>,
) {
    for effect in effects {
        match effect {
            Effect::Notify(notice) => notify.emit(notice),
            Effect::Refetch => refetch.emit(()),
            Effect::Delete(id) => on_delete.emit(id),
        }
    }
}

/// Issue a mutation for `screen` and feed its outcome back in.
///
/// Marks the screen pending, awaits `call`, then turns success into a
/// notice plus refetch and failure into an error notice with the modal
/// left open. `on_success` sees the result before the refetch.
pub fn spawn_mutation<T, Fut>(
    screen: ScreenHandle,
    call: Fut,
    success_message: impl FnOnce(&T) -> String + 'static,
    failure_fallback: &'static str,
    notify: Callback<Notice>,
    refetch: Callback<()>,
    on_success: Option<Callback<T>>,
) where
    T: 'static,
    Fut: Future<Output = Result<T, ApiError>> + 'static,
{
    screen.update(ResourceScreen::submit_started);
    wasm_bindgen_futures::spawn_local(async move {
        match call.await {
            Ok(value) => {
                let message = success_message(&value);
                if let Some(cb) = on_success {
                    cb.emit(value);
                }
                let effects = screen.update(|s| s.mutation_succeeded(message));
                run_effects(effects, &notify, &refetch, &Callback::noop());
            },
            Err(err) => {
                web_sys::console::error_1(&format!("{}: {}", failure_fallback, err).into());
                let effects = screen.update(|s| s.mutation_failed(&err, failure_fallback));
                run_effects(effects, &notify, &refetch, &Callback::noop());
            },
        }
    });
}

/// Callback for a delete modal's confirm button: moves the screen past the
/// confirmation and issues `delete` for the pending id.
pub fn confirm_delete_callback<F, Fut>(
    screen: ScreenHandle,
    delete: F,
    deleted_message: &'static str,
    failure_fallback: &'static str,
    notify: Callback<Notice>,
    refetch: Callback<()>,
) -> Callback<()>
where
    F: Fn(String) -> Fut + 'static,
    Fut: Future<Output = Result<(), ApiError>> + 'static,
{
    let delete = Rc::new(delete);
    Callback::from(move |_: ()| {
        let effect = screen.update(ResourceScreen::confirm_delete);
        let issue = {
            let screen = screen.clone();
            let notify = notify.clone();
            let refetch = refetch.clone();
            let delete = delete.clone();
            Callback::from(move |id: String| {
                spawn_mutation(
                    screen.clone(),
                    delete(id),
                    |_: &()| deleted_message.to_string(),
                    failure_fallback,
                    notify.clone(),
                    refetch.clone(),
                    None,
                );
            })
        };
        run_effects(effect.into_iter().collect(), &notify, &refetch, &issue);
    })
}

/// Automatically scroll the viewport to the top whenever the current route
/// changes.
#[hook]
pub fn use_scroll_to_top() {
    let location = use_location();

    use_effect_with(location, move |location| {
        if location.is_some() {
            scroll_window_to_top();
        }

        || ()
    });
}

fn scroll_window_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_left(0.0);
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}
