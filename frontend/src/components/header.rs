use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::theme_toggle::ThemeToggle,
    hooks::use_scroll_to_top,
    i18n::current::header as t,
    router::{Route, UiPrefs},
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();
    use_scroll_to_top();
    let prefs = use_context::<UiPrefs>();

    let nav_items = [
        (t::NAV_ACCESS_GROUPS, Route::AccessGroups, "fa-layer-group"),
        (t::NAV_AGENTS, Route::Agents, "fa-robot"),
        (t::NAV_PLUGINS, Route::Plugins, "fa-puzzle-piece"),
    ];

    let compact_toggle = prefs.map(|prefs| {
        let checked = prefs.compact_rows;
        let onchange = {
            let set = prefs.set_compact_rows.clone();
            Callback::from(move |_: Event| set.emit(!checked))
        };
        html! {
            <label class="hidden sm:inline-flex items-center gap-2 text-sm text-[var(--muted)] cursor-pointer">
                <input type="checkbox" {checked} {onchange} />
                { t::COMPACT_ROWS }
            </label>
        }
    });

    html! {
        <header class="sticky top-0 z-50 border-b border-[var(--border)] bg-[var(--surface)]/90 backdrop-blur">
            <div class="mx-auto flex max-w-6xl items-center gap-6 px-4 py-3">
                <Link<Route> to={Route::AccessGroups} classes="text-lg font-bold text-[var(--text)]">
                    { t::BRAND_NAME }
                </Link<Route>>
                <nav class="flex flex-1 items-center gap-1" aria-label={t::NAV_MAIN_ARIA}>
                    { for nav_items.into_iter().map(|(label, target, icon)| {
                        let active = route.as_ref().map(|current| current.section() == target.section()).unwrap_or(false);
                        let classes = classes!(
                            "inline-flex", "items-center", "gap-2", "rounded-lg", "px-3", "py-2", "text-sm",
                            "font-semibold", "transition-colors", "hover:bg-[var(--surface-alt)]",
                            if active { "text-[var(--primary)] bg-[var(--surface-alt)]" } else { "text-[var(--text)]" }
                        );
                        html! {
                            <Link<Route> to={target} {classes}>
                                <i class={classes!("fas", icon)} aria-hidden="true"></i>
                                { label }
                            </Link<Route>>
                        }
                    }) }
                </nav>
                { compact_toggle }
                <ThemeToggle />
            </div>
        </header>
    }
}
