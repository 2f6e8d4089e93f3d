use yew::prelude::*;
use yew_router::prelude::Link;

use crate::{components::empty_state::EmptyState, i18n::current::not_found as t, router::Route};

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class="mx-auto max-w-6xl px-4 py-16">
            <EmptyState
                title={t::TITLE}
                message={Some(AttrValue::from(t::MESSAGE))}
                action={html! {
                    <Link<Route> to={Route::AccessGroups} classes="text-sm font-semibold text-[var(--primary)] hover:underline">
                        { t::HOME_LINK }
                    </Link<Route>>
                }}
            />
        </main>
    }
}
