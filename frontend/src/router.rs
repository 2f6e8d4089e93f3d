use proxy_console_shared::prefs::COMPACT_ROWS;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::{header::Header, notification::NotificationHost},
    pages, storage,
};

#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,

    #[at("/access-groups")]
    AccessGroups,

    #[at("/access-groups/:id")]
    AccessGroupDetail { id: String },

    #[at("/agents")]
    Agents,

    #[at("/agents/:id")]
    AgentDetail { id: String },

    #[at("/plugins")]
    Plugins,

    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Top-level area a route belongs to, for nav highlighting.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Section {
    AccessGroups,
    Agents,
    Plugins,
    Other,
}

impl Route {
    pub fn section(&self) -> Section {
        match self {
            Route::Home | Route::AccessGroups | Route::AccessGroupDetail { .. } => Section::AccessGroups,
            Route::Agents | Route::AgentDetail { .. } => Section::Agents,
            Route::Plugins => Section::Plugins,
            Route::NotFound => Section::Other,
        }
    }
}

/// UI preferences shared through context.
#[derive(Clone, PartialEq)]
pub struct UiPrefs {
    pub compact_rows: bool,
    pub set_compact_rows: Callback<bool>,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Redirect<Route> to={Route::AccessGroups} /> },
        Route::AccessGroups => html! { <pages::access_groups::AccessGroupsPage /> },
        Route::AccessGroupDetail {
            id,
        } => {
            html! { <pages::access_groups::AccessGroupDetailPage id={id} /> }
        },
        Route::Agents => html! { <pages::agents::AgentsPage /> },
        Route::AgentDetail {
            id,
        } => {
            html! { <pages::agents::AgentDetailPage id={id} /> }
        },
        Route::Plugins => html! { <pages::plugins::PluginsPage /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    let compact_rows = use_state(|| storage::read_flag(COMPACT_ROWS));
    let prefs = {
        let compact_rows = compact_rows.clone();
        UiPrefs {
            compact_rows: *compact_rows,
            set_compact_rows: Callback::from(move |value: bool| {
                storage::write_flag(COMPACT_ROWS, value);
                compact_rows.set(value);
            }),
        }
    };

    html! {
        <BrowserRouter>
            <ContextProvider<UiPrefs> context={prefs}>
                <NotificationHost>
                    <div class="flex flex-col bg-[var(--bg)]" style="min-height: 100vh; min-height: 100svh;">
                        <Header />
                        <div class="flex-1 pt-[var(--space-sm)]">
                            <Switch<Route> render={switch} />
                        </div>
                    </div>
                </NotificationHost>
            </ContextProvider<UiPrefs>>
        </BrowserRouter>
    }
}
