//! Proxy console: admin screens for access groups, agents and plugins.

#![allow(missing_docs, reason = "Yew props structs and component fns of the binary are not a public API")]

mod api;
mod components;
mod config;
pub mod hooks;
#[cfg(feature = "mock")]
mod models;
mod pages;
mod router;
mod storage;
mod i18n;

use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    html! {
        <>
            <router::AppRouter />
        </>
    }
}

fn main() {
    yew::Renderer::<App>::new().render();
}
