pub mod access_groups;
pub mod agents;
pub mod not_found;
pub mod plugins;

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: AttrValue,
    #[prop_or_default]
    pub subtitle: Option<AttrValue>,
    #[prop_or_default]
    pub action: Html,
}

/// Title row shared by the list screens.
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    html! {
        <div class="mb-6 flex flex-wrap items-end justify-between gap-4">
            <div>
                <h1 class="text-2xl font-bold">{ props.title.clone() }</h1>
                if let Some(subtitle) = props.subtitle.clone() {
                    <p class="mt-1 text-sm text-[var(--muted)]">{ subtitle }</p>
                }
            </div>
            { props.action.clone() }
        </div>
    }
}

/// Labeled form row with an optional error line.
pub fn field_row(label: &str, required: bool, error: Option<String>, input: Html) -> Html {
    html! {
        <label class="block space-y-1">
            <span class="text-sm font-semibold">
                { label.to_string() }
                if required {
                    <span class="ml-0.5 text-red-600">{ "*" }</span>
                }
            </span>
            { input }
            if let Some(error) = error {
                <p class="text-xs text-red-600">{ error }</p>
            }
        </label>
    }
}
