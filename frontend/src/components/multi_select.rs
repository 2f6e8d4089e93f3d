use proxy_console_shared::AssociationSet;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{loading_spinner::{LoadingSpinner, SpinnerSize}, modal::INPUT},
    i18n::{current::association as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct MultiSelectProps {
    pub options: Vec<String>,
    pub selected: Vec<String>,
    pub on_change: Callback<Vec<String>>,
    #[prop_or(false)]
    pub loading: bool,
    #[prop_or(false)]
    pub disabled: bool,
}

/// Checkbox list with a filter box. Selected ids that are no longer
/// offered stay listed so they can be removed.
#[function_component(MultiSelect)]
pub fn multi_select(props: &MultiSelectProps) -> Html {
    let filter = use_state(String::new);

    let on_filter = {
        let filter = filter.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                filter.set(input.value());
            }
        })
    };

    let selected: AssociationSet = props.selected.iter().cloned().collect();
    let mut options: Vec<String> = props.options.clone();
    for id in selected.iter() {
        if !options.contains(id) {
            options.push(id.clone());
        }
    }
    let needle = filter.trim().to_lowercase();
    let visible: Vec<String> = options
        .into_iter()
        .filter(|option| needle.is_empty() || option.to_lowercase().contains(&needle))
        .collect();

    html! {
        <div class="space-y-2">
            <div class="flex items-center justify-between gap-3">
                <input
                    type="search"
                    class={INPUT}
                    placeholder={t::FILTER_PLACEHOLDER}
                    value={(*filter).clone()}
                    oninput={on_filter}
                    disabled={props.disabled}
                />
                <span class="shrink-0 text-xs text-[var(--muted)]">
                    { fill_one(t::SELECTED_TEMPLATE, selected.len()) }
                </span>
            </div>
            if props.loading {
                <LoadingSpinner size={SpinnerSize::Small} />
            } else if visible.is_empty() {
                <p class="text-sm text-[var(--muted)]">{ t::NONE_SELECTED }</p>
            } else {
                <ul class="max-h-64 space-y-1 overflow-y-auto rounded-lg border border-[var(--border)] p-2">
                    { for visible.into_iter().map(|option| {
                        let checked = selected.contains(&option);
                        let onchange = {
                            let on_change = props.on_change.clone();
                            let selected = selected.clone();
                            let option = option.clone();
                            Callback::from(move |_: Event| {
                                let mut next = selected.clone();
                                if checked {
                                    next.remove(&option);
                                } else {
                                    next.insert(option.clone());
                                }
                                on_change.emit(next.to_vec());
                            })
                        };
                        html! {
                            <li key={option.clone()}>
                                <label class="flex cursor-pointer items-center gap-2 rounded px-2 py-1 text-sm hover:bg-[var(--surface-alt)]">
                                    <input type="checkbox" {checked} {onchange} disabled={props.disabled} />
                                    <span class="font-mono">{ option }</span>
                                </label>
                            </li>
                        }
                    }) }
                </ul>
            }
        </div>
    }
}
