use proxy_console_shared::screen::{abbreviate_id, AssociationPreview, PreviewToggle};
use yew::prelude::*;

use crate::i18n::{current::association as t, fill_one};

#[derive(Properties, PartialEq)]
pub struct AssociationPanelProps {
    pub title: AttrValue,
    pub ids: Vec<String>,
    pub empty_text: AttrValue,
    /// Shorten long ids (keys) for display; the full id stays in the tooltip.
    #[prop_or(false)]
    pub abbreviate: bool,
}

/// Capped list of attached ids with a "View all (N)" / "Show less" toggle.
#[function_component(AssociationPanel)]
pub fn association_panel(props: &AssociationPanelProps) -> Html {
    let preview = use_state(AssociationPreview::default);

    let toggle = {
        let preview = preview.clone();
        Callback::from(move |_: MouseEvent| preview.set(preview.toggle()))
    };

    let toggle_label = preview.toggle_label(props.ids.len()).map(|label| match label {
        PreviewToggle::ViewAll(total) => fill_one(t::VIEW_ALL_TEMPLATE, total),
        PreviewToggle::ShowLess => t::SHOW_LESS.to_string(),
    });

    html! {
        <section class="rounded-xl border border-[var(--border)] p-4">
            <h3 class="mb-3 flex items-center gap-2 font-semibold">
                { props.title.clone() }
                <span class="rounded-full bg-[var(--surface-alt)] px-2 text-xs">{ props.ids.len() }</span>
            </h3>
            if props.ids.is_empty() {
                <p class="text-sm text-[var(--muted)]">{ props.empty_text.clone() }</p>
            } else {
                <ul class="flex flex-wrap gap-2">
                    { for preview.visible(&props.ids).iter().map(|id| {
                        let shown = if props.abbreviate { abbreviate_id(id) } else { id.clone() };
                        html! {
                            <li key={id.clone()} title={id.clone()} class="rounded-md bg-[var(--surface-alt)] px-2 py-1 font-mono text-xs">
                                { shown }
                            </li>
                        }
                    }) }
                </ul>
                if let Some(label) = toggle_label {
                    <button type="button" class="mt-3 text-sm font-semibold text-[var(--primary)] hover:underline" onclick={toggle}>
                        { label }
                    </button>
                }
            }
        </section>
    }
}
