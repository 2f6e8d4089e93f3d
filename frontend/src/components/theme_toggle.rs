use proxy_console_shared::prefs::DARK_THEME;
use yew::prelude::*;

use crate::{i18n::current::theme_toggle as t, storage};

/// Reflect the theme on `<html data-theme>` and the `dark` class.
pub fn apply_theme(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element())
    else {
        return;
    };
    let _ = root.set_attribute("data-theme", if dark { "dark" } else { "light" });
    let class_list = root.class_list();
    let _ = if dark { class_list.add_1("dark") } else { class_list.remove_1("dark") };
}

#[derive(Properties, PartialEq)]
pub struct ThemeToggleProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(ThemeToggle)]
pub fn theme_toggle(props: &ThemeToggleProps) -> Html {
    let ThemeToggleProps {
        class,
    } = props;
    let theme_state = use_state(|| storage::read_flag(DARK_THEME));

    use_effect_with(*theme_state, |dark| apply_theme(*dark));

    let onclick = {
        let theme_state = theme_state.clone();
        Callback::from(move |_| {
            let next = !*theme_state;
            storage::write_flag(DARK_THEME, next);
            theme_state.set(next);
        })
    };

    let label = if *theme_state { t::SWITCH_TO_LIGHT } else { t::SWITCH_TO_DARK };

    let icon_class = if *theme_state { "fa-sun" } else { "fa-moon" };

    let button_class = classes!(
        "group",
        "btn-fluent-icon",
        "border",
        "border-[var(--border)]",
        "bg-transparent",
        "hover:bg-[var(--surface-alt)]",
        "transition-all",
        "duration-100",
        "ease-[var(--ease-snap)]",
        class.clone()
    );

    html! {
        <button
            type="button"
            class={button_class}
            {onclick}
            aria-label={label}
            title={label}
            aria-pressed={(*theme_state).to_string()}
        >
            <i
                class={classes!(
                    "fas",
                    icon_class,
                    "fa-lg",
                    "text-[var(--text)]",
                    "group-hover:text-[var(--primary)]"
                )}
                aria-hidden="true"
            ></i>
            <span class="sr-only">{ label }</span>
        </button>
    }
}
