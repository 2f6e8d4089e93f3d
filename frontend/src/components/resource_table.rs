use std::rc::Rc;

use proxy_console_shared::{
    list_view::{apply, ListQuery, SortDirection},
    Resource,
};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::{
    components::{empty_state::EmptyState, pagination::Pagination},
    i18n::current::{common, empty_state as empty_text},
};

/// One table column: header text, optional sort key, cell renderer.
pub struct Column<T: Resource> {
    pub header: &'static str,
    pub sort: Option<T::SortKey>,
    pub render: Rc<dyn Fn(&T) -> Html>,
}

impl<T: Resource> Column<T> {
    pub fn new(header: &'static str, render: impl Fn(&T) -> Html + 'static) -> Self {
        Self {
            header,
            sort: None,
            render: Rc::new(render),
        }
    }

    pub fn sortable(mut self, key: T::SortKey) -> Self {
        self.sort = Some(key);
        self
    }
}

impl<T: Resource> Clone for Column<T> {
    fn clone(&self) -> Self {
        Self {
            header: self.header,
            sort: self.sort,
            render: self.render.clone(),
        }
    }
}

impl<T: Resource> PartialEq for Column<T> {
    fn eq(&self, other: &Self) -> bool {
        self.header == other.header && self.sort == other.sort && Rc::ptr_eq(&self.render, &other.render)
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourceTableProps<T: Resource> {
    pub items: Rc<Vec<T>>,
    pub columns: Vec<Column<T>>,
    pub empty_title: AttrValue,
    pub empty_message: AttrValue,
    #[prop_or_default]
    pub empty_action: Html,
    #[prop_or_default]
    pub on_edit: Option<Callback<T>>,
    pub on_delete: Callback<T>,
    #[prop_or(false)]
    pub compact: bool,
    #[prop_or(false)]
    pub actions_disabled: bool,
    /// Row the open edit or delete modal is about; drawn highlighted.
    #[prop_or_default]
    pub highlighted: Option<AttrValue>,
}

/// Searchable, sortable, paginated table over any [`Resource`].
#[function_component(ResourceTable)]
pub fn resource_table<T>(props: &ResourceTableProps<T>) -> Html
where
    T: Resource,
{
    let query = use_state(ListQuery::<T::SortKey>::default);
    let page = apply(props.items.as_slice(), &query);

    let on_search = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                query.set((*query).clone().with_search(input.value()));
            }
        })
    };

    let on_page_change = {
        let query = query.clone();
        Callback::from(move |next: usize| query.set((*query).clone().with_page(next)))
    };

    if page.is_collection_empty() {
        return html! {
            <EmptyState
                title={props.empty_title.clone()}
                message={Some(props.empty_message.clone())}
                action={props.empty_action.clone()}
            />
        };
    }

    let cell_padding = if props.compact { "px-3 py-1.5" } else { "px-4 py-3" };
    let active_sort = query.sort();
    let column_count = props.columns.len() + 1;

    let header_cells = props.columns.iter().map(|column| match column.sort {
        Some(key) => {
            let indicator = match active_sort {
                Some(sort) if sort.key == key => match sort.direction {
                    SortDirection::Asc => common::SORT_ASC,
                    SortDirection::Desc => common::SORT_DESC,
                },
                _ => "",
            };
            let onclick = {
                let query = query.clone();
                Callback::from(move |_: MouseEvent| query.set((*query).clone().cycle_sort(key)))
            };
            html! {
                <th class={classes!("text-left", "font-semibold", cell_padding)}>
                    <button type="button" class="inline-flex items-center gap-1 hover:text-[var(--primary)]" {onclick}>
                        { column.header }
                        <span class="text-xs">{ indicator }</span>
                    </button>
                </th>
            }
        },
        None => html! {
            <th class={classes!("text-left", "font-semibold", cell_padding)}>{ column.header }</th>
        },
    });

    let rows = page.rows.iter().map(|item| {
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let item = item.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(item.clone()))
        };
        let edit_button = props.on_edit.clone().map(|on_edit| {
            let item = item.clone();
            let onclick = Callback::from(move |_: MouseEvent| on_edit.emit(item.clone()));
            html! {
                <button type="button" class="text-sm font-semibold text-[var(--primary)] hover:underline disabled:opacity-50"
                    disabled={props.actions_disabled} {onclick}>
                    { common::EDIT }
                </button>
            }
        });
        html! {
            <tr
                key={item.id().to_string()}
                class={classes!(
                    "border-t", "border-[var(--border)]", "hover:bg-[var(--surface-alt)]",
                    (props.highlighted.as_deref() == Some(item.id())).then_some("bg-[var(--surface-alt)]")
                )}
            >
                { for props.columns.iter().map(|column| html! {
                    <td class={classes!("align-top", cell_padding)}>{ (column.render)(item) }</td>
                }) }
                <td class={classes!("whitespace-nowrap", "text-right", cell_padding)}>
                    <div class="inline-flex gap-3">
                        { edit_button }
                        <button type="button" class="text-sm font-semibold text-red-600 hover:underline disabled:opacity-50"
                            disabled={props.actions_disabled} onclick={on_delete}>
                            { common::DELETE }
                        </button>
                    </div>
                </td>
            </tr>
        }
    });

    html! {
        <div class="space-y-4">
            <input
                type="search"
                class="w-full max-w-md rounded-lg border border-[var(--border)] bg-[var(--surface)] px-3 py-2 text-sm focus:border-[var(--primary)] focus:outline-none"
                placeholder={common::SEARCH_PLACEHOLDER}
                value={query.search().to_string()}
                oninput={on_search}
            />
            <div class="overflow-x-auto rounded-xl border border-[var(--border)]">
                <table class="w-full text-sm">
                    <thead class="bg-[var(--surface-alt)]">
                        <tr>
                            { for header_cells }
                            <th class={classes!("text-right", "font-semibold", cell_padding)}>{ common::ACTIONS }</th>
                        </tr>
                    </thead>
                    <tbody>
                        if page.is_filtered_empty() {
                            <tr>
                                <td colspan={column_count.to_string()} class="px-4 py-10 text-center">
                                    <p class="font-semibold">{ empty_text::NO_MATCHES_TITLE }</p>
                                    <p class="text-[var(--muted)]">{ empty_text::NO_MATCHES_MESSAGE }</p>
                                </td>
                            </tr>
                        } else {
                            { for rows }
                        }
                    </tbody>
                </table>
            </div>
            <Pagination
                current_page={page.page}
                total_pages={page.total_pages}
                on_page_change={on_page_change}
                summary={Some((page.rows.len(), page.total_matches))}
            />
        </div>
    }
}
