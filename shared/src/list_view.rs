//! Client-side search, sort and pagination for resource tables.

use crate::{
    pagination::{clamp_page, page_slice, total_pages},
    resource::Resource,
};

/// Rows per page on every resource table.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Sort direction of the active column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

/// Active sort column and direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState<K> {
    /// Column.
    pub key: K,
    /// Direction.
    pub direction: SortDirection,
}

/// What the user asked the table to show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery<K> {
    search: String,
    sort: Option<SortState<K>>,
    page: usize,
    page_size: usize,
}

impl<K: Copy + PartialEq> Default for ListQuery<K> {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl<K: Copy + PartialEq> ListQuery<K> {
    /// First page, no search, server order.
    pub fn new(page_size: usize) -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    /// Raw search text as typed.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active sort, if any.
    pub fn sort(&self) -> Option<SortState<K>> {
        self.sort
    }

    /// Requested 1-based page (may exceed the last page until applied).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Replace the search text. A changed search jumps back to page 1.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        let search = search.into();
        if search != self.search {
            self.page = 1;
        }
        self.search = search;
        self
    }

    /// Replace the sort; `None` restores server order.
    pub fn with_sort(mut self, sort: Option<SortState<K>>) -> Self {
        self.sort = sort;
        self
    }

    /// Cycle a column header: ascending, then descending, then unsorted.
    pub fn cycle_sort(self, key: K) -> Self {
        let next = match self.sort {
            Some(SortState {
                key: active,
                direction: SortDirection::Asc,
            }) if active == key => Some(SortState {
                key,
                direction: SortDirection::Desc,
            }),
            Some(SortState {
                key: active,
                direction: SortDirection::Desc,
            }) if active == key => None,
            _ => Some(SortState {
                key,
                direction: SortDirection::Asc,
            }),
        };
        self.with_sort(next)
    }

    /// Jump to `page` (clamped when the view is computed).
    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page.max(1);
        self
    }
}

/// One rendered page of a resource table.
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    /// Rows on the current page.
    pub rows: Vec<T>,
    /// Rows matching the search, across all pages.
    pub total_matches: usize,
    /// Rows before searching.
    pub total_items: usize,
    /// Current page after clamping.
    pub page: usize,
    /// Page count for `total_matches`.
    pub total_pages: usize,
}

impl<T> ListPage<T> {
    /// `true` when the collection itself is empty (not merely filtered out).
    pub fn is_collection_empty(&self) -> bool {
        self.total_items == 0
    }

    /// `true` when rows exist but none match the search.
    pub fn is_filtered_empty(&self) -> bool {
        self.total_items > 0 && self.total_matches == 0
    }
}

/// Apply `query` to `items`: filter by search, stable-sort, then slice.
pub fn apply<T: Resource>(items: &[T], query: &ListQuery<T::SortKey>) -> ListPage<T> {
    let needle = query.search.to_lowercase();
    let mut matched: Vec<&T> = items.iter().filter(|item| item.matches_search(&needle)).collect();

    if let Some(sort) = query.sort {
        // `sort_by` is stable, so ties keep server order.
        matched.sort_by(|left, right| {
            let ordering = left.compare(right, sort.key);
            match sort.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
    }

    let pages = total_pages(matched.len(), query.page_size);
    let page = clamp_page(query.page, pages);
    let rows = page_slice(&matched, page, query.page_size)
        .iter()
        .map(|item| (*item).clone())
        .collect();

    ListPage {
        rows,
        total_matches: matched.len(),
        total_items: items.len(),
        page,
        total_pages: pages,
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use proptest::prelude::*;

    use super::*;
    use crate::resource::AuditInfo;

    #[derive(Debug, Clone, PartialEq)]
    struct Row {
        id: String,
        name: String,
        description: Option<String>,
        audit: AuditInfo,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Col {
        Name,
    }

    impl Resource for Row {
        type SortKey = Col;

        fn id(&self) -> &str {
            &self.id
        }

        fn name(&self) -> &str {
            &self.name
        }

        fn description(&self) -> Option<&str> {
            self.description.as_deref()
        }

        fn audit(&self) -> &AuditInfo {
            &self.audit
        }

        fn compare(&self, other: &Self, key: Col) -> std::cmp::Ordering {
            match key {
                Col::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            }
        }
    }

    fn row(id: &str, name: &str, description: Option<&str>) -> Row {
        let at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).single().unwrap_or_default();
        Row {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            audit: AuditInfo::created(at, None),
        }
    }

    fn sample() -> Vec<Row> {
        vec![
            row("ag_1", "Eng Team", Some("Engineering models")),
            row("ag_2", "Sales", None),
            row("ag_3", "research", Some("Sandbox for ENG experiments")),
            row("ag_4", "eng-oncall", None),
        ]
    }

    #[test]
    fn search_matches_name_id_and_description_case_insensitively() {
        let query = ListQuery::new(10).with_search("ENG");
        let page = apply(&sample(), &query);
        let ids: Vec<_> = page.rows.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["ag_1", "ag_3", "ag_4"]);

        let by_id = apply(&sample(), &ListQuery::new(10).with_search("ag_2"));
        assert_eq!(by_id.rows.len(), 1);
    }

    #[test]
    fn search_text_is_matched_as_typed() {
        let ids = |search: &str| -> Vec<String> {
            apply(&sample(), &ListQuery::new(10).with_search(search))
                .rows
                .into_iter()
                .map(|r| r.id)
                .collect()
        };
        assert_eq!(ids(" eng"), ["ag_3"]);
        assert_eq!(ids(" "), ["ag_1", "ag_3"]);
    }

    #[test]
    fn missing_description_never_breaks_search() {
        let page = apply(&sample(), &ListQuery::new(10).with_search("sandbox"));
        assert_eq!(page.rows.len(), 1);
        assert_eq!(page.rows[0].id, "ag_3");
    }

    #[test]
    fn changing_search_resets_page() {
        let query = ListQuery::<Col>::new(2).with_page(2).with_search("e");
        assert_eq!(query.page(), 1);
        let same = query.clone().with_page(2).with_search("e");
        assert_eq!(same.page(), 2);
    }

    #[test]
    fn sort_cycles_and_is_stable() {
        let mut items = sample();
        items.push(row("ag_5", "sales", None));
        let query = ListQuery::new(10).cycle_sort(Col::Name);
        let asc: Vec<_> = apply(&items, &query).rows.into_iter().map(|r| r.id).collect();
        assert_eq!(asc, ["ag_1", "ag_4", "ag_3", "ag_2", "ag_5"]);

        let query = query.cycle_sort(Col::Name);
        let desc: Vec<_> = apply(&items, &query).rows.into_iter().map(|r| r.id).collect();
        assert_eq!(desc, ["ag_2", "ag_5", "ag_3", "ag_4", "ag_1"]);

        let query = query.cycle_sort(Col::Name);
        assert_eq!(query.sort(), None);
        let unsorted: Vec<_> = apply(&items, &query).rows.into_iter().map(|r| r.id).collect();
        assert_eq!(unsorted, ["ag_1", "ag_2", "ag_3", "ag_4", "ag_5"]);
    }

    #[test]
    fn empty_collection_versus_filtered_out() {
        let empty: Vec<Row> = Vec::new();
        let page = apply(&empty, &ListQuery::new(10));
        assert!(page.is_collection_empty());
        assert_eq!(page.total_pages, 1);

        let page = apply(&sample(), &ListQuery::new(10).with_search("zzz"));
        assert!(page.is_filtered_empty());
    }

    proptest! {
        #[test]
        fn visible_rows_are_exactly_the_matches(
            rows in proptest::collection::vec(("[a-zA-Z ]{0,8}", proptest::option::of("[a-zA-Z ]{0,12}")), 0..30),
            needle in "[a-zA-Z ]{0,3}",
        ) {
            let items: Vec<Row> = rows
                .iter()
                .enumerate()
                .map(|(i, (name, description))| row(&format!("id{i}"), name, description.as_deref()))
                .collect();
            let query = ListQuery::new(usize::MAX).with_search(needle.clone());
            let page = apply(&items, &query);
            let lower = needle.to_lowercase();
            let expected: Vec<&Row> = items
                .iter()
                .filter(|r| lower.is_empty()
                    || r.name.to_lowercase().contains(&lower)
                    || r.id.to_lowercase().contains(&lower)
                    || r.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&lower)))
                .collect();
            prop_assert_eq!(page.rows.len(), expected.len());
            for (got, want) in page.rows.iter().zip(expected) {
                prop_assert_eq!(got, want);
            }
        }

        #[test]
        fn pages_skip_and_cap_rows(len in 0usize..60, size in 1usize..15, page in 1usize..8) {
            let items: Vec<Row> = (0..len).map(|i| row(&format!("id{i}"), "n", None)).collect();
            let query = ListQuery::new(size).with_page(page);
            let view = apply(&items, &query);
            prop_assert!(view.rows.len() <= size);
            let skipped = (view.page - 1) * size;
            prop_assert_eq!(view.rows.len(), size.min(len.saturating_sub(skipped)));
            if let Some(first) = view.rows.first() {
                prop_assert_eq!(&first.id, &format!("id{skipped}"));
            }
        }
    }
}
