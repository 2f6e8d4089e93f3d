//! Page arithmetic for client-side pagination and the pager's slot layout.

/// One entry in the pager strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A clickable page number (1-based).
    Page(usize),
    /// Gap marker; the tag keeps left/right keys distinct.
    Ellipsis(&'static str),
}

/// Pages needed for `len` items, never less than one.
pub fn total_pages(len: usize, per_page: usize) -> usize {
    let per_page = per_page.max(1);
    if len == 0 {
        1
    } else {
        let numerator = len.saturating_add(per_page - 1);
        usize::max(numerator / per_page, 1)
    }
}

/// Clamp a 1-based page number into `1..=total_pages`.
pub fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.max(1).min(total_pages.max(1))
}

/// Slice of `items` shown on `page` (1-based, clamped).
pub fn page_slice<T>(items: &[T], page: usize, per_page: usize) -> &[T] {
    if items.is_empty() {
        return items;
    }
    let per_page = per_page.max(1);
    let safe_page = clamp_page(page, total_pages(items.len(), per_page));
    let start = per_page.saturating_mul(safe_page - 1);
    let end = usize::min(start + per_page, items.len());
    &items[start..end]
}

/// Pager layout, never more than seven slots: every page when there are
/// at most seven, otherwise the first and last page with ellipses around
/// either a five-page run at an edge or `current` and its neighbours.
pub fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let current = clamp_page(current, total);
    let mut slots = Vec::with_capacity(7);

    if current <= 4 {
        slots.extend((1..=5).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis("right"));
        slots.push(PageSlot::Page(total));
    } else if current + 3 >= total {
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis("left"));
        slots.extend((total - 4..=total).map(PageSlot::Page));
    } else {
        slots.push(PageSlot::Page(1));
        slots.push(PageSlot::Ellipsis("left"));
        slots.extend((current - 1..=current + 1).map(PageSlot::Page));
        slots.push(PageSlot::Ellipsis("right"));
        slots.push(PageSlot::Page(total));
    }

    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_one_page() {
        assert_eq!(total_pages(0, 10), 1);
        assert!(page_slice::<u8>(&[], 3, 10).is_empty());
    }

    #[test]
    fn last_page_shows_remainder() {
        let items: Vec<u32> = (0..23).collect();
        assert_eq!(total_pages(items.len(), 10), 3);
        assert_eq!(page_slice(&items, 3, 10), &[20, 21, 22]);
        assert_eq!(page_slice(&items, 1, 10).len(), 10);
    }

    #[test]
    fn out_of_range_pages_clamp() {
        let items: Vec<u32> = (0..15).collect();
        assert_eq!(page_slice(&items, 0, 10), page_slice(&items, 1, 10));
        assert_eq!(page_slice(&items, 9, 10), &[10, 11, 12, 13, 14]);
    }

    #[test]
    fn short_pager_lists_every_page() {
        assert_eq!(visible_slots(2, 3), vec![PageSlot::Page(1), PageSlot::Page(2), PageSlot::Page(3)]);
    }

    #[test]
    fn long_pager_uses_ellipses_around_window() {
        let slots = visible_slots(10, 20);
        assert_eq!(
            slots,
            vec![
                PageSlot::Page(1),
                PageSlot::Ellipsis("left"),
                PageSlot::Page(9),
                PageSlot::Page(10),
                PageSlot::Page(11),
                PageSlot::Ellipsis("right"),
                PageSlot::Page(20),
            ]
        );
    }

    #[test]
    fn pager_never_exceeds_seven_slots() {
        for total in 1..=40 {
            for current in 1..=total {
                let slots = visible_slots(current, total);
                assert!(slots.len() <= 7, "current {current} of {total}: {slots:?}");
                assert!(slots.contains(&PageSlot::Page(current)), "current {current} of {total}: {slots:?}");
                assert_eq!(slots.first(), Some(&PageSlot::Page(1)));
                assert_eq!(slots.last(), Some(&PageSlot::Page(total)));
            }
        }
        assert_eq!(visible_slots(4, 8), vec![
            PageSlot::Page(1),
            PageSlot::Page(2),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5),
            PageSlot::Ellipsis("right"),
            PageSlot::Page(8),
        ]);
    }

    #[test]
    fn pager_window_sticks_to_edges() {
        let head = visible_slots(1, 20);
        assert_eq!(head[..5], [
            PageSlot::Page(1),
            PageSlot::Page(2),
            PageSlot::Page(3),
            PageSlot::Page(4),
            PageSlot::Page(5)
        ]);
        assert_eq!(head[5], PageSlot::Ellipsis("right"));

        let tail = visible_slots(20, 20);
        assert_eq!(tail[1], PageSlot::Ellipsis("left"));
        assert_eq!(tail[2..], [
            PageSlot::Page(16),
            PageSlot::Page(17),
            PageSlot::Page(18),
            PageSlot::Page(19),
            PageSlot::Page(20)
        ]);
    }
}
