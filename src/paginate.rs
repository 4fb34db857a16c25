/// Pagination over the derived product list
///
/// Everything in this module is a pure computation: slicing the derived
/// list into a page, counting pages, building the page-number strip for
/// the pagination controls, and formatting the status line. Clamping the
/// current page into range is the caller's job (ViewState owns that
/// policy); this module only computes.

/// One page of a list, with the metadata the controls need
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, T> {
    /// The visible slice for this page
    pub items: &'a [T],
    /// Total number of pages (0 for an empty list)
    pub total_pages: usize,
    /// 1-based inclusive index of the first visible item (0 when empty)
    pub range_start: usize,
    /// 1-based inclusive index of the last visible item (0 when empty)
    pub range_end: usize,
}

/// Total page count: ceil(len / page_size), 0 for an empty list
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size)
}

/// Slice one page out of a list.
///
/// `page` is 1-based and must already be clamped to `[1, total_pages]`
/// when the list is non-empty. The empty list is the one exception:
/// it yields an empty page with `total_pages = 0` and a 0-0 range,
/// which displays as "page 1 of 0" without error.
pub fn paginate<T>(list: &[T], page: usize, page_size: usize) -> PageView<'_, T> {
    let total = total_pages(list.len(), page_size);
    debug_assert!(page >= 1, "pages are 1-based");
    debug_assert!(total == 0 || page <= total, "caller must clamp the page");

    if list.is_empty() {
        return PageView {
            items: &[],
            total_pages: 0,
            range_start: 0,
            range_end: 0,
        };
    }

    let start = (page - 1) * page_size;
    let end = (start + page_size).min(list.len());

    PageView {
        items: &list[start..end],
        total_pages: total,
        range_start: start + 1,
        range_end: end,
    }
}

/// One entry in the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    /// A clickable page number
    Page(usize),
    /// A "..." marker standing in for a gap of hidden pages
    Ellipsis,
}

/// Up to this many consecutive page numbers are shown, centered on the
/// current page
const WINDOW: usize = 5;

/// Build the page-number strip: a sliding window of up to `WINDOW`
/// consecutive pages centered on the current page, with the first and
/// last page always present and an ellipsis wherever hidden pages sit
/// between the window and an edge page.
pub fn page_controls(current: usize, total: usize) -> Vec<PageControl> {
    if total == 0 {
        return Vec::new();
    }

    // Center the window on the current page, then pull it back inside
    // the valid range when it runs off either end
    let mut start = current.saturating_sub(WINDOW / 2).max(1);
    let end = (start + WINDOW - 1).min(total);
    if end + 1 - start < WINDOW {
        start = (end + 1).saturating_sub(WINDOW).max(1);
    }

    let mut controls = Vec::new();

    if start > 1 {
        controls.push(PageControl::Page(1));
        if start > 2 {
            controls.push(PageControl::Ellipsis);
        }
    }

    for page in start..=end {
        controls.push(PageControl::Page(page));
    }

    if end < total {
        if end < total - 1 {
            controls.push(PageControl::Ellipsis);
        }
        controls.push(PageControl::Page(total));
    }

    controls
}

/// Human-readable status line for the current page.
///
/// Reports the visible 1-based item range, the total item count, and the
/// page position; an empty derived list gets its own distinct message.
pub fn status_line<T>(view: &PageView<'_, T>, total_items: usize, current_page: usize) -> String {
    if total_items == 0 {
        return "No products found.".to_string();
    }

    format!(
        "Showing {}-{} of {} (Page {}/{})",
        view.range_start, view.range_end, total_items, current_page, view.total_pages
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_is_ceiling_division() {
        assert_eq!(total_pages(23, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_last_page_is_short() {
        // 23 items at 10 per page: page 3 shows items 21-23
        let items: Vec<usize> = (1..=23).collect();

        let view = paginate(&items, 3, 10);
        assert_eq!(view.items, &[21, 22, 23]);
        assert_eq!(view.total_pages, 3);
        assert_eq!(view.range_start, 21);
        assert_eq!(view.range_end, 23);
    }

    #[test]
    fn test_pages_partition_the_list_exactly_once() {
        let items: Vec<usize> = (1..=23).collect();
        let page_size = 10;
        let total = total_pages(items.len(), page_size);

        let mut seen = Vec::new();
        for page in 1..=total {
            let view = paginate(&items, page, page_size);
            assert!(view.items.len() <= page_size);
            seen.extend_from_slice(view.items);
        }

        assert_eq!(seen, items);
    }

    #[test]
    fn test_empty_list_paginates_without_error() {
        let items: Vec<usize> = Vec::new();

        let view = paginate(&items, 1, 10);
        assert!(view.items.is_empty());
        assert_eq!(view.total_pages, 0);
        assert_eq!(view.range_start, 0);
        assert_eq!(view.range_end, 0);
    }

    #[test]
    fn test_status_line_matches_display_format() {
        let items: Vec<usize> = (1..=23).collect();
        let view = paginate(&items, 3, 10);

        assert_eq!(
            status_line(&view, items.len(), 3),
            "Showing 21-23 of 23 (Page 3/3)"
        );
    }

    #[test]
    fn test_status_line_for_empty_list() {
        let items: Vec<usize> = Vec::new();
        let view = paginate(&items, 1, 10);

        assert_eq!(status_line(&view, 0, 1), "No products found.");
    }

    #[test]
    fn test_controls_window_in_the_middle_has_both_edges_and_gaps() {
        use PageControl::{Ellipsis, Page};

        let controls = page_controls(5, 10);
        assert_eq!(
            controls,
            vec![
                Page(1),
                Ellipsis,
                Page(3),
                Page(4),
                Page(5),
                Page(6),
                Page(7),
                Ellipsis,
                Page(10),
            ]
        );
    }

    #[test]
    fn test_controls_window_adjacent_to_edge_has_no_ellipsis() {
        use PageControl::Page;

        // Window 1..=5 touches the left edge; page 6 is adjacent on the
        // right, so no gap marker appears on either side
        let controls = page_controls(3, 6);
        assert_eq!(
            controls,
            vec![Page(1), Page(2), Page(3), Page(4), Page(5), Page(6)]
        );
    }

    #[test]
    fn test_controls_window_clamps_at_the_ends() {
        use PageControl::{Ellipsis, Page};

        // Current page 1: window is pushed right to stay 5 wide
        let controls = page_controls(1, 10);
        assert_eq!(
            controls,
            vec![
                Page(1),
                Page(2),
                Page(3),
                Page(4),
                Page(5),
                Ellipsis,
                Page(10),
            ]
        );

        // Current page 10: window is pushed left
        let controls = page_controls(10, 10);
        assert_eq!(
            controls,
            vec![
                Page(1),
                Ellipsis,
                Page(6),
                Page(7),
                Page(8),
                Page(9),
                Page(10),
            ]
        );
    }

    #[test]
    fn test_controls_fewer_pages_than_window() {
        use PageControl::Page;

        assert_eq!(page_controls(1, 1), vec![Page(1)]);
        assert_eq!(page_controls(2, 3), vec![Page(1), Page(2), Page(3)]);
        assert!(page_controls(1, 0).is_empty());
    }
}
