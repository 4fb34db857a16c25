/// The dashboard's view state
///
/// ViewState owns the full product list plus everything derived from it:
/// the filtered-and-sorted list, the search term, the active sort, and
/// the pagination cursor. It is pure data with mutators — no I/O — so
/// the whole pipeline is testable without a rendering surface.
///
/// Every mutator re-runs the pipeline in the same fixed order (filter,
/// then sort, then re-clamp the page), so the derived list, the sort
/// spec, and the page cursor are always mutually consistent: no
/// operation can leave the page pointing past the end of the list.

use crate::paginate;
use crate::query;
use crate::state::data::{Product, SortColumn, SortSpec};

/// The page sizes the page-size picker offers
pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];

/// Default number of rows per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

pub struct ViewState {
    /// The full product list, replaced wholesale on each fetch
    products: Vec<Product>,
    /// filter-then-sort over the full list; recomputed on every mutation
    derived: Vec<Product>,
    /// Current search term, exactly as typed
    search_term: String,
    /// The active sort, if any
    sort: Option<SortSpec>,
    /// Current page, 1-based, always within [1, total_pages] (or 1 when
    /// the derived list is empty)
    current_page: usize,
    /// Rows per page, always > 0
    items_per_page: usize,
}

impl ViewState {
    /// An empty view state: no products, no search, no sort, page 1
    pub fn new() -> Self {
        ViewState {
            products: Vec::new(),
            derived: Vec::new(),
            search_term: String::new(),
            sort: None,
            current_page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }

    /// Replace the full product list.
    ///
    /// Search, sort, and page all reset to their defaults; the page size
    /// the user picked is kept.
    pub fn set_products(&mut self, products: Vec<Product>) {
        self.products = products;
        self.search_term.clear();
        self.sort = None;
        self.current_page = 1;
        self.recompute();
    }

    /// Update the search term and jump back to page 1
    pub fn set_search_term(&mut self, term: String) {
        self.search_term = term;
        self.current_page = 1;
        self.recompute();
    }

    /// Select a sort column.
    ///
    /// Re-selecting the active column toggles its direction; selecting a
    /// different column starts over ascending. The current page is kept
    /// (the derived list does not shrink, only reorders).
    pub fn set_sort(&mut self, column: SortColumn) {
        self.sort = Some(match self.sort {
            Some(spec) if spec.column == column => SortSpec {
                column,
                direction: spec.direction.toggled(),
            },
            _ => SortSpec::ascending(column),
        });
        self.recompute();
    }

    /// Change the page size and jump back to page 1
    pub fn set_page_size(&mut self, items_per_page: usize) {
        debug_assert!(items_per_page > 0);
        self.items_per_page = items_per_page;
        self.current_page = 1;
        self.recompute();
    }

    /// Jump to a specific page. Out-of-range targets are ignored.
    pub fn go_to_page(&mut self, page: usize) {
        if page >= 1 && page <= self.total_pages() {
            self.current_page = page;
        }
    }

    /// Re-run the pipeline: filter, then sort, then clamp the page.
    /// Filter-before-sort is load-bearing — sorting must apply to the
    /// already-filtered set, and re-filtering must reapply the sort.
    fn recompute(&mut self) {
        self.derived = query::filter(&self.products, &self.search_term);
        if let Some(spec) = self.sort {
            query::sort(&mut self.derived, spec);
        }
        self.clamp_page();
    }

    /// Pull the page cursor back into [1, total_pages]; an empty derived
    /// list pins it at 1 (displayed as page 1 of 0)
    fn clamp_page(&mut self) {
        let total = self.total_pages();
        if total == 0 {
            self.current_page = 1;
        } else if self.current_page > total {
            self.current_page = total;
        }
    }

    /// The filtered-and-sorted list the table renders from
    pub fn derived(&self) -> &[Product] {
        &self.derived
    }

    /// The current page of the derived list, with range metadata
    pub fn page(&self) -> paginate::PageView<'_, Product> {
        paginate::paginate(&self.derived, self.current_page, self.items_per_page)
    }

    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    pub fn sort(&self) -> Option<SortSpec> {
        self.sort
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn items_per_page(&self) -> usize {
        self.items_per_page
    }

    pub fn total_pages(&self) -> usize {
        paginate::total_pages(self.derived.len(), self.items_per_page)
    }

    /// Look up a product on the current page by ID (tooltip anchor)
    pub fn product(&self, id: i64) -> Option<&Product> {
        self.derived.iter().find(|product| product.id == id)
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
