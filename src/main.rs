use iced::widget::{column, container, scrollable, stack, text};
use iced::{mouse, window, Element, Event, Length, Point, Size, Subscription, Task, Theme};

mod fetch;
mod paginate;
mod query;
mod state;
mod tooltip;
mod ui;

use fetch::FetchError;
use state::data::{Product, SortColumn};
use state::view::ViewState;
use tooltip::TooltipController;

/// Initial window size; also the viewport the tooltip is clamped to
/// until the first resize event arrives
const WINDOW_SIZE: Size = Size::new(1100.0, 760.0);

/// Main application state
struct Dashboard {
    /// The product list and everything derived from it
    view_state: ViewState,
    /// Hover tooltip state and placement
    tooltip: TooltipController,
    /// Current window size, tracked from resize events
    viewport: Size,
    /// True while a fetch is in flight; at most one fetch runs at a time
    loading: bool,
    /// The last fetch failure, shown instead of the table
    error: Option<String>,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// The startup (or reload) fetch finished
    ProductsFetched(Result<Vec<Product>, FetchError>),
    /// User clicked the Reload button
    Reload,
    /// User typed in the search box
    SearchChanged(String),
    /// User clicked a sortable column header
    SortBy(SortColumn),
    /// User picked a rows-per-page value
    PageSizeSelected(usize),
    /// User clicked a pagination button (prev/next/specific page)
    GoToPage(usize),
    /// Pointer entered a table row
    RowEntered(i64),
    /// Pointer left the hovered row
    RowExited,
    /// Pointer moved anywhere in the window (window coordinates)
    PointerMoved(Point),
    /// The window was resized
    ViewportResized(Size),
}

impl Dashboard {
    /// Create the application and kick off the one startup fetch
    fn new() -> (Self, Task<Message>) {
        println!("🛒 Product dashboard starting, fetching {}", fetch::API_URL);

        let dashboard = Dashboard {
            view_state: ViewState::new(),
            tooltip: TooltipController::new(),
            viewport: WINDOW_SIZE,
            loading: true,
            error: None,
        };

        (
            dashboard,
            Task::perform(fetch::fetch_products(), Message::ProductsFetched),
        )
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProductsFetched(Ok(products)) => {
                println!("✅ Loaded {} products", products.len());
                self.loading = false;
                self.error = None;
                // Wholesale replacement; never patched incrementally
                self.view_state.set_products(products);
            }
            Message::ProductsFetched(Err(error)) => {
                eprintln!("⚠️  Failed to load products: {error}");
                self.loading = false;
                self.error = Some(error.to_string());
            }
            Message::Reload => {
                // The button is disabled while loading, so this also
                // keeps fetches serialized
                if !self.loading {
                    self.loading = true;
                    self.error = None;
                    return Task::perform(fetch::fetch_products(), Message::ProductsFetched);
                }
            }
            Message::SearchChanged(term) => {
                self.view_state.set_search_term(term);
                self.tooltip.pointer_leave();
            }
            Message::SortBy(column) => {
                self.view_state.set_sort(column);
                self.tooltip.pointer_leave();
            }
            Message::PageSizeSelected(size) => {
                self.view_state.set_page_size(size);
                self.tooltip.pointer_leave();
            }
            Message::GoToPage(page) => {
                self.view_state.go_to_page(page);
                self.tooltip.pointer_leave();
            }
            Message::RowEntered(row_id) => {
                let description = self
                    .view_state
                    .product(row_id)
                    .and_then(|product| product.description.as_deref());
                self.tooltip.pointer_enter(row_id, description);
            }
            Message::RowExited => {
                self.tooltip.pointer_leave();
            }
            Message::PointerMoved(position) => {
                self.tooltip.pointer_move(position);
            }
            Message::ViewportResized(size) => {
                self.viewport = size;
            }
        }

        Task::none()
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let heading = text("Product Dashboard").size(32);

        let body: Element<'_, Message> = if self.loading {
            text("Loading products...").size(16).into()
        } else if let Some(error) = &self.error {
            text(format!("Failed to load products: {error}"))
                .size(16)
                .into()
        } else {
            let mut content = column![
                ui::controls::toolbar(&self.view_state, self.loading),
                scrollable(ui::table::view(&self.view_state)).height(Length::Fill),
                ui::controls::status(&self.view_state),
            ]
            .spacing(12);

            // No strip when everything fits on one page
            if self.view_state.total_pages() > 1 {
                content = content.push(ui::controls::pagination(&self.view_state));
            }

            content.into()
        };

        let base: Element<'_, Message> = container(
            column![heading, body].spacing(16).padding(24),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into();

        match self.tooltip_description() {
            Some(description) => {
                let at = self.tooltip.placement(tooltip::TOOLTIP_SIZE, self.viewport);
                stack([base, ui::tooltip_overlay(description, at)]).into()
            }
            None => base,
        }
    }

    /// The hovered row's description, while the tooltip is visible
    fn tooltip_description(&self) -> Option<&str> {
        let row_id = self.tooltip.visible_row()?;
        self.view_state.product(row_id)?.description.as_deref()
    }

    /// Global events the widgets can't see: the window-relative pointer
    /// position for tooltip placement, and window resizes for clamping
    fn subscription(&self) -> Subscription<Message> {
        iced::event::listen_with(|event, _status, _window| match event {
            Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Message::PointerMoved(position))
            }
            Event::Window(window::Event::Resized(size)) => {
                Some(Message::ViewportResized(size))
            }
            _ => None,
        })
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    iced::application(
        "Product Dashboard",
        Dashboard::update,
        Dashboard::view,
    )
    .subscription(Dashboard::subscription)
    .theme(Dashboard::theme)
    .window_size(WINDOW_SIZE)
    .centered()
    .run_with(Dashboard::new)
}
