/// Input controls: search box, page-size picker, reload button,
/// pagination strip, and the status line

use iced::widget::{button, pick_list, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::paginate::{self, PageControl};
use crate::state::view::{ViewState, PAGE_SIZES};
use crate::Message;

/// The toolbar above the table: search input, rows-per-page picker,
/// and the reload button (disabled while a fetch is in flight)
pub fn toolbar(state: &ViewState, loading: bool) -> Element<'_, Message> {
    row![
        text_input("Search by title...", state.search_term())
            .on_input(Message::SearchChanged)
            .width(Length::Fixed(280.0)),
        text("Rows per page:").size(14),
        pick_list(
            &PAGE_SIZES[..],
            Some(state.items_per_page()),
            Message::PageSizeSelected
        ),
        button(text("Reload").size(14))
            .on_press_maybe((!loading).then_some(Message::Reload)),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// The visible item range and page position, or the no-items message
pub fn status(state: &ViewState) -> Element<'_, Message> {
    let line = paginate::status_line(
        &state.page(),
        state.derived().len(),
        state.current_page(),
    );
    text(line).size(14).into()
}

/// Prev / numbered pages / Next. The caller hides the whole strip when
/// there is at most one page.
pub fn pagination(state: &ViewState) -> Element<'_, Message> {
    let current = state.current_page();
    let total = state.total_pages();

    let mut strip = row![].spacing(6).align_y(Alignment::Center);

    strip = strip.push(
        button(text("← Prev").size(14))
            .on_press_maybe((current > 1).then_some(Message::GoToPage(current - 1))),
    );

    for control in paginate::page_controls(current, total) {
        strip = match control {
            PageControl::Page(page) if page == current => {
                // The current page is shown but not clickable
                strip.push(button(text(page.to_string()).size(14)))
            }
            PageControl::Page(page) => strip.push(
                button(text(page.to_string()).size(14))
                    .on_press(Message::GoToPage(page)),
            ),
            PageControl::Ellipsis => strip.push(text("...").size(14)),
        };
    }

    strip = strip.push(
        button(text("Next →").size(14))
            .on_press_maybe((current < total).then_some(Message::GoToPage(current + 1))),
    );

    strip.into()
}
