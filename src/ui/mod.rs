/// UI building blocks for the dashboard
///
/// The presenter side of the app: widgets that bind the view state to
/// the screen. Everything here is rendering glue; the logic it draws
/// from lives in the state, query, paginate, and tooltip modules.

use iced::widget::{column, container, text};
use iced::{Element, Length, Padding, Point};

use crate::tooltip::TOOLTIP_SIZE;
use crate::Message;

pub mod controls;
pub mod table;

/// Make API text safe for a single table cell.
///
/// iced text widgets render their content literally, so there is no
/// markup to escape; the native hazard is layout-breaking characters.
/// Control characters and newlines are collapsed into single spaces,
/// and surrounding whitespace is dropped.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// The tooltip panel, placed at `at` (window coordinates) inside a
/// window-filling overlay layer
pub fn tooltip_overlay<'a>(description: &str, at: Point) -> Element<'a, Message> {
    let panel = container(
        column![
            text("Description").size(14),
            text(sanitize(description)).size(13),
        ]
        .spacing(6),
    )
    .padding(10)
    .width(TOOLTIP_SIZE.width)
    .height(TOOLTIP_SIZE.height)
    .style(container::rounded_box);

    // The overlay fills the window; padding pushes the panel's top-left
    // corner to the computed placement
    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(Padding {
            top: at.y.max(0.0),
            left: at.x.max(0.0),
            right: 0.0,
            bottom: 0.0,
        })
        .into()
}
