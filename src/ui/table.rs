/// The product table: sortable header plus one row per visible product

use iced::widget::{button, column, container, mouse_area, row, text};
use iced::{Alignment, Element, Length};

use super::sanitize;
use crate::state::data::{Product, SortColumn, SortDirection, SortSpec};
use crate::state::view::ViewState;
use crate::Message;

// Fixed column widths; the title column takes the remaining space
const ID_WIDTH: f32 = 70.0;
const PRICE_WIDTH: f32 = 100.0;
const CATEGORY_WIDTH: f32 = 170.0;
const IMAGES_WIDTH: f32 = 110.0;

/// Render the header and the current page of products
pub fn view(state: &ViewState) -> Element<'_, Message> {
    let page = state.page();

    let mut rows = column![header(state.sort())].spacing(2);
    for product in page.items {
        rows = rows.push(product_row(product));
    }

    rows.into()
}

/// The header row: one sort button per sortable column, plus the
/// unsortable images column
fn header<'a>(active: Option<SortSpec>) -> Element<'a, Message> {
    row![
        sort_button("ID", SortColumn::Id, active, Length::Fixed(ID_WIDTH)),
        sort_button("Title", SortColumn::Title, active, Length::Fill),
        sort_button("Price", SortColumn::Price, active, Length::Fixed(PRICE_WIDTH)),
        sort_button(
            "Category",
            SortColumn::Category,
            active,
            Length::Fixed(CATEGORY_WIDTH)
        ),
        text("Images").size(14).width(IMAGES_WIDTH),
    ]
    .spacing(8)
    .align_y(Alignment::Center)
    .into()
}

/// A clickable column header with its sort indicator:
/// ↕ inactive, ↑ ascending, ↓ descending
fn sort_button<'a>(
    label: &str,
    column: SortColumn,
    active: Option<SortSpec>,
    width: Length,
) -> Element<'a, Message> {
    let indicator = match active {
        Some(spec) if spec.column == column => match spec.direction {
            SortDirection::Ascending => "↑",
            SortDirection::Descending => "↓",
        },
        _ => "↕",
    };

    button(text(format!("{label} {indicator}")).size(14))
        .on_press(Message::SortBy(column))
        .width(width)
        .into()
}

/// One table row. Hovering it drives the description tooltip.
fn product_row(product: &Product) -> Element<'_, Message> {
    let category = product
        .category
        .as_ref()
        .map(|category| sanitize(&category.name))
        .unwrap_or_else(|| "N/A".to_string());

    let images = match product.images.len() {
        0 => "No images".to_string(),
        1 => "1 image".to_string(),
        count => format!("{count} images"),
    };

    let cells = row![
        text(product.id.to_string()).size(14).width(ID_WIDTH),
        text(sanitize(&product.title)).size(14).width(Length::Fill),
        text(format!("${:.2}", product.price))
            .size(14)
            .width(PRICE_WIDTH),
        text(category).size(14).width(CATEGORY_WIDTH),
        text(images).size(14).width(IMAGES_WIDTH),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    mouse_area(container(cells).padding(6))
        .on_enter(Message::RowEntered(product.id))
        .on_exit(Message::RowExited)
        .into()
}
