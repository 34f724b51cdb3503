//! Artwork table with a select-all header and a paginator.

use std::collections::HashSet;

use iced::widget::{button, checkbox, column, container, horizontal_space, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

use crate::app::{Message, TableEvent};
use crate::state::data::{Artwork, ArtworkId};
use crate::state::page::PageState;
use crate::state::selection::Selection;

/// Column headers and their relative widths
const COLUMNS: [(&str, u16); 6] = [
    ("Title", 5),
    ("Origin", 3),
    ("Artist", 4),
    ("Inscriptions", 4),
    ("Date Start", 2),
    ("Date End", 2),
];

const CHECKBOX_WIDTH: f32 = 32.0;

pub fn view<'a>(
    visible: &'a [Artwork],
    selection: &Selection,
    pages: &'a PageState,
) -> Element<'a, Message> {
    let loading = pages.is_loading();

    let mut body = Column::new().spacing(2);
    if visible.is_empty() && !loading {
        body = body.push(
            container(text("No artworks found"))
                .padding(16)
                .center_x(Length::Fill),
        );
    }
    for artwork in visible {
        body = body.push(artwork_row(artwork, selection.contains(artwork.id), loading));
    }

    let status: Element<'a, Message> = if loading {
        text("Loading…").into()
    } else {
        text(pages.report()).size(14).into()
    };

    column![
        header_row(visible, selection.covers(visible), loading),
        scrollable(body).height(Length::Fill),
        row![paginator(pages, loading), horizontal_space(), status]
            .align_y(Alignment::Center)
            .spacing(12),
    ]
    .spacing(8)
    .into()
}

fn header_row<'a>(visible: &'a [Artwork], all_checked: bool, loading: bool) -> Element<'a, Message> {
    let ids: Vec<ArtworkId> = visible.iter().map(|a| a.id).collect();
    let on_toggle = (!loading && !ids.is_empty()).then_some(move |checked: bool| {
        let checked_ids: HashSet<ArtworkId> = if checked {
            ids.iter().copied().collect()
        } else {
            HashSet::new()
        };
        Message::Table(TableEvent::Selection {
            visible_ids: ids.clone(),
            checked_ids,
        })
    });

    let select_all = container(checkbox("", all_checked).on_toggle_maybe(on_toggle))
        .width(Length::Fixed(CHECKBOX_WIDTH));

    let mut header = Row::new().push(select_all).spacing(8);
    for (title, portion) in COLUMNS {
        header = header.push(text(title).size(14).width(Length::FillPortion(portion)));
    }

    container(header.align_y(Alignment::Center))
        .padding(8)
        .style(container::rounded_box)
        .into()
}

fn artwork_row(artwork: &Artwork, checked: bool, loading: bool) -> Element<'_, Message> {
    let id = artwork.id;
    let toggle = checkbox("", checked)
        .on_toggle_maybe((!loading).then_some(move |checked| Message::RowToggled { id, checked }));

    let cells = [
        artwork.display_title().to_string(),
        artwork.display_origin().to_string(),
        artwork.display_artist().to_string(),
        artwork.display_inscriptions().to_string(),
        artwork.display_date_start(),
        artwork.display_date_end(),
    ];

    let mut line = Row::new()
        .push(container(toggle).width(Length::Fixed(CHECKBOX_WIDTH)))
        .spacing(8);
    for (value, (_, portion)) in cells.into_iter().zip(COLUMNS) {
        line = line.push(text(value).size(14).width(Length::FillPortion(portion)));
    }

    container(line.align_y(Alignment::Center)).padding([6, 8]).into()
}

fn paginator(pages: &PageState, loading: bool) -> Element<'_, Message> {
    let current = pages.current_page();
    let last = pages.total_pages();

    let nav = |label: &'static str, target: u32, enabled: bool| {
        button(text(label).size(14))
            .on_press_maybe(
                (enabled && !loading).then_some(Message::Table(TableEvent::Page { page: target })),
            )
            .style(button::text)
    };

    let mut links = Row::new()
        .push(nav("«", 1, current > 1))
        .push(nav("‹", current.saturating_sub(1), current > 1))
        .spacing(4)
        .align_y(Alignment::Center);

    for page in pages.page_window() {
        let link = button(text(page.to_string()).size(14))
            .on_press_maybe(
                (!loading && page != current).then_some(Message::Table(TableEvent::Page { page })),
            )
            .style(if page == current {
                button::primary
            } else {
                button::secondary
            });
        links = links.push(link);
    }

    links
        .push(nav("›", current + 1, current < last))
        .push(nav("»", last, current < last))
        .into()
}
