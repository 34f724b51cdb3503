//! Side panel listing every selected artwork across pages.

use iced::widget::{button, column, container, horizontal_space, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

use crate::app::Message;
use crate::state::data::Artwork;
use crate::state::selection::Selection;

const PANEL_HEIGHT: f32 = 256.0;

/// Nothing is shown while the selection is empty.
pub fn view(selection: &Selection) -> Option<Element<'_, Message>> {
    if selection.is_empty() {
        return None;
    }

    let heading = row![
        text(format!("Selected Artworks ({})", selection.len())).size(18),
        horizontal_space(),
        button(text("Clear All").size(14))
            .on_press(Message::ClearSelection)
            .style(button::secondary),
    ]
    .align_y(Alignment::Center);

    let entries = selection
        .iter()
        .fold(Column::new().spacing(6), |list, artwork| list.push(entry(artwork)));

    let panel = column![heading, scrollable(entries).height(Length::Fixed(PANEL_HEIGHT))]
        .spacing(12);

    Some(
        container(panel)
            .padding(16)
            .width(Length::Fill)
            .style(container::rounded_box)
            .into(),
    )
}

fn entry(artwork: &Artwork) -> Element<'_, Message> {
    let label = column![
        text(artwork.display_title()),
        text(artwork.display_artist()).size(12).style(text::secondary),
    ]
    .width(Length::Fill);

    row![
        label,
        button(text("×").size(16))
            .on_press(Message::RemoveSelection(artwork.id))
            .style(button::text),
    ]
    .align_y(Alignment::Center)
    .padding([4, 8])
    .into()
}
