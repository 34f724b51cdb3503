//! Dismissable error banner for failed page loads.

use iced::widget::{button, container, horizontal_space, row, text};
use iced::{Alignment, Element, Length};

use crate::app::Message;

pub fn view(message: &str) -> Element<'_, Message> {
    let content = row![
        text("Error").style(text::danger),
        text(message),
        horizontal_space(),
        button(text("Dismiss").size(14))
            .on_press(Message::DismissNotice)
            .style(button::text),
    ]
    .spacing(12)
    .align_y(Alignment::Center);

    container(content)
        .padding(12)
        .width(Length::Fill)
        .style(container::rounded_box)
        .into()
}
