/// "Request New Satellite Target" dialog and the overlay that hosts it
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, stack, text, text_input,
};
use iced::{Border, Color, Element, Length, Theme};

use crate::app::Message;
use crate::state::{DraftField, TargetDraft};

/// Dialog body for the current draft
pub fn dialog<'a>(draft: &'a TargetDraft, error: Option<&'a str>) -> Element<'a, Message> {
    let name = labeled(
        "TARGET NAME",
        text_input("e.g. Area 51", &draft.name)
            .on_input(|value| Message::DraftChanged(DraftField::Name, value))
            .padding(8),
    );
    let lat = labeled(
        "LATITUDE",
        text_input("37.23", &draft.lat)
            .on_input(|value| Message::DraftChanged(DraftField::Lat, value))
            .padding(8),
    );
    let lon = labeled(
        "LONGITUDE",
        text_input("-115.80", &draft.lon)
            .on_input(|value| Message::DraftChanged(DraftField::Lon, value))
            .on_submit(Message::SubmitDraft)
            .padding(8),
    );

    let mut content = column![
        text("Request New Satellite Target").size(20),
        name,
        row![lat, lon].spacing(16),
    ]
    .spacing(16);

    if let Some(error) = error {
        content = content.push(
            text(error)
                .size(13)
                .color(Color::from_rgb8(0xf8, 0x71, 0x71)),
        );
    }

    content = content
        .push(
            button(text("Initialize Request"))
                .on_press(Message::SubmitDraft)
                .width(Length::Fill)
                .padding(12)
                .style(button::success),
        )
        .push(
            button(text("Cancel").size(14))
                .on_press(Message::CloseDialog)
                .width(Length::Fill)
                .style(button::text),
        );

    container(content)
        .width(Length::Fixed(420.0))
        .padding(24)
        .style(|_theme: &Theme| container::Style {
            background: Some(Color::from_rgb8(0x11, 0x18, 0x27).into()),
            border: Border {
                color: Color::from_rgb8(0x37, 0x41, 0x51),
                width: 1.0,
                radius: 12.0.into(),
            },
            ..container::Style::default()
        })
        .into()
}

/// Stack `content` over a dimmed `base`; clicking the backdrop sends `on_blur`
pub fn overlay<'a>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_blur: Message,
) -> Element<'a, Message> {
    stack![
        base.into(),
        opaque(
            mouse_area(center(opaque(content)).style(|_theme: &Theme| {
                container::Style {
                    background: Some(Color { a: 0.8, ..Color::BLACK }.into()),
                    ..container::Style::default()
                }
            }))
            .on_press(on_blur)
        )
    ]
    .into()
}

fn labeled<'a>(label: &'a str, input: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    column![
        text(label).size(11).color(Color::from_rgb8(0x9c, 0xa3, 0xaf)),
        input.into(),
    ]
    .spacing(4)
    .width(Length::Fill)
    .into()
}
