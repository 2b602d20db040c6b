/// Full-screen placeholders shown while the dataset isn't ready
use iced::widget::{button, center, column, text};
use iced::{Alignment, Color, Element, Font};

use crate::app::Message;
use crate::error::LoadFailure;

pub fn loading<'a>() -> Element<'a, Message> {
    center(
        text("INITIALIZING SATELLITE UPLINK...")
            .font(Font::MONOSPACE)
            .color(Color::from_rgb8(0x22, 0xc5, 0x5e)),
    )
    .into()
}

/// Failure screen with a manual retry
pub fn failed<'a>(failure: &LoadFailure) -> Element<'a, Message> {
    let content = column![
        text("UPLINK FAILED")
            .size(24)
            .font(Font::MONOSPACE)
            .color(Color::from_rgb8(0xef, 0x44, 0x44)),
        text(failure.to_string())
            .size(14)
            .color(Color::from_rgb8(0x9c, 0xa3, 0xaf)),
        button(text("Retry uplink"))
            .on_press(Message::RetryLoad)
            .padding([8, 16]),
    ]
    .spacing(16)
    .align_x(Alignment::Center);

    center(content).into()
}
