/// Target card: image for the current mode, badge, name, coordinates and
/// the optical/thermal toggle
use iced::widget::image::Handle;
use iced::widget::{button, column, container, text, Image, Space};
use iced::{Border, Color, ContentFit, Element, Font, Length, Theme};

use crate::app::Message;
use crate::state::Location;
use crate::uplink::ImageSlot;

const CARD_WIDTH: f32 = 340.0;
const IMAGE_HEIGHT: f32 = 240.0;

/// Labels that change with the card's mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardMode {
    pub badge: &'static str,
    pub action: &'static str,
}

impl CardMode {
    pub fn for_flag(thermal: bool) -> Self {
        if thermal {
            CardMode {
                badge: "THERMAL // ANOMALY SCAN",
                action: "👁 Return to Optical",
            }
        } else {
            CardMode {
                badge: "OPTICAL // RGB",
                action: "🔥 Analyze Sector",
            }
        }
    }
}

/// Build the card for one location
pub fn view<'a>(location: &'a Location, thermal: bool, slot: Option<&ImageSlot>) -> Element<'a, Message> {
    let mode = CardMode::for_flag(thermal);

    let picture: Element<'a, Message> = match slot {
        Some(ImageSlot::Ready(handle)) => Image::<Handle>::new(handle.clone())
            .width(Length::Fill)
            .height(Length::Fixed(IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(ImageSlot::Missing) => placeholder("NO SIGNAL"),
        _ => placeholder("ACQUIRING..."),
    };

    let badge_color = if thermal {
        Color::from_rgb8(0xfe, 0xca, 0xca)
    } else {
        Color::WHITE
    };

    let mut details = column![
        text(mode.badge).size(10).font(Font::MONOSPACE).color(badge_color),
        text(&location.name).size(20),
        text(format!("📍 {}", location.coordinates))
            .size(12)
            .font(Font::MONOSPACE)
            .color(Color::from_rgb8(0x9c, 0xa3, 0xaf)),
    ]
    .spacing(6);

    if let Some(status) = &location.status {
        details = details.push(
            text(status)
                .size(12)
                .color(Color::from_rgb8(0x22, 0xc5, 0x5e)),
        );
    }

    let toggle = button(text(mode.action).size(14))
        .on_press(Message::ToggleView(location.id.clone()))
        .width(Length::Fill)
        .padding(10)
        .style(if thermal { button::danger } else { button::secondary });

    let body = column![picture, details, Space::with_height(Length::Fixed(4.0)), toggle]
        .spacing(12)
        .padding(16);

    container(body)
        .width(Length::Fixed(CARD_WIDTH))
        .style(move |_theme: &Theme| card_style(thermal))
        .into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    container(
        text(label)
            .font(Font::MONOSPACE)
            .color(Color::from_rgb8(0x4b, 0x55, 0x63)),
    )
    .width(Length::Fill)
    .height(Length::Fixed(IMAGE_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(IMAGE_HEIGHT))
    .style(|_theme: &Theme| container::Style {
        background: Some(Color::BLACK.into()),
        ..container::Style::default()
    })
    .into()
}

fn card_style(thermal: bool) -> container::Style {
    let border_color = if thermal {
        Color::from_rgb8(0xef, 0x44, 0x44)
    } else {
        Color::from_rgb8(0x1f, 0x29, 0x37)
    };

    container::Style {
        background: Some(Color::from_rgb8(0x11, 0x18, 0x27).into()),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optical_labels() {
        let mode = CardMode::for_flag(false);
        assert_eq!(mode.badge, "OPTICAL // RGB");
        assert!(mode.action.contains("Analyze Sector"));
    }

    #[test]
    fn test_thermal_labels() {
        let mode = CardMode::for_flag(true);
        assert_eq!(mode.badge, "THERMAL // ANOMALY SCAN");
        assert!(mode.action.contains("Return to Optical"));
    }
}
