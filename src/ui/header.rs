/// Dashboard header: title, feed freshness and the "Add Target" button
use chrono::NaiveDate;
use iced::widget::{button, column, horizontal_space, row, text};
use iced::{Alignment, Color, Element};

use crate::app::Message;
use crate::state::Dataset;

pub fn view<'a>(dataset: &'a Dataset, today: NaiveDate) -> Element<'a, Message> {
    let feed = format!(
        "● LIVE FEED • {}{}",
        dataset.last_updated,
        freshness_label(dataset.age_in_days(today))
    );

    let title = column![
        text("Orbital Command").size(32),
        text(feed).size(14).color(Color::from_rgb8(0x9c, 0xa3, 0xaf)),
    ]
    .spacing(4);

    let add = button(text("+ Add Target").size(14))
        .on_press(Message::OpenDialog)
        .padding([8, 16])
        .style(button::success);

    row![title, horizontal_space(), add]
        .align_y(Alignment::Center)
        .into()
}

/// Relative age suffix for the feed line; empty when the age is unknown
pub fn freshness_label(age_in_days: Option<i64>) -> String {
    match age_in_days {
        Some(0) => " (today)".to_string(),
        Some(1) => " (1 day ago)".to_string(),
        Some(days) if days > 1 => format!(" ({} days ago)", days),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_freshness_label() {
        assert_eq!(freshness_label(Some(0)), " (today)");
        assert_eq!(freshness_label(Some(1)), " (1 day ago)");
        assert_eq!(freshness_label(Some(12)), " (12 days ago)");
        // clock skew or unparseable dates show nothing
        assert_eq!(freshness_label(Some(-2)), "");
        assert_eq!(freshness_label(None), "");
    }
}
