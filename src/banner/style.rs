// SPDX-License-Identifier: MPL-2.0
//! Visual styling for the banner.

use iced::font::Weight;
use iced::{Color, Font};

/// Title text size.
pub const TITLE_SIZE: f32 = 14.0;

/// Message text size.
pub const MESSAGE_SIZE: f32 = 13.0;

/// Fonts and colors applied to the banner.
///
/// Controller setters replace individual fields; the widget reads the
/// style on every view pass, so a change is visible immediately, including
/// on a banner that is already on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Font for the single-line title.
    pub title_font: Font,
    /// Color for the title.
    pub title_color: Color,
    /// Font for the message body.
    pub message_font: Font,
    /// Color for the message body.
    pub message_color: Color,
    /// Banner background.
    pub background: Color,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            title_font: Font {
                weight: Weight::Bold,
                ..Font::DEFAULT
            },
            title_color: Color::WHITE,
            message_font: Font::DEFAULT,
            message_color: Color::WHITE,
            background: Color::from_rgba(0.0, 0.0, 0.0, 0.92),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_title_is_bold() {
        let style = Style::default();
        assert_eq!(style.title_font.weight, Weight::Bold);
        assert_eq!(style.message_font, Font::DEFAULT);
    }

    #[test]
    fn default_text_is_white_on_a_dark_background() {
        let style = Style::default();
        assert_eq!(style.title_color, Color::WHITE);
        assert_eq!(style.message_color, Color::WHITE);
        assert!(style.background.a > 0.5);
    }
}
