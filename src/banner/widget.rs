// SPDX-License-Identifier: MPL-2.0
//! Banner widget rendering the controller state.
//!
//! Sliding is rendered by clipping: a strip whose height follows the
//! controller's vertical offset reveals the bottom of the banner first,
//! which reads as a slide-in from the top edge of the window.

use std::time::Instant;

use iced::widget::image::Image;
use iced::widget::{container, Column, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Padding, Theme};

use super::controller::Controller;
use super::layout::BANNER_HEIGHT;
use super::style::{MESSAGE_SIZE, TITLE_SIZE};

/// Banner widget configuration.
pub struct Banner;

impl Banner {
    /// Renders the banner for the current controller state.
    ///
    /// Returns `None` while the controller is detached. The caller stacks
    /// the returned element above the rest of its view; that stacking is
    /// the attach/elevation seam of the lifecycle.
    pub fn view<'a, M: 'a>(controller: &'a Controller, now: Instant) -> Option<Element<'a, M>> {
        if !controller.is_attached() {
            return None;
        }

        let content = controller.content();
        let frames = controller.frames();
        let style = *controller.style();

        let title = content.title().map(|title| {
            let color = style.title_color;
            Text::new(title)
                .size(TITLE_SIZE)
                .font(style.title_font)
                .style(move |_theme: &Theme| iced::widget::text::Style { color: Some(color) })
        });

        let message = content.message().map(|message| {
            let color = style.message_color;
            let body = Text::new(message)
                .size(MESSAGE_SIZE)
                .font(style.message_font)
                .style(move |_theme: &Theme| iced::widget::text::Style { color: Some(color) });
            // The message region is capped; overflow is clipped, not scrolled.
            Container::new(body)
                .width(Length::Fill)
                .height(Length::Fixed(frames.message.height))
                .clip(true)
        });

        let mut text_column = Column::new();
        if let Some(title) = title {
            text_column = text_column.push(title);
        }
        if let Some(message) = message {
            text_column = text_column.push(message);
        }

        let body: Element<'a, M> = match (content.icon(), frames.icon) {
            (Some(handle), Some(icon_frame)) => Row::new()
                .align_y(alignment::Vertical::Center)
                .spacing(frames.title.x - (icon_frame.x + icon_frame.width))
                .push(
                    Image::new(handle.clone())
                        .width(icon_frame.width)
                        .height(icon_frame.height),
                )
                .push(text_column)
                .into(),
            _ => text_column.into(),
        };

        let left = frames.icon.map_or(frames.title.x, |icon_frame| icon_frame.x);
        let card = Container::new(body)
            .width(Length::Fill)
            .height(Length::Fixed(BANNER_HEIGHT))
            .padding(Padding {
                top: frames.title.y,
                left,
                ..Padding::ZERO
            })
            .style(move |_theme: &Theme| banner_container_style(style.background));

        // Clip strip: grows from zero to the full banner height as the
        // offset approaches the resting position.
        let visible_height = (BANNER_HEIGHT + controller.offset(now)).max(0.0);
        let strip = Container::new(card)
            .width(Length::Fill)
            .height(Length::Fixed(visible_height))
            .align_y(alignment::Vertical::Bottom)
            .clip(true);

        Some(strip.into())
    }
}

/// Style function for the banner card.
fn banner_container_style(background: Color) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(background)),
        ..container::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banner::Content;

    #[test]
    fn detached_controller_renders_nothing() {
        let controller = Controller::new();
        assert!(Banner::view::<()>(&controller, Instant::now()).is_none());
    }

    #[test]
    fn attached_controller_renders_the_banner() {
        let mut controller = Controller::new();
        controller.show(Content::new().with_title("Hi").with_message("World"));
        assert!(Banner::view::<()>(&controller, Instant::now()).is_some());
    }

    #[test]
    fn banner_style_uses_the_configured_background() {
        let background = Color::from_rgba(0.0, 0.0, 0.0, 0.92);
        let style = banner_container_style(background);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(background))
        );
    }
}
