// SPDX-License-Identifier: MPL-2.0
//! Banner geometry.
//!
//! [`Frames`] holds the rectangles for one geometry pass. It is recomputed
//! whenever the window width or the content changes, carries no lifecycle
//! state, and is just as valid while the banner sits off-screen during an
//! entrance transition.

use iced::Rectangle;

/// Fixed banner height.
pub const BANNER_HEIGHT: f32 = 64.0;

/// Height ceiling for the message region; taller text is clipped.
pub const MAX_MESSAGE_HEIGHT: f32 = 35.0;

/// Height of one wrapped message line.
const MESSAGE_LINE_HEIGHT: f32 = 17.5;

/// Icon cell, fixed regardless of window width.
const ICON_FRAME: Rectangle = Rectangle {
    x: 15.0,
    y: 8.0,
    width: 20.0,
    height: 20.0,
};

/// Left text margin without an icon.
const TEXT_MARGIN: f32 = 5.0;

/// Left text margin clearing the icon cell.
const TEXT_MARGIN_WITH_ICON: f32 = 45.0;

/// Title row offset and height.
const TITLE_Y: f32 = 3.0;
const TITLE_HEIGHT: f32 = 26.0;

/// Message region offset.
const MESSAGE_Y: f32 = 25.0;

/// Computed rectangles for one geometry pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frames {
    /// The banner itself, spanning the full window width.
    pub banner: Rectangle,
    /// The icon cell, present only when the content carries an icon.
    pub icon: Option<Rectangle>,
    /// The single-line title row.
    pub title: Rectangle,
    /// The message region, clamped to [`MAX_MESSAGE_HEIGHT`].
    pub message: Rectangle,
}

impl Frames {
    /// Recomputes all frames for the given window width.
    ///
    /// The banner width is always forced to the window width. Without an
    /// icon, title and message take the full left margin; with one they
    /// shift right to clear the icon cell. The message height follows the
    /// measured text height but never exceeds [`MAX_MESSAGE_HEIGHT`];
    /// overflow is clipped, not scrolled.
    #[must_use]
    pub fn compute(screen_width: f32, has_icon: bool, measured_message_height: f32) -> Self {
        let margin = if has_icon {
            TEXT_MARGIN_WITH_ICON
        } else {
            TEXT_MARGIN
        };

        Self {
            banner: Rectangle {
                x: 0.0,
                y: 0.0,
                width: screen_width,
                height: BANNER_HEIGHT,
            },
            icon: has_icon.then_some(ICON_FRAME),
            title: Rectangle {
                x: margin,
                y: TITLE_Y,
                width: screen_width - margin,
                height: TITLE_HEIGHT,
            },
            message: Rectangle {
                x: margin,
                y: MESSAGE_Y,
                width: screen_width - margin,
                height: measured_message_height.min(MAX_MESSAGE_HEIGHT),
            },
        }
    }
}

/// Natural height of the message text, before clamping.
#[must_use]
pub fn natural_message_height(message: &str) -> f32 {
    message.lines().count() as f32 * MESSAGE_LINE_HEIGHT
}

const _: () = {
    assert!(TEXT_MARGIN_WITH_ICON > TEXT_MARGIN);
    assert!(MESSAGE_Y > TITLE_Y);
    // The clamped message region must fit inside the banner.
    assert!(MESSAGE_Y + MAX_MESSAGE_HEIGHT <= BANNER_HEIGHT);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_spans_the_window_width() {
        let frames = Frames::compute(375.0, false, 0.0);
        assert_eq!(frames.banner.width, 375.0);
        assert_eq!(frames.banner.height, BANNER_HEIGHT);
    }

    #[test]
    fn text_takes_the_full_margin_without_an_icon() {
        let frames = Frames::compute(375.0, false, 17.5);
        assert!(frames.icon.is_none());
        assert_eq!(frames.title.x, 5.0);
        assert_eq!(frames.message.x, 5.0);
        assert_eq!(frames.title.width, 370.0);
    }

    #[test]
    fn text_clears_the_icon_cell_when_present() {
        let frames = Frames::compute(375.0, true, 17.5);
        let icon = frames.icon.expect("icon frame");
        assert_eq!(icon.x, 15.0);
        assert_eq!(frames.title.x, 45.0);
        assert!(frames.title.x >= icon.x + icon.width);
    }

    #[test]
    fn message_height_follows_the_measurement() {
        let frames = Frames::compute(375.0, false, 17.5);
        assert_eq!(frames.message.height, 17.5);
    }

    #[test]
    fn message_height_is_clamped() {
        let frames = Frames::compute(375.0, false, 90.0);
        assert_eq!(frames.message.height, MAX_MESSAGE_HEIGHT);
    }

    #[test]
    fn natural_height_counts_lines() {
        assert_eq!(natural_message_height(""), 0.0);
        assert_eq!(natural_message_height("one line"), 17.5);
        assert_eq!(natural_message_height("a\nb\nc"), 52.5);
    }

    #[test]
    fn recompute_tracks_a_width_change() {
        let portrait = Frames::compute(375.0, true, 17.5);
        let landscape = Frames::compute(812.0, true, 17.5);
        assert_eq!(landscape.banner.width, 812.0);
        assert_eq!(landscape.title.width, 812.0 - 45.0);
        assert_eq!(portrait.icon, landscape.icon);
    }
}
