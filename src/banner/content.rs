// SPDX-License-Identifier: MPL-2.0
//! Banner content value.

use iced::widget::image;

/// Content of one banner presentation.
///
/// Every field is optional; a presentation with neither icon, title, nor
/// message is legal and simply renders an empty banner. The value is
/// immutable once handed to the controller and replaced wholesale by the
/// next show request.
#[derive(Debug, Clone, Default)]
pub struct Content {
    icon: Option<image::Handle>,
    title: Option<String>,
    message: Option<String>,
}

impl Content {
    /// Creates empty content.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an icon image handle.
    #[must_use]
    pub fn with_icon(mut self, icon: image::Handle) -> Self {
        self.icon = Some(icon);
        self
    }

    /// Sets the single-line title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the message body.
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// The icon image handle, if any.
    #[must_use]
    pub fn icon(&self) -> Option<&image::Handle> {
        self.icon.as_ref()
    }

    /// The title text, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// The message text, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether an icon is set.
    #[must_use]
    pub fn has_icon(&self) -> bool {
        self.icon.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_content_has_no_fields() {
        let content = Content::new();
        assert!(content.icon().is_none());
        assert!(content.title().is_none());
        assert!(content.message().is_none());
        assert!(!content.has_icon());
    }

    #[test]
    fn builder_sets_title_and_message() {
        let content = Content::new().with_title("Hi").with_message("World");
        assert_eq!(content.title(), Some("Hi"));
        assert_eq!(content.message(), Some("World"));
        assert!(!content.has_icon());
    }

    #[test]
    fn builder_attaches_an_icon() {
        let content = Content::new().with_icon(image::Handle::from_rgba(1, 1, vec![0, 0, 0, 255]));
        assert!(content.has_icon());
        assert!(content.icon().is_some());
    }
}
