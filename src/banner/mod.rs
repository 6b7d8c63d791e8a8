// SPDX-License-Identifier: MPL-2.0
//! Slide-in banner notification overlay.
//!
//! A single transient banner carrying an optional icon, title, and
//! message: it slides in from the top of the window, stays for a
//! configurable display time, and slides out: automatically, on request,
//! or deferred while the user is holding it.
//!
//! # Components
//!
//! - [`content`] - `Content` value for one presentation
//! - [`controller`] - the lifecycle state machine (`show`/`hide`/`handle`)
//! - [`timer`] - auto-dismiss policy and the cancelable countdown
//! - [`gesture`] - drag-hold flag gating the countdown and the dismissal
//! - [`slide`] - entrance/exit transition offsets
//! - [`layout`] - banner/icon/title/message geometry
//! - [`style`] - fonts and colors
//! - [`widget`] - Iced widget rendering the controller state
//!
//! # Usage
//!
//! ```ignore
//! use iced_banner::banner::{Banner, Content, Controller};
//!
//! // The composition root owns the one controller.
//! let mut banner = Controller::new();
//!
//! // Present; execute the returned effect as a scheduled task.
//! let effect = banner.show(Content::new().with_title("Saved"));
//!
//! // In your view function, stack the banner above everything else.
//! if let Some(overlay) = Banner::view(&banner, std::time::Instant::now()) {
//!     // push onto the view stack
//! }
//! ```
//!
//! # Design Considerations
//!
//! - At most one banner is visible at a time; a new show interrupts and
//!   replaces whatever is in flight.
//! - Show always wins; hide defers to drags and running transitions.
//! - Effects carry an epoch or generation tag, so a superseded scheduled
//!   task is recognized as stale no matter when it completes.

mod content;
mod controller;
mod gesture;
mod layout;
mod slide;
mod style;
mod timer;
mod widget;

pub use content::Content;
pub use controller::{Controller, Effect, Message as BannerMessage, OnHidden, Phase};
pub use gesture::GestureState;
pub use layout::{Frames, BANNER_HEIGHT, MAX_MESSAGE_HEIGHT};
pub use slide::{Direction, Slide, ANIMATION};
pub use style::Style;
pub use timer::{AutoDismiss, DismissTimer, Generation};
pub use widget::Banner;
