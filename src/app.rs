// SPDX-License-Identifier: MPL-2.0
//! Demo application root.
//!
//! The `App` is the composition root that owns the one banner controller,
//! executes its effects as scheduled tasks, and forwards window resize and
//! pointer events. This file intentionally keeps the policy decisions the
//! lifecycle leaves open (what a release does, where the configured
//! duration comes from) close to the main update loop so they are easy to
//! audit.

use std::time::{Duration, Instant};

use iced::widget::{button, container, mouse_area, text, Column, Stack};
use iced::{time, window, Element, Length, Subscription, Task};
use tracing::warn;

use crate::banner::{
    AutoDismiss, Banner, BannerMessage, Content, Controller, Effect, ANIMATION,
};
use crate::config::{self, Config, DEFAULT_DURATION_SECS};

/// Interval between redraw ticks while a transition is running.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Startup options for the demo.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Display time override in seconds; zero or negative disables
    /// auto-dismiss.
    pub duration_secs: Option<f32>,
}

/// Top-level messages consumed by [`App::update`]. The variants forward
/// lower-level banner messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    /// Present a fresh notification.
    ShowPressed,
    /// Request dismissal of the current notification.
    HidePressed,
    /// The user pressed the banner.
    BannerHeld,
    /// The user released the banner.
    BannerReleased,
    /// Forwarded banner lifecycle message.
    Banner(BannerMessage),
    /// Redraw tick while a transition is running.
    Tick,
}

/// Demo application state.
#[derive(Debug)]
pub struct App {
    banner: Controller,
    shown: usize,
}

impl App {
    /// Builds the app, restoring the configured display time.
    pub fn new(flags: &Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            warn!(%err, "falling back to the default configuration");
            Config::default()
        });
        let duration_secs = flags
            .duration_secs
            .or(config.duration_secs)
            .unwrap_or(DEFAULT_DURATION_SECS);

        let mut banner = Controller::new();
        banner.set_duration(AutoDismiss::from_secs(duration_secs));

        (Self { banner, shown: 0 }, Task::none())
    }

    /// Processes a message and schedules any resulting banner effect.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowPressed => {
                self.shown += 1;
                let content = Content::new()
                    .with_title(format!("Notification #{}", self.shown))
                    .with_message("Tap and release to dismiss, or wait it out.");
                Self::run_effect(self.banner.show(content))
            }
            Message::HidePressed => Self::run_effect(self.banner.hide(None)),
            Message::BannerHeld => Self::run_effect(self.banner.handle(BannerMessage::DragStarted)),
            Message::BannerReleased => {
                // Post-release policy lives here, not in the lifecycle:
                // the demo asks a released banner to dismiss explicitly.
                self.banner.handle(BannerMessage::DragEnded);
                Self::run_effect(self.banner.hide(None))
            }
            Message::Banner(inner) => Self::run_effect(self.banner.handle(inner)),
            Message::Tick => Task::none(),
        }
    }

    /// Renders the controls with the banner stacked above them.
    pub fn view(&self) -> Element<'_, Message> {
        let controls = Column::new()
            .spacing(12)
            .push(button(text("Show banner")).on_press(Message::ShowPressed))
            .push(button(text("Hide banner")).on_press(Message::HidePressed))
            .push(text(format!("phase: {:?}", self.banner.phase())));

        let base = container(controls).center(Length::Fill);

        match Banner::view(&self.banner, Instant::now()) {
            Some(overlay) => {
                let overlay = mouse_area(overlay)
                    .on_press(Message::BannerHeld)
                    .on_release(Message::BannerReleased);
                // Pushed last, so the banner sits above all other content
                // exactly while the controller reports itself attached.
                Stack::new().push(base).push(overlay).into()
            }
            None => base.into(),
        }
    }

    /// Window resizes always; redraw ticks only while a transition runs.
    pub fn subscription(&self) -> Subscription<Message> {
        let resizes = window::resize_events()
            .map(|(_id, size)| Message::Banner(BannerMessage::ScreenResized(size)));

        if self.banner.is_animating() {
            let frames = time::every(FRAME_INTERVAL).map(|_| Message::Tick);
            Subscription::batch([resizes, frames])
        } else {
            resizes
        }
    }

    /// Turns a banner effect into the scheduled task that completes it.
    fn run_effect(effect: Effect) -> Task<Message> {
        match effect {
            Effect::None => Task::none(),
            Effect::Present { epoch } => Task::perform(tokio::time::sleep(ANIMATION), move |_| {
                Message::Banner(BannerMessage::EntranceFinished { epoch })
            }),
            Effect::Dismiss { epoch } => Task::perform(tokio::time::sleep(ANIMATION), move |_| {
                Message::Banner(BannerMessage::ExitFinished { epoch })
            }),
            Effect::Schedule { delay, generation } => {
                Task::perform(tokio::time::sleep(delay), move |_| {
                    Message::Banner(BannerMessage::DismissTimerFired { generation })
                })
            }
        }
    }
}
