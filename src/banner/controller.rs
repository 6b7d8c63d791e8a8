// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle state machine.
//!
//! The [`Controller`] owns the current content, the lifecycle phase, the
//! dismiss countdown, and the drag flag. It is a plain synchronous state
//! machine: public operations and completion messages go in, [`Effect`]s
//! come out, and the embedding application executes those effects as
//! scheduled tasks whose completion messages are delivered back on the
//! same event loop. Superseded tasks are recognized by their stale epoch
//! or countdown generation, so out-of-order delivery cannot corrupt the
//! lifecycle.
//!
//! One controller exists per application, owned by the composition root.
//! Attachment to the window is signaled through [`Controller::is_attached`]:
//! the application stacks the banner above the rest of its view exactly
//! while that is true.

use std::fmt;
use std::time::{Duration, Instant};

use iced::{Color, Font, Size};
use tracing::{debug, trace};

use super::content::Content;
use super::gesture::GestureState;
use super::layout::{self, Frames};
use super::slide::Slide;
use super::style::Style;
use super::timer::{AutoDismiss, DismissTimer, Generation};
use crate::config::defaults::DEFAULT_SCREEN_WIDTH;

/// Lifecycle phase of the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Detached from the view stack, nothing in flight.
    #[default]
    Idle,
    /// Attached, entrance transition running.
    Presenting,
    /// Attached at the resting position; the countdown may be armed.
    Visible,
    /// Attached, exit transition running.
    Dismissing,
}

/// Completion callback for one hide request.
pub type OnHidden = Box<dyn FnOnce() + 'static>;

/// Messages delivered back to the controller by the embedder.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// The entrance transition scheduled for `Effect::Present` finished.
    EntranceFinished { epoch: u64 },
    /// The exit transition scheduled for `Effect::Dismiss` finished.
    ExitFinished { epoch: u64 },
    /// The countdown scheduled for `Effect::Schedule` elapsed.
    DismissTimerFired { generation: Generation },
    /// The user pressed the banner.
    DragStarted,
    /// The user released the banner.
    DragEnded,
    /// The window was resized.
    ScreenResized(Size),
}

/// Side effects the embedder must execute.
///
/// `Present` and `Dismiss` ask for the matching completion message after
/// the transition length; `Schedule` asks for a countdown fire after
/// `delay`. The epoch or generation must be echoed back verbatim so the
/// controller can recognize a superseded task.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Run the entrance transition.
    Present { epoch: u64 },
    /// Run the exit transition.
    Dismiss { epoch: u64 },
    /// Start the dismiss countdown.
    Schedule { delay: Duration, generation: Generation },
}

/// The banner lifecycle controller.
pub struct Controller {
    content: Content,
    style: Style,
    duration: AutoDismiss,
    phase: Phase,
    gesture: GestureState,
    timer: DismissTimer,
    slide: Option<Slide>,
    epoch: u64,
    on_hidden: Option<OnHidden>,
    screen_width: f32,
    frames: Frames,
}

impl fmt::Debug for Controller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("phase", &self.phase)
            .field("epoch", &self.epoch)
            .field("dragging", &self.gesture.is_dragging())
            .field("timer_armed", &self.timer.is_armed())
            .field("pending_on_hidden", &self.on_hidden.is_some())
            .finish()
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    /// Creates a detached controller with default styling and duration.
    #[must_use]
    pub fn new() -> Self {
        let screen_width = DEFAULT_SCREEN_WIDTH;
        Self {
            content: Content::new(),
            style: Style::default(),
            duration: AutoDismiss::default(),
            phase: Phase::Idle,
            gesture: GestureState::default(),
            timer: DismissTimer::new(),
            slide: None,
            epoch: 0,
            on_hidden: None,
            screen_width,
            frames: Frames::compute(screen_width, false, 0.0),
        }
    }

    /// Starts a new presentation, replacing whatever is in flight.
    ///
    /// Show always wins: the pending countdown is canceled, the content is
    /// replaced, and the banner is repositioned above the visible area
    /// before the entrance transition starts. A dismiss interrupted here
    /// never completes, so its completion callback is dropped unfired.
    pub fn show(&mut self, content: Content) -> Effect {
        self.timer.cancel();
        self.on_hidden = None;
        self.content = content;
        self.relayout();
        self.phase = Phase::Presenting;
        self.epoch = self.epoch.wrapping_add(1);
        self.slide = Some(Slide::entrance(Instant::now(), layout::BANNER_HEIGHT));
        debug!(epoch = self.epoch, "banner presenting");
        Effect::Present { epoch: self.epoch }
    }

    /// Requests dismissal of the attached banner.
    ///
    /// The polite counterpart to [`Controller::show`]: while the user
    /// holds the banner only the countdown is canceled; while detached or
    /// mid-transition the call is a silent no-op. `on_hidden` fires
    /// exactly once, and only if the exit transition runs to completion.
    pub fn hide(&mut self, on_hidden: Option<OnHidden>) -> Effect {
        if self.gesture.is_dragging() {
            self.timer.cancel();
            trace!("hide while dragging: countdown canceled only");
            return Effect::None;
        }
        if self.phase == Phase::Idle {
            trace!("hide while detached: no-op");
            return Effect::None;
        }
        if self.is_animating() {
            trace!("hide while animating: no-op");
            return Effect::None;
        }

        self.timer.cancel();
        self.on_hidden = on_hidden;
        self.phase = Phase::Dismissing;
        self.epoch = self.epoch.wrapping_add(1);
        self.slide = Some(Slide::exit(Instant::now(), layout::BANNER_HEIGHT));
        debug!(epoch = self.epoch, "banner dismissing");
        Effect::Dismiss { epoch: self.epoch }
    }

    /// Handles a completion or input message.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, message: Message) -> Effect {
        match message {
            Message::EntranceFinished { epoch } => self.entrance_finished(epoch),
            Message::ExitFinished { epoch } => self.exit_finished(epoch),
            Message::DismissTimerFired { generation } => self.timer_fired(generation),
            Message::DragStarted => {
                self.gesture.begin();
                Effect::None
            }
            Message::DragEnded => {
                self.gesture.end();
                Effect::None
            }
            Message::ScreenResized(size) => {
                self.screen_width = size.width;
                self.relayout();
                Effect::None
            }
        }
    }

    fn entrance_finished(&mut self, epoch: u64) -> Effect {
        if epoch != self.epoch || self.phase != Phase::Presenting {
            trace!(epoch, "stale entrance completion ignored");
            return Effect::None;
        }

        self.phase = Phase::Visible;
        self.slide = None;
        match self.duration {
            AutoDismiss::After(delay) => {
                let generation = self.timer.arm();
                debug!(?delay, "dismiss countdown armed");
                Effect::Schedule { delay, generation }
            }
            AutoDismiss::Never => Effect::None,
        }
    }

    fn exit_finished(&mut self, epoch: u64) -> Effect {
        if epoch != self.epoch || self.phase != Phase::Dismissing {
            trace!(epoch, "stale exit completion ignored");
            return Effect::None;
        }

        self.phase = Phase::Idle;
        self.slide = None;
        debug!("banner detached");
        if let Some(on_hidden) = self.on_hidden.take() {
            on_hidden();
        }
        Effect::None
    }

    fn timer_fired(&mut self, generation: Generation) -> Effect {
        if !self.timer.try_fire(generation) {
            trace!("stale countdown fire ignored");
            return Effect::None;
        }
        self.hide(None)
    }

    fn relayout(&mut self) {
        let measured = layout::natural_message_height(self.content.message().unwrap_or(""));
        self.frames = Frames::compute(self.screen_width, self.content.has_icon(), measured);
    }

    /// The current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the banner occupies the view stack's overlay slot.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Whether an entrance or exit transition is in flight.
    ///
    /// The two directions are mutually exclusive because the phase is a
    /// single value.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Presenting | Phase::Dismissing)
    }

    /// Whether the user is currently holding the banner.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// The content of the current presentation.
    #[must_use]
    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The frames from the latest geometry pass.
    #[must_use]
    pub fn frames(&self) -> Frames {
        self.frames
    }

    /// The current visual style.
    #[must_use]
    pub fn style(&self) -> &Style {
        &self.style
    }

    /// The current auto-dismiss policy.
    #[must_use]
    pub fn duration(&self) -> AutoDismiss {
        self.duration
    }

    /// Vertical offset of the banner at `now`.
    ///
    /// `0.0` is the resting position, `-BANNER_HEIGHT` fully above the
    /// visible area.
    #[must_use]
    pub fn offset(&self, now: Instant) -> f32 {
        match (&self.slide, self.phase) {
            (Some(slide), _) => slide.offset_at(now),
            (None, Phase::Idle) => -layout::BANNER_HEIGHT,
            (None, _) => 0.0,
        }
    }

    /// Sets the auto-dismiss policy for subsequent presentations.
    pub fn set_duration(&mut self, duration: AutoDismiss) {
        self.duration = duration;
    }

    /// Sets the title font, effective on the next view pass.
    pub fn set_title_font(&mut self, font: Font) {
        self.style.title_font = font;
    }

    /// Sets the title color, effective on the next view pass.
    pub fn set_title_color(&mut self, color: Color) {
        self.style.title_color = color;
    }

    /// Sets the message font, effective on the next view pass.
    pub fn set_message_font(&mut self, font: Font) {
        self.style.message_font = font;
    }

    /// Sets the message color, effective on the next view pass.
    pub fn set_message_color(&mut self, color: Color) {
        self.style.message_color = color;
    }
}
