// SPDX-License-Identifier: MPL-2.0
//! Swipe controller: turns drag and button input into keep/delete decisions.
//!
//! The controller is the single owner of the card's gesture state. Input
//! arrives as discrete [`Message`]s; the renderer reads a [`GestureState`]
//! snapshot and never mutates it.
//!
//! ```text
//! AtRest ──drag start──▶ Dragging ──release──▶ Committing(Keep | Delete)
//!    ▲                                   └───▶ Returning
//!    └──────────── spring settled ◀──────────────┘
//! ```

use crate::domain::error::ReviewError;
use crate::domain::gesture::{GestureState, SwipeConfig, SwipeOutcome};
use crate::domain::spring::Spring;
use std::time::Duration;

/// Error type returned by [`SwipeActions`] implementations.
pub type ActionError = Box<dyn std::error::Error + Send + Sync>;

/// Receiver of committed swipes.
///
/// Errors returned here are logged by the controller and never interrupt
/// the return animation.
pub trait SwipeActions {
    /// The user kept the current photo.
    ///
    /// # Errors
    ///
    /// Any error is logged and otherwise ignored.
    fn keep(&mut self) -> Result<(), ActionError>;

    /// The user wants the current photo deleted.
    ///
    /// # Errors
    ///
    /// Any error is logged and otherwise ignored.
    fn delete(&mut self) -> Result<(), ActionError>;
}

/// Baseline captured when a drag starts, so that grabbing a card that is
/// still springing back continues from where it is instead of snapping.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSession {
    pub baseline_x: f32,
    pub baseline_y: f32,
}

/// Controller phase.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Phase {
    AtRest,
    Dragging(DragSession),
    /// A keep/delete was committed; the card springs back meanwhile.
    Committing(SwipeOutcome),
    /// Released inside the threshold; the card springs back.
    Returning,
}

/// Input messages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    DragStart,
    /// Offset from the point where the drag started.
    DragUpdate { dx: f32, dy: f32 },
    /// Final offset at release.
    DragEnd { dx: f32, dy: f32 },
    /// Red (`Delete`) or green (`Keep`) button pressed down.
    ButtonPressed(SwipeOutcome),
    /// Button released; commits if it matches the pressed one.
    ButtonReleased(SwipeOutcome),
    /// Pointer left the button while held.
    ButtonCancelled,
    /// Commit without a press, e.g. from a keyboard shortcut.
    Trigger(SwipeOutcome),
    /// Animation frame.
    Tick(Duration),
    /// A new asset became current.
    AssetReplaced,
    /// The commit did not bring a new asset; show the current one again.
    RestoreOpacity,
}

/// Effects produced by the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A keep or delete was committed.
    Commit(SwipeOutcome),
}

/// Owns the gesture state machine and the spring-return animation.
#[derive(Debug, Clone)]
pub struct SwipeController {
    config: SwipeConfig,
    phase: Phase,
    translate_x: Spring,
    translate_y: Spring,
    rotation: Spring,
    image_opacity: Spring,
    keep_opacity: f32,
    nope_opacity: f32,
    pressed: Option<SwipeOutcome>,
    last_fault: Option<ReviewError>,
}

impl Default for SwipeController {
    fn default() -> Self {
        Self::new(SwipeConfig::default())
    }
}

impl SwipeController {
    #[must_use]
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            phase: Phase::AtRest,
            translate_x: Spring::at_rest(0.0),
            translate_y: Spring::at_rest(0.0),
            rotation: Spring::at_rest(0.0),
            image_opacity: Spring::at_rest(1.0),
            keep_opacity: 0.0,
            nope_opacity: 0.0,
            pressed: None,
            last_fault: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, Phase::Dragging(_))
    }

    /// Whether frame ticks are needed to advance the return animation.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        !(self.translate_x.is_settled()
            && self.translate_y.is_settled()
            && self.rotation.is_settled()
            && self.image_opacity.is_settled())
    }

    /// The button currently held down, if any.
    #[must_use]
    pub fn pressed(&self) -> Option<SwipeOutcome> {
        self.pressed
    }

    /// Takes the last error raised by a [`SwipeActions`] callback.
    pub fn take_fault(&mut self) -> Option<ReviewError> {
        self.last_fault.take()
    }

    /// Read-only visual state for the renderer.
    #[must_use]
    pub fn snapshot(&self) -> GestureState {
        GestureState {
            translate_x: self.translate_x.value(),
            translate_y: self.translate_y.value(),
            rotation: self.rotation.value(),
            keep_opacity: self.keep_opacity,
            nope_opacity: self.nope_opacity,
            image_opacity: self.image_opacity.value(),
        }
    }

    /// Advances the return animation by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        self.handle(Message::Tick(dt));
    }

    /// Resets the card for a newly displayed asset.
    pub fn asset_replaced(&mut self) {
        self.handle(Message::AssetReplaced);
    }

    /// Handles a message and invokes `actions` on commit.
    ///
    /// Callback errors are logged, kept for [`take_fault`](Self::take_fault),
    /// and do not affect the animation.
    pub fn handle_with<A>(&mut self, msg: Message, actions: &mut A) -> Effect
    where
        A: SwipeActions + ?Sized,
    {
        let effect = self.handle(msg);
        if let Effect::Commit(outcome) = effect {
            let result = match outcome {
                SwipeOutcome::Keep => actions.keep(),
                SwipeOutcome::Delete => actions.delete(),
                SwipeOutcome::Cancel => Ok(()),
            };
            if let Err(err) = result {
                tracing::error!(?outcome, error = %err, "swipe action failed");
                self.last_fault = Some(ReviewError::CallbackFault(err.to_string()));
            }
        }
        effect
    }

    /// Handles a message without callbacks.
    ///
    /// Note: Takes `Message` by value following Iced's `update(message: Message)` pattern.
    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::DragStart => {
                if self.is_dragging() {
                    return Effect::None;
                }
                let session = DragSession {
                    baseline_x: self.translate_x.value(),
                    baseline_y: self.translate_y.value(),
                };
                // Grabbing the card stops the spring where it is.
                self.translate_x.snap_to(session.baseline_x);
                self.translate_y.snap_to(session.baseline_y);
                self.rotation.snap_to(self.rotation.value());
                self.pressed = None;
                self.phase = Phase::Dragging(session);
                Effect::None
            }
            Message::DragUpdate { dx, dy } => {
                if let Phase::Dragging(session) = self.phase {
                    self.apply_drag(session, dx, dy);
                }
                Effect::None
            }
            Message::DragEnd { dx, dy } => {
                let Phase::Dragging(session) = self.phase else {
                    return Effect::None;
                };
                self.apply_drag(session, dx, dy);
                let outcome =
                    SwipeOutcome::classify(self.translate_x.value(), self.config.threshold);
                tracing::debug!(
                    ?outcome,
                    translate_x = self.translate_x.value(),
                    "drag released"
                );
                self.release(outcome)
            }
            Message::ButtonPressed(outcome) => {
                if outcome.is_commit() && !self.is_dragging() {
                    self.pressed = Some(outcome);
                }
                Effect::None
            }
            Message::ButtonReleased(outcome) => {
                if self.pressed.take() == Some(outcome) && !self.is_dragging() {
                    self.release(outcome)
                } else {
                    Effect::None
                }
            }
            Message::ButtonCancelled => {
                self.pressed = None;
                Effect::None
            }
            Message::Trigger(outcome) => {
                if outcome.is_commit() && !self.is_dragging() {
                    self.pressed = None;
                    self.release(outcome)
                } else {
                    Effect::None
                }
            }
            Message::Tick(dt) => {
                self.translate_x.step(dt);
                self.translate_y.step(dt);
                self.rotation.step(dt);
                self.image_opacity.step(dt);
                self.settle_if_done();
                Effect::None
            }
            Message::AssetReplaced => {
                if self.is_dragging() {
                    // The drag belonged to the previous asset.
                    self.release_to_rest();
                    self.phase = Phase::Returning;
                }
                self.keep_opacity = 0.0;
                self.nope_opacity = 0.0;
                self.image_opacity.snap_to(1.0);
                self.settle_if_done();
                Effect::None
            }
            Message::RestoreOpacity => {
                if !self.is_dragging() {
                    self.image_opacity = Spring::toward(self.image_opacity.value(), 1.0);
                }
                Effect::None
            }
        }
    }

    fn apply_drag(&mut self, session: DragSession, dx: f32, dy: f32) {
        let x = session.baseline_x + dx;
        let y = session.baseline_y + dy;
        self.translate_x.snap_to(x);
        self.translate_y.snap_to(y);
        self.rotation.snap_to(self.config.rotation_for(x));
        self.keep_opacity = self.config.keep_opacity_for(x);
        self.nope_opacity = self.config.nope_opacity_for(x);
        self.image_opacity
            .snap_to(self.config.image_opacity_for(dx, dy));
    }

    /// Leaves the drag (or button) and springs back, emitting the commit.
    fn release(&mut self, outcome: SwipeOutcome) -> Effect {
        self.release_to_rest();
        match outcome {
            SwipeOutcome::Cancel => {
                self.image_opacity = Spring::toward(self.image_opacity.value(), 1.0);
                self.phase = Phase::Returning;
                self.settle_if_done();
                Effect::None
            }
            committed => {
                // Opacity is held until the next asset arrives.
                self.phase = Phase::Committing(committed);
                self.settle_if_done();
                Effect::Commit(committed)
            }
        }
    }

    fn release_to_rest(&mut self) {
        self.translate_x = Spring::toward(self.translate_x.value(), 0.0);
        self.translate_y = Spring::toward(self.translate_y.value(), 0.0);
        self.rotation = Spring::toward(self.rotation.value(), 0.0);
        self.keep_opacity = 0.0;
        self.nope_opacity = 0.0;
    }

    fn settle_if_done(&mut self) {
        if matches!(self.phase, Phase::Committing(_) | Phase::Returning) && !self.is_animating() {
            self.phase = Phase::AtRest;
        }
    }
}
