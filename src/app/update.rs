// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Input flows through the [`SwipeController`]; committed swipes go to the
//! [`ReviewSession`], whose effects become store tasks here. Store results
//! come back as messages tagged with the session ticket.

use super::{open_library, Message};
use crate::application::runtime::{self, SharedStore};
use crate::application::sampler::SamplerConfig;
use crate::application::session::{Effect, ReviewSession, SampleApplied, SessionActions, Ticket};
use crate::application::swipe::{self, SwipeController};
use crate::config::{self, Config};
use crate::domain::asset::SampledAsset;
use crate::domain::error::ReviewError;
use crate::ui::drag::{DragState, Pointer};
use iced::{Point, Task};
use std::path::PathBuf;
use std::time::{Duration, Instant};

/// Expected spacing of animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Context for update operations, bundling mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub library_root: &'a mut Option<PathBuf>,
    pub store: &'a mut Option<SharedStore>,
    pub session: &'a mut ReviewSession,
    pub swipe: &'a mut SwipeController,
    pub drag: &'a mut DragState,
    pub cursor: &'a mut Point,
    pub last_frame: &'a mut Option<Instant>,
    pub fault: &'a mut Option<ReviewError>,
    pub notice: &'a mut Option<String>,
}

/// Turns a session effect into a store task.
///
/// Without a store every sample comes back empty.
pub fn perform(store: Option<SharedStore>, sampler: SamplerConfig, effect: Effect) -> Task<Message> {
    match (effect, store) {
        (Effect::Sample(ticket), Some(store)) => Task::perform(
            runtime::run_sample(store, sampler),
            move |result| Message::SampleFinished { ticket, result },
        ),
        (Effect::Sample(ticket), None) => Task::done(Message::SampleFinished {
            ticket,
            result: Ok(None),
        }),
        (Effect::Delete(ticket, id), Some(store)) => Task::perform(
            runtime::run_delete(store, id),
            move |result| Message::DeleteFinished { ticket, result },
        ),
        (Effect::Delete(ticket, _), None) => Task::done(Message::DeleteFinished {
            ticket,
            result: Err(ReviewError::DeleteFailure("no library open".to_string())),
        }),
    }
}

fn perform_all(ctx: &UpdateContext<'_>, effects: Vec<Effect>) -> Task<Message> {
    let sampler = ctx.config.sampler_config();
    Task::batch(
        effects
            .into_iter()
            .map(|effect| perform(ctx.store.clone(), sampler, effect)),
    )
}

/// Feeds a gesture message to the controller and runs whatever the
/// committed swipe asks of the store.
pub fn handle_swipe_message(ctx: &mut UpdateContext<'_>, message: swipe::Message) -> Task<Message> {
    let mut actions = SessionActions::new(ctx.session);
    let effect = ctx.swipe.handle_with(message, &mut actions);
    let effects = actions.into_effects();

    if let Some(fault) = ctx.swipe.take_fault() {
        *ctx.fault = Some(fault);
    }

    if let swipe::Effect::Commit(outcome) = effect {
        tracing::debug!(?outcome, effects = effects.len(), "swipe committed");
        if effects.is_empty() {
            // Nothing will replace the card, so bring it back.
            ctx.swipe.handle(swipe::Message::RestoreOpacity);
        }
    }

    perform_all(ctx, effects)
}

/// Mouse presses start a drag at the last known cursor position.
pub fn handle_mouse_pressed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let position = *ctx.cursor;
    handle_pointer_pressed(ctx, Pointer::Mouse, position)
}

pub fn handle_pointer_pressed(
    ctx: &mut UpdateContext<'_>,
    pointer: Pointer,
    position: Point,
) -> Task<Message> {
    if ctx.session.current().is_none() {
        return Task::none();
    }
    match ctx.drag.press(pointer, position) {
        Some(message) => handle_swipe_message(ctx, message),
        None => Task::none(),
    }
}

pub fn handle_pointer_moved(
    ctx: &mut UpdateContext<'_>,
    pointer: Pointer,
    position: Point,
) -> Task<Message> {
    if pointer == Pointer::Mouse {
        *ctx.cursor = position;
    }
    match ctx.drag.motion(pointer, position) {
        Some(message) => handle_swipe_message(ctx, message),
        None => Task::none(),
    }
}

pub fn handle_pointer_released(ctx: &mut UpdateContext<'_>, pointer: Pointer) -> Task<Message> {
    match ctx.drag.release(pointer) {
        Some(message) => handle_swipe_message(ctx, message),
        None => Task::none(),
    }
}

pub fn handle_pointer_lost(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    match ctx.drag.abort() {
        Some(message) => handle_swipe_message(ctx, message),
        None => Task::none(),
    }
}

/// Advances the spring animation by the time since the previous frame.
pub fn handle_frame(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    let dt = ctx
        .last_frame
        .map_or(FRAME_INTERVAL, |last| now.saturating_duration_since(last));

    if ctx.swipe.is_animating() {
        ctx.swipe.tick(dt);
        *ctx.last_frame = Some(now);
    }
    if !ctx.swipe.is_animating() {
        // The next animation starts from a fresh clock.
        *ctx.last_frame = None;
    }
    Task::none()
}

pub fn handle_sample_finished(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: Result<Option<SampledAsset>, ReviewError>,
) -> Task<Message> {
    match ctx.session.sample_finished(ticket, result) {
        SampleApplied::Stale => {}
        SampleApplied::Replaced => {
            ctx.swipe.asset_replaced();
            *ctx.fault = None;
        }
        SampleApplied::Unchanged => {
            ctx.swipe.handle(swipe::Message::RestoreOpacity);
        }
    }
    Task::none()
}

pub fn handle_delete_finished(
    ctx: &mut UpdateContext<'_>,
    ticket: Ticket,
    result: Result<(), ReviewError>,
) -> Task<Message> {
    match ctx.session.delete_finished(ticket, result) {
        Some(effect) => perform_all(ctx, vec![effect]),
        None => Task::none(),
    }
}

/// Opens the native folder picker.
pub fn handle_choose_folder(start_dir: Option<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            let mut dialog = rfd::AsyncFileDialog::new();

            // Start from the folder under review if it still exists
            if let Some(dir) = start_dir {
                if dir.is_dir() {
                    dialog = dialog.set_directory(&dir);
                }
            }

            dialog.pick_folder().await.map(|h| h.path().to_path_buf())
        },
        Message::FolderChosen,
    )
}

/// Remembers the chosen folder and starts reviewing it.
pub fn handle_folder_chosen(ctx: &mut UpdateContext<'_>, path: Option<PathBuf>) -> Task<Message> {
    let Some(path) = path else {
        return Task::none();
    };
    tracing::info!(path = %path.display(), "photo folder chosen");

    ctx.config.library.root = Some(path.clone());
    if let Err(err) = config::save_with_override(ctx.config, ctx.config_dir.cloned()) {
        tracing::warn!(error = %err, "could not save settings");
        *ctx.notice = Some("notification-config-save-error".to_string());
    }

    *ctx.store = Some(open_library(path.clone(), ctx.config));
    *ctx.library_root = Some(path);
    ctx.session.restart(ctx.config.real_delete());
    *ctx.drag = DragState::default();
    *ctx.fault = None;
    ctx.swipe.asset_replaced();

    let effect = ctx.session.start();
    perform_all(ctx, vec![effect])
}

/// Samples again, e.g. after a failed fetch.
pub fn handle_retry(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.store.is_none() {
        return Task::none();
    }
    *ctx.fault = None;
    let effect = ctx.session.start();
    perform_all(ctx, vec![effect])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::gesture::SwipeOutcome;

    struct State {
        config: Config,
        library_root: Option<PathBuf>,
        store: Option<SharedStore>,
        session: ReviewSession,
        swipe: SwipeController,
        drag: DragState,
        cursor: Point,
        last_frame: Option<Instant>,
        fault: Option<ReviewError>,
        notice: Option<String>,
    }

    impl State {
        fn new() -> Self {
            Self {
                config: Config::default(),
                library_root: None,
                store: None,
                session: ReviewSession::new(true),
                swipe: SwipeController::default(),
                drag: DragState::default(),
                cursor: Point::ORIGIN,
                last_frame: None,
                fault: None,
                notice: None,
            }
        }

        fn ctx(&mut self) -> UpdateContext<'_> {
            UpdateContext {
                config: &mut self.config,
                config_dir: None,
                library_root: &mut self.library_root,
                store: &mut self.store,
                session: &mut self.session,
                swipe: &mut self.swipe,
                drag: &mut self.drag,
                cursor: &mut self.cursor,
                last_frame: &mut self.last_frame,
                fault: &mut self.fault,
                notice: &mut self.notice,
            }
        }
    }

    #[test]
    fn delete_without_photo_records_fault_and_restores_card() {
        let mut state = State::new();
        let _ = handle_swipe_message(
            &mut state.ctx(),
            swipe::Message::Trigger(SwipeOutcome::Delete),
        );
        assert!(matches!(state.fault, Some(ReviewError::CallbackFault(_))));
        assert!(!state.session.is_busy());
        assert_eq!(state.swipe.snapshot().image_opacity, 1.0);
    }

    #[test]
    fn first_frame_uses_nominal_interval() {
        let mut state = State::new();
        state.swipe.handle(swipe::Message::DragStart);
        state.swipe.handle(swipe::Message::DragEnd { dx: 50.0, dy: 0.0 });
        assert!(state.swipe.is_animating());

        let now = Instant::now();
        let _ = handle_frame(&mut state.ctx(), now);
        assert_eq!(state.last_frame, Some(now));
        assert!(state.swipe.snapshot().translate_x < 50.0);
    }

    #[test]
    fn idle_frames_reset_clock() {
        let mut state = State::new();
        state.last_frame = Some(Instant::now());
        let _ = handle_frame(&mut state.ctx(), Instant::now());
        assert!(state.last_frame.is_none());
    }

    #[test]
    fn retry_without_library_does_nothing() {
        let mut state = State::new();
        let _ = handle_retry(&mut state.ctx());
        assert!(!state.session.is_busy());
    }

    #[test]
    fn mouse_press_uses_tracked_cursor() {
        let mut state = State::new();
        let ticket = state.session.start().ticket();
        state.session.sample_finished(
            ticket,
            Ok(Some(SampledAsset {
                asset: crate::domain::asset::AssetRef::new("a.jpg", "file:///a.jpg"),
                index: 0,
                total: 1,
            })),
        );

        let _ = handle_pointer_moved(&mut state.ctx(), Pointer::Mouse, Point::new(40.0, 60.0));
        let _ = handle_mouse_pressed(&mut state.ctx());
        let _ = handle_pointer_moved(&mut state.ctx(), Pointer::Mouse, Point::new(10.0, 60.0));

        assert!(state.swipe.is_dragging());
        assert_eq!(state.swipe.snapshot().translate_x, -30.0);
    }
}
