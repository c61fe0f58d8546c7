// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::application::session::Ticket;
use crate::application::swipe;
use crate::domain::asset::SampledAsset;
use crate::domain::error::ReviewError;
use crate::ui::drag::Pointer;
use iced::touch::Finger;
use iced::Point;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Gesture input for the swipe controller (buttons, keyboard).
    Swipe(swipe::Message),
    /// Left mouse button pressed at the last known cursor position.
    MousePressed,
    FingerPressed(Finger, Point),
    PointerMoved(Pointer, Point),
    PointerReleased(Pointer),
    /// The drag lost its pointer (cursor left the window, touch cancelled).
    PointerLost,
    /// Animation frame while the card springs back.
    Frame(Instant),
    SampleFinished {
        ticket: Ticket,
        result: Result<Option<SampledAsset>, ReviewError>,
    },
    DeleteFinished {
        ticket: Ticket,
        result: Result<(), ReviewError>,
    },
    /// Open the folder picker from the empty state.
    ChooseFolder,
    /// Result from the folder picker.
    FolderChosen(Option<PathBuf>),
    /// Sample again after an error.
    Retry,
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional photo folder reviewed for this run only.
    pub library_dir: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_SWIPE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
