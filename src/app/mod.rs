// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the swipe card and the
//! photo library.
//!
//! The `App` struct wires together the review session, the swipe controller,
//! the store, localization and settings, and translates messages into side
//! effects like store calls or config persistence.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::application::runtime::SharedStore;
use crate::application::session::ReviewSession;
use crate::application::swipe::SwipeController;
use crate::config::{self, Config};
use crate::domain::error::ReviewError;
use crate::i18n::I18n;
use crate::infrastructure::DirectoryStore;
use crate::ui::drag::DragState;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Point, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    /// `--config-dir` for this run; `None` uses the usual resolution.
    config_dir: Option<PathBuf>,
    /// Folder under review. May differ from `config.library.root` when the
    /// launcher passed one for this run only.
    library_root: Option<PathBuf>,
    store: Option<SharedStore>,
    session: ReviewSession,
    swipe: SwipeController,
    drag: DragState,
    /// Last cursor position; mouse presses carry no position of their own.
    cursor: Point,
    last_frame: Option<Instant>,
    theme_mode: ThemeMode,
    show_index_label: bool,
    /// Failure raised while acting on a swipe.
    fault: Option<ReviewError>,
    /// i18n key of a settings warning to show in the status line.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("library_root", &self.library_root)
            .field("current", &self.session.current().map(|s| s.asset.id()))
            .field("phase", &self.swipe.phase())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const WINDOW_DEFAULT_WIDTH: u32 = 600;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot function; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Opens a folder as the store under review.
fn open_library(root: PathBuf, config: &Config) -> SharedStore {
    Arc::new(DirectoryStore::new(root, config.sort_order()).recursive(config.recursive()))
}

impl App {
    /// Loads settings, opens the library and requests the first photo.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let library_root = flags.library_dir.or_else(|| config.library.root.clone());
        let store = library_root
            .clone()
            .map(|root| open_library(root, &config));
        if store.is_none() {
            tracing::info!("no photo folder configured");
        }

        let mut app = App {
            i18n,
            session: ReviewSession::new(config.real_delete()),
            swipe: SwipeController::new(config.swipe_config()),
            drag: DragState::default(),
            cursor: Point::ORIGIN,
            last_frame: None,
            theme_mode: config.general.theme_mode,
            show_index_label: config.show_index_label(),
            fault: None,
            notice: config_warning,
            config,
            config_dir,
            library_root,
            store,
        };

        let task = if app.store.is_some() {
            let effect = app.session.start();
            update::perform(app.store.clone(), app.config.sampler_config(), effect)
        } else {
            Task::none()
        };

        (app, task)
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        match self.session.current() {
            Some(sampled) => format!("{} - {app_name}", sampled.asset.display_name()),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let frame_sub = subscription::create_frame_subscription(self.swipe.is_animating());

        Subscription::batch([event_sub, frame_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            library_root: &mut self.library_root,
            store: &mut self.store,
            session: &mut self.session,
            swipe: &mut self.swipe,
            drag: &mut self.drag,
            cursor: &mut self.cursor,
            last_frame: &mut self.last_frame,
            fault: &mut self.fault,
            notice: &mut self.notice,
        };

        match message {
            Message::Swipe(swipe_message) => update::handle_swipe_message(&mut ctx, swipe_message),
            Message::MousePressed => update::handle_mouse_pressed(&mut ctx),
            Message::FingerPressed(finger, position) => update::handle_pointer_pressed(
                &mut ctx,
                crate::ui::drag::Pointer::Finger(finger),
                position,
            ),
            Message::PointerMoved(pointer, position) => {
                update::handle_pointer_moved(&mut ctx, pointer, position)
            }
            Message::PointerReleased(pointer) => update::handle_pointer_released(&mut ctx, pointer),
            Message::PointerLost => update::handle_pointer_lost(&mut ctx),
            Message::Frame(now) => update::handle_frame(&mut ctx, now),
            Message::SampleFinished { ticket, result } => {
                update::handle_sample_finished(&mut ctx, ticket, result)
            }
            Message::DeleteFinished { ticket, result } => {
                update::handle_delete_finished(&mut ctx, ticket, result)
            }
            Message::ChooseFolder => update::handle_choose_folder(ctx.library_root.clone()),
            Message::FolderChosen(path) => update::handle_folder_chosen(&mut ctx, path),
            Message::Retry => update::handle_retry(&mut ctx),
            Message::WindowCloseRequested(window_id) => {
                tracing::debug!(?window_id, "window closing");
                ctx.session.close();
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            has_library: self.library_root.is_some(),
            session: &self.session,
            gesture: self.swipe.snapshot(),
            pressed: self.swipe.pressed(),
            theme_mode: self.theme_mode,
            show_index_label: self.show_index_label,
            fault: self.fault.as_ref(),
            notice: self.notice.as_deref(),
        })
    }
}
