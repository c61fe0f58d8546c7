// SPDX-License-Identifier: MPL-2.0
use iced_swipe::application::runtime::{run_delete, run_sample, SharedStore};
use iced_swipe::application::sampler::SamplerConfig;
use iced_swipe::application::session::{Effect, ReviewSession, SampleApplied, SessionActions};
use iced_swipe::application::swipe::{self, SwipeController};
use iced_swipe::config::{self, Config, GeneralConfig, SortOrder};
use iced_swipe::domain::asset::MediaKind;
use iced_swipe::domain::error::ReviewError;
use iced_swipe::i18n::I18n;
use iced_swipe::infrastructure::memory_store::{MemoryStore, StoreCall};
use iced_swipe::infrastructure::DirectoryStore;
use std::sync::Arc;
use tempfile::tempdir;

/// Runs effects against the store until the session has nothing in flight.
async fn drain(session: &mut ReviewSession, store: &SharedStore, mut effects: Vec<Effect>) {
    while let Some(effect) = effects.pop() {
        match effect {
            Effect::Sample(ticket) => {
                let result = run_sample(store.clone(), SamplerConfig::default()).await;
                session.sample_finished(ticket, result);
            }
            Effect::Delete(ticket, id) => {
                let result = run_delete(store.clone(), id).await;
                effects.extend(session.delete_finished(ticket, result));
            }
        }
    }
}

fn swipe(controller: &mut SwipeController, session: &mut ReviewSession, dx: f32) -> Vec<Effect> {
    let mut actions = SessionActions::new(session);
    controller.handle_with(swipe::Message::DragStart, &mut actions);
    controller.handle_with(swipe::Message::DragUpdate { dx, dy: 4.0 }, &mut actions);
    controller.handle_with(swipe::Message::DragEnd { dx, dy: 4.0 }, &mut actions);
    actions.into_effects()
}

#[tokio::test]
async fn deleting_every_photo_empties_the_library() {
    let memory = Arc::new(MemoryStore::with_photos(5));
    let store: SharedStore = memory.clone();
    let mut session = ReviewSession::new(true);
    let mut controller = SwipeController::default();

    let first = session.start();
    drain(&mut session, &store, vec![first]).await;

    for _ in 0..5 {
        assert!(session.current().is_some());
        let effects = swipe(&mut controller, &mut session, -180.0);
        assert_eq!(effects.len(), 1);
        drain(&mut session, &store, effects).await;
        controller.asset_replaced();
    }

    assert!(memory.is_empty());
    assert_eq!(session.deleted(), 5);
    assert_eq!(session.last_error(), Some(&ReviewError::EmptyLibrary));
}

#[tokio::test]
async fn keeping_never_touches_the_store() {
    let memory = Arc::new(MemoryStore::with_photos(30).recording());
    let store: SharedStore = memory.clone();
    let mut session = ReviewSession::new(true);
    let mut controller = SwipeController::default();

    let first = session.start();
    drain(&mut session, &store, vec![first]).await;

    for _ in 0..10 {
        let effects = swipe(&mut controller, &mut session, 220.0);
        drain(&mut session, &store, effects).await;
        controller.asset_replaced();
    }

    assert_eq!(session.kept(), 10);
    assert_eq!(memory.len(), 30);
    assert!(!memory
        .calls()
        .iter()
        .any(|call| matches!(call, StoreCall::Delete(_))));
}

#[tokio::test]
async fn dry_run_counts_deletes_without_removing() {
    let memory = Arc::new(MemoryStore::with_photos(3));
    let store: SharedStore = memory.clone();
    let mut session = ReviewSession::new(false);
    let mut controller = SwipeController::default();

    let first = session.start();
    drain(&mut session, &store, vec![first]).await;
    let effects = swipe(&mut controller, &mut session, -150.0);
    assert!(matches!(effects.as_slice(), [Effect::Sample(_)]));
    drain(&mut session, &store, effects).await;

    assert_eq!(session.deleted(), 1);
    assert_eq!(memory.len(), 3);
}

#[tokio::test]
async fn small_drag_keeps_the_photo() {
    let store: SharedStore = Arc::new(MemoryStore::with_photos(4));
    let mut session = ReviewSession::new(true);
    let mut controller = SwipeController::default();

    let first = session.start();
    drain(&mut session, &store, vec![first]).await;
    let shown = session.current().cloned();

    assert!(swipe(&mut controller, &mut session, 60.0).is_empty());
    assert_eq!(session.current().cloned(), shown);
}

#[tokio::test]
async fn directory_delete_removes_the_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    std::fs::write(dir.path().join("a.jpg"), b"a").expect("write a");
    std::fs::write(dir.path().join("notes.txt"), b"n").expect("write notes");

    let store: SharedStore = Arc::new(DirectoryStore::new(
        dir.path().to_path_buf(),
        SortOrder::Alphabetical,
    ));
    let mut session = ReviewSession::new(true);
    let mut controller = SwipeController::default();

    let first = session.start();
    drain(&mut session, &store, vec![first]).await;
    let sampled = session.current().expect("photo shown").clone();
    assert_eq!(sampled.asset.id().as_str(), "a.jpg");
    assert_eq!(sampled.total, 1);

    let effects = swipe(&mut controller, &mut session, -200.0);
    drain(&mut session, &store, effects).await;

    assert!(!dir.path().join("a.jpg").exists());
    assert!(dir.path().join("notes.txt").exists());
    assert_eq!(session.last_error(), Some(&ReviewError::EmptyLibrary));
}

#[tokio::test]
async fn stale_results_are_ignored_after_restart() {
    let store: SharedStore = Arc::new(MemoryStore::with_photos(8));
    let mut session = ReviewSession::new(true);

    let stale = session.start().ticket();
    let fresh = session.start().ticket();

    let result = run_sample(store.clone(), SamplerConfig::default()).await;
    assert_eq!(session.sample_finished(stale, result), SampleApplied::Stale);

    let result = run_sample(store.clone(), SamplerConfig::default()).await;
    assert_eq!(session.sample_finished(fresh, result), SampleApplied::Replaced);
}

#[test]
fn sampler_settings_come_from_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "[review]\nbatch_size = 5000\nreal_delete = false\n\n[library]\nmedia_kind = \"video\"\n",
    )
    .expect("write settings");

    let config = config::load_from_path(&path).expect("Failed to load config");
    let sampler = config.sampler_config();
    assert_eq!(sampler.kind, MediaKind::Video);
    assert!(sampler.batch_size <= iced_swipe::config::MAX_BATCH_SIZE);
    assert!(!config.real_delete());
}

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    let initial_config = Config {
        general: GeneralConfig {
            language: Some("en-US".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&initial_config, &temp_config_file_path)
        .expect("Failed to write initial config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");

    let french_config = Config {
        general: GeneralConfig {
            language: Some("fr".to_string()),
            ..GeneralConfig::default()
        },
        ..Config::default()
    };
    config::save_to_path(&french_config, &temp_config_file_path)
        .expect("Failed to write french config file");
    let loaded = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("action-keep"), "Garder");
}
