//! End-to-end share flow through the public app API, without a terminal

use std::io::Write;

use tokio::sync::mpsc;

use sharetrace_app::input_key::InputKey;
use sharetrace_app::process::process_message;
use sharetrace_app::{AppState, Message, PhoneScreen, Settings};
use sharetrace_core::UploadState;

const PNG_SIGNATURE: [u8; 8] = [0x89, 0x50, 0x4e, 0x47, 0x0d, 0x0a, 0x1a, 0x0a];

fn write_png(dir: &tempfile::TempDir) -> std::path::PathBuf {
    let path = dir.path().join("sunset.png");
    std::fs::File::create(&path)
        .unwrap()
        .write_all(&PNG_SIGNATURE)
        .unwrap();
    path
}

/// Drain the channel until the state satisfies `done`
async fn pump_until(
    state: &mut AppState,
    rx: &mut mpsc::Receiver<Message>,
    tx: &mpsc::Sender<Message>,
    done: impl Fn(&AppState) -> bool,
) {
    while !done(state) {
        let msg = rx.recv().await.expect("channel closed early");
        process_message(state, msg, tx);
    }
}

#[tokio::test]
async fn test_picked_file_is_shared_in_step_with_the_story() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir);

    let (tx, mut rx) = mpsc::channel(64);
    let mut state = AppState::with_settings(Settings::default());
    state.narrative.viewport_mut().mount(10);

    process_message(&mut state, Message::SelectImage { path: Some(path) }, &tx);
    assert!(state.loading_image);
    pump_until(&mut state, &mut rx, &tx, |s| {
        s.upload_state() == UploadState::ImageSelected
    })
    .await;

    assert_eq!(state.phone.screen(), PhoneScreen::Gallery);
    // Nothing is built until Share
    assert_eq!(state.narrative.byte_panel_text(), "Press Share to build payload");

    process_message(&mut state, Message::Key(InputKey::Char('s')), &tx);
    assert_eq!(state.upload_state(), UploadState::Uploading);
    assert_eq!(state.phone_display_progress(), 13.0);
    assert_eq!(state.narrative.byte_panel_text(), "89 50 4e 47 0d 0a 1a 0a");

    process_message(&mut state, Message::Key(InputKey::End), &tx);
    for _ in 0..200 {
        process_message(&mut state, Message::Tick, &tx);
    }
    assert_eq!(state.upload_state(), UploadState::Complete);
    assert_eq!(state.narrative.status_label(), "Arrived at edge");

    process_message(&mut state, Message::Key(InputKey::Char('r')), &tx);
    assert_eq!(state.upload_state(), UploadState::Idle);
    assert_eq!(state.phone.screen(), PhoneScreen::Feed);
    assert!(state.narrative.image().is_none());
}

#[tokio::test(start_paused = true)]
async fn test_unpaced_share_completes_from_the_ticker() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(&dir);

    let mut settings = Settings::default();
    settings.upload.pace_with_narrative = false;

    let (tx, mut rx) = mpsc::channel(64);
    let mut state = AppState::with_settings(settings);
    state.narrative.viewport_mut().mount(10);

    process_message(&mut state, Message::SelectImage { path: Some(path) }, &tx);
    pump_until(&mut state, &mut rx, &tx, |s| {
        s.upload_state() == UploadState::ImageSelected
    })
    .await;

    process_message(&mut state, Message::StartUpload, &tx);
    pump_until(&mut state, &mut rx, &tx, |s| {
        s.upload_state() == UploadState::Complete
    })
    .await;

    assert_eq!(state.phone_display_progress(), 100.0);
    assert!(state.ticker.is_none());
}

#[tokio::test]
async fn test_missing_file_leaves_phone_on_feed() {
    let (tx, mut rx) = mpsc::channel(8);
    let mut state = AppState::new();

    process_message(
        &mut state,
        Message::SelectImage {
            path: Some("/definitely/not/here.png".into()),
        },
        &tx,
    );
    pump_until(&mut state, &mut rx, &tx, |s| !s.loading_image).await;

    assert_eq!(state.upload_state(), UploadState::Idle);
    assert!(state.notice.is_some());
}
