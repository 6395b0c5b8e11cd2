//! Action handlers: UpdateAction dispatch and background task spawning

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

use sharetrace_core::{random_increment, Error, Result, SelectedImage};

use crate::message::{Message, TickerTaskSlot};
use crate::UpdateAction;

/// Execute an action by spawning a background task
pub fn handle_action(action: UpdateAction, msg_tx: mpsc::Sender<Message>) {
    match action {
        UpdateAction::LoadImage { path } => {
            spawn_image_load(path, msg_tx);
        }

        UpdateAction::StartTicker {
            cycle,
            interval,
            max_increment,
        } => {
            spawn_upload_ticker(cycle, interval, max_increment, msg_tx);
        }
    }
}

/// Read a file and encode it as a data URI
pub async fn load_image(path: &Path) -> Result<SelectedImage> {
    let metadata = tokio::fs::metadata(path)
        .await
        .map_err(|e| Error::image_load(path, e.to_string()))?;
    if !metadata.is_file() {
        return Err(Error::not_a_file(path));
    }
    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| Error::image_load(path, e.to_string()))?;
    Ok(SelectedImage::from_path_bytes(path, &bytes))
}

/// Spawn the file read; the result comes back as a message
pub fn spawn_image_load(path: PathBuf, msg_tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let message = match load_image(&path).await {
            Ok(image) => {
                info!("Encoded {} ({} chars)", path.display(), image.data_url().len());
                Message::ImageLoaded { image }
            }
            Err(e) => Message::ImageLoadFailed {
                path,
                error: e.to_string(),
            },
        };
        if msg_tx.send(message).await.is_err() {
            debug!("Image load finished after shutdown");
        }
    });
}

/// Spawn the simulated-progress ticker for one upload cycle
///
/// The task first announces itself with `UploadTickerStarted` (carrying its
/// shutdown sender and JoinHandle) and then emits one `UploadTick` per
/// interval until it is told to stop or the channel closes.
pub fn spawn_upload_ticker(
    cycle: u64,
    interval: Duration,
    max_increment: f64,
    msg_tx: mpsc::Sender<Message>,
) {
    let (shutdown_tx, mut shutdown_rx) = watch::channel(false);
    let shutdown_tx = Arc::new(shutdown_tx);

    // Filled right after spawn; the state only aborts through this slot
    let task_handle_slot: TickerTaskSlot = Arc::new(std::sync::Mutex::new(None));
    let task_handle_for_msg = task_handle_slot.clone();

    let join_handle = tokio::spawn(async move {
        if msg_tx
            .send(Message::UploadTickerStarted {
                cycle,
                shutdown_tx,
                task_handle: task_handle_for_msg,
            })
            .await
            .is_err()
        {
            return;
        }

        let mut ticker = tokio::time::interval(interval);
        // The first tick completes immediately
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    let increment = {
                        let mut rng = rand::thread_rng();
                        random_increment(&mut rng, max_increment)
                    };
                    if msg_tx
                        .send(Message::UploadTick { cycle, increment })
                        .await
                        .is_err()
                    {
                        break;
                    }
                }
                changed = shutdown_rx.changed() => {
                    if changed.is_err() || *shutdown_rx.borrow() {
                        break;
                    }
                }
            }
        }
        debug!("Ticker task for cycle {} exiting", cycle);
    });

    match task_handle_slot.lock() {
        Ok(mut slot) => *slot = Some(join_handle),
        Err(e) => warn!("Ticker handle slot poisoned: {}", e),
    };
}
