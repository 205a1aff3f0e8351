//! Queue-backed [`RoomClient`] and the worker that drains it.

use std::{
    sync::Arc,
    thread::{self, JoinHandle},
};

use anyhow::Result;
use async_trait::async_trait;
use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use shared::protocol::RoomCommand;
use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::room_client::RoomClient;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueueError {
    #[error("room command queue is full; dropped {}", .0.name())]
    Full(RoomCommand),
    #[error("room command worker disconnected; dropped {}", .0.name())]
    Disconnected(RoomCommand),
}

/// Executes commands against the actual room session.
#[async_trait]
pub trait RoomSession: Send + Sync {
    async fn execute(&self, command: RoomCommand) -> Result<()>;
}

#[derive(Clone)]
pub struct QueuedRoomClient {
    tx: Sender<RoomCommand>,
}

impl QueuedRoomClient {
    pub fn bounded(capacity: usize) -> (Self, Receiver<RoomCommand>) {
        let (tx, rx) = bounded(capacity.max(1));
        (Self { tx }, rx)
    }

    pub fn try_submit(&self, command: RoomCommand) -> Result<(), QueueError> {
        match self.tx.try_send(command) {
            Ok(()) => Ok(()),
            Err(TrySendError::Full(command)) => Err(QueueError::Full(command)),
            Err(TrySendError::Disconnected(command)) => Err(QueueError::Disconnected(command)),
        }
    }

    fn submit(&self, command: RoomCommand) {
        match self.try_submit(command) {
            Ok(()) => debug!(command = command.name(), "queued room command"),
            Err(err) => warn!("{err}"),
        }
    }
}

impl RoomClient for QueuedRoomClient {
    fn mute_mic(&self) {
        self.submit(RoomCommand::MuteMic);
    }

    fn unmute_mic(&self) {
        self.submit(RoomCommand::UnmuteMic);
    }

    fn enable_webcam(&self) {
        self.submit(RoomCommand::EnableWebcam);
    }

    fn disable_webcam(&self) {
        self.submit(RoomCommand::DisableWebcam);
    }

    fn enable_screen_sharing(&self) {
        self.submit(RoomCommand::EnableScreenSharing);
    }

    fn disable_screen_sharing(&self) {
        self.submit(RoomCommand::DisableScreenSharing);
    }

    fn install_extension(&self) {
        self.submit(RoomCommand::InstallExtension);
    }

    fn lock_room(&self) {
        self.submit(RoomCommand::LockRoom);
    }

    fn unlock_room(&self) {
        self.submit(RoomCommand::UnlockRoom);
    }

    fn close(&self) {
        self.submit(RoomCommand::Close);
    }
}

/// Spawns the worker thread. It stops after executing `Close` or once every
/// sender is dropped.
pub fn spawn_command_worker(
    cmd_rx: Receiver<RoomCommand>,
    session: Arc<dyn RoomSession>,
) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("room-command-worker".into())
        .spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build room command runtime: {err}");
                    return;
                }
            };

            runtime.block_on(async move {
                info!("room command worker ready");
                while let Ok(command) = cmd_rx.recv() {
                    if let Err(err) = session.execute(command).await {
                        error!(command = command.name(), "room command failed: {err:#}");
                    }
                    if command == RoomCommand::Close {
                        break;
                    }
                }
                info!("room command worker stopped");
            });
        })
}
