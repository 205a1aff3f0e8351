//! In-process stand-in for a room session that applies each command's
//! expected outcome straight to the store.

use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use anyhow::{bail, Result};
use async_trait::async_trait;
use shared::{
    domain::{MediaSource, Producer},
    protocol::{RoomCommand, StateAction},
};
use tracing::info;

use crate::{
    queue::RoomSession,
    store::{ActionDispatcher, Store},
};

pub struct LoopbackRoomSession {
    store: Arc<Store>,
    next_producer: AtomicU64,
}

impl LoopbackRoomSession {
    pub fn new(store: Arc<Store>) -> Self {
        Self {
            store,
            next_producer: AtomicU64::new(1),
        }
    }

    fn new_producer(&self, source: MediaSource) -> Producer {
        let n = self.next_producer.fetch_add(1, Ordering::Relaxed);
        Producer::new(format!("{source}-{n}"), source)
    }

    fn produce(&self, source: MediaSource) -> StateAction {
        StateAction::AddProducer(self.new_producer(source))
    }
}

#[async_trait]
impl RoomSession for LoopbackRoomSession {
    async fn execute(&self, command: RoomCommand) -> Result<()> {
        let snapshot = self.store.snapshot();
        let me = &snapshot.me;

        let actions = match command {
            RoomCommand::MuteMic => {
                let Some(mic) = snapshot.mic_producer() else {
                    bail!("no mic producer to mute");
                };
                vec![StateAction::SetProducerPaused {
                    producer_id: mic.id.clone(),
                    locally_paused: true,
                }]
            }
            RoomCommand::UnmuteMic => match snapshot.mic_producer() {
                Some(mic) => vec![StateAction::SetProducerPaused {
                    producer_id: mic.id.clone(),
                    locally_paused: false,
                }],
                None if me.can_send_mic => vec![self.produce(MediaSource::Mic)],
                None => bail!("cannot send mic"),
            },
            RoomCommand::EnableWebcam => {
                if !me.can_send_webcam {
                    bail!("cannot send webcam");
                }
                match snapshot.webcam_producer() {
                    Some(webcam) if webcam.locally_paused => vec![StateAction::SetProducerPaused {
                        producer_id: webcam.id.clone(),
                        locally_paused: false,
                    }],
                    Some(_) => Vec::new(),
                    None => vec![self.produce(MediaSource::Webcam)],
                }
            }
            RoomCommand::DisableWebcam => snapshot
                .webcam_producer()
                .map(|webcam| StateAction::RemoveProducer {
                    producer_id: webcam.id.clone(),
                })
                .into_iter()
                .collect(),
            RoomCommand::EnableScreenSharing => {
                if me.need_extension || !me.can_share_screen {
                    bail!("screen sharing unavailable");
                }
                // The control stays disabled while capture starts.
                self.store
                    .dispatch(StateAction::SetScreenShareInProgress { in_progress: true });
                tokio::task::yield_now().await;
                vec![
                    self.produce(MediaSource::Screen),
                    StateAction::SetScreenShareInProgress { in_progress: false },
                ]
            }
            RoomCommand::DisableScreenSharing => snapshot
                .screen_producer()
                .map(|screen| StateAction::RemoveProducer {
                    producer_id: screen.id.clone(),
                })
                .into_iter()
                .collect(),
            RoomCommand::InstallExtension => vec![StateAction::SetNeedExtension {
                need_extension: false,
            }],
            RoomCommand::LockRoom => vec![StateAction::SetRoomLocked { locked: true }],
            RoomCommand::UnlockRoom => vec![StateAction::SetRoomLocked { locked: false }],
            RoomCommand::Close => snapshot
                .producers
                .keys()
                .map(|producer_id| StateAction::RemoveProducer {
                    producer_id: producer_id.clone(),
                })
                .collect(),
        };

        info!(command = command.name(), updates = actions.len(), "loopback session applied command");
        for action in actions {
            self.store.dispatch(action);
        }
        Ok(())
    }
}
