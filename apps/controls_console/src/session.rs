use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use crossbeam_channel::{unbounded, Receiver, Sender};
use room_controls::{
    spawn_command_worker, LoopbackRoomSession, QueuedRoomClient, RoomSession, SidebarControl,
    SidebarController, Store,
};
use shared::protocol::RoomCommand;
use tracing::{info, warn};

/// Reports every executed command, whatever its outcome, so the console can
/// wait for the session before projecting the next click.
struct AckingSession<S> {
    inner: S,
    acks: Sender<RoomCommand>,
}

#[async_trait]
impl<S: RoomSession> RoomSession for AckingSession<S> {
    async fn execute(&self, command: RoomCommand) -> Result<()> {
        let outcome = self.inner.execute(command).await;
        let _ = self.acks.send(command);
        outcome
    }
}

pub struct ClickOutcome {
    pub control: SidebarControl,
    pub command: Option<RoomCommand>,
}

/// Runs `controls` in order against one loopback session and command worker.
/// Each click is projected from the store as left by the previous command.
pub fn run_clicks(
    store: &Arc<Store>,
    queue_capacity: usize,
    controls: &[SidebarControl],
) -> Result<Vec<ClickOutcome>> {
    let (client, cmd_rx) = QueuedRoomClient::bounded(queue_capacity);
    let (ack_tx, ack_rx): (Sender<RoomCommand>, Receiver<RoomCommand>) = unbounded();
    let session = Arc::new(AckingSession {
        inner: LoopbackRoomSession::new(store.clone()),
        acks: ack_tx,
    });
    let worker =
        spawn_command_worker(cmd_rx, session).context("failed to spawn room command worker")?;
    let controller = SidebarController::new(client);

    let mut outcomes = Vec::with_capacity(controls.len());
    for &control in controls {
        let command = controller.click(&store.snapshot(), control);
        outcomes.push(ClickOutcome { control, command });
        if command.is_some() && ack_rx.recv().is_err() {
            warn!(control = control.name(), "room command worker stopped; remaining clicks skipped");
            break;
        }
    }

    drop(controller);
    worker
        .join()
        .map_err(|_| anyhow!("room command worker panicked"))?;
    info!(clicks = outcomes.len(), "clicks applied");
    Ok(outcomes)
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
