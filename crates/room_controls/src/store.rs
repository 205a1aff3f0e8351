//! Single-writer client store with snapshot subscription.

use shared::{protocol::StateAction, state::StoreSnapshot};
use tokio::sync::watch;
use tracing::debug;

pub trait ActionDispatcher: Send + Sync {
    fn dispatch(&self, action: StateAction);
}

/// Applies `action` to `state` in place.
pub fn reduce(state: &mut StoreSnapshot, action: StateAction) {
    match action {
        StateAction::ToggleToolArea => {
            state.toolarea.tool_area_open = !state.toolarea.tool_area_open;
            if state.toolarea.tool_area_open {
                state.toolarea.unread = 0;
            }
        }
        StateAction::OpenToolArea => {
            state.toolarea.tool_area_open = true;
            state.toolarea.unread = 0;
        }
        StateAction::CloseToolArea => state.toolarea.tool_area_open = false,
        StateAction::AddUnread => {
            // Messages arriving while the area is open are read on arrival.
            if !state.toolarea.tool_area_open {
                state.toolarea.unread = state.toolarea.unread.saturating_add(1);
            }
        }
        StateAction::ResetUnread => state.toolarea.unread = 0,
        StateAction::SetToolbarsVisible { visible } => state.room.toolbars_visible = visible,
        StateAction::SetRoomLocked { locked } => state.room.locked = locked,
        StateAction::SetMe(me) => state.me = me,
        StateAction::SetNeedExtension { need_extension } => state.me.need_extension = need_extension,
        StateAction::SetScreenShareInProgress { in_progress } => {
            state.me.screen_share_in_progress = in_progress
        }
        StateAction::AddProducer(producer) => {
            let source = producer.source;
            let before = state.producers.len();
            state
                .producers
                .retain(|id, existing| existing.source != source || *id == producer.id);
            if state.producers.len() != before {
                debug!(%source, producer_id = %producer.id, "replacing stale producer for source");
            }
            state.producers.insert(producer.id.clone(), producer);
        }
        StateAction::RemoveProducer { producer_id } => {
            if state.producers.remove(&producer_id).is_none() {
                debug!(%producer_id, "remove for unknown producer ignored");
            }
        }
        StateAction::SetProducerPaused {
            producer_id,
            locally_paused,
        } => match state.producers.get_mut(&producer_id) {
            Some(producer) => producer.locally_paused = locally_paused,
            None => debug!(%producer_id, "pause for unknown producer ignored"),
        },
        StateAction::SetProducerRemotelyPaused {
            producer_id,
            remotely_paused,
        } => match state.producers.get_mut(&producer_id) {
            Some(producer) => producer.remotely_paused = remotely_paused,
            None => debug!(%producer_id, "remote pause for unknown producer ignored"),
        },
    }
}

pub struct Store {
    tx: watch::Sender<StoreSnapshot>,
}

impl Store {
    pub fn new(initial: StoreSnapshot) -> Self {
        let (tx, _rx) = watch::channel(initial);
        Self { tx }
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<StoreSnapshot> {
        self.tx.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreSnapshot::default())
    }
}

impl ActionDispatcher for Store {
    fn dispatch(&self, action: StateAction) {
        debug!(action = action.name(), "store action");
        self.tx.send_modify(|state| reduce(state, action));
    }
}
