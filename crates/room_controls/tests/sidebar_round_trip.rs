use std::{sync::Arc, time::Duration};

use room_controls::{
    spawn_command_worker, view::Icon, ActionDispatcher, LoopbackRoomSession, MicState,
    QueuedRoomClient, ScreenState, SidebarControl, SidebarController, SidebarState, SidebarView,
    Store, Viewport, WebcamState,
};
use shared::{
    domain::{MediaSource, Me, Producer},
    protocol::StateAction,
    state::StoreSnapshot,
};

fn joined_snapshot() -> StoreSnapshot {
    let mut snapshot = StoreSnapshot {
        me: Me {
            can_send_mic: true,
            can_send_webcam: true,
            can_share_screen: true,
            ..Me::default()
        },
        ..StoreSnapshot::default()
    };
    let mic = Producer::new("mic-0", MediaSource::Mic);
    snapshot.producers.insert(mic.id.clone(), mic);
    snapshot
}

#[tokio::test]
async fn clicks_round_trip_through_queue_worker_and_store() {
    let store = Arc::new(Store::new(joined_snapshot()));
    let mut updates = store.subscribe();
    let session = Arc::new(LoopbackRoomSession::new(store.clone()));

    let (client, cmd_rx) = QueuedRoomClient::bounded(16);
    let worker = spawn_command_worker(cmd_rx, session).expect("spawn worker");
    let controller = SidebarController::new(client);

    let before = SidebarState::project(&store.snapshot());
    assert_eq!(before.mic, MicState::On);
    assert_eq!(before.webcam, WebcamState::Off);
    assert_eq!(before.screen, ScreenState::Off);

    controller.click(&store.snapshot(), SidebarControl::Mic);
    tokio::time::timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("mute applied in time")
        .expect("store alive");
    assert_eq!(SidebarState::project(&store.snapshot()).mic, MicState::Off);

    controller.click(&store.snapshot(), SidebarControl::Webcam);
    tokio::time::timeout(Duration::from_secs(5), updates.changed())
        .await
        .expect("webcam applied in time")
        .expect("store alive");
    let view = SidebarView::project(&store.snapshot(), Viewport::new(1280));
    assert_eq!(
        view.control(SidebarControl::Webcam).expect("webcam").icon,
        Icon::Videocam
    );

    controller.click(&store.snapshot(), SidebarControl::Leave);
    tokio::task::spawn_blocking(move || worker.join())
        .await
        .expect("join task")
        .expect("worker thread");

    assert!(store.snapshot().producers.is_empty());
}

#[test]
fn session_updates_reach_projection_without_clicks() {
    let store = Store::new(joined_snapshot());
    store.dispatch(StateAction::SetNeedExtension {
        need_extension: true,
    });
    store.dispatch(StateAction::SetRoomLocked { locked: true });

    let state = SidebarState::project(&store.snapshot());
    assert_eq!(state.screen, ScreenState::NeedExtension);
    assert!(state.locked);
}
