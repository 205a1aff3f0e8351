use super::run_clicks;

use std::sync::Arc;

use room_controls::{MicState, SidebarControl, SidebarState, Store};
use shared::{
    domain::{MediaSource, Me, Producer},
    protocol::RoomCommand,
    state::StoreSnapshot,
};

fn joined_store() -> Arc<Store> {
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
    Arc::new(Store::new(snapshot))
}

#[test]
fn each_click_sees_the_previous_command_applied() {
    let store = joined_store();

    let outcomes = run_clicks(
        &store,
        1,
        &[
            SidebarControl::Mic,
            SidebarControl::Mic,
            SidebarControl::Lock,
            SidebarControl::Lock,
        ],
    )
    .expect("run clicks");

    let commands: Vec<_> = outcomes.iter().map(|outcome| outcome.command).collect();
    assert_eq!(
        commands,
        vec![
            Some(RoomCommand::MuteMic),
            Some(RoomCommand::UnmuteMic),
            Some(RoomCommand::LockRoom),
            Some(RoomCommand::UnlockRoom),
        ]
    );

    let state = SidebarState::project(&store.snapshot());
    assert_eq!(state.mic, MicState::On);
    assert!(!state.locked);
}

#[test]
fn clicks_after_leaving_are_skipped() {
    let store = joined_store();

    let outcomes = run_clicks(
        &store,
        4,
        &[
            SidebarControl::Leave,
            SidebarControl::Lock,
            SidebarControl::Mic,
        ],
    )
    .expect("run clicks");

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].command, Some(RoomCommand::Close));
    assert_eq!(outcomes[1].control, SidebarControl::Lock);
    assert!(store.snapshot().producers.is_empty());
    assert!(!store.snapshot().room.locked);
}
