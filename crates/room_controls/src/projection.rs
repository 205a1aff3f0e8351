//! Derivation of discrete control states from a store snapshot.
//!
//! Nothing here is cached: every call recomputes from the snapshot it is
//! given, so the view always reflects the latest state reported by the
//! session layer.

use shared::{domain::Producer, state::StoreSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MicState {
    Unsupported,
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WebcamState {
    Unsupported,
    On,
    Off,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScreenState {
    NeedExtension,
    Unsupported,
    On,
    Off,
}

/// A missing mic producer projects to `Unsupported`, not `Off`.
pub fn project_mic(can_send_mic: bool, producer: Option<&Producer>) -> MicState {
    if !can_send_mic {
        return MicState::Unsupported;
    }
    match producer {
        None => MicState::Unsupported,
        Some(producer) if !producer.is_paused() => MicState::On,
        Some(_) => MicState::Off,
    }
}

/// Unlike the mic, a missing webcam producer is `Off`.
pub fn project_webcam(can_send_webcam: bool, producer: Option<&Producer>) -> WebcamState {
    if !can_send_webcam {
        return WebcamState::Unsupported;
    }
    match producer {
        Some(producer) if !producer.is_paused() => WebcamState::On,
        Some(_) | None => WebcamState::Off,
    }
}

pub fn project_screen(
    need_extension: bool,
    can_share_screen: bool,
    producer: Option<&Producer>,
) -> ScreenState {
    if need_extension {
        ScreenState::NeedExtension
    } else if !can_share_screen {
        ScreenState::Unsupported
    } else if producer.is_some() {
        ScreenState::On
    } else {
        ScreenState::Off
    }
}

/// Every discrete input the sidebar needs, projected from one snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SidebarState {
    pub mic: MicState,
    pub webcam: WebcamState,
    pub screen: ScreenState,
    pub screen_disabled: bool,
    pub locked: bool,
    pub toolbars_visible: bool,
}

impl SidebarState {
    pub fn project(snapshot: &StoreSnapshot) -> Self {
        let me = &snapshot.me;
        Self {
            mic: project_mic(me.can_send_mic, snapshot.mic_producer()),
            webcam: project_webcam(me.can_send_webcam, snapshot.webcam_producer()),
            screen: project_screen(
                me.need_extension,
                me.can_share_screen,
                snapshot.screen_producer(),
            ),
            screen_disabled: !me.can_share_screen || me.screen_share_in_progress,
            locked: snapshot.room.locked,
            toolbars_visible: snapshot.room.toolbars_visible,
        }
    }
}
