use serde::{Deserialize, Serialize};

use crate::domain::{Me, Producer, ProducerId};

/// Commands issued towards the room session. None of them carry a reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomCommand {
    MuteMic,
    UnmuteMic,
    EnableWebcam,
    DisableWebcam,
    EnableScreenSharing,
    DisableScreenSharing,
    InstallExtension,
    LockRoom,
    UnlockRoom,
    Close,
}

impl RoomCommand {
    pub fn name(self) -> &'static str {
        match self {
            Self::MuteMic => "mute_mic",
            Self::UnmuteMic => "unmute_mic",
            Self::EnableWebcam => "enable_webcam",
            Self::DisableWebcam => "disable_webcam",
            Self::EnableScreenSharing => "enable_screen_sharing",
            Self::DisableScreenSharing => "disable_screen_sharing",
            Self::InstallExtension => "install_extension",
            Self::LockRoom => "lock_room",
            Self::UnlockRoom => "unlock_room",
            Self::Close => "close",
        }
    }
}

/// Mutations accepted by the client store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum StateAction {
    ToggleToolArea,
    OpenToolArea,
    CloseToolArea,
    AddUnread,
    ResetUnread,
    SetToolbarsVisible {
        visible: bool,
    },
    SetRoomLocked {
        locked: bool,
    },
    SetMe(Me),
    SetNeedExtension {
        need_extension: bool,
    },
    SetScreenShareInProgress {
        in_progress: bool,
    },
    AddProducer(Producer),
    RemoveProducer {
        producer_id: ProducerId,
    },
    SetProducerPaused {
        producer_id: ProducerId,
        locally_paused: bool,
    },
    SetProducerRemotelyPaused {
        producer_id: ProducerId,
        remotely_paused: bool,
    },
}

impl StateAction {
    pub fn name(&self) -> &'static str {
        match self {
            Self::ToggleToolArea => "toggle_tool_area",
            Self::OpenToolArea => "open_tool_area",
            Self::CloseToolArea => "close_tool_area",
            Self::AddUnread => "add_unread",
            Self::ResetUnread => "reset_unread",
            Self::SetToolbarsVisible { .. } => "set_toolbars_visible",
            Self::SetRoomLocked { .. } => "set_room_locked",
            Self::SetMe(_) => "set_me",
            Self::SetNeedExtension { .. } => "set_need_extension",
            Self::SetScreenShareInProgress { .. } => "set_screen_share_in_progress",
            Self::AddProducer(_) => "add_producer",
            Self::RemoveProducer { .. } => "remove_producer",
            Self::SetProducerPaused { .. } => "set_producer_paused",
            Self::SetProducerRemotelyPaused { .. } => "set_producer_remotely_paused",
        }
    }
}
