//! Click routing from sidebar controls to room commands.

use std::{fmt, str::FromStr};

use serde::Serialize;
use shared::{
    error::StateError,
    protocol::{RoomCommand, StateAction},
    state::StoreSnapshot,
};
use tracing::debug;

use crate::{
    projection::{MicState, ScreenState, SidebarState, WebcamState},
    room_client::{invoke, RoomClient},
    store::ActionDispatcher,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarControl {
    Mic,
    Webcam,
    Screen,
    Lock,
    Leave,
}

impl SidebarControl {
    /// Render order, top to bottom (or left to right on small screens).
    pub const ALL: [SidebarControl; 5] = [
        SidebarControl::Mic,
        SidebarControl::Webcam,
        SidebarControl::Screen,
        SidebarControl::Lock,
        SidebarControl::Leave,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Mic => "mic",
            Self::Webcam => "webcam",
            Self::Screen => "screen",
            Self::Lock => "lock",
            Self::Leave => "leave",
        }
    }

    pub fn aria_label(self) -> &'static str {
        match self {
            Self::Mic => "Mute mic",
            Self::Webcam => "Mute video",
            Self::Screen => "Share screen",
            Self::Lock => "Room lock",
            Self::Leave => "Leave meeting",
        }
    }
}

impl fmt::Display for SidebarControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SidebarControl {
    type Err = StateError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let normalized = raw.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "mic" | "microphone" => Ok(Self::Mic),
            "webcam" | "video" | "camera" => Ok(Self::Webcam),
            "screen" | "screenshare" | "screen_share" => Ok(Self::Screen),
            "lock" => Ok(Self::Lock),
            "leave" | "close" => Ok(Self::Leave),
            _ => Err(StateError::UnknownControl(raw.to_string())),
        }
    }
}

impl SidebarState {
    /// The single command a click on `control` should issue, if any.
    ///
    /// A disabled screen control never dispatches; an enabled one in the
    /// `Unsupported` state is a no-op.
    pub fn command_for(&self, control: SidebarControl) -> Option<RoomCommand> {
        match control {
            SidebarControl::Mic => Some(match self.mic {
                MicState::On => RoomCommand::MuteMic,
                MicState::Off | MicState::Unsupported => RoomCommand::UnmuteMic,
            }),
            SidebarControl::Webcam => Some(match self.webcam {
                WebcamState::On => RoomCommand::DisableWebcam,
                WebcamState::Off | WebcamState::Unsupported => RoomCommand::EnableWebcam,
            }),
            SidebarControl::Screen => {
                if self.screen_disabled {
                    return None;
                }
                match self.screen {
                    ScreenState::On => Some(RoomCommand::DisableScreenSharing),
                    ScreenState::Off => Some(RoomCommand::EnableScreenSharing),
                    ScreenState::NeedExtension => Some(RoomCommand::InstallExtension),
                    ScreenState::Unsupported => None,
                }
            }
            SidebarControl::Lock => Some(if self.locked {
                RoomCommand::UnlockRoom
            } else {
                RoomCommand::LockRoom
            }),
            SidebarControl::Leave => Some(RoomCommand::Close),
        }
    }
}

/// Routes sidebar clicks to an injected [`RoomClient`].
pub struct SidebarController<C> {
    client: C,
}

impl<C: RoomClient> SidebarController<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Issues at most one command. Local state is left untouched; the new
    /// control state shows up once the session layer updates the store.
    pub fn click(&self, snapshot: &StoreSnapshot, control: SidebarControl) -> Option<RoomCommand> {
        let state = SidebarState::project(snapshot);
        let Some(command) = state.command_for(control) else {
            debug!(control = control.name(), "sidebar click has no command in current state");
            return None;
        };

        debug!(
            control = control.name(),
            command = command.name(),
            "dispatching sidebar command"
        );
        invoke(&self.client, command);
        Some(command)
    }
}

/// The tool-area button only flips the tool area open flag in the store.
pub fn click_tool_area_button<D>(dispatcher: &D)
where
    D: ActionDispatcher + ?Sized,
{
    dispatcher.dispatch(StateAction::ToggleToolArea);
}
