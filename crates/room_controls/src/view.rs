//! Render model for the sidebar and the tool-area button.

use serde::Serialize;
use shared::state::StoreSnapshot;

use crate::{
    dispatcher::SidebarControl,
    projection::{MicState, ScreenState, SidebarState, WebcamState},
};

/// Width below which the sidebar switches to the compact bottom row.
pub const DEFAULT_SMALL_SCREEN_BREAKPOINT_PX: u32 = 960;

pub const TOOL_AREA_TOOLTIP: &str = "Toggle tool area";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Icon {
    Mic,
    MicOff,
    Videocam,
    VideocamOff,
    ScreenShare,
    StopScreenShare,
    Extension,
    Lock,
    LockOpen,
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FabColor {
    Default,
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FabSize {
    Medium,
    Large,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Column,
    Row,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width_px: u32,
    pub small_screen_breakpoint_px: u32,
}

impl Viewport {
    pub fn new(width_px: u32) -> Self {
        Self {
            width_px,
            small_screen_breakpoint_px: DEFAULT_SMALL_SCREEN_BREAKPOINT_PX,
        }
    }

    pub fn with_breakpoint(mut self, small_screen_breakpoint_px: u32) -> Self {
        self.small_screen_breakpoint_px = small_screen_breakpoint_px;
        self
    }

    pub fn is_small_screen(&self) -> bool {
        self.width_px < self.small_screen_breakpoint_px
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlView {
    pub control: SidebarControl,
    pub aria_label: &'static str,
    pub icon: Icon,
    pub color: FabColor,
    pub size: FabSize,
    pub disabled: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SidebarView {
    pub visible: bool,
    pub orientation: Orientation,
    pub controls: Vec<ControlView>,
}

impl SidebarView {
    pub fn project(snapshot: &StoreSnapshot, viewport: Viewport) -> Self {
        Self::from_state(&SidebarState::project(snapshot), viewport)
    }

    pub fn from_state(state: &SidebarState, viewport: Viewport) -> Self {
        let small = viewport.is_small_screen();
        let size = if small { FabSize::Large } else { FabSize::Medium };
        let controls = SidebarControl::ALL
            .iter()
            .map(|&control| control_view(state, control, size))
            .collect();

        Self {
            visible: state.toolbars_visible,
            orientation: if small {
                Orientation::Row
            } else {
                Orientation::Column
            },
            controls,
        }
    }

    pub fn control(&self, control: SidebarControl) -> Option<&ControlView> {
        self.controls.iter().find(|view| view.control == control)
    }
}

fn control_view(state: &SidebarState, control: SidebarControl, size: FabSize) -> ControlView {
    let (icon, color, disabled) = match control {
        SidebarControl::Mic => match state.mic {
            MicState::On => (Icon::Mic, FabColor::Default, false),
            MicState::Off | MicState::Unsupported => (Icon::MicOff, FabColor::Secondary, false),
        },
        SidebarControl::Webcam => match state.webcam {
            WebcamState::On => (Icon::Videocam, FabColor::Default, false),
            WebcamState::Off | WebcamState::Unsupported => {
                (Icon::VideocamOff, FabColor::Secondary, false)
            }
        },
        SidebarControl::Screen => {
            let (icon, color) = match state.screen {
                ScreenState::On => (Icon::StopScreenShare, FabColor::Primary),
                ScreenState::Unsupported => (Icon::StopScreenShare, FabColor::Default),
                ScreenState::Off => (Icon::ScreenShare, FabColor::Default),
                ScreenState::NeedExtension => (Icon::Extension, FabColor::Default),
            };
            (icon, color, state.screen_disabled)
        }
        SidebarControl::Lock => {
            if state.locked {
                (Icon::Lock, FabColor::Primary, false)
            } else {
                (Icon::LockOpen, FabColor::Default, false)
            }
        }
        SidebarControl::Leave => (Icon::Leave, FabColor::Secondary, false),
    };

    ControlView {
        control,
        aria_label: control.aria_label(),
        icon,
        color,
        size,
        disabled,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolAreaButtonView {
    pub open: bool,
    pub unread: bool,
    pub tooltip: &'static str,
}

impl ToolAreaButtonView {
    pub fn project(snapshot: &StoreSnapshot) -> Self {
        Self {
            open: snapshot.toolarea.tool_area_open,
            unread: snapshot.toolarea.has_unread(),
            tooltip: TOOL_AREA_TOOLTIP,
        }
    }
}
