use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

id_newtype!(ProducerId);
id_newtype!(PeerId);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MediaSource {
    Mic,
    Webcam,
    Screen,
}

impl MediaSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mic => "mic",
            Self::Webcam => "webcam",
            Self::Screen => "screen",
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A local outbound media stream. Presence in the store means it is being sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Producer {
    pub id: ProducerId,
    pub source: MediaSource,
    #[serde(default)]
    pub locally_paused: bool,
    #[serde(default)]
    pub remotely_paused: bool,
}

impl Producer {
    pub fn new(id: impl Into<String>, source: MediaSource) -> Self {
        Self {
            id: ProducerId::new(id),
            source,
            locally_paused: false,
            remotely_paused: false,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.locally_paused || self.remotely_paused
    }
}

/// Capability and transient flags of the local participant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Me {
    pub peer_id: Option<PeerId>,
    pub display_name: Option<String>,
    pub can_send_mic: bool,
    pub can_send_webcam: bool,
    pub can_share_screen: bool,
    pub need_extension: bool,
    pub screen_share_in_progress: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoomInfo {
    pub locked: bool,
    pub toolbars_visible: bool,
}

impl Default for RoomInfo {
    fn default() -> Self {
        Self {
            locked: false,
            toolbars_visible: true,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToolAreaInfo {
    pub tool_area_open: bool,
    pub unread: u32,
}

impl ToolAreaInfo {
    pub fn has_unread(&self) -> bool {
        self.unread > 0
    }
}
