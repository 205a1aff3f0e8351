//! Sidebar and tool-area controls of the room view: state projection, click
//! routing and the command queue towards the room session.

pub mod dispatcher;
pub mod loopback;
pub mod projection;
pub mod queue;
pub mod room_client;
pub mod store;
pub mod view;

pub use dispatcher::{click_tool_area_button, SidebarControl, SidebarController};
pub use loopback::LoopbackRoomSession;
pub use projection::{MicState, ScreenState, SidebarState, WebcamState};
pub use queue::{spawn_command_worker, QueueError, QueuedRoomClient, RoomSession};
pub use room_client::RoomClient;
pub use store::{ActionDispatcher, Store};
pub use view::{SidebarView, ToolAreaButtonView, Viewport};

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
