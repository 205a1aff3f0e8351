//! Command surface of the room session as seen from the sidebar.

use std::sync::Arc;

use shared::protocol::RoomCommand;

/// Fire-and-forget room commands. Implementations must not block the caller
/// on command completion; results come back as new store snapshots.
pub trait RoomClient: Send + Sync {
    fn mute_mic(&self);
    fn unmute_mic(&self);
    fn enable_webcam(&self);
    fn disable_webcam(&self);
    fn enable_screen_sharing(&self);
    fn disable_screen_sharing(&self);
    fn install_extension(&self);
    fn lock_room(&self);
    fn unlock_room(&self);
    fn close(&self);
}

impl<T> RoomClient for Arc<T>
where
    T: RoomClient + ?Sized,
{
    fn mute_mic(&self) {
        (**self).mute_mic()
    }

    fn unmute_mic(&self) {
        (**self).unmute_mic()
    }

    fn enable_webcam(&self) {
        (**self).enable_webcam()
    }

    fn disable_webcam(&self) {
        (**self).disable_webcam()
    }

    fn enable_screen_sharing(&self) {
        (**self).enable_screen_sharing()
    }

    fn disable_screen_sharing(&self) {
        (**self).disable_screen_sharing()
    }

    fn install_extension(&self) {
        (**self).install_extension()
    }

    fn lock_room(&self) {
        (**self).lock_room()
    }

    fn unlock_room(&self) {
        (**self).unlock_room()
    }

    fn close(&self) {
        (**self).close()
    }
}

/// Calls the `RoomClient` method matching `command`.
pub fn invoke<C>(client: &C, command: RoomCommand)
where
    C: RoomClient + ?Sized,
{
    match command {
        RoomCommand::MuteMic => client.mute_mic(),
        RoomCommand::UnmuteMic => client.unmute_mic(),
        RoomCommand::EnableWebcam => client.enable_webcam(),
        RoomCommand::DisableWebcam => client.disable_webcam(),
        RoomCommand::EnableScreenSharing => client.enable_screen_sharing(),
        RoomCommand::DisableScreenSharing => client.disable_screen_sharing(),
        RoomCommand::InstallExtension => client.install_extension(),
        RoomCommand::LockRoom => client.lock_room(),
        RoomCommand::UnlockRoom => client.unlock_room(),
        RoomCommand::Close => client.close(),
    }
}
