use crate::error::HookError;
use crate::model::item::{Item, ItemId, Payload};
use crate::model::permissions::RowPermissions;

/// Per-resource customization of the save pipeline and row controls.
///
/// Every method has a pass-through default, so an implementation only
/// overrides what its resource needs.
pub trait ResourceHooks {
    /// Runs before a create request. Returning an error aborts the save and
    /// the message is shown in the form.
    fn before_create(&self, _payload: &mut Payload) -> Result<(), HookError> {
        Ok(())
    }

    fn after_create(&self, _payload: &Payload) {}

    /// Runs before an update request (and before any admin confirmation).
    fn before_update(&self, _payload: &mut Payload, _id: ItemId) -> Result<(), HookError> {
        Ok(())
    }

    fn after_update(&self, _payload: &Payload, _id: ItemId) {}

    /// Controls available on one row, starting from the screen-level flags.
    fn row_permissions(&self, _item: &Item, screen: RowPermissions) -> RowPermissions {
        screen
    }
}
