use crate::error::ApiError;
use crate::model::enums::EnumGroups;
use crate::model::item::{Item, ItemId, ListPage};
use crate::screen::modal_stack::{ModalLevel, ModalTarget};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    ListLoaded {
        generation: u64,
        page: u32,
        result: Result<ListPage, ApiError>,
    },
    RelatedLoaded {
        target: ModalTarget,
        field: String,
        resource: String,
        result: Result<ListPage, ApiError>,
    },
    EnumsLoaded {
        target: ModalTarget,
        result: Result<EnumGroups, ApiError>,
    },
    GoToPage(u32),
    OpenCreate,
    Edit(ItemId),
    Delete(ItemId),
    DeleteConfirmed(ItemId),
    Deleted {
        id: ItemId,
        result: Result<(), ApiError>,
    },
    Input {
        level: ModalLevel,
        field: String,
        value: String,
    },
    Toggle {
        level: ModalLevel,
        field: String,
        checked: bool,
    },
    ForeignKeyInput {
        level: ModalLevel,
        field: String,
        text: String,
    },
    Submit(ModalLevel),
    AdminChallengeResolved(bool),
    Created {
        target: ModalTarget,
        resource: String,
        result: Result<Item, ApiError>,
    },
    Updated {
        id: ItemId,
        result: Result<(), ApiError>,
    },
    /// "Create related" trigger of `field` in the form at `origin`.
    OpenRelated {
        origin: ModalLevel,
        field: String,
    },
    Cancel(ModalLevel),
}
