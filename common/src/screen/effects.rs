use crate::model::item::{ItemId, Payload};
use crate::screen::modal_stack::ModalTarget;

/// Page size used to fetch foreign-key suggestion lists.
pub const RELATED_PAGE_SIZE: u32 = 1000;

/// Side effects requested by the controller. The host performs them and
/// feeds the outcome back as a [`Msg`](crate::screen::Msg).
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Answered by `Msg::ListLoaded` carrying the same generation.
    FetchList {
        resource: String,
        page: u32,
        page_size: u32,
        generation: u64,
    },
    /// Answered by `Msg::RelatedLoaded`.
    FetchRelated {
        target: ModalTarget,
        field: String,
        resource: String,
        page_size: u32,
    },
    /// Answered by `Msg::EnumsLoaded`.
    FetchEnums { target: ModalTarget },
    /// Answered by `Msg::Created`.
    Create {
        target: ModalTarget,
        resource: String,
        payload: Payload,
    },
    /// Answered by `Msg::Updated`.
    Update {
        resource: String,
        id: ItemId,
        payload: Payload,
    },
    /// Answered by `Msg::Deleted`.
    Delete { resource: String, id: ItemId },
    /// Ask the user; answered by `Msg::DeleteConfirmed` only on acceptance.
    ConfirmDelete { id: ItemId },
    /// Secondary administrator challenge; answered by
    /// `Msg::AdminChallengeResolved`.
    ChallengeAdmin,
    /// Blocking message for configuration errors.
    Alert(String),
}
