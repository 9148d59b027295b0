//! Runtime state of one CRUD screen and the read-only queries the view uses.

use std::rc::Rc;

use crate::form::FormState;
use crate::model::item::{Item, ItemId, Payload};
use crate::model::permissions::{EffectivePermissions, RowPermissions};
use crate::model::resource::ResourceDescriptor;
use crate::model::enums::EnumGroups;
use crate::registry::ResourceRegistry;
use crate::screen::modal_stack::ModalStack;
use crate::screen::related_cache::RelatedCache;
use crate::template::PageTemplate;

pub const ACCESS_DENIED_MESSAGE: &str = "No tiene permisos para acceder a este recurso";
pub const ADMIN_REQUIRED_MESSAGE: &str =
    "Se requiere la confirmación de un administrador para guardar los cambios";

/// Rows of the current page as last received from the backend.
#[derive(Debug, Clone, Default)]
pub struct TableState {
    pub items: Vec<Item>,
    pub page: u32,
    pub total_pages: u32,
    /// `false` until the first successful list response.
    pub loaded: bool,
}

/// One button of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageControl {
    pub page: u32,
    pub disabled: bool,
}

/// Save pipeline of the level-0 modal.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Submission {
    #[default]
    Idle,
    /// Waiting for the administrator challenge before sending the update.
    AwaitingAdmin { id: ItemId, payload: Payload },
    /// Request sent. `editing` is the record being updated (`None` for a
    /// create) and picks the `after_*` hook once the response arrives.
    InFlight {
        editing: Option<ItemId>,
        payload: Payload,
    },
}

/// The screen's own create/edit modal.
#[derive(Debug, Clone)]
pub struct MainModal {
    pub open: bool,
    pub form: FormState,
    pub error: Option<String>,
    /// Id of the record being edited; `None` while creating.
    pub editing: Option<ItemId>,
    pub submission: Submission,
}

impl MainModal {
    pub fn is_busy(&self) -> bool {
        self.submission != Submission::Idle
    }
}

/// Controller of one resource screen.
///
/// Built by [`CrudPage::setup`](crate::screen::CrudPage::setup); driven by
/// [`CrudScreen::update`].
#[derive(Debug, Clone)]
pub struct CrudScreen {
    pub(crate) descriptor: Rc<ResourceDescriptor>,
    pub(crate) registry: Rc<ResourceRegistry>,
    pub(crate) template: Rc<PageTemplate>,
    pub(crate) permissions: EffectivePermissions,
    pub(crate) denied: bool,
    pub(crate) error: Option<String>,
    pub(crate) table: TableState,
    pub(crate) list_generation: u64,
    pub(crate) main: MainModal,
    pub(crate) stack: ModalStack,
    pub(crate) related: RelatedCache,
    pub(crate) enums: Option<EnumGroups>,
}

impl CrudScreen {
    pub fn descriptor(&self) -> &ResourceDescriptor {
        &self.descriptor
    }

    pub fn template(&self) -> &PageTemplate {
        &self.template
    }

    pub fn registry(&self) -> &ResourceRegistry {
        &self.registry
    }

    pub fn is_denied(&self) -> bool {
        self.denied
    }

    /// Message of the screen error slot.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn permissions(&self) -> EffectivePermissions {
        self.permissions
    }

    pub fn can_create(&self) -> bool {
        !self.denied && self.permissions.can_create
    }

    pub fn table(&self) -> &TableState {
        &self.table
    }

    pub fn main_modal(&self) -> &MainModal {
        &self.main
    }

    pub fn modal_stack(&self) -> &ModalStack {
        &self.stack
    }

    pub fn related_cache(&self) -> &RelatedCache {
        &self.related
    }

    pub fn enums(&self) -> Option<&EnumGroups> {
        self.enums.as_ref()
    }

    /// Edit/delete controls for one row: screen flags refined by the
    /// resource's row hook.
    pub fn row_permissions(&self, item: &Item) -> RowPermissions {
        let screen = self.permissions.row();
        match &self.descriptor.hooks {
            Some(hooks) => hooks.row_permissions(item, screen),
            None => screen,
        }
    }

    /// One control per page, the current one disabled; empty for a single page.
    pub fn pagination(&self) -> Vec<PageControl> {
        if self.table.total_pages <= 1 {
            return Vec::new();
        }
        (1..=self.table.total_pages)
            .map(|page| PageControl {
                page,
                disabled: page == self.table.page,
            })
            .collect()
    }

    pub(crate) fn item(&self, id: ItemId) -> Option<&Item> {
        self.table.items.iter().find(|item| item.id() == Some(id))
    }
}
