//! Generic CRUD screen: a UI-agnostic controller fed with messages that
//! answers with effects for the host to perform.

pub mod effects;
pub mod messages;
pub mod modal_stack;
pub mod related_cache;
pub mod state;
mod update;

#[cfg(test)]
mod tests;

use std::rc::Rc;

use log::{debug, info};

pub use effects::{Effect, RELATED_PAGE_SIZE};
pub use messages::Msg;
pub use modal_stack::{ModalLevel, ModalStack, ModalTarget, NestedModal};
pub use related_cache::RelatedCache;
pub use state::{
    CrudScreen, MainModal, PageControl, Submission, TableState, ACCESS_DENIED_MESSAGE,
    ADMIN_REQUIRED_MESSAGE,
};

use crate::form::FormState;
use crate::model::permissions::PermissionDescriptor;
use crate::model::resource::ResourceDescriptor;
use crate::naming;
use crate::registry::ResourceRegistry;
use crate::template::PageTemplate;

/// A resource page before it is mounted: its descriptor and generated markup.
#[derive(Debug, Clone, PartialEq)]
pub struct CrudPage {
    pub template: Rc<PageTemplate>,
    descriptor: Rc<ResourceDescriptor>,
}

impl CrudPage {
    pub fn new(descriptor: Rc<ResourceDescriptor>) -> Self {
        Self {
            template: Rc::new(PageTemplate::from_descriptor(&descriptor)),
            descriptor,
        }
    }

    /// Mounts the screen under `permissions`.
    ///
    /// Without access the screen only carries the denial message and nothing
    /// is fetched. Otherwise the first list page, the suggestion lists of
    /// every foreign key, and the enumeration groups are requested.
    pub fn setup(
        &self,
        permissions: PermissionDescriptor,
        registry: Rc<ResourceRegistry>,
    ) -> (CrudScreen, Vec<Effect>) {
        let denied = permissions.no_access;
        let mut screen = CrudScreen {
            descriptor: self.descriptor.clone(),
            registry,
            template: self.template.clone(),
            permissions: permissions.effective(),
            denied,
            error: denied.then(|| ACCESS_DENIED_MESSAGE.to_string()),
            table: TableState::default(),
            list_generation: 0,
            main: MainModal {
                open: false,
                form: FormState::new(self.descriptor.visible_fields()),
                error: None,
                editing: None,
                submission: Submission::Idle,
            },
            stack: ModalStack::default(),
            related: RelatedCache::default(),
            enums: None,
        };

        if denied {
            info!("acceso denegado a {}", self.descriptor.resource);
            return (screen, Vec::new());
        }

        let mut effects = screen.reload(1);
        for field in screen.main.form.foreign_keys() {
            effects.push(Effect::FetchRelated {
                target: ModalTarget::ROOT,
                field: field.name.clone(),
                resource: naming::related_resource_name(&field.name),
                page_size: RELATED_PAGE_SIZE,
            });
        }
        effects.push(Effect::FetchEnums {
            target: ModalTarget::ROOT,
        });
        debug!(
            "{} montado con {} peticiones iniciales",
            self.descriptor.resource,
            effects.len()
        );
        (screen, effects)
    }
}
