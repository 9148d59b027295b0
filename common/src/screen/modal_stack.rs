//! Stack of nested "create related" modals (levels ≥ 1).
//!
//! Each level holds at most one modal. Removing a level leaves every other
//! level in place. Every opened modal gets a fresh instance number so that
//! responses addressed to a closed modal are recognised and dropped.

use std::collections::BTreeMap;
use std::rc::Rc;

use crate::form::FormState;
use crate::model::item::Payload;
use crate::model::resource::ResourceDescriptor;

/// Nesting depth of a modal; 0 is the screen's own create/edit modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ModalLevel(pub u32);

impl ModalLevel {
    pub const ROOT: ModalLevel = ModalLevel(0);

    pub fn next(self) -> Self {
        Self(self.0 + 1)
    }

    pub fn is_root(self) -> bool {
        self.0 == 0
    }

    /// Stacking order: higher levels always render above lower ones.
    pub fn z_index(self) -> u32 {
        if self.is_root() {
            1000
        } else {
            10_000 + self.0 * 10
        }
    }
}

/// Address of one specific opened modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalTarget {
    pub level: ModalLevel,
    pub instance: u64,
}

impl ModalTarget {
    pub const ROOT: ModalTarget = ModalTarget {
        level: ModalLevel::ROOT,
        instance: 0,
    };
}

#[derive(Debug, Clone)]
pub struct NestedModal {
    pub instance: u64,
    pub descriptor: Rc<ResourceDescriptor>,
    pub form: FormState,
    pub error: Option<String>,
    /// Field of the form one level below that receives the created record.
    pub origin_field: String,
    /// Payload of the create request in flight; submit is disabled meanwhile.
    pub pending: Option<Payload>,
}

impl NestedModal {
    pub fn title(&self) -> &str {
        &self.descriptor.title
    }

    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModalStack {
    modals: BTreeMap<ModalLevel, NestedModal>,
    next_instance: u64,
}

impl ModalStack {
    /// Opens a modal for `descriptor` at `level`, replacing whatever was there.
    pub fn open(
        &mut self,
        level: ModalLevel,
        descriptor: Rc<ResourceDescriptor>,
        origin_field: &str,
    ) -> ModalTarget {
        self.next_instance += 1;
        let instance = self.next_instance;
        let form = FormState::new(descriptor.quick_create_fields());
        self.modals.insert(
            level,
            NestedModal {
                instance,
                descriptor,
                form,
                error: None,
                origin_field: origin_field.to_string(),
                pending: None,
            },
        );
        ModalTarget { level, instance }
    }

    pub fn close(&mut self, level: ModalLevel) -> Option<NestedModal> {
        self.modals.remove(&level)
    }

    /// Closes every level. Instance numbers keep increasing.
    pub fn close_all(&mut self) {
        self.modals.clear();
    }

    pub fn get(&self, level: ModalLevel) -> Option<&NestedModal> {
        self.modals.get(&level)
    }

    pub fn get_mut(&mut self, level: ModalLevel) -> Option<&mut NestedModal> {
        self.modals.get_mut(&level)
    }

    /// The modal at `target.level`, only if it is still the same instance.
    pub fn target_mut(&mut self, target: ModalTarget) -> Option<&mut NestedModal> {
        self.modals
            .get_mut(&target.level)
            .filter(|m| m.instance == target.instance)
    }

    /// Open modals from the lowest to the highest level.
    pub fn iter(&self) -> impl Iterator<Item = (ModalLevel, &NestedModal)> {
        self.modals.iter().map(|(level, modal)| (*level, modal))
    }

    pub fn len(&self) -> usize {
        self.modals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modals.is_empty()
    }
}
