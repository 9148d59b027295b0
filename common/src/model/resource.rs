use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use crate::error::DescriptorError;
use crate::hooks::ResourceHooks;
use crate::model::field::FieldDescriptor;

pub const DEFAULT_PAGE_SIZE: u32 = 50;

/// Audit timestamp written by the backend; never part of a form or table.
pub const AUDIT_FIELD: &str = "created_at";

/// Fields the backend fills in itself, per resource. They are kept in the
/// descriptor for completeness but never rendered.
const SUPPRESSED_FIELDS: &[(&str, &str)] = &[("productos", "codigo")];

/// Static configuration of one CRUD screen.
#[derive(Clone)]
pub struct ResourceDescriptor {
    pub title: String,
    pub resource: String,
    pub fields: Vec<FieldDescriptor>,
    pub page_size: u32,
    pub hooks: Option<Rc<dyn ResourceHooks>>,
}

impl ResourceDescriptor {
    pub fn new(title: &str, resource: &str, fields: Vec<FieldDescriptor>) -> Self {
        Self {
            title: title.to_string(),
            resource: resource.to_string(),
            fields,
            page_size: DEFAULT_PAGE_SIZE,
            hooks: None,
        }
    }

    pub fn page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size.max(1);
        self
    }

    pub fn hooks(mut self, hooks: impl ResourceHooks + 'static) -> Self {
        self.hooks = Some(Rc::new(hooks));
        self
    }

    /// Whether `field` is left out of forms and tables for this resource.
    pub fn is_suppressed(&self, field: &FieldDescriptor) -> bool {
        field.name == AUDIT_FIELD
            || SUPPRESSED_FIELDS
                .iter()
                .any(|(resource, name)| *resource == self.resource && *name == field.name)
    }

    /// Fields shown in the screen's own form and as table columns, in order.
    pub fn visible_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .filter(|f| !f.hidden && !self.is_suppressed(f))
    }

    /// Fields a user fills in when the entity is created from another form.
    pub fn quick_create_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.visible_fields().filter(|f| !f.read_only)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Checks the descriptor invariants: unique field names, selects with an
    /// enumeration key, and a positive page size.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let mut seen = HashSet::new();
        for field in &self.fields {
            if !seen.insert(field.name.as_str()) {
                return Err(DescriptorError::DuplicateField {
                    resource: self.resource.clone(),
                    field: field.name.clone(),
                });
            }
            if field.field_type == crate::model::field::FieldType::Select
                && field.enum_key.is_none()
            {
                return Err(DescriptorError::MissingEnumKey {
                    resource: self.resource.clone(),
                    field: field.name.clone(),
                });
            }
        }
        if self.page_size == 0 {
            return Err(DescriptorError::InvalidPageSize(self.resource.clone()));
        }
        Ok(())
    }
}

impl fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("title", &self.title)
            .field("resource", &self.resource)
            .field("fields", &self.fields)
            .field("page_size", &self.page_size)
            .field("hooks", &self.hooks.is_some())
            .finish()
    }
}

impl PartialEq for ResourceDescriptor {
    fn eq(&self, other: &Self) -> bool {
        self.resource == other.resource
            && self.title == other.title
            && self.fields == other.fields
            && self.page_size == other.page_size
    }
}
