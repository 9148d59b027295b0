//! Deterministic page template derived from a resource descriptor: element
//! ids, form widgets in field order, and table columns. The frontend turns
//! it into markup; the same widget list drives the level-0 form state.

use crate::model::field::{FieldDescriptor, FieldType};
use crate::model::resource::ResourceDescriptor;

/// DOM ids of a screen, all prefixed with the resource name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementIds {
    pub form: String,
    pub table: String,
    pub error: String,
    pub cancel: String,
    pub modal: String,
    pub new_button: String,
    pub pagination: String,
}

impl ElementIds {
    fn new(resource: &str) -> Self {
        Self {
            form: format!("{resource}-form"),
            table: format!("{resource}-table"),
            error: format!("{resource}-error"),
            cancel: format!("{resource}-cancel"),
            modal: format!("{resource}-modal"),
            new_button: format!("{resource}-new-btn"),
            pagination: format!("{resource}-pagination"),
        }
    }
}

/// Ids of a foreign-key widget inside the form at `scope`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKeyIds {
    pub search: String,
    pub list: String,
}

impl ForeignKeyIds {
    pub fn new(scope: &str, field: &str) -> Self {
        Self {
            search: format!("{scope}-search-{field}"),
            list: format!("{scope}-list-{field}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetKind {
    /// Filter box + suggestion list + hidden id + "create related" trigger.
    ForeignKey { related: String },
    /// Select populated from an enumeration group; shows a loading
    /// placeholder until then.
    Select { enum_key: String },
    Checkbox,
    Input { input_type: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormWidget {
    pub name: String,
    pub label: String,
    pub required: bool,
    pub read_only: bool,
    pub kind: WidgetKind,
}

impl FormWidget {
    pub fn from_field(field: &FieldDescriptor) -> Self {
        let kind = if let Some(related) = field.related_resource() {
            WidgetKind::ForeignKey { related }
        } else {
            match (field.field_type, &field.enum_key) {
                (FieldType::Select, Some(key)) => WidgetKind::Select {
                    enum_key: key.clone(),
                },
                (FieldType::Checkbox, _) => WidgetKind::Checkbox,
                (other, _) => WidgetKind::Input {
                    input_type: other.input_type(),
                },
            }
        };
        Self {
            name: field.name.clone(),
            label: field.label.clone(),
            required: field.required,
            read_only: field.read_only,
            kind,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableColumn {
    pub name: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageTemplate {
    pub title: String,
    pub resource: String,
    pub ids: ElementIds,
    pub widgets: Vec<FormWidget>,
    /// Data columns between the leading `ID` and trailing `Acciones` columns.
    pub columns: Vec<TableColumn>,
}

impl PageTemplate {
    pub fn from_descriptor(descriptor: &ResourceDescriptor) -> Self {
        Self {
            title: descriptor.title.clone(),
            resource: descriptor.resource.clone(),
            ids: ElementIds::new(&descriptor.resource),
            widgets: descriptor.visible_fields().map(FormWidget::from_field).collect(),
            columns: descriptor
                .visible_fields()
                .map(|f| TableColumn {
                    name: f.name.clone(),
                    label: f.label.clone(),
                })
                .collect(),
        }
    }
}
