use serde::{Deserialize, Serialize};

use crate::naming;

/// Kind of widget a field renders as and how its value is serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    #[default]
    Text,
    Number,
    Checkbox,
    Select,
    Date,
    Time,
    DateTime,
    Password,
}

impl FieldType {
    /// Value of the `type` attribute for plain inputs.
    pub fn input_type(&self) -> &'static str {
        match self {
            Self::Text | Self::Select => "text",
            Self::Number => "number",
            Self::Checkbox => "checkbox",
            Self::Date => "date",
            Self::Time => "time",
            Self::DateTime => "datetime-local",
            Self::Password => "password",
        }
    }
}

/// Declarative description of one form field / table column.
///
/// A `Select` field always carries the enumeration group that populates
/// it: the only way to build one is [`FieldDescriptor::select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: String,
    pub label: String,
    pub field_type: FieldType,
    pub required: bool,
    pub read_only: bool,
    pub hidden: bool,
    pub enum_key: Option<String>,
    pub default_value: Option<String>,
}

impl FieldDescriptor {
    fn with_type(name: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            field_type,
            required: false,
            read_only: false,
            hidden: false,
            enum_key: None,
            default_value: None,
        }
    }

    pub fn text(name: &str, label: &str) -> Self {
        Self::with_type(name, label, FieldType::Text)
    }

    pub fn number(name: &str, label: &str) -> Self {
        Self::with_type(name, label, FieldType::Number)
    }

    pub fn checkbox(name: &str, label: &str) -> Self {
        Self::with_type(name, label, FieldType::Checkbox)
    }

    pub fn date(name: &str, label: &str) -> Self {
        Self::with_type(name, label, FieldType::Date)
    }

    pub fn time(name: &str, label: &str) -> Self {
        Self::with_type(name, label, FieldType::Time)
    }

    pub fn password(name: &str, label: &str) -> Self {
        Self::with_type(name, label, FieldType::Password)
    }

    /// Select populated from the enumeration group `enum_key`.
    pub fn select(name: &str, label: &str, enum_key: &str) -> Self {
        Self {
            enum_key: Some(enum_key.to_string()),
            ..Self::with_type(name, label, FieldType::Select)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn default_value(mut self, value: &str) -> Self {
        self.default_value = Some(value.to_string());
        self
    }

    /// `true` when the name follows the foreign-key convention (`id_` prefix).
    pub fn is_foreign_key(&self) -> bool {
        naming::is_foreign_key(&self.name)
    }

    /// Resource referenced by a foreign-key field.
    pub fn related_resource(&self) -> Option<String> {
        self.is_foreign_key()
            .then(|| naming::related_resource_name(&self.name))
    }
}
