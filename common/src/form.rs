//! Form state for one modal: current widget values, suggestion lists for
//! foreign keys, enum options, and serialization into a request payload.

use serde_json::{Number, Value};

use crate::label::{display_label, prefill_label};
use crate::model::enums::EnumGroups;
use crate::model::field::{FieldDescriptor, FieldType};
use crate::model::item::{Item, ItemId, Payload};

/// One entry of a foreign-key suggestion list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub label: String,
    pub id: ItemId,
}

/// Filter box + hidden id pair of a foreign-key field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ForeignKeyInput {
    /// Text typed (or prefilled) in the filter box.
    pub text: String,
    /// Value of the hidden holder; `None` serializes as `null`.
    pub id: Option<ItemId>,
    pub suggestions: Vec<Suggestion>,
}

impl ForeignKeyInput {
    /// Replaces the suggestion list with one labeled entry per item.
    pub fn set_suggestions(&mut self, items: &[Item]) {
        self.suggestions = items
            .iter()
            .filter_map(|item| {
                Some(Suggestion {
                    label: display_label(Some(item)),
                    id: item.id()?,
                })
            })
            .collect();
    }

    /// Resolves typed text to an id by exact label match; anything else
    /// clears the hidden id.
    pub fn resolve(&mut self, text: &str) {
        self.text = text.to_string();
        self.id = self
            .suggestions
            .iter()
            .find(|s| s.label == text)
            .map(|s| s.id);
    }

    /// Selects a freshly created record and adds it to the suggestions.
    pub fn select_new(&mut self, item: &Item) {
        let label = display_label(Some(item));
        self.text = label.clone();
        self.id = item.id();
        if let Some(id) = item.id() {
            self.suggestions.push(Suggestion { label, id });
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldState {
    Input(String),
    Checkbox(bool),
    /// `options` stays `None` until the enumeration group arrives.
    Select {
        value: String,
        options: Option<Vec<String>>,
    },
    ForeignKey(ForeignKeyInput),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub descriptor: FieldDescriptor,
    pub state: FieldState,
}

impl FormField {
    fn new(descriptor: &FieldDescriptor) -> Self {
        let mut field = Self {
            descriptor: descriptor.clone(),
            state: FieldState::Input(String::new()),
        };
        field.state = field.initial_state(None);
        field
    }

    /// State after a form reset. Loaded suggestions and enum options are
    /// kept, as a DOM form reset keeps its `<option>` children.
    fn initial_state(&self, previous: Option<&FieldState>) -> FieldState {
        let default = self.descriptor.default_value.clone().unwrap_or_default();
        if self.descriptor.is_foreign_key() {
            let suggestions = match previous {
                Some(FieldState::ForeignKey(fk)) => fk.suggestions.clone(),
                _ => Vec::new(),
            };
            return FieldState::ForeignKey(ForeignKeyInput {
                suggestions,
                ..ForeignKeyInput::default()
            });
        }
        match self.descriptor.field_type {
            FieldType::Checkbox => FieldState::Checkbox(default == "true"),
            FieldType::Select => FieldState::Select {
                value: default,
                options: match previous {
                    Some(FieldState::Select { options, .. }) => options.clone(),
                    _ => None,
                },
            },
            _ => FieldState::Input(default),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    fields: Vec<FormField>,
}

impl FormState {
    pub fn new<'a>(fields: impl IntoIterator<Item = &'a FieldDescriptor>) -> Self {
        Self {
            fields: fields.into_iter().map(FormField::new).collect(),
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.descriptor.name == name)
    }

    fn state_mut(&mut self, name: &str) -> Option<&mut FieldState> {
        self.fields
            .iter_mut()
            .find(|f| f.descriptor.name == name)
            .map(|f| &mut f.state)
    }

    pub fn foreign_key(&self, name: &str) -> Option<&ForeignKeyInput> {
        match &self.field(name)?.state {
            FieldState::ForeignKey(fk) => Some(fk),
            _ => None,
        }
    }

    fn foreign_key_mut(&mut self, name: &str) -> Option<&mut ForeignKeyInput> {
        match self.state_mut(name)? {
            FieldState::ForeignKey(fk) => Some(fk),
            _ => None,
        }
    }

    /// Foreign-key fields present in this form.
    pub fn foreign_keys(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields
            .iter()
            .map(|f| &f.descriptor)
            .filter(|d| d.is_foreign_key())
    }

    pub fn has_enum_selects(&self) -> bool {
        self.fields
            .iter()
            .any(|f| matches!(f.state, FieldState::Select { .. }))
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.state = field.initial_state(Some(&field.state));
        }
    }

    /// Sets the value of a text-like input or select. Returns `false` when
    /// the field does not exist or is not of that kind.
    pub fn set_value(&mut self, name: &str, new_value: &str) -> bool {
        match self.state_mut(name) {
            Some(FieldState::Input(value)) | Some(FieldState::Select { value, .. }) => {
                *value = new_value.to_string();
                true
            }
            _ => false,
        }
    }

    pub fn set_checked(&mut self, name: &str, checked: bool) -> bool {
        match self.state_mut(name) {
            Some(FieldState::Checkbox(value)) => {
                *value = checked;
                true
            }
            _ => false,
        }
    }

    /// Text typed into a foreign-key filter box.
    pub fn type_foreign_key(&mut self, name: &str, text: &str) -> bool {
        match self.foreign_key_mut(name) {
            Some(fk) => {
                fk.resolve(text);
                true
            }
            None => false,
        }
    }

    pub fn set_suggestions(&mut self, name: &str, items: &[Item]) -> bool {
        match self.foreign_key_mut(name) {
            Some(fk) => {
                fk.set_suggestions(items);
                true
            }
            None => false,
        }
    }

    /// Injects a record created in a nested modal into `name`.
    pub fn select_new(&mut self, name: &str, item: &Item) -> bool {
        match self.foreign_key_mut(name) {
            Some(fk) => {
                fk.select_new(item);
                true
            }
            None => false,
        }
    }

    /// Fills every select whose enumeration group is present. Selects with
    /// no matching group keep their placeholder.
    pub fn populate_enums(&mut self, enums: &EnumGroups) {
        for field in &mut self.fields {
            let Some(group) = field
                .descriptor
                .enum_key
                .as_deref()
                .and_then(|key| enums.group(key))
            else {
                continue;
            };
            if let FieldState::Select { options, .. } = &mut field.state {
                *options = Some(group.to_vec());
            }
        }
    }

    /// Loads an already fetched record for editing.
    pub fn prefill(&mut self, item: &Item) {
        for field in &mut self.fields {
            let name = field.descriptor.name.as_str();
            let raw = item.get(name);
            match &mut field.state {
                FieldState::ForeignKey(fk) => {
                    fk.text = prefill_label(item, &field.descriptor);
                    fk.id = raw.and_then(value_as_id);
                }
                FieldState::Checkbox(checked) => {
                    *checked = matches!(raw, Some(Value::Bool(true)));
                }
                FieldState::Input(value) | FieldState::Select { value, .. } => {
                    *value = raw.map(value_as_text).unwrap_or_default();
                }
            }
        }
    }

    /// Serializes the form: foreign keys as integer or `null`, checkboxes as
    /// booleans, everything else as the raw string.
    pub fn to_payload(&self) -> Payload {
        let mut payload = Payload::default();
        for field in &self.fields {
            let value = match &field.state {
                FieldState::ForeignKey(fk) => fk
                    .id
                    .map(|id| Value::Number(Number::from(id)))
                    .unwrap_or(Value::Null),
                FieldState::Checkbox(checked) => Value::Bool(*checked),
                FieldState::Input(value) | FieldState::Select { value, .. } => {
                    Value::String(value.clone())
                }
            };
            payload.insert(&field.descriptor.name, value);
        }
        payload
    }
}

fn value_as_id(value: &Value) -> Option<ItemId> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn value_as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
