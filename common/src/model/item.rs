use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Primary key of a backend record.
pub type ItemId = i64;

/// A resource instance exactly as the backend returns it.
///
/// The shape is owned by the backend; the only assumption is an `id`
/// member. Related records may be embedded as nested objects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Item(Map<String, Value>);

impl Item {
    pub fn id(&self) -> Option<ItemId> {
        match self.0.get("id")? {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Nested object stored under `key`, if any.
    pub fn object(&self, key: &str) -> Option<Item> {
        match self.0.get(key)? {
            Value::Object(map) => Some(Item(map.clone())),
            _ => None,
        }
    }

    /// Non-empty textual form of `key`: strings as-is, numbers formatted.
    /// `None` for missing, null, empty, zero, or structured values.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) if n.as_f64() != Some(0.0) => Some(n.to_string()),
            _ => None,
        }
    }
}

impl From<Map<String, Value>> for Item {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Item {
    type Error = Value;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(other),
        }
    }
}

/// Body sent to the create/update operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn insert(&mut self, key: &str, value: Value) {
        self.0.insert(key.to_string(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.0.remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

/// One page of a resource listing.
///
/// The backend reports the page count as `pages`; `total_pages` is accepted
/// as well. A missing count means a single page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListPage {
    #[serde(default)]
    pub items: Vec<Item>,
    #[serde(default = "one", alias = "pages")]
    pub total_pages: u32,
}

fn one() -> u32 {
    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn item(value: Value) -> Item {
        Item::try_from(value).expect("object")
    }

    #[test]
    fn id_accepts_numbers_and_numeric_strings() {
        assert_eq!(item(json!({"id": 7})).id(), Some(7));
        assert_eq!(item(json!({"id": "12"})).id(), Some(12));
        assert_eq!(item(json!({"nombre": "x"})).id(), None);
    }

    #[test]
    fn text_skips_empty_and_zero_values() {
        let it = item(json!({"a": "", "b": 0, "c": 15, "d": "x", "e": null}));
        assert_eq!(it.text("a"), None);
        assert_eq!(it.text("b"), None);
        assert_eq!(it.text("c").as_deref(), Some("15"));
        assert_eq!(it.text("d").as_deref(), Some("x"));
        assert_eq!(it.text("e"), None);
    }

    #[test]
    fn list_page_reads_backend_page_count() {
        let page: ListPage =
            serde_json::from_value(json!({"items": [{"id": 1}], "pages": 4, "total": 180}))
                .expect("page");
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.items.len(), 1);

        let page: ListPage = serde_json::from_value(json!({"items": []})).expect("page");
        assert_eq!(page.total_pages, 1);
    }
}
