use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Enumeration groups published by the backend, e.g.
/// `{"tickets_tipo": ["Entrada", "Salida"]}`. Values keep backend order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnumGroups(BTreeMap<String, Vec<String>>);

impl EnumGroups {
    pub fn group(&self, key: &str) -> Option<&[String]> {
        self.0.get(key).map(Vec::as_slice)
    }

    pub fn insert(&mut self, key: &str, values: Vec<String>) {
        self.0.insert(key.to_string(), values);
    }
}
