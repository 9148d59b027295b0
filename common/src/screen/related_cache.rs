use std::collections::BTreeMap;

use crate::model::item::Item;

/// Most recently fetched items per related resource, for one screen.
///
/// Rebuilt when the screen loads; records created from nested modals are
/// appended in place.
#[derive(Debug, Clone, Default)]
pub struct RelatedCache {
    entries: BTreeMap<String, Vec<Item>>,
}

impl RelatedCache {
    /// Stores a fresh fetch of `resource`, keeping cached records the fetch
    /// does not contain.
    pub fn merge(&mut self, resource: &str, fetched: Vec<Item>) -> &[Item] {
        let merged = self.merged_with(resource, fetched);
        self.entries.insert(resource.to_string(), merged);
        self.get(resource).unwrap_or_default()
    }

    /// `fetched` followed by the cached records of `resource` whose id it
    /// lacks; the cache itself is untouched.
    pub fn merged_with(&self, resource: &str, mut fetched: Vec<Item>) -> Vec<Item> {
        let Some(cached) = self.entries.get(resource) else {
            return fetched;
        };
        let missing: Vec<Item> = cached
            .iter()
            .filter(|item| {
                item.id()
                    .is_some_and(|id| !fetched.iter().any(|f| f.id() == Some(id)))
            })
            .cloned()
            .collect();
        fetched.extend(missing);
        fetched
    }

    pub fn append(&mut self, resource: &str, item: Item) {
        self.entries
            .entry(resource.to_string())
            .or_default()
            .push(item);
    }

    /// `None` until the resource has been fetched or appended to.
    pub fn get(&self, resource: &str) -> Option<&[Item]> {
        self.entries.get(resource).map(Vec::as_slice)
    }
}
