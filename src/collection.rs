//! Item Collection
//!
//! Newest-first list of items. Every transition builds a new collection
//! value instead of editing in place, so installing it in the store is
//! the only change signal the view needs.

use serde::Serialize;

use crate::models::{Item, ItemId};
use crate::stats::PackingStats;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ItemCollection {
    items: Vec<Item>,
}

impl ItemCollection {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.get(id).is_some()
    }

    pub fn stats(&self) -> PackingStats {
        PackingStats::of(&self.items)
    }

    /// Prepend `item`. `None` if its id is already taken.
    pub fn with_added(&self, item: Item) -> Option<Self> {
        if self.contains(item.id) {
            return None;
        }
        let mut items = Vec::with_capacity(self.items.len() + 1);
        items.push(item);
        items.extend(self.items.iter().cloned());
        Some(Self { items })
    }

    /// Drop the item with `id`; unknown ids leave the items as they were
    pub fn without(&self, id: ItemId) -> Self {
        Self {
            items: self.items.iter().filter(|item| item.id != id).cloned().collect(),
        }
    }

    pub fn with_packed_toggled(&self, id: ItemId) -> Self {
        self.with_updated(id, |item| item.packed = !item.packed)
    }

    /// The color string is taken as-is
    pub fn with_color(&self, id: ItemId, color: &str) -> Self {
        self.with_updated(id, |item| item.color = color.to_string())
    }

    fn with_updated(&self, id: ItemId, update: impl Fn(&mut Item)) -> Self {
        Self {
            items: self
                .items
                .iter()
                .map(|item| {
                    let mut item = item.clone();
                    if item.id == id {
                        update(&mut item);
                    }
                    item
                })
                .collect(),
        }
    }
}

impl From<Vec<Item>> for ItemCollection {
    fn from(items: Vec<Item>) -> Self {
        Self { items }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DEFAULT_COLOR;

    fn make_item(id: ItemId, description: &str, quantity: i64) -> Item {
        Item::new(id, description, quantity, DEFAULT_COLOR)
    }

    fn ids(collection: &ItemCollection) -> Vec<ItemId> {
        collection.items().iter().map(|item| item.id).collect()
    }

    fn sample() -> ItemCollection {
        ItemCollection::from(vec![
            make_item(3, "Charger", 1),
            make_item(2, "Socks", 3),
            make_item(1, "Passport", 1),
        ])
    }

    #[test]
    fn test_add_prepends() {
        let before = sample();
        let after = before.with_added(make_item(4, "Hat", 1)).unwrap();
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(ids(&after), vec![4, 3, 2, 1]);
        // The previous value is untouched
        assert_eq!(ids(&before), vec![3, 2, 1]);
    }

    #[test]
    fn test_add_duplicate_id_is_rejected() {
        assert!(sample().with_added(make_item(2, "Other", 1)).is_none());
    }

    #[test]
    fn test_delete() {
        let after = sample().without(2);
        assert_eq!(ids(&after), vec![3, 1]);
        assert_eq!(after.get(3), sample().get(3));
        assert_eq!(sample().without(99), sample());
    }

    #[test]
    fn test_toggle_packed() {
        let once = sample().with_packed_toggled(2);
        assert!(once.get(2).unwrap().packed);
        assert!(!once.get(1).unwrap().packed);
        assert!(!once.get(3).unwrap().packed);
        assert_eq!(once.get(2).unwrap().description, "Socks");

        let twice = once.with_packed_toggled(2);
        assert_eq!(twice, sample());

        assert_eq!(sample().with_packed_toggled(99), sample());
    }

    #[test]
    fn test_change_color() {
        let after = sample().with_color(1, "#ff0000");
        assert_eq!(after.get(1).unwrap().color, "#ff0000");
        assert_eq!(after.get(2).unwrap().color, DEFAULT_COLOR);
        assert_eq!(after.get(3), sample().get(3));
        assert_eq!(ids(&after), ids(&sample()));

        // No format check on the value
        let odd = sample().with_color(3, "not-a-color");
        assert_eq!(odd.get(3).unwrap().color, "not-a-color");

        assert_eq!(sample().with_color(99, "#000000"), sample());
    }

    #[test]
    fn test_packing_scenario() {
        let list = ItemCollection::default()
            .with_added(make_item(1, "Passport", 1))
            .unwrap();
        assert_eq!(ids(&list), vec![1]);

        let list = list.with_added(make_item(2, "Socks", 3)).unwrap();
        assert_eq!(ids(&list), vec![2, 1]);

        let list = list.with_packed_toggled(2);
        assert!(list.get(2).unwrap().packed);
        assert!(!list.get(1).unwrap().packed);

        let list = list.without(1);
        assert_eq!(ids(&list), vec![2]);
        assert_eq!(list.get(2).unwrap().description, "Socks");
    }

    #[test]
    fn test_serializes_as_list() {
        let list = ItemCollection::from(vec![make_item(5, "Hat", 2)]);
        let json = serde_json::to_value(&list).unwrap();
        assert_eq!(json[0]["description"], "Hat");
        assert_eq!(json[0]["quantity"], 2);
        assert_eq!(json[0]["packed"], false);
    }
}
