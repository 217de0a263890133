use serde::{Deserialize, Serialize};
use serde_json::Number;
use tracing::debug;

/// A single shopping list entry.
///
/// The price is kept as the JSON number the client sent, so `3` stays `3`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,
    pub price: Number,
}

/// Fields to overwrite on an existing item. `None` leaves the field as is.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub price: Option<Number>,
}

/// Ordered in-memory item collection.
///
/// Names are not unique. Every lookup resolves to the first match in
/// insertion order.
#[derive(Debug, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All items in insertion order
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append an item to the end of the collection
    pub fn insert(&mut self, item: Item) -> &Item {
        debug!(name = %item.name, price = %item.price, "Inserting item");
        self.items.push(item);
        &self.items[self.items.len() - 1]
    }

    /// First item with exactly this name
    pub fn get(&self, name: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Apply `patch` to the first item named `name` and return its new state
    pub fn update(&mut self, name: &str, patch: ItemPatch) -> Option<&Item> {
        let item = self.items.iter_mut().find(|item| item.name == name)?;

        if let Some(new_name) = patch.name {
            item.name = new_name;
        }
        if let Some(price) = patch.price {
            item.price = price;
        }

        Some(item)
    }

    /// Remove the first item named `name`
    pub fn remove(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name == name)?;
        Some(self.items.remove(index))
    }
}
