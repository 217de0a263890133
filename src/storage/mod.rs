pub mod memory;

pub use memory::{Item, ItemPatch, ItemStore};
