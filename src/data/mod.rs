mod key_value;
mod repository;

pub use {
    key_value::{EframeStore, KeyValueStore, MemoryStore},
    repository::{MemoryRepository, Repository},
};
