//! Shared helpers for the Foodtuck front end: configuration, local key/value
//! storage and the cart badge counter.

pub mod cart;
pub mod config;
pub mod local_storage;
pub mod path_processing;

pub use cart::{CART_STORAGE_KEY, CartCounter, distinct_item_count, read_cart_count};
pub use config::{ConfigError, ContentConfig, FoodtuckConfig};
pub use local_storage::{FileLocalStorage, LocalStorage, MemoryLocalStorage, StorageError};
pub use path_processing::{expand_tilde, path_from_env, string_from_env};
