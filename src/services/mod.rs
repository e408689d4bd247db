pub mod storage_service;

pub use storage_service::{BrowserStorage, CartStorage, KeyValueStore, MemoryStorage};
