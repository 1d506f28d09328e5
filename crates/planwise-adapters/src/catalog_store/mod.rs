//! Option catalog stores.

mod memory;

pub use memory::InMemoryCatalog;
