//! Storage backends for the service layer
//!
//! Only a process-local store exists; products live as long as the process.

pub mod memory_store;

pub use memory_store::InMemoryProductStore;
