//! Storage implementations for the repository traits

pub mod in_memory;

pub use in_memory::{InMemoryCategoryRepository, InMemoryTaskRepository};
