//! Task entity module
//!
//! Tasks are only reachable through their category; they have no routes of
//! their own.

pub mod model;

pub use model::Task;
