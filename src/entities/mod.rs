//! Domain entities exposed by the service

pub mod category;
pub mod macros;
pub mod task;

pub use category::Category;
pub use task::Task;
