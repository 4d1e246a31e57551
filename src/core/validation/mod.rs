//! Request validation
//!
//! Write payloads pass through a fixed pipeline before they reach a handler:
//! parse JSON, apply field filters, deserialize into the typed schema, then
//! run the schema's declarative rules. Any failure short-circuits with a
//! client error.

pub mod extractor;
pub mod filters;

pub use extractor::{RequestSchema, Validated};
pub use filters::FilterRule;
