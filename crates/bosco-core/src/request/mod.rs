//! Request loading and validation.
//!
//! Requests are YAML or JSON documents validated against an embedded JSON
//! Schema, then checked against the input control ranges.

mod parser;
mod schema;

pub use parser::RequestError;
pub use schema::{request_schema, validate_request_schema, SchemaError};
