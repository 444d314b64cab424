// Library root
// -----------
// This crate exposes the pieces of the books CLI as a library. The binary
// (`main.rs`) wires them together for a single interactive run.
//
// Module responsibilities:
// - `model`: the book and catalog shapes decoded from JSON.
// - `service`: fetch, sort and search operations over a pluggable
//   `BookSource`.
// - `api`: the HTTP `BookSource` used in production.
// - `table`: column-aligned rendering of results.
// - `ui`: menu prompts and dispatch.
// - `config`, `error`: environment settings and error types.
pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod service;
pub mod table;
pub mod ui;

pub use error::{CatalogError, ConfigError, MenuError};
pub use model::{Book, Catalog};
pub use service::{BookService, BookSource};
