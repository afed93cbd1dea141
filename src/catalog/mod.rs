//! Catalog Module
//!
//! The read-only table of movie links the service answers from.
//!
//! ## Lifecycle
//! The catalog is built once at process start from a line-oriented text file and is never
//! mutated afterwards. Request handlers share it through an `Arc`, so no locking is involved.
//!
//! ## Submodules
//! - **`types`**: `CatalogEntry` and the `Catalog` lookup table keyed by (title, year).
//! - **`loader`**: Parses `TITLE(YEAR) - URL` lines and reads the catalog file.

pub mod loader;
pub mod types;
