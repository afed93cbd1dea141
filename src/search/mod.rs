//! Search Module
//!
//! Resolves a user supplied (title, year) pair to a catalog link.
//!
//! ## Pipeline
//! 1. **Normalize**: strip release tags (`1080p`, `webrip`, ...) and everything that isn't an
//!    ASCII letter or digit.
//! 2. **Exact lookup**: (normalized title, year) against the catalog.
//! 3. **Fuzzy lookup**: the single closest catalog title by sequence similarity, re-checked
//!    under the same year.
//!
//! ## Submodules
//! - **`normalizer`**: Query title cleanup.
//! - **`similarity`**: Ratcliff/Obershelp ratio and closest-candidate selection.
//! - **`matcher`**: The two-stage lookup.
//! - **`handlers`**: HTTP handler for the Axum web server.
//! - **`types`**: Data Transfer Objects for the endpoint.

pub mod handlers;
pub mod matcher;
pub mod normalizer;
pub mod similarity;
pub mod types;
