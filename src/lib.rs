//! Movie Link Lookup Service
//!
//! Maps a movie title and release year to a stored link, tolerating typos and release noise
//! (`1080p`, `WEBRip`, punctuation) in the queried title.
//!
//! ## Modules
//! - **`catalog`**: The immutable (title, year) -> link table and its line-oriented file loader.
//! - **`search`**: Title normalization, sequence similarity and the exact-then-fuzzy matcher,
//!   plus the HTTP handler exposing it.
//! - **`server`**: Router assembly (endpoint and CORS policy) and the serve loop.
//! - **`config`**: Bind address and catalog path from the environment.
//! - **`error`**: Library error type.

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod server;
