use super::types::{Catalog, CatalogEntry};
use crate::error::{MovieLinksError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Default catalog filename, resolved against the working directory.
pub const DEFAULT_CATALOG_FILE: &str = "final_cleaned_links.txt";

// Title is everything before the first "(YYYY) - http..." occurrence.
static LINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\(([0-9]{4})\) - (http.+)").expect("catalog line pattern is valid")
});

/// Parses one `TITLE(YEAR) - URL` line. Returns `None` for lines of any other shape.
pub fn parse_line(line: &str) -> Option<CatalogEntry> {
    let caps = LINE_PATTERN.captures(line)?;

    Some(CatalogEntry {
        title: caps[1].to_lowercase().trim().to_string(),
        year: caps[2].trim().to_string(),
        link: caps[3].to_string(),
    })
}

/// Builds a catalog from the full text of a catalog file, skipping lines that don't parse.
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn parse_catalog(text: &str) -> Catalog {
    text.split(['\r', '\n']).filter_map(parse_line).collect()
}

/// Reads and parses the catalog file, reporting any I/O failure (including a missing file).
pub fn read_catalog(path: &Path) -> Result<Catalog> {
    let bytes = std::fs::read(path).map_err(|source| MovieLinksError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_catalog(&String::from_utf8_lossy(&bytes)))
}

/// Loads the catalog at `path`, degrading to an empty catalog when the file is missing or
/// unreadable. The service keeps running either way and answers every query as not found.
pub fn load(path: impl AsRef<Path>) -> Catalog {
    let path = path.as_ref();

    if !path.exists() {
        tracing::warn!("Catalog file {} not found, serving an empty catalog", path.display());
        return Catalog::empty();
    }

    tracing::info!("Catalog file {} exists, reading", path.display());

    match read_catalog(path) {
        Ok(catalog) => {
            tracing::info!("Loaded {} movies", catalog.len());
            catalog
        }
        Err(e) => {
            tracing::error!("{}, serving an empty catalog", e);
            Catalog::empty()
        }
    }
}
