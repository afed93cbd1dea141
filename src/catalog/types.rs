use std::collections::HashMap;

/// A single parsed catalog line.
///
/// `title` is lower-cased and trimmed but keeps its internal punctuation; `year` holds the
/// four digits captured from the source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub title: String,
    pub year: String,
    pub link: String,
}

/// Immutable lookup table of (title, year) -> link.
///
/// Built once from a sequence of entries; a later entry with the same key overwrites the
/// earlier link. Distinct titles are remembered in the order they were first seen, which is
/// the order the fuzzy matcher scans them in.
#[derive(Debug, Default)]
pub struct Catalog {
    links: HashMap<String, HashMap<String, String>>,
    titles: Vec<String>,
    len: usize,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the link stored under the exact (title, year) key.
    pub fn get(&self, title: &str, year: &str) -> Option<&str> {
        self.links
            .get(title)
            .and_then(|years| years.get(year))
            .map(String::as_str)
    }

    /// Distinct titles, in first-seen order.
    pub fn titles(&self) -> &[String] {
        &self.titles
    }

    /// Number of distinct (title, year) keys.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn insert(&mut self, entry: CatalogEntry) {
        let CatalogEntry { title, year, link } = entry;

        if !self.links.contains_key(&title) {
            self.titles.push(title.clone());
        }

        let years = self.links.entry(title).or_default();
        if years.insert(year, link).is_none() {
            self.len += 1;
        }
    }
}

impl FromIterator<CatalogEntry> for Catalog {
    fn from_iter<I: IntoIterator<Item = CatalogEntry>>(iter: I) -> Self {
        let mut catalog = Catalog::empty();
        for entry in iter {
            catalog.insert(entry);
        }
        catalog
    }
}
