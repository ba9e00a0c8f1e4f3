//! Client-side search over the loaded record lists.
//!
//! Each record type names the fields a search looks at. A record matches when
//! any of those fields contains the case-folded query. The empty query
//! matches everything.

use crate::types::{Company, Project};

/// A record type that can be searched from the dashboard
pub trait Searchable {
    /// The fields a search looks at, in display order
    fn search_fields(&self) -> Vec<Option<&str>>;
}

impl Searchable for Company {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.company_name.as_deref(),
            self.contact_person_name.as_deref(),
            self.email.as_deref(),
        ]
    }
}

impl Searchable for Project {
    fn search_fields(&self) -> Vec<Option<&str>> {
        vec![
            self.name.as_deref(),
            self.email.as_deref(),
            self.project_type.as_deref(),
        ]
    }
}

/// A case-folded search query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches<T: Searchable>(&self, record: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        record
            .search_fields()
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&self.needle))
    }

    /// Indices of the matching records, in their original order
    pub fn matching_indices<T: Searchable>(&self, records: &[T]) -> Vec<usize> {
        records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(*record))
            .map(|(i, _)| i)
            .collect()
    }
}

/// The order-preserving subsequence of `records` matching `query`
pub fn filter_records<T: Searchable + Clone>(records: &[T], query: &str) -> Vec<T> {
    let query = SearchQuery::new(query);
    records
        .iter()
        .filter(|record| query.matches(*record))
        .cloned()
        .collect()
}
