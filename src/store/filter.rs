use std::collections::{BTreeMap, BTreeSet};

/// Access to the free-text fields a record can be searched by
pub trait Searchable {
    /// Fields considered when matching a search string
    fn searchable_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match over the searchable fields
    ///
    /// An empty needle matches every record.
    fn matches_search(&self, needle: &str) -> bool {
        if needle.is_empty() {
            return true;
        }
        let needle = needle.to_lowercase();
        self.searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// Access to the categorical facet values a record exposes
pub trait Faceted {
    /// The record's value for a facet category, if it has one
    fn facet_value(&self, category: &str) -> Option<&str>;
}

/// Free-text search plus active facet selections applied to a store
///
/// A category with no active values matches every record, mirroring the
/// "all" option in the console's dropdowns.
#[derive(Debug, Clone, Default)]
pub struct FilterQuery {
    search: String,
    facets: BTreeMap<String, BTreeSet<String>>,
}

impl FilterQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the free-text search string
    pub fn with_search<S: Into<String>>(mut self, search: S) -> Self {
        self.search = search.into();
        self
    }

    /// Activate a facet value within a category
    pub fn with_facet<C, V>(mut self, category: C, value: V) -> Self
    where
        C: Into<String>,
        V: Into<String>,
    {
        self.facets
            .entry(category.into())
            .or_default()
            .insert(value.into());
        self
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// True when neither search nor facets are active
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.facets.values().all(|values| values.is_empty())
    }

    /// Whether a record satisfies the search string and every active facet
    pub fn matches<T>(&self, record: &T) -> bool
    where
        T: Searchable + Faceted,
    {
        if !record.matches_search(&self.search) {
            return false;
        }

        self.facets
            .iter()
            .filter(|(_, values)| !values.is_empty())
            .all(|(category, values)| {
                record
                    .facet_value(category)
                    .is_some_and(|value| values.contains(value))
            })
    }
}

/// Stable filter over a record slice
///
/// Returns the subsequence of records matching the query, in original
/// order. Never fails; an empty input yields an empty result.
pub fn filter<'a, T>(records: &'a [T], query: &FilterQuery) -> Vec<&'a T>
where
    T: Searchable + Faceted,
{
    records.iter().filter(|record| query.matches(*record)).collect()
}
